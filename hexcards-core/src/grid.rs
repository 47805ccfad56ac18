//! Pixel-space hex grid generation
//!
//! Cells are pointy-top hexagons laid out around the origin in axial
//! coordinates. Emission order is center first, then ring by ring, so the
//! renderer can rely on it for layering.

use crate::board::{spiral, Axial};
use serde::{Deserialize, Serialize};

/// Smallest corner-to-corner diameter the generator accepts
pub const MIN_DIAMETER: f64 = 4.0;

/// A point in pixel space
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: Point2) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// One grid cell: axial position, pixel center and its six corners
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HexCell {
    pub q: i32,
    pub r: i32,
    pub x: f64,
    pub y: f64,
    pub points: [Point2; 6],
}

impl HexCell {
    pub fn axial(&self) -> Axial {
        Axial::new(self.q, self.r)
    }

    pub fn center(&self) -> Point2 {
        Point2::new(self.x, self.y)
    }

    pub fn is_origin(&self) -> bool {
        self.q == 0 && self.r == 0
    }
}

/// Inputs to the generator, clamped into a usable range
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridParams {
    pub radius: u32,
    pub diameter: f64,
    pub spacing: f64,
}

impl GridParams {
    pub fn new(radius: u32, diameter: f64, spacing: f64) -> Self {
        Self {
            radius,
            diameter,
            spacing,
        }
        .clamped()
    }

    /// Raise the diameter to the minimum and reset a degenerate spacing to 1
    pub fn clamped(self) -> Self {
        let diameter = self.diameter.max(MIN_DIAMETER);
        let spacing = if self.spacing.is_finite() && self.spacing > 0.0 {
            self.spacing
        } else {
            1.0
        };
        Self {
            radius: self.radius,
            diameter,
            spacing,
        }
    }

    /// Center-to-corner distance
    pub fn size(&self) -> f64 {
        self.diameter / 2.0
    }

    pub fn generate(&self) -> Vec<HexCell> {
        let params = self.clamped();
        let size = params.size();
        spiral(params.radius)
            .into_iter()
            .map(|hex| {
                let center = axial_to_pixel(hex, size, params.spacing);
                HexCell {
                    q: hex.q,
                    r: hex.r,
                    x: center.x,
                    y: center.y,
                    points: hex_corners(center, size, params.spacing),
                }
            })
            .collect()
    }
}

/// Pixel center of an axial coordinate for pointy-top hexes
pub fn axial_to_pixel(hex: Axial, size: f64, spacing: f64) -> Point2 {
    let q = hex.q as f64;
    let r = hex.r as f64;
    Point2::new(
        size * 3f64.sqrt() * (q + r / 2.0) * spacing,
        size * (3.0 / 2.0) * r * spacing,
    )
}

/// Corners of a pointy-top hex, starting 30 degrees above the horizontal
pub fn hex_corners(center: Point2, size: f64, spacing: f64) -> [Point2; 6] {
    let mut points = [Point2::default(); 6];
    for (i, point) in points.iter_mut().enumerate() {
        let angle = (60.0 * i as f64 - 30.0).to_radians();
        *point = Point2::new(
            center.x + size * angle.cos() * spacing,
            center.y + size * angle.sin() * spacing,
        );
    }
    points
}

/// Generate every hex within `radius` rings of the origin.
///
/// `diameter` is the corner-to-corner width of one hex, `spacing` scales
/// both the distance between centers and the hexes themselves (1 = snug).
/// The diameter is raised to [`MIN_DIAMETER`] and a non-finite or
/// non-positive spacing falls back to 1.
pub fn generate_hex_grid(radius: u32, diameter: f64, spacing: f64) -> Vec<HexCell> {
    GridParams::new(radius, diameter, spacing).generate()
}
