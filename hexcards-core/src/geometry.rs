//! Layout helpers shared by the board and card renderers

use crate::grid::{HexCell, Point2};
use std::fmt;

/// Axis-aligned bounds of a point set
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    /// Bounds of a set of points, `None` when there are none
    pub fn of_points<I: IntoIterator<Item = Point2>>(points: I) -> Option<Self> {
        points.into_iter().fold(None, |acc, p| {
            Some(match acc {
                None => BoundingBox {
                    min_x: p.x,
                    min_y: p.y,
                    max_x: p.x,
                    max_y: p.y,
                },
                Some(b) => BoundingBox {
                    min_x: b.min_x.min(p.x),
                    min_y: b.min_y.min(p.y),
                    max_x: b.max_x.max(p.x),
                    max_y: b.max_y.max(p.y),
                },
            })
        })
    }

    /// Bounds of every vertex of every cell
    pub fn of_cells(cells: &[HexCell]) -> Option<Self> {
        Self::of_points(cells.iter().flat_map(|c| c.points.iter().copied()))
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Geometric center, used as the pivot for whole-board rotation
    pub fn center(&self) -> Point2 {
        Point2::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Grow the box by `pad` on every side
    pub fn padded(&self, pad: f64) -> ViewWindow {
        ViewWindow {
            min_x: self.min_x - pad,
            min_y: self.min_y - pad,
            width: self.width() + pad * 2.0,
            height: self.height() + pad * 2.0,
        }
    }
}

/// Visible region of a document, formatted as an SVG `viewBox`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewWindow {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewWindow {
    pub const fn new(min_x: f64, min_y: f64, width: f64, height: f64) -> Self {
        Self {
            min_x,
            min_y,
            width,
            height,
        }
    }

    /// Whole-pixel size for printing
    pub fn pixel_size(&self) -> (u32, u32) {
        (self.width.ceil() as u32, self.height.ceil() as u32)
    }
}

impl fmt::Display for ViewWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.min_x, self.min_y, self.width, self.height)
    }
}

/// Target rectangle in document space
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Uniform scale followed by a translation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FitTransform {
    pub scale: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl FitTransform {
    pub const IDENTITY: FitTransform = FitTransform {
        scale: 1.0,
        offset_x: 0.0,
        offset_y: 0.0,
    };

    /// Largest uniform scale that fits `bounds` inside `target` less `pad` on
    /// each side, centred in the target. A box without area maps to
    /// [`FitTransform::IDENTITY`].
    pub fn fit(bounds: &BoundingBox, target: Rect, pad: f64) -> Self {
        if !(bounds.width() > 0.0 && bounds.height() > 0.0) {
            return Self::IDENTITY;
        }
        let scale = ((target.width - pad * 2.0) / bounds.width())
            .min((target.height - pad * 2.0) / bounds.height());
        if !scale.is_finite() {
            return Self::IDENTITY;
        }
        let center = bounds.center();
        Self {
            scale,
            offset_x: target.x + target.width / 2.0 - center.x * scale,
            offset_y: target.y + target.height / 2.0 - center.y * scale,
        }
    }

    pub fn apply(&self, point: Point2) -> Point2 {
        Point2::new(
            point.x * self.scale + self.offset_x,
            point.y * self.scale + self.offset_y,
        )
    }
}

/// Polygon vertices as an SVG `points` attribute: `"x,y x,y ..."`
pub fn points_attr<'a, I: IntoIterator<Item = &'a Point2>>(points: I) -> String {
    points
        .into_iter()
        .map(|p| format!("{},{}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::generate_hex_grid;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_empty_bounds() {
        assert!(BoundingBox::of_points(Vec::<Point2>::new()).is_none());
        assert!(BoundingBox::of_cells(&[]).is_none());
    }

    #[test]
    fn test_single_hex_bounds() {
        let cells = generate_hex_grid(0, 4.0, 1.0);
        let bounds = BoundingBox::of_cells(&cells).unwrap();
        let half_width = 3f64.sqrt();
        assert!((bounds.min_x + half_width).abs() < EPS);
        assert!((bounds.max_x - half_width).abs() < EPS);
        assert!((bounds.min_y + 2.0).abs() < EPS);
        assert!((bounds.max_y - 2.0).abs() < EPS);
        let center = bounds.center();
        assert!(center.x.abs() < EPS && center.y.abs() < EPS);
    }

    #[test]
    fn test_padded_window() {
        let bounds = BoundingBox {
            min_x: -10.0,
            min_y: -5.0,
            max_x: 10.0,
            max_y: 5.5,
        };
        let window = bounds.padded(20.0);
        assert_eq!(window, ViewWindow::new(-30.0, -25.0, 60.0, 50.5));
        assert_eq!(window.pixel_size(), (60, 51));
        assert_eq!(window.to_string(), "-30 -25 60 50.5");
    }

    #[test]
    fn test_fit_centres_and_scales() {
        let bounds = BoundingBox {
            min_x: 0.0,
            min_y: 0.0,
            max_x: 10.0,
            max_y: 20.0,
        };
        let fit = FitTransform::fit(&bounds, Rect::new(100.0, 100.0, 200.0, 200.0), 10.0);
        // Height is the limiting side: 180 / 20
        assert!((fit.scale - 9.0).abs() < EPS);
        let center = fit.apply(bounds.center());
        assert!((center.x - 200.0).abs() < EPS);
        assert!((center.y - 200.0).abs() < EPS);
        let top = fit.apply(Point2::new(0.0, 0.0));
        assert!((top.y - 110.0).abs() < EPS);
    }

    #[test]
    fn test_fit_flat_box_is_identity() {
        let target = Rect::new(0.0, 0.0, 100.0, 100.0);
        let point = BoundingBox {
            min_x: 5.0,
            min_y: 5.0,
            max_x: 5.0,
            max_y: 5.0,
        };
        assert_eq!(FitTransform::fit(&point, target, 4.0), FitTransform::IDENTITY);

        let line = BoundingBox {
            min_x: 0.0,
            min_y: 3.0,
            max_x: 50.0,
            max_y: 3.0,
        };
        assert_eq!(FitTransform::fit(&line, target, 4.0), FitTransform::IDENTITY);
    }

    #[test]
    fn test_identity() {
        let p = Point2::new(3.5, -2.0);
        assert_eq!(FitTransform::IDENTITY.apply(p), p);
    }

    #[test]
    fn test_points_attr() {
        let points = [Point2::new(1.0, 2.5), Point2::new(-3.0, 0.0)];
        assert_eq!(points_attr(&points), "1,2.5 -3,0");
        assert_eq!(points_attr(&[] as &[Point2]), "");
    }
}
