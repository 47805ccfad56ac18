//! Hex board geometry with axial coordinates

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul};

/// Axial hex coordinates
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Axial {
    pub q: i32,
    pub r: i32,
}

impl Axial {
    pub const ORIGIN: Axial = Axial::new(0, 0);

    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// Distance from center (0,0)
    pub fn distance_to_origin(&self) -> u32 {
        self.q
            .unsigned_abs()
            .max(self.r.unsigned_abs())
            .max((self.q + self.r).unsigned_abs())
    }

    /// Distance between two hexes
    pub fn distance_to(&self, other: Axial) -> u32 {
        Axial::new(self.q - other.q, self.r - other.r).distance_to_origin()
    }

    /// Check if this hex lies within a board of the given radius
    pub fn within_radius(&self, radius: u32) -> bool {
        self.distance_to_origin() <= radius
    }

    /// Get neighbor in direction
    pub fn neighbor(&self, direction: Direction) -> Axial {
        *self + direction.offset()
    }
}

impl Add for Axial {
    type Output = Axial;

    fn add(self, rhs: Axial) -> Axial {
        Axial::new(self.q + rhs.q, self.r + rhs.r)
    }
}

impl Mul<i32> for Axial {
    type Output = Axial;

    fn mul(self, rhs: i32) -> Axial {
        Axial::new(self.q * rhs, self.r * rhs)
    }
}

impl fmt::Display for Axial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.q, self.r)
    }
}

/// Movement direction relative to a piece facing up the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    #[serde(rename = "F")]
    Forward = 0,
    #[serde(rename = "RF")]
    RightForward = 1,
    #[serde(rename = "RB")]
    RightBack = 2,
    #[serde(rename = "B")]
    Back = 3,
    #[serde(rename = "LB")]
    LeftBack = 4,
    #[serde(rename = "LF")]
    LeftForward = 5,
}

/// Direction vectors in axial coordinates (dq, dr)
/// Index: 0=F, 1=RF, 2=RB, 3=B, 4=LB, 5=LF
pub const DIRECTIONS: [Axial; 6] = [
    Axial::new(0, -1),  // F
    Axial::new(1, -1),  // RF
    Axial::new(1, 0),   // RB
    Axial::new(0, 1),   // B
    Axial::new(-1, 1),  // LB
    Axial::new(-1, 0),  // LF
];

/// Side order used when walking a ring, starting from its (-k, k) corner
pub const RING_WALK: [Direction; 6] = [
    Direction::RightBack,
    Direction::RightForward,
    Direction::Forward,
    Direction::LeftForward,
    Direction::LeftBack,
    Direction::Back,
];

impl Direction {
    /// Clockwise from the forward-left edge, the order the card editor lists them in
    pub const CLOCKWISE: [Direction; 6] = [
        Direction::LeftForward,
        Direction::Forward,
        Direction::RightForward,
        Direction::RightBack,
        Direction::Back,
        Direction::LeftBack,
    ];

    /// Unit axial offset for this direction
    pub fn offset(self) -> Axial {
        DIRECTIONS[self as usize]
    }

    /// Short text code (F, RF, ...)
    pub fn code(self) -> &'static str {
        match self {
            Direction::Forward => "F",
            Direction::RightForward => "RF",
            Direction::RightBack => "RB",
            Direction::Back => "B",
            Direction::LeftBack => "LB",
            Direction::LeftForward => "LF",
        }
    }

    /// Look up a direction by its code, ignoring case
    pub fn from_code(code: &str) -> Option<Direction> {
        match code.to_ascii_uppercase().as_str() {
            "F" => Some(Direction::Forward),
            "RF" => Some(Direction::RightForward),
            "RB" => Some(Direction::RightBack),
            "B" => Some(Direction::Back),
            "LB" => Some(Direction::LeftBack),
            "LF" => Some(Direction::LeftForward),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// All hexes at exactly `radius` steps from the origin, walked from the
/// (-radius, radius) corner. Radius 0 is the empty ring.
pub fn ring(radius: u32) -> Vec<Axial> {
    let k = radius as i32;
    let mut hexes = Vec::with_capacity(6 * radius as usize);
    let mut current = Axial::new(-k, k);
    for direction in RING_WALK {
        for _ in 0..k {
            hexes.push(current);
            current = current.neighbor(direction);
        }
    }
    hexes
}

/// Center followed by every ring out to `radius`
pub fn spiral(radius: u32) -> Vec<Axial> {
    let mut hexes = Vec::with_capacity(hex_count(radius));
    hexes.push(Axial::ORIGIN);
    for k in 1..=radius {
        hexes.extend(ring(k));
    }
    hexes
}

/// Number of hexes on a board of the given radius
pub fn hex_count(radius: u32) -> usize {
    let r = radius as usize;
    1 + 3 * r * (r + 1)
}
