//! Movement tokens and reachability

use crate::board::{Axial, Direction};
use crate::error::ParseError;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How far a single movement step travels
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Distance {
    One = 1,
    Two = 2,
}

impl Distance {
    pub fn steps(self) -> i32 {
        self as i32
    }
}

impl TryFrom<u8> for Distance {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Distance::One),
            2 => Ok(Distance::Two),
            other => Err(ParseError::InvalidDistance(other)),
        }
    }
}

impl From<Distance> for u8 {
    fn from(distance: Distance) -> u8 {
        distance as u8
    }
}

/// One reachable step from the origin hex, e.g. `2RB`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MovementToken {
    pub distance: Distance,
    pub direction: Direction,
}

impl MovementToken {
    pub const fn new(distance: Distance, direction: Direction) -> Self {
        Self {
            distance,
            direction,
        }
    }

    /// Hex this token lands on when moving from the origin
    pub fn target(&self) -> Axial {
        Axial::ORIGIN + self.direction.offset() * self.distance.steps()
    }
}

impl fmt::Display for MovementToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", u8::from(self.distance), self.direction)
    }
}

/// Set of hexes reachable from the origin
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReachableSet(FxHashSet<Axial>);

impl ReachableSet {
    pub fn contains(&self, hex: Axial) -> bool {
        self.0.contains(&hex)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Axial> {
        self.0.iter()
    }

    /// Coordinates in a stable order, for display
    pub fn sorted(&self) -> Vec<Axial> {
        let mut hexes: Vec<Axial> = self.0.iter().copied().collect();
        hexes.sort();
        hexes
    }
}

impl FromIterator<Axial> for ReachableSet {
    fn from_iter<T: IntoIterator<Item = Axial>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Resolve movement tokens into the hexes they reach from the origin.
/// Tokens that land on the same hex collapse into one entry.
pub fn resolve_reachable(tokens: &[MovementToken]) -> ReachableSet {
    tokens.iter().map(MovementToken::target).collect()
}

/// Toggle state for one direction in the card editor
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectionToggle {
    pub enabled: bool,
    pub one: bool,
    pub two: bool,
}

/// Per-direction movement toggles, indexed like [`crate::board::DIRECTIONS`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveToggles {
    toggles: [DirectionToggle; 6],
}

impl Default for MoveToggles {
    fn default() -> Self {
        Self::empty().with(
            Direction::Forward,
            DirectionToggle {
                enabled: true,
                one: true,
                two: false,
            },
        )
    }
}

impl MoveToggles {
    /// Every direction switched off
    pub fn empty() -> Self {
        Self {
            toggles: [DirectionToggle::default(); 6],
        }
    }

    pub fn get(&self, direction: Direction) -> DirectionToggle {
        self.toggles[direction as usize]
    }

    pub fn set(&mut self, direction: Direction, toggle: DirectionToggle) {
        self.toggles[direction as usize] = toggle;
    }

    pub fn with(mut self, direction: Direction, toggle: DirectionToggle) -> Self {
        self.set(direction, toggle);
        self
    }

    /// Enable a direction at the given distance, keeping any other distance
    pub fn enable(&mut self, token: MovementToken) {
        let toggle = &mut self.toggles[token.direction as usize];
        toggle.enabled = true;
        match token.distance {
            Distance::One => toggle.one = true,
            Distance::Two => toggle.two = true,
        }
    }

    /// Movement tokens for every enabled direction, in editor order
    pub fn tokens(&self) -> Vec<MovementToken> {
        let mut tokens = Vec::new();
        for direction in Direction::CLOCKWISE {
            let toggle = self.get(direction);
            if !toggle.enabled {
                continue;
            }
            if toggle.one {
                tokens.push(MovementToken::new(Distance::One, direction));
            }
            if toggle.two {
                tokens.push(MovementToken::new(Distance::Two, direction));
            }
        }
        tokens
    }

    pub fn reachable(&self) -> ReachableSet {
        resolve_reachable(&self.tokens())
    }
}

impl FromIterator<MovementToken> for MoveToggles {
    fn from_iter<T: IntoIterator<Item = MovementToken>>(iter: T) -> Self {
        let mut toggles = Self::empty();
        for token in iter {
            toggles.enable(token);
        }
        toggles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(distance: Distance, direction: Direction) -> MovementToken {
        MovementToken::new(distance, direction)
    }

    #[test]
    fn test_single_forward() {
        let set = resolve_reachable(&[token(Distance::One, Direction::Forward)]);
        assert_eq!(set.sorted(), vec![Axial::new(0, -1)]);
    }

    #[test]
    fn test_two_right_forward() {
        let set = resolve_reachable(&[token(Distance::Two, Direction::RightForward)]);
        assert_eq!(set.sorted(), vec![Axial::new(2, -2)]);
    }

    #[test]
    fn test_duplicates_collapse() {
        let set = resolve_reachable(&[
            token(Distance::One, Direction::Forward),
            token(Distance::One, Direction::Forward),
        ]);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_empty_tokens() {
        assert!(resolve_reachable(&[]).is_empty());
    }

    #[test]
    fn test_all_targets_on_board() {
        let mut tokens = Vec::new();
        for dir in Direction::CLOCKWISE {
            tokens.push(token(Distance::One, dir));
            tokens.push(token(Distance::Two, dir));
        }
        let set = resolve_reachable(&tokens);
        assert_eq!(set.len(), 12);
        assert!(set.iter().all(|h| h.within_radius(2)));
        assert!(!set.contains(Axial::ORIGIN));
    }

    #[test]
    fn test_token_display() {
        assert_eq!(token(Distance::One, Direction::Forward).to_string(), "1F");
        assert_eq!(token(Distance::Two, Direction::RightBack).to_string(), "2RB");
    }

    #[test]
    fn test_distance_conversion() {
        assert_eq!(Distance::try_from(2).unwrap(), Distance::Two);
        assert!(matches!(
            Distance::try_from(3),
            Err(ParseError::InvalidDistance(3))
        ));
    }

    #[test]
    fn test_token_json() {
        let json = serde_json::to_string(&token(Distance::Two, Direction::LeftBack)).unwrap();
        assert_eq!(json, r#"{"distance":2,"direction":"LB"}"#);
        let back: MovementToken = serde_json::from_str(&json).unwrap();
        assert_eq!(back, token(Distance::Two, Direction::LeftBack));
        assert!(serde_json::from_str::<MovementToken>(r#"{"distance":3,"direction":"F"}"#).is_err());
        assert!(serde_json::from_str::<MovementToken>(r#"{"distance":1,"direction":"X"}"#).is_err());
    }

    #[test]
    fn test_default_toggles() {
        let toggles = MoveToggles::default();
        assert_eq!(toggles.tokens(), vec![token(Distance::One, Direction::Forward)]);
        assert_eq!(toggles.reachable().sorted(), vec![Axial::new(0, -1)]);
    }

    #[test]
    fn test_disabled_direction_ignored() {
        let toggles = MoveToggles::empty().with(
            Direction::Back,
            DirectionToggle {
                enabled: false,
                one: true,
                two: true,
            },
        );
        assert!(toggles.tokens().is_empty());
    }

    #[test]
    fn test_toggles_from_tokens() {
        let toggles: MoveToggles = vec![
            token(Distance::Two, Direction::Back),
            token(Distance::One, Direction::LeftForward),
            token(Distance::One, Direction::Back),
        ]
        .into_iter()
        .collect();
        assert_eq!(
            toggles.tokens(),
            vec![
                token(Distance::One, Direction::LeftForward),
                token(Distance::One, Direction::Back),
                token(Distance::Two, Direction::Back),
            ]
        );
    }
}
