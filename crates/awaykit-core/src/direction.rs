//! Swipe directions, direction sets, and viewport coordinates.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GestureError;

/// Viewport coordinate in CSS pixels (`clientX`/`clientY`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal offset from the viewport's left edge.
    pub x: f64,
    /// Vertical offset from the viewport's top edge.
    pub y: f64,
}

impl Point {
    /// Build a point from client coordinates.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Direction a swipe can travel in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Towards smaller `x`.
    Left,
    /// Towards larger `x`.
    Right,
    /// Towards smaller `y`.
    Up,
    /// Towards larger `y`.
    Down,
}

impl Direction {
    /// All directions in evaluation order.
    pub const ALL: [Self; 4] = [Self::Left, Self::Right, Self::Up, Self::Down];

    /// Lowercase name used in configuration payloads.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Up => "up",
            Self::Down => "down",
        }
    }

    /// Signed travel from `origin` to `current` along this direction.
    ///
    /// Positive values mean the pointer moved the way this direction points.
    #[must_use]
    pub fn displacement(self, origin: Point, current: Point) -> f64 {
        match self {
            Self::Left => origin.x - current.x,
            Self::Right => current.x - origin.x,
            Self::Up => origin.y - current.y,
            Self::Down => current.y - origin.y,
        }
    }

    const fn bit(self) -> u8 {
        match self {
            Self::Left => 0b0001,
            Self::Right => 0b0010,
            Self::Up => 0b0100,
            Self::Down => 0b1000,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = GestureError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            _ => Err(GestureError::UnknownDirection {
                value: value.to_string(),
            }),
        }
    }
}

/// Set of directions a detector reacts to.
///
/// Iteration always yields left, right, up, down in that order regardless of insertion
/// order, which fixes which direction wins when several cross on the same move.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<Direction>", into = "Vec<Direction>")]
pub struct DirectionSet(u8);

impl DirectionSet {
    /// Set with no directions.
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Set holding a single direction.
    #[must_use]
    pub const fn only(direction: Direction) -> Self {
        Self(direction.bit())
    }

    /// Add a direction to the set.
    pub const fn insert(&mut self, direction: Direction) {
        self.0 |= direction.bit();
    }

    /// Whether the set includes `direction`.
    #[must_use]
    pub const fn contains(self, direction: Direction) -> bool {
        self.0 & direction.bit() != 0
    }

    /// Whether no direction is configured.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of configured directions.
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Configured directions in evaluation order.
    pub fn iter(self) -> impl Iterator<Item = Direction> {
        Direction::ALL
            .into_iter()
            .filter(move |direction| self.contains(*direction))
    }
}

impl fmt::Debug for DirectionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<Direction> for DirectionSet {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        let mut set = Self::empty();
        for direction in iter {
            set.insert(direction);
        }
        set
    }
}

impl From<Vec<Direction>> for DirectionSet {
    fn from(directions: Vec<Direction>) -> Self {
        directions.into_iter().collect()
    }
}

impl From<&[Direction]> for DirectionSet {
    fn from(directions: &[Direction]) -> Self {
        directions.iter().copied().collect()
    }
}

impl From<DirectionSet> for Vec<Direction> {
    fn from(set: DirectionSet) -> Self {
        set.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displacement_is_positive_along_direction() {
        let origin = Point::new(200.0, 300.0);
        let current = Point::new(90.0, 340.0);
        assert!((Direction::Left.displacement(origin, current) - 110.0).abs() < f64::EPSILON);
        assert!((Direction::Right.displacement(origin, current) + 110.0).abs() < f64::EPSILON);
        assert!((Direction::Up.displacement(origin, current) + 40.0).abs() < f64::EPSILON);
        assert!((Direction::Down.displacement(origin, current) - 40.0).abs() < f64::EPSILON);
    }

    #[test]
    fn set_iterates_in_evaluation_order() {
        let set: DirectionSet = vec![Direction::Down, Direction::Left, Direction::Down].into();
        assert_eq!(set.len(), 2);
        assert_eq!(
            set.iter().collect::<Vec<_>>(),
            vec![Direction::Left, Direction::Down]
        );
        assert!(!set.contains(Direction::Up));
        assert!(DirectionSet::empty().is_empty());
    }

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!(" Right ".parse::<Direction>(), Ok(Direction::Right));
        assert_eq!(
            "sideways".parse::<Direction>(),
            Err(GestureError::UnknownDirection {
                value: "sideways".to_string()
            })
        );
    }

    #[test]
    fn set_serializes_as_name_list() -> anyhow::Result<()> {
        let set: DirectionSet = serde_json::from_str(r#"["up","left"]"#)?;
        assert_eq!(set, DirectionSet::from(&[Direction::Left, Direction::Up][..]));
        assert_eq!(serde_json::to_string(&set)?, r#"["left","up"]"#);
        Ok(())
    }
}
