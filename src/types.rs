// Core value types shared across the solver.

use serde::{Deserialize, Serialize};

/// 2D coordinate on the board
#[derive(Deserialize, Serialize, Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }
}

/// The four possible movement directions. The grid convention is
/// y-grows-up: `Up` increases y, `Down` decreases it.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Converts direction to the uppercase token the game server expects
    pub fn as_token(&self) -> &'static str {
        match self {
            Direction::Up => "UP",
            Direction::Down => "DOWN",
            Direction::Left => "LEFT",
            Direction::Right => "RIGHT",
        }
    }

    /// Calculates the next coordinate when moving in this direction
    pub fn apply(&self, point: &Point) -> Point {
        match self {
            Direction::Up => Point { x: point.x, y: point.y + 1 },
            Direction::Down => Point { x: point.x, y: point.y - 1 },
            Direction::Left => Point { x: point.x - 1, y: point.y },
            Direction::Right => Point { x: point.x + 1, y: point.y },
        }
    }
}

/// What kind of cell the solver is currently chasing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    Apple,
    Stone,
}

/// The single cell chosen as this tick's goal
#[derive(Debug, Clone, Copy)]
pub struct Target {
    pub point: Point,
    pub kind: TargetKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_tokens() {
        assert_eq!(Direction::Up.as_token(), "UP");
        assert_eq!(Direction::Down.as_token(), "DOWN");
        assert_eq!(Direction::Left.as_token(), "LEFT");
        assert_eq!(Direction::Right.as_token(), "RIGHT");
    }

    #[test]
    fn test_up_increases_y() {
        let p = Point::new(3, 3);
        assert_eq!(Direction::Up.apply(&p), Point::new(3, 4));
        assert_eq!(Direction::Down.apply(&p), Point::new(3, 2));
        assert_eq!(Direction::Left.apply(&p), Point::new(2, 3));
        assert_eq!(Direction::Right.apply(&p), Point::new(4, 3));
    }

    #[test]
    fn test_direction_wire_format() {
        let d: Direction = serde_json::from_str("\"UP\"").unwrap();
        assert_eq!(d, Direction::Up);
        assert_eq!(serde_json::to_string(&Direction::Left).unwrap(), "\"LEFT\"");
    }
}
