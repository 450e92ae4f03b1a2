// Per-tick board snapshot.
//
// The game server sends one of these every tick; the solver consumes it
// read-only and keeps nothing between ticks. The previous heading travels
// inside the snapshot (`current_heading`), so a decision is a pure
// function of its input.

use serde::{Deserialize, Serialize};

use crate::types::{Direction, Point};

/// Board side length. A game-protocol constant: the board is always
/// 15x15 and the outer ring (0 and 14 on either axis) is solid wall.
pub const GRID_SIZE: i32 = 15;

/// One tick's board state as received from the game server
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct GridModel {
    pub game_over: bool,
    pub head: Point,
    /// Snake body cells, head first
    pub snake: Vec<Point>,
    pub apples: Vec<Point>,
    pub stones: Vec<Point>,
    pub walls: Vec<Point>,
    /// Heading the snake moved in last tick, used as the terminal fallback
    pub current_heading: Direction,
}

impl GridModel {
    pub fn snake_len(&self) -> usize {
        self.snake.len()
    }

    /// True for the outer ring, which is impassable regardless of the
    /// explicit wall set.
    pub fn is_boundary(point: Point) -> bool {
        point.x <= 0 || point.x >= GRID_SIZE - 1 || point.y <= 0 || point.y >= GRID_SIZE - 1
    }

    /// In-bounds and not an explicit wall. Body and stone occupancy are
    /// checked separately because their rules differ by caller.
    pub fn is_open(&self, point: Point) -> bool {
        !Self::is_boundary(point) && !self.walls.contains(&point)
    }

    pub fn has_snake(&self, point: Point) -> bool {
        self.snake.contains(&point)
    }

    pub fn has_stone(&self, point: Point) -> bool {
        self.stones.contains(&point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_ring() {
        assert!(GridModel::is_boundary(Point::new(0, 7)));
        assert!(GridModel::is_boundary(Point::new(14, 7)));
        assert!(GridModel::is_boundary(Point::new(7, 0)));
        assert!(GridModel::is_boundary(Point::new(7, 14)));
        assert!(GridModel::is_boundary(Point::new(-1, 7)));
        assert!(!GridModel::is_boundary(Point::new(1, 1)));
        assert!(!GridModel::is_boundary(Point::new(13, 13)));
    }

    #[test]
    fn test_snapshot_deserializes() {
        let raw = r#"{
            "game_over": false,
            "head": {"x": 7, "y": 7},
            "snake": [{"x": 7, "y": 7}, {"x": 7, "y": 6}],
            "apples": [{"x": 7, "y": 9}],
            "stones": [],
            "walls": [],
            "current_heading": "UP"
        }"#;
        let grid: GridModel = serde_json::from_str(raw).unwrap();
        assert_eq!(grid.head, Point::new(7, 7));
        assert_eq!(grid.snake_len(), 2);
        assert_eq!(grid.current_heading, Direction::Up);
        assert!(grid.has_snake(Point::new(7, 6)));
        assert!(!grid.has_stone(Point::new(7, 6)));
    }
}
