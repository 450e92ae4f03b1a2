// Lee pathfinding: a BFS distance field from the snake head plus a
// backward walk that turns the field into a single next-step direction.

use std::collections::VecDeque;

use crate::config::RulesConfig;
use crate::grid::{GridModel, GRID_SIZE};
use crate::types::{Direction, Point};

/// Sentinel distance for cells the search never reached
pub const UNVISITED: u32 = u32::MAX;

/// Shortest-path distances from a single source, one slot per board cell
#[derive(Debug)]
pub struct DistanceField {
    cells: [[u32; GRID_SIZE as usize]; GRID_SIZE as usize],
}

impl DistanceField {
    fn new() -> Self {
        DistanceField {
            cells: [[UNVISITED; GRID_SIZE as usize]; GRID_SIZE as usize],
        }
    }

    /// Distance recorded for `point`, `UNVISITED` when off-board.
    /// Off-board reads fold into the same degrade path as unreachable
    /// cells, so a malformed snapshot cannot panic the tick.
    pub fn get(&self, point: Point) -> u32 {
        if Self::in_range(point) {
            self.cells[point.x as usize][point.y as usize]
        } else {
            UNVISITED
        }
    }

    fn set(&mut self, point: Point, distance: u32) {
        if Self::in_range(point) {
            self.cells[point.x as usize][point.y as usize] = distance;
        }
    }

    fn in_range(point: Point) -> bool {
        (0..GRID_SIZE).contains(&point.x) && (0..GRID_SIZE).contains(&point.y)
    }
}

/// Legally reachable neighbors of `point`, in the fixed order up, down,
/// left, right. The order is part of the contract: the backward walk in
/// `step_toward` takes the first improving neighbor, so reordering this
/// list changes which of several equally short paths gets picked.
///
/// Stones block the search until the snake is long enough to eat them
/// (`min_length_to_eat_stone`). When the filtered set comes up empty and
/// the snake is at least `min_length_for_forced_eating` long, a second
/// pass drops only the stone exclusion: eating a stone beats dying.
pub fn valid_neighbors(grid: &GridModel, point: Point, rules: &RulesConfig) -> Vec<Point> {
    let adjacent = [
        Point::new(point.x, point.y + 1),
        Point::new(point.x, point.y - 1),
        Point::new(point.x - 1, point.y),
        Point::new(point.x + 1, point.y),
    ];
    let length = grid.snake_len();

    let mut neighbors: Vec<Point> = adjacent
        .iter()
        .copied()
        .filter(|&cell| {
            grid.is_open(cell)
                && !grid.has_snake(cell)
                && (length >= rules.min_length_to_eat_stone || !grid.has_stone(cell))
        })
        .collect();

    if neighbors.is_empty() && length >= rules.min_length_for_forced_eating {
        neighbors = adjacent
            .iter()
            .copied()
            .filter(|&cell| grid.is_open(cell) && !grid.has_snake(cell))
            .collect();
    }

    neighbors
}

/// Builds the full distance field from `source` with a standard BFS.
/// Unreachable cells keep the `UNVISITED` sentinel.
pub fn build_distance_field(grid: &GridModel, rules: &RulesConfig, source: Point) -> DistanceField {
    let mut field = DistanceField::new();
    field.set(source, 0);

    let mut queue = VecDeque::new();
    queue.push_back(source);

    while let Some(current) = queue.pop_front() {
        let current_distance = field.get(current);

        for neighbor in valid_neighbors(grid, current, rules) {
            if field.get(neighbor) == UNVISITED {
                field.set(neighbor, current_distance + 1);
                queue.push_back(neighbor);
            }
        }
    }

    field
}

/// Walks the field backward from `target` to recover the first step out
/// of `source`, or `None` when no step can be derived.
///
/// The walk repeatedly moves to the first neighbor (in `valid_neighbors`
/// order) whose distance is strictly smaller than the current cell's.
/// Distances strictly decrease, so the walk terminates and any recovered
/// path is shortest-length; the exact cells it visits depend on the
/// neighbor order when several predecessors tie. The source itself is
/// snake body and never appears in a neighbor list, so a successful walk
/// stops on a distance-1 cell adjacent to `source` and that cell is the
/// step to take.
pub fn step_toward(
    grid: &GridModel,
    rules: &RulesConfig,
    field: &DistanceField,
    source: Point,
    target: Point,
) -> Option<Direction> {
    let mut path: Vec<Point> = Vec::new();
    let mut current = target;

    while current != source {
        path.push(current);

        let next = valid_neighbors(grid, current, rules)
            .into_iter()
            .find(|&neighbor| field.get(neighbor) < field.get(current));

        match next {
            Some(neighbor) => current = neighbor,
            None => break,
        }
    }

    let step = *path.last()?;
    direction_between(source, step)
}

/// Maps the delta from `from` to `to` onto a direction, checking dx
/// before dy. A delta that matches neither axis unit yields `None`,
/// which callers treat as "no direction found".
fn direction_between(from: Point, to: Point) -> Option<Direction> {
    let dx = to.x - from.x;
    let dy = to.y - from.y;

    if dx == -1 {
        Some(Direction::Left)
    } else if dx == 1 {
        Some(Direction::Right)
    } else if dy == 1 {
        Some(Direction::Up)
    } else if dy == -1 {
        Some(Direction::Down)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_between_unit_deltas() {
        let from = Point::new(5, 5);
        assert_eq!(
            direction_between(from, Point::new(4, 5)),
            Some(Direction::Left)
        );
        assert_eq!(
            direction_between(from, Point::new(6, 5)),
            Some(Direction::Right)
        );
        assert_eq!(
            direction_between(from, Point::new(5, 6)),
            Some(Direction::Up)
        );
        assert_eq!(
            direction_between(from, Point::new(5, 4)),
            Some(Direction::Down)
        );
    }

    #[test]
    fn test_direction_between_checks_dx_first() {
        // Off-axis deltas with a unit dx still resolve horizontally,
        // matching the delta mapping the game's original solver shipped.
        let from = Point::new(5, 5);
        assert_eq!(
            direction_between(from, Point::new(4, 9)),
            Some(Direction::Left)
        );
        assert_eq!(direction_between(from, Point::new(5, 9)), None);
        assert_eq!(direction_between(from, Point::new(5, 5)), None);
    }

    #[test]
    fn test_distance_field_out_of_range_reads() {
        let field = DistanceField::new();
        assert_eq!(field.get(Point::new(-1, 3)), UNVISITED);
        assert_eq!(field.get(Point::new(3, 15)), UNVISITED);
    }
}
