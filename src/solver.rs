// Per-tick decision engine.
//
// One snapshot in, one token out. The engine selects a target (stone or
// apple), runs the Lee pathfinder toward it and degrades through a chain
// of fallbacks until something legal-looking comes out: a missed tick
// forfeits the turn, so every anomaly ends in "repeat the last heading"
// rather than an error. Only an explicit game-over produces the empty
// token.

use log::info;
use serde_json::{json, Value};

use crate::config::Config;
use crate::debug_logger::DebugLogger;
use crate::grid::{GridModel, GRID_SIZE};
use crate::pathfinder;
use crate::types::{Direction, Point, Target, TargetKind};

/// Snake solver with OOP-style API
/// Takes static configuration dependencies and exposes methods corresponding to API endpoints
pub struct Solver {
    config: Config,
    logger: DebugLogger,
}

impl Solver {
    /// Creates a new Solver instance with the given configuration
    pub fn new(config: Config) -> Self {
        let logger = if config.debug.enabled {
            DebugLogger::new(&config.debug.log_file_path)
        } else {
            DebugLogger::disabled()
        };

        Solver { config, logger }
    }

    /// Returns solver metadata
    /// Corresponds to GET / endpoint
    pub fn info(&self) -> Value {
        info!("INFO");

        json!({
            "apiversion": "1",
            "author": "snake-solver-rust",
            "algorithm": "lee",
        })
    }

    /// Computes the move token for one tick
    /// Corresponds to POST /move endpoint
    ///
    /// # Returns
    /// One of `"UP"`, `"DOWN"`, `"LEFT"`, `"RIGHT"`, or `""` (game over)
    pub fn decide(&self, grid: &GridModel) -> String {
        let token = match self.choose(grid) {
            Some(direction) => direction.as_token().to_string(),
            None => String::new(),
        };

        info!(
            "head=({},{}) len={} apples={} stones={} -> {:?}",
            grid.head.x,
            grid.head.y,
            grid.snake_len(),
            grid.apples.len(),
            grid.stones.len(),
            token
        );

        self.logger.log_decision(grid, &token);

        token
    }

    /// The decision chain. `None` means no move (game over only).
    fn choose(&self, grid: &GridModel) -> Option<Direction> {
        if grid.game_over {
            return None;
        }

        let rules = &self.config.rules;
        let field = pathfinder::build_distance_field(grid, rules, grid.head);

        if let Some(target) = self.select_target(grid) {
            let direction = pathfinder::step_toward(grid, rules, &field, grid.head, target.point);

            match target.kind {
                // A stone target is only picked when the snake is long
                // enough to eat it; no extra safety check applies.
                TargetKind::Stone => {
                    if direction.is_some() {
                        return direction;
                    }
                }
                TargetKind::Apple => {
                    if let Some(dir) = direction {
                        if self.is_safe_step(grid, dir) {
                            return Some(dir);
                        }
                    }
                }
            }
        }

        // No usable path to the target: head for the first free interior
        // cell instead, reusing the field already built from the head.
        if let Some(cell) = Self::find_free_cell(grid) {
            if let Some(dir) = pathfinder::step_toward(grid, rules, &field, grid.head, cell) {
                return Some(dir);
            }
        }

        Some(grid.current_heading)
    }

    /// Picks this tick's single target: the first stone once the snake is
    /// long enough to eat stones, otherwise the first apple. A live board
    /// without apples is outside the feed's contract; it falls through to
    /// the free-cell chain in `choose`.
    fn select_target(&self, grid: &GridModel) -> Option<Target> {
        if grid.snake_len() >= self.config.rules.min_length_to_eat_stone {
            if let Some(&stone) = grid.stones.first() {
                return Some(Target {
                    point: stone,
                    kind: TargetKind::Stone,
                });
            }
        }

        grid.apples.first().map(|&apple| Target {
            point: apple,
            kind: TargetKind::Apple,
        })
    }

    /// Re-checks the cell one step ahead: in bounds, no wall, no body.
    /// The stone rule is deliberately NOT re-applied here, so a
    /// forced-eating step produced by the neighbor filter survives this
    /// check and gets emitted.
    fn is_safe_step(&self, grid: &GridModel, direction: Direction) -> bool {
        let next = direction.apply(&grid.head);
        grid.is_open(next) && !grid.has_snake(next)
    }

    /// First interior cell that is neither wall nor body, scanning x then
    /// y. Stones count as free here; the pathfinder still decides whether
    /// they can actually be entered.
    fn find_free_cell(grid: &GridModel) -> Option<Point> {
        for x in 1..GRID_SIZE - 1 {
            for y in 1..GRID_SIZE - 1 {
                let cell = Point::new(x, y);
                if grid.is_open(cell) && !grid.has_snake(cell) {
                    return Some(cell);
                }
            }
        }
        None
    }
}
