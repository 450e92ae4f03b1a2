// Library exports for the snake solver
// This allows integration tests and other utilities to use the core logic

pub mod config;
pub mod debug_logger;
pub mod grid;
pub mod pathfinder;
pub mod solver;
pub mod types;
