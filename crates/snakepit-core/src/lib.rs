//! Simulation core for a multi-snake board game where the entire game
//! state lives in a grid of ASCII symbols.

pub mod board;
pub mod error;
pub mod food;
pub mod state;
pub mod symbol;

pub use board::{Board, Point};
pub use error::GameError;
pub use food::FoodSpawner;
pub use state::{GameState, Snake, TickSummary};
pub use symbol::{Direction, Role};
