//! Core game logic for Snake
//!
//! This module contains all the game rules without any I/O or rendering
//! dependencies: the grid vocabulary, the segment-shifting snake model,
//! the apple spawner, and the collision rules for both rule variants.

pub mod action;
pub mod config;
pub mod engine;
pub mod state;

// Re-export commonly used types
pub use action::{Direction, Intent};
pub use config::{GameConfig, Ruleset};
pub use engine::{GameEngine, TickResult};
pub use state::{CollisionType, GameState, Position, Segment, Snake};
