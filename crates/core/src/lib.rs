//! Core game logic module - pure, deterministic, and testable
//!
//! All game rules live here with **zero dependencies** on UI or I/O:
//!
//! - **Deterministic**: same seed produces the same food sequence
//! - **Testable**: every rule has unit tests
//! - **Portable**: runs headless or behind any renderer
//!
//! # Module Structure
//!
//! - [`grid`]: wrap-around arithmetic and rectangle-overlap test
//! - [`snake`]: ordered body segments, head-first
//! - [`food`]: optional food cell with random respawn
//! - [`game`]: the engine owning snake, food, score and direction
//! - [`flow`]: the screen state machine (Start/Playing/GameOver/Exited)
//! - [`rng`]: simple LCG for food placement
//!
//! # Example
//!
//! ```
//! use tui_snake_core::Game;
//! use tui_snake_types::Direction;
//!
//! let mut game = Game::new(7);
//! game.ensure_food();
//! game.set_direction(Direction::Left);
//! game.step();
//!
//! assert!(!game.check_self_collision());
//! ```

pub mod flow;
pub mod food;
pub mod game;
pub mod grid;
pub mod rng;
pub mod snake;

pub use tui_snake_types as types;

pub use flow::{FlowSignal, Screen};
pub use food::Food;
pub use game::{Game, GameEvent};
pub use rng::SimpleRng;
pub use snake::Snake;
