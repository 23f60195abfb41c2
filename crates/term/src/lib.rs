//! Terminal presentation module.
//!
//! The game core never touches a terminal; this crate maps engine state
//! into a framebuffer of styled character cells and flushes it through
//! a diff-based renderer. One board cell is drawn as 2x1 terminal cells
//! to compensate for glyph aspect ratio.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
