//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into direction intents and flow keys,
//! independent of any UI framework. The intent latch enforces the
//! anti-reversal rule and the one-direction-change-per-tick rule.

pub mod events;
pub mod map;

pub use tui_snake_types as types;

pub use events::{drain_events, wait_event, InputEvent};
pub use map::{direction_for_key, is_confirm, is_restart, should_quit, IntentLatch};
