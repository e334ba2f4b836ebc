//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework beyond
//! `crossterm` events. It maps key presses into [`crate::types::GameAction`]
//! and mouse events into [`PointerEvent`]s in terminal coordinates. Turning
//! terminal coordinates into grid cells is the view's job, since only the view
//! knows the layout.

pub mod map;
pub mod pointer;

pub use tui_samegame_types as types;

pub use map::{handle_key_event, should_quit};
pub use pointer::{handle_mouse_event, PointerEvent};
