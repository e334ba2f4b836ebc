//! TUI SameGame (workspace facade crate).
//!
//! Exposes `tui_samegame::{core,input,term,types}` while the implementation
//! lives in dedicated crates under `crates/`. Runtime configuration and the
//! event log belong to the binary and live here.

pub use tui_samegame_core as core;
pub use tui_samegame_input as input;
pub use tui_samegame_term as term;
pub use tui_samegame_types as types;

pub mod config;
pub mod event_log;
