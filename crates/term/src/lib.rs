//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It avoids widget toolkits and instead renders into a simple framebuffer
//! that is diffed and flushed to a crossterm backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep layout in one place so drawing and mouse hit-testing agree
//! - Allow precise control over aspect ratio (e.g. 4x2 chars per tile)

pub mod fb;
pub mod game_view;
pub mod palette;
pub mod pulse;
pub mod renderer;

pub use tui_samegame_core as core;
pub use tui_samegame_types as types;

pub use fb::{CellStyle, FrameBuffer, Glyph, Rgb};
pub use game_view::{GameView, Layout, Viewport};
pub use palette::tile_color;
pub use pulse::ColorPulse;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
