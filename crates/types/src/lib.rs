//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (grid engine, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! A round is played on a rectangular grid. The defaults match the classic
//! layout of the game:
//!
//! - **Width**: 16 columns (indexed 0-15)
//! - **Height**: 8 rows (indexed 0-7, row 0 at the top)
//! - **Colors**: 4 distinct tile colors
//!
//! Configurable boards are bounded by [`MAX_WIDTH`], [`MAX_HEIGHT`] and
//! [`MAX_COLORS`].
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `PULSE_FRAMES` | 60 | Frames for one half of the highlight pulse |
//! | `PULSE_SPREAD` | 48 | Channel offset around the highlighted color |
//!
//! # Examples
//!
//! ```
//! use tui_samegame_types::{Cell, ColorId, GameAction, Point, EMPTY};
//!
//! let cell: Cell = Some(ColorId(2));
//! assert_ne!(cell, EMPTY);
//!
//! let p = Point::new(3, 1);
//! assert_eq!(p.index(16), 19);
//!
//! assert_eq!(GameAction::from_str("newRound"), Some(GameAction::NewRound));
//! ```

/// Default board width in cells (16 columns)
pub const DEFAULT_WIDTH: u16 = 16;

/// Default board height in cells (8 rows)
pub const DEFAULT_HEIGHT: u16 = 8;

/// Default number of tile colors
pub const DEFAULT_COLORS: u8 = 4;

/// Largest configurable board width
pub const MAX_WIDTH: u16 = 64;

/// Largest configurable board height
pub const MAX_HEIGHT: u16 = 32;

/// Largest configurable color count (size of the display palette)
pub const MAX_COLORS: u8 = 8;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Frames spent going from the dark end of the highlight pulse to the bright end
pub const PULSE_FRAMES: u32 = 60;

/// Per-channel offset applied around a tile color to build the highlight pulse
pub const PULSE_SPREAD: u8 = 48;

/// A tile color identifier in `[0, color_count)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColorId(pub u8);

impl ColorId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A cell on the grid
///
/// - `None`: Empty cell (no tile present)
/// - `Some(ColorId)`: Cell holding a tile of the given color
///
/// Used internally by the grid as a flat array of cells.
pub type Cell = Option<ColorId>;

/// The empty cell value.
pub const EMPTY: Cell = None;

/// A grid coordinate. `x` grows to the right, `y` grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Point {
    pub x: u16,
    pub y: u16,
}

impl Point {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    /// Row-major flat index for a grid of the given width.
    #[inline(always)]
    pub fn index(self, width: u16) -> usize {
        (self.y as usize) * (width as usize) + (self.x as usize)
    }
}

impl From<(u16, u16)> for Point {
    fn from((x, y): (u16, u16)) -> Self {
        Self { x, y }
    }
}

/// Player actions that drive a game session
///
/// Keyboard and pointer input are both translated into these before they
/// reach the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move the cursor one cell left
    MoveLeft,
    /// Move the cursor one cell right
    MoveRight,
    /// Move the cursor one row up
    MoveUp,
    /// Move the cursor one row down
    MoveDown,
    /// Select the region under the cursor, or clear it if already selected
    Select,
    /// Throw the current grid away and deal a fresh one
    NewRound,
}

impl GameAction {
    /// Parse action from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_samegame_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("SELECT"), Some(GameAction::Select));
    /// assert_eq!(GameAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "moveup" => Some(GameAction::MoveUp),
            "movedown" => Some(GameAction::MoveDown),
            "select" => Some(GameAction::Select),
            "newround" => Some(GameAction::NewRound),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::MoveUp => "moveUp",
            GameAction::MoveDown => "moveDown",
            GameAction::Select => "select",
            GameAction::NewRound => "newRound",
        }
    }

    /// Cursor offset for movement actions.
    pub fn cursor_delta(&self) -> Option<(i32, i32)> {
        match self {
            GameAction::MoveLeft => Some((-1, 0)),
            GameAction::MoveRight => Some((1, 0)),
            GameAction::MoveUp => Some((0, -1)),
            GameAction::MoveDown => Some((0, 1)),
            GameAction::Select | GameAction::NewRound => None,
        }
    }
}

/// Event emitted by the session after a region is cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchEvent {
    pub round_id: u32,
    pub point: Point,
    pub color: ColorId,
    /// Number of cells removed from the grid.
    pub cleared: u32,
    /// Points awarded for this match.
    pub points: u32,
    /// Session score after the match.
    pub score: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_board_fits_limits() {
        assert!(DEFAULT_WIDTH <= MAX_WIDTH);
        assert!(DEFAULT_HEIGHT <= MAX_HEIGHT);
        assert!(DEFAULT_COLORS >= 1 && DEFAULT_COLORS <= MAX_COLORS);
    }

    #[test]
    fn point_index_is_row_major() {
        assert_eq!(Point::new(0, 0).index(16), 0);
        assert_eq!(Point::new(15, 0).index(16), 15);
        assert_eq!(Point::new(0, 1).index(16), 16);
        assert_eq!(Point::new(15, 7).index(16), 127);
    }

    #[test]
    fn action_string_roundtrip() {
        for action in [
            GameAction::MoveLeft,
            GameAction::MoveRight,
            GameAction::MoveUp,
            GameAction::MoveDown,
            GameAction::Select,
            GameAction::NewRound,
        ] {
            assert_eq!(GameAction::from_str(action.as_str()), Some(action));
        }
    }

    #[test]
    fn only_moves_have_cursor_delta() {
        assert_eq!(GameAction::MoveUp.cursor_delta(), Some((0, -1)));
        assert_eq!(GameAction::Select.cursor_delta(), None);
        assert_eq!(GameAction::NewRound.cursor_delta(), None);
    }
}
