//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the grid engine and the play session built on it.
//! It has **zero dependencies** on UI, terminals or I/O, making it:
//!
//! - **Deterministic**: Same seed deals identical grids
//! - **Testable**: Every rule can be exercised on hand-built boards
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`grid`]: The board, region finding and match resolution
//! - [`compact`]: Post-match gravity and column collapse over a flat cell slice
//! - [`region`]: Connected same-color point sets and their bounding boxes
//! - [`rng`]: Seedable random source used to deal colors
//! - [`scoring`]: Points per match
//! - [`game_state`]: Cursor, selection, score and rounds
//!
//! # Game Rules
//!
//! - A **region** is a maximal set of same-colored tiles connected
//!   up/down/left/right. A lone tile is not a region.
//! - Clearing a region of `n` tiles scores `(n - 1)²`.
//! - After a clear, tiles fall down; when a column empties completely, the
//!   columns on its right slide left to close the gap.
//! - The round ends when no two adjacent tiles share a color.
//!
//! # Example
//!
//! ```
//! use tui_samegame_core::{Grid, SimpleRng};
//! use tui_samegame_types::{ColorId, EMPTY};
//!
//! let a = Some(ColorId(0));
//! let b = Some(ColorId(1));
//! let mut grid = Grid::from_rows(2, vec![vec![a, b], vec![a, b]]);
//!
//! assert_eq!(grid.region_at(0, 0).len(), 2);
//! assert_eq!(grid.match_at(0, 0), 2);
//!
//! // The right column slid into the emptied left one.
//! assert_eq!(grid.to_rows(), vec![vec![b, EMPTY], vec![b, EMPTY]]);
//!
//! // Random grids come from an injected source.
//! let dealt = Grid::new(16, 8, 4, &mut SimpleRng::new(1));
//! assert_eq!(dealt.filled_count(), 128);
//! ```

pub mod compact;
pub mod game_state;
pub mod grid;
pub mod region;
pub mod rng;
pub mod scoring;

pub use tui_samegame_types as types;

// Re-export commonly used types for convenience
pub use compact::{compact, settle_column};
pub use game_state::GameState;
pub use grid::Grid;
pub use region::{Bounds, Region};
pub use rng::{RandomSource, SimpleRng};
pub use scoring::{add_match, match_score};
