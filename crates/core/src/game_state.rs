//! Game state module - one play session on top of the grid
//!
//! This module ties together the grid, the RNG and scoring. It owns the cursor
//! and the current selection and turns player actions into grid queries and
//! matches.
//!
//! Clearing is a two-step gesture: the first press on a region selects it
//! (the view highlights it), a second press inside the selection commits the
//! match. Pressing anywhere else just moves the selection.

use crate::types::*;
use crate::{add_match, match_score, Grid, Region, SimpleRng};

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    grid: Grid,
    rng: SimpleRng,
    /// Seed the session was created with.
    seed: u32,
    /// RNG state the current round was dealt from.
    round_seed: u32,
    /// Monotonic round id (increments on every new round).
    round_id: u32,
    score: u32,
    /// Matches committed in the current round.
    matches: u32,
    cursor: Point,
    selection: Region,
    /// Bumped whenever the selection changes, so views can restart effects.
    selection_id: u32,
    /// Last committed match (consumed by observers).
    last_event: Option<MatchEvent>,
}

impl GameState {
    /// Create a session and deal the first round.
    ///
    /// # Panics
    ///
    /// If any dimension or the color count is zero.
    pub fn new(width: u16, height: u16, colors: u8, seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let round_seed = rng.state();
        let grid = Grid::new(width, height, colors, &mut rng);

        Self {
            grid,
            rng,
            seed,
            round_seed,
            round_id: 0,
            score: 0,
            matches: 0,
            cursor: Point::new(0, height - 1),
            selection: Region::new(),
            selection_id: 0,
            last_event: None,
        }
    }

    /// Session with the default board layout.
    pub fn with_defaults(seed: u32) -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT, DEFAULT_COLORS, seed)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn round_seed(&self) -> u32 {
        self.round_seed
    }

    pub fn round_id(&self) -> u32 {
        self.round_id
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn matches(&self) -> u32 {
        self.matches
    }

    pub fn cursor(&self) -> Point {
        self.cursor
    }

    pub fn selection(&self) -> &Region {
        &self.selection
    }

    pub fn selection_id(&self) -> u32 {
        self.selection_id
    }

    /// Color of the selected region, if any.
    pub fn selected_color(&self) -> Option<ColorId> {
        let p = self.selection.iter().next()?;
        self.grid.cell_at(p.x, p.y)
    }

    /// Points the current selection would score if cleared.
    pub fn selection_value(&self) -> u32 {
        if self.selection.is_empty() {
            0
        } else {
            match_score(self.selection.len() as u32)
        }
    }

    /// Whether the round is over (no two adjacent tiles share a color).
    pub fn is_finished(&self) -> bool {
        !self.grid.has_matches()
    }

    /// Take the last match event (if any).
    pub fn take_last_event(&mut self) -> Option<MatchEvent> {
        self.last_event.take()
    }

    /// Deal a fresh grid from the session RNG and reset the round.
    pub fn new_round(&mut self) {
        self.round_seed = self.rng.state();
        self.grid = Grid::new(
            self.grid.width(),
            self.grid.height(),
            self.grid.color_count(),
            &mut self.rng,
        );
        self.round_id = self.round_id.wrapping_add(1);
        self.score = 0;
        self.matches = 0;
        self.last_event = None;
        self.cursor = Point::new(0, self.grid.height() - 1);
        self.set_selection(Region::new());
    }

    /// Point at a cell: move the cursor there and select its region.
    ///
    /// Does nothing to the selection if `p` is already inside it. Returns
    /// whether the selection changed.
    pub fn hover(&mut self, p: Point) -> bool {
        if !self.on_grid(p) {
            return false;
        }
        self.cursor = p;
        if self.selection.contains(p) {
            return false;
        }
        let region = self.grid.region_at(p.x, p.y);
        self.set_selection(region)
    }

    /// Press on a cell: clear the selection if `p` is inside it, otherwise
    /// select the region under `p`.
    pub fn press(&mut self, p: Point) -> Option<MatchEvent> {
        if !self.on_grid(p) {
            return None;
        }
        if !self.selection.contains(p) {
            self.hover(p);
            return None;
        }

        self.cursor = p;
        let color = self.grid.cell_at(p.x, p.y)?;
        let cleared = self.grid.match_at(p.x, p.y);
        self.set_selection(Region::new());
        if cleared <= 1 {
            return None;
        }

        self.score = add_match(self.score, cleared);
        self.matches += 1;

        let event = MatchEvent {
            round_id: self.round_id,
            point: p,
            color,
            cleared,
            points: match_score(cleared),
            score: self.score,
        };
        self.last_event = Some(event);
        Some(event)
    }

    /// Apply a player action. Returns whether anything changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft
            | GameAction::MoveRight
            | GameAction::MoveUp
            | GameAction::MoveDown => {
                let Some((dx, dy)) = action.cursor_delta() else {
                    return false;
                };
                self.move_cursor(dx, dy)
            }
            GameAction::Select => {
                let cursor = self.cursor;
                if self.selection.contains(cursor) {
                    self.press(cursor).is_some()
                } else {
                    self.hover_forced(cursor)
                }
            }
            GameAction::NewRound => {
                self.new_round();
                true
            }
        }
    }

    /// Move the cursor, clamped to the grid, and select under it.
    pub fn move_cursor(&mut self, dx: i32, dy: i32) -> bool {
        let x = (self.cursor.x as i32 + dx).clamp(0, self.grid.width() as i32 - 1);
        let y = (self.cursor.y as i32 + dy).clamp(0, self.grid.height() as i32 - 1);
        let next = Point::new(x as u16, y as u16);
        if next == self.cursor {
            return false;
        }
        self.hover(next);
        true
    }

    /// Recompute the selection under `p` even if the cursor did not move.
    fn hover_forced(&mut self, p: Point) -> bool {
        self.cursor = p;
        let region = self.grid.region_at(p.x, p.y);
        self.set_selection(region)
    }

    fn set_selection(&mut self, region: Region) -> bool {
        if region == self.selection {
            return false;
        }
        self.selection = region;
        self.selection_id = self.selection_id.wrapping_add(1);
        true
    }

    fn on_grid(&self, p: Point) -> bool {
        p.x < self.grid.width() && p.y < self.grid.height()
    }
}
