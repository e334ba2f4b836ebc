//! JSON-lines event log.
//!
//! When a log path is configured every round start, committed match and round
//! end is appended as one JSON object per line. Write failures disable the
//! log silently; they never reach the game loop.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::GameState;
use crate::types::MatchEvent;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventRecord {
    RoundStarted {
        round_id: u32,
        /// RNG state the board was dealt from; replays the board exactly.
        round_seed: u32,
        width: u16,
        height: u16,
        colors: u8,
    },
    Matched {
        round_id: u32,
        x: u16,
        y: u16,
        color: u8,
        cleared: u32,
        points: u32,
        score: u32,
    },
    RoundFinished {
        round_id: u32,
        score: u32,
        matches: u32,
        remaining: usize,
    },
}

impl EventRecord {
    pub fn round_started(state: &GameState) -> Self {
        let grid = state.grid();
        Self::RoundStarted {
            round_id: state.round_id(),
            round_seed: state.round_seed(),
            width: grid.width(),
            height: grid.height(),
            colors: grid.color_count(),
        }
    }

    pub fn matched(event: &MatchEvent) -> Self {
        Self::Matched {
            round_id: event.round_id,
            x: event.point.x,
            y: event.point.y,
            color: event.color.0,
            cleared: event.cleared,
            points: event.points,
            score: event.score,
        }
    }

    pub fn round_finished(state: &GameState) -> Self {
        Self::RoundFinished {
            round_id: state.round_id(),
            score: state.score(),
            matches: state.matches(),
            remaining: state.grid().filled_count(),
        }
    }
}

/// Append-only event sink. A disabled log accepts and drops every record.
#[derive(Debug, Default)]
pub struct EventLog {
    out: Option<BufWriter<File>>,
    buf: Vec<u8>,
}

impl EventLog {
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Open `path` for appending. An unopenable path yields a disabled log.
    pub fn open(path: &Path) -> Self {
        let out = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .ok()
            .map(BufWriter::new);
        Self {
            out,
            buf: Vec::with_capacity(256),
        }
    }

    /// Open the configured path, if any.
    pub fn from_path(path: Option<&Path>) -> Self {
        path.map_or_else(Self::disabled, Self::open)
    }

    pub fn is_enabled(&self) -> bool {
        self.out.is_some()
    }

    pub fn record(&mut self, rec: &EventRecord) {
        let Some(out) = self.out.as_mut() else {
            return;
        };

        self.buf.clear();
        if serde_json::to_writer(&mut self.buf, rec).is_err() {
            return;
        }
        self.buf.push(b'\n');

        if out.write_all(&self.buf).is_err() || out.flush().is_err() {
            self.out = None;
        }
    }
}
