//! Mouse mapping from terminal events to pointer gestures.
//!
//! Motion and drags behave like a finger sliding over the board (the region
//! under it gets selected); a left click is a press.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

/// Pointer gesture in terminal cell coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    Hover { column: u16, row: u16 },
    Press { column: u16, row: u16 },
}

impl PointerEvent {
    pub fn position(&self) -> (u16, u16) {
        match *self {
            PointerEvent::Hover { column, row } | PointerEvent::Press { column, row } => {
                (column, row)
            }
        }
    }
}

/// Map a mouse event to a pointer gesture.
pub fn handle_mouse_event(event: MouseEvent) -> Option<PointerEvent> {
    let (column, row) = (event.column, event.row);
    match event.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => Some(PointerEvent::Hover { column, row }),
        MouseEventKind::Down(MouseButton::Left) => Some(PointerEvent::Press { column, row }),
        _ => None,
    }
}
