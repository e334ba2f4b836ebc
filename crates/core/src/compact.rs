//! Compaction - re-packing the grid after a region is cleared
//!
//! Two gravity rules run in a single left-to-right sweep over the columns
//! touched by the cleared region, each column scanned bottom-to-top:
//!
//! - **Vertical settle**: tiles fall into the empty cells below them, keeping
//!   their relative order. Only rows `0..=max_y` are revisited; everything
//!   below the lowest cleared row was already resting and stays put.
//! - **Column collapse**: when the clear reached the bottom row, a column that
//!   ends up completely empty is closed by sliding every column on its right
//!   one step left. The sweep then runs to the right edge of the grid.
//!
//! Both rules share two cursors (the empty slot in the current column and the
//! target empty column) and swap cells in place, so there is no scratch
//! buffer. The functions work on a bare row-major slice so they can be tested
//! on hand-built boards without a [`Grid`](crate::Grid).

use crate::region::Bounds;
use crate::types::Cell;

/// Settle the grid inside `bounds` after its cells were cleared.
///
/// `cells` is row-major with `width * height` entries. `bounds` must lie inside
/// the grid.
pub fn compact(cells: &mut [Cell], width: u16, height: u16, bounds: Bounds) {
    debug_assert_eq!(cells.len(), width as usize * height as usize);
    debug_assert!(bounds.max_x < width && bounds.max_y < height);

    let width = width as usize;
    let bottom = height as usize - 1;
    let max_y = bounds.max_y as usize;
    let can_collapse = max_y == bottom;

    let mut max_x = bounds.max_x as usize;
    let mut target: Option<usize> = None;

    let mut x = bounds.min_x as usize;
    while x <= max_x {
        let moved = settle_column(cells, width, x, target.unwrap_or(x), max_y);
        let bottom_empty = cells[bottom * width + x].is_none();

        match target {
            None if can_collapse && bottom_empty => {
                target = Some(x);
                max_x = width - 1;
            }
            Some(t) if !bottom_empty || moved => target = Some(t + 1),
            _ => {}
        }

        x += 1;
    }
}

/// Settle column `src` into column `dst` over rows `0..=max_y`.
///
/// With `src == dst` this is plain gravity: tiles drop into the lowest empty
/// cells. With `dst != src` the destination column must be empty in that span;
/// every tile of `src` is moved across, landing on the same row unless an empty
/// cell below it in `src` lets it fall further.
///
/// Returns `true` if any tile moved.
pub fn settle_column(cells: &mut [Cell], width: usize, src: usize, dst: usize, max_y: usize) -> bool {
    let shifting = src != dst;
    let mut slot: Option<usize> = None;
    let mut moved = false;

    for y in (0..=max_y).rev() {
        let from = y * width + src;

        if cells[from].is_none() {
            if slot.is_none() {
                slot = Some(y);
            }
            continue;
        }

        if slot.is_none() && !shifting {
            continue;
        }

        // Invariant: slot > y, so the swap never touches the same cell.
        let row = slot.unwrap_or(y);
        cells.swap(row * width + dst, from);
        slot = slot.and_then(|s| s.checked_sub(1));
        moved = true;
    }

    moved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ColorId;

    const A: Cell = Some(ColorId(0));
    const B: Cell = Some(ColorId(1));
    const C: Cell = Some(ColorId(2));
    const E: Cell = None;

    fn bounds(min_x: u16, min_y: u16, max_x: u16, max_y: u16) -> Bounds {
        Bounds {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    #[test]
    fn settle_column_drops_tiles_into_gap() {
        // Single column, top to bottom: A, E, B, E
        let mut cells = vec![A, E, B, E];
        let moved = settle_column(&mut cells, 1, 0, 0, 3);
        assert!(moved);
        assert_eq!(cells, vec![E, E, A, B]);
    }

    #[test]
    fn settle_column_keeps_settled_column() {
        let mut cells = vec![E, A, B, C];
        let moved = settle_column(&mut cells, 1, 0, 0, 3);
        assert!(!moved);
        assert_eq!(cells, vec![E, A, B, C]);
    }

    #[test]
    fn settle_column_ignores_rows_below_max_y() {
        // Rows 0..=1 are scanned, the E at row 3 is left alone.
        let mut cells = vec![A, E, B, E];
        settle_column(&mut cells, 1, 0, 0, 1);
        assert_eq!(cells, vec![E, A, B, E]);
    }

    #[test]
    fn settle_column_shifts_into_empty_column() {
        // Two columns, 3 rows. Column 0 empty, column 1: B, E, C.
        #[rustfmt::skip]
        let mut cells = vec![
            E, B,
            E, E,
            E, C,
        ];
        let moved = settle_column(&mut cells, 2, 1, 0, 2);
        assert!(moved);
        #[rustfmt::skip]
        assert_eq!(cells, vec![
            E, E,
            B, E,
            C, E,
        ]);
    }

    #[test]
    fn compact_settles_vertical_gap() {
        // 2x3, middle of column 0 was cleared.
        #[rustfmt::skip]
        let mut cells = vec![
            A, B,
            E, B,
            C, A,
        ];
        compact(&mut cells, 2, 3, bounds(0, 1, 0, 1));
        #[rustfmt::skip]
        assert_eq!(cells, vec![
            E, B,
            A, B,
            C, A,
        ]);
    }

    #[test]
    fn compact_collapses_emptied_column() {
        // 2x2: left column cleared entirely.
        #[rustfmt::skip]
        let mut cells = vec![
            E, B,
            E, B,
        ];
        compact(&mut cells, 2, 2, bounds(0, 0, 0, 1));
        #[rustfmt::skip]
        assert_eq!(cells, vec![
            B, E,
            B, E,
        ]);
    }

    #[test]
    fn compact_absorbs_consecutive_empty_columns() {
        // 4x2: columns 1 and 2 cleared, column 3 must land in column 1.
        #[rustfmt::skip]
        let mut cells = vec![
            A, E, E, C,
            A, E, E, B,
        ];
        compact(&mut cells, 4, 2, bounds(1, 0, 2, 1));
        #[rustfmt::skip]
        assert_eq!(cells, vec![
            A, C, E, E,
            A, B, E, E,
        ]);
    }

    #[test]
    fn compact_settles_while_shifting() {
        // 3x3: column 0 cleared, column 2 has a hole at the bottom.
        #[rustfmt::skip]
        let mut cells = vec![
            E, B, C,
            E, B, A,
            E, A, E,
        ];
        compact(&mut cells, 3, 3, bounds(0, 0, 0, 2));
        // Column 1 slides into column 0; column 2 falls one row while sliding.
        #[rustfmt::skip]
        assert_eq!(cells, vec![
            B, E, E,
            B, C, E,
            A, A, E,
        ]);
    }

    #[test]
    fn compact_without_bottom_row_never_collapses() {
        // 2x3: top two rows of column 0 cleared, bottom of column 0 occupied.
        #[rustfmt::skip]
        let mut cells = vec![
            E, B,
            E, B,
            A, C,
        ];
        let before = cells.clone();
        compact(&mut cells, 2, 3, bounds(0, 0, 0, 1));
        assert_eq!(cells, before);
    }

    #[test]
    fn compact_leaves_columns_left_of_region() {
        #[rustfmt::skip]
        let mut cells = vec![
            A, E, C,
            E, E, C,
        ];
        compact(&mut cells, 3, 2, bounds(1, 0, 1, 1));
        // Column 0 has a gap but lies outside the sweep.
        #[rustfmt::skip]
        assert_eq!(cells, vec![
            A, C, E,
            E, C, E,
        ]);
    }

    #[test]
    fn compact_single_cell_bounds_is_trivial() {
        let mut cells = vec![E];
        compact(&mut cells, 1, 1, bounds(0, 0, 0, 0));
        assert_eq!(cells, vec![E]);
    }
}
