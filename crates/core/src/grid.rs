//! Grid module - the tile board and its match rules
//!
//! The grid is a `width x height` board where each cell is empty or holds a
//! tile color. Uses a flat row-major array (`y * width + x`) so compaction can
//! swap cells in O(1).
//! Coordinates: (x, y) where x grows to the right and y grows downward; row
//! `height - 1` is the bottom row that tiles fall towards.
//!
//! Coordinate arguments of [`Grid::cell_at`], [`Grid::region_at`] and
//! [`Grid::match_at`] must be in bounds. Input layers clamp before calling;
//! an out-of-range coordinate panics on the slice index.

use std::collections::VecDeque;

use arrayvec::ArrayVec;

use crate::compact::compact;
use crate::region::Region;
use crate::rng::RandomSource;
use crate::types::{Cell, Point, EMPTY};

/// The game board with flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: u16,
    height: u16,
    color_count: u8,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid and deal a random color into every cell.
    ///
    /// # Panics
    ///
    /// If `width`, `height` or `color_count` is zero.
    pub fn new(width: u16, height: u16, color_count: u8, rng: &mut impl RandomSource) -> Self {
        let mut grid = Self::empty(width, height, color_count);
        grid.randomize(rng);
        grid
    }

    fn empty(width: u16, height: u16, color_count: u8) -> Self {
        assert!(width >= 1 && height >= 1, "grid must be at least 1x1");
        assert!(color_count >= 1, "grid needs at least one color");
        Self {
            width,
            height,
            color_count,
            cells: vec![EMPTY; width as usize * height as usize],
        }
    }

    /// Build a grid from explicit row-major cells.
    ///
    /// # Panics
    ///
    /// If the cell count does not match the dimensions or a cell holds a color
    /// outside `[0, color_count)`.
    pub fn from_cells(width: u16, height: u16, color_count: u8, cells: Vec<Cell>) -> Self {
        let mut grid = Self::empty(width, height, color_count);
        assert_eq!(cells.len(), grid.cells.len(), "cell count does not match dimensions");
        assert!(
            cells.iter().flatten().all(|c| c.0 < color_count),
            "cell color out of range"
        );
        grid.cells = cells;
        grid
    }

    /// Build a grid from rows listed top to bottom.
    pub fn from_rows(color_count: u8, rows: Vec<Vec<Cell>>) -> Self {
        let height = rows.len() as u16;
        let width = rows.first().map_or(0, |r| r.len()) as u16;
        assert!(
            rows.iter().all(|r| r.len() == width as usize),
            "rows must have equal length"
        );
        Self::from_cells(width, height, color_count, rows.into_iter().flatten().collect())
    }

    /// Convert to rows (top to bottom) for display and assertions.
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        self.cells
            .chunks(self.width as usize)
            .map(|row| row.to_vec())
            .collect()
    }

    #[inline(always)]
    fn index(&self, x: u16, y: u16) -> usize {
        debug_assert!(x < self.width && y < self.height, "({x}, {y}) out of bounds");
        (y as usize) * (self.width as usize) + (x as usize)
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Number of distinct tile colors.
    pub fn color_count(&self) -> u8 {
        self.color_count
    }

    /// Cell at an in-bounds position.
    pub fn cell_at(&self, x: u16, y: u16) -> Cell {
        self.cells[self.index(x, y)]
    }

    /// Cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        if self.contains(x, y) {
            Some(self.cells[self.index(x as u16, y as u16)])
        } else {
            None
        }
    }

    /// Whether (x, y) lies on the board.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width as i32 && y < self.height as i32
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of cells still holding a tile.
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Deal an independent uniform color into every cell.
    ///
    /// The result has no empty cells and may or may not contain matches.
    pub fn randomize(&mut self, rng: &mut impl RandomSource) {
        let colors = self.color_count;
        for cell in &mut self.cells {
            *cell = Some(rng.next_color(colors));
        }
    }

    /// Up/down/left/right neighbors that lie on the board.
    fn neighbors(&self, p: Point) -> ArrayVec<Point, 4> {
        let mut out = ArrayVec::new();
        if p.x >= 1 {
            out.push(Point::new(p.x - 1, p.y));
        }
        if p.x + 1 < self.width {
            out.push(Point::new(p.x + 1, p.y));
        }
        if p.y >= 1 {
            out.push(Point::new(p.x, p.y - 1));
        }
        if p.y + 1 < self.height {
            out.push(Point::new(p.x, p.y + 1));
        }
        out
    }

    /// The connected same-color region containing (x, y).
    ///
    /// Returns an empty region when the cell is empty or has no same-color
    /// neighbor, so a non-empty result always means "this can be matched".
    pub fn region_at(&self, x: u16, y: u16) -> Region {
        let mut visited = Region::new();

        let Some(color) = self.cell_at(x, y) else {
            return visited;
        };

        let origin = Point::new(x, y);
        let mut queue = VecDeque::new();
        queue.push_back(origin);
        visited.insert(origin);

        while let Some(p) = queue.pop_front() {
            for n in self.neighbors(p) {
                if self.cell_at(n.x, n.y) == Some(color) && visited.insert(n) {
                    queue.push_back(n);
                }
            }
        }

        if visited.len() == 1 {
            visited.clear();
        }
        visited
    }

    /// Clear the region containing (x, y) and let the board settle.
    ///
    /// Returns the number of cleared cells, or `1` when there was nothing to
    /// match (the grid is then left untouched). Callers score `count - 1`.
    pub fn match_at(&mut self, x: u16, y: u16) -> u32 {
        let region = self.region_at(x, y);
        if region.len() <= 1 {
            return 1;
        }
        let Some(bounds) = region.bounds() else {
            return 1;
        };

        for p in region.iter() {
            let idx = self.index(p.x, p.y);
            self.cells[idx] = EMPTY;
        }

        compact(&mut self.cells, self.width, self.height, bounds);

        region.len() as u32
    }

    /// Whether any tile still has a same-color neighbor.
    pub fn has_matches(&self) -> bool {
        for y in 0..self.height {
            for x in 0..self.width {
                let Some(color) = self.cell_at(x, y) else {
                    continue;
                };
                let right = x + 1 < self.width && self.cell_at(x + 1, y) == Some(color);
                let below = y + 1 < self.height && self.cell_at(x, y + 1) == Some(color);
                if right || below {
                    return true;
                }
            }
        }
        false
    }
}
