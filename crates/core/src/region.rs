//! Region module - connected same-color cell sets
//!
//! A [`Region`] is a transient query result: it is computed fresh by
//! [`Grid::region_at`](crate::Grid::region_at) and never stored inside the grid.

use std::collections::HashSet;

use crate::types::Point;

/// A set of grid coordinates sharing one color and connected through
/// up/down/left/right neighbors.
///
/// An empty region means "nothing to match here".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Region {
    points: HashSet<Point>,
}

impl Region {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn contains(&self, p: Point) -> bool {
        self.points.contains(&p)
    }

    /// Insert a point, returning `false` if it was already present.
    pub fn insert(&mut self, p: Point) -> bool {
        self.points.insert(p)
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        self.points.iter().copied()
    }

    /// Smallest rectangle containing every point, or `None` for an empty region.
    pub fn bounds(&self) -> Option<Bounds> {
        let mut it = self.points.iter();
        let first = *it.next()?;
        let mut b = Bounds {
            min_x: first.x,
            min_y: first.y,
            max_x: first.x,
            max_y: first.y,
        };
        for p in it {
            b.min_x = b.min_x.min(p.x);
            b.min_y = b.min_y.min(p.y);
            b.max_x = b.max_x.max(p.x);
            b.max_y = b.max_y.max(p.y);
        }
        Some(b)
    }

    /// Points sorted row-major. Handy for stable output and assertions.
    pub fn sorted(&self) -> Vec<Point> {
        let mut v: Vec<Point> = self.iter().collect();
        v.sort_by_key(|p| (p.y, p.x));
        v
    }
}

impl FromIterator<Point> for Region {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

/// Inclusive axis-aligned bounding box of a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min_x: u16,
    pub min_y: u16,
    pub max_x: u16,
    pub max_y: u16,
}

impl Bounds {
    /// Box covering a single cell.
    pub fn cell(p: Point) -> Self {
        Self {
            min_x: p.x,
            min_y: p.y,
            max_x: p.x,
            max_y: p.y,
        }
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_region_has_no_bounds() {
        assert_eq!(Region::new().bounds(), None);
    }

    #[test]
    fn bounds_cover_all_points() {
        let region: Region = [Point::new(3, 1), Point::new(1, 4), Point::new(2, 2)]
            .into_iter()
            .collect();
        assert_eq!(
            region.bounds(),
            Some(Bounds {
                min_x: 1,
                min_y: 1,
                max_x: 3,
                max_y: 4,
            })
        );
    }

    #[test]
    fn insert_deduplicates() {
        let mut region = Region::new();
        assert!(region.insert(Point::new(0, 0)));
        assert!(!region.insert(Point::new(0, 0)));
        assert_eq!(region.len(), 1);
    }

    #[test]
    fn sorted_is_row_major() {
        let region: Region = [Point::new(1, 1), Point::new(0, 1), Point::new(2, 0)]
            .into_iter()
            .collect();
        assert_eq!(
            region.sorted(),
            vec![Point::new(2, 0), Point::new(0, 1), Point::new(1, 1)]
        );
    }
}
