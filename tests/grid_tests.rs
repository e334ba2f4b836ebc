//! Grid tests - region finding, matching and settling through the public API

use tui_samegame::core::{Grid, Region, SimpleRng};
use tui_samegame::types::{Cell, ColorId, Point, MAX_COLORS};

const A: Cell = Some(ColorId(0));
const B: Cell = Some(ColorId(1));
const E: Cell = None;

fn color_counts(grid: &Grid) -> [usize; MAX_COLORS as usize] {
    let mut counts = [0; MAX_COLORS as usize];
    for c in grid.cells().iter().flatten() {
        counts[c.index()] += 1;
    }
    counts
}

/// First cell (row-major) whose region can be matched.
fn first_match(grid: &Grid) -> Option<(Point, Region)> {
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let region = grid.region_at(x, y);
            if !region.is_empty() {
                return Some((Point::new(x, y), region));
            }
        }
    }
    None
}

fn assert_settled(grid: &Grid) {
    for x in 0..grid.width() {
        for y in 1..grid.height() {
            if grid.cell_at(x, y).is_none() {
                assert!(
                    grid.cell_at(x, y - 1).is_none(),
                    "tile floating above a gap at ({}, {})",
                    x,
                    y - 1
                );
            }
        }
    }
}

fn assert_no_inner_empty_columns(grid: &Grid) {
    let bottom = grid.height() - 1;
    let occupied: Vec<bool> = (0..grid.width())
        .map(|x| grid.cell_at(x, bottom).is_some())
        .collect();
    if let Some(last) = occupied.iter().rposition(|&o| o) {
        assert!(
            occupied[..=last].iter().all(|&o| o),
            "empty column left of a populated one: {:?}",
            occupied
        );
    }
}

#[test]
fn test_row_of_three_clears_completely() {
    let mut grid = Grid::from_rows(1, vec![vec![A, A, A]]);
    assert_eq!(
        grid.region_at(0, 0).sorted(),
        vec![Point::new(0, 0), Point::new(1, 0), Point::new(2, 0)]
    );
    assert_eq!(grid.match_at(0, 0), 3);
    assert_eq!(grid.to_rows(), vec![vec![E, E, E]]);
}

#[test]
fn test_cleared_left_column_collapses() {
    let mut grid = Grid::from_rows(2, vec![vec![A, B], vec![A, B]]);
    assert_eq!(grid.match_at(0, 0), 2);
    assert_eq!(grid.to_rows(), vec![vec![B, E], vec![B, E]]);
}

#[test]
fn test_single_cell_grid_never_matches() {
    let mut grid = Grid::new(1, 1, 1, &mut SimpleRng::new(3));
    assert!(grid.region_at(0, 0).is_empty());
    assert_eq!(grid.match_at(0, 0), 1);
    assert_eq!(grid.cell_at(0, 0), Some(ColorId(0)));
}

#[test]
fn test_isolated_cell_is_a_no_op() {
    let rows = vec![vec![A, B, A], vec![B, A, B], vec![A, B, A]];
    let mut grid = Grid::from_rows(2, rows.clone());
    for y in 0..3 {
        for x in 0..3 {
            assert!(grid.region_at(x, y).is_empty());
            assert_eq!(grid.match_at(x, y), 1);
            assert_eq!(grid.to_rows(), rows);
        }
    }
    assert!(!grid.has_matches());
}

#[test]
fn test_empty_cell_has_no_region() {
    let mut grid = Grid::from_rows(1, vec![vec![E, E], vec![A, A]]);
    assert!(grid.region_at(0, 0).is_empty());
    assert_eq!(grid.match_at(1, 0), 1);
}

#[test]
fn test_region_is_maximal_component() {
    for seed in 1..=20u32 {
        let grid = Grid::new(12, 9, 3, &mut SimpleRng::new(seed));
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                let region = grid.region_at(x, y);
                if region.is_empty() {
                    continue;
                }
                let color = grid.cell_at(x, y);
                assert!(region.contains(Point::new(x, y)));
                assert!(region.len() >= 2);
                for p in region.iter() {
                    assert_eq!(grid.cell_at(p.x, p.y), color);
                    let (px, py) = (p.x as i32, p.y as i32);
                    for (nx, ny) in [(px - 1, py), (px + 1, py), (px, py - 1), (px, py + 1)] {
                        if grid.get(nx, ny) == Some(color) {
                            assert!(
                                region.contains(Point::new(nx as u16, ny as u16)),
                                "seed {}: ({}, {}) missing from region",
                                seed,
                                nx,
                                ny
                            );
                        }
                    }
                }
            }
        }
    }
}

#[test]
fn test_match_conserves_colors_and_settles() {
    for seed in 1..=40u32 {
        let mut grid = Grid::new(10, 7, 4, &mut SimpleRng::new(seed));
        let (p, region) = first_match(&grid).expect("random board has a pair");
        let color = grid.cell_at(p.x, p.y).expect("occupied");
        let before = color_counts(&grid);
        let filled = grid.filled_count();

        let cleared = grid.match_at(p.x, p.y);
        assert_eq!(cleared as usize, region.len());
        assert_eq!(grid.filled_count(), filled - region.len());

        let mut expected = before;
        expected[color.index()] -= region.len();
        assert_eq!(color_counts(&grid), expected, "seed {}", seed);

        assert_settled(&grid);
        assert_no_inner_empty_columns(&grid);
    }
}

#[test]
fn test_match_leaves_outside_envelope_untouched() {
    for seed in 1..=40u32 {
        let mut grid = Grid::new(10, 7, 4, &mut SimpleRng::new(seed));
        let (p, region) = first_match(&grid).expect("random board has a pair");
        let bounds = region.bounds().expect("non-empty");
        let before = grid.clone();

        grid.match_at(p.x, p.y);

        for y in 0..grid.height() {
            for x in 0..bounds.min_x {
                assert_eq!(grid.cell_at(x, y), before.cell_at(x, y));
            }
        }
        if bounds.max_y < grid.height() - 1 {
            for y in bounds.max_y + 1..grid.height() {
                for x in 0..grid.width() {
                    assert_eq!(grid.cell_at(x, y), before.cell_at(x, y));
                }
            }
            for x in bounds.max_x + 1..grid.width() {
                for y in 0..grid.height() {
                    assert_eq!(grid.cell_at(x, y), before.cell_at(x, y));
                }
            }
        }
    }
}

#[test]
fn test_upper_clear_never_collapses_columns() {
    // The A pair sits above a B in column 0; that column keeps its position.
    let mut grid = Grid::from_rows(
        2,
        vec![
            vec![A, B],
            vec![A, A],
            vec![B, B],
        ],
    );
    assert_eq!(grid.region_at(0, 0).len(), 3);
    assert_eq!(grid.match_at(0, 0), 3);
    assert_eq!(grid.to_rows(), vec![vec![E, E], vec![E, B], vec![B, B]]);
}

#[test]
fn test_repeated_matches_until_stuck() {
    let mut grid = Grid::new(8, 6, 3, &mut SimpleRng::new(2024));
    let mut total = 0usize;
    let start = grid.filled_count();
    while let Some((p, _)) = first_match(&grid) {
        total += grid.match_at(p.x, p.y) as usize;
        assert_settled(&grid);
        assert_no_inner_empty_columns(&grid);
    }
    assert!(!grid.has_matches());
    assert_eq!(grid.filled_count(), start - total);
}
