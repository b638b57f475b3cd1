use super::*;
use nalgebra::Point3;
use std::collections::HashSet;

fn grid_with_invalid(width: usize, height: usize, invalid: &[(usize, usize)]) -> OrganizedGrid {
    let holes: HashSet<(usize, usize)> = invalid.iter().copied().collect();
    OrganizedGrid::from_fn(width, height, |c, r| {
        if holes.contains(&(c, r)) {
            Point3::new(f32::NAN, f32::NAN, f32::NAN)
        } else {
            Point3::new(c as f32 * 0.01, r as f32 * 0.01, 1.0)
        }
    })
}

fn coord_set(coords: &[GridCoord]) -> HashSet<(usize, usize)> {
    coords.iter().map(|c| (c.col, c.row)).collect()
}

fn full_frame_polygon(width: usize, height: usize) -> Vec<GridCoord> {
    vec![
        GridCoord::new(0, 0),
        GridCoord::new(width - 1, 0),
        GridCoord::new(width - 1, height - 1),
        GridCoord::new(0, height - 1),
    ]
}

#[test]
fn grower_returns_maximal_component() {
    let cells = [(2, 2), (3, 2), (4, 2), (4, 3), (4, 4), (6, 6)];
    let grid = grid_with_invalid(9, 9, &cells);
    let mut grower = RegionGrower::new(&grid);
    let hole = grower.grow(GridCoord::new(2, 2));

    let expected: HashSet<_> = cells[..5].iter().copied().collect();
    assert_eq!(coord_set(&hole.interior), expected);
    assert_eq!(hole.interior.len(), 5, "interior cells must not repeat");

    let expected_border: HashSet<_> = [
        (1, 2),
        (2, 1),
        (2, 3),
        (3, 1),
        (3, 3),
        (4, 1),
        (5, 2),
        (5, 3),
        (3, 4),
        (5, 4),
        (4, 5),
    ]
    .into_iter()
    .collect();
    assert_eq!(coord_set(&hole.border), expected_border);
    assert_eq!(hole.border.len(), expected_border.len(), "border cells must not repeat");

    for c in &hole.interior {
        assert!(grower.is_visited(*c));
    }
    assert!(!grower.is_visited(GridCoord::new(6, 6)));
}

#[test]
fn diagonal_cells_are_separate_holes() {
    let grid = grid_with_invalid(5, 5, &[(1, 1), (2, 2)]);
    let mut grower = RegionGrower::new(&grid);
    let hole = grower.grow(GridCoord::new(1, 1));
    assert_eq!(hole.interior, vec![GridCoord::new(1, 1)]);
    assert!(!grower.is_visited(GridCoord::new(2, 2)));
}

#[test]
fn adjacent_holes_share_border_cells() {
    let mut cells = Vec::new();
    for r in 0..4 {
        cells.push((2, r));
        cells.push((4, r));
    }
    let grid = grid_with_invalid(7, 4, &cells);
    let mut grower = RegionGrower::new(&grid);
    let left = grower.grow(GridCoord::new(2, 1));
    let right = grower.grow(GridCoord::new(4, 1));

    assert_eq!(left.size(), 4);
    assert_eq!(right.size(), 4);
    let shared: HashSet<_> = (0..4).map(|r| (3, r)).collect();
    assert!(shared.is_subset(&coord_set(&left.border)));
    assert!(shared.is_subset(&coord_set(&right.border)));
    assert!(coord_set(&left.interior).is_disjoint(&coord_set(&right.interior)));
}

#[test]
fn border_cell_touching_two_interior_cells_is_listed_once() {
    // (2, 2) neighbours both (2, 1) and (1, 2).
    let grid = grid_with_invalid(5, 5, &[(1, 1), (2, 1), (1, 2)]);
    let mut grower = RegionGrower::new(&grid);
    let hole = grower.grow(GridCoord::new(1, 1));
    assert_eq!(hole.size(), 3);
    let corner = hole
        .border
        .iter()
        .filter(|&&c| c == GridCoord::new(2, 2))
        .count();
    assert_eq!(corner, 1);
    assert_eq!(hole.border.len(), coord_set(&hole.border).len());
}

#[test]
fn grower_handles_large_regions_without_recursion() {
    let (w, h) = (400usize, 300usize);
    let mut cells = Vec::new();
    for r in 1..h - 1 {
        for c in 1..w - 1 {
            cells.push((c, r));
        }
    }
    let grid = grid_with_invalid(w, h, &cells);
    let mut grower = RegionGrower::new(&grid);
    let hole = grower.grow(GridCoord::new(1, 1));
    assert_eq!(hole.size(), (w - 2) * (h - 2));
    assert_eq!(hole.border.len(), 2 * (w - 2) + 2 * (h - 2));
}

#[test]
fn scan_applies_minimum_size() {
    let mut cells = Vec::new();
    for r in 10..15 {
        for c in 10..15 {
            cells.push((c, r));
        }
    }
    cells.extend_from_slice(&[(30, 30), (31, 30), (30, 31)]);
    let grid = grid_with_invalid(40, 40, &cells);
    let polygon = full_frame_polygon(40, 40);
    let bounds = GridBounds::from_coords(&polygon, 40, 40);

    let scan = scan_holes(&grid, &polygon, &bounds, 15);
    assert_eq!(scan.holes.len(), 1);
    assert_eq!(scan.holes[0].size(), 25);
    assert_eq!(scan.too_small, 1);

    let strict = scan_holes(&grid, &polygon, &bounds, 25);
    assert!(strict.holes.is_empty(), "size must exceed the minimum");
}

#[test]
fn scan_ignores_regions_seeded_outside_polygon() {
    let mut cells = Vec::new();
    for r in 2..8 {
        for c in 2..8 {
            cells.push((c, r));
        }
    }
    let grid = grid_with_invalid(40, 40, &cells);
    let polygon = vec![
        GridCoord::new(20, 20),
        GridCoord::new(35, 20),
        GridCoord::new(35, 35),
        GridCoord::new(20, 35),
    ];
    let bounds = GridBounds::from_coords(&polygon, 40, 40);
    let scan = scan_holes(&grid, &polygon, &bounds, 5);
    assert!(scan.holes.is_empty());
}

#[test]
fn scan_is_repeatable() {
    let mut cells = Vec::new();
    for r in 5..12 {
        for c in 5..9 {
            cells.push((c, r));
        }
    }
    let grid = grid_with_invalid(20, 20, &cells);
    let polygon = full_frame_polygon(20, 20);
    let bounds = GridBounds::from_coords(&polygon, 20, 20);
    let a = scan_holes(&grid, &polygon, &bounds, 3);
    let b = scan_holes(&grid, &polygon, &bounds, 3);
    assert_eq!(a.holes, b.holes);
}

#[test]
fn classification_thresholds() {
    let overlap = Containment {
        inside: 10,
        outside: 5,
    };
    assert_eq!(classify_counts(overlap, 2.0), HoleClass::Overlap);

    let outside = Containment {
        inside: 5,
        outside: 15,
    };
    assert_eq!(classify_counts(outside, 2.0), HoleClass::Outside);

    let inside = Containment {
        inside: 10,
        outside: 0,
    };
    assert_eq!(classify_counts(inside, 2.0), HoleClass::Inside);

    let boundary = Containment {
        inside: 5,
        outside: 10,
    };
    assert_eq!(classify_counts(boundary, 2.0), HoleClass::Overlap);
}

#[test]
fn classify_hole_counts_interior_against_polygon() {
    let polygon = vec![
        GridCoord::new(0, 0),
        GridCoord::new(10, 0),
        GridCoord::new(10, 10),
        GridCoord::new(0, 10),
    ];
    let hole = Hole {
        interior: vec![
            GridCoord::new(5, 5),
            GridCoord::new(6, 5),
            GridCoord::new(12, 5),
        ],
        border: Vec::new(),
    };
    let (class, counts) = classify_hole(&hole, &polygon, 2.0);
    assert_eq!(counts, Containment { inside: 2, outside: 1 });
    assert_eq!(class, HoleClass::Overlap);
}
