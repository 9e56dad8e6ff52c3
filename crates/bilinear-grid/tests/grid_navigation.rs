use bilinear_grid::{
    grid_points, materialize_grid, materialize_grid_like, nearest, Direction, Field, FieldMut,
    FieldViewMut, GridBounds, GridPoint, Neighborhood,
};
use nalgebra::{DMatrix, Point2};
use std::collections::HashSet;

#[test]
fn nearest_snaps_to_closest_vertex() {
    assert_eq!(nearest(Point2::new(4.3, 6.9)).unwrap(), (4, 7));
    assert_eq!(
        GridPoint::nearest(Point2::new(0.49_f32, -0.51)).unwrap(),
        GridPoint::new(0, -1)
    );
}

#[test]
fn named_and_indexed_neighbors_agree() {
    let p = GridPoint::new(5, 5);
    assert_eq!(p.left(), GridPoint::new(4, 5));
    assert_eq!(p.right(), GridPoint::new(6, 5));
    assert_eq!(p.bottom(), GridPoint::new(5, 4));
    assert_eq!(p.top(), GridPoint::new(5, 6));
    let named = [p.left(), p.right(), p.bottom(), p.top()];
    for (k, expected) in named.into_iter().enumerate() {
        let d = Direction::from_index(k).unwrap();
        assert_eq!(d, Direction::ALL[k]);
        assert_eq!(p.neighbor(d), expected);
    }
}

#[test]
fn neighborhoods_are_distinct_and_adjacent() {
    let p = GridPoint::new(-2, 7);
    for (kind, len) in [(Neighborhood::Four, 4), (Neighborhood::Eight, 8)] {
        let ns = p.neighbors(kind);
        assert_eq!(ns.len(), len);
        let unique: HashSet<_> = ns.iter().copied().collect();
        assert_eq!(unique.len(), len);
        for n in ns {
            let (di, dj) = (n.i - p.i, n.j - p.j);
            assert!(di.abs() <= 1 && dj.abs() <= 1 && (di, dj) != (0, 0));
        }
    }
}

#[test]
fn membership_checks_match_reference_cases() {
    let bounds = GridBounds::new(5, 6);
    assert!(GridPoint::new(1, 0).is_outside_grid(bounds));
    assert!(!GridPoint::new(1, 1).is_outside_grid(bounds));
    assert!(!GridPoint::new(5, 6).is_outside_grid(bounds));
    assert!(GridPoint::new(6, 6).is_outside_grid(bounds));
}

#[test]
fn grid_enumeration_covers_every_index_once() {
    let bounds = GridBounds::new(4, 7);
    let seen: HashSet<_> = grid_points(bounds).collect();
    assert_eq!(seen.len(), 28);
    assert!(seen.iter().all(|p| p.is_inside_grid(bounds)));

    let grid = materialize_grid(bounds);
    let from_matrix: HashSet<_> = grid.iter().copied().collect();
    assert_eq!(from_matrix, seen);
    assert!(grid.iter().copied().eq(grid_points(bounds)));
}

#[test]
fn materialized_grid_follows_field_shape() {
    let m = DMatrix::<f32>::zeros(3, 5);
    let grid = materialize_grid_like(&m);
    assert_eq!(grid.shape(), (3, 5));
    assert_eq!(grid[(2, 4)], GridPoint::new(3, 5));
}

#[test]
fn writes_through_grid_points_land_in_caller_buffer() {
    let mut data = vec![0u8; 6];
    let mut field = FieldViewMut::new(2, 3, &mut data).unwrap();
    for p in grid_points(field.bounds()) {
        field[p] = (p.i * 10 + p.j) as u8;
    }
    assert!(field.set(GridPoint::new(0, 1), 1).is_err());
    assert_eq!(data, vec![11, 21, 12, 22, 13, 23]);
}
