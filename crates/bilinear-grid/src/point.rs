//! Integer grid vertices and their neighborhoods.
//!
//! Grid indices are 1-based: a grid with bounds `(ni, nj)` has vertices
//! `1..=ni` along the first axis and `1..=nj` along the second. The first
//! index follows the continuous `x` axis, the second follows `y`.

use std::fmt;

use nalgebra::{DMatrix, Point2, Scalar};
use num_traits::Float;
use serde::{Deserialize, Serialize};

use crate::{Field, GridError};

/// Floating-point scalar of continuous positions (`f32` or `f64`).
pub trait Coordinate: Float + Scalar {}

impl<S: Float + Scalar> Coordinate for S {}

/// Extent of a grid: the largest valid index on each axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridBounds {
    pub ni: i32,
    pub nj: i32,
}

impl GridBounds {
    pub const fn new(ni: i32, nj: i32) -> Self {
        Self { ni, nj }
    }

    /// Bounds of a `rows × cols` array. Sizes beyond `i32::MAX` saturate.
    pub fn from_shape(rows: usize, cols: usize) -> Self {
        Self {
            ni: i32::try_from(rows).unwrap_or(i32::MAX),
            nj: i32::try_from(cols).unwrap_or(i32::MAX),
        }
    }

    /// Number of vertices in the grid.
    pub fn len(&self) -> usize {
        self.ni.max(0) as usize * self.nj.max(0) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn contains(&self, point: GridPoint) -> bool {
        point.is_inside_grid(*self)
    }
}

impl fmt::Display for GridBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.ni, self.nj)
    }
}

impl From<(i32, i32)> for GridBounds {
    fn from((ni, nj): (i32, i32)) -> Self {
        Self::new(ni, nj)
    }
}

/// Cardinal step on the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Left,
    Right,
    Bottom,
    Top,
}

impl Direction {
    /// All directions in their canonical order.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Bottom,
        Direction::Top,
    ];

    /// Direction at position `index` of [`Direction::ALL`].
    pub fn from_index(index: usize) -> Option<Direction> {
        Self::ALL.get(index).copied()
    }

    /// `(di, dj)` step taken by this direction.
    #[inline]
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Bottom => (0, -1),
            Direction::Top => (0, 1),
        }
    }
}

/// Which surrounding vertices count as neighbors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Neighborhood {
    /// Cardinal neighbors only.
    #[default]
    Four,
    /// Cardinal and diagonal neighbors.
    Eight,
}

/// An integer vertex `(i, j)` of a regular grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridPoint {
    pub i: i32,
    pub j: i32,
}

impl GridPoint {
    pub const fn new(i: i32, j: i32) -> Self {
        Self { i, j }
    }

    /// Snap a continuous position to the closest vertex.
    ///
    /// Each axis is rounded independently, halves away from zero.
    pub fn nearest<S: Coordinate>(position: Point2<S>) -> Result<Self, GridError> {
        Ok(Self::new(
            to_index(position.x.round())?,
            to_index(position.y.round())?,
        ))
    }

    #[inline]
    pub const fn coordinates(&self) -> (i32, i32) {
        (self.i, self.j)
    }

    /// Step by `(di, dj)`.
    ///
    /// Steps wrap around the `i32` range, so stepping off the edge of the
    /// index space lands far outside any grid instead of panicking. Use
    /// [`GridPoint::checked_offset`] to detect that case.
    #[inline]
    pub const fn offset(&self, di: i32, dj: i32) -> Self {
        Self::new(self.i.wrapping_add(di), self.j.wrapping_add(dj))
    }

    /// Step by `(di, dj)`, or `None` when either index leaves the `i32` range.
    #[inline]
    pub const fn checked_offset(&self, di: i32, dj: i32) -> Option<Self> {
        match (self.i.checked_add(di), self.j.checked_add(dj)) {
            (Some(i), Some(j)) => Some(Self::new(i, j)),
            _ => None,
        }
    }

    #[inline]
    pub const fn neighbor(&self, direction: Direction) -> Self {
        let (di, dj) = direction.offset();
        self.offset(di, dj)
    }

    #[inline]
    pub const fn left(&self) -> Self {
        self.neighbor(Direction::Left)
    }

    #[inline]
    pub const fn right(&self) -> Self {
        self.neighbor(Direction::Right)
    }

    #[inline]
    pub const fn bottom(&self) -> Self {
        self.neighbor(Direction::Bottom)
    }

    #[inline]
    pub const fn top(&self) -> Self {
        self.neighbor(Direction::Top)
    }

    /// `1 <= i <= ni` and `1 <= j <= nj`.
    #[inline]
    pub fn is_inside_grid(&self, bounds: GridBounds) -> bool {
        (1..=bounds.ni).contains(&self.i) && (1..=bounds.nj).contains(&self.j)
    }

    #[inline]
    pub fn is_outside_grid(&self, bounds: GridBounds) -> bool {
        !self.is_inside_grid(bounds)
    }

    /// Surrounding vertices in a fixed order.
    ///
    /// `Four` yields `[left, right, bottom, top]`. `Eight` walks
    /// counter-clockwise from the top-left corner:
    /// `[top-left, left, bottom-left, bottom, bottom-right, right, top-right, top]`.
    /// Diagonals are reached by chaining two cardinal steps.
    pub fn neighbors(&self, kind: Neighborhood) -> Vec<GridPoint> {
        match kind {
            Neighborhood::Four => Direction::ALL.iter().map(|&d| self.neighbor(d)).collect(),
            Neighborhood::Eight => vec![
                self.top().left(),
                self.left(),
                self.bottom().left(),
                self.bottom(),
                self.bottom().right(),
                self.right(),
                self.top().right(),
                self.top(),
            ],
        }
    }
}

impl fmt::Display for GridPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.i, self.j)
    }
}

impl From<(i32, i32)> for GridPoint {
    fn from((i, j): (i32, i32)) -> Self {
        Self::new(i, j)
    }
}

impl From<[i32; 2]> for GridPoint {
    fn from([i, j]: [i32; 2]) -> Self {
        Self::new(i, j)
    }
}

impl From<GridPoint> for Point2<f64> {
    fn from(p: GridPoint) -> Self {
        Point2::new(p.i as f64, p.j as f64)
    }
}

impl From<GridPoint> for Point2<f32> {
    fn from(p: GridPoint) -> Self {
        Point2::new(p.i as f32, p.j as f32)
    }
}

/// Round a continuous position to its nearest vertex coordinates.
pub fn nearest<S: Coordinate>(position: Point2<S>) -> Result<(i32, i32), GridError> {
    GridPoint::nearest(position).map(|p| p.coordinates())
}

/// Every vertex of the grid, `i` varying fastest.
pub fn grid_points(bounds: GridBounds) -> impl Iterator<Item = GridPoint> {
    let GridBounds { ni, nj } = bounds;
    (1..=nj).flat_map(move |j| (1..=ni).map(move |i| GridPoint::new(i, j)))
}

/// All vertices of the grid as a matrix; entry `(r, c)` holds `(r + 1, c + 1)`.
pub fn materialize_grid(bounds: GridBounds) -> DMatrix<GridPoint> {
    let rows = bounds.ni.max(0) as usize;
    let cols = bounds.nj.max(0) as usize;
    DMatrix::from_fn(rows, cols, |r, c| GridPoint::new(r as i32 + 1, c as i32 + 1))
}

/// [`materialize_grid`] over the bounds of an existing field.
pub fn materialize_grid_like<F: Field + ?Sized>(field: &F) -> DMatrix<GridPoint> {
    materialize_grid(field.bounds())
}

#[inline]
pub(crate) fn to_index<S: Coordinate>(v: S) -> Result<i32, GridError> {
    v.to_i32().ok_or(GridError::NonFiniteCoordinate)
}
