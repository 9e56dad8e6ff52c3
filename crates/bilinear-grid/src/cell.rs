//! Unit cells enclosing a continuous coordinate.

use std::ops::Index;

use nalgebra::Point2;
use serde::{Deserialize, Serialize};

use crate::point::to_index;
use crate::{Coordinate, GridBounds, GridError, GridPoint};

/// The four vertices of the unit square around a continuous position.
///
/// Corners are iterated and indexed as
/// `[bottom_left, bottom_right, top_left, top_right]`, which is not the
/// order the fields are declared in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub bottom_left: GridPoint,
    pub bottom_right: GridPoint,
    pub top_right: GridPoint,
    pub top_left: GridPoint,
}

impl Cell {
    /// Cell whose lower-left vertex is `bottom_left`.
    ///
    /// Corners follow [`GridPoint::offset`] and wrap at `i32::MAX`;
    /// [`Cell::containing`] rejects positions where that would happen.
    pub const fn from_bottom_left(bottom_left: GridPoint) -> Self {
        Self {
            bottom_left,
            bottom_right: bottom_left.right(),
            top_right: bottom_left.offset(1, 1),
            top_left: bottom_left.top(),
        }
    }

    /// Cell containing `position`, found by flooring each axis.
    ///
    /// Fails with [`GridError::NonFiniteCoordinate`] when a corner index,
    /// including the upper `+1` corners, does not fit in `i32`.
    pub fn containing<S: Coordinate>(position: Point2<S>) -> Result<Self, GridError> {
        let bottom_left = GridPoint::new(
            to_index(position.x.floor())?,
            to_index(position.y.floor())?,
        );
        if bottom_left.checked_offset(1, 1).is_none() {
            return Err(GridError::NonFiniteCoordinate);
        }
        Ok(Self::from_bottom_left(bottom_left))
    }

    /// Like [`Cell::containing`], but a component at or past its bound is
    /// moved back by one first, so the upper corners stay inside `bounds`
    /// when sampling exactly on the last vertex.
    pub fn containing_within<S: Coordinate>(
        position: Point2<S>,
        bounds: GridBounds,
    ) -> Result<Self, GridError> {
        let shift = |v: S, bound: i32| -> Result<S, GridError> {
            let bound = S::from(bound).ok_or(GridError::NonFiniteCoordinate)?;
            Ok(if v >= bound { v - S::one() } else { v })
        };
        let shifted = Point2::new(shift(position.x, bounds.ni)?, shift(position.y, bounds.nj)?);
        if shifted != position {
            log::trace!("cell position shifted back inside {bounds}");
        }
        Self::containing(shifted)
    }

    /// Corners in iteration order.
    #[inline]
    pub const fn corners(&self) -> [GridPoint; 4] {
        [
            self.bottom_left,
            self.bottom_right,
            self.top_left,
            self.top_right,
        ]
    }

    pub fn iter(&self) -> std::array::IntoIter<GridPoint, 4> {
        self.corners().into_iter()
    }

    /// True when every corner is a valid vertex of `bounds`.
    pub fn is_inside_grid(&self, bounds: GridBounds) -> bool {
        self.iter().all(|p| p.is_inside_grid(bounds))
    }

    /// Offsets of `position` from the lower-left vertex.
    #[inline]
    pub(crate) fn local<S: Coordinate>(&self, position: Point2<S>) -> (S, S) {
        let cx = S::from(self.bottom_left.i).expect("i32 converts to any float scalar");
        let cy = S::from(self.bottom_left.j).expect("i32 converts to any float scalar");
        (position.x - cx, position.y - cy)
    }
}

impl Index<usize> for Cell {
    type Output = GridPoint;

    fn index(&self, index: usize) -> &GridPoint {
        match index {
            0 => &self.bottom_left,
            1 => &self.bottom_right,
            2 => &self.top_left,
            3 => &self.top_right,
            _ => panic!("cell corner index out of range: {index} (expected 0..4)"),
        }
    }
}

impl IntoIterator for Cell {
    type Item = GridPoint;
    type IntoIter = std::array::IntoIter<GridPoint, 4>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &Cell {
    type Item = GridPoint;
    type IntoIter = std::array::IntoIter<GridPoint, 4>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
