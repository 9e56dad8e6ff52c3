//! Read and write access to caller-owned 2D fields by grid point.
//!
//! Flat buffers use the same layout as a grayscale image: `i` varies
//! fastest, so vertex `(i, j)` lives at `data[(j - 1) * ni + (i - 1)]`.
//! This is also the column-major storage order of a `ni × nj`
//! [`nalgebra::DMatrix`].

use std::ops::{Index, IndexMut};

use nalgebra::{DMatrix, Scalar};

use crate::{GridBounds, GridError, GridPoint};

/// A 2D array of values addressed by 1-based [`GridPoint`]s.
pub trait Field {
    type Value: Copy;

    fn bounds(&self) -> GridBounds;

    /// Value at `point`, or `None` outside the grid.
    fn get(&self, point: GridPoint) -> Option<&Self::Value>;

    /// Value at `point`, failing with [`GridError::OutOfBounds`] outside the grid.
    #[inline]
    fn value(&self, point: GridPoint) -> Result<Self::Value, GridError> {
        self.get(point).copied().ok_or(GridError::OutOfBounds {
            point,
            bounds: self.bounds(),
        })
    }
}

/// A [`Field`] that can also be written through.
pub trait FieldMut: Field {
    fn get_mut(&mut self, point: GridPoint) -> Option<&mut Self::Value>;

    fn set(&mut self, point: GridPoint, value: Self::Value) -> Result<(), GridError> {
        let bounds = self.bounds();
        let slot = self
            .get_mut(point)
            .ok_or(GridError::OutOfBounds { point, bounds })?;
        *slot = value;
        Ok(())
    }
}

#[inline]
fn linear_index(ni: usize, nj: usize, point: GridPoint) -> Option<usize> {
    if !point.is_inside_grid(GridBounds::from_shape(ni, nj)) {
        return None;
    }
    Some((point.j - 1) as usize * ni + (point.i - 1) as usize)
}

fn check_shape(ni: usize, nj: usize, len: usize) -> Result<(), GridError> {
    let expected = ni * nj;
    if expected != len {
        return Err(GridError::ShapeMismatch {
            expected,
            actual: len,
        });
    }
    Ok(())
}

/// Borrowed read-only view over a flat buffer of `ni * nj` values.
#[derive(Clone, Copy, Debug)]
pub struct FieldView<'a, T> {
    pub ni: usize,
    pub nj: usize,
    pub data: &'a [T],
}

impl<'a, T> FieldView<'a, T> {
    pub fn new(ni: usize, nj: usize, data: &'a [T]) -> Result<Self, GridError> {
        check_shape(ni, nj, data.len())?;
        Ok(Self { ni, nj, data })
    }
}

impl<T: Copy> Field for FieldView<'_, T> {
    type Value = T;

    fn bounds(&self) -> GridBounds {
        GridBounds::from_shape(self.ni, self.nj)
    }

    #[inline]
    fn get(&self, point: GridPoint) -> Option<&T> {
        linear_index(self.ni, self.nj, point).and_then(|k| self.data.get(k))
    }
}

impl<T: Copy> Index<GridPoint> for FieldView<'_, T> {
    type Output = T;

    fn index(&self, point: GridPoint) -> &T {
        match self.get(point) {
            Some(v) => v,
            None => panic!("grid point {point} out of range for {} field", self.bounds()),
        }
    }
}

/// Borrowed mutable view over a flat buffer of `ni * nj` values.
#[derive(Debug)]
pub struct FieldViewMut<'a, T> {
    pub ni: usize,
    pub nj: usize,
    pub data: &'a mut [T],
}

impl<'a, T> FieldViewMut<'a, T> {
    pub fn new(ni: usize, nj: usize, data: &'a mut [T]) -> Result<Self, GridError> {
        check_shape(ni, nj, data.len())?;
        Ok(Self { ni, nj, data })
    }

    pub fn as_view(&self) -> FieldView<'_, T> {
        FieldView {
            ni: self.ni,
            nj: self.nj,
            data: &*self.data,
        }
    }
}

impl<T: Copy> Field for FieldViewMut<'_, T> {
    type Value = T;

    fn bounds(&self) -> GridBounds {
        GridBounds::from_shape(self.ni, self.nj)
    }

    #[inline]
    fn get(&self, point: GridPoint) -> Option<&T> {
        linear_index(self.ni, self.nj, point).and_then(|k| self.data.get(k))
    }
}

impl<T: Copy> FieldMut for FieldViewMut<'_, T> {
    #[inline]
    fn get_mut(&mut self, point: GridPoint) -> Option<&mut T> {
        linear_index(self.ni, self.nj, point).and_then(|k| self.data.get_mut(k))
    }
}

impl<T: Copy> Index<GridPoint> for FieldViewMut<'_, T> {
    type Output = T;

    fn index(&self, point: GridPoint) -> &T {
        match self.get(point) {
            Some(v) => v,
            None => panic!("grid point {point} out of range for {} field", self.bounds()),
        }
    }
}

impl<T: Copy> IndexMut<GridPoint> for FieldViewMut<'_, T> {
    fn index_mut(&mut self, point: GridPoint) -> &mut T {
        let bounds = self.bounds();
        match self.get_mut(point) {
            Some(v) => v,
            None => panic!("grid point {point} out of range for {bounds} field"),
        }
    }
}

/// Row `i - 1`, column `j - 1` holds vertex `(i, j)`.
impl<T: Scalar + Copy> Field for DMatrix<T> {
    type Value = T;

    fn bounds(&self) -> GridBounds {
        GridBounds::from_shape(self.nrows(), self.ncols())
    }

    #[inline]
    fn get(&self, point: GridPoint) -> Option<&T> {
        if point.i < 1 || point.j < 1 {
            return None;
        }
        self.get(((point.i - 1) as usize, (point.j - 1) as usize))
    }
}

impl<T: Scalar + Copy> FieldMut for DMatrix<T> {
    #[inline]
    fn get_mut(&mut self, point: GridPoint) -> Option<&mut T> {
        if point.i < 1 || point.j < 1 {
            return None;
        }
        self.get_mut(((point.i - 1) as usize, (point.j - 1) as usize))
    }
}
