//! Finite-difference gradient at a grid vertex.

use num_traits::Zero;

use crate::{lerp, Coordinate, Field, FieldValue, GridBounds, GridError, GridPoint};

/// Central-difference slopes `(slope_x, slope_y)` at `point` with unit spacing.
///
/// Along each axis the slope is `lerp(left, center, ½) - lerp(center, right, ½)`,
/// i.e. `(left - right) / 2`. On the first or last index of an axis the slope
/// along that axis is exactly zero.
///
/// `S` is the scalar used for the half weights; it cannot be inferred from
/// the arguments, so callers name it (`vertex_gradient::<f64, _>`) or go
/// through [`GridSampler`](crate::GridSampler).
pub fn vertex_gradient<S, F>(
    field: &F,
    point: GridPoint,
    bounds: GridBounds,
) -> Result<(F::Value, F::Value), GridError>
where
    S: Coordinate,
    F: Field + ?Sized,
    F::Value: FieldValue<S> + Zero,
{
    let center = field.value(point)?;
    let half = S::one() / (S::one() + S::one());

    let slope = |before: GridPoint, after: GridPoint| -> Result<F::Value, GridError> {
        let b = field.value(before)?;
        let a = field.value(after)?;
        Ok(lerp(b, center, half) - lerp(center, a, half))
    };

    let slope_x = if point.i == 1 || point.i == bounds.ni {
        <F::Value as Zero>::zero()
    } else {
        slope(point.left(), point.right())?
    };
    let slope_y = if point.j == 1 || point.j == bounds.nj {
        <F::Value as Zero>::zero()
    } else {
        slope(point.bottom(), point.top())?
    };
    Ok((slope_x, slope_y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::DMatrix;

    // f(i, j) = i^2 + 3j
    fn field() -> DMatrix<f64> {
        DMatrix::from_fn(5, 4, |r, c| {
            let (i, j) = ((r + 1) as f64, (c + 1) as f64);
            i * i + 3.0 * j
        })
    }

    #[test]
    fn interior_vertex_uses_central_difference() {
        let f = field();
        let bounds = Field::bounds(&f);
        let (sx, sy) = vertex_gradient::<f64, _>(&f, GridPoint::new(3, 2), bounds).unwrap();
        // (f(2,2) - f(4,2)) / 2 and (f(3,1) - f(3,3)) / 2
        assert_eq!(sx, (4.0 - 16.0) / 2.0);
        assert_eq!(sy, (3.0 - 9.0) / 2.0);
    }

    #[test]
    fn boundary_axes_are_zero() {
        let f = field();
        let bounds = Field::bounds(&f);
        let (sx, sy) = vertex_gradient::<f64, _>(&f, GridPoint::new(1, 4), bounds).unwrap();
        assert_eq!((sx, sy), (0.0, 0.0));

        let (sx, sy) = vertex_gradient::<f64, _>(&f, GridPoint::new(5, 2), bounds).unwrap();
        assert_eq!(sx, 0.0);
        assert_eq!(sy, -3.0);

        let (sx, sy) = vertex_gradient::<f64, _>(&f, GridPoint::new(2, 1), bounds).unwrap();
        assert_eq!(sx, (1.0 - 9.0) / 2.0);
        assert_eq!(sy, 0.0);
    }

    #[test]
    fn vertex_outside_grid_fails() {
        let f = field();
        let bounds = Field::bounds(&f);
        assert!(matches!(
            vertex_gradient::<f64, _>(&f, GridPoint::new(6, 2), bounds),
            Err(GridError::OutOfBounds { .. })
        ));
    }
}
