//! Bilinear weights, interpolation and the analytic gradient of the
//! bilinear patch spanned by a [`Cell`].

use std::ops::{Add, Mul, Sub};

use nalgebra::Point2;

use crate::{Cell, Coordinate, Field, GridError};

/// Values that can be blended by bilinear interpolation with weights of type `S`.
///
/// Implemented for `f32`/`f64` (with `S` of the same type) and for
/// `nalgebra` vectors, among others.
pub trait FieldValue<S>:
    Copy + Add<Output = Self> + Sub<Output = Self> + Mul<S, Output = Self>
{
}

impl<T, S> FieldValue<S> for T where
    T: Copy + Add<Output = T> + Sub<Output = T> + Mul<S, Output = T>
{
}

/// `a * (1 - w) + b * w`.
#[inline]
pub fn lerp<S: Coordinate, T: FieldValue<S>>(a: T, b: T, w: S) -> T {
    a * (S::one() - w) + b * w
}

/// Weights of the four corners of `cell` at `position`, in corner order
/// `[bottom_left, bottom_right, top_left, top_right]`.
///
/// No clamping is applied: positions outside the cell extrapolate.
pub fn bilinear_weights<S: Coordinate>(cell: &Cell, position: Point2<S>) -> [S; 4] {
    let (dx, dy) = cell.local(position);
    let one = S::one();
    [
        (one - dx) * (one - dy),
        dx * (one - dy),
        (one - dx) * dy,
        dx * dy,
    ]
}

/// Reads the corners in corner order.
#[inline]
fn corner_values<F>(field: &F, cell: &Cell) -> Result<[F::Value; 4], GridError>
where
    F: Field + ?Sized,
{
    Ok([
        field.value(cell.bottom_left)?,
        field.value(cell.bottom_right)?,
        field.value(cell.top_left)?,
        field.value(cell.top_right)?,
    ])
}

/// Bilinear interpolation of `field` at `position`.
///
/// The enclosing cell is derived from `position`; use
/// [`interpolate_bilinear_in`] to reuse a cell already at hand.
pub fn interpolate_bilinear<S, F>(field: &F, position: Point2<S>) -> Result<F::Value, GridError>
where
    S: Coordinate,
    F: Field + ?Sized,
    F::Value: FieldValue<S>,
{
    let cell = Cell::containing(position)?;
    interpolate_bilinear_in(field, position, &cell)
}

/// Bilinear interpolation of `field` at `position` over a given `cell`.
///
/// Interpolates along `x` on the bottom and top edges, then along `y`
/// between the two.
#[inline]
pub fn interpolate_bilinear_in<S, F>(
    field: &F,
    position: Point2<S>,
    cell: &Cell,
) -> Result<F::Value, GridError>
where
    S: Coordinate,
    F: Field + ?Sized,
    F::Value: FieldValue<S>,
{
    let [bl, br, tl, tr] = corner_values(field, cell)?;
    let (dx, dy) = cell.local(position);
    let bottom = lerp(bl, br, dx);
    let top = lerp(tl, tr, dx);
    Ok(lerp(bottom, top, dy))
}

/// `Σ wₖ · field[cornerₖ]` through [`bilinear_weights`].
///
/// Agrees with [`interpolate_bilinear_in`] up to rounding, but materializes
/// the weights first.
pub fn interpolate_weighted<S, F>(
    field: &F,
    position: Point2<S>,
    cell: &Cell,
) -> Result<F::Value, GridError>
where
    S: Coordinate,
    F: Field + ?Sized,
    F::Value: FieldValue<S>,
{
    let values = corner_values(field, cell)?;
    let weights = bilinear_weights(cell, position);
    let mut acc = values[0] * weights[0];
    for (v, w) in values.into_iter().zip(weights).skip(1) {
        acc = acc + v * w;
    }
    Ok(acc)
}

/// Gradient `(∂/∂x, ∂/∂y)` of the bilinear patch around `position`.
pub fn estimate_gradient<S, F>(
    field: &F,
    position: Point2<S>,
) -> Result<(F::Value, F::Value), GridError>
where
    S: Coordinate,
    F: Field + ?Sized,
    F::Value: FieldValue<S>,
{
    let cell = Cell::containing(position)?;
    estimate_gradient_in(field, position, &cell)
}

/// [`estimate_gradient`] over a given `cell`.
///
/// `gx` blends the bottom and top edge slopes by `dx`; `gy` blends the
/// right and left edge slopes by `dy`.
pub fn estimate_gradient_in<S, F>(
    field: &F,
    position: Point2<S>,
    cell: &Cell,
) -> Result<(F::Value, F::Value), GridError>
where
    S: Coordinate,
    F: Field + ?Sized,
    F::Value: FieldValue<S>,
{
    let [bl, br, tl, tr] = corner_values(field, cell)?;
    let (dx, dy) = cell.local(position);
    let gx = lerp(br - bl, tr - tl, dx);
    let gy = lerp(tr - br, tl - bl, dy);
    Ok((gx, gy))
}
