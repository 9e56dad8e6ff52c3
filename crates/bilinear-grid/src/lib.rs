//! Grid points, unit cells and bilinear interpolation over regular 2D grids.
//!
//! The crate is purely computational: it never owns field storage. Callers
//! hand in anything implementing [`Field`] (a [`FieldView`] over a flat
//! buffer, or an [`nalgebra::DMatrix`]) and continuous positions as
//! [`nalgebra::Point2`].
//!
//! Grid indices are 1-based: a field with bounds `(ni, nj)` has vertices
//! `(1, 1)` through `(ni, nj)`. The first index runs along `x`, the second
//! along `y`.
//!
//! ```
//! use bilinear_grid::{interpolate_bilinear, Cell, FieldView};
//! use nalgebra::Point2;
//!
//! // 2x2 field, `i` varying fastest
//! let data = [0.0_f64, 1.0, 2.0, 3.0];
//! let field = FieldView::new(2, 2, &data).unwrap();
//!
//! let p = Point2::new(1.5, 1.5);
//! assert_eq!(Cell::containing(p).unwrap().bottom_left.coordinates(), (1, 1));
//! assert_eq!(interpolate_bilinear(&field, p).unwrap(), 1.5);
//! ```

mod bilinear;
mod cell;
mod error;
mod field;
mod gradient;
mod logger;
mod point;
mod sampler;

pub use bilinear::{
    bilinear_weights, estimate_gradient, estimate_gradient_in, interpolate_bilinear,
    interpolate_bilinear_in, interpolate_weighted, lerp, FieldValue,
};
pub use cell::Cell;
pub use error::GridError;
pub use field::{Field, FieldMut, FieldView, FieldViewMut};
pub use gradient::vertex_gradient;
pub use point::{
    grid_points, materialize_grid, materialize_grid_like, nearest, Coordinate, Direction,
    GridBounds, GridPoint, Neighborhood,
};
pub use sampler::{GridSampler, SamplerParams};

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::init_with_level;
