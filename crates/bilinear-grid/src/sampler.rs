//! Configured sampling over a borrowed field.

use std::fs;
use std::marker::PhantomData;
use std::path::Path;

use nalgebra::Point2;
use num_traits::Zero;
use serde::{Deserialize, Serialize};

use crate::{
    bilinear_weights, estimate_gradient_in, interpolate_bilinear_in, vertex_gradient, Cell,
    Coordinate, Field, FieldValue, GridBounds, GridError, GridPoint, Neighborhood,
};

/// Configuration for [`GridSampler`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplerParams {
    /// Build cells with [`Cell::containing_within`] so positions on the last
    /// vertex of an axis still sample inside the field.
    pub boundary_safe: bool,
    /// Neighborhood reported by [`GridSampler::neighbors`].
    pub neighborhood: Neighborhood,
}

impl Default for SamplerParams {
    fn default() -> Self {
        Self {
            boundary_safe: true,
            neighborhood: Neighborhood::Four,
        }
    }
}

impl SamplerParams {
    pub fn from_json_str(raw: &str) -> Result<Self, GridError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Load a JSON config from disk.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, GridError> {
        let raw = fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// Write this config to disk as pretty JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), GridError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

/// Bilinear sampling of one field with fixed params and coordinate scalar `S`.
#[derive(Debug)]
pub struct GridSampler<'a, F: ?Sized, S> {
    field: &'a F,
    bounds: GridBounds,
    params: SamplerParams,
    _scalar: PhantomData<S>,
}

impl<'a, F, S> GridSampler<'a, F, S>
where
    F: Field + ?Sized,
    S: Coordinate,
    F::Value: FieldValue<S>,
{
    pub fn new(field: &'a F, params: SamplerParams) -> Self {
        let bounds = field.bounds();
        log::debug!(
            "sampler over {} grid (boundary_safe={}, neighborhood={:?})",
            bounds,
            params.boundary_safe,
            params.neighborhood
        );
        Self {
            field,
            bounds,
            params,
            _scalar: PhantomData,
        }
    }

    pub fn field(&self) -> &'a F {
        self.field
    }

    pub fn bounds(&self) -> GridBounds {
        self.bounds
    }

    pub fn params(&self) -> &SamplerParams {
        &self.params
    }

    /// Cell used for sampling at `position`.
    pub fn cell_at(&self, position: Point2<S>) -> Result<Cell, GridError> {
        if self.params.boundary_safe {
            Cell::containing_within(position, self.bounds)
        } else {
            Cell::containing(position)
        }
    }

    pub fn weights(&self, position: Point2<S>) -> Result<(Cell, [S; 4]), GridError> {
        let cell = self.cell_at(position)?;
        Ok((cell, bilinear_weights(&cell, position)))
    }

    pub fn sample(&self, position: Point2<S>) -> Result<F::Value, GridError> {
        let cell = self.cell_at(position)?;
        interpolate_bilinear_in(self.field, position, &cell)
    }

    pub fn gradient(&self, position: Point2<S>) -> Result<(F::Value, F::Value), GridError> {
        let cell = self.cell_at(position)?;
        estimate_gradient_in(self.field, position, &cell)
    }

    /// Value and gradient at `position` from a single cell lookup.
    pub fn sample_with_gradient(
        &self,
        position: Point2<S>,
    ) -> Result<(F::Value, (F::Value, F::Value)), GridError> {
        let cell = self.cell_at(position)?;
        let value = interpolate_bilinear_in(self.field, position, &cell)?;
        let gradient = estimate_gradient_in(self.field, position, &cell)?;
        Ok((value, gradient))
    }

    /// Sample every position, stopping at the first failure.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "debug", skip(self, positions), fields(count = positions.len()))
    )]
    pub fn sample_points(&self, positions: &[Point2<S>]) -> Result<Vec<F::Value>, GridError> {
        positions.iter().map(|&p| self.sample(p)).collect()
    }

    /// Configured neighbors of `point` that lie inside the grid.
    pub fn neighbors(&self, point: GridPoint) -> Vec<GridPoint> {
        point
            .neighbors(self.params.neighborhood)
            .into_iter()
            .filter(|p| p.is_inside_grid(self.bounds))
            .collect()
    }

    pub fn vertex_gradient(&self, point: GridPoint) -> Result<(F::Value, F::Value), GridError>
    where
        F::Value: Zero,
    {
        vertex_gradient::<S, F>(self.field, point, self.bounds)
    }
}
