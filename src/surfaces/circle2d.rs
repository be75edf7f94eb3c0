#![warn(missing_docs)]
//! Random points on a 2D circle
use super::{RandomSurface, UniformSource};
use crate::{
    error::GeoResult,
    validation::{check_radius, check_scalar, finite_scalar, positive_radius, Param},
};
use log::debug;
use nalgebra::Point2;
use std::{f64::consts::TAU, fmt::Display};

/// A 2D circle given by its center point and radius.
///
/// A point `(x, y)` lies on the circle if `radius = sqrt((x - center_x)² + (y - center_y)²)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle2D {
    center: Point2<f64>,
    radius: f64,
}
impl Circle2D {
    /// Create a new [`Circle2D`].
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///   - a center coordinate is not finite.
    ///   - the radius is not finite or <= 0.
    pub fn new(center_x: f64, center_y: f64, radius: f64) -> GeoResult<Self> {
        let center = Point2::new(finite_scalar(center_x)?, finite_scalar(center_y)?);
        let radius = positive_radius(radius)?;
        debug!("circle with center ({center_x}, {center_y}) and radius {radius} created");
        Ok(Self { center, radius })
    }
    /// Create a new [`Circle2D`] from loosely-typed parameters.
    ///
    /// # Errors
    ///
    /// This function fails with [`GeoError::InvalidType`](crate::error::GeoError::InvalidType) if
    /// a parameter is not a number and otherwise like [`Circle2D::new`].
    pub fn from_params(center_x: &Param, center_y: &Param, radius: &Param) -> GeoResult<Self> {
        Self::new(
            check_scalar(center_x)?,
            check_scalar(center_y)?,
            check_radius(radius)?,
        )
    }
    /// Returns the center point of this [`Circle2D`].
    #[must_use]
    pub const fn center(&self) -> Point2<f64> {
        self.center
    }
    /// Returns the radius of this [`Circle2D`].
    #[must_use]
    pub const fn radius(&self) -> f64 {
        self.radius
    }
}
impl RandomSurface for Circle2D {
    type Point = Point2<f64>;

    fn random_point<R: UniformSource + ?Sized>(&self, rng: &mut R) -> Point2<f64> {
        let (sin, cos) = rng.uniform(0.0, TAU).sin_cos();
        Point2::new(
            self.radius.mul_add(cos, self.center.x),
            self.radius.mul_add(sin, self.center.y),
        )
    }
}
impl Display for Circle2D {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Circle2D(center ({}, {}), radius {})",
            self.center.x, self.center.y, self.radius
        )
    }
}
