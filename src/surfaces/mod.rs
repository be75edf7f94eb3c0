#![warn(missing_docs)]
//! Module for generating random points lying on geometric surfaces.
//!
//! Three surfaces are available: [`Circle2D`], [`Sphere`] and a disk-bounded [`Plane`]. All of them
//! implement the [`RandomSurface`] trait which offers an eager ([`RandomSurface::create_random_points`])
//! and a lazy ([`RandomSurface::create_random_point_generator`]) way of creating points.
//!
//! The source of randomness is injected as a [`UniformSource`]. Every [`rand::Rng`] is one.
//!
//! ## Example
//!
//! ```rust
//! use random_geometry_points::{
//!     surfaces::{Circle2D, RandomSurface},
//!     validation::PointCount,
//! };
//!
//! let circle = Circle2D::new(3.0, 5.0, 10.0).unwrap();
//! let points = circle.create_random_points(PointCount::new(5).unwrap(), &mut rand::rng());
//! assert_eq!(points.len(), 5);
//! ```
//! `points` now contains 5 points at a distance of 10.0 from (3.0, 5.0).
use crate::validation::PointCount;
use log::debug;
use nalgebra::{Point2, Point3};
use rand::Rng;
use std::{fmt::Display, iter::FusedIterator};

mod circle2d;
mod plane;
mod sphere;

pub use circle2d::Circle2D;
pub use plane::Plane;
pub use sphere::Sphere;

/// A source of uniformly distributed random numbers.
pub trait UniformSource {
    /// Return a uniformly distributed random number in the interval `[low, high]`.
    ///
    /// Callers guarantee `low <= high`.
    fn uniform(&mut self, low: f64, high: f64) -> f64;
}
impl<R: Rng + ?Sized> UniformSource for R {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        self.random_range(low..=high)
    }
}

/// Trait for surfaces on which random points can be generated.
pub trait RandomSurface: Display {
    /// The point type emitted by this surface.
    type Point;

    /// Create a single random point on the surface.
    ///
    /// Each call draws fresh random numbers from `rng`.
    fn random_point<R: UniformSource + ?Sized>(&self, rng: &mut R) -> Self::Point;

    /// Create a list of `nr_of_points` random points lying on the surface.
    fn create_random_points<R: UniformSource + ?Sized>(
        &self,
        nr_of_points: PointCount,
        rng: &mut R,
    ) -> Vec<Self::Point> {
        debug!("create {nr_of_points} random points on {self}");
        (0..nr_of_points.get())
            .map(|_| self.random_point(rng))
            .collect()
    }

    /// Create a lazy generator yielding `nr_of_points` random points lying on the surface.
    ///
    /// The generator owns its random source. It is finite and single-pass: once exhausted it
    /// only returns `None`.
    fn create_random_point_generator<R: UniformSource>(
        &self,
        nr_of_points: PointCount,
        rng: R,
    ) -> RandomPoints<'_, Self, R>
    where
        Self: Sized,
    {
        debug!("create generator for {nr_of_points} random points on {self}");
        RandomPoints {
            surface: self,
            rng,
            remaining: nr_of_points.get(),
        }
    }
}

/// Lazy generator of random points on a [`RandomSurface`].
///
/// Created by [`RandomSurface::create_random_point_generator`].
#[derive(Debug)]
pub struct RandomPoints<'a, S, R> {
    surface: &'a S,
    rng: R,
    remaining: usize,
}
impl<S: RandomSurface, R: UniformSource> Iterator for RandomPoints<'_, S, R> {
    type Item = S::Point;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.surface.random_point(&mut self.rng))
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}
impl<S: RandomSurface, R: UniformSource> ExactSizeIterator for RandomPoints<'_, S, R> {}
impl<S: RandomSurface, R: UniformSource> FusedIterator for RandomPoints<'_, S, R> {}

/// A point created on any of the surfaces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SurfacePoint {
    /// a point on a 2D surface ([`Circle2D`])
    Planar(Point2<f64>),
    /// a point on a 3D surface ([`Sphere`], [`Plane`])
    Spatial(Point3<f64>),
}
impl SurfacePoint {
    /// Returns the coordinates of this point (2 or 3 values).
    #[must_use]
    pub fn coords(&self) -> &[f64] {
        match self {
            Self::Planar(point) => point.coords.as_slice(),
            Self::Spatial(point) => point.coords.as_slice(),
        }
    }
}

/// Enum holding any of the available surfaces.
#[derive(Debug, Clone, PartialEq, strum::AsRefStr)]
pub enum SurfaceType {
    /// a 2D circle
    #[strum(serialize = "circle2d")]
    Circle2D(Circle2D),
    /// a sphere
    #[strum(serialize = "sphere")]
    Sphere(Sphere),
    /// a plane bounded to a disk around its reference point
    #[strum(serialize = "plane")]
    Plane(Plane),
}
impl SurfaceType {
    /// Create a list of `nr_of_points` random points lying on the wrapped surface.
    pub fn create_random_points<R: UniformSource + ?Sized>(
        &self,
        nr_of_points: PointCount,
        rng: &mut R,
    ) -> Vec<SurfacePoint> {
        match self {
            Self::Circle2D(circle) => circle
                .create_random_points(nr_of_points, rng)
                .into_iter()
                .map(SurfacePoint::Planar)
                .collect(),
            Self::Sphere(sphere) => sphere
                .create_random_points(nr_of_points, rng)
                .into_iter()
                .map(SurfacePoint::Spatial)
                .collect(),
            Self::Plane(plane) => plane
                .create_random_points(nr_of_points, rng)
                .into_iter()
                .map(SurfacePoint::Spatial)
                .collect(),
        }
    }
}
impl Display for SurfaceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Circle2D(circle) => circle.fmt(f),
            Self::Sphere(sphere) => sphere.fmt(f),
            Self::Plane(plane) => plane.fmt(f),
        }
    }
}
impl From<Circle2D> for SurfaceType {
    fn from(circle: Circle2D) -> Self {
        Self::Circle2D(circle)
    }
}
impl From<Sphere> for SurfaceType {
    fn from(sphere: Sphere) -> Self {
        Self::Sphere(sphere)
    }
}
impl From<Plane> for SurfaceType {
    fn from(plane: Plane) -> Self {
        Self::Plane(plane)
    }
}

/// Deterministic random sources for unit tests.
#[cfg(test)]
pub(crate) mod test_sources {
    use super::UniformSource;

    /// Returns values from a fixed list (cycling) mapped into the requested interval.
    ///
    /// Each stored value is a fraction in `[0, 1]` of the interval.
    pub struct FractionSource {
        fractions: Vec<f64>,
        idx: usize,
        pub calls: Vec<(f64, f64)>,
    }
    impl FractionSource {
        pub fn new(fractions: Vec<f64>) -> Self {
            Self {
                fractions,
                idx: 0,
                calls: Vec::new(),
            }
        }
    }
    impl UniformSource for FractionSource {
        fn uniform(&mut self, low: f64, high: f64) -> f64 {
            let fraction = self.fractions[self.idx % self.fractions.len()];
            self.idx += 1;
            self.calls.push((low, high));
            (high - low).mul_add(fraction, low)
        }
    }
}
