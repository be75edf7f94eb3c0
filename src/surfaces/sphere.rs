#![warn(missing_docs)]
//! Random points on a sphere
use super::{RandomSurface, UniformSource};
use crate::{
    error::GeoResult,
    validation::{check_radius, check_scalar, finite_scalar, positive_radius, Param},
};
use log::debug;
use nalgebra::Point3;
use std::{
    f64::consts::{PI, TAU},
    fmt::Display,
};

/// A sphere given by its center point and radius.
///
/// Points are created by drawing an azimuth angle from `[0, 2π]` and a zenith angle from `[0, π]`
/// and mapping them to cartesian coordinates. Since the zenith is drawn uniformly the points
/// concentrate towards the poles (the distribution is not uniform per surface area).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    center: Point3<f64>,
    radius: f64,
}
impl Sphere {
    /// Create a new [`Sphere`].
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///   - a center coordinate is not finite.
    ///   - the radius is not finite or <= 0.
    pub fn new(center_x: f64, center_y: f64, center_z: f64, radius: f64) -> GeoResult<Self> {
        let center = Point3::new(
            finite_scalar(center_x)?,
            finite_scalar(center_y)?,
            finite_scalar(center_z)?,
        );
        let radius = positive_radius(radius)?;
        debug!(
            "sphere with center ({center_x}, {center_y}, {center_z}) and radius {radius} created"
        );
        Ok(Self { center, radius })
    }
    /// Create a new [`Sphere`] from loosely-typed parameters.
    ///
    /// # Errors
    ///
    /// This function fails with [`GeoError::InvalidType`](crate::error::GeoError::InvalidType) if
    /// a parameter is not a number and otherwise like [`Sphere::new`].
    pub fn from_params(
        center_x: &Param,
        center_y: &Param,
        center_z: &Param,
        radius: &Param,
    ) -> GeoResult<Self> {
        Self::new(
            check_scalar(center_x)?,
            check_scalar(center_y)?,
            check_scalar(center_z)?,
            check_radius(radius)?,
        )
    }
    /// Returns the center point of this [`Sphere`].
    #[must_use]
    pub const fn center(&self) -> Point3<f64> {
        self.center
    }
    /// Returns the radius of this [`Sphere`].
    #[must_use]
    pub const fn radius(&self) -> f64 {
        self.radius
    }
    fn point_at(&self, azimuth: f64, zenith: f64) -> Point3<f64> {
        let (sin_azimuth, cos_azimuth) = azimuth.sin_cos();
        let (sin_zenith, cos_zenith) = zenith.sin_cos();
        Point3::new(
            (self.radius * sin_zenith).mul_add(cos_azimuth, self.center.x),
            (self.radius * sin_zenith).mul_add(sin_azimuth, self.center.y),
            self.radius.mul_add(cos_zenith, self.center.z),
        )
    }
}
impl RandomSurface for Sphere {
    type Point = Point3<f64>;

    fn random_point<R: UniformSource + ?Sized>(&self, rng: &mut R) -> Point3<f64> {
        let azimuth = rng.uniform(0.0, TAU);
        let zenith = rng.uniform(0.0, PI);
        self.point_at(azimuth, zenith)
    }
}
impl Display for Sphere {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Sphere(center ({}, {}, {}), radius {})",
            self.center.x, self.center.y, self.center.z, self.radius
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        error::GeoError, surfaces::test_sources::FractionSource, validation::PointCount,
    };
    use approx::assert_abs_diff_eq;
    use assert_matches::assert_matches;
    use rand::{rngs::StdRng, SeedableRng};

    fn valid_spheres() -> Vec<(Sphere, i64)> {
        vec![
            (Sphere::new(3.0, 5.0, 7.5, 10.0).unwrap(), 5),
            (Sphere::new(-4.0, 2.5, 0.0, 0.01).unwrap(), 1),
            (Sphere::new(0.0, 0.0, 0.0, 45_000.0).unwrap(), 100),
            (Sphere::new(1e5, -1e5, 5e4, 2.0).unwrap(), 99_999),
        ]
    }
    fn check_on_sphere(sphere: &Sphere, nr_of_points: i64, points: &[Point3<f64>]) {
        assert_eq!(points.len(), usize::try_from(nr_of_points).unwrap());
        for point in points {
            let distance = (point - sphere.center()).norm();
            assert_abs_diff_eq!(distance, sphere.radius(), epsilon = 1e-6);
        }
    }
    #[test]
    fn new() {
        let sphere = Sphere::new(1.0, 2.0, 3.0, 4.0).unwrap();
        assert_eq!(sphere.center(), Point3::new(1.0, 2.0, 3.0));
        assert_eq!(sphere.radius(), 4.0);
    }
    #[test]
    fn new_wrong() {
        for (x, y, z, r) in [
            (f64::NAN, 0.0, 0.0, 1.0),
            (0.0, f64::INFINITY, 0.0, 1.0),
            (0.0, 0.0, f64::NEG_INFINITY, 1.0),
            (0.0, 0.0, 0.0, f64::NAN),
            (0.0, 0.0, 0.0, 0.0),
            (0.0, 0.0, 0.0, -2.5),
        ] {
            assert_matches!(Sphere::new(x, y, z, r), Err(GeoError::InvalidValue(_)));
        }
    }
    #[test]
    fn from_params() {
        let sphere = Sphere::from_params(
            &Param::from(1),
            &Param::from(2.0),
            &Param::from(-3),
            &Param::from(4.5),
        )
        .unwrap();
        assert_eq!(sphere, Sphere::new(1.0, 2.0, -3.0, 4.5).unwrap());
        assert_matches!(
            Sphere::from_params(
                &Param::from(1),
                &Param::from(2.0),
                &Param::from("3"),
                &Param::from(4.5)
            ),
            Err(GeoError::InvalidType(_))
        );
        assert_matches!(
            Sphere::from_params(
                &Param::from(1),
                &Param::from(2.0),
                &Param::from(3),
                &Param::from(-4.5)
            ),
            Err(GeoError::InvalidValue(_))
        );
    }
    #[test]
    fn create_random_points() {
        let mut rng = StdRng::seed_from_u64(42);
        for (sphere, nr_of_points) in valid_spheres() {
            let points =
                sphere.create_random_points(PointCount::new(nr_of_points).unwrap(), &mut rng);
            check_on_sphere(&sphere, nr_of_points, &points);
        }
    }
    #[test]
    fn create_random_point_generator() {
        for (sphere, nr_of_points) in valid_spheres() {
            let points: Vec<_> = sphere
                .create_random_point_generator(PointCount::new(nr_of_points).unwrap(), rand::rng())
                .collect();
            check_on_sphere(&sphere, nr_of_points, &points);
        }
    }
    #[test]
    fn fixed_angles() {
        let sphere = Sphere::new(1.0, 2.0, 3.0, 2.0).unwrap();
        // azimuth, zenith pairs: (0, 0) -> north pole, (0, π/2) -> +x, (π/2, π/2) -> +y
        let mut source = FractionSource::new(vec![0.0, 0.0, 0.0, 0.5, 0.25, 0.5]);
        let points = sphere.create_random_points(PointCount::new(3).unwrap(), &mut source);
        assert_abs_diff_eq!(points[0], Point3::new(1.0, 2.0, 5.0), epsilon = 1e-9);
        assert_abs_diff_eq!(points[1], Point3::new(3.0, 2.0, 3.0), epsilon = 1e-9);
        assert_abs_diff_eq!(points[2], Point3::new(1.0, 4.0, 3.0), epsilon = 1e-9);
        assert_eq!(source.calls[0], (0.0, TAU));
        assert_eq!(source.calls[1], (0.0, PI));
    }
    #[test]
    fn zenith_uniform_sampling_favours_poles() {
        // With a uniformly drawn zenith, |z| > r/2 (both polar caps) is hit with probability 2/3.
        // A surface area uniform distribution would give 1/2.
        let sphere = Sphere::new(0.0, 0.0, 0.0, 1.0).unwrap();
        let points = sphere.create_random_points(
            PointCount::new(60_000).unwrap(),
            &mut StdRng::seed_from_u64(17),
        );
        let polar = points.iter().filter(|p| p.z.abs() > 0.5).count();
        let fraction = crate::utils::usize_to_f64(polar) / 60_000.0;
        assert_abs_diff_eq!(fraction, 2.0 / 3.0, epsilon = 0.01);
    }
    #[test]
    fn display() {
        assert_eq!(
            Sphere::new(1.0, 2.5, -3.0, 4.0).unwrap().to_string(),
            "Sphere(center (1, 2.5, -3), radius 4)"
        );
    }
}
