#![warn(missing_docs)]
//! Random points on a plane, bounded to a disk around a reference point
use super::{RandomSurface, UniformSource};
use crate::{
    error::{GeoError, GeoResult},
    utils::scaled_norm,
    validation::{
        check_direction_vector, check_radius, check_scalar, check_vector3, direction_vector,
        finite_scalar, finite_vector3, positive_radius, Param, TOLERANCE,
    },
    vector_math::{axis_angle_quaternion, dot, normalize, perpendicular, sandwich_rotate, scale},
};
use approx::abs_diff_eq;
use log::{debug, warn};
use nalgebra::{Point3, Unit, Vector3};
use std::{f64::consts::TAU, fmt::Display};

/// A plane defined by the equation `d_origin = n_x * x + n_y * y + n_z * z`.
///
/// `(n_x, n_y, n_z)` is the unit normal vector and `d_origin` the signed distance of the plane
/// from the origin. Points are only created within a disk of the given `radius` around the
/// reference point, which itself lies on the plane.
///
/// The distance of a point from the reference point is drawn uniformly from `[0, radius]`, so points
/// concentrate towards the reference point (the distribution is not uniform per disk area).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    normal: Unit<Vector3<f64>>,
    d_origin: f64,
    ref_point: Point3<f64>,
    radius: f64,
    start_vec: Vector3<f64>,
}

/// Validate and normalize a plane normal vector.
fn unit_normal(normal_vec: &Vector3<f64>) -> GeoResult<Unit<Vector3<f64>>> {
    let normal_vec = direction_vector(normal_vec)?;
    let magnitude = scaled_norm(&normal_vec);
    if magnitude < 1.0 - TOLERANCE {
        warn!("plane normal vector magnitude {magnitude} is below 1.0. Vector is normalized.");
    }
    normalize(&normal_vec)
}

impl Plane {
    /// Create a new [`Plane`] from its general form.
    ///
    /// The normal vector is normalized. The reference point must lie on the plane, i.e.
    /// `dot(normal, ref_point) == d_origin` (within `1e-6`).
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///   - the normal vector is not a valid direction vector (non-finite components, magnitude < 0.9).
    ///   - `d_origin` or a component of `ref_point` is not finite.
    ///   - the radius is not finite or <= 0.
    ///   - the reference point does not lie on the plane.
    pub fn new(
        normal_vec: &Vector3<f64>,
        d_origin: f64,
        ref_point: &Point3<f64>,
        radius: f64,
    ) -> GeoResult<Self> {
        Self::from_unit_normal(unit_normal(normal_vec)?, d_origin, ref_point, radius)
    }
    fn from_unit_normal(
        normal: Unit<Vector3<f64>>,
        d_origin: f64,
        ref_point: &Point3<f64>,
        radius: f64,
    ) -> GeoResult<Self> {
        let d_origin = finite_scalar(d_origin)?;
        let ref_point = Point3::from(finite_vector3(&ref_point.coords)?);
        let radius = positive_radius(radius)?;
        let ref_distance = dot(&normal, &ref_point.coords)?;
        if !abs_diff_eq!(ref_distance, d_origin, epsilon = TOLERANCE) {
            return Err(GeoError::InvalidValue(format!(
                "invalid reference point ({}, {}, {}): distance {ref_distance} to origin along the normal differs from d_origin {d_origin}",
                ref_point.x, ref_point.y, ref_point.z
            )));
        }
        let start_vec = perpendicular(&normal)?;
        let plane = Self {
            normal,
            d_origin,
            ref_point,
            radius,
            start_vec,
        };
        debug!("{plane} created");
        Ok(plane)
    }
    /// Create a new [`Plane`] from its normal form.
    ///
    /// `d_origin` is derived from the normalized normal vector and `position_vec`, which also
    /// serves as reference point.
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///   - the normal vector is not a valid direction vector (non-finite components, magnitude < 0.9).
    ///   - a component of `position_vec` is not finite.
    ///   - the radius is not finite or <= 0.
    pub fn from_normal_form(
        normal_vec: &Vector3<f64>,
        position_vec: &Point3<f64>,
        radius: f64,
    ) -> GeoResult<Self> {
        let normal = unit_normal(normal_vec)?;
        let position_vec = finite_vector3(&position_vec.coords)?;
        let d_origin = dot(&normal, &position_vec)?;
        Self::from_unit_normal(normal, d_origin, &Point3::from(position_vec), radius)
    }
    /// Create a new [`Plane`] from its Hessian normal form.
    ///
    /// The reference point is the point of the plane closest to the origin
    /// (`d_origin * normal`).
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///   - the normal vector is not a valid direction vector (non-finite components, magnitude < 0.9).
    ///   - `d_origin` is not finite.
    ///   - the radius is not finite or <= 0.
    pub fn from_hessian_normal_form(
        normal_vec: &Vector3<f64>,
        d_origin: f64,
        radius: f64,
    ) -> GeoResult<Self> {
        let normal = unit_normal(normal_vec)?;
        let d_origin = finite_scalar(d_origin)?;
        let ref_point = Point3::from(scale(&normal, d_origin)?);
        Self::from_unit_normal(normal, d_origin, &ref_point, radius)
    }
    /// Create a new [`Plane`] from loosely-typed parameters of its general form.
    ///
    /// # Errors
    ///
    /// This function fails with [`GeoError::InvalidType`] if a parameter does not have the expected
    /// shape and otherwise like [`Plane::new`].
    pub fn from_params(
        normal_vec: &Param,
        d_origin: &Param,
        ref_point: &Param,
        radius: &Param,
    ) -> GeoResult<Self> {
        let normal_vec = check_direction_vector(normal_vec)?;
        let d_origin = check_scalar(d_origin)?;
        let ref_point = Point3::from(check_vector3(ref_point)?);
        Self::new(&normal_vec, d_origin, &ref_point, check_radius(radius)?)
    }
    /// Create a new [`Plane`] from loosely-typed parameters of its normal form.
    ///
    /// # Errors
    ///
    /// This function fails with [`GeoError::InvalidType`] if a parameter does not have the expected
    /// shape and otherwise like [`Plane::from_normal_form`].
    pub fn from_normal_form_params(
        normal_vec: &Param,
        position_vec: &Param,
        radius: &Param,
    ) -> GeoResult<Self> {
        let normal_vec = check_direction_vector(normal_vec)?;
        let position_vec = Point3::from(check_vector3(position_vec)?);
        Self::from_normal_form(&normal_vec, &position_vec, check_radius(radius)?)
    }
    /// Create a new [`Plane`] from loosely-typed parameters of its Hessian normal form.
    ///
    /// # Errors
    ///
    /// This function fails with [`GeoError::InvalidType`] if a parameter does not have the expected
    /// shape and otherwise like [`Plane::from_hessian_normal_form`].
    pub fn from_hessian_normal_form_params(
        normal_vec: &Param,
        d_origin: &Param,
        radius: &Param,
    ) -> GeoResult<Self> {
        let normal_vec = check_direction_vector(normal_vec)?;
        let d_origin = check_scalar(d_origin)?;
        Self::from_hessian_normal_form(&normal_vec, d_origin, check_radius(radius)?)
    }
    /// Returns the unit normal vector of this [`Plane`].
    #[must_use]
    pub const fn normal(&self) -> Unit<Vector3<f64>> {
        self.normal
    }
    /// Returns the signed distance of this [`Plane`] from the origin.
    #[must_use]
    pub const fn d_origin(&self) -> f64 {
        self.d_origin
    }
    /// Returns the reference point of this [`Plane`], the center of the point creation disk.
    #[must_use]
    pub const fn ref_point(&self) -> Point3<f64> {
        self.ref_point
    }
    /// Returns the radius of the point creation disk of this [`Plane`].
    #[must_use]
    pub const fn radius(&self) -> f64 {
        self.radius
    }
}
impl RandomSurface for Plane {
    type Point = Point3<f64>;

    fn random_point<R: UniformSource + ?Sized>(&self, rng: &mut R) -> Point3<f64> {
        let angle = rng.uniform(0.0, TAU);
        let distance = rng.uniform(0.0, self.radius);
        let rotation = axis_angle_quaternion(&self.normal, angle);
        let direction = Unit::new_normalize(sandwich_rotate(&self.start_vec, &rotation));
        self.ref_point + direction.into_inner() * distance
    }
}
impl Display for Plane {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Plane(normal ({}, {}, {}), d_origin {}, reference point ({}, {}, {}), radius {})",
            self.normal.x,
            self.normal.y,
            self.normal.z,
            self.d_origin,
            self.ref_point.x,
            self.ref_point.y,
            self.ref_point.z,
            self.radius
        )
    }
}
