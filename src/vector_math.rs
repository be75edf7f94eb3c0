#![warn(missing_docs)]
//! Vector and quaternion functions used to place random points on surfaces.
//!
//! All public functions validate their inputs with the [`validation`](crate::validation) module
//! and fail exactly where those checks fail. `normalize` and `perpendicular` additionally reject
//! vectors whose magnitude is within `1e-6` of zero.
//!
//! Rotations are computed with the quaternion sandwich product `q * p * q'`, where `p` is the
//! vector embedded as a pure quaternion `(0, x, y, z)` and `q'` is the conjugate of the unit
//! rotation quaternion `q`.
use crate::{
    error::{GeoError, GeoResult},
    utils::{scaled_direction, scaled_norm},
    validation::{direction_vector, finite_quaternion, finite_scalar, finite_vector3, TOLERANCE},
};
use approx::abs_diff_eq;
use nalgebra::{Quaternion, Unit, Vector3};

fn non_degenerate(vec: &Vector3<f64>) -> GeoResult<f64> {
    let magnitude = magnitude(vec)?;
    if abs_diff_eq!(magnitude, 0.0, epsilon = TOLERANCE) {
        return Err(GeoError::InvalidValue(format!(
            "vector ({}, {}, {}) must have a magnitude greater than zero",
            vec.x, vec.y, vec.z
        )));
    }
    Ok(magnitude)
}

/// Calculate the Euclidean magnitude of a 3D vector.
///
/// Large components do not overflow. Only a magnitude beyond `f64::MAX` is returned as infinity.
///
/// # Errors
///
/// This function returns an error if a component of the vector is not finite.
pub fn magnitude(vec: &Vector3<f64>) -> GeoResult<f64> {
    Ok(scaled_norm(&finite_vector3(vec)?))
}

/// Calculate the dot product of two 3D vectors.
///
/// # Errors
///
/// This function returns an error if a component of one of the vectors is not finite.
pub fn dot(vec1: &Vector3<f64>, vec2: &Vector3<f64>) -> GeoResult<f64> {
    Ok(finite_vector3(vec1)?.dot(&finite_vector3(vec2)?))
}

/// Calculate the (right-handed) cross product of two 3D vectors.
///
/// # Errors
///
/// This function returns an error if a component of one of the vectors is not finite.
pub fn cross(vec1: &Vector3<f64>, vec2: &Vector3<f64>) -> GeoResult<Vector3<f64>> {
    Ok(finite_vector3(vec1)?.cross(&finite_vector3(vec2)?))
}

/// Normalize a 3D vector to unit length.
///
/// # Errors
///
/// This function will return an error if
///   - a component of the vector is not finite.
///   - the magnitude of the vector is within `1e-6` of zero.
pub fn normalize(vec: &Vector3<f64>) -> GeoResult<Unit<Vector3<f64>>> {
    non_degenerate(vec)?;
    scaled_direction(vec).map(Unit::new_unchecked).ok_or_else(|| {
        GeoError::InvalidValue(format!(
            "vector ({}, {}, {}) cannot be normalized",
            vec.x, vec.y, vec.z
        ))
    })
}

/// Return the world axis used to build a vector perpendicular to `vec`.
///
/// The axis along which `vec` has its smallest absolute component is chosen (ties resolve to
/// x, then y, then z). Crossing with this axis avoids nearly parallel operands.
fn least_aligned_axis(vec: &Vector3<f64>) -> Vector3<f64> {
    let (abs_x, abs_y, abs_z) = (vec.x.abs(), vec.y.abs(), vec.z.abs());
    if abs_x < abs_y && abs_x < abs_z {
        Vector3::x()
    } else if abs_y < abs_z {
        Vector3::y()
    } else {
        Vector3::z()
    }
}

/// Calculate an arbitrary vector perpendicular to the given (non-degenerate) vector.
pub(crate) fn perpendicular_unchecked(vec: &Vector3<f64>) -> Vector3<f64> {
    least_aligned_axis(vec).cross(vec)
}

/// Calculate an arbitrary vector perpendicular to `vec`.
///
/// The result is the cross product of `vec`'s least aligned world axis and `vec`. It is not
/// normalized.
///
/// # Errors
///
/// This function will return an error if
///   - a component of the vector is not finite.
///   - the magnitude of the vector is within `1e-6` of zero.
pub fn perpendicular(vec: &Vector3<f64>) -> GeoResult<Vector3<f64>> {
    non_degenerate(vec)?;
    Ok(perpendicular_unchecked(vec))
}

pub(crate) fn axis_angle_quaternion(axis: &Unit<Vector3<f64>>, angle: f64) -> Quaternion<f64> {
    let (sin, cos) = (0.5 * angle).sin_cos();
    Quaternion::from_parts(cos, axis.into_inner() * sin)
}

/// Convert a rotation axis and a (right-handed) rotation angle in radians into a rotation
/// quaternion `(cos(angle/2), sin(angle/2) * axis)`.
///
/// The axis is normalized before use.
///
/// # Errors
///
/// This function will return an error if
///   - the axis is not a valid direction vector (non-finite components, magnitude < 0.9).
///   - the angle is not finite.
pub fn rotation_quaternion(axis: &Vector3<f64>, angle: f64) -> GeoResult<Quaternion<f64>> {
    let axis = normalize(&direction_vector(axis)?)?;
    let angle = finite_scalar(angle)?;
    Ok(axis_angle_quaternion(&axis, angle))
}

/// Hamilton product of two quaternions.
pub(crate) fn hamilton_product(
    quat1: &Quaternion<f64>,
    quat2: &Quaternion<f64>,
) -> Quaternion<f64> {
    let (w1, v1) = (quat1.scalar(), quat1.imag());
    let (w2, v2) = (quat2.scalar(), quat2.imag());
    Quaternion::from_parts(w1 * w2 - v1.dot(&v2), v1.cross(&v2) + v2 * w1 + v1 * w2)
}

/// Rotate a vector with a unit quaternion using the sandwich product `q * p * q'`.
pub(crate) fn sandwich_rotate(vec: &Vector3<f64>, quat: &Quaternion<f64>) -> Vector3<f64> {
    let pure = Quaternion::from_parts(0.0, *vec);
    hamilton_product(&hamilton_product(quat, &pure), &quat.conjugate()).imag()
}

/// Rotate a vector around an axis by an angle in radians (right-handed rotation).
///
/// # Errors
///
/// This function will return an error if
///   - a component of the vector is not finite.
///   - the axis is not a valid direction vector (non-finite components, magnitude < 0.9).
///   - the angle is not finite.
pub fn rotate(vec: &Vector3<f64>, axis: &Vector3<f64>, angle: f64) -> GeoResult<Vector3<f64>> {
    let vec = finite_vector3(vec)?;
    let quat = rotation_quaternion(axis, angle)?;
    Ok(sandwich_rotate(&vec, &quat))
}

/// Multiply each component of a vector with a scale factor.
///
/// # Errors
///
/// This function returns an error if a component of the vector or the scale factor is not finite.
pub fn scale(vec: &Vector3<f64>, scale: f64) -> GeoResult<Vector3<f64>> {
    Ok(finite_vector3(vec)? * finite_scalar(scale)?)
}

/// Calculate the sum of two vectors.
///
/// # Errors
///
/// This function returns an error if a component of one of the vectors is not finite.
pub fn sum(vec1: &Vector3<f64>, vec2: &Vector3<f64>) -> GeoResult<Vector3<f64>> {
    Ok(finite_vector3(vec1)? + finite_vector3(vec2)?)
}

/// Multiply two quaternions (Hamilton product `quat1 * quat2`).
///
/// # Errors
///
/// This function returns an error if a component of one of the quaternions is not finite.
pub fn multiply_quaternions(
    quat1: &Quaternion<f64>,
    quat2: &Quaternion<f64>,
) -> GeoResult<Quaternion<f64>> {
    Ok(hamilton_product(
        &finite_quaternion(quat1)?,
        &finite_quaternion(quat2)?,
    ))
}
