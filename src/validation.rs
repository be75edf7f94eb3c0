#![warn(missing_docs)]
//! Type and value checks for geometry parameters.
//!
//! Every surface and every vector math function funnels its inputs through this module. Two
//! flavours of checks exist:
//!   - `check_*` functions take a loosely-typed [`Param`] (e.g. a value read from a job document)
//!     and verify both its shape and its value.
//!   - the typed counterparts ([`finite_scalar`], [`finite_vector3`], [`direction_vector`],
//!     [`finite_quaternion`], [`PointCount::new`]) take already typed values and only verify the
//!     value rules.
//!
//! Shape violations are reported as [`GeoError::InvalidType`], value violations as
//! [`GeoError::InvalidValue`].
//!
//! ## Example
//!
//! ```rust
//! use random_geometry_points::validation::{check_radius, check_vector3, Param};
//!
//! assert_eq!(check_radius(&Param::from(3)).unwrap(), 3.0);
//! assert!(check_radius(&Param::from(-1.0)).is_err());
//! assert!(check_vector3(&Param::from([1.0, 2.0])).is_err());
//! ```
use crate::{
    error::{GeoError, GeoResult},
    utils::{i64_to_f64, scaled_norm, u64_to_f64},
};
use nalgebra::{Quaternion, Vector3};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Exclusive upper bound of the number of points that can be generated in one call.
pub const MAX_POINT_COUNT: usize = 100_000;
/// Minimal magnitude of a vector accepted as a direction (rotation axis, plane normal).
pub const MIN_DIRECTION_MAGNITUDE: f64 = 0.9;
/// Absolute tolerance of all geometric comparisons (degenerate magnitudes, points on a plane).
pub const TOLERANCE: f64 = 1e-6;

/// A loosely-typed input parameter.
///
/// This is the form in which user supplied values (e.g. from a YAML job document) enter the
/// crate before they are validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Param {
    /// an integer number. Accepted wherever a scalar is expected and widened to `f64`.
    Int(i64),
    /// an integer number above `i64::MAX`. Treated like [`Param::Int`].
    UInt(u64),
    /// a floating point number
    Float(f64),
    /// a boolean value. Never accepted by any check.
    Bool(bool),
    /// a text value. Never accepted by any check.
    Text(String),
    /// an ordered sequence of parameters (vectors, quaternions)
    Seq(Vec<Param>),
}
impl Param {
    fn type_name(&self) -> &'static str {
        match self {
            Self::Int(_) | Self::UInt(_) => "int",
            Self::Float(_) => "float",
            Self::Bool(_) => "bool",
            Self::Text(_) => "text",
            Self::Seq(_) => "sequence",
        }
    }
}
impl Display for Param {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::UInt(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Text(v) => write!(f, "\"{v}\""),
            Self::Seq(elems) => {
                write!(f, "(")?;
                for (idx, elem) in elems.iter().enumerate() {
                    if idx > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{elem}")?;
                }
                write!(f, ")")
            }
        }
    }
}
impl From<f64> for Param {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}
impl From<i64> for Param {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}
impl From<i32> for Param {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}
impl From<bool> for Param {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}
impl From<&str> for Param {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}
impl From<String> for Param {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}
impl<T: Into<Self>> From<Vec<T>> for Param {
    fn from(values: Vec<T>) -> Self {
        Self::Seq(values.into_iter().map(Into::into).collect())
    }
}
impl<T: Into<Self>, const N: usize> From<[T; N]> for Param {
    fn from(values: [T; N]) -> Self {
        Self::Seq(values.into_iter().map(Into::into).collect())
    }
}
impl From<Vector3<f64>> for Param {
    fn from(vec: Vector3<f64>) -> Self {
        Self::from([vec.x, vec.y, vec.z])
    }
}
impl From<Quaternion<f64>> for Param {
    fn from(quat: Quaternion<f64>) -> Self {
        Self::from([quat.w, quat.i, quat.j, quat.k])
    }
}

/// A validated number of points to be generated (`0 < n < 100000`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PointCount(usize);
impl PointCount {
    /// Create a new [`PointCount`].
    ///
    /// # Errors
    ///
    /// This function returns [`GeoError::InvalidValue`] if `nr_of_points` is <= 0 or >= 100000.
    pub fn new(nr_of_points: i64) -> GeoResult<Self> {
        if nr_of_points <= 0 {
            return Err(GeoError::InvalidValue(format!(
                "number of points must be greater than zero, got {nr_of_points}"
            )));
        }
        usize::try_from(nr_of_points)
            .ok()
            .filter(|n| *n < MAX_POINT_COUNT)
            .map(Self)
            .ok_or_else(|| {
                GeoError::InvalidValue(format!(
                    "number of points must be less than {MAX_POINT_COUNT}, got {nr_of_points}"
                ))
            })
    }
    /// Returns the number of points.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }
}
impl TryFrom<usize> for PointCount {
    type Error = GeoError;

    fn try_from(nr_of_points: usize) -> GeoResult<Self> {
        i64::try_from(nr_of_points).map_or_else(
            |_| {
                Err(GeoError::InvalidValue(format!(
                    "number of points must be less than {MAX_POINT_COUNT}, got {nr_of_points}"
                )))
            },
            Self::new,
        )
    }
}
impl Display for PointCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Check the number of random points to be created.
///
/// # Errors
///
/// This function will return an error if
///   - the parameter is not an integer ([`GeoError::InvalidType`]).
///   - its value is <= 0 or >= 100000 ([`GeoError::InvalidValue`]).
pub fn check_point_count(nr_of_points: &Param) -> GeoResult<PointCount> {
    match nr_of_points {
        Param::Int(n) => PointCount::new(*n),
        Param::UInt(n) => Err(GeoError::InvalidValue(format!(
            "number of points must be less than {MAX_POINT_COUNT}, got {n}"
        ))),
        other => Err(GeoError::InvalidType(format!(
            "number of points must be an integer, got {} {other}",
            other.type_name()
        ))),
    }
}

/// Check that a typed scalar is finite.
///
/// # Errors
///
/// This function returns [`GeoError::InvalidValue`] if the value is infinite or NaN.
pub fn finite_scalar(value: f64) -> GeoResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(GeoError::InvalidValue(format!(
            "parameter must be finite, got {value}"
        )))
    }
}

/// Check a geometry parameter to be a finite number. Integers are widened to `f64`.
///
/// # Errors
///
/// This function will return an error if
///   - the parameter is neither an integer nor a float ([`GeoError::InvalidType`]).
///   - the value is infinite or NaN ([`GeoError::InvalidValue`]).
pub fn check_scalar(param: &Param) -> GeoResult<f64> {
    let value = match param {
        Param::Float(v) => *v,
        Param::Int(v) => i64_to_f64(*v),
        Param::UInt(v) => u64_to_f64(*v),
        other => {
            return Err(GeoError::InvalidType(format!(
                "parameter must be an integer or a float, got {} {other}",
                other.type_name()
            )))
        }
    };
    finite_scalar(value)
}

/// Check that a typed radius is finite and strictly positive.
///
/// # Errors
///
/// This function returns [`GeoError::InvalidValue`] if the radius is infinite, NaN or <= 0.
pub fn positive_radius(radius: f64) -> GeoResult<f64> {
    let radius = finite_scalar(radius)?;
    if radius <= 0.0 {
        return Err(GeoError::InvalidValue(format!(
            "radius must be greater than zero, got {radius}"
        )));
    }
    Ok(radius)
}

/// Check a radius parameter to be a finite number greater than zero.
///
/// # Errors
///
/// This function will return an error if
///   - the parameter is neither an integer nor a float ([`GeoError::InvalidType`]).
///   - the value is infinite, NaN or <= 0 ([`GeoError::InvalidValue`]).
pub fn check_radius(radius: &Param) -> GeoResult<f64> {
    positive_radius(check_scalar(radius)?)
}

fn sequence<'a>(param: &'a Param, len: usize, what: &str) -> GeoResult<&'a [Param]> {
    match param {
        Param::Seq(elems) if elems.len() == len => Ok(elems),
        Param::Seq(elems) => Err(GeoError::InvalidValue(format!(
            "{what} must have {len} elements, got {}",
            elems.len()
        ))),
        other => Err(GeoError::InvalidType(format!(
            "{what} must be a sequence of {len} numbers, got {} {other}",
            other.type_name()
        ))),
    }
}

/// Check that all components of a typed 3D vector are finite.
///
/// # Errors
///
/// This function returns [`GeoError::InvalidValue`] if one of the components is infinite or NaN.
pub fn finite_vector3(vec: &Vector3<f64>) -> GeoResult<Vector3<f64>> {
    if vec.iter().all(|c| c.is_finite()) {
        Ok(*vec)
    } else {
        Err(GeoError::InvalidValue(format!(
            "vector components must be finite, got ({}, {}, {})",
            vec.x, vec.y, vec.z
        )))
    }
}

/// Check a parameter to be a 3D vector of finite numbers.
///
/// # Errors
///
/// This function will return an error if
///   - the parameter is not a sequence or one of its elements is not a number ([`GeoError::InvalidType`]).
///   - the sequence does not have exactly 3 elements or one of them is infinite or NaN ([`GeoError::InvalidValue`]).
pub fn check_vector3(vec: &Param) -> GeoResult<Vector3<f64>> {
    let elems = sequence(vec, 3, "vector")?;
    Ok(Vector3::new(
        check_scalar(&elems[0])?,
        check_scalar(&elems[1])?,
        check_scalar(&elems[2])?,
    ))
}

/// Check that a typed vector can serve as a direction.
///
/// The magnitude must be at least 0.9. This is a sanity floor and not a unit length requirement:
/// direction vectors are normalized by their consumers.
///
/// # Errors
///
/// This function returns [`GeoError::InvalidValue`] if a component is not finite or the
/// magnitude is below 0.9.
pub fn direction_vector(vec: &Vector3<f64>) -> GeoResult<Vector3<f64>> {
    let vec = finite_vector3(vec)?;
    let magnitude = scaled_norm(&vec);
    if magnitude < MIN_DIRECTION_MAGNITUDE {
        return Err(GeoError::InvalidValue(format!(
            "direction vector magnitude must be at least {MIN_DIRECTION_MAGNITUDE}, got {magnitude}"
        )));
    }
    Ok(vec)
}

/// Check a parameter to be a 3D direction vector (magnitude >= 0.9).
///
/// # Errors
///
/// This function fails like [`check_vector3`] and additionally returns
/// [`GeoError::InvalidValue`] if the magnitude is below 0.9.
pub fn check_direction_vector(vec: &Param) -> GeoResult<Vector3<f64>> {
    direction_vector(&check_vector3(vec)?)
}

/// Check that all components of a typed quaternion are finite.
///
/// # Errors
///
/// This function returns [`GeoError::InvalidValue`] if one of the components is infinite or NaN.
pub fn finite_quaternion(quat: &Quaternion<f64>) -> GeoResult<Quaternion<f64>> {
    if quat.coords.iter().all(|c| c.is_finite()) {
        Ok(*quat)
    } else {
        Err(GeoError::InvalidValue(format!(
            "quaternion components must be finite, got ({}, {}, {}, {})",
            quat.w, quat.i, quat.j, quat.k
        )))
    }
}

/// Check a parameter to be a quaternion `(w, x, y, z)` of finite numbers.
///
/// # Errors
///
/// This function will return an error if
///   - the parameter is not a sequence or one of its elements is not a number ([`GeoError::InvalidType`]).
///   - the sequence does not have exactly 4 elements or one of them is infinite or NaN ([`GeoError::InvalidValue`]).
pub fn check_quaternion(quat: &Param) -> GeoResult<Quaternion<f64>> {
    let elems = sequence(quat, 4, "quaternion")?;
    Ok(Quaternion::new(
        check_scalar(&elems[0])?,
        check_scalar(&elems[1])?,
        check_scalar(&elems[2])?,
        check_scalar(&elems[3])?,
    ))
}

#[cfg(test)]
mod test {
    use super::*;
    use assert_matches::assert_matches;

    fn mixed(elems: Vec<Param>) -> Param {
        Param::Seq(elems)
    }
    #[test]
    fn point_count() {
        assert_eq!(check_point_count(&Param::from(1)).unwrap().get(), 1);
        assert_eq!(check_point_count(&Param::from(99_999)).unwrap().get(), 99_999);
        for n in [0, -1, 100_000, i64::MAX, i64::MIN] {
            assert_matches!(
                check_point_count(&Param::Int(n)),
                Err(GeoError::InvalidValue(_))
            );
        }
        for param in [
            Param::from("5"),
            Param::from(4.5),
            Param::from(5.0),
            Param::from(true),
            Param::from([1, 2]),
        ] {
            assert_matches!(check_point_count(&param), Err(GeoError::InvalidType(_)));
        }
    }
    #[test]
    fn point_count_messages() {
        assert_eq!(
            check_point_count(&Param::from(0)).unwrap_err().to_string(),
            "InvalidValue:number of points must be greater than zero, got 0"
        );
        assert_eq!(
            check_point_count(&Param::from(100_000))
                .unwrap_err()
                .to_string(),
            "InvalidValue:number of points must be less than 100000, got 100000"
        );
        assert_eq!(
            check_point_count(&Param::from("5")).unwrap_err().to_string(),
            "InvalidType:number of points must be an integer, got text \"5\""
        );
    }
    #[test]
    fn point_count_try_from() {
        assert_eq!(PointCount::try_from(5usize).unwrap().get(), 5);
        assert!(PointCount::try_from(0usize).is_err());
        assert!(PointCount::try_from(MAX_POINT_COUNT).is_err());
        assert!(PointCount::try_from(usize::MAX).is_err());
        assert_eq!(PointCount::new(42).unwrap().to_string(), "42");
    }
    #[test]
    fn scalar() {
        assert_eq!(check_scalar(&Param::from(3)).unwrap(), 3.0);
        assert_eq!(check_scalar(&Param::from(-4.5)).unwrap(), -4.5);
        assert_eq!(check_scalar(&Param::from(0)).unwrap(), 0.0);
        for param in [
            Param::from("1"),
            Param::from(false),
            Param::from([1.0]),
            Param::from(Vec::<Param>::new()),
        ] {
            assert_matches!(check_scalar(&param), Err(GeoError::InvalidType(_)));
        }
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert_matches!(
                check_scalar(&Param::from(value)),
                Err(GeoError::InvalidValue(_))
            );
            assert!(finite_scalar(value).is_err());
        }
    }
    #[test]
    fn radius() {
        assert_eq!(check_radius(&Param::from(2)).unwrap(), 2.0);
        assert_eq!(check_radius(&Param::from(0.01)).unwrap(), 0.01);
        assert_matches!(check_radius(&Param::from("1.0")), Err(GeoError::InvalidType(_)));
        for value in [0.0, -0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert_matches!(
                check_radius(&Param::from(value)),
                Err(GeoError::InvalidValue(_))
            );
        }
        assert_matches!(check_radius(&Param::from(0)), Err(GeoError::InvalidValue(_)));
        assert!(positive_radius(1.0e-300).is_ok());
    }
    #[test]
    fn vector3() {
        assert_eq!(
            check_vector3(&Param::from([1, 2, 3])).unwrap(),
            Vector3::new(1.0, 2.0, 3.0)
        );
        assert_eq!(
            check_vector3(&mixed(vec![1.into(), 2.5.into(), (-3).into()])).unwrap(),
            Vector3::new(1.0, 2.5, -3.0)
        );
        for param in [
            mixed(vec!["1".into(), 2.into(), 3.into()]),
            mixed(vec![1.into(), 2.into(), "3".into()]),
            Param::from("test"),
            Param::from(5.4),
        ] {
            assert_matches!(check_vector3(&param), Err(GeoError::InvalidType(_)));
        }
        for param in [
            Param::from([1, 2]),
            Param::from([1, 2, 3, 4]),
            Param::from([f64::NAN, 2.0, 3.0]),
            Param::from([1.0, f64::NEG_INFINITY, 3.0]),
        ] {
            assert_matches!(check_vector3(&param), Err(GeoError::InvalidValue(_)));
        }
    }
    #[test]
    fn vector3_length_before_element_type() {
        assert_matches!(
            check_vector3(&mixed(vec!["1".into(), 2.into()])),
            Err(GeoError::InvalidValue(_))
        );
    }
    #[test]
    fn direction() {
        assert!(check_direction_vector(&Param::from([1, 0, 0])).is_ok());
        assert!(check_direction_vector(&Param::from([0.9, 0.0, 0.0])).is_ok());
        assert!(check_direction_vector(&Param::from([99254.0, 88777.7, 26755.0])).is_ok());
        for param in [
            Param::from([0, 0, 0]),
            Param::from([0.89, 0.0, 0.0]),
            Param::from([0.5, 0.5, 0.0]),
            Param::from([f64::NAN, 1.0, 0.0]),
            Param::from([1, 0]),
        ] {
            assert_matches!(
                check_direction_vector(&param),
                Err(GeoError::InvalidValue(_))
            );
        }
        assert_matches!(
            check_direction_vector(&Param::from("x")),
            Err(GeoError::InvalidType(_))
        );
    }
    #[test]
    fn direction_typed() {
        let vec = Vector3::new(0.0, 0.0, -0.95);
        assert_eq!(direction_vector(&vec).unwrap(), vec);
        let vec = Vector3::new(1e-200, 0.95, 1e200);
        assert_eq!(direction_vector(&vec).unwrap(), vec);
        assert_matches!(
            direction_vector(&Vector3::new(0.0, 0.6, 0.6)),
            Err(GeoError::InvalidValue(_))
        );
    }
    #[test]
    fn quaternion() {
        let quat = check_quaternion(&Param::from([1, 2, 3, 4])).unwrap();
        assert_eq!(quat, Quaternion::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(quat.w, 1.0);
        assert_eq!(quat.k, 4.0);
        assert_matches!(
            check_quaternion(&Param::from("1234")),
            Err(GeoError::InvalidType(_))
        );
        assert_matches!(
            check_quaternion(&mixed(vec![1.into(), 2.into(), 3.into(), "4".into()])),
            Err(GeoError::InvalidType(_))
        );
        for param in [
            Param::from([1, 2, 3]),
            Param::from([1, 2, 3, 4, 5]),
            Param::from([1.0, 2.0, f64::INFINITY, 4.0]),
        ] {
            assert_matches!(check_quaternion(&param), Err(GeoError::InvalidValue(_)));
        }
        assert!(finite_quaternion(&Quaternion::new(f64::NAN, 0.0, 0.0, 0.0)).is_err());
    }
    #[test]
    fn param_display() {
        assert_eq!(
            mixed(vec![1.into(), 2.5.into(), "a".into()]).to_string(),
            "(1, 2.5, \"a\")"
        );
        assert_eq!(Param::from(Vector3::new(1.0, 0.0, -2.0)), Param::from([1.0, 0.0, -2.0]));
    }
    #[test]
    fn param_deserialize() {
        let param: Param = serde_yaml::from_str("[1, 2.5, x]").unwrap();
        assert_eq!(param, mixed(vec![1.into(), 2.5.into(), "x".into()]));
        let param: Param = serde_yaml::from_str("-7").unwrap();
        assert_eq!(param, Param::Int(-7));
        let param: Param = serde_yaml::from_str("\"5\"").unwrap();
        assert_eq!(param, Param::from("5"));
    }
    #[test]
    fn wide_integers_stay_integral() {
        let param: Param = serde_yaml::from_str("10000000000000000000").unwrap();
        assert_eq!(param, Param::UInt(10_000_000_000_000_000_000));
        assert_eq!(param.type_name(), "int");
        assert_eq!(param.to_string(), "10000000000000000000");
        assert_eq!(
            check_point_count(&param).unwrap_err().to_string(),
            "InvalidValue:number of points must be less than 100000, got 10000000000000000000"
        );
        assert_eq!(check_scalar(&param).unwrap(), 1e19);
    }
}
