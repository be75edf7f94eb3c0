//! Lossy numeric casts with the clippy exceptions kept in one place and an overflow free vector norm.
use nalgebra::Vector3;

/// Widen an integer parameter to a floating point value.
#[must_use]
pub const fn i64_to_f64(value: i64) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let newval = value as f64;
    newval
}

/// Widen an unsigned integer parameter to a floating point value.
#[must_use]
pub const fn u64_to_f64(value: u64) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let newval = value as f64;
    newval
}

#[must_use]
pub const fn usize_to_f64(value: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let newval = value as f64;
    newval
}

/// Euclidean norm of a vector, computed without intermediate overflow.
///
/// The components are divided by the largest absolute component before squaring, so vectors
/// with components up to `f64::MAX` keep a finite norm unless the norm itself exceeds `f64::MAX`.
#[must_use]
pub fn scaled_norm(vec: &Vector3<f64>) -> f64 {
    let largest = vec.amax();
    if largest > 0.0 && largest.is_finite() {
        (vec / largest).norm() * largest
    } else {
        vec.norm()
    }
}

/// Direction of a vector as unit vector, computed without intermediate overflow.
///
/// Returns `None` for the zero vector and for non-finite components.
#[must_use]
pub fn scaled_direction(vec: &Vector3<f64>) -> Option<Vector3<f64>> {
    let largest = vec.amax();
    if largest > 0.0 && largest.is_finite() {
        let scaled = vec / largest;
        Some(scaled / scaled.norm())
    } else {
        None
    }
}

#[cfg(test)]
mod test {
    use super::*;
    #[test]
    fn widen() {
        assert_eq!(i64_to_f64(-3), -3.0);
        assert_eq!(i64_to_f64(0), 0.0);
        assert_eq!(usize_to_f64(99_999), 99_999.0);
        assert_eq!(u64_to_f64(10_000_000_000_000_000_000), 1e19);
    }
    #[test]
    fn scaled_norm_large_components() {
        assert_eq!(scaled_norm(&Vector3::new(3.0, -4.0, 0.0)), 5.0);
        assert_eq!(scaled_norm(&Vector3::zeros()), 0.0);
        assert_eq!(scaled_norm(&Vector3::new(1e200, 0.0, 0.0)), 1e200);
        let norm = scaled_norm(&Vector3::new(1e200, 1e200, 1e200));
        assert!((norm / 1e200 - 3.0_f64.sqrt()).abs() < 1e-12);
        assert!(scaled_norm(&Vector3::new(1e-200, 1e-200, 0.0)) > 0.0);
        assert!(scaled_norm(&Vector3::new(f64::NAN, 0.0, 0.0)).is_nan());
    }
    #[test]
    fn scaled_direction_large_components() {
        assert_eq!(
            scaled_direction(&Vector3::new(-1e300, 0.0, 0.0)),
            Some(Vector3::new(-1.0, 0.0, 0.0))
        );
        let dir = scaled_direction(&Vector3::new(f64::MAX, f64::MAX, f64::MAX)).unwrap();
        assert!((dir.norm() - 1.0).abs() < 1e-12);
        assert_eq!(scaled_direction(&Vector3::zeros()), None);
        assert_eq!(scaled_direction(&Vector3::new(f64::INFINITY, 0.0, 0.0)), None);
    }
}
