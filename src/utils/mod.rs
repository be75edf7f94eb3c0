//! Module for additional computational capabilities
pub mod math_utils;
pub mod test_helper;
pub use math_utils::{i64_to_f64, scaled_direction, scaled_norm, u64_to_f64, usize_to_f64};
