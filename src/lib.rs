//! This is the documentation for the **random geometry points** package.
//!
//! It creates random points lying on simple geometric surfaces: a 2D circle, a sphere and a plane
//! bounded to a disk around a reference point. Point creation is available eagerly as a list or
//! lazily as a generator. All inputs are validated before any point is created.
//!
//! Besides the library API, the `rgp` executable reads a YAML job document, creates the requested
//! points and writes them to a CSV file.
#![allow(clippy::module_name_repetitions)]

pub mod console;
pub mod document;
pub mod error;
pub mod export;
pub mod surfaces;
pub mod utils;
pub mod validation;
pub mod vector_math;

pub use document::PointJobDocument;

/// Return the version information of the currently built `rgp` executable.
#[must_use]
pub fn get_version() -> String {
    format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}
#[cfg(test)]
mod test {
    use super::*;
    #[test]
    fn get_ver() {
        let version = get_version();
        assert!(version.starts_with("random_geometry_points "));
        assert!(version.ends_with(env!("CARGO_PKG_VERSION")));
    }
}
