#![warn(missing_docs)]
//! Error structures of the point generator
use std::{error::Error, fmt::Display};

/// Result type used throughout this crate
pub type GeoResult<T> = std::result::Result<T, GeoError>;

/// Errors that can be returned by the validation, vector math and surface functions.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum GeoError {
    /// the input does not have the expected shape or type (e.g. a string where a number is expected)
    InvalidType(String),
    /// the input has the right shape but a disallowed value (non-finite, non-positive radius, degenerate vector, ...)
    InvalidValue(String),
    /// errors while reading, parsing or writing a job document
    Document(String),
    /// errors while exporting generated points
    Export(String),
    /// errors while handling command line arguments
    Console(String),
}

impl Display for GeoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidType(m) => {
                write!(f, "InvalidType:{m}")
            }
            Self::InvalidValue(m) => {
                write!(f, "InvalidValue:{m}")
            }
            Self::Document(m) => {
                write!(f, "Document:{m}")
            }
            Self::Export(m) => {
                write!(f, "Export:{m}")
            }
            Self::Console(m) => write!(f, "Console:{m}"),
        }
    }
}
impl Error for GeoError {}
