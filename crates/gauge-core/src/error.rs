// File: crates/gauge-core/src/error.rs
// Summary: Error type for attribute and color parsing.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum GaugeError {
    #[error("invalid value {value:?} for attribute `{key}`: {reason}")]
    InvalidAttribute {
        key: String,
        value: String,
        reason: String,
    },
    #[error("invalid color {0:?}")]
    InvalidColor(String),
    #[error("invalid dimension {0:?}")]
    InvalidDimension(String),
}

pub type Result<T> = std::result::Result<T, GaugeError>;
