//! The argument/range error kind.
//!
//! Raised synchronously by validated value constructors the moment an invalid
//! value is supplied. Never deferred to serialization time, and never
//! conflated with the wire-side `ParseError`/`WriteError` kinds.

use thiserror::Error;

/// An invalid value supplied to a validated constructor.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// The value falls outside the permitted inclusive range.
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        min: String,
        max: String,
        value: String,
    },

    /// The value must be strictly greater than zero.
    #[error("{field} must be greater than zero, got {value}")]
    NotPositive { field: &'static str, value: String },

    /// The value can only be set when another field is also set.
    #[error("{field} requires {requires} to be set")]
    Requires {
        field: &'static str,
        requires: &'static str,
    },

    /// A lower bound exceeds its matching upper bound.
    #[error("{field}: lower bound {lower} exceeds upper bound {upper}")]
    BoundsOrder {
        field: &'static str,
        lower: String,
        upper: String,
    },
}
