//! Error types with miette diagnostics.
//!
//! Two kinds only: inverted bounds at range construction, and malformed
//! wire shapes at parse time. Numeric degeneracies (zero aspect ratios,
//! coincident endpoints, NaN arithmetic) are never errors; they propagate
//! as NaN or infinity per the type contracts.

use miette::Diagnostic;
use thiserror::Error;

// ============================================================================
// Construction Errors
// ============================================================================

/// Validation failure while building a `NumericRange`.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum RangeError {
    #[error("inverted range: max {max} is less than min {min}")]
    #[diagnostic(
        code(planar::range::inverted),
        help("swap the bounds, or widen max to at least min")
    )]
    Inverted { min: f64, max: f64 },
}

// ============================================================================
// Wire Errors
// ============================================================================

/// Shape failure while parsing or encoding a wire representation.
///
/// Raised before any instance is constructed: a malformed shape never
/// produces a partially-populated value.
#[derive(Error, Diagnostic, Debug)]
pub enum WireError {
    #[error("malformed {target} shape: {source}")]
    #[diagnostic(
        code(planar::wire::shape),
        help("wire shapes are flat JSON objects; see the wire module docs for the required keys")
    )]
    Shape {
        target: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("could not encode wire shape: {source}")]
    #[diagnostic(code(planar::wire::encode))]
    Encode {
        #[source]
        source: serde_json::Error,
    },
}
