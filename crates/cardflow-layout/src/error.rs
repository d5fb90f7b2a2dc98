//! Error and diagnostic types.

use std::fmt;

/// Rejected layout configuration.
///
/// Returned synchronously from [`crate::LayoutEngine::update_config`] and
/// friends. The engine keeps its previous configuration when this is raised.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    /// A size field that must be strictly positive was zero, negative, or not finite.
    NonPositive { field: &'static str, value: f64 },
    /// A spacing field that must be non-negative was negative or not finite.
    Negative { field: &'static str, value: f64 },
    /// Unrecognized packing strategy name.
    UnknownStrategy { value: String },
    /// Unrecognized scroll direction name.
    UnknownDirection { value: String },
    /// An override value could not be parsed.
    InvalidValue { field: &'static str, value: String },
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositive { field, value } => {
                write!(f, "{field} must be a finite value > 0, got {value}")
            }
            Self::Negative { field, value } => {
                write!(f, "{field} must be a finite value >= 0, got {value}")
            }
            Self::UnknownStrategy { value } => write!(
                f,
                "unknown layout strategy {value:?} (expected auto, grid, or masonry)"
            ),
            Self::UnknownDirection { value } => write!(
                f,
                "unknown layout direction {value:?} (expected auto, vertical, or horizontal)"
            ),
            Self::InvalidValue { field, value } => {
                write!(f, "invalid value {value:?} for {field}")
            }
        }
    }
}

impl std::error::Error for ConfigurationError {}

/// A packer produced a position that breaks a layout guarantee.
///
/// These indicate a logic bug, never a user error. The engine reports them
/// through [`crate::LayoutEngine::invariant_violations`] and tracing.
#[derive(Debug, Clone, PartialEq)]
pub enum InvariantViolation {
    /// A card extends past the viewport on the cross axis or has a negative origin.
    Containment {
        card_id: String,
        /// How far outside the allowed region the card reaches.
        excess: f64,
    },
    /// Two cards occupy overlapping rectangles.
    Overlap { first: String, second: String },
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Containment { card_id, excess } => write!(
                f,
                "card {card_id:?} exceeds the viewport by {excess}"
            ),
            Self::Overlap { first, second } => {
                write!(f, "cards {first:?} and {second:?} overlap")
            }
        }
    }
}

impl std::error::Error for InvariantViolation {}
