//! Domain error types

use thiserror::Error;

use crate::component::Component;

/// Errors raised while building a version tuple from untrusted input.
///
/// The packing operations themselves are total; these only surface when
/// parsing text or narrowing wider integers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A component does not fit in one byte of the packed integer.
    #[error("{component} component out of range: {value} (expected 0-255)")]
    ComponentOutOfRange {
        /// Position of the offending component.
        component: Component,
        /// The rejected value.
        value: u64,
    },

    /// The text is not a `major.revision.modification.patch` version.
    #[error("invalid version string: {0}")]
    InvalidVersionString(String),
}

impl DomainError {
    /// Creates a new out-of-range error.
    #[must_use]
    pub const fn out_of_range(component: Component, value: u64) -> Self {
        Self::ComponentOutOfRange { component, value }
    }

    /// Creates a new invalid version string error.
    pub fn invalid_version(input: impl Into<String>) -> Self {
        Self::InvalidVersionString(input.into())
    }
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
