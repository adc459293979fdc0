//! Error types for Selecta.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`ResolveError`] - Errors while looking up a handler
//! - [`BuildError`] - Errors while assembling a registry
//! - [`ParseKindError`] - A wire name matched no kind

use thiserror::Error;

/// Errors that can occur while resolving a handler.
///
/// Resolution errors are never retryable: they mean either the request
/// named a kind nobody serves, or the registry was assembled without a
/// handler for a declared kind.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// No registered handler reports the requested kind.
    #[error("unsupported kind: {kind}")]
    UnsupportedKind {
        /// Wire name of the requested kind.
        kind: &'static str,
    },
}

impl ResolveError {
    /// Wire name of the kind that failed to resolve.
    pub fn kind_name(&self) -> &'static str {
        match self {
            ResolveError::UnsupportedKind { kind } => *kind,
        }
    }
}

/// Errors that can occur while assembling a registry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// Two handlers report the same kind.
    #[error("duplicate handler registered for kind: {0}")]
    DuplicateKind(&'static str),

    /// Declared kinds have no handler and the builder requires completeness.
    #[error("no handler registered for kinds: {}", .0.join(", "))]
    Incomplete(Vec<&'static str>),
}

/// A wire name did not match any member of the kind enumeration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unrecognized kind name: {input}")]
pub struct ParseKindError {
    input: String,
}

impl ParseKindError {
    /// Create a new parse error for the given input.
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }

    /// Get the rejected input.
    pub fn input(&self) -> &str {
        &self.input
    }
}
