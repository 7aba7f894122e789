//! # Error Types — Delegation Fault Taxonomy
//!
//! Defines the fault conditions of the delegation contract. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Faults are never swallowed: constructors and capability operations
//!   return `Result` and callers propagate with `?`.
//! - A fault raised mid-comparison names the operation that performed the
//!   offending dereference, so a report can say not just *that* a chain is
//!   defective but *where* the defect fired.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The capability operation in progress when a fault was raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubjectOp {
    /// Equality evaluation (`Subject::equals`).
    Equals,
    /// Hash-code evaluation (`Subject::hash_code`).
    HashCode,
    /// Canonical-value resolution (`Subject::canonical`).
    Canonical,
}

impl SubjectOp {
    /// Stable lowercase name, used in error messages and report output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Equals => "equals",
            Self::HashCode => "hash_code",
            Self::Canonical => "canonical",
        }
    }
}

impl fmt::Display for SubjectOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fault conditions of the delegation contract.
///
/// Both variants are contract violations, not recoverable states: a caller
/// that receives one aborts the comparison in progress and surfaces the
/// error to whoever requested it.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelegationError {
    /// Checked construction refused an absent wrap target.
    #[error("refusing to construct a proxy over an absent wrap target")]
    NullWrapTarget,

    /// An unchecked proxy dereferenced its absent wrap target while
    /// evaluating a capability operation.
    #[error("absent wrap target dereferenced during {operation}")]
    NullDereference {
        /// The capability operation that performed the dereference.
        operation: SubjectOp,
    },
}

impl DelegationError {
    /// The operation the fault fired in, if the fault occurred
    /// mid-evaluation rather than at construction.
    pub fn operation(&self) -> Option<SubjectOp> {
        match self {
            Self::NullWrapTarget => None,
            Self::NullDereference { operation } => Some(*operation),
        }
    }
}
