//! # Subject Capability — The Delegated Equality Contract
//!
//! The [`Subject`] trait is the single capability every participant in a
//! delegation chain implements: real values, checked proxies, unchecked
//! proxies, and any external forwarding facility that wants its output
//! verified by the harness.
//!
//! ## Equivalence Invariant
//!
//! Two subjects are equal exactly when their canonical real values carry
//! equal payloads. Proxy layering is invisible to the contract: wrapping a
//! subject any number of times must not change the outcome of `equals` or
//! `hash_code`. Every equality decision funnels through
//! [`Subject::canonical`], so there is exactly one place where the payload
//! comparison happens and no implementation can drift from another.
//!
//! ## Absence
//!
//! The contract models an absent comparison operand as `None`. Comparing
//! any healthy subject against `None` answers `false`; it is never a fault.
//! Absence only becomes a fault when an unchecked proxy with an absent
//! wrap target is asked to evaluate anything at all.

use std::fmt;
use std::sync::Arc;

use crate::error::DelegationError;
use crate::real::RealValue;

/// A wrap target handed to proxy construction.
///
/// `None` models the absent argument a caller may pass at the construction
/// boundary. Checked construction refuses it; unchecked construction stores
/// it and faults later, mid-comparison.
pub type WrapTarget = Option<Arc<dyn Subject>>;

/// The equality-comparable capability.
///
/// All three operations are fallible: a healthy chain never errors, but a
/// chain containing an unchecked proxy over an absent target raises
/// [`DelegationError::NullDereference`] from whichever operation first
/// touches the defect, and the error propagates unchanged to the caller.
pub trait Subject: fmt::Debug + Send + Sync {
    /// Resolve the terminal real value this chain delegates to.
    ///
    /// Real values resolve to themselves; proxies forward the call inward.
    fn canonical(&self) -> Result<&RealValue, DelegationError>;

    /// Evaluate equality against `other`.
    ///
    /// Answers `true` exactly when both sides resolve to canonical real
    /// values with equal payloads, `false` when the payloads differ or
    /// `other` is `None`.
    fn equals(&self, other: Option<&dyn Subject>) -> Result<bool, DelegationError>;

    /// The hash code paired with `equals`.
    ///
    /// Equal subjects observe equal hash codes because both delegate to the
    /// same canonical payload.
    fn hash_code(&self) -> Result<i64, DelegationError>;
}
