//! # Forwarding Proxies — Checked and Unchecked Construction
//!
//! Two structurally identical wrappers around a [`Subject`], differing in
//! exactly one decision: whether construction validates that there is
//! something to wrap.
//!
//! ## Delegation Invariant
//!
//! A proxy carries no comparable state of its own. `equals`, `hash_code`,
//! and `canonical` forward unconditionally to the wrapped subject, so for a
//! [`CheckedProxy`] `p` over target `t`, `p.equals(x) == t.equals(x)` and
//! `p.hash_code() == t.hash_code()` for every reachable `x`. The proxy's own
//! type never participates in a comparison, which is what keeps the relation
//! an equivalence at every nesting depth.
//!
//! ## The Unchecked Variant
//!
//! [`UncheckedProxy`] skips the construction check and stores an absent
//! target as-is. It is kept as a negative-control fixture: a chain that
//! contains one over an absent target faults with
//! [`DelegationError::NullDereference`] on the first operation that
//! dereferences, and the harness asserts that this fault surfaces rather
//! than being masked as an equality verdict.

use std::sync::Arc;

use crate::error::{DelegationError, SubjectOp};
use crate::real::RealValue;
use crate::subject::{Subject, WrapTarget};

/// A forwarding proxy whose constructor refuses an absent wrap target.
///
/// Once constructed, the target is statically present and every capability
/// operation is pure delegation, so a checked proxy can never introduce a
/// fault of its own.
#[derive(Debug, Clone)]
pub struct CheckedProxy {
    target: Arc<dyn Subject>,
}

impl CheckedProxy {
    /// Wrap `target`, refusing absence.
    ///
    /// Fails with [`DelegationError::NullWrapTarget`] when handed `None`.
    /// This check is the single difference between the checked and
    /// unchecked variants.
    pub fn new(target: WrapTarget) -> Result<Self, DelegationError> {
        match target {
            Some(target) => Ok(Self { target }),
            None => Err(DelegationError::NullWrapTarget),
        }
    }

    /// Wrap a target that is present by type, returning a shared handle.
    ///
    /// The check in [`CheckedProxy::new`] cannot fire on this path, so
    /// construction is infallible.
    pub fn shared(target: Arc<dyn Subject>) -> Arc<dyn Subject> {
        Arc::new(Self { target })
    }
}

impl Subject for CheckedProxy {
    fn canonical(&self) -> Result<&RealValue, DelegationError> {
        self.target.canonical()
    }

    fn equals(&self, other: Option<&dyn Subject>) -> Result<bool, DelegationError> {
        self.target.equals(other)
    }

    fn hash_code(&self) -> Result<i64, DelegationError> {
        self.target.hash_code()
    }
}

/// A forwarding proxy whose constructor performs no validation.
///
/// With a present target it is behaviorally identical to [`CheckedProxy`].
/// With an absent target every capability operation faults, including
/// `equals(None)`: delegation happens before the operand is inspected, so
/// there is no answer an absent-target proxy can give about anything.
#[derive(Debug, Clone)]
pub struct UncheckedProxy {
    target: WrapTarget,
}

impl UncheckedProxy {
    /// Wrap `target` as given, absent or not.
    pub fn new(target: WrapTarget) -> Self {
        if target.is_none() {
            tracing::warn!("unchecked proxy constructed over an absent wrap target");
        }
        Self { target }
    }

    /// A shared handle over an unvalidated target.
    pub fn shared(target: WrapTarget) -> Arc<dyn Subject> {
        Arc::new(Self::new(target))
    }

    fn delegate(&self, operation: SubjectOp) -> Result<&dyn Subject, DelegationError> {
        self.target
            .as_deref()
            .ok_or(DelegationError::NullDereference { operation })
    }
}

impl Subject for UncheckedProxy {
    fn canonical(&self) -> Result<&RealValue, DelegationError> {
        self.delegate(SubjectOp::Canonical)?.canonical()
    }

    fn equals(&self, other: Option<&dyn Subject>) -> Result<bool, DelegationError> {
        self.delegate(SubjectOp::Equals)?.equals(other)
    }

    fn hash_code(&self) -> Result<i64, DelegationError> {
        self.delegate(SubjectOp::HashCode)?.hash_code()
    }
}
