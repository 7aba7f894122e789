//! # Real Value — The Equivalence-Class Anchor
//!
//! [`RealValue`] is the one concrete subject in the kit: a single immutable
//! integer payload. Every delegation chain, however deep, terminates in one
//! of these, and the payload it carries decides the equivalence class of the
//! entire chain.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::DelegationError;
use crate::subject::Subject;

/// A concrete subject carrying one comparable payload.
///
/// Equality is payload-value semantics: two real values are equal exactly
/// when their payloads are equal, and the hash code is the payload itself.
/// The std `PartialEq`/`Eq`/`Hash` derives agree with the capability
/// relation by construction, so `RealValue` is safe in ordinary collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RealValue {
    payload: i64,
}

impl RealValue {
    /// Create a real value anchoring the equivalence class of `payload`.
    pub fn new(payload: i64) -> Self {
        Self { payload }
    }

    /// The comparable payload.
    pub fn payload(&self) -> i64 {
        self.payload
    }

    /// A shared handle, ready to be wrapped by a proxy.
    pub fn shared(payload: i64) -> Arc<dyn Subject> {
        Arc::new(Self::new(payload))
    }
}

impl fmt::Display for RealValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "real[{}]", self.payload)
    }
}

impl Subject for RealValue {
    fn canonical(&self) -> Result<&RealValue, DelegationError> {
        Ok(self)
    }

    fn equals(&self, other: Option<&dyn Subject>) -> Result<bool, DelegationError> {
        match other {
            None => Ok(false),
            // The operand resolves to its canonical value first, so a
            // defective operand faults even when this side is healthy.
            Some(other) => Ok(other.canonical()?.payload == self.payload),
        }
    }

    fn hash_code(&self) -> Result<i64, DelegationError> {
        Ok(self.payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_payloads_compare_equal() {
        let a = RealValue::new(42);
        let b = RealValue::new(42);
        assert_eq!(a.equals(Some(&b)), Ok(true));
        assert_eq!(b.equals(Some(&a)), Ok(true));
    }

    #[test]
    fn test_distinct_payloads_compare_unequal() {
        let a = RealValue::new(42);
        let b = RealValue::new(57);
        assert_eq!(a.equals(Some(&b)), Ok(false));
        assert_eq!(b.equals(Some(&a)), Ok(false));
    }

    #[test]
    fn test_reflexive() {
        let a = RealValue::new(-7);
        assert_eq!(a.equals(Some(&a)), Ok(true));
    }

    #[test]
    fn test_absent_operand_is_unequal_not_a_fault() {
        let a = RealValue::new(42);
        assert_eq!(a.equals(None), Ok(false));
    }

    #[test]
    fn test_hash_code_is_the_payload() {
        assert_eq!(RealValue::new(42).hash_code(), Ok(42));
        assert_eq!(RealValue::new(-3).hash_code(), Ok(-3));
        assert_eq!(RealValue::new(0).hash_code(), Ok(0));
    }

    #[test]
    fn test_canonical_resolves_to_self() {
        let a = RealValue::new(9);
        let canonical = a.canonical().unwrap();
        assert_eq!(canonical.payload(), 9);
    }

    #[test]
    fn test_std_eq_agrees_with_capability_equals() {
        let a = RealValue::new(11);
        let b = RealValue::new(11);
        let c = RealValue::new(12);
        assert_eq!(a == b, a.equals(Some(&b)).unwrap());
        assert_eq!(a == c, a.equals(Some(&c)).unwrap());
    }

    #[test]
    fn test_display_renders_payload() {
        assert_eq!(RealValue::new(42).to_string(), "real[42]");
        assert_eq!(RealValue::new(-5).to_string(), "real[-5]");
    }

    #[test]
    fn test_serde_round_trip() {
        let a = RealValue::new(42);
        let json = serde_json::to_string(&a).unwrap();
        let back: RealValue = serde_json::from_str(&json).unwrap();
        assert_eq!(a, back);
    }
}
