//! # Fault Injection Integration Tests
//!
//! The unchecked proxy variant as a negative control:
//!
//! 1. Checked construction refuses what unchecked construction accepts
//! 2. A fed unchecked proxy is behaviorally identical to a checked one
//! 3. A mixed-variant stack still verifies as an equivalence relation
//! 4. An absent-target slot faults on every operation, naming it
//! 5. Faults propagate unchanged through checked layers above the defect
//! 6. Comparisons that avoid the defective slot still behave correctly
//! 7. The verifier surfaces faults under both fault policies

use std::sync::Arc;

use peq_core::{
    CheckedFactory, CheckedProxy, DelegationError, RealValue, Subject, SubjectOp, UncheckedProxy,
};
use peq_harness::{ChainBuilder, EquivalenceVerifier, FaultPolicy, HarnessConfig};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn null_dereference(operation: SubjectOp) -> DelegationError {
    DelegationError::NullDereference { operation }
}

// ---------------------------------------------------------------------------
// 1. Checked construction refuses what unchecked construction accepts
// ---------------------------------------------------------------------------

#[test]
fn checked_refuses_what_unchecked_accepts() {
    assert_eq!(
        CheckedProxy::new(None).unwrap_err(),
        DelegationError::NullWrapTarget
    );

    // The unchecked variant stores the absence and defers the failure.
    let defective = UncheckedProxy::new(None);
    assert_eq!(
        defective.hash_code(),
        Err(null_dereference(SubjectOp::HashCode))
    );
}

// ---------------------------------------------------------------------------
// 2. A fed unchecked proxy is behaviorally identical to a checked one
// ---------------------------------------------------------------------------

#[test]
fn fed_unchecked_proxy_matches_checked_behavior() {
    let real = RealValue::shared(42);
    let checked = CheckedProxy::shared(Arc::clone(&real));
    let unchecked = UncheckedProxy::shared(Some(Arc::clone(&real)));

    assert_eq!(
        checked.equals(Some(real.as_ref())),
        unchecked.equals(Some(real.as_ref()))
    );
    assert_eq!(checked.hash_code(), unchecked.hash_code());
    assert_eq!(checked.equals(None), unchecked.equals(None));
    assert_eq!(unchecked.equals(Some(checked.as_ref())), Ok(true));
}

// ---------------------------------------------------------------------------
// 3. A mixed-variant stack still verifies as an equivalence relation
// ---------------------------------------------------------------------------

#[test]
fn mixed_variant_stack_verifies_as_equivalence() {
    // real → checked → unchecked(fed) → checked, stacked in order.
    let chain = ChainBuilder::new(&CheckedFactory)
        .real(42) // 0
        .proxy_of(0) // 1
        .unchecked_of(1) // 2
        .proxy_of(2) // 3
        .build();

    assert_eq!(chain.label(3), "checked(unchecked(checked(real[42])))");

    for i in 0..chain.len() {
        for j in 0..chain.len() {
            assert_eq!(
                chain.subject(i).equals(Some(chain.subject(j))),
                Ok(true),
                "slots {i},{j}"
            );
        }
        assert_eq!(chain.subject(i).hash_code(), Ok(42));
    }

    let report = EquivalenceVerifier::default().verify(&chain).unwrap();
    assert!(report.is_equivalence());
}

// ---------------------------------------------------------------------------
// 4. An absent-target slot faults on every operation, naming it
// ---------------------------------------------------------------------------

#[test]
fn absent_target_slot_faults_on_every_operation() {
    let real = RealValue::new(42);
    let defective = UncheckedProxy::new(None);

    assert_eq!(
        defective.equals(Some(&real)),
        Err(null_dereference(SubjectOp::Equals))
    );
    assert_eq!(
        defective.equals(None),
        Err(null_dereference(SubjectOp::Equals))
    );
    assert_eq!(
        defective.hash_code(),
        Err(null_dereference(SubjectOp::HashCode))
    );
    assert_eq!(
        defective.canonical().unwrap_err(),
        null_dereference(SubjectOp::Canonical)
    );

    // Initiating the comparison from the healthy side faults as well, at
    // the point the defective operand is resolved.
    assert_eq!(
        real.equals(Some(&defective)),
        Err(null_dereference(SubjectOp::Canonical))
    );
}

// ---------------------------------------------------------------------------
// 5. Faults propagate unchanged through checked layers above the defect
// ---------------------------------------------------------------------------

#[test]
fn faults_propagate_through_checked_layers() {
    let defective = UncheckedProxy::shared(None);
    let wrapped = CheckedProxy::shared(CheckedProxy::shared(defective));
    let real = RealValue::new(42);

    assert_eq!(
        wrapped.equals(Some(&real)),
        Err(null_dereference(SubjectOp::Equals))
    );
    assert_eq!(
        wrapped.hash_code(),
        Err(null_dereference(SubjectOp::HashCode))
    );
}

// ---------------------------------------------------------------------------
// 6. Comparisons that avoid the defective slot still behave correctly
// ---------------------------------------------------------------------------

#[test]
fn healthy_slots_are_untouched_by_a_defective_neighbor() {
    let chain = ChainBuilder::new(&CheckedFactory)
        .real(42) // 0
        .proxy_of(0) // 1
        .defective() // 2
        .real(57) // 3
        .build();

    assert_eq!(chain.subject(0).equals(Some(chain.subject(1))), Ok(true));
    assert_eq!(chain.subject(1).equals(Some(chain.subject(0))), Ok(true));
    assert_eq!(chain.subject(0).equals(Some(chain.subject(3))), Ok(false));
    assert_eq!(chain.subject(1).hash_code(), Ok(42));
    assert_eq!(chain.subject(3).hash_code(), Ok(57));
}

// ---------------------------------------------------------------------------
// 7. The verifier surfaces faults under both fault policies
// ---------------------------------------------------------------------------

#[test]
fn abort_policy_propagates_the_fault() {
    let chain = ChainBuilder::new(&CheckedFactory)
        .real(42)
        .defective()
        .build();

    let err = EquivalenceVerifier::default().verify(&chain).unwrap_err();
    assert_eq!(err, null_dereference(SubjectOp::Equals));
}

#[test]
fn record_policy_reports_a_fault_per_sweep() {
    let config = HarnessConfig {
        fault_policy: FaultPolicy::Record,
        ..HarnessConfig::default()
    };
    let chain = ChainBuilder::new(&CheckedFactory)
        .real(42)
        .proxy_of(0)
        .defective()
        .build();

    let report = EquivalenceVerifier::new(config).verify(&chain).unwrap();
    assert!(!report.is_equivalence());
    assert_eq!(report.summary.properties, 6);
    assert_eq!(report.summary.faults, 6);
    assert_eq!(report.summary.violations, 0);
    assert!(report.faults.iter().all(|f| f.operation.is_some()));

    let text = report.to_text();
    assert!(text.contains("verdict: relation violated"));
    assert!(text.contains("unchecked(absent)"));
}
