//! # peq-harness — Equivalence-Relation Verification Harness
//!
//! The machinery that decides whether a forwarding implementation actually
//! preserves the equality contract: labeled delegation chains, exhaustive
//! pairwise and triple-wise relation sweeps, and a serializable report of
//! every violation and fault a run observed.
//!
//! ## Key Design Principles
//!
//! 1. **The harness only speaks `Subject`.** Chains hold `Arc<dyn Subject>`
//!    and sweeps call `equals`, `hash_code`, and `canonical` through the
//!    trait. Nothing here downcasts, so a chain may mix real values, both
//!    shipped proxy variants, and foreign implementations under test.
//!
//! 2. **Construction strategy is a parameter.** `ChainBuilder` wraps
//!    through a `ProxyFactory` chosen at the call site; replaying one
//!    fixture under two factories is two builder calls, not a global
//!    toggle.
//!
//! 3. **Violations are not faults.** A violation is a wrong verdict from a
//!    healthy evaluation; a fault is an evaluation that never produced a
//!    verdict. Sweeps return violations and propagate faults, and the
//!    verifier's `FaultPolicy` decides whether a fault abandons the run or
//!    is recorded in the report.
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests, with one documented
//!   exception: fixture-builder and chain accessors panic on out-of-range
//!   slot indices, stated per method.
//! - Report types derive `Debug`, `Clone`, `Serialize`, `Deserialize`.

pub mod chain;
pub mod relation;
pub mod report;
pub mod verifier;

// Re-export primary types for ergonomic imports.
pub use chain::{Chain, ChainBuilder, ChainSlot};
pub use relation::{
    check_canonical_agreement, check_hash_consistency, check_null_safety, check_property,
    check_reflexivity, check_symmetry, check_transitivity, Property, Violation,
};
pub use report::{FaultRecord, PropertyOutcome, RelationReport, ReportSummary, RunId};
pub use verifier::{EquivalenceVerifier, FaultPolicy, HarnessConfig};
