//! # peq-core — Foundational Types for the Proxy-Equivalence Kit
//!
//! This crate defines the delegation universe: the [`Subject`] capability,
//! the concrete [`RealValue`] every chain terminates in, the two forwarding
//! proxy variants, the fault taxonomy, and the factory seam the harness
//! constructs proxies through. `peq-harness` depends on this crate; it
//! depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **One decision path for equality.** Every `equals` evaluation resolves
//!    both sides to their canonical `RealValue` and compares payloads there.
//!    No implementation inspects the operand's concrete type, compares
//!    pointers, or special-cases nesting depth, so no two implementations
//!    can disagree about an equivalence class.
//!
//! 2. **Absence is typed, not sentinel.** The comparison operand is
//!    `Option<&dyn Subject>` and the wrap target is
//!    `Option<Arc<dyn Subject>>`. There is no null to forget to check; there
//!    is a variant to refuse or to deliberately store.
//!
//! 3. **Checked and unchecked construction differ in exactly one line.**
//!    `CheckedProxy::new` refuses an absent target with `NullWrapTarget`;
//!    `UncheckedProxy::new` stores it. The unchecked variant is a permanent
//!    negative-control fixture, not a bug awaiting a fix.
//!
//! 4. **Faults are values.** Capability operations return
//!    `Result<_, DelegationError>`; a dereference of an absent target
//!    surfaces as `NullDereference` naming the operation, never as a panic
//!    and never masked as `false`.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `peq-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public error and report-facing types derive `Debug` and `Clone`;
//!   serializable ones implement `Serialize`/`Deserialize`.

pub mod error;
pub mod factory;
pub mod proxy;
pub mod real;
pub mod subject;

// Re-export primary types for ergonomic imports.
pub use error::{DelegationError, SubjectOp};
pub use factory::{CheckedFactory, ProxyFactory};
pub use proxy::{CheckedProxy, UncheckedProxy};
pub use real::RealValue;
pub use subject::{Subject, WrapTarget};
