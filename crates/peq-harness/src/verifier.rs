//! # Equivalence Verifier — Configured Sweep Runner
//!
//! [`EquivalenceVerifier`] drives the relation sweeps over one chain under
//! an explicit [`HarnessConfig`] and assembles the [`RelationReport`]. All
//! policy lives here: which properties run, and whether a delegation fault
//! abandons the run or is recorded and the remaining sweeps continue.
//!
//! Configuration is a plain value passed in by the caller. There is no
//! global toggle anywhere; two verifiers with different configurations can
//! run side by side against the same chain.

use peq_core::DelegationError;
use serde::{Deserialize, Serialize};

use crate::chain::Chain;
use crate::relation::{self, Property};
use crate::report::RelationReport;

/// What a sweep-aborting delegation fault does to the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FaultPolicy {
    /// Propagate the fault to the caller and abandon the run.
    Abort,
    /// Record the fault in the report and continue with the next property.
    Record,
}

/// Which sweeps run, and how faults are treated.
///
/// The default runs every property and aborts on the first fault, the
/// strictest reading of the contract. Fixture-driven suites that verify
/// deliberately defective chains switch to [`FaultPolicy::Record`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HarnessConfig {
    /// Sweep every slot against itself.
    pub check_reflexivity: bool,
    /// Sweep both directions of every pair.
    pub check_symmetry: bool,
    /// Sweep every triple.
    pub check_transitivity: bool,
    /// Sweep every slot against an absent operand.
    pub check_null_safety: bool,
    /// Sweep every pair's verdict against canonical payload equality.
    pub check_canonical_agreement: bool,
    /// Sweep hash codes across every equal pair.
    pub check_hash_consistency: bool,
    /// Fault handling for the whole run.
    pub fault_policy: FaultPolicy,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            check_reflexivity: true,
            check_symmetry: true,
            check_transitivity: true,
            check_null_safety: true,
            check_canonical_agreement: true,
            check_hash_consistency: true,
            fault_policy: FaultPolicy::Abort,
        }
    }
}

impl HarnessConfig {
    fn enabled(&self, property: Property) -> bool {
        match property {
            Property::Reflexivity => self.check_reflexivity,
            Property::Symmetry => self.check_symmetry,
            Property::Transitivity => self.check_transitivity,
            Property::NullSafety => self.check_null_safety,
            Property::CanonicalAgreement => self.check_canonical_agreement,
            Property::HashConsistency => self.check_hash_consistency,
        }
    }
}

/// Runs the configured sweeps over a chain and reports what it saw.
#[derive(Debug, Clone, Default)]
pub struct EquivalenceVerifier {
    config: HarnessConfig,
}

impl EquivalenceVerifier {
    /// A verifier with explicit configuration.
    pub fn new(config: HarnessConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    /// Sweep `chain` and assemble the report.
    ///
    /// Under [`FaultPolicy::Abort`] the first delegation fault is returned
    /// as the error and the report is abandoned; under
    /// [`FaultPolicy::Record`] faults land in the report and the remaining
    /// sweeps still run.
    pub fn verify(&self, chain: &Chain) -> Result<RelationReport, DelegationError> {
        let mut report = RelationReport::new(chain);
        tracing::debug!(
            run_id = %report.run_id,
            strategy = %report.strategy,
            slots = chain.len(),
            "verification run started"
        );

        for property in Property::ALL {
            if !self.config.enabled(property) {
                continue;
            }
            tracing::debug!(property = %property, "sweep started");
            match relation::check_property(property, chain) {
                Ok(violations) => {
                    for violation in &violations {
                        tracing::warn!(property = %property, violation = %violation, "relation violation");
                    }
                    report.record_outcome(property, violations);
                }
                Err(error) => match self.config.fault_policy {
                    FaultPolicy::Abort => {
                        tracing::warn!(property = %property, error = %error, "delegation fault aborted the run");
                        return Err(error);
                    }
                    FaultPolicy::Record => {
                        tracing::warn!(property = %property, error = %error, "delegation fault recorded");
                        report.record_fault(property, &error);
                    }
                },
            }
        }

        report.finalize();
        tracing::debug!(
            run_id = %report.run_id,
            equivalence = report.summary.equivalence,
            violations = report.summary.violations,
            faults = report.summary.faults,
            "verification run finished"
        );
        Ok(report)
    }
}
