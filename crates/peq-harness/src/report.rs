//! # Relation Report — Serializable Verification Artifact
//!
//! A [`RelationReport`] is the durable output of one verification run: which
//! chain was swept under which strategy, what every property sweep found,
//! and whether any delegation fault fired along the way. Reports serialize
//! to JSON for external tooling and render to plain text for humans.
//!
//! Violations and faults are separate populations: a violation is a wrong
//! verdict from a healthy evaluation, a fault is an evaluation that never
//! produced a verdict at all. A report claims `is_equivalence()` only when
//! both populations are empty.

use std::fmt;

use chrono::{DateTime, Utc};
use peq_core::{DelegationError, SubjectOp};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::chain::Chain;
use crate::relation::{Property, Violation};

/// Unique identifier for a verification run.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RunId(pub Uuid);

impl RunId {
    /// Generate a new random run identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "run:{}", self.0)
    }
}

/// A delegation fault recorded during one property sweep.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaultRecord {
    /// The sweep that was in progress.
    pub property: Property,
    /// The capability operation that dereferenced an absent target, when
    /// the fault fired mid-evaluation.
    pub operation: Option<SubjectOp>,
    /// Rendered error message.
    pub message: String,
}

impl FaultRecord {
    /// Record `error` as observed during the `property` sweep.
    pub fn new(property: Property, error: &DelegationError) -> Self {
        Self {
            property,
            operation: error.operation(),
            message: error.to_string(),
        }
    }
}

/// Per-property sweep outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyOutcome {
    /// The property swept.
    pub property: Property,
    /// Number of violations the sweep found.
    pub violations: usize,
    /// Whether the sweep aborted on a delegation fault.
    pub faulted: bool,
}

/// Aggregated verdict counts, computed by [`RelationReport::finalize`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Properties swept.
    pub properties: usize,
    /// Total violations across all sweeps.
    pub violations: usize,
    /// Total recorded faults.
    pub faults: usize,
    /// True when the relation held: no violations and no faults.
    pub equivalence: bool,
}

/// Complete artifact of one equivalence verification run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelationReport {
    /// Run identity.
    pub run_id: RunId,
    /// Strategy label of the factory the chain was built against.
    pub strategy: String,
    /// When the run started.
    pub started_at: DateTime<Utc>,
    /// Slot labels of the verified chain, in construction order.
    pub chain: Vec<String>,
    /// Per-property outcomes, in sweep order.
    pub outcomes: Vec<PropertyOutcome>,
    /// Every violation found, across all sweeps.
    pub violations: Vec<Violation>,
    /// Every fault recorded, across all sweeps.
    pub faults: Vec<FaultRecord>,
    /// Aggregated counts; valid after [`RelationReport::finalize`].
    pub summary: ReportSummary,
}

impl RelationReport {
    /// Start an empty report for one run over `chain`.
    pub fn new(chain: &Chain) -> Self {
        Self {
            run_id: RunId::new(),
            strategy: chain.strategy().to_owned(),
            started_at: Utc::now(),
            chain: chain.labels(),
            outcomes: Vec::new(),
            violations: Vec::new(),
            faults: Vec::new(),
            summary: ReportSummary::default(),
        }
    }

    /// Record a completed sweep and the violations it found.
    pub fn record_outcome(&mut self, property: Property, violations: Vec<Violation>) {
        self.outcomes.push(PropertyOutcome {
            property,
            violations: violations.len(),
            faulted: false,
        });
        self.violations.extend(violations);
    }

    /// Record a sweep that aborted on a delegation fault.
    pub fn record_fault(&mut self, property: Property, error: &DelegationError) {
        self.outcomes.push(PropertyOutcome {
            property,
            violations: 0,
            faulted: true,
        });
        self.faults.push(FaultRecord::new(property, error));
    }

    /// Compute the summary from everything recorded so far.
    pub fn finalize(&mut self) {
        self.summary = ReportSummary {
            properties: self.outcomes.len(),
            violations: self.violations.len(),
            faults: self.faults.len(),
            equivalence: self.violations.is_empty() && self.faults.is_empty(),
        };
    }

    /// Whether the verified relation is an equivalence relation.
    pub fn is_equivalence(&self) -> bool {
        self.summary.equivalence
    }

    /// Render the report as plain text.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("equivalence report {}\n", self.run_id));
        out.push_str(&format!("strategy: {}\n", self.strategy));
        out.push_str(&format!(
            "started: {}\n",
            self.started_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));

        out.push_str(&format!("chain ({} slots):\n", self.chain.len()));
        for (i, label) in self.chain.iter().enumerate() {
            out.push_str(&format!("  [{i}] {label}\n"));
        }

        out.push_str("properties:\n");
        for outcome in &self.outcomes {
            if outcome.faulted {
                out.push_str(&format!("  {}: fault\n", outcome.property));
            } else if outcome.violations == 0 {
                out.push_str(&format!("  {}: ok\n", outcome.property));
            } else {
                out.push_str(&format!(
                    "  {}: {} violations\n",
                    outcome.property, outcome.violations
                ));
            }
        }

        if !self.violations.is_empty() {
            out.push_str("violations:\n");
            for violation in &self.violations {
                out.push_str(&format!("  - {violation}\n"));
            }
        }

        if !self.faults.is_empty() {
            out.push_str("faults:\n");
            for fault in &self.faults {
                out.push_str(&format!("  - {}: {}\n", fault.property, fault.message));
            }
        }

        if self.is_equivalence() {
            out.push_str("verdict: equivalence relation holds\n");
        } else {
            out.push_str("verdict: relation violated\n");
        }

        out
    }

    /// Serialize the report to pretty JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
