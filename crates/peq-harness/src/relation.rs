//! # Relation Sweeps — Pairwise and Triple-wise Property Checks
//!
//! Each sweep takes a [`Chain`] and checks one property of an equivalence
//! relation across every slot, pair, or triple, returning the violations it
//! found. A sweep that touches a defective slot propagates the delegation
//! fault instead of producing a verdict; faults and violations are kept
//! strictly apart.
//!
//! The sweeps are pure functions over the chain. Policy (which properties
//! run, what happens on a fault) lives in the verifier, not here.

use std::fmt;

use peq_core::DelegationError;
use serde::{Deserialize, Serialize};

use crate::chain::Chain;

/// The six properties a verified relation must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Property {
    /// `x.equals(x)` answers `true` for every slot.
    Reflexivity,
    /// `x.equals(y)` and `y.equals(x)` agree for every pair.
    Symmetry,
    /// `x≡y` and `y≡z` imply `x≡z` for every triple.
    Transitivity,
    /// `x.equals(None)` answers `false` for every slot.
    NullSafety,
    /// `x.equals(y)` agrees with canonical payload equality for every pair.
    CanonicalAgreement,
    /// Equal subjects observe equal hash codes.
    HashConsistency,
}

impl Property {
    /// All six properties, in sweep order.
    pub const ALL: [Property; 6] = [
        Property::Reflexivity,
        Property::Symmetry,
        Property::Transitivity,
        Property::NullSafety,
        Property::CanonicalAgreement,
        Property::HashConsistency,
    ];

    /// Stable lowercase name, used in logs and report output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Reflexivity => "reflexivity",
            Self::Symmetry => "symmetry",
            Self::Transitivity => "transitivity",
            Self::NullSafety => "null_safety",
            Self::CanonicalAgreement => "canonical_agreement",
            Self::HashConsistency => "hash_consistency",
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One observed failure of one property at specific slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// The property that failed.
    pub property: Property,
    /// The participating slot indices, in evaluation order.
    pub slots: Vec<usize>,
    /// The construction labels of those slots.
    pub labels: Vec<String>,
    /// What was observed.
    pub detail: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slots: Vec<String> = self.slots.iter().map(usize::to_string).collect();
        write!(
            f,
            "{} violated at slots [{}] ({}): {}",
            self.property,
            slots.join(","),
            self.labels.join(" / "),
            self.detail
        )
    }
}

fn violation(property: Property, chain: &Chain, slots: Vec<usize>, detail: String) -> Violation {
    let labels = slots.iter().map(|&i| chain.label(i).to_owned()).collect();
    Violation {
        property,
        slots,
        labels,
        detail,
    }
}

/// Run one property's sweep over the chain.
pub fn check_property(
    property: Property,
    chain: &Chain,
) -> Result<Vec<Violation>, DelegationError> {
    match property {
        Property::Reflexivity => check_reflexivity(chain),
        Property::Symmetry => check_symmetry(chain),
        Property::Transitivity => check_transitivity(chain),
        Property::NullSafety => check_null_safety(chain),
        Property::CanonicalAgreement => check_canonical_agreement(chain),
        Property::HashConsistency => check_hash_consistency(chain),
    }
}

/// Every slot must compare equal to itself.
pub fn check_reflexivity(chain: &Chain) -> Result<Vec<Violation>, DelegationError> {
    let mut violations = Vec::new();
    for (i, slot) in chain.iter().enumerate() {
        if !slot.subject.equals(Some(slot.subject.as_ref()))? {
            violations.push(violation(
                Property::Reflexivity,
                chain,
                vec![i],
                "x.equals(x) answered false".to_owned(),
            ));
        }
    }
    Ok(violations)
}

/// Both directions of every pair must agree.
pub fn check_symmetry(chain: &Chain) -> Result<Vec<Violation>, DelegationError> {
    let mut violations = Vec::new();
    for i in 0..chain.len() {
        for j in (i + 1)..chain.len() {
            let forward = chain.subject(i).equals(Some(chain.subject(j)))?;
            let backward = chain.subject(j).equals(Some(chain.subject(i)))?;
            if forward != backward {
                violations.push(violation(
                    Property::Symmetry,
                    chain,
                    vec![i, j],
                    format!("{forward} forward but {backward} backward"),
                ));
            }
        }
    }
    Ok(violations)
}

/// Equality must carry across every triple.
pub fn check_transitivity(chain: &Chain) -> Result<Vec<Violation>, DelegationError> {
    let mut violations = Vec::new();
    for i in 0..chain.len() {
        for j in 0..chain.len() {
            for k in 0..chain.len() {
                let first = chain.subject(i).equals(Some(chain.subject(j)))?;
                let second = chain.subject(j).equals(Some(chain.subject(k)))?;
                if first && second && !chain.subject(i).equals(Some(chain.subject(k)))? {
                    violations.push(violation(
                        Property::Transitivity,
                        chain,
                        vec![i, j, k],
                        format!("({i},{j}) and ({j},{k}) equal but ({i},{k}) unequal"),
                    ));
                }
            }
        }
    }
    Ok(violations)
}

/// Comparing any slot against an absent operand must answer `false`.
pub fn check_null_safety(chain: &Chain) -> Result<Vec<Violation>, DelegationError> {
    let mut violations = Vec::new();
    for (i, slot) in chain.iter().enumerate() {
        if slot.subject.equals(None)? {
            violations.push(violation(
                Property::NullSafety,
                chain,
                vec![i],
                "x.equals(None) answered true".to_owned(),
            ));
        }
    }
    Ok(violations)
}

/// The verdict of every ordered pair must match canonical payload equality.
pub fn check_canonical_agreement(chain: &Chain) -> Result<Vec<Violation>, DelegationError> {
    let mut violations = Vec::new();
    for i in 0..chain.len() {
        for j in 0..chain.len() {
            let left = chain.subject(i).canonical()?.payload();
            let right = chain.subject(j).canonical()?.payload();
            let verdict = chain.subject(i).equals(Some(chain.subject(j)))?;
            if verdict != (left == right) {
                violations.push(violation(
                    Property::CanonicalAgreement,
                    chain,
                    vec![i, j],
                    format!("equals answered {verdict} but canonical payloads are {left} and {right}"),
                ));
            }
        }
    }
    Ok(violations)
}

/// Slots that compare equal must observe the same hash code.
pub fn check_hash_consistency(chain: &Chain) -> Result<Vec<Violation>, DelegationError> {
    let mut violations = Vec::new();
    for i in 0..chain.len() {
        for j in (i + 1)..chain.len() {
            if !chain.subject(i).equals(Some(chain.subject(j)))? {
                continue;
            }
            let left = chain.subject(i).hash_code()?;
            let right = chain.subject(j).hash_code()?;
            if left != right {
                violations.push(violation(
                    Property::HashConsistency,
                    chain,
                    vec![i, j],
                    format!("equal subjects hash to {left} and {right}"),
                ));
            }
        }
    }
    Ok(violations)
}
