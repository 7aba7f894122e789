//! # Chain Fixtures — Labeled Delegation Chains
//!
//! A [`Chain`] is the unit the harness verifies: an ordered collection of
//! subjects, each slot labeled with its construction shape so a violation
//! can say `checked(checked(real[42]))` instead of "slot 3". Slots alias
//! freely through `Arc`, which is what lets several proxies wrap one shared
//! real value the way the standard fixture does.
//!
//! [`ChainBuilder`] grows a chain against a [`ProxyFactory`], so the same
//! fixture description can be replayed under any forwarding strategy.

use std::sync::Arc;

use peq_core::{ProxyFactory, RealValue, Subject, UncheckedProxy};

/// One labeled slot in a chain.
#[derive(Debug, Clone)]
pub struct ChainSlot {
    /// Construction shape, e.g. `real[42]` or `checked(real[42])`.
    pub label: String,
    /// The subject occupying this slot.
    pub subject: Arc<dyn Subject>,
}

/// An ordered, labeled collection of subjects under verification.
#[derive(Debug, Clone)]
pub struct Chain {
    strategy: &'static str,
    slots: Vec<ChainSlot>,
}

impl Chain {
    /// The eight-slot standard fixture: two equivalence classes.
    ///
    /// Slots 0 to 4 all resolve to payload 42: the real value, two sibling
    /// proxies over it, and proxies stacked to depths two and three. Slots
    /// 5 to 7 resolve to payload 57: a second real value with two sibling
    /// proxies. Every pair within a class must compare equal, every pair
    /// across the classes unequal.
    pub fn standard(factory: &dyn ProxyFactory) -> Self {
        ChainBuilder::new(factory)
            .real(42) // 0
            .proxy_of(0) // 1
            .proxy_of(0) // 2
            .proxy_of(2) // 3
            .proxy_of(3) // 4
            .real(57) // 5
            .proxy_of(5) // 6
            .proxy_of(5) // 7
            .build()
    }

    /// The strategy label of the factory the chain was built against.
    pub fn strategy(&self) -> &'static str {
        self.strategy
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the chain has no slots.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// All slots in construction order.
    pub fn slots(&self) -> &[ChainSlot] {
        &self.slots
    }

    /// Iterate over slots in construction order.
    pub fn iter(&self) -> std::slice::Iter<'_, ChainSlot> {
        self.slots.iter()
    }

    /// The subject in `slot`.
    ///
    /// # Panics
    ///
    /// Panics if `slot` is out of range.
    pub fn subject(&self, slot: usize) -> &dyn Subject {
        self.slots[slot].subject.as_ref()
    }

    /// The construction label of `slot`.
    ///
    /// # Panics
    ///
    /// Panics if `slot` is out of range.
    pub fn label(&self, slot: usize) -> &str {
        &self.slots[slot].label
    }

    /// All slot labels in construction order.
    pub fn labels(&self) -> Vec<String> {
        self.slots.iter().map(|slot| slot.label.clone()).collect()
    }
}

/// Grows a [`Chain`] slot by slot against a fixed [`ProxyFactory`].
///
/// Slot-referencing methods take indices into the chain built so far, which
/// is how a fixture expresses aliasing: `proxy_of(0)` twice yields two
/// independent wrappers around the same shared slot-0 subject.
pub struct ChainBuilder<'f> {
    factory: &'f dyn ProxyFactory,
    slots: Vec<ChainSlot>,
}

impl<'f> ChainBuilder<'f> {
    /// Start an empty chain built against `factory`.
    pub fn new(factory: &'f dyn ProxyFactory) -> Self {
        Self {
            factory,
            slots: Vec::new(),
        }
    }

    fn push(mut self, label: String, subject: Arc<dyn Subject>) -> Self {
        self.slots.push(ChainSlot { label, subject });
        self
    }

    /// Append a real value anchoring the equivalence class of `payload`.
    pub fn real(self, payload: i64) -> Self {
        let real = RealValue::new(payload);
        self.push(real.to_string(), Arc::new(real))
    }

    /// Append a factory proxy wrapping the most recent slot.
    ///
    /// # Panics
    ///
    /// Panics if the chain is still empty.
    pub fn proxy(self) -> Self {
        match self.slots.len().checked_sub(1) {
            Some(last) => self.proxy_of(last),
            None => panic!("proxy() requires at least one existing slot to wrap"),
        }
    }

    /// Append a factory proxy wrapping the subject in `slot`.
    ///
    /// # Panics
    ///
    /// Panics if `slot` is out of range.
    pub fn proxy_of(self, slot: usize) -> Self {
        let target = Arc::clone(&self.slots[slot].subject);
        let label = format!("{}({})", self.factory.strategy(), self.slots[slot].label);
        let proxy = self.factory.make_proxy(target);
        self.push(label, proxy)
    }

    /// Append an unchecked proxy wrapping the subject in `slot`.
    ///
    /// The target is present, so the resulting slot is behaviorally a
    /// transparent forwarder; only its construction path is unvalidated.
    ///
    /// # Panics
    ///
    /// Panics if `slot` is out of range.
    pub fn unchecked_of(self, slot: usize) -> Self {
        let target = Arc::clone(&self.slots[slot].subject);
        let label = format!("unchecked({})", self.slots[slot].label);
        self.push(label, UncheckedProxy::shared(Some(target)))
    }

    /// Append an unchecked proxy over an absent target.
    ///
    /// The injected fault: every capability operation on this slot fails
    /// with a null-dereference error.
    pub fn defective(self) -> Self {
        self.push("unchecked(absent)".to_owned(), UncheckedProxy::shared(None))
    }

    /// Append an externally constructed subject under the given label.
    ///
    /// This is how a foreign forwarding implementation enters a chain for
    /// verification without the builder knowing its construction.
    pub fn subject(self, label: impl Into<String>, subject: Arc<dyn Subject>) -> Self {
        self.push(label.into(), subject)
    }

    /// Finish the chain.
    pub fn build(self) -> Chain {
        Chain {
            strategy: self.factory.strategy(),
            slots: self.slots,
        }
    }
}
