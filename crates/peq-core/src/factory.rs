//! # Proxy Factory — The Construction Seam
//!
//! The harness never constructs proxies directly; it asks a
//! [`ProxyFactory`] for them. Swapping the factory swaps the forwarding
//! mechanism under verification without touching a single sweep, which is
//! how the same suite can vet hand-written wrappers today and a generated
//! forwarding facility tomorrow. The choice is an explicit parameter at the
//! call site, never process-wide state.

use std::sync::Arc;

use crate::proxy::CheckedProxy;
use crate::subject::Subject;

/// A strategy for wrapping a subject in one transparent forwarding layer.
///
/// Implementations take a target that is present by type, so construction
/// on this seam cannot fault. The verdicts of the equivalence harness must
/// not depend on which implementation produced the proxies.
pub trait ProxyFactory: Send + Sync {
    /// Wrap `subject` in a new forwarding layer.
    fn make_proxy(&self, subject: Arc<dyn Subject>) -> Arc<dyn Subject>;

    /// Stable strategy label, carried into chain labels and reports.
    fn strategy(&self) -> &'static str;
}

/// The shipped strategy: checked-proxy construction.
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckedFactory;

impl ProxyFactory for CheckedFactory {
    fn make_proxy(&self, subject: Arc<dyn Subject>) -> Arc<dyn Subject> {
        CheckedProxy::shared(subject)
    }

    fn strategy(&self) -> &'static str {
        "checked"
    }
}
