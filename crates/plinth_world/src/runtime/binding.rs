//! Observer bindings and notification delivery.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::geometry::BlockPos;

use super::types::{DimensionId, ObserverId};

/// What a bound observer needs to follow its plinth: where it sits and how
/// far its influence reaches at the current level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindingParams {
    pub dimension: DimensionId,
    pub pos: BlockPos,
    pub reach: i64,
}

/// Notification delivered to resolved observer handles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindingSignal {
    /// The plinth's level changed; re-read the binding parameters.
    Rebind(BindingParams),
    /// The plinth is being torn down; stop observing.
    Stop,
}

/// A currently live observer handle.
pub trait PeekingObserver {
    fn on_rebind(&mut self, params: &BindingParams);
    fn on_stop(&mut self);
}

/// Resolves a bound identity to a currently live observer handle.
///
/// Injected by the host; the registry never assumes a particular runtime's
/// player or session model.
pub trait ObserverResolver {
    fn resolve(&mut self, id: ObserverId) -> Option<&mut dyn PeekingObserver>;
}

/// The set of identities bound to one plinth.
///
/// Holds identities only — never live references — so plinth and observer
/// lifetimes stay independent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindingRegistry {
    bound: BTreeSet<ObserverId>,
}

impl BindingRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `id`. Duplicate binds are no-ops; returns whether the set grew.
    pub fn bind(&mut self, id: ObserverId) -> bool {
        self.bound.insert(id)
    }

    /// Remove `id`. Removing an absent identity is a no-op, not an error;
    /// returns whether anything was removed.
    pub fn unbind(&mut self, id: ObserverId) -> bool {
        self.bound.remove(&id)
    }

    /// Drop every binding without notifying anyone.
    pub fn clear(&mut self) {
        self.bound.clear();
    }

    pub fn contains(&self, id: ObserverId) -> bool {
        self.bound.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.bound.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bound.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = ObserverId> + '_ {
        self.bound.iter().copied()
    }

    /// Deliver `signal` once to every identity that resolves to a live
    /// handle. Identities that fail to resolve are skipped silently; an
    /// offline observer is expected, not an error. Delivery order across
    /// the set is unspecified. Returns the number of deliveries made.
    pub fn notify_all(&self, resolver: &mut dyn ObserverResolver, signal: &BindingSignal) -> usize {
        let mut delivered = 0;
        for id in self.bound.iter().copied() {
            if let Some(handle) = resolver.resolve(id) {
                match signal {
                    BindingSignal::Rebind(params) => handle.on_rebind(params),
                    BindingSignal::Stop => handle.on_stop(),
                }
                delivered += 1;
            }
        }
        delivered
    }
}

impl FromIterator<ObserverId> for BindingRegistry {
    fn from_iter<I: IntoIterator<Item = ObserverId>>(iter: I) -> Self {
        Self {
            bound: iter.into_iter().collect(),
        }
    }
}
