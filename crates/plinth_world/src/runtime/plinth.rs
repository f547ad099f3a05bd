//! The plinth aggregate: scheduling, scanning, bindings, and persistence.

use std::mem;
use std::path::Path;

use crate::config::PlinthConfig;
use crate::geometry::BlockPos;
use crate::items::{ItemRegistry, MARKER_BLOCK};
use crate::world::WorldQuery;

use super::binding::{BindingParams, BindingSignal, ObserverResolver};
use super::codec::{self, PlinthRecord};
use super::error::PlinthError;
use super::events::PlinthEvent;
use super::interaction::{decide_interaction, InteractAction};
use super::reach::effective_reach;
use super::scanner::scan_pyramid;
use super::scheduler::TickScheduler;
use super::state::PlinthState;
use super::types::{DimensionId, Level, ObserverId};

/// A placed plinth instance.
///
/// Owns its state exclusively; the host drives it through ticks,
/// interactions, and persistence calls, and consumes the returned
/// [`PlinthEvent`]s. All work for one call completes before it returns.
#[derive(Debug, Clone)]
pub struct Plinth {
    state: PlinthState,
    scheduler: TickScheduler,
    config: PlinthConfig,
}

impl Plinth {
    /// A freshly placed plinth: level 0, the registry's default podium
    /// item, no bindings.
    pub fn new(
        dimension: impl Into<DimensionId>,
        pos: BlockPos,
        config: PlinthConfig,
        registry: &ItemRegistry,
    ) -> Self {
        Self {
            state: PlinthState::new(dimension, pos, registry.default_item()),
            scheduler: TickScheduler::new(),
            config,
        }
    }

    pub fn with_scheduler(mut self, scheduler: TickScheduler) -> Self {
        self.scheduler = scheduler;
        self
    }

    pub fn state(&self) -> &PlinthState {
        &self.state
    }

    pub fn level(&self) -> Level {
        self.state.level
    }

    pub fn enabled(&self) -> bool {
        self.state.enabled()
    }

    pub fn selected_item(&self) -> &str {
        &self.state.selected_item
    }

    /// Parameters bound observers follow at the current level.
    pub fn binding_params(&self) -> Result<BindingParams, PlinthError> {
        Ok(BindingParams {
            dimension: self.state.dimension.clone(),
            pos: self.state.pos,
            reach: effective_reach(self.state.level, self.config.base_reach)?,
        })
    }

    // ------------------------------------------------------------------
    // Tick
    // ------------------------------------------------------------------

    /// Host tick entry point.
    ///
    /// Off the scheduler's cadence this is a no-op. On it, the pyramid is
    /// scanned and the result applied before anything else; when the level
    /// changed, the host is told about the change (and about an enabled
    /// flip, when one happened), then every resolvable bound observer gets
    /// exactly one rebind with the new parameters.
    pub fn tick(
        &mut self,
        world: &impl WorldQuery,
        resolver: &mut dyn ObserverResolver,
    ) -> Result<Vec<PlinthEvent>, PlinthError> {
        if !self.scheduler.should_fire(world.time()) {
            return Ok(Vec::new());
        }
        let new_level = scan_pyramid(world, self.state.pos, MARKER_BLOCK);
        let was_enabled = self.state.enabled();
        let change = match self.state.apply_scan(new_level)? {
            None => return Ok(Vec::new()),
            Some(change) => change,
        };

        let mut events = vec![PlinthEvent::LevelChanged {
            previous: change.previous,
            current: change.current,
        }];
        if self.state.enabled() != was_enabled {
            events.push(PlinthEvent::EnabledChanged {
                enabled: self.state.enabled(),
            });
        }
        let params = self.binding_params()?;
        self.state
            .bindings
            .notify_all(resolver, &BindingSignal::Rebind(params));
        Ok(events)
    }

    // ------------------------------------------------------------------
    // Interaction
    // ------------------------------------------------------------------

    /// Execute an already decided interaction for `actor`.
    pub fn apply_interaction(
        &mut self,
        actor: ObserverId,
        action: InteractAction,
        registry: &ItemRegistry,
    ) -> Result<Vec<PlinthEvent>, PlinthError> {
        match action {
            InteractAction::PlaceItem { item } => {
                let item = registry.resolve(&item)?;
                let previous = mem::replace(&mut self.state.selected_item, item.clone());
                Ok(vec![
                    PlinthEvent::ItemTaken { item: previous },
                    PlinthEvent::ItemPlaced { item },
                ])
            }
            InteractAction::TakeItem => {
                let default_item = registry.default_item().to_string();
                let item = mem::replace(&mut self.state.selected_item, default_item);
                // Forcible release: bindings are dropped without notification.
                self.state.bindings.clear();
                Ok(vec![PlinthEvent::ItemTaken { item }])
            }
            InteractAction::Bind => {
                if self.state.bindings.bind(actor) {
                    Ok(vec![PlinthEvent::ObserverBound { observer: actor }])
                } else {
                    Ok(Vec::new())
                }
            }
            InteractAction::Unbind => {
                if self.state.bindings.unbind(actor) {
                    Ok(vec![PlinthEvent::ObserverUnbound { observer: actor }])
                } else {
                    Ok(Vec::new())
                }
            }
            InteractAction::Ignore => Ok(Vec::new()),
        }
    }

    /// Decide and execute in one step, for hosts without their own policy.
    pub fn on_interact(
        &mut self,
        actor: ObserverId,
        held_item: Option<&str>,
        sneaking: bool,
        registry: &ItemRegistry,
    ) -> Result<Vec<PlinthEvent>, PlinthError> {
        let action = decide_interaction(&self.state, actor, held_item, sneaking, registry);
        self.apply_interaction(actor, action, registry)
    }

    // ------------------------------------------------------------------
    // Teardown
    // ------------------------------------------------------------------

    /// Broadcast stop to every resolvable bound observer, then drop the
    /// bound set. Unconditional and synchronous; the plinth is dead to its
    /// observers once this returns.
    pub fn on_destroyed(&mut self, resolver: &mut dyn ObserverResolver) -> Vec<PlinthEvent> {
        let delivered = self
            .state
            .bindings
            .notify_all(resolver, &BindingSignal::Stop);
        self.state.bindings.clear();
        vec![PlinthEvent::Destroyed {
            stops_delivered: delivered,
        }]
    }

    // ------------------------------------------------------------------
    // Persistence
    // ------------------------------------------------------------------

    pub fn to_record(&self) -> PlinthRecord {
        codec::encode(&self.state)
    }

    /// Apply a persisted or synced record.
    ///
    /// An unknown podium item is recovered by substituting the registry
    /// default; the lookup failure never escapes this call.
    pub fn apply_record(
        &mut self,
        record: &PlinthRecord,
        registry: &ItemRegistry,
    ) -> Result<(), PlinthError> {
        let decoded = match codec::decode(record, registry) {
            Ok(decoded) => decoded,
            Err(PlinthError::UnknownItem { .. }) => {
                let mut fallback = record.clone();
                fallback.podium_item = Some(registry.default_item().to_string());
                codec::decode(&fallback, registry)?
            }
            Err(error) => return Err(error),
        };
        self.state.level = decoded.level;
        self.state.selected_item = decoded.selected_item;
        self.state.bindings = decoded.bound_observers.into_iter().collect();
        Ok(())
    }

    pub fn save_to_path(&self, path: impl AsRef<Path>) -> Result<(), PlinthError> {
        self.to_record().save_json(path)
    }

    pub fn load_from_path(
        &mut self,
        path: impl AsRef<Path>,
        registry: &ItemRegistry,
    ) -> Result<(), PlinthError> {
        let record = PlinthRecord::load_json(path)?;
        self.apply_record(&record, registry)
    }

    /// CBOR payload for point-in-time network sync; same record shape as
    /// the durable store.
    pub fn sync_payload(&self) -> Result<Vec<u8>, PlinthError> {
        self.to_record().to_sync_payload()
    }

    pub fn apply_sync_payload(
        &mut self,
        payload: &[u8],
        registry: &ItemRegistry,
    ) -> Result<(), PlinthError> {
        let record = PlinthRecord::from_sync_payload(payload)?;
        self.apply_record(&record, registry)
    }

    /// Content hash of the current record; hosts compare against the last
    /// synced hash to skip redundant sends.
    pub fn sync_hash(&self) -> Result<String, PlinthError> {
        codec::record_hash(&self.to_record())
    }
}
