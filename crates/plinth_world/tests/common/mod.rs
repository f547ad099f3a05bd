//! Shared doubles for integration tests.

use std::collections::BTreeMap;

use plinth_world::{
    BindingParams, BlockPos, InMemoryWorld, ObserverId, ObserverResolver, PeekingObserver,
    MARKER_BLOCK,
};

/// Observer double that records every delivery.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingObserver {
    pub rebinds: Vec<BindingParams>,
    pub stops: usize,
}

impl PeekingObserver for RecordingObserver {
    fn on_rebind(&mut self, params: &BindingParams) {
        self.rebinds.push(params.clone());
    }

    fn on_stop(&mut self) {
        self.stops += 1;
    }
}

/// Resolver double backed by a map of currently online observers.
#[derive(Debug, Default)]
pub struct MapResolver {
    pub online: BTreeMap<ObserverId, RecordingObserver>,
}

impl MapResolver {
    pub fn with_online(ids: &[ObserverId]) -> Self {
        let mut resolver = Self::default();
        for id in ids {
            resolver.online.insert(*id, RecordingObserver::default());
        }
        resolver
    }
}

impl ObserverResolver for MapResolver {
    fn resolve(&mut self, id: ObserverId) -> Option<&mut dyn PeekingObserver> {
        self.online
            .get_mut(&id)
            .map(|observer| observer as &mut dyn PeekingObserver)
    }
}

/// World with `height` fully intact marker slices beneath `anchor`.
pub fn world_with_pyramid(anchor: BlockPos, height: i64) -> InMemoryWorld {
    let mut world = InMemoryWorld::new();
    for distance in 1..=height {
        world.fill_square(anchor.down(distance), distance, MARKER_BLOCK);
    }
    world
}
