pub mod config;
pub mod geometry;
pub mod items;
pub mod runtime;
pub mod world;

pub use config::{PlinthConfig, DEFAULT_BASE_REACH};
pub use geometry::BlockPos;
pub use items::{BlockId, ItemId, ItemRegistry, DEFAULT_PODIUM_ITEM, MARKER_BLOCK};
pub use runtime::{
    decide_interaction, decode, effective_reach, encode, record_hash, scan_pyramid, BindingParams,
    BindingRegistry, BindingSignal, DecodedState, DimensionId, InteractAction, Level, LevelChange,
    ObserverId, ObserverResolver, PeekingObserver, Plinth, PlinthError, PlinthEvent, PlinthRecord,
    PlinthState, TickScheduler, WorldTime, MAX_LEVEL, REACH_MULTIPLIERS, SCAN_INTERVAL_TICKS,
};
pub use world::{InMemoryWorld, WorldQuery, DEFAULT_BOTTOM_Y};
