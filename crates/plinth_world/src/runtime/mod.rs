//! Plinth runtime: scanning, level transitions, bindings, persistence.

mod binding;
mod codec;
mod error;
mod events;
mod interaction;
mod plinth;
mod reach;
mod scanner;
mod scheduler;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use binding::{
    BindingParams, BindingRegistry, BindingSignal, ObserverResolver, PeekingObserver,
};
pub use codec::{decode, encode, record_hash, DecodedState, PlinthRecord};
pub use error::PlinthError;
pub use events::PlinthEvent;
pub use interaction::{decide_interaction, InteractAction};
pub use plinth::Plinth;
pub use reach::{effective_reach, REACH_MULTIPLIERS};
pub use scanner::scan_pyramid;
pub use scheduler::{TickScheduler, SCAN_INTERVAL_TICKS};
pub use state::{LevelChange, PlinthState};
pub use types::{DimensionId, Level, ObserverId, WorldTime, MAX_LEVEL};
