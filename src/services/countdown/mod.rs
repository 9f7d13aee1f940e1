mod engine;
mod models;
mod ticker;

pub use engine::{compute, resolve_target, try_compute, CountdownError};
pub use models::{CountdownState, TargetMoment};
pub use ticker::CountdownTicker;
