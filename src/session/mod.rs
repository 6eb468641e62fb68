//! Game session - the sprint state machine
//!
//! One session per play-through. The session owns all mutable state and is
//! the only thing that changes it; action resolution and lifecycle checks
//! are pure functions over that state.

pub mod events;
pub mod lifecycle;
pub mod resolver;
pub mod snapshot;
pub mod state;

pub use events::{SessionEvent, SessionEventKind, SessionLog};
pub use lifecycle::{debt_saturated, exceeds_budget, sprint_complete};
pub use resolver::{classify_action, resolve_action, ActionOutcome, ActionVerdict};
pub use snapshot::{RoundView, SessionSnapshot};
pub use state::{GamePhase, GameSession};
