//! Read-only projection of session state for the presentation layer

use serde::{Deserialize, Serialize};

use crate::catalog::round::RoundDefinition;
use crate::core::types::{ActionKind, ValueType};
use crate::session::resolver::ActionOutcome;
use crate::session::state::GamePhase;

/// Display fields of the round currently on screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundView {
    pub id: u32,
    pub title: String,
    pub incoming_display: String,
    pub incoming_type: ValueType,
    pub target_type: ValueType,
    pub context_code: String,
    pub variable_name: String,
    pub hammer_cast: String,
    pub measure_action: String,
    pub explanation: String,
}

impl RoundView {
    pub(crate) fn from_round(round: &RoundDefinition) -> Self {
        Self {
            id: round.id,
            title: round.title.clone(),
            incoming_display: round.incoming_display.clone(),
            incoming_type: round.incoming_type,
            target_type: round.target_type,
            context_code: round.context_code.clone(),
            variable_name: round.variable_name.clone(),
            hammer_cast: round.hammer_cast.clone(),
            measure_action: round.measure_action.clone(),
            explanation: round.explanation.clone(),
        }
    }
}

/// Everything the presentation layer needs to render one frame
///
/// Snapshots are plain values: two calls with no mutation in between
/// compare equal, and a snapshot survives a serde round trip unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub phase: GamePhase,
    pub score: u32,
    pub tech_debt: u32,
    pub hours_remaining: u32,
    pub round_index: usize,
    pub total_rounds: usize,

    // Meter bounds and action costs, copied from config so renderers need
    // no config reference
    pub debt_ceiling: u32,
    pub time_budget: u32,
    pub hammer_cost: u32,
    pub measure_cost: u32,

    /// Present while a round is on screen (Playing and Feedback)
    pub current_round: Option<RoundView>,
    /// Present only in Feedback
    pub last_action: Option<ActionKind>,
    /// Present only in Feedback
    pub last_outcome: Option<ActionOutcome>,
}
