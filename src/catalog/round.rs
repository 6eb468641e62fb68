//! Round definitions - one type-coercion scenario per ticket

use serde::{Deserialize, Serialize};

use crate::core::types::ValueType;

/// A single ticket: an incoming loose value that must become a strict type
///
/// Only the score and debt numbers drive game logic. Everything else is
/// display data that the presentation layer renders verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundDefinition {
    pub id: u32,
    pub title: String,

    // Typing metadata
    pub incoming_display: String,
    pub incoming_type: ValueType,
    pub target_type: ValueType,
    pub context_code: String,
    pub variable_name: String,

    // Hammer (cast) outcome
    pub hammer_cast: String,
    pub hammer_result_display: String,
    pub hammer_feedback: String,
    pub hammer_debt: u32,
    pub hammer_score: u32,

    // Measure (validate) outcome
    pub measure_action: String,
    pub measure_feedback: String,
    pub measure_score: u32,

    pub explanation: String,
}

impl RoundDefinition {
    /// A round is safe to hammer when the cast carries no debt
    pub fn is_safe_hammer(&self) -> bool {
        self.hammer_debt == 0
    }
}
