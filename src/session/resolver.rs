//! Action resolution - pure mapping from (round, action) to outcome

use serde::{Deserialize, Serialize};

use crate::catalog::round::RoundDefinition;
use crate::core::types::ActionKind;

/// Resource deltas and narrative result of one action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionOutcome {
    pub score_delta: u32,
    pub debt_delta: u32,
    /// Coerced-value display for the hammer; the measure has no alternate value
    pub result_display: Option<String>,
    pub feedback: String,
}

impl ActionOutcome {
    /// Favorable iff the action added no debt
    pub fn is_favorable(&self) -> bool {
        self.debt_delta == 0
    }
}

/// Resolve the chosen action against a round definition
///
/// Total and deterministic: both enumerations are closed, so there is no
/// failure case to report.
pub fn resolve_action(round: &RoundDefinition, action: ActionKind) -> ActionOutcome {
    match action {
        ActionKind::Hammer => ActionOutcome {
            score_delta: round.hammer_score,
            debt_delta: round.hammer_debt,
            result_display: Some(round.hammer_result_display.clone()),
            feedback: round.hammer_feedback.clone(),
        },
        ActionKind::Measure => ActionOutcome {
            score_delta: round.measure_score,
            debt_delta: 0,
            result_display: None,
            feedback: round.measure_feedback.clone(),
        },
    }
}

/// How the feedback screen titles a resolved action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionVerdict {
    /// Hammered a round that carried debt
    DestructiveHammer,
    /// Hammered a round that was safe to cast
    EfficientHammer,
    /// Measured a safe cast with little payoff
    OverEngineered,
    /// Measured a genuinely risky round
    SeniorMindset,
}

/// Classify an action for the feedback screen
///
/// Derived from the same catalog numbers as the outcome and stored nowhere;
/// colors and copy built on top of this belong to the presentation layer.
pub fn classify_action(round: &RoundDefinition, action: ActionKind) -> ActionVerdict {
    match action {
        ActionKind::Hammer if round.hammer_debt > 0 => ActionVerdict::DestructiveHammer,
        ActionKind::Hammer => ActionVerdict::EfficientHammer,
        ActionKind::Measure if round.is_safe_hammer() && round.measure_score < 100 => {
            ActionVerdict::OverEngineered
        }
        ActionKind::Measure => ActionVerdict::SeniorMindset,
    }
}
