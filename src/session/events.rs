//! Session log - observational record of a sprint
//!
//! Lifecycle guards never read the log; it exists for presentation,
//! debugging, and post-game summaries.

use serde::{Deserialize, Serialize};

use crate::core::types::ActionKind;

/// Log entry for session events
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionEvent {
    pub round_index: usize,
    pub kind: SessionEventKind,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEventKind {
    SprintStarted,
    ActionTaken { action: ActionKind, cost: u32 },
    DebtOverflow { debt: u32 },
    DeadlineMissed { cost: u32, hours_remaining: u32 },
    SprintCompleted,
}

/// Append-only log of events from one sprint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionLog {
    pub events: Vec<SessionEvent>,
}

impl SessionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: SessionEventKind, description: String, round_index: usize) {
        self.events.push(SessionEvent {
            round_index,
            kind,
            description,
        });
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
