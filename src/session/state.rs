//! Sprint state machine
//!
//! Transitions are synchronous and total: calls outside a phase's valid
//! domain are no-ops that return the unchanged snapshot, never errors. The
//! presentation layer is expected to gate its own buttons, but nothing it
//! does can corrupt the counters here.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::catalog::loader::Catalog;
use crate::catalog::round::RoundDefinition;
use crate::catalog::sampling::sample_rounds;
use crate::core::config::GameConfig;
use crate::core::error::{GameError, Result};
use crate::core::types::ActionKind;
use crate::session::events::{SessionEventKind, SessionLog};
use crate::session::lifecycle::{debt_saturated, exceeds_budget, sprint_complete};
use crate::session::resolver::{resolve_action, ActionOutcome};
use crate::session::snapshot::{RoundView, SessionSnapshot};

/// Lifecycle phase of a sprint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Start, // No rounds drawn yet
    Playing,  // Awaiting the player's action
    Feedback, // Showing the outcome, awaiting advance
    GameOver, // Tech debt hit the ceiling
    DeadlineMissed, // Not enough hours for the chosen action
    Victory,  // All tickets closed in time
}

impl GamePhase {
    /// Terminal phases accept nothing but a restart
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::GameOver | Self::DeadlineMissed | Self::Victory)
    }
}

/// One play-through of the sprint
///
/// The session exclusively owns its state. Restarting replaces the state
/// wholesale; there is no partial reuse between sprints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSession {
    config: GameConfig,
    phase: GamePhase,
    score: u32,
    tech_debt: u32,
    hours_remaining: u32,
    round_index: usize,
    selected_rounds: Vec<RoundDefinition>,
    last_action: Option<ActionKind>,
    // Cached resolver result for the feedback screen; re-derivable from
    // selected_rounds[round_index] and last_action
    last_outcome: Option<ActionOutcome>,
    log: SessionLog,
}

impl GameSession {
    /// Create a session in the Start phase with no rounds drawn yet
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate().map_err(GameError::InvalidConfig)?;

        let hours_remaining = config.time_budget;
        Ok(Self {
            config,
            phase: GamePhase::Start,
            score: 0,
            tech_debt: 0,
            hours_remaining,
            round_index: 0,
            selected_rounds: Vec::new(),
            last_action: None,
            last_outcome: None,
            log: SessionLog::new(),
        })
    }

    /// Create and start a session with a deterministic random source
    pub fn with_seed(config: GameConfig, catalog: &Catalog, seed: u64) -> Result<Self> {
        let mut session = Self::new(config)?;
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        session.start_sprint(catalog, &mut rng)?;
        Ok(session)
    }

    /// Start (or restart) the sprint: reshuffle rounds, reset every counter
    ///
    /// Valid in any phase; a running sprint is discarded wholesale.
    pub fn start_sprint<R: Rng>(
        &mut self,
        catalog: &Catalog,
        rng: &mut R,
    ) -> Result<SessionSnapshot> {
        let rounds = sample_rounds(catalog, self.config.ticket_count, rng)?;

        self.selected_rounds = rounds;
        self.score = 0;
        self.tech_debt = 0;
        self.hours_remaining = self.config.time_budget;
        self.round_index = 0;
        self.last_action = None;
        self.last_outcome = None;
        self.log.clear();
        self.phase = GamePhase::Playing;

        self.log.push(
            SessionEventKind::SprintStarted,
            format!(
                "Sprint started: {} tickets, {}h budget",
                self.selected_rounds.len(),
                self.config.time_budget
            ),
            0,
        );
        tracing::debug!(
            "sprint started with {} tickets",
            self.selected_rounds.len()
        );

        Ok(self.snapshot())
    }

    /// Apply the player's chosen action to the current round
    ///
    /// No-op outside Playing. The time guard runs before any delta is
    /// committed; the debt guard runs after and overrides Feedback.
    pub fn apply_action(&mut self, action: ActionKind) -> SessionSnapshot {
        if self.phase != GamePhase::Playing {
            return self.snapshot();
        }

        let cost = match action {
            ActionKind::Hammer => self.config.hammer_cost,
            ActionKind::Measure => self.config.measure_cost,
        };

        if exceeds_budget(self.hours_remaining, cost) {
            self.phase = GamePhase::DeadlineMissed;
            self.log.push(
                SessionEventKind::DeadlineMissed {
                    cost,
                    hours_remaining: self.hours_remaining,
                },
                format!(
                    "Deadline missed: {:?} needs {}h, only {}h left",
                    action, cost, self.hours_remaining
                ),
                self.round_index,
            );
            tracing::debug!("deadline missed with {}h remaining", self.hours_remaining);
            return self.snapshot();
        }

        let round = &self.selected_rounds[self.round_index];
        let outcome = resolve_action(round, action);

        self.score += outcome.score_delta;
        // Clamped storage; the guard fires on the unclamped sum
        let raw_debt = self.tech_debt + outcome.debt_delta;
        self.tech_debt = raw_debt.min(self.config.debt_ceiling);
        self.hours_remaining -= cost;
        self.last_action = Some(action);
        self.last_outcome = Some(outcome);

        self.log.push(
            SessionEventKind::ActionTaken { action, cost },
            format!("{:?} on ticket {}", action, self.round_index + 1),
            self.round_index,
        );

        if debt_saturated(raw_debt, self.config.debt_ceiling) {
            self.phase = GamePhase::GameOver;
            self.log.push(
                SessionEventKind::DebtOverflow { debt: raw_debt },
                format!("Tech debt hit {} of {}", raw_debt, self.config.debt_ceiling),
                self.round_index,
            );
            tracing::debug!("tech debt saturated at {}", raw_debt);
        } else {
            self.phase = GamePhase::Feedback;
        }

        self.snapshot()
    }

    /// Move on to the next ticket, or finish the sprint on the last one
    ///
    /// No-op outside Feedback.
    pub fn advance_round(&mut self) -> SessionSnapshot {
        if self.phase != GamePhase::Feedback {
            return self.snapshot();
        }

        if sprint_complete(self.round_index, self.selected_rounds.len()) {
            self.phase = GamePhase::Victory;
            self.log.push(
                SessionEventKind::SprintCompleted,
                format!(
                    "Sprint complete: score {}, {}h to spare",
                    self.score, self.hours_remaining
                ),
                self.round_index,
            );
            tracing::debug!("sprint complete with score {}", self.score);
        } else {
            self.round_index += 1;
            self.last_action = None;
            self.last_outcome = None;
            self.phase = GamePhase::Playing;
        }

        self.snapshot()
    }

    /// Read-only projection of the current state
    pub fn snapshot(&self) -> SessionSnapshot {
        let current_round = match self.phase {
            GamePhase::Playing | GamePhase::Feedback => self
                .selected_rounds
                .get(self.round_index)
                .map(RoundView::from_round),
            _ => None,
        };

        SessionSnapshot {
            phase: self.phase,
            score: self.score,
            tech_debt: self.tech_debt,
            hours_remaining: self.hours_remaining,
            round_index: self.round_index,
            total_rounds: self.selected_rounds.len(),
            debt_ceiling: self.config.debt_ceiling,
            time_budget: self.config.time_budget,
            hammer_cost: self.config.hammer_cost,
            measure_cost: self.config.measure_cost,
            current_round,
            last_action: self.last_action,
            last_outcome: self.last_outcome.clone(),
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn tech_debt(&self) -> u32 {
        self.tech_debt
    }

    pub fn hours_remaining(&self) -> u32 {
        self.hours_remaining
    }

    pub fn round_index(&self) -> usize {
        self.round_index
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The round currently on screen, if any
    pub fn current_round(&self) -> Option<&RoundDefinition> {
        match self.phase {
            GamePhase::Playing | GamePhase::Feedback => {
                self.selected_rounds.get(self.round_index)
            }
            _ => None,
        }
    }

    /// Rounds drawn for this sprint, in play order
    pub fn selected_rounds(&self) -> &[RoundDefinition] {
        &self.selected_rounds
    }

    pub fn log(&self) -> &SessionLog {
        &self.log
    }
}
