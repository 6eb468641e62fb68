//! Game configuration with documented constants
//!
//! All tunables are collected here with explanations of their purpose
//! and how they interact with each other.

use serde::{Deserialize, Serialize};

/// Default number of tickets drawn per sprint
pub const DEFAULT_TICKET_COUNT: usize = 10;
/// Default sprint time budget in hours
pub const DEFAULT_TIME_BUDGET: u32 = 40;
/// Default tech-debt ceiling
pub const DEFAULT_DEBT_CEILING: u32 = 100;
/// Default cost of the hammer action in hours
pub const DEFAULT_HAMMER_COST: u32 = 2;
/// Default cost of the measure action in hours
pub const DEFAULT_MEASURE_COST: u32 = 5;

/// Configuration for one sprint
///
/// The defaults are tuned so that measuring every ticket misses the deadline
/// (10 x 5h > 40h). The player has to find the safe casts to save time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of rounds sampled from the catalog per sprint
    ///
    /// The catalog must hold at least this many rounds or sprint start
    /// fails with `InsufficientCatalogSize`.
    pub ticket_count: usize,

    /// Hours available for the whole sprint
    ///
    /// Every action subtracts its cost; an action that would overdraw the
    /// budget ends the game instead of applying.
    pub time_budget: u32,

    /// Tech debt at or above this value ends the sprint in failure
    ///
    /// Stored debt is clamped to this ceiling; the game-over check fires
    /// on the unclamped sum.
    pub debt_ceiling: u32,

    /// Hours consumed by the hammer (cast) action
    pub hammer_cost: u32,

    /// Hours consumed by the measure (validate) action
    ///
    /// Must exceed hammer_cost, otherwise there is no tradeoff to teach.
    pub measure_cost: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            ticket_count: DEFAULT_TICKET_COUNT,
            time_budget: DEFAULT_TIME_BUDGET,
            debt_ceiling: DEFAULT_DEBT_CEILING,
            hammer_cost: DEFAULT_HAMMER_COST,
            measure_cost: DEFAULT_MEASURE_COST,
        }
    }
}

impl GameConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.ticket_count == 0 {
            return Err("ticket_count must be at least 1".into());
        }

        if self.debt_ceiling == 0 {
            return Err("debt_ceiling must be positive".into());
        }

        if self.hammer_cost == 0 || self.measure_cost == 0 {
            return Err("action costs must be positive".into());
        }

        // Costs should be ordered, the whole game is the fast/safe tradeoff
        if self.hammer_cost >= self.measure_cost {
            return Err(format!(
                "hammer_cost ({}) should be < measure_cost ({})",
                self.hammer_cost, self.measure_cost
            ));
        }

        // At least one action must be affordable on the first ticket
        if self.time_budget < self.hammer_cost {
            return Err(format!(
                "time_budget ({}) should be >= hammer_cost ({})",
                self.time_budget, self.hammer_cost
            ));
        }

        Ok(())
    }
}
