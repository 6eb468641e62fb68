//! Lifecycle guards - the only three ways a sprint ends
//!
//! Each guard is a pure predicate over plain counters, so a replayed or
//! deserialized state evaluates exactly the same way.

/// Time guard: would this action cost more hours than remain?
///
/// Checked before any delta is committed; a hit aborts the action entirely.
pub fn exceeds_budget(hours_remaining: u32, cost: u32) -> bool {
    cost > hours_remaining
}

/// Debt guard: has tech debt reached the ceiling?
///
/// Checked after an action's deltas; a hit overrides the normal feedback
/// phase.
pub fn debt_saturated(tech_debt: u32, debt_ceiling: u32) -> bool {
    tech_debt >= debt_ceiling
}

/// Completion guard: was the round just resolved the last of the sprint?
pub fn sprint_complete(round_index: usize, total_rounds: usize) -> bool {
    round_index + 1 >= total_rounds
}
