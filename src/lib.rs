//! Door Fitter - a sprint-deadline game about type coercion tradeoffs
//!
//! The player closes tickets by either hammering a loose value into a strict
//! type (cheap, risky) or measuring it first (expensive, safe). This crate is
//! the presentation-free core: the round catalog, the sprint state machine,
//! and the pure resolution and lifecycle rules.

pub mod catalog;
pub mod core;
pub mod session;
