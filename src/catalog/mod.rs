//! Round catalog - static ticket definitions and sprint sampling
//!
//! Rounds are external data: a builtin set ships with the crate and custom
//! catalogs load from TOML. Catalogs are shared and read-only; sessions
//! never mutate them.

pub mod loader;
pub mod round;
pub mod sampling;

pub use loader::Catalog;
pub use round::RoundDefinition;
pub use sampling::sample_rounds;
