//! Sprint sampling - draw a shuffled subset of the catalog
//!
//! Fisher-Yates over a full copy, then truncate. The input catalog is never
//! mutated and the random source is injected so tests can pin the draw.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::catalog::loader::Catalog;
use crate::catalog::round::RoundDefinition;
use crate::core::error::{GameError, Result};

/// Draw `count` distinct rounds from the catalog in uniformly random order
pub fn sample_rounds<R: Rng>(
    catalog: &Catalog,
    count: usize,
    rng: &mut R,
) -> Result<Vec<RoundDefinition>> {
    if catalog.len() < count {
        return Err(GameError::InsufficientCatalogSize {
            available: catalog.len(),
            requested: count,
        });
    }

    let mut rounds = catalog.rounds().to_vec();
    rounds.shuffle(rng);
    rounds.truncate(count);
    Ok(rounds)
}
