//! Probabilistic spawning of room contents.
//!
//! Behavior:
//! - Each spawner owns a seedable RNG ([`rand::rngs::StdRng`]); pass a seed
//!   for reproducible worlds, `None` to seed from entropy
//! - An edible or item appears in a freshly built room with probability 0.6
//! - Edible effects draw a magnitude uniformly from 0..=4, then flip the
//!   sign with probability 0.5. A zero magnitude stays 0 on both branches of
//!   the flip, so 0 shows up twice as often as any single nonzero value

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::world::types::{Edible, Item};

/// Chance that a freshly built room contains an edible.
pub const EDIBLE_CREATION_PROB: f64 = 0.6;

/// Chance that a freshly built room contains an item.
pub const ITEM_CREATION_PROB: f64 = 0.6;

/// Chance that a rolled edible effect has its sign flipped.
pub const SIGN_FLIP_PROB: f64 = 0.5;

/// Largest effect magnitude an edible can roll.
pub const MAX_EFFECT_MAGNITUDE: i32 = 4;

fn rng_for(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Rolls whether a room gets an edible and what its effect is.
#[derive(Debug)]
pub struct EdibleSpawner {
    rng: StdRng,
    creation_prob: f64,
}

impl EdibleSpawner {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            rng: rng_for(seed),
            creation_prob: EDIBLE_CREATION_PROB,
        }
    }

    /// Override the creation probability (from config). Must be in [0, 1].
    pub fn with_probability(mut self, creation_prob: f64) -> Self {
        self.creation_prob = creation_prob;
        self
    }

    /// Roll for an edible: `None` when the creation roll fails, otherwise an
    /// effect in [-4, 4].
    pub fn try_create(&mut self) -> Option<Edible> {
        if !self.rng.gen_bool(self.creation_prob) {
            return None;
        }
        let magnitude = self.rng.gen_range(0..=MAX_EFFECT_MAGNITUDE);
        let effect = if self.rng.gen_bool(SIGN_FLIP_PROB) {
            -magnitude
        } else {
            magnitude
        };
        Some(Edible { effect })
    }
}

/// Rolls whether a room gets an item. Spawned items carry the placeholder
/// name until the world builder names them.
#[derive(Debug)]
pub struct ItemSpawner {
    rng: StdRng,
    creation_prob: f64,
}

impl ItemSpawner {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            rng: rng_for(seed),
            creation_prob: ITEM_CREATION_PROB,
        }
    }

    /// Override the creation probability (from config). Must be in [0, 1].
    pub fn with_probability(mut self, creation_prob: f64) -> Self {
        self.creation_prob = creation_prob;
        self
    }

    /// Roll for an item: `None` when the creation roll fails.
    pub fn try_create(&mut self) -> Option<Item> {
        if self.rng.gen_bool(self.creation_prob) {
            Some(Item::blank())
        } else {
            None
        }
    }
}
