//! World data model for the campus adventure.
//! Rooms live in a [`World`] registry keyed by string id and reference each
//! other through exit ids, so the room graph stays a plain owned structure
//! with no shared-pointer aliasing. Spawners own their RNG and are injected
//! into room construction, which keeps spawning deterministic under a fixed
//! seed.

pub mod errors;
pub mod player;
pub mod spawn;
pub mod state;
pub mod types;

pub use errors::WorldError;
pub use player::{EatOutcome, PickUpOutcome, Player, DEFAULT_STARTING_HEALTH};
pub use spawn::{
    EdibleSpawner, ItemSpawner, EDIBLE_CREATION_PROB, ITEM_CREATION_PROB, MAX_EFFECT_MAGNITUDE,
    SIGN_FLIP_PROB,
};
pub use state::{campus_world, CAMPUS_WORLD_ROOM_IDS, START_LOCATION_ID};
pub use types::{Edible, Item, Room, World, UNNAMED_ITEM};
