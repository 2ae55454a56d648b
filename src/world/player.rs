use crate::world::types::{Item, World};

/// Health a fresh player starts with when no config override is given.
pub const DEFAULT_STARTING_HEALTH: u32 = 10;

/// Result of trying to eat in the current room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EatOutcome {
    /// The edible was consumed and its effect applied to health.
    Ate { effect: i32 },
    /// The room has nothing edible; health is untouched.
    NothingHere,
}

/// Result of trying to pick up an item in the current room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickUpOutcome {
    /// The item moved from the room into the inventory.
    PickedUp { name: String },
    /// The room has an item but no name was given to pick.
    Ambiguous,
    /// The room has no item at all.
    NothingHere,
    /// The requested name does not match the room's item (exact,
    /// case-sensitive).
    NameMismatch { requested: String },
}

/// The player: health, score, inventory, and the id of the room they stand
/// in. Movement is plain reassignment of the room id; adjacency checks are
/// the command handler's job, not this layer's.
#[derive(Debug)]
pub struct Player {
    health: u32,
    score: u32,
    current_room: String,
    inventory: Vec<Item>,
}

impl Player {
    pub fn new(start_room: &str) -> Self {
        Self::with_health(start_room, DEFAULT_STARTING_HEALTH)
    }

    pub fn with_health(start_room: &str, starting_health: u32) -> Self {
        Self {
            health: starting_health,
            score: 0,
            current_room: start_room.to_string(),
            inventory: Vec::new(),
        }
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn current_room(&self) -> &str {
        &self.current_room
    }

    pub fn inventory(&self) -> &[Item] {
        &self.inventory
    }

    pub fn increment_score(&mut self) {
        self.score += 1;
    }

    /// Apply a signed health delta. Health is clamped at a floor of 0 and
    /// has no upper bound.
    pub fn update_health(&mut self, delta: i32) {
        let health = i64::from(self.health) + i64::from(delta);
        self.health = health.max(0) as u32;
    }

    /// Alive means strictly positive health.
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Unconditionally move the player to a room id.
    pub fn set_current_room(&mut self, room_id: &str) {
        self.current_room = room_id.to_string();
    }

    /// Eat whatever the current room offers. Consuming the edible and
    /// applying its effect happen together, so the caller sees either the
    /// full effect or no change at all. A dangling room id behaves like an
    /// empty room.
    pub fn eat(&mut self, world: &mut World) -> EatOutcome {
        let Some(room) = world.room_mut(&self.current_room) else {
            return EatOutcome::NothingHere;
        };
        if !room.has_edible() {
            return EatOutcome::NothingHere;
        }
        let effect = room.consume_edible();
        self.update_health(effect);
        EatOutcome::Ate { effect }
    }

    /// Try to pick up the current room's item by name. Only an exact,
    /// case-sensitive match takes the item; every failure leaves both the
    /// room and the player untouched.
    pub fn pick_up(&mut self, world: &mut World, requested: Option<&str>) -> PickUpOutcome {
        let Some(room) = world.room_mut(&self.current_room) else {
            return PickUpOutcome::NothingHere;
        };
        if requested.is_none() && room.has_item() {
            return PickUpOutcome::Ambiguous;
        }
        if !room.has_item() {
            return PickUpOutcome::NothingHere;
        }
        let requested = requested.unwrap_or_default();
        if Some(requested) != room.item_name() {
            return PickUpOutcome::NameMismatch {
                requested: requested.to_string(),
            };
        }
        match room.pick_up_item() {
            Some(item) => {
                let name = item.name.clone();
                self.inventory.push(item);
                PickUpOutcome::PickedUp { name }
            }
            None => PickUpOutcome::NothingHere,
        }
    }

    /// The current room's description plus a score/health summary line.
    pub fn describe(&self, world: &World) -> String {
        let mut out = match world.room(&self.current_room) {
            Some(room) => room.describe(),
            None => String::from("You are nowhere in particular."),
        };
        out.push('\n');
        out.push_str(&format!(
            "Score: {}     Health: {}",
            self.score, self.health
        ));
        out
    }
}
