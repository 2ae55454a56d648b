use std::collections::HashMap;

use crate::world::errors::WorldError;
use crate::world::spawn::{EdibleSpawner, ItemSpawner};

/// Name carried by items the caller has not renamed yet. Rooms never list an
/// item under this name and pick-up requests cannot match it.
pub const UNNAMED_ITEM: &str = "unnamed item";

/// A one-time consumable with a signed health effect in [-4, 4].
/// An effect of 0 still counts as healthy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edible {
    pub effect: i32,
}

impl Edible {
    /// Fixed +1 edible for reproducible scenarios.
    pub fn healthy() -> Self {
        Self { effect: 1 }
    }

    /// Fixed -1 edible for reproducible scenarios.
    pub fn unhealthy() -> Self {
        Self { effect: -1 }
    }

    /// Whether eating this has a non-negative effect on health.
    pub fn is_healthy(&self) -> bool {
        self.effect >= 0
    }
}

/// A one-time collectible. Starts under [`UNNAMED_ITEM`] until the world
/// builder names it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub name: String,
}

impl Item {
    /// An item with the placeholder name, bypassing spawn probability.
    pub fn blank() -> Self {
        Self {
            name: UNNAMED_ITEM.to_string(),
        }
    }

    /// Overwrite the item's name. Later calls simply overwrite again.
    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }
}

/// One location in the world. Exits map a direction label to the id of the
/// destination room; the rooms themselves are owned by the [`World`]
/// registry. A room holds at most one edible and one item, and neither is
/// ever restocked.
#[derive(Debug, Clone)]
pub struct Room {
    pub id: String,
    pub description: String,
    pub exits: HashMap<String, String>,
    pub edible: Option<Edible>,
    pub item: Option<Item>,
}

impl Room {
    /// Create a room and roll both spawners for its contents.
    pub fn new(
        id: &str,
        description: &str,
        edibles: &mut EdibleSpawner,
        items: &mut ItemSpawner,
    ) -> Self {
        Self {
            id: id.to_string(),
            description: description.to_string(),
            exits: HashMap::new(),
            edible: edibles.try_create(),
            item: items.try_create(),
        }
    }

    /// Create a room for deterministic scenarios: no edible, and always a
    /// blank item so inventory flows can be exercised without randomness.
    pub fn test_room(id: &str, description: &str) -> Self {
        Self {
            id: id.to_string(),
            description: description.to_string(),
            exits: HashMap::new(),
            edible: None,
            item: Some(Item::blank()),
        }
    }

    /// Register an exit. Direction labels are free-form; registering the same
    /// label twice keeps the last destination.
    pub fn add_exit(&mut self, direction: &str, destination: &str) {
        self.exits
            .insert(direction.to_string(), destination.to_string());
    }

    /// Destination room id for a direction label, if one is registered.
    pub fn exit(&self, direction: &str) -> Option<&str> {
        self.exits.get(direction).map(String::as_str)
    }

    pub fn has_edible(&self) -> bool {
        self.edible.is_some()
    }

    pub fn has_item(&self) -> bool {
        self.item.is_some()
    }

    /// Consume the edible and return its effect. The slot is cleared, so a
    /// second call returns 0 with no further effect, as does a room that
    /// never had an edible.
    pub fn consume_edible(&mut self) -> i32 {
        match self.edible.take() {
            Some(edible) => edible.effect,
            None => 0,
        }
    }

    /// Hand the item out of the room. The slot is cleared, so a second call
    /// returns `None`.
    pub fn pick_up_item(&mut self) -> Option<Item> {
        self.item.take()
    }

    /// Name the contained item; no-op when the room has none.
    pub fn set_item_name(&mut self, name: &str) {
        if let Some(item) = self.item.as_mut() {
            item.set_name(name);
        }
    }

    /// Name of the contained item, if any.
    pub fn item_name(&self) -> Option<&str> {
        self.item.as_ref().map(|item| item.name.as_str())
    }

    /// Force a deterministic edible into the room: +1 when `healthy`, -1
    /// otherwise.
    pub fn set_test_edible(&mut self, healthy: bool) {
        self.edible = Some(if healthy {
            Edible::healthy()
        } else {
            Edible::unhealthy()
        });
    }

    /// Multi-line rendering of the room: description, a note when something
    /// edible is present, the item's name once it has one, and the exit
    /// labels. Exits are sorted so the output is stable for a given state.
    pub fn describe(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.description);
        out.push('\n');
        if self.has_edible() {
            out.push_str("There is something to eat here.\n");
        }
        if let Some(name) = self.item_name() {
            if name != UNNAMED_ITEM {
                out.push_str(&format!("The {} is here.\n", name));
            }
        }
        out.push_str("Exits:");
        let mut directions: Vec<&str> = self.exits.keys().map(String::as_str).collect();
        directions.sort_unstable();
        for direction in directions {
            out.push(' ');
            out.push_str(direction);
        }
        out
    }
}

/// Registry owning every room in the game, keyed by room id. Movement and
/// room mutation go through here; exits store ids rather than references.
#[derive(Debug, Default)]
pub struct World {
    rooms: HashMap<String, Room>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a room to the registry. A room with the same id is replaced.
    pub fn insert_room(&mut self, room: Room) {
        self.rooms.insert(room.id.clone(), room);
    }

    pub fn room(&self, id: &str) -> Option<&Room> {
        self.rooms.get(id)
    }

    pub fn room_mut(&mut self, id: &str) -> Option<&mut Room> {
        self.rooms.get_mut(id)
    }

    /// Like [`World::room`] but treats an unknown id as a wiring error.
    pub fn require_room(&self, id: &str) -> Result<&Room, WorldError> {
        self.rooms
            .get(id)
            .ok_or_else(|| WorldError::UnknownRoom(id.to_string()))
    }

    /// Checked exit wiring: both endpoints must already be registered.
    /// World-construction code uses this so a typo in a room id surfaces at
    /// seed time instead of as a dead exit during play.
    pub fn link(&mut self, from: &str, direction: &str, to: &str) -> Result<(), WorldError> {
        if !self.rooms.contains_key(to) {
            return Err(WorldError::UnknownRoom(to.to_string()));
        }
        let room = self
            .rooms
            .get_mut(from)
            .ok_or_else(|| WorldError::UnknownRoom(from.to_string()))?;
        room.add_exit(direction, to);
        Ok(())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.rooms.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consume_edible_clears_the_slot() {
        let mut room = Room::test_room("cellar", "a dusty cellar");
        room.set_test_edible(true);
        assert!(room.has_edible());
        assert_eq!(room.consume_edible(), 1);
        assert!(!room.has_edible());
        assert_eq!(room.consume_edible(), 0);
    }

    #[test]
    fn pick_up_item_clears_the_slot() {
        let mut room = Room::test_room("cellar", "a dusty cellar");
        room.set_item_name("lantern");
        let item = room.pick_up_item().expect("item present");
        assert_eq!(item.name, "lantern");
        assert!(!room.has_item());
        assert!(room.pick_up_item().is_none());
    }

    #[test]
    fn set_item_name_without_item_is_a_noop() {
        let mut room = Room::test_room("cellar", "a dusty cellar");
        room.pick_up_item();
        room.set_item_name("lantern");
        assert!(room.item_name().is_none());
    }

    #[test]
    fn last_exit_write_wins() {
        let mut room = Room::test_room("hall", "a long hall");
        room.add_exit("north", "cellar");
        room.add_exit("north", "attic");
        assert_eq!(room.exit("north"), Some("attic"));
    }

    #[test]
    fn link_rejects_unknown_rooms() {
        let mut world = World::new();
        world.insert_room(Room::test_room("hall", "a long hall"));
        let err = world.link("hall", "north", "nowhere").unwrap_err();
        assert!(matches!(err, WorldError::UnknownRoom(id) if id == "nowhere"));
    }
}
