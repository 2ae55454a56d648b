use crate::world::errors::WorldError;
use crate::world::spawn::{EdibleSpawner, ItemSpawner};
use crate::world::types::{Room, World};

/// Room where a new player begins the campus adventure.
pub const START_LOCATION_ID: &str = "campus_gate";

/// Every location in the demo campus world.
pub const CAMPUS_WORLD_ROOM_IDS: &[&str] = &[
    START_LOCATION_ID,
    "lecture_theater",
    "campus_pub",
    "computing_lab",
    "admin_office",
];

/// Build the demo campus world: five rooms in the classic layout, with
/// contents rolled by the provided spawners and each spawned item given its
/// campus name. Returns the world plus the starting room id.
///
/// Layout:
///
/// ```text
///            lecture_theater
///                  |
/// campus_pub - campus_gate
///                  |
///            computing_lab - admin_office
/// ```
pub fn campus_world(
    edibles: &mut EdibleSpawner,
    items: &mut ItemSpawner,
) -> Result<(World, &'static str), WorldError> {
    let mut world = World::new();

    world.insert_room(Room::new(
        START_LOCATION_ID,
        "outside the main entrance of the university",
        edibles,
        items,
    ));
    world.insert_room(Room::new(
        "lecture_theater",
        "in a lecture theater",
        edibles,
        items,
    ));
    world.insert_room(Room::new("campus_pub", "in the campus pub", edibles, items));
    world.insert_room(Room::new(
        "computing_lab",
        "in a computing lab",
        edibles,
        items,
    ));
    world.insert_room(Room::new(
        "admin_office",
        "in the computing admin office",
        edibles,
        items,
    ));

    world.link(START_LOCATION_ID, "north", "lecture_theater")?;
    world.link("lecture_theater", "south", START_LOCATION_ID)?;
    world.link(START_LOCATION_ID, "west", "campus_pub")?;
    world.link("campus_pub", "east", START_LOCATION_ID)?;
    world.link(START_LOCATION_ID, "south", "computing_lab")?;
    world.link("computing_lab", "north", START_LOCATION_ID)?;
    world.link("computing_lab", "east", "admin_office")?;
    world.link("admin_office", "west", "computing_lab")?;

    for (id, item_name) in [
        ("lecture_theater", "notebook"),
        ("campus_pub", "drink"),
        ("computing_lab", "laptop"),
        ("admin_office", "printer"),
    ] {
        if let Some(room) = world.room_mut(id) {
            room.set_item_name(item_name);
        }
    }

    Ok((world, START_LOCATION_ID))
}
