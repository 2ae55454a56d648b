// Integration tests for eating and health: the canonical healthy/unhealthy
// walk-through, the zero floor, and the alive predicate.

use campusmud::world::types::Room;
use campusmud::world::{EatOutcome, Player, World};

fn seeded_world() -> World {
    let mut world = World::new();
    for (id, healthy) in [
        ("lecture_theater", true),
        ("campus_pub", true),
        ("computing_lab", false),
        ("admin_office", false),
    ] {
        let mut room = Room::test_room(id, "somewhere on campus");
        room.set_test_edible(healthy);
        world.insert_room(room);
    }
    world
}

#[test]
fn healthy_and_unhealthy_edibles_walk_health_up_and_down() {
    let mut world = seeded_world();
    let mut player = Player::new("lecture_theater");
    assert_eq!(player.health(), 10);

    assert_eq!(player.eat(&mut world), EatOutcome::Ate { effect: 1 });
    assert_eq!(player.health(), 11);

    // The theater's edible is gone now.
    assert_eq!(player.eat(&mut world), EatOutcome::NothingHere);
    assert_eq!(player.health(), 11);

    player.set_current_room("campus_pub");
    assert_eq!(player.eat(&mut world), EatOutcome::Ate { effect: 1 });
    assert_eq!(player.health(), 12);

    player.set_current_room("computing_lab");
    assert_eq!(player.eat(&mut world), EatOutcome::Ate { effect: -1 });
    assert_eq!(player.health(), 11);

    player.set_current_room("admin_office");
    assert_eq!(player.eat(&mut world), EatOutcome::Ate { effect: -1 });
    assert_eq!(player.health(), 10);
}

#[test]
fn health_never_goes_below_zero() {
    let mut player = Player::new("void");
    for delta in [-3, -4, -2, -9, 5, -8, -1] {
        player.update_health(delta);
    }
    // Running sum from 10, clamped at each step: 7, 3, 1, 0, 5, 0, 0.
    assert_eq!(player.health(), 0);
    player.update_health(2);
    assert_eq!(player.health(), 2);
}

#[test]
fn alive_means_strictly_positive_health() {
    let mut player = Player::new("void");
    for _ in 0..9 {
        player.update_health(-1);
        assert!(player.is_alive(), "health {} should be alive", player.health());
    }
    player.update_health(-1);
    assert_eq!(player.health(), 0);
    assert!(!player.is_alive());
}

#[test]
fn health_has_no_upper_bound() {
    let mut player = Player::new("void");
    for _ in 0..100 {
        player.update_health(4);
    }
    assert_eq!(player.health(), 410);
}
