//! Interactive game session: owns the world and the player, routes parsed
//! commands to handlers, and renders every outcome as player-facing text.
//! All responses come back as strings; the caller decides where they go.

use log::debug;

use crate::config::GameConfig;
use crate::game::commands::{parse_command, GameCommand};
use crate::world::{
    campus_world, EatOutcome, EdibleSpawner, ItemSpawner, PickUpOutcome, Player, World, WorldError,
};

/// One single-player playthrough. `finished` flips when the player quits or
/// dies; the driving loop stops reading input once it is set.
#[derive(Debug)]
pub struct GameSession {
    world: World,
    player: Player,
    finished: bool,
}

impl GameSession {
    /// Start a session in an already-wired world. The starting room must be
    /// registered.
    pub fn new(world: World, start_room: &str, starting_health: u32) -> Result<Self, WorldError> {
        world.require_room(start_room)?;
        Ok(Self {
            player: Player::with_health(start_room, starting_health),
            world,
            finished: false,
        })
    }

    /// Build the demo campus world from the game config and start a session
    /// at the campus gate.
    pub fn campus(config: &GameConfig) -> Result<Self, WorldError> {
        let mut edibles =
            EdibleSpawner::new(config.rng_seed).with_probability(config.edible_probability);
        let mut items = ItemSpawner::new(config.rng_seed.map(|seed| seed.wrapping_add(1)))
            .with_probability(config.item_probability);
        let (world, start) = campus_world(&mut edibles, &mut items)?;
        Self::new(world, start, config.starting_health)
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// Banner plus the starting room description.
    pub fn welcome(&self) -> String {
        let mut out = String::new();
        out.push_str("*** Welcome to Campus MUD! ***\n");
        out.push_str("Type HELP for commands, QUIT to leave.\n\n");
        out.push_str(&self.player.describe(&self.world));
        out
    }

    /// Parse one line of input and produce the response to show the player.
    pub fn process_command(&mut self, input: &str) -> String {
        let command = parse_command(input);
        debug!("command parsed: {:?}", command);

        match command {
            GameCommand::Go(direction) => self.handle_move(&direction),
            GameCommand::Look => self.player.describe(&self.world),
            GameCommand::Eat => self.handle_eat(),
            GameCommand::Take(name) => self.handle_take(name.as_deref()),
            GameCommand::Inventory => self.handle_inventory(),
            GameCommand::Score => self.handle_score(),
            GameCommand::Help(topic) => self.handle_help(topic.as_deref()),
            GameCommand::Quit => self.handle_quit(),
            GameCommand::Unknown(text) => format!(
                "I don't know what '{}' means.\nType HELP for available commands.",
                text
            ),
        }
    }

    /// Adjacency lives here: the move only happens when the current room has
    /// an exit under that label.
    fn handle_move(&mut self, direction: &str) -> String {
        let destination = self
            .world
            .room(self.player.current_room())
            .and_then(|room| room.exit(direction))
            .map(str::to_string);

        match destination {
            Some(destination) => {
                self.player.set_current_room(&destination);
                debug!("player moved to {}", destination);
                format!("You go {}.\n\n{}", direction, self.player.describe(&self.world))
            }
            None => format!("You can't go {} from here.", direction),
        }
    }

    fn handle_eat(&mut self) -> String {
        match self.player.eat(&mut self.world) {
            EatOutcome::Ate { effect } => {
                let mut out = format!("Your health changes by {}.", effect);
                if !self.player.is_alive() {
                    self.finished = true;
                    out.push_str("\nThat was one snack too many. You collapse. Game over.");
                }
                out
            }
            EatOutcome::NothingHere => "Eat what? There's nothing here.".to_string(),
        }
    }

    fn handle_take(&mut self, name: Option<&str>) -> String {
        match self.player.pick_up(&mut self.world, name) {
            PickUpOutcome::PickedUp { name } => {
                self.player.increment_score();
                format!("You have picked up the {}.", name)
            }
            PickUpOutcome::Ambiguous => "Pick up what?".to_string(),
            PickUpOutcome::NothingHere => "There is nothing to pick up here.".to_string(),
            PickUpOutcome::NameMismatch { requested } => {
                format!("There is no '{}' here.", requested)
            }
        }
    }

    fn handle_inventory(&self) -> String {
        let inventory = self.player.inventory();
        if inventory.is_empty() {
            return "You have no items.".to_string();
        }
        let names: Vec<&str> = inventory.iter().map(|item| item.name.as_str()).collect();
        format!("You've picked up these items: {}", names.join(", "))
    }

    fn handle_score(&self) -> String {
        format!(
            "Score: {}     Health: {}",
            self.player.score(),
            self.player.health()
        )
    }

    fn handle_help(&self, topic: Option<&str>) -> String {
        match topic {
            Some("go") => "GO <direction> (or N/S/E/W) moves through an exit.".to_string(),
            Some("eat") => "EAT consumes whatever the room offers; it may help or hurt.".to_string(),
            Some("take") | Some("get") => {
                "TAKE <item> picks up the room's item; the name must match exactly.".to_string()
            }
            _ => "Commands: GO <direction>, LOOK, EAT, TAKE <item>, INVENTORY, SCORE, HELP, QUIT"
                .to_string(),
        }
    }

    fn handle_quit(&mut self) -> String {
        self.finished = true;
        format!(
            "Thanks for playing! Final score: {}.",
            self.player.score()
        )
    }
}
