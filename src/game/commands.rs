//! Player input parsing.
//!
//! Verbs are matched case-insensitively; arguments keep their original case
//! because item pick-up is an exact, case-sensitive name match.

/// Command categories the game session can route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameCommand {
    // Navigation
    Go(String),             // GO <direction>, or a bare direction like N/NORTH
    Look,                   // LOOK - describe the current room

    // Room interaction
    Eat,                    // EAT - consume whatever the room offers
    Take(Option<String>),   // TAKE/GET <item> - pick up an item by name

    // Information
    Inventory,              // I/INV - list collected items
    Score,                  // SCORE - show score and health
    Help(Option<String>),   // HELP, HELP <verb>

    // System
    Quit,                   // QUIT - end the session

    // Unrecognized input (original text preserved for the error message)
    Unknown(String),
}

/// Parse one line of player input into a [`GameCommand`].
pub fn parse_command(input: &str) -> GameCommand {
    let trimmed = input.trim();
    let mut parts = trimmed.split_whitespace();
    let Some(verb) = parts.next() else {
        return GameCommand::Unknown(String::new());
    };
    let rest: Vec<&str> = parts.collect();

    match verb.to_uppercase().as_str() {
        // Movement shortcuts for the demo vocabulary
        "N" | "NORTH" => GameCommand::Go("north".to_string()),
        "S" | "SOUTH" => GameCommand::Go("south".to_string()),
        "E" | "EAST" => GameCommand::Go("east".to_string()),
        "W" | "WEST" => GameCommand::Go("west".to_string()),
        "GO" => {
            if let Some(direction) = rest.first() {
                GameCommand::Go(direction.to_lowercase())
            } else {
                GameCommand::Unknown(trimmed.to_string())
            }
        }
        "L" | "LOOK" => GameCommand::Look,
        "EAT" => GameCommand::Eat,
        "T" | "TAKE" | "GET" => {
            if rest.is_empty() {
                GameCommand::Take(None)
            } else {
                GameCommand::Take(Some(rest.join(" ")))
            }
        }
        "I" | "INV" | "INVENTORY" => GameCommand::Inventory,
        "SCORE" => GameCommand::Score,
        "HELP" | "?" => GameCommand::Help(rest.first().map(|topic| topic.to_lowercase())),
        "Q" | "QUIT" => GameCommand::Quit,
        _ => GameCommand::Unknown(trimmed.to_string()),
    }
}
