//! Command parsing and the interactive game session.
//! The session is the presentation layer for the world model: it parses
//! player input into [`GameCommand`] values, routes them to handlers, and
//! renders the structured outcomes the model returns into player-facing
//! text. Nothing in `crate::world` prints or logs.

pub mod commands;
pub mod session;

pub use commands::{parse_command, GameCommand};
pub use session::GameSession;
