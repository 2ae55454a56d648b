//! # Campusmud - A Single-Player Text Adventure Engine
//!
//! Campusmud is a small text-adventure engine built around a statically
//! wired room graph. It ships with a demo campus world: wander between
//! rooms, eat whatever you find (at your own risk), and collect items to
//! raise your score.
//!
//! ## Features
//!
//! - **Room Graph World**: Rooms live in a registry keyed by id and connect
//!   through free-form directional exits, so any graph shape can be wired.
//! - **Probabilistic Spawning**: Room contents are rolled by seedable
//!   spawners; a fixed seed reproduces the same world every run.
//! - **Consume-Once Semantics**: Edibles and items leave a room exactly
//!   once; eating and picking up are transactional from the caller's view.
//! - **Structured Outcomes**: The world model returns outcome enums, never
//!   printed text; the session layer renders all player-facing messages.
//! - **TOML Configuration**: Starting health, spawn probabilities, RNG seed
//!   and logging are configured via `config.toml`.
//!
//! ## Quick Start
//!
//! ```rust
//! use campusmud::config::GameConfig;
//! use campusmud::game::GameSession;
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut session = GameSession::campus(&GameConfig::default())?;
//!     println!("{}", session.welcome());
//!     println!("{}", session.process_command("look"));
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! - [`world`] - Room graph, spawners, player state and the world registry
//! - [`game`] - Command parsing and the interactive session layer
//! - [`config`] - Configuration management and validation

pub mod config;
pub mod game;
pub mod world;
