use thiserror::Error;

/// Errors that can arise while wiring or querying the room registry.
#[derive(Debug, Error)]
pub enum WorldError {
    /// Returned when looking up a room id that was never registered.
    #[error("unknown room: {0}")]
    UnknownRoom(String),
}
