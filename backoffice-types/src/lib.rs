//! Core type definitions for the Backoffice dashboard engine.
//!
//! This crate defines the fundamental, entity-agnostic types used by the
//! form and list layers:
//! - Record identifiers (UUID v7)
//! - Display priorities (dense integer ordering within a sibling list)
//! - Weekday enumeration and per-day schedule maps
//!
//! Domain-specific record types (restaurants, menus, foods, posts, etc.)
//! belong to the application that embeds the engine, not here.

mod ids;
mod priority;
mod weekday;

pub use ids::EntityId;
pub use priority::Priority;
pub use weekday::{WeekSchedule, Weekday};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid UUID: {0}")]
    InvalidUuid(#[from] uuid::Error),

    #[error("unknown weekday: {0}")]
    UnknownWeekday(String),
}
