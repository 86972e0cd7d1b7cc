//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Commands change state (dialogue steps, likes, ratings); queries only read.

pub mod handlers;

pub use handlers::*;
