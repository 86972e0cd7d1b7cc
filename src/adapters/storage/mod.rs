//! Storage Adapters
//!
//! ## Available Adapters
//!
//! - **InMemoryDialogueSessionStore** - Dialogue sessions in memory, with idle expiry
//! - **FileProfileRepository** - Player profiles as YAML files on disk
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FileProfileRepository, InMemoryDialogueSessionStore};
//!
//! let profiles = FileProfileRepository::new("./data/profiles");
//! let sessions = InMemoryDialogueSessionStore::new(1800);
//! ```

mod file_profile_repository;
mod in_memory_session_store;

pub use file_profile_repository::FileProfileRepository;
pub use in_memory_session_store::{InMemoryDialogueSessionStore, DEFAULT_SESSION_TTL_SECS};
