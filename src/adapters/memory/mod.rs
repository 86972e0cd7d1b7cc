//! In-memory adapters for the storage ports.
//!
//! Used by the terminal driver and by tests. Data lives for the lifetime of
//! the process.

mod accounts;
mod likes;
mod profiles;
mod ratings;

pub use accounts::InMemoryAccountDirectory;
pub use likes::InMemoryLikeRepository;
pub use profiles::InMemoryProfileRepository;
pub use ratings::InMemoryRatingRepository;
