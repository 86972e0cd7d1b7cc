//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, star ratings, errors)
//! - `profile` - Player profile, its fields and answer lexicons
//! - `matching` - Pure compatibility scoring and match ranking
//! - `dialogue` - Profile-building dialogue session and scripted lines
//! - `social` - Likes and post-match ratings

pub mod dialogue;
pub mod foundation;
pub mod matching;
pub mod profile;
pub mod social;
