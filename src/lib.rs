//! GG Matchmaker - Gamer matchmaking core
//!
//! Builds player profiles through a short conversational dialogue and
//! ranks other players by multi-factor compatibility.
//!
//! ## Layout
//!
//! - `domain` - profiles, scoring, ranking and the dialogue state machine
//! - `ports` - storage, account and text-interpretation interfaces
//! - `adapters` - in-memory and file storage, Gemini-backed interpretation
//! - `application` - command and query handlers
//! - `config` - environment-driven configuration

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
