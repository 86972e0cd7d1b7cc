//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - LLM providers and the LLM-backed text interpreter
//! - `memory` - In-memory profile, rating, like and account stores
//! - `storage` - Dialogue session store and file-backed profiles

pub mod ai;
pub mod memory;
pub mod storage;
