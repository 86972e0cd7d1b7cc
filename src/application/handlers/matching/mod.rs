//! Match search handlers.

mod find_matches;

pub use find_matches::{
    FindMatchesError, FindMatchesHandler, FindMatchesQuery, FindMatchesResult,
    MATCHES_FOUND_MESSAGE, NO_OTHER_PLAYERS_MESSAGE,
};
