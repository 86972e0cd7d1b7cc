//! Likes, ratings and the message gate between matched players.

mod authorize_message;
mod list_mutual_matches;
mod rate_player;
mod record_like;

pub use authorize_message::{
    AuthorizeMessageCommand, AuthorizeMessageHandler, AuthorizedMessage, MessageGateError,
};
pub use list_mutual_matches::{ListMutualMatchesHandler, ListMutualMatchesQuery, MutualMatch};
pub use rate_player::{RatePlayerCommand, RatePlayerError, RatePlayerHandler, RatePlayerResult};
pub use record_like::{LikeError, RecordLikeCommand, RecordLikeHandler, RecordLikeResult};
