//! Social interactions between players: likes and post-match ratings.

mod like;
mod rating;

pub use like::Like;
pub use rating::PlayerRating;
