//! Star rating one player gives another after playing together.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{StarRating, Timestamp, UserId, ValidationError};
use crate::domain::profile::lexicon::normalize;

/// Rating unique per `(rater, rated, game)`. Rating again replaces the stars.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRating {
    pub rater: UserId,
    pub rated: UserId,
    /// Game the players shared, if the rater named one.
    pub game: Option<String>,
    pub stars: StarRating,
    pub rated_at: Timestamp,
}

impl PlayerRating {
    /// Creates a rating, rejecting self-ratings. A blank game means no game.
    pub fn new(
        rater: UserId,
        rated: UserId,
        game: Option<String>,
        stars: StarRating,
        rated_at: Timestamp,
    ) -> Result<Self, ValidationError> {
        if rater == rated {
            return Err(ValidationError::invalid_format(
                "rated",
                "players cannot rate themselves",
            ));
        }
        let game = game
            .map(|g| g.trim().to_string())
            .filter(|g| !g.is_empty());

        Ok(Self {
            rater,
            rated,
            game,
            stars,
            rated_at,
        })
    }

    /// True when both ratings share the natural key.
    pub fn same_key(&self, other: &PlayerRating) -> bool {
        self.rater == other.rater && self.rated == other.rated && self.game_key() == other.game_key()
    }

    /// True when this rating counts for `game` (case-insensitive).
    pub fn is_for_game(&self, game: &str) -> bool {
        self.game_key().as_deref() == Some(normalize(game).as_str())
    }

    fn game_key(&self) -> Option<String> {
        self.game.as_deref().map(normalize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> UserId {
        UserId::new(s).unwrap()
    }

    fn rating(game: Option<&str>, stars: i64) -> PlayerRating {
        PlayerRating::new(
            id("a"),
            id("b"),
            game.map(String::from),
            StarRating::new(stars).unwrap(),
            Timestamp::now(),
        )
        .unwrap()
    }

    #[test]
    fn self_rating_is_rejected() {
        let result = PlayerRating::new(
            id("a"),
            id("a"),
            None,
            StarRating::new(5).unwrap(),
            Timestamp::now(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn blank_game_means_no_game() {
        assert_eq!(rating(Some("  "), 3).game, None);
    }

    #[test]
    fn key_ignores_game_case() {
        assert!(rating(Some("Valorant"), 3).same_key(&rating(Some("VALORANT "), 5)));
        assert!(!rating(Some("Valorant"), 3).same_key(&rating(None, 3)));
        assert!(rating(None, 1).same_key(&rating(None, 4)));
    }

    #[test]
    fn game_filter_is_case_insensitive() {
        assert!(rating(Some("CS2"), 4).is_for_game("cs2"));
        assert!(!rating(None, 4).is_for_game("cs2"));
    }
}
