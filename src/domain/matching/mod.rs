//! Compatibility scoring and match ranking.
//!
//! Everything here is synchronous and side-effect free. Rating history is
//! fetched by the caller and handed in through [`RatingLookup`].

mod availability;
mod candidate;
mod ranker;
mod scorer;
mod weights;

pub use availability::{availability_overlaps, availability_tokens};
pub use candidate::{ScoredCandidate, DEFAULT_CANDIDATE_NAME, DEFAULT_RATIONALE};
pub use ranker::{MatchRanker, RankOutcome, DEFAULT_RESULT_LIMIT};
pub use scorer::{Compatibility, CompatibilityScorer, NoRatings, RatingLookup};
pub use weights::{ScoringWeights, NEAR_RANK_FACTOR, PRIVATE_GENDER_FACTOR};
