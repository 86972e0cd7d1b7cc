//! Match Ranker - scores a candidate pool and keeps the best few.

use super::candidate::ScoredCandidate;
use super::scorer::{CompatibilityScorer, RatingLookup};
use crate::domain::profile::PlayerProfile;

/// Number of suggestions returned when no limit is configured.
pub const DEFAULT_RESULT_LIMIT: usize = 3;

/// Result of ranking a pool for one viewer.
#[derive(Debug, Clone, PartialEq)]
pub enum RankOutcome {
    /// Best candidates, highest score first.
    Matches(Vec<ScoredCandidate>),
    /// Nobody else to compare against.
    NoCandidates,
    /// Candidates exist but every one was excluded.
    NoCompatibleMatch,
}

impl RankOutcome {
    pub fn matches(&self) -> &[ScoredCandidate] {
        match self {
            RankOutcome::Matches(matches) => matches,
            RankOutcome::NoCandidates | RankOutcome::NoCompatibleMatch => &[],
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchRanker {
    scorer: CompatibilityScorer,
    limit: usize,
}

impl MatchRanker {
    pub fn new(scorer: CompatibilityScorer, limit: usize) -> Self {
        Self { scorer, limit }
    }

    pub fn scorer(&self) -> &CompatibilityScorer {
        &self.scorer
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Ranks `candidates` for `viewer`.
    ///
    /// The viewer is skipped when present in the pool. Ties keep the order
    /// the candidates were given in.
    pub fn rank(
        &self,
        viewer: &PlayerProfile,
        candidates: &[PlayerProfile],
        ratings: &dyn RatingLookup,
    ) -> RankOutcome {
        let pool: Vec<&PlayerProfile> = candidates
            .iter()
            .filter(|c| c.user_id != viewer.user_id)
            .collect();

        if pool.is_empty() {
            return RankOutcome::NoCandidates;
        }

        let mut scored: Vec<ScoredCandidate> = pool
            .into_iter()
            .filter_map(|candidate| {
                self.scorer
                    .score(viewer, candidate, ratings)
                    .map(|compat| ScoredCandidate::from_compatibility(candidate, compat))
            })
            .collect();

        if scored.is_empty() {
            return RankOutcome::NoCompatibleMatch;
        }

        scored.sort_by(|a, b| b.score.total_cmp(&a.score));
        scored.truncate(self.limit);

        RankOutcome::Matches(scored)
    }
}

impl Default for MatchRanker {
    fn default() -> Self {
        Self::new(CompatibilityScorer::default(), DEFAULT_RESULT_LIMIT)
    }
}
