use crate::core::{distance::distance_between, filters::is_eligible, ledger::SwipeLedger};
use crate::models::{Candidate, FilterCriteria, Interest, Profile, ViewMode};
use std::collections::BTreeSet;

/// Shared interests needed for a like to become a match
pub const DEFAULT_MATCH_THRESHOLD: usize = 3;

/// Result of the filtering pipeline
#[derive(Debug)]
pub struct MatchResult<'a> {
    pub candidates: Vec<Candidate<'a>>,
    pub total_candidates: usize,
}

impl<'a> MatchResult<'a> {
    /// Next candidate for the swipe view
    pub fn head(&self) -> Option<&Candidate<'a>> {
        self.candidates.first()
    }
}

/// Outcome of comparing the local profile with a liked candidate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LikeEvaluation {
    pub common_interests: BTreeSet<Interest>,
    pub required: usize,
    pub is_match: bool,
}

impl LikeEvaluation {
    pub fn shared(&self) -> usize {
        self.common_interests.len()
    }
}

/// Candidate filtering and match decisions
///
/// # Pipeline Stages
/// 1. Swipe-ledger exclusion (swipe view only)
/// 2. Gender, age and interest filters
/// 3. Distance annotation
///
/// Input order is preserved; nothing is ranked.
#[derive(Debug, Clone, Copy)]
pub struct Matcher {
    match_threshold: usize,
}

impl Matcher {
    pub fn new(match_threshold: usize) -> Self {
        Self { match_threshold }
    }

    pub fn with_default_threshold() -> Self {
        Self::new(DEFAULT_MATCH_THRESHOLD)
    }

    pub fn match_threshold(&self) -> usize {
        self.match_threshold
    }

    /// Candidates from `pool` eligible for `view`, each paired with its distance from `local`
    pub fn find_candidates<'a>(
        &self,
        local: &Profile,
        pool: &'a [Profile],
        ledger: &SwipeLedger,
        criteria: &FilterCriteria,
        view: ViewMode,
    ) -> MatchResult<'a> {
        let total_candidates = pool.len();

        let candidates: Vec<Candidate<'a>> = pool
            .iter()
            .filter(|profile| is_eligible(profile, criteria, ledger, view))
            .map(|profile| Candidate::new(profile, distance_between(local.location, profile.location)))
            .collect();

        tracing::debug!(
            "Filtered {} of {} candidates for {:?} view",
            candidates.len(),
            total_candidates,
            view
        );

        MatchResult {
            candidates,
            total_candidates,
        }
    }

    /// Decide whether liking `candidate` is a match for `local`
    pub fn evaluate_like(&self, local: &Profile, candidate: &Profile) -> LikeEvaluation {
        let common_interests = local.common_interests(candidate);
        let is_match = common_interests.len() >= self.match_threshold;

        LikeEvaluation {
            common_interests,
            required: self.match_threshold,
            is_match,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_threshold()
    }
}
