use crate::models::SwipeDecision;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, VecDeque};

/// Candidates the local user has already decided on in this session
///
/// Membership is what the swipe queue checks; the stored decision is only
/// kept for stats. Recording an id twice overwrites the decision.
#[derive(Debug, Clone, Default)]
pub struct SwipeLedger {
    decisions: HashMap<String, SwipeDecision>,
}

impl SwipeLedger {
    pub fn record(&mut self, target_id: &str, decision: SwipeDecision) {
        self.decisions.insert(target_id.to_string(), decision);
        tracing::debug!("Recorded swipe: {} ({:?})", target_id, decision);
    }

    #[inline]
    pub fn contains(&self, target_id: &str) -> bool {
        self.decisions.contains_key(target_id)
    }

    pub fn decision(&self, target_id: &str) -> Option<SwipeDecision> {
        self.decisions.get(target_id).copied()
    }

    pub fn len(&self) -> usize {
        self.decisions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decisions.is_empty()
    }

    /// Forget every decision, returning how many were cleared
    pub fn clear(&mut self) -> usize {
        let cleared = self.decisions.len();
        self.decisions.clear();
        tracing::info!("Cleared {} swipe decisions", cleared);
        cleared
    }

    pub fn stats(&self) -> LedgerStats {
        let count = |wanted: SwipeDecision| {
            self.decisions
                .values()
                .filter(|decision| **decision == wanted)
                .count()
        };

        LedgerStats {
            total_decided: self.decisions.len(),
            liked: count(SwipeDecision::Liked),
            passed: count(SwipeDecision::Passed),
            matched: count(SwipeDecision::Matched),
        }
    }
}

/// Decision counts for the current session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerStats {
    #[serde(rename = "totalDecided")]
    pub total_decided: usize,
    pub liked: usize,
    pub passed: usize,
    pub matched: usize,
}

/// Inbound likes waiting for the local user to accept or reject
#[derive(Debug, Clone, Default)]
pub struct IncomingLikes {
    queue: VecDeque<String>,
}

impl IncomingLikes {
    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut likes = Self::default();
        for id in ids {
            likes.push(id);
        }
        likes
    }

    /// Enqueue an inbound like; returns false if the id is already pending
    pub fn push(&mut self, from_id: impl Into<String>) -> bool {
        let from_id = from_id.into();
        if self.contains(&from_id) {
            return false;
        }
        self.queue.push_back(from_id);
        true
    }

    #[inline]
    pub fn contains(&self, from_id: &str) -> bool {
        self.queue.iter().any(|id| id == from_id)
    }

    /// Remove a pending like; returns false if it was not pending
    pub fn remove(&mut self, from_id: &str) -> bool {
        match self.queue.iter().position(|id| id == from_id) {
            Some(index) => {
                self.queue.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.queue.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
