//! Session controller
//!
//! One [`Session`] owns everything a user touches while the app is open:
//! the candidate pool, the local profile, swipe decisions, pending inbound
//! likes, chats, events and the active filters. Each user action is a
//! method that runs to completion and returns what the caller needs to show.

use crate::core::{
    chats::ChatBook,
    events::{EventBoard, EventDraft, EventPolicy, Membership},
    ledger::{IncomingLikes, SwipeLedger},
    markers::build_markers,
    matcher::{MatchResult, Matcher},
};
use crate::models::{
    ChatKind, ChatSession, Event, FilterCriteria, Interest, MapMarker, Message, Profile,
    SwipeDecision, SwipeDirection, ViewMode,
};
use crate::seed::SeedData;
use serde::Serialize;
use std::collections::BTreeSet;
use thiserror::Error;

/// Minimum number of interests on a profile
pub const MIN_PROFILE_INTERESTS: usize = 2;

/// Errors raised by session actions; none of them leave the session changed
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("No local profile registered")]
    NotRegistered,

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Unknown profile: {0}")]
    UnknownProfile(String),

    #[error("Unknown event: {0}")]
    UnknownEvent(String),

    #[error("Unknown chat: {0}")]
    UnknownChat(String),

    #[error("No pending like from {0}")]
    NotPending(String),

    #[error("Organizer cannot leave event {0}")]
    OrganizerCannotLeave(String),
}

/// What a swipe, like or pass did
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SwipeOutcome {
    /// Shared interests reached the threshold
    Matched {
        #[serde(rename = "candidateId")]
        candidate_id: String,
        #[serde(rename = "commonInterests")]
        common_interests: BTreeSet<Interest>,
        /// True only when this like opened the chat; drives the match celebration
        #[serde(rename = "newMatch")]
        new_match: bool,
    },
    NoMatch {
        #[serde(rename = "candidateId")]
        candidate_id: String,
        #[serde(rename = "commonInterests")]
        common_interests: BTreeSet<Interest>,
        required: usize,
        /// Set when a pending inbound like was turned down by the threshold
        #[serde(skip_serializing_if = "Option::is_none")]
        explanation: Option<String>,
    },
    Passed {
        #[serde(rename = "candidateId")]
        candidate_id: String,
    },
    /// The swipe queue was empty
    Exhausted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EventToggle {
    pub membership: Membership,
    #[serde(rename = "chatCreated")]
    pub chat_created: bool,
}

#[derive(Debug, Clone)]
pub struct Session {
    matcher: Matcher,
    pool: Vec<Profile>,
    local: Option<Profile>,
    ledger: SwipeLedger,
    incoming: IncomingLikes,
    chats: ChatBook,
    events: EventBoard,
    filters: FilterCriteria,
}

impl Session {
    pub fn new(seed: SeedData, matcher: Matcher, policy: EventPolicy) -> Self {
        Self {
            matcher,
            pool: seed.pool,
            local: None,
            ledger: SwipeLedger::default(),
            incoming: IncomingLikes::from_ids(seed.incoming_likes),
            chats: ChatBook::default(),
            events: EventBoard::new(seed.events, policy),
            filters: FilterCriteria::default(),
        }
    }

    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    pub fn pool(&self) -> &[Profile] {
        &self.pool
    }

    // Profile

    /// Set the local profile after validating it
    pub fn register(&mut self, profile: Profile) -> Result<&Profile, SessionError> {
        validate_profile(&profile)?;
        tracing::info!("Registered local profile {} ({})", profile.id, profile.name);
        Ok(self.local.insert(profile))
    }

    /// Replace the local profile; the id cannot change
    pub fn update_profile(&mut self, mut profile: Profile) -> Result<&Profile, SessionError> {
        let id = self.local()?.id.clone();
        validate_profile(&profile)?;
        profile.id = id;
        tracing::info!("Updated local profile {}", profile.id);
        Ok(self.local.insert(profile))
    }

    pub fn local(&self) -> Result<&Profile, SessionError> {
        self.local.as_ref().ok_or(SessionError::NotRegistered)
    }

    pub fn is_registered(&self) -> bool {
        self.local.is_some()
    }

    // Filtering

    pub fn filters(&self) -> &FilterCriteria {
        &self.filters
    }

    pub fn set_filters(&mut self, criteria: FilterCriteria) -> Result<&FilterCriteria, SessionError> {
        if criteria.min_age > criteria.max_age {
            return Err(SessionError::Validation(format!(
                "Age range is empty: {} > {}",
                criteria.min_age, criteria.max_age
            )));
        }
        tracing::debug!("Filters changed: {:?}", criteria);
        self.filters = criteria;
        Ok(&self.filters)
    }

    /// Candidates eligible for `view` under the current filters
    pub fn candidates(&self, view: ViewMode) -> Result<MatchResult<'_>, SessionError> {
        let local = self.local()?;
        Ok(self
            .matcher
            .find_candidates(local, &self.pool, &self.ledger, &self.filters, view))
    }

    pub fn candidate(&self, candidate_id: &str) -> Result<&Profile, SessionError> {
        self.pool
            .iter()
            .find(|profile| profile.id == candidate_id)
            .ok_or_else(|| SessionError::UnknownProfile(candidate_id.to_string()))
    }

    pub fn map_markers(&self) -> Result<Vec<MapMarker>, SessionError> {
        let local = self.local()?;
        let visible = self.candidates(ViewMode::Map)?;
        Ok(build_markers(local, &visible.candidates))
    }

    // Swiping

    /// Decide on the head of the swipe queue
    pub fn swipe(&mut self, direction: SwipeDirection) -> Result<SwipeOutcome, SessionError> {
        let head_id = match self.candidates(ViewMode::Swipe)?.head() {
            Some(candidate) => candidate.profile.id.clone(),
            None => return Ok(SwipeOutcome::Exhausted),
        };

        match direction {
            SwipeDirection::Like => self.like(&head_id),
            SwipeDirection::Pass => self.pass(&head_id),
        }
    }

    /// Like a candidate, matching when enough interests are shared
    ///
    /// The candidate always lands in the ledger and any pending inbound like
    /// from them is resolved.
    pub fn like(&mut self, candidate_id: &str) -> Result<SwipeOutcome, SessionError> {
        let local = self.local()?;
        let candidate = self.candidate(candidate_id)?;
        let evaluation = self.matcher.evaluate_like(local, candidate);
        let candidate_name = candidate.name.clone();

        let was_pending = self.incoming.remove(candidate_id);

        if evaluation.is_match {
            self.ledger.record(candidate_id, SwipeDecision::Matched);
            let new_match = self.chats.ensure(candidate_id, ChatKind::Direct);

            tracing::info!(
                "Matched with {} on {} shared interests (new chat: {})",
                candidate_id,
                evaluation.shared(),
                new_match
            );

            Ok(SwipeOutcome::Matched {
                candidate_id: candidate_id.to_string(),
                common_interests: evaluation.common_interests,
                new_match,
            })
        } else {
            self.ledger.record(candidate_id, SwipeDecision::Liked);

            let explanation = was_pending.then(|| {
                format!(
                    "You and {} share {} of the {} interests needed for a match",
                    candidate_name,
                    evaluation.shared(),
                    evaluation.required
                )
            });

            tracing::debug!(
                "No match with {}: {} of {} shared interests",
                candidate_id,
                evaluation.shared(),
                evaluation.required
            );

            Ok(SwipeOutcome::NoMatch {
                candidate_id: candidate_id.to_string(),
                common_interests: evaluation.common_interests,
                required: evaluation.required,
                explanation,
            })
        }
    }

    pub fn pass(&mut self, candidate_id: &str) -> Result<SwipeOutcome, SessionError> {
        self.local()?;
        self.candidate(candidate_id)?;
        self.ledger.record(candidate_id, SwipeDecision::Passed);

        Ok(SwipeOutcome::Passed {
            candidate_id: candidate_id.to_string(),
        })
    }

    /// Put every decided candidate back in the swipe queue
    pub fn reset_ledger(&mut self) -> usize {
        self.ledger.clear()
    }

    pub fn ledger(&self) -> &SwipeLedger {
        &self.ledger
    }

    // Incoming likes

    pub fn incoming_likes(&self) -> Vec<&Profile> {
        self.incoming
            .iter()
            .filter_map(|id| self.pool.iter().find(|profile| profile.id == id))
            .collect()
    }

    /// Enqueue a simulated inbound like; false when it was already pending
    pub fn receive_like(&mut self, from_id: &str) -> Result<bool, SessionError> {
        self.candidate(from_id)?;
        Ok(self.incoming.push(from_id))
    }

    pub fn accept_incoming(&mut self, from_id: &str) -> Result<SwipeOutcome, SessionError> {
        if !self.incoming.contains(from_id) {
            return Err(SessionError::NotPending(from_id.to_string()));
        }
        self.like(from_id)
    }

    pub fn reject_incoming(&mut self, from_id: &str) -> Result<SwipeOutcome, SessionError> {
        self.local()?;
        if !self.incoming.remove(from_id) {
            return Err(SessionError::NotPending(from_id.to_string()));
        }
        self.ledger.record(from_id, SwipeDecision::Passed);

        Ok(SwipeOutcome::Passed {
            candidate_id: from_id.to_string(),
        })
    }

    // Events

    pub fn events(&self) -> &[Event] {
        self.events.events()
    }

    /// Join or leave an event; joining opens its chat
    pub fn toggle_event(&mut self, event_id: &str) -> Result<EventToggle, SessionError> {
        let local_id = self.local()?.id.clone();
        let membership = self.events.toggle_membership(event_id, &local_id)?;

        let chat_created = match membership {
            Membership::Joined => {
                let created = self.chats.ensure(event_id, ChatKind::Event);
                self.chats.activate(event_id);
                created
            }
            Membership::Left => false,
        };

        Ok(EventToggle {
            membership,
            chat_created,
        })
    }

    /// Create an event organized by the local user and open its chat
    pub fn create_event(&mut self, draft: EventDraft) -> Result<Event, SessionError> {
        let organizer_id = self.local()?.id.clone();
        let event = self.events.create(draft, &organizer_id).clone();

        self.chats.ensure(&event.id, ChatKind::Event);
        self.chats.activate(&event.id);

        Ok(event)
    }

    // Chats

    pub fn chats(&self) -> &ChatBook {
        &self.chats
    }

    pub fn open_chat(&mut self, chat_id: &str) -> Result<&ChatSession, SessionError> {
        if !self.chats.activate(chat_id) {
            return Err(SessionError::UnknownChat(chat_id.to_string()));
        }
        self.chats
            .get(chat_id)
            .ok_or_else(|| SessionError::UnknownChat(chat_id.to_string()))
    }

    /// Send a message from the local user
    pub fn send_message(
        &mut self,
        chat_id: &str,
        text: &str,
        is_ai_generated: bool,
    ) -> Result<&Message, SessionError> {
        let local_id = self.local()?.id.clone();
        self.append_message(chat_id, &local_id, text, is_ai_generated)
    }

    /// Deliver a message from someone else into a chat
    pub fn receive_message(
        &mut self,
        chat_id: &str,
        sender_id: &str,
        text: &str,
    ) -> Result<&Message, SessionError> {
        self.append_message(chat_id, sender_id, text, false)
    }

    fn append_message(
        &mut self,
        chat_id: &str,
        sender_id: &str,
        text: &str,
        is_ai_generated: bool,
    ) -> Result<&Message, SessionError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(SessionError::Validation("Message text is empty".to_string()));
        }
        let local_id = self.local()?.id.clone();

        self.chats
            .append(chat_id, &local_id, sender_id, text, is_ai_generated)
            .ok_or_else(|| SessionError::UnknownChat(chat_id.to_string()))
    }
}

/// Registration rules: a name, a non-zero age and enough interests
pub fn validate_profile(profile: &Profile) -> Result<(), SessionError> {
    if profile.name.trim().is_empty() {
        return Err(SessionError::Validation("Name is required".to_string()));
    }
    if profile.age == 0 {
        return Err(SessionError::Validation("Age is required".to_string()));
    }
    if profile.interests.len() < MIN_PROFILE_INTERESTS {
        return Err(SessionError::Validation(format!(
            "Pick at least {} interests",
            MIN_PROFILE_INTERESTS
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    fn registered_session() -> Session {
        let mut session = Session::new(seed::demo(), Matcher::default(), EventPolicy::default());
        session.register(seed::demo_local_profile()).unwrap();
        session
    }

    #[test]
    fn test_actions_need_registration() {
        let mut session = Session::new(seed::demo(), Matcher::default(), EventPolicy::default());

        assert_eq!(session.candidates(ViewMode::Swipe).err(), Some(SessionError::NotRegistered));
        assert_eq!(session.like("1").err(), Some(SessionError::NotRegistered));
        assert_eq!(session.toggle_event("e1").err(), Some(SessionError::NotRegistered));
    }

    #[test]
    fn test_register_validation() {
        let mut session = Session::new(seed::demo(), Matcher::default(), EventPolicy::default());

        let mut profile = seed::demo_local_profile();
        profile.interests = [Interest::Gym].into_iter().collect();
        assert!(matches!(session.register(profile), Err(SessionError::Validation(_))));

        let mut profile = seed::demo_local_profile();
        profile.name = "  ".to_string();
        assert!(matches!(session.register(profile), Err(SessionError::Validation(_))));

        let mut profile = seed::demo_local_profile();
        profile.age = 0;
        assert!(matches!(session.register(profile), Err(SessionError::Validation(_))));

        assert!(!session.is_registered());
    }

    #[test]
    fn test_update_profile_keeps_id() {
        let mut session = registered_session();
        let mut edited = seed::demo_local_profile();
        edited.id = "someone-else".to_string();
        edited.bio = "New bio".to_string();

        let updated = session.update_profile(edited).unwrap();
        assert_eq!(updated.id, seed::LOCAL_USER_ID);
        assert_eq!(updated.bio, "New bio");
    }

    #[test]
    fn test_swipe_advances_queue() {
        let mut session = registered_session();
        let first = session.candidates(ViewMode::Swipe).unwrap().head().unwrap().profile.id.clone();

        let outcome = session.swipe(SwipeDirection::Pass).unwrap();
        assert_eq!(outcome, SwipeOutcome::Passed { candidate_id: first.clone() });

        let next = session.candidates(ViewMode::Swipe).unwrap().head().unwrap().profile.id.clone();
        assert_ne!(first, next);
    }

    #[test]
    fn test_swipe_on_empty_queue() {
        let mut session = registered_session();
        while session.swipe(SwipeDirection::Pass).unwrap() != SwipeOutcome::Exhausted {}

        assert_eq!(session.ledger().len(), session.pool().len());
        assert_eq!(session.swipe(SwipeDirection::Like).unwrap(), SwipeOutcome::Exhausted);
    }

    #[test]
    fn test_set_filters_rejects_inverted_range() {
        let mut session = registered_session();
        let criteria = FilterCriteria {
            min_age: 40,
            max_age: 30,
            ..FilterCriteria::default()
        };

        assert!(matches!(session.set_filters(criteria), Err(SessionError::Validation(_))));
        assert_eq!(session.filters(), &FilterCriteria::default());
    }

    #[test]
    fn test_reject_incoming_ledgers_candidate() {
        let mut session = registered_session();

        let outcome = session.reject_incoming("5").unwrap();
        assert_eq!(outcome, SwipeOutcome::Passed { candidate_id: "5".to_string() });
        assert!(session.incoming_likes().is_empty());
        assert_eq!(session.ledger().decision("5"), Some(SwipeDecision::Passed));
        assert_eq!(session.reject_incoming("5"), Err(SessionError::NotPending("5".to_string())));
        assert!(session.chats().is_empty());
    }

    #[test]
    fn test_send_message_rules() {
        let mut session = registered_session();
        session.like("1").unwrap();

        assert!(matches!(session.send_message("1", "   ", false), Err(SessionError::Validation(_))));
        assert_eq!(
            session.send_message("2", "hi", false).err(),
            Some(SessionError::UnknownChat("2".to_string()))
        );

        let message = session.send_message("1", " Hi Maria ", false).unwrap();
        assert_eq!(message.text, "Hi Maria");
        assert_eq!(message.sender_id, seed::LOCAL_USER_ID);
        assert_eq!(message.receiver_id, "1");
    }

    #[test]
    fn test_create_event_opens_chat() {
        let mut session = registered_session();
        let draft = EventDraft {
            title: Some("Coffee tasting".to_string()),
            tags: [Interest::Coffee].into_iter().collect(),
            ..EventDraft::default()
        };

        let event = session.create_event(draft).unwrap();

        assert_eq!(event.organizer_id, seed::LOCAL_USER_ID);
        assert_eq!(session.events()[0].id, event.id);
        assert_eq!(session.chats().active_id(), Some(event.id.as_str()));
        assert_eq!(session.chats().get(&event.id).map(|c| c.kind), Some(ChatKind::Event));
    }
}
