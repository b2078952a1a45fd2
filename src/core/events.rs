use crate::core::session::SessionError;
use crate::models::{Event, Interest};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeSet;

const DEFAULT_EVENT_TITLE: &str = "New event";
const DEFAULT_EVENT_LOCATION: &str = "Not specified";

/// Membership rules for events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventPolicy {
    pub organizer_can_leave: bool,
}

impl Default for EventPolicy {
    fn default() -> Self {
        Self {
            organizer_can_leave: true,
        }
    }
}

/// Fields supplied when creating an event; gaps get defaults
#[derive(Debug, Clone, Default)]
pub struct EventDraft {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub location_name: Option<String>,
    pub tags: BTreeSet<Interest>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Membership {
    Joined,
    Left,
}

/// Events known to the session, newest first
#[derive(Debug, Clone, Default)]
pub struct EventBoard {
    events: Vec<Event>,
    policy: EventPolicy,
}

impl EventBoard {
    pub fn new(events: Vec<Event>, policy: EventPolicy) -> Self {
        Self { events, policy }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn get(&self, event_id: &str) -> Option<&Event> {
        self.events.iter().find(|event| event.id == event_id)
    }

    /// Flip `user_id`'s membership of `event_id`
    pub fn toggle_membership(
        &mut self,
        event_id: &str,
        user_id: &str,
    ) -> Result<Membership, SessionError> {
        let policy = self.policy;
        let event = self
            .events
            .iter_mut()
            .find(|event| event.id == event_id)
            .ok_or_else(|| SessionError::UnknownEvent(event_id.to_string()))?;

        if event.has_participant(user_id) {
            if event.organizer_id == user_id && !policy.organizer_can_leave {
                return Err(SessionError::OrganizerCannotLeave(event_id.to_string()));
            }
            event.participant_ids.retain(|id| id != user_id);
            tracing::info!("{} left event {}", user_id, event_id);
            Ok(Membership::Left)
        } else {
            event.participant_ids.push(user_id.to_string());
            tracing::info!("{} joined event {}", user_id, event_id);
            Ok(Membership::Joined)
        }
    }

    /// Create an event organized by `organizer_id`, who is its first participant
    pub fn create(&mut self, draft: EventDraft, organizer_id: &str) -> &Event {
        let event = Event {
            id: uuid::Uuid::new_v4().to_string(),
            title: non_blank(draft.title).unwrap_or_else(|| DEFAULT_EVENT_TITLE.to_string()),
            description: draft.description.unwrap_or_default(),
            date: draft.date.unwrap_or_else(Utc::now),
            location_name: non_blank(draft.location_name)
                .unwrap_or_else(|| DEFAULT_EVENT_LOCATION.to_string()),
            organizer_id: organizer_id.to_string(),
            participant_ids: vec![organizer_id.to_string()],
            tags: draft.tags,
        };

        tracing::info!("{} created event {} ({})", organizer_id, event.id, event.title);
        self.events.insert(0, event);
        &self.events[0]
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
