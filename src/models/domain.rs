use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Interest tag from the fixed vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Interest {
    Gym,
    Fishing,
    Hunting,
    Fitness,
    Running,
    Reading,
    Travel,
    Gaming,
    Cooking,
    Art,
    Music,
    Hiking,
    Coffee,
}

impl Interest {
    /// Every interest, in the order pickers should list them.
    pub const ALL: [Interest; 13] = [
        Interest::Gym,
        Interest::Fishing,
        Interest::Hunting,
        Interest::Fitness,
        Interest::Running,
        Interest::Reading,
        Interest::Travel,
        Interest::Gaming,
        Interest::Cooking,
        Interest::Art,
        Interest::Music,
        Interest::Hiking,
        Interest::Coffee,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Interest::Gym => "Gym",
            Interest::Fishing => "Fishing",
            Interest::Hunting => "Hunting",
            Interest::Fitness => "Fitness",
            Interest::Running => "Running",
            Interest::Reading => "Reading",
            Interest::Travel => "Travel",
            Interest::Gaming => "Video games",
            Interest::Cooking => "Cooking",
            Interest::Art => "Art",
            Interest::Music => "Music",
            Interest::Hiking => "Hiking",
            Interest::Coffee => "Coffee",
        }
    }
}

impl fmt::Display for Interest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

/// Geographic point in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// A user record, either the local user or a candidate from the pool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub name: String,
    pub age: u8,
    pub gender: Gender,
    #[serde(rename = "photoUrl", default)]
    pub photo_url: String,
    #[serde(default)]
    pub bio: String,
    pub interests: BTreeSet<Interest>,
    pub location: Coordinate,
}

impl Profile {
    /// Interests shared with another profile
    pub fn common_interests(&self, other: &Profile) -> BTreeSet<Interest> {
        self.interests
            .intersection(&other.interests)
            .copied()
            .collect()
    }
}

/// Read-only projection of a pool profile with its distance from the local user
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Candidate<'a> {
    #[serde(flatten)]
    pub profile: &'a Profile,
    #[serde(rename = "distanceKm")]
    pub distance_km: f64,
    /// Distance rounded to the nearest whole kilometer
    #[serde(rename = "displayDistanceKm")]
    pub display_distance_km: u32,
}

impl<'a> Candidate<'a> {
    pub fn new(profile: &'a Profile, distance_km: f64) -> Self {
        Self {
            profile,
            distance_km,
            display_distance_km: crate::core::distance::round_km(distance_km),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenderFilter {
    #[default]
    #[serde(alias = "all")]
    Any,
    Male,
    Female,
}

impl GenderFilter {
    pub fn admits(self, gender: Gender) -> bool {
        match self {
            GenderFilter::Any => true,
            GenderFilter::Male => gender == Gender::Male,
            GenderFilter::Female => gender == Gender::Female,
        }
    }
}

/// User-editable candidate query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    #[serde(rename = "minAge")]
    pub min_age: u8,
    #[serde(rename = "maxAge")]
    pub max_age: u8,
    #[serde(default)]
    pub gender: GenderFilter,
    #[serde(default)]
    pub interests: BTreeSet<Interest>,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            min_age: 18,
            max_age: 50,
            gender: GenderFilter::Any,
            interests: BTreeSet::new(),
        }
    }
}

/// Where a candidate list is going to be shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Swipe,
    Map,
}

/// How a candidate left the swipe queue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwipeDecision {
    Liked,
    Passed,
    Matched,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwipeDirection {
    Like,
    Pass,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatKind {
    Direct,
    Event,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    #[serde(rename = "senderId")]
    pub sender_id: String,
    /// Counterpart id for direct chats, event id for event chats
    #[serde(rename = "receiverId")]
    pub receiver_id: String,
    pub text: String,
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "isAiGenerated", default)]
    pub is_ai_generated: bool,
}

/// Ordered, append-only message log keyed by counterpart or event id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatSession {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ChatKind,
    #[serde(rename = "eventId", skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
    pub messages: Vec<Message>,
    pub unread: u32,
}

impl ChatSession {
    pub fn direct(counterpart_id: impl Into<String>) -> Self {
        Self {
            id: counterpart_id.into(),
            kind: ChatKind::Direct,
            event_id: None,
            messages: Vec::new(),
            unread: 0,
        }
    }

    pub fn event(event_id: impl Into<String>) -> Self {
        let event_id = event_id.into();
        Self {
            id: event_id.clone(),
            kind: ChatKind::Event,
            event_id: Some(event_id),
            messages: Vec::new(),
            unread: 0,
        }
    }
}

/// Organizer-owned, joinable activity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub date: DateTime<Utc>,
    #[serde(rename = "locationName")]
    pub location_name: String,
    #[serde(rename = "organizerId")]
    pub organizer_id: String,
    #[serde(rename = "participantIds")]
    pub participant_ids: Vec<String>,
    #[serde(default)]
    pub tags: BTreeSet<Interest>,
}

impl Event {
    pub fn has_participant(&self, user_id: &str) -> bool {
        self.participant_ids.iter().any(|id| id == user_id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerStyle {
    Me,
    Candidate,
}

/// Pin handed to the map renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapMarker {
    pub id: String,
    pub label: String,
    pub coordinate: Coordinate,
    pub style: MarkerStyle,
}
