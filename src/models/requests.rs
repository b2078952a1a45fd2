use crate::models::domain::{Coordinate, Gender, Interest, Profile, SwipeDirection, ViewMode};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Registration or profile edit form
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ProfileRequest {
    #[validate(length(min = 1, max = 64))]
    pub name: String,
    #[validate(range(min = 1, max = 120))]
    pub age: u8,
    pub gender: Gender,
    #[serde(alias = "photo_url", rename = "photoUrl", default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    #[validate(length(max = 500))]
    pub bio: String,
    #[validate(length(min = 2))]
    pub interests: Vec<Interest>,
    #[serde(default)]
    pub location: Option<Coordinate>,
}

impl ProfileRequest {
    /// Build the canonical profile, falling back to `fallback_location` when the form has none
    pub fn into_profile(self, id: &str, fallback_location: Coordinate) -> Profile {
        Profile {
            id: id.to_string(),
            name: self.name.trim().to_string(),
            age: self.age,
            gender: self.gender,
            photo_url: self.photo_url.unwrap_or_default(),
            bio: self.bio,
            interests: self.interests.into_iter().collect(),
            location: self.location.unwrap_or(fallback_location),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwipeRequest {
    pub direction: SwipeDirection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CandidatesQuery {
    #[serde(default)]
    pub view: ViewMode,
}

/// Request to create an event; every field is optional
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CreateEventRequest {
    #[validate(length(max = 120))]
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<DateTime<Utc>>,
    #[serde(alias = "location_name", rename = "locationName")]
    pub location_name: Option<String>,
    #[serde(default)]
    pub tags: Vec<Interest>,
}

/// Simulated inbound message from another user
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ReceiveMessageRequest {
    #[serde(alias = "sender_id", rename = "senderId")]
    #[validate(length(min = 1))]
    pub sender_id: String,
    #[validate(length(min = 1, max = 2000))]
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SendMessageRequest {
    #[validate(length(min = 1, max = 2000))]
    pub text: String,
    #[serde(alias = "is_ai_generated", rename = "isAiGenerated", default)]
    pub is_ai_generated: bool,
}
