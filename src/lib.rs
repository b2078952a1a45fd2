//! F2F Algo - session matching engine for the F2F social-matching app
//!
//! This library holds the matching rules (distance, candidate filtering,
//! shared-interest match decisions) and the in-memory session state built
//! around them: swipe decisions, incoming likes, chats and events.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod seed;
pub mod services;

// Re-export commonly used types
pub use crate::core::{Matcher, Session, SessionError, SwipeOutcome, distance::haversine_distance};
pub use crate::models::{Candidate, FilterCriteria, Interest, Profile, ViewMode};
