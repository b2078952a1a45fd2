use crate::models::domain::{Candidate, ChatSession, Profile, ViewMode};
use serde::{Deserialize, Serialize};

/// Candidates visible in a view
#[derive(Debug, Clone, Serialize)]
pub struct CandidatesResponse<'a> {
    pub view: ViewMode,
    pub candidates: Vec<Candidate<'a>>,
    pub total_results: usize,
}

/// Profiles with a pending like for the local user
#[derive(Debug, Clone, Serialize)]
pub struct LikesResponse<'a> {
    pub likes: Vec<&'a Profile>,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatsResponse<'a> {
    pub sessions: &'a [ChatSession],
    #[serde(rename = "activeChatId")]
    pub active_chat_id: Option<&'a str>,
    #[serde(rename = "totalUnread")]
    pub total_unread: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReceiveLikeResponse {
    /// False when a like from this profile was already pending
    pub queued: bool,
    pub pending: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetResponse {
    pub cleared: usize,
}

/// Advisor text about a candidate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdviceResponse {
    #[serde(rename = "candidateId")]
    pub candidate_id: String,
    pub text: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
