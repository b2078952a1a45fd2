// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Candidate, ChatKind, ChatSession, Coordinate, Event, FilterCriteria, Gender, GenderFilter,
    Interest, MapMarker, MarkerStyle, Message, Profile, SwipeDecision, SwipeDirection, ViewMode,
};
pub use requests::{
    CandidatesQuery, CreateEventRequest, ProfileRequest, ReceiveMessageRequest, SendMessageRequest,
    SwipeRequest,
};
pub use responses::{
    AdviceResponse, CandidatesResponse, ChatsResponse, ErrorResponse, HealthResponse, LikesResponse,
    ReceiveLikeResponse, ResetResponse,
};
