// Core algorithm exports
pub mod chats;
pub mod distance;
pub mod events;
pub mod filters;
pub mod ledger;
pub mod markers;
pub mod matcher;
pub mod session;

pub use chats::ChatBook;
pub use distance::{distance_between, haversine_distance, round_km};
pub use events::{EventBoard, EventDraft, EventPolicy, Membership};
pub use filters::{is_eligible, matches_age, matches_gender, matches_interests};
pub use ledger::{IncomingLikes, LedgerStats, SwipeLedger};
pub use markers::build_markers;
pub use matcher::{LikeEvaluation, MatchResult, Matcher, DEFAULT_MATCH_THRESHOLD};
pub use session::{EventToggle, Session, SessionError, SwipeOutcome};
