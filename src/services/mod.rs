// Service exports
pub mod advisor;
pub mod cache;

pub use advisor::{AdvisorError, GeminiAdvisor};
pub use cache::{AdviceCache, CacheKey};
