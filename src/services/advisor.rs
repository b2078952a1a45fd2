use crate::config::AdvisorSettings;
use crate::models::{Interest, Profile};
use crate::services::cache::{AdviceCache, CacheKey};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::time::Duration;
use thiserror::Error;

const COMPATIBILITY_NO_KEY: &str = "You both seem great!";
const COMPATIBILITY_FAILED: &str = "You have a lot in common!";
const ICEBREAKER_NO_KEY: &str = "Hi! Great photos.";
const ICEBREAKER_FAILED: &str = "Hi! Looks like we have similar interests!";

/// Errors that can occur when talking to the text-generation API
#[derive(Debug, Error)]
pub enum AdvisorError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Advisor API key is not configured")]
    MissingApiKey,

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AdviceKind {
    Compatibility,
    Icebreaker,
}

impl AdviceKind {
    fn fallback(self, error: &AdvisorError) -> &'static str {
        match (self, error) {
            (AdviceKind::Compatibility, AdvisorError::MissingApiKey) => COMPATIBILITY_NO_KEY,
            (AdviceKind::Compatibility, _) => COMPATIBILITY_FAILED,
            (AdviceKind::Icebreaker, AdvisorError::MissingApiKey) => ICEBREAKER_NO_KEY,
            (AdviceKind::Icebreaker, _) => ICEBREAKER_FAILED,
        }
    }
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: [Content<'a>; 1],
}

#[derive(Serialize)]
struct Content<'a> {
    parts: [Part<'a>; 1],
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<ResponseCandidate>,
}

#[derive(Debug, Deserialize)]
struct ResponseCandidate {
    content: Option<ResponseContent>,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

/// Gemini-backed advisor for compatibility blurbs and icebreakers
///
/// Every public method returns text: failures and a missing key degrade to a
/// fixed fallback, which is logged and never cached.
#[derive(Clone)]
pub struct GeminiAdvisor {
    base_url: String,
    api_key: Option<String>,
    model: String,
    client: Client,
    cache: AdviceCache,
}

impl GeminiAdvisor {
    pub fn new(settings: &AdvisorSettings, cache: AdviceCache) -> Result<Self, AdvisorError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;

        Ok(Self {
            base_url: settings.endpoint.clone(),
            api_key: settings.api_key.clone().filter(|key| !key.trim().is_empty()),
            model: settings.model.clone(),
            client,
            cache,
        })
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Two or three sentences on why `me` and `other` should talk
    pub async fn analyze_compatibility(&self, me: &Profile, other: &Profile) -> String {
        let prompt = format!(
            "Compare two people for friendship.\n\
             Me: interests {}, age {}.\n\
             Friend: interests {}, age {}.\n\n\
             Write 2-3 sentences on why we should talk. Keep it short and positive.",
            interest_list(&me.interests),
            me.age,
            interest_list(&other.interests),
            other.age,
        );

        self.advise(AdviceKind::Compatibility, CacheKey::compatibility(me, other), &prompt)
            .await
    }

    /// A short opening message from `me` to `other`
    pub async fn generate_icebreaker(&self, me: &Profile, other: &Profile) -> String {
        let prompt = format!(
            "You are an assistant in the dating app \"F2F\".\n\
             User A (me): interests {}, bio: {}.\n\
             User B (the other person): interests {}, bio: {}.\n\n\
             Write one short, friendly message from User A to start the conversation. \
             Build on shared interests. Don't overuse emoji. Up to 150 characters.",
            interest_list(&me.interests),
            me.bio,
            interest_list(&other.interests),
            other.bio,
        );

        self.advise(AdviceKind::Icebreaker, CacheKey::icebreaker(me, other), &prompt)
            .await
    }

    async fn advise(&self, kind: AdviceKind, cache_key: String, prompt: &str) -> String {
        if let Some(text) = self.cache.get(&cache_key).await {
            return text;
        }

        match self.generate(prompt).await {
            Ok(text) => {
                self.cache.set(&cache_key, text.clone()).await;
                text
            }
            Err(e) => {
                tracing::error!("Advisor {:?} request failed, using fallback: {}", kind, e);
                kind.fallback(&e).to_string()
            }
        }
    }

    /// Run a single prompt through the model
    pub async fn generate(&self, prompt: &str) -> Result<String, AdvisorError> {
        let api_key = self.api_key.as_deref().ok_or(AdvisorError::MissingApiKey)?;

        let url = format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        );

        tracing::debug!("Requesting advisor text from: {}", url);

        let body = GenerateRequest {
            contents: [Content {
                parts: [Part { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AdvisorError::ApiError(format!(
                "Failed to generate content: {}",
                response.status()
            )));
        }

        let parsed: GenerateResponse = response.json().await?;

        let text: String = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        let text = text.trim();
        if text.is_empty() {
            return Err(AdvisorError::InvalidResponse("Response contained no text".into()));
        }

        Ok(text.to_string())
    }
}

fn interest_list(interests: &BTreeSet<Interest>) -> String {
    let labels: Vec<&str> = interests.iter().map(|i| i.label()).collect();
    format!("[{}]", labels.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[tokio::test]
    async fn test_missing_key_returns_fallback() {
        let advisor = GeminiAdvisor::new(&AdvisorSettings::default(), AdviceCache::new(10, 60)).unwrap();
        let me = seed::demo_local_profile();
        let maria = &seed::demo_pool()[0];

        assert!(!advisor.has_api_key());
        assert_eq!(advisor.analyze_compatibility(&me, maria).await, COMPATIBILITY_NO_KEY);
        assert_eq!(advisor.generate_icebreaker(&me, maria).await, ICEBREAKER_NO_KEY);
        assert!(matches!(advisor.generate("hi").await, Err(AdvisorError::MissingApiKey)));
    }

    #[test]
    fn test_blank_key_counts_as_missing() {
        let settings = AdvisorSettings {
            api_key: Some("  ".to_string()),
            ..AdvisorSettings::default()
        };
        let advisor = GeminiAdvisor::new(&settings, AdviceCache::new(10, 60)).unwrap();
        assert!(!advisor.has_api_key());
    }

    #[test]
    fn test_interest_list() {
        let interests = [Interest::Running, Interest::Coffee].into_iter().collect();
        assert_eq!(interest_list(&interests), "[Running, Coffee]");
    }
}
