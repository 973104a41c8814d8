use std::sync::Arc;
use std::time::Duration;
use crate::domain::{
    models::{event::Event, user::User},
    ports::{EventRepository, LlmService},
};
use crate::error::AppError;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};

pub const MAX_RECOMMENDATIONS: usize = 5;

const SYSTEM_INSTRUCTION: &str = "You are an event recommendation assistant. Recommend events that match user interests.";

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationSource {
    Ai,
    TagMatch,
    None,
}

#[derive(Debug, Serialize)]
pub struct Recommendation {
    pub recommended_events: Vec<Event>,
    pub source: RecommendationSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

pub fn tag_matches(upcoming: &[Event], interests: &[String]) -> Vec<Event> {
    upcoming.iter()
        .filter(|e| e.has_any_tag(interests))
        .take(MAX_RECOMMENDATIONS)
        .cloned()
        .collect()
}

pub fn build_prompt(interests: &[String], upcoming: &[Event]) -> String {
    let interests_text = if interests.is_empty() {
        "None specified".to_string()
    } else {
        interests.join(", ")
    };

    let events_text = upcoming.iter()
        .map(|e| format!("- {}: {} (Tags: {})", e.title, e.description, e.tags.join(", ")))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "User interests: {}\n\nUpcoming events:\n{}\n\nBased on the user's interests, recommend the top 3-5 most relevant events. Return only the event titles, one per line, nothing else.",
        interests_text,
        events_text
    )
}

/// One title per non-blank line, matched case-sensitively against the upcoming list.
pub fn match_titles(reply: &str, upcoming: &[Event]) -> Vec<Event> {
    let titles: Vec<&str> = reply.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    upcoming.iter()
        .filter(|e| titles.contains(&e.title.as_str()))
        .take(MAX_RECOMMENDATIONS)
        .cloned()
        .collect()
}

pub struct RecommendationService {
    events: Arc<dyn EventRepository>,
    llm: Option<Arc<dyn LlmService>>,
    timeout: Duration,
}

impl RecommendationService {
    pub fn new(events: Arc<dyn EventRepository>, llm: Option<Arc<dyn LlmService>>, timeout: Duration) -> Self {
        Self { events, llm, timeout }
    }

    pub async fn recommend(&self, user: &User, now: DateTime<Utc>) -> Result<Recommendation, AppError> {
        let interests: &[String] = &user.interests;

        let upcoming: Vec<Event> = self.events.list(None).await?
            .into_iter()
            .filter(|e| e.is_upcoming(now))
            .collect();

        if upcoming.is_empty() {
            return Ok(Recommendation {
                recommended_events: Vec::new(),
                source: RecommendationSource::None,
                message: Some("No upcoming events".to_string()),
            });
        }

        let fallback = tag_matches(&upcoming, interests);

        let Some(llm) = &self.llm else {
            return Ok(Recommendation {
                recommended_events: fallback,
                source: RecommendationSource::TagMatch,
                message: None,
            });
        };

        let prompt = build_prompt(interests, &upcoming);
        let reply = match tokio::time::timeout(self.timeout, llm.generate(&prompt, SYSTEM_INSTRUCTION)).await {
            Ok(Ok(text)) => text,
            Ok(Err(e)) => {
                warn!(user_id = %user.id, "AI recommendation failed, using tag match: {}", e);
                return Ok(Self::degraded(fallback));
            }
            Err(_) => {
                warn!(user_id = %user.id, timeout_ms = self.timeout.as_millis() as u64, "AI recommendation timed out, using tag match");
                return Ok(Self::degraded(fallback));
            }
        };

        let matched = match_titles(&reply, &upcoming);
        if matched.is_empty() {
            warn!(user_id = %user.id, "AI reply matched no upcoming event titles, using tag match");
            return Ok(Self::degraded(fallback));
        }

        info!(user_id = %user.id, count = matched.len(), "AI recommendations produced");
        Ok(Recommendation {
            recommended_events: matched,
            source: RecommendationSource::Ai,
            message: None,
        })
    }

    fn degraded(fallback: Vec<Event>) -> Recommendation {
        Recommendation {
            recommended_events: fallback,
            source: RecommendationSource::TagMatch,
            message: Some("AI recommendations unavailable; showing events matching your interests".to_string()),
        }
    }
}
