//! Planning orchestration
//!
//! One request walks through: session history lookup, query embedding,
//! vector retrieval filtered by city, prompt assembly, chat completion,
//! output parsing, image augmentation.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use tabi_core::{ChatMessage, Location, OpenAiClient, SessionKey, SessionStore};
use tabi_images::ImageSearchClient;
use tabi_vector::{eq_filter, VectorClient};

use crate::error::{PlannerError, Result};
use crate::output::parse_locations;
use crate::prompt::{build_input, build_prompt};

/// A planning request, one conversation turn
#[derive(Debug, Clone, Deserialize)]
pub struct PlanRequest {
    pub user_id: i64,
    pub city: String,
    pub language: Option<String>,
    /// User preference block, usually from the booking-service survey
    #[serde(default)]
    pub preferences: String,
}

/// Structured planning result
#[derive(Debug, Clone, Serialize)]
pub struct PlanResponse {
    pub locations: Vec<Location>,
}

/// Travel planner orchestrating retrieval, generation, and image lookup
#[derive(Clone)]
pub struct Planner {
    llm: Arc<OpenAiClient>,
    vector: Arc<VectorClient>,
    images: Arc<ImageSearchClient>,
    sessions: SessionStore,
    top_k: usize,
}

impl Planner {
    pub fn new(
        llm: Arc<OpenAiClient>,
        vector: Arc<VectorClient>,
        images: Arc<ImageSearchClient>,
        sessions: SessionStore,
        top_k: usize,
    ) -> Self {
        Self {
            llm,
            vector,
            images,
            sessions,
            top_k,
        }
    }

    /// Produce ranked location suggestions for a (user, city) conversation turn.
    pub async fn plan(&self, request: PlanRequest) -> Result<PlanResponse> {
        let key = SessionKey::new(request.user_id, &request.city);
        let input = build_input(
            &request.city,
            &request.preferences,
            request.language.as_deref(),
        );

        // History lookup re-arms the session expiry timer; the store caps
        // history at the configured message count.
        let history = self.sessions.history(&key).await;
        debug!("Session {} has {} prior messages", key, history.len());

        // Retrieve city-scoped documents for the request text.
        let embedding = self
            .llm
            .embed(vec![input.clone()])
            .await?
            .pop()
            .ok_or(PlannerError::EmptyResponse)?;

        let matches = self
            .vector
            .query(embedding, self.top_k, Some(eq_filter("city", &key.city)))
            .await?;

        let context = matches
            .iter()
            .filter_map(|m| m.text())
            .collect::<Vec<_>>()
            .join("\n\n");

        if matches.is_empty() {
            warn!("No documents retrieved for city {}", key.city);
        }

        // History plus the freshly assembled prompt as the user turn.
        let mut messages = history;
        messages.push(ChatMessage::user(build_prompt(&context, &input)));

        let response = self.llm.chat(messages).await?;
        let answer = response
            .text()
            .ok_or(PlannerError::EmptyResponse)?
            .to_string();

        // Record the short input, not the full prompt with context, so the
        // history stays within the model budget across turns.
        self.sessions.append(&key, ChatMessage::user(input)).await;
        self.sessions
            .append(&key, ChatMessage::assistant(answer.clone()))
            .await;

        let mut locations = parse_locations(&answer)?;
        self.attach_images(&mut locations, &request.city).await;

        info!(
            "Plan for {} produced {} locations",
            key,
            locations.len()
        );

        Ok(PlanResponse { locations })
    }

    /// Attach image URLs to each location, one search per distinct name.
    ///
    /// A failed search degrades to an empty image list for that name.
    async fn attach_images(&self, locations: &mut [Location], city: &str) {
        let mut by_name: HashMap<String, Vec<String>> = HashMap::new();

        for location in locations.iter_mut() {
            if location.name.is_empty() {
                continue;
            }

            if !by_name.contains_key(&location.name) {
                let query = format!("{} {}", location.name, city);
                let urls = match self.images.search(&query).await {
                    Ok(urls) => urls,
                    Err(e) => {
                        warn!("Image search failed for '{}': {}", query, e);
                        Vec::new()
                    }
                };
                by_name.insert(location.name.clone(), urls);
            }

            location.images = by_name[&location.name].clone();
        }
    }
}
