//! Booking service client

use reqwest::Client;
use tracing::{debug, error};

use crate::error::{BookingError, Result};
use crate::models::{BookingServiceConfig, Survey};

/// Client for the booking service user-survey endpoint
#[derive(Clone)]
pub struct BookingClient {
    client: Client,
    base_url: String,
}

impl BookingClient {
    /// Create a new booking service client
    pub fn new(config: BookingServiceConfig) -> Result<Self> {
        if config.base_url.is_empty() {
            return Err(BookingError::Configuration("base url is empty".to_string()));
        }

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| BookingError::Configuration(e.to_string()))?;

        let base_url = config.base_url.trim_end_matches('/').to_string();

        Ok(Self { client, base_url })
    }

    /// Fetch the travel survey for a user
    pub async fn user_survey(&self, user_id: i64) -> Result<Survey> {
        let url = format!("{}/users/{}/survey", self.base_url, user_id);

        debug!("Fetching user survey: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| BookingError::Connection(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            error!("Survey request failed: {} - {}", status, error_text);
            return Err(BookingError::HttpError(format!(
                "Request failed: {} - {}",
                status, error_text
            )));
        }

        let survey: Survey = response
            .json()
            .await
            .map_err(|e| BookingError::ParseError(e.to_string()))?;

        Ok(survey)
    }
}
