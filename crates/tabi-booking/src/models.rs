//! Data models for the booking service

use serde::{Deserialize, Serialize};

/// Booking service client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingServiceConfig {
    /// Base URL of the booking service
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl BookingServiceConfig {
    pub fn new(base_url: impl Into<String>, timeout_secs: u64) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs,
        }
    }
}

/// User travel survey answers
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Survey {
    #[serde(default)]
    pub activities: Option<String>,
    #[serde(default)]
    pub place_type: Option<String>,
    #[serde(default)]
    pub seasons: Option<String>,
}

impl Survey {
    /// Render the survey as the preference block fed to the planner prompt
    pub fn preferences_text(&self) -> String {
        format!(
            "Activities: {}\nPlace type: {}\nSeasons: {}",
            self.activities.as_deref().unwrap_or(""),
            self.place_type.as_deref().unwrap_or(""),
            self.seasons.as_deref().unwrap_or(""),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preferences_text() {
        let survey = Survey {
            activities: Some("hiking, museums".to_string()),
            place_type: Some("outdoor".to_string()),
            seasons: Some("summer".to_string()),
        };
        assert_eq!(
            survey.preferences_text(),
            "Activities: hiking, museums\nPlace type: outdoor\nSeasons: summer"
        );
    }

    #[test]
    fn test_preferences_text_with_nulls() {
        let survey: Survey = serde_json::from_str(
            r#"{"activities": "beach", "place_type": null, "seasons": null}"#,
        )
        .unwrap();
        assert_eq!(
            survey.preferences_text(),
            "Activities: beach\nPlace type: \nSeasons: "
        );
    }
}
