//! Model output parsing
//!
//! The model is asked for JSON with a `locations` parent field, but answers
//! arrive wrapped in markdown fences, as bare arrays, or with prose around
//! the payload. The parser peels those layers before deserializing.

use serde::Deserialize;
use tabi_core::Location;

use crate::error::{PlannerError, Result};

#[derive(Deserialize)]
struct LocationsEnvelope {
    locations: Vec<Location>,
}

/// Parse the model answer into location records.
pub fn parse_locations(answer: &str) -> Result<Vec<Location>> {
    let payload = extract_payload(answer)
        .ok_or_else(|| PlannerError::OutputParse("no JSON payload in answer".to_string()))?;

    // Prefer the requested envelope, accept a bare array.
    if let Ok(envelope) = serde_json::from_str::<LocationsEnvelope>(payload) {
        return Ok(envelope.locations);
    }
    if let Ok(locations) = serde_json::from_str::<Vec<Location>>(payload) {
        return Ok(locations);
    }

    Err(PlannerError::OutputParse(format!(
        "answer is not a locations object or array: {}",
        truncate(payload, 200)
    )))
}

/// Strip markdown fences and surrounding prose, returning the JSON slice.
fn extract_payload(answer: &str) -> Option<&str> {
    let mut text = answer.trim();

    // Markdown code fence, with or without a language tag
    if let Some(start) = text.find("```") {
        let after = &text[start + 3..];
        let body_start = after.find('\n').map(|i| i + 1).unwrap_or(0);
        let body = &after[body_start..];
        text = match body.find("```") {
            Some(end) => body[..end].trim(),
            None => body.trim(),
        };
    }

    // Cut leading prose before the first bracket and trailing prose after
    // the matching final bracket.
    let open = text.find(['{', '['])?;
    let close = text.rfind(['}', ']'])?;
    if close < open {
        return None;
    }
    Some(text[open..=close].trim())
}

fn truncate(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_envelope() {
        let answer = r#"{"locations": [{"id": 1, "name": "Lake", "rankings": 4.5}]}"#;
        let locations = parse_locations(answer).unwrap();
        assert_eq!(locations.len(), 1);
        assert_eq!(locations[0].name, "Lake");
    }

    #[test]
    fn test_parse_bare_array() {
        let answer = r#"[{"id": 1, "name": "Lake"}, {"id": 2, "name": "Museum"}]"#;
        let locations = parse_locations(answer).unwrap();
        assert_eq!(locations.len(), 2);
    }

    #[test]
    fn test_parse_fenced_answer() {
        let answer = "Here are my suggestions:\n```json\n{\"locations\": [{\"id\": 3, \"name\": \"Temple\"}]}\n```\nEnjoy!";
        let locations = parse_locations(answer).unwrap();
        assert_eq!(locations[0].name, "Temple");
    }

    #[test]
    fn test_parse_with_surrounding_prose() {
        let answer = "Sure! {\"locations\": []} Let me know if you want more.";
        let locations = parse_locations(answer).unwrap();
        assert!(locations.is_empty());
    }

    #[test]
    fn test_parse_rejects_prose_only() {
        assert!(parse_locations("I could not find any places.").is_err());
    }

    #[test]
    fn test_parse_rejects_wrong_shape() {
        assert!(parse_locations(r#"{"answer": "none"}"#).is_err());
    }
}
