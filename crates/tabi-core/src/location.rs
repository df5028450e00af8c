//! Location records
//!
//! Locations are produced by parsing model output; this service does not own
//! or persist them. Models sometimes emit numeric fields as strings, so the
//! numeric fields deserialize leniently.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

/// A recommended point of interest
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    #[serde(default, deserialize_with = "lenient_i64")]
    pub id: i64,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub subcategory: String,
    #[serde(default)]
    pub opening_hours: String,
    #[serde(default)]
    pub website: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub rankings: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub reviews: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub lat: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub lng: f64,
    /// Image URLs, attached after parsing
    #[serde(default)]
    pub images: Vec<String>,
}

fn lenient_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    match Option::<serde_json::Value>::deserialize(deserializer)? {
        None | Some(serde_json::Value::Null) => Ok(0.0),
        Some(serde_json::Value::Number(n)) => Ok(n.as_f64().unwrap_or(0.0)),
        Some(serde_json::Value::String(s)) => {
            let s = s.trim();
            if s.is_empty() {
                Ok(0.0)
            } else {
                s.parse().map_err(de::Error::custom)
            }
        }
        Some(other) => Err(de::Error::custom(format!("expected number, got {}", other))),
    }
}

fn lenient_i64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    match Option::<serde_json::Value>::deserialize(deserializer)? {
        None | Some(serde_json::Value::Null) => Ok(0),
        Some(serde_json::Value::Number(n)) => Ok(n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(0)),
        Some(serde_json::Value::String(s)) => {
            let s = s.trim();
            if s.is_empty() {
                Ok(0)
            } else {
                s.parse().map_err(de::Error::custom)
            }
        }
        Some(other) => Err(de::Error::custom(format!("expected integer, got {}", other))),
    }
}

/// Parse `key: value` lines from a vector-store document.
///
/// Values keep everything after the first colon, so URLs and opening hours
/// ("9:00-17:00") survive intact. Lines without a colon are skipped.
pub fn parse_fields(text: &str) -> Vec<(String, String)> {
    text.lines()
        .filter_map(|line| {
            let (key, value) = line.split_once(':')?;
            Some((key.trim().to_string(), value.trim().to_string()))
        })
        .collect()
}

/// Look up a single field in a vector-store document
pub fn field_value<'a>(fields: &'a [(String, String)], key: &str) -> Option<&'a str> {
    fields
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fields_keeps_colons_in_values() {
        let doc = "id: 42\nname: Old Quarter\nopening_hours: 9:00-17:00\nwebsite: https://example.com/place";
        let fields = parse_fields(doc);

        assert_eq!(field_value(&fields, "id"), Some("42"));
        assert_eq!(field_value(&fields, "opening_hours"), Some("9:00-17:00"));
        assert_eq!(field_value(&fields, "website"), Some("https://example.com/place"));
    }

    #[test]
    fn test_parse_fields_skips_plain_lines() {
        let fields = parse_fields("no colon here\ncity: hanoi");
        assert_eq!(fields.len(), 1);
        assert_eq!(field_value(&fields, "city"), Some("hanoi"));
    }

    #[test]
    fn test_location_from_json() {
        let json = r#"{
            "id": 7,
            "city": "hanoi",
            "name": "Hoan Kiem Lake",
            "category": "sights",
            "opening_hours": "24/7",
            "website": "https://example.com",
            "rankings": 4.5,
            "reviews": 1200,
            "lat": 21.0287,
            "lng": 105.8524
        }"#;
        let location: Location = serde_json::from_str(json).unwrap();
        assert_eq!(location.id, 7);
        assert_eq!(location.name, "Hoan Kiem Lake");
        assert_eq!(location.rankings, 4.5);
        assert!(location.images.is_empty());
    }

    #[test]
    fn test_location_lenient_numbers() {
        // Models sometimes quote numbers or leave fields empty
        let json = r#"{
            "id": "15",
            "name": "Museum",
            "rankings": "4.2",
            "reviews": "",
            "lat": null
        }"#;
        let location: Location = serde_json::from_str(json).unwrap();
        assert_eq!(location.id, 15);
        assert_eq!(location.rankings, 4.2);
        assert_eq!(location.reviews, 0.0);
        assert_eq!(location.lat, 0.0);
        assert_eq!(location.lng, 0.0);
    }

    #[test]
    fn test_location_float_id_truncates() {
        let location: Location =
            serde_json::from_str(r#"{"id": 15.7, "name": "Bridge"}"#).unwrap();
        assert_eq!(location.id, 15);
    }

    #[test]
    fn test_location_missing_fields_default() {
        let location: Location = serde_json::from_str(r#"{"name": "Park"}"#).unwrap();
        assert_eq!(location.id, 0);
        assert_eq!(location.city, "");
        assert_eq!(location.website, "");
    }
}
