//! Offline document ingestion
//!
//! Loads the location dataset from CSV, renders each row as `header: value`
//! lines, splits oversized documents on line boundaries, extracts id/city
//! metadata, embeds the chunks, and upserts them into the vector index.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use tracing::info;

use tabi_core::location::{field_value, parse_fields};
use tabi_core::OpenAiClient;
use tabi_vector::{VectorClient, VectorRecord};

use crate::error::Result;

/// Maximum characters per embedded chunk
const CHUNK_SIZE: usize = 1000;

/// Chunks embedded per API request
const EMBED_BATCH_SIZE: usize = 64;

/// Ingestion pipeline over the embedding and vector-index clients
pub struct Ingestor {
    llm: Arc<OpenAiClient>,
    vector: Arc<VectorClient>,
}

impl Ingestor {
    pub fn new(llm: Arc<OpenAiClient>, vector: Arc<VectorClient>) -> Self {
        Self { llm, vector }
    }

    /// Ingest a CSV dataset into the vector index. Returns the number of
    /// chunks written.
    pub async fn ingest_csv<P: AsRef<Path>>(&self, path: P) -> Result<usize> {
        let path = path.as_ref();
        info!("Loading dataset from {}", path.display());

        let mut reader = csv::Reader::from_path(path)?;
        let headers = reader.headers()?.clone();

        let mut chunks = Vec::new();
        for record in reader.records() {
            let record = record?;
            let document = row_to_document(&headers, &record);
            chunks.extend(split_chunks(&document, CHUNK_SIZE));
        }

        info!("Prepared {} chunks, embedding...", chunks.len());

        let mut records = Vec::with_capacity(chunks.len());
        for batch in chunks.chunks(EMBED_BATCH_SIZE) {
            let embeddings = self.llm.embed(batch.to_vec()).await?;

            for (text, values) in batch.iter().zip(embeddings) {
                let (id, city) = doc_metadata(text);
                let mut metadata = HashMap::new();
                metadata.insert("id".to_string(), id);
                metadata.insert("city".to_string(), city);
                metadata.insert("text".to_string(), text.clone());

                records.push(VectorRecord {
                    id: uuid::Uuid::new_v4().to_string(),
                    values,
                    metadata,
                });
            }
        }

        let count = records.len();
        self.vector.upsert(records).await?;

        info!("Ingestion finished: {} chunks indexed", count);
        Ok(count)
    }
}

/// Render a CSV row as `header: value` lines, one per column.
pub fn row_to_document(headers: &csv::StringRecord, record: &csv::StringRecord) -> String {
    headers
        .iter()
        .zip(record.iter())
        .map(|(header, value)| format!("{}: {}", header, value))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Split a document into chunks of at most `max` characters on line
/// boundaries. A single line longer than `max` becomes its own chunk.
///
/// The limit counts characters, not bytes; place names are frequently
/// non-ASCII.
pub fn split_chunks(text: &str, max: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_chars = 0;

    for line in text.lines() {
        let line_chars = line.chars().count();
        if !current.is_empty() && current_chars + 1 + line_chars > max {
            chunks.push(std::mem::take(&mut current));
            current_chars = 0;
        }
        if !current.is_empty() {
            current.push('\n');
            current_chars += 1;
        }
        current.push_str(line);
        current_chars += line_chars;
    }
    if !current.is_empty() {
        chunks.push(current);
    }

    chunks
}

/// Extract the `id` and `city` fields from a document's text.
pub fn doc_metadata(text: &str) -> (String, String) {
    let fields = parse_fields(text);
    let id = field_value(&fields, "id").unwrap_or_default().to_string();
    let city = field_value(&fields, "city").unwrap_or_default().to_string();
    (id, city)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_to_document() {
        let headers = csv::StringRecord::from(vec!["id", "city", "name"]);
        let record = csv::StringRecord::from(vec!["1", "hanoi", "Hoan Kiem Lake"]);
        assert_eq!(
            row_to_document(&headers, &record),
            "id: 1\ncity: hanoi\nname: Hoan Kiem Lake"
        );
    }

    #[test]
    fn test_doc_metadata() {
        let (id, city) = doc_metadata("id: 42\ncity: hanoi\nname: Lake");
        assert_eq!(id, "42");
        assert_eq!(city, "hanoi");

        let (id, city) = doc_metadata("name: no metadata here");
        assert!(id.is_empty());
        assert!(city.is_empty());
    }

    #[test]
    fn test_split_chunks_short_document() {
        let chunks = split_chunks("id: 1\nname: Lake", 1000);
        assert_eq!(chunks, vec!["id: 1\nname: Lake"]);
    }

    #[test]
    fn test_split_chunks_on_line_boundary() {
        let text = "aaaa\nbbbb\ncccc";
        let chunks = split_chunks(text, 9);
        assert_eq!(chunks, vec!["aaaa\nbbbb", "cccc"]);
    }

    #[test]
    fn test_split_chunks_oversized_line() {
        let long = "x".repeat(50);
        let chunks = split_chunks(&format!("short\n{}", long), 10);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[1], long);
    }

    #[test]
    fn test_split_chunks_counts_chars_not_bytes() {
        // "Hồ Hoàn Kiếm" is 12 chars but longer in bytes; two such lines fit
        // in a 25-char chunk even though their byte length exceeds it.
        let line = "Hồ Hoàn Kiếm";
        assert_eq!(line.chars().count(), 12);
        assert!(line.len() > 12);

        let text = format!("{}\n{}", line, line);
        let chunks = split_chunks(&text, 25);
        assert_eq!(chunks, vec![text.clone()]);

        // A 12-char budget forces a split at the line boundary.
        let chunks = split_chunks(&text, 12);
        assert_eq!(chunks, vec![line.to_string(), line.to_string()]);
    }

    #[test]
    fn test_split_chunks_empty() {
        assert!(split_chunks("", 10).is_empty());
    }
}
