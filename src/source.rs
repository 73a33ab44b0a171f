//! Where record sets come from.
//!
//! The catalog consumes the ingestion job's output as-is: a JSON array of
//! `{id, fields, image}` objects. [`JsonFileSource`] reads it from disk;
//! [`StaticSource`] serves an in-memory list.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{error, info};

use crate::catalog::Catalog;
use crate::errors::CatalogError;
use crate::record::Record;

#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Human-readable origin, used in logs.
    fn describe(&self) -> String;

    /// Load the complete record set, in source order.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] when the source is missing, unreadable, or
    /// not a valid record array.
    async fn load(&self) -> Result<Vec<Record>, CatalogError>;
}

/// Record file on disk, read in full on every load.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl RecordSource for JsonFileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn load(&self) -> Result<Vec<Record>, CatalogError> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                CatalogError::NotFound(self.path.clone())
            } else {
                CatalogError::Io {
                    path: self.path.clone(),
                    source,
                }
            }
        })?;

        parse_records(&bytes).map_err(|source| CatalogError::Parse {
            path: self.path.clone(),
            source,
        })
    }
}

/// Fixed in-memory record list.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    records: Vec<Record>,
}

impl StaticSource {
    #[must_use]
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }
}

#[async_trait]
impl RecordSource for StaticSource {
    fn describe(&self) -> String {
        format!("{} in-memory records", self.records.len())
    }

    async fn load(&self) -> Result<Vec<Record>, CatalogError> {
        Ok(self.records.clone())
    }
}

/// Decode a record array from JSON bytes.
///
/// # Errors
///
/// Fails if the document is not an array of records with scalar field values.
pub fn parse_records(bytes: &[u8]) -> Result<Vec<Record>, serde_json::Error> {
    serde_json::from_slice(bytes)
}

/// Load a catalog, degrading to an empty one if the source fails.
///
/// The service stays up with no data rather than refusing to start.
pub async fn load_or_empty(source: &dyn RecordSource) -> Catalog {
    match source.load().await {
        Ok(records) => {
            info!(source = %source.describe(), count = records.len(), "Loaded compound records");
            Catalog::new(records)
        }
        Err(err) => {
            error!(source = %source.describe(), error = %err, "Failed to load compound records; serving an empty catalog");
            Catalog::empty()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"[
        {"id": 0, "fields": {"Compound": "Latrunculin A", "IC50": "0.2 µM"}, "image": "AAAA"},
        {"mol_idx": 1, "fields": {"Compound": "Jasplakinolide", "Quantity": ""}, "base64_png": "BBBB"}
    ]"#;

    #[tokio::test]
    async fn test_json_file_source_loads_records() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let source = JsonFileSource::new(file.path());
        let records = source.load().await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].id, 1);
        assert_eq!(records[1].image.as_deref(), Some("BBBB"));
        assert!(records[1].fields.get("Quantity").unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_file_is_not_found() {
        let source = JsonFileSource::new("/definitely/not/here/data.json");
        let err = source.load().await.unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_malformed_file_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{\"not\": \"an array\"}").unwrap();

        let err = JsonFileSource::new(file.path()).load().await.unwrap_err();
        assert!(matches!(err, CatalogError::Parse { .. }));
    }

    #[tokio::test]
    async fn test_load_failure_degrades_to_empty_catalog() {
        let catalog = load_or_empty(&JsonFileSource::new("/definitely/not/here/data.json")).await;
        assert!(catalog.is_empty());
    }

    #[tokio::test]
    async fn test_static_source() {
        let records = parse_records(SAMPLE.as_bytes()).unwrap();
        let catalog = load_or_empty(&StaticSource::new(records)).await;
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.lookup(0).unwrap().next_id, Some(1));
    }
}
