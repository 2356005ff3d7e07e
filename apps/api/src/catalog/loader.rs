//! Catalog loading — JSON array of `ToolRecord`s, from disk or the built-in seed.
//!
//! Every record is checked for well-formedness before a snapshot is built, so a bad
//! file never replaces a good snapshot.

use std::collections::HashSet;
use std::path::PathBuf;

use thiserror::Error;
use url::Url;

use crate::catalog::models::{Catalog, ToolRecord};

/// Seed catalog compiled into the binary, used when no `CATALOG_PATH` is configured.
pub const EMBEDDED_CATALOG: &str = include_str!("../../data/catalog.json");

#[derive(Debug, Clone, PartialEq)]
pub enum CatalogSource {
    Embedded,
    File(PathBuf),
}

impl CatalogSource {
    pub fn label(&self) -> String {
        match self {
            CatalogSource::Embedded => "embedded".to_string(),
            CatalogSource::File(path) => path.display().to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate tool id '{0}'")]
    DuplicateId(String),

    #[error("Tool '{id}' has an empty '{field}'")]
    BlankField { id: String, field: &'static str },

    #[error("Tool '{id}' has a malformed official_url '{url}': {reason}")]
    InvalidUrl {
        id: String,
        url: String,
        reason: String,
    },

    #[error("Tool '{id}' has rating {rating}, expected 0.0 – 5.0")]
    RatingOutOfRange { id: String, rating: f64 },
}

/// Reads and validates the catalog from `source`.
pub async fn load_catalog(source: &CatalogSource) -> Result<Catalog, CatalogError> {
    match source {
        CatalogSource::Embedded => parse_catalog(EMBEDDED_CATALOG, source.label()),
        CatalogSource::File(path) => {
            let raw = tokio::fs::read_to_string(path)
                .await
                .map_err(|e| CatalogError::Io {
                    path: path.clone(),
                    source: e,
                })?;
            parse_catalog(&raw, source.label())
        }
    }
}

/// Parses a JSON array of tools, rejecting the whole catalog on the first bad record.
pub fn parse_catalog(raw: &str, source: impl Into<String>) -> Result<Catalog, CatalogError> {
    let records: Vec<ToolRecord> = serde_json::from_str(raw)?;

    let mut ids = HashSet::with_capacity(records.len());
    for record in &records {
        validate_record(record)?;
        if !ids.insert(record.id.as_str()) {
            return Err(CatalogError::DuplicateId(record.id.clone()));
        }
    }

    Ok(Catalog::new(records, source))
}

fn validate_record(record: &ToolRecord) -> Result<(), CatalogError> {
    let required = [
        ("id", record.id.as_str()),
        ("name", record.name.as_str()),
        ("category", record.category.as_str()),
        ("pricing_model", record.pricing_model.as_str()),
        ("official_url", record.official_url.as_str()),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            return Err(CatalogError::BlankField {
                id: record.id.clone(),
                field,
            });
        }
    }

    validate_url(record)?;

    if !(0.0..=5.0).contains(&record.rating) {
        return Err(CatalogError::RatingOutOfRange {
            id: record.id.clone(),
            rating: record.rating,
        });
    }

    Ok(())
}

/// Well-formedness only: absolute http(s) URL with a host. Reachability is not checked.
fn validate_url(record: &ToolRecord) -> Result<(), CatalogError> {
    let invalid = |reason: String| CatalogError::InvalidUrl {
        id: record.id.clone(),
        url: record.official_url.clone(),
        reason,
    };

    let url = Url::parse(record.official_url.trim()).map_err(|e| invalid(e.to_string()))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
    }
    if url.host_str().is_none() {
        return Err(invalid("missing host".to_string()));
    }
    Ok(())
}
