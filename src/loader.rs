use serde_json::Value;
use std::fs;
use std::path::Path;
use thiserror::Error;

mod entities;

pub use entities::{Entity, Property};

/// Errors raised while loading the entity dataset
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read input file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Input file '{path}' is not valid JSON: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Input file '{path}' must contain a JSON array of entities")]
    NotAnArray { path: String },

    #[error("Malformed entity at index {index}: {source}")]
    MalformedEntity {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Loads a JSON array file into a vector of Entity records
///
/// Each array element is decoded separately so a malformed record is
/// reported with its index instead of being silently dropped.
pub fn load_entities(path: impl AsRef<Path>) -> Result<Vec<Entity>, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.display().to_string(),
        source,
    })?;

    let value: Value = serde_json::from_str(&text).map_err(|source| LoadError::Json {
        path: path.display().to_string(),
        source,
    })?;

    let Value::Array(records) = value else {
        return Err(LoadError::NotAnArray {
            path: path.display().to_string(),
        });
    };

    entities_from_records(records)
}

/// Decodes raw JSON records into typed entities, failing fast on the first
/// malformed record
pub fn entities_from_records(records: Vec<Value>) -> Result<Vec<Entity>, LoadError> {
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            serde_json::from_value(record)
                .map_err(|source| LoadError::MalformedEntity { index, source })
        })
        .collect()
}
