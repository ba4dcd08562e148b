//! Entity snapshot files
//!
//! A snapshot is either the cache's normalized `{ "ids": [...], "entities":
//! {...} }` object or a plain JSON array of entities, as returned by the list
//! endpoints.

use serde::de::DeserializeOwned;
use std::path::Path;
use technotes_core::{Entity, EntityState};

use crate::error::{CliError, Result};

/// Read a snapshot file
pub fn load<T>(path: &Path) -> Result<EntityState<T>>
where
    T: Entity + DeserializeOwned,
{
    let raw = std::fs::read_to_string(path).map_err(|source| CliError::SnapshotRead {
        path: path.to_path_buf(),
        source,
    })?;
    let state = parse(&raw).map_err(|source| CliError::SnapshotParse {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), entities = state.len(), "Loaded snapshot");
    Ok(state)
}

/// Parse snapshot JSON in either accepted shape
pub fn parse<T>(raw: &str) -> serde_json::Result<EntityState<T>>
where
    T: Entity + DeserializeOwned,
{
    let value: serde_json::Value = serde_json::from_str(raw)?;
    if value.is_array() {
        let entities: Vec<T> = serde_json::from_value(value)?;
        Ok(EntityState::from_entities(entities))
    } else {
        serde_json::from_value(value)
    }
}
