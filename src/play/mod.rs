//! Loading a single play file into typed records.

mod error;
mod record;

pub use error::{PlayError, PlayErrorCode, PlayResult};
pub use record::{PlayRecord, META_ID};

use serde_json::{Map, Value};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::debug;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

pub type CharacterSet = HashSet<String>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayDocument {
    pub records: Vec<PlayRecord>,
}

impl PlayDocument {
    pub fn from_slice(path: &Path, bytes: &[u8]) -> PlayResult<Self> {
        let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
        let objects: Vec<Map<String, Value>> =
            serde_json::from_slice(bytes).map_err(|e| PlayError::from_json_error(path, e))?;
        Ok(Self {
            records: objects.iter().map(PlayRecord::from_object).collect(),
        })
    }

    /// Title from the first `_meta` record, if that record carries a non-empty name.
    pub fn title(&self) -> Option<&str> {
        self.records.iter().find_map(|record| match record {
            PlayRecord::Meta { name } => Some(name.as_deref()),
            _ => None,
        })?
        .filter(|name| !name.is_empty())
    }

    pub fn display_name(&self, fallback: &str) -> String {
        self.title().unwrap_or(fallback).to_string()
    }

    pub fn character_set(&self) -> CharacterSet {
        self.records
            .iter()
            .filter_map(|record| match record {
                PlayRecord::Character { name } => Some(name.clone()),
                _ => None,
            })
            .collect()
    }
}

/// Reads and parses one play file. The handle is released before returning.
pub fn load_play(path: &Path) -> PlayResult<PlayDocument> {
    let bytes = fs::read(path).map_err(|e| PlayError::from_io_error(path, e))?;
    let doc = PlayDocument::from_slice(path, &bytes)?;
    debug!(
        path = %path.display(),
        records = doc.records.len(),
        "play loaded"
    );
    Ok(doc)
}
