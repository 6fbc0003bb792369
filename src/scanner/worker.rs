use super::types::SkippedFile;
use crate::{
    condition::{matches, Condition},
    errors::domain::DomainError,
    fs_utils::json_stem,
    play::load_play,
};
use std::path::PathBuf;
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub(super) struct PlayFile {
    pub path: PathBuf,
    pub file_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum FileOutcome {
    Matched { display_name: String },
    Unmatched,
    Skipped(SkippedFile),
}

pub(super) fn evaluate_file(file: &PlayFile, conditions: &[Condition]) -> FileOutcome {
    let doc = match load_play(&file.path) {
        Ok(doc) => doc,
        Err(err) => {
            warn!(
                "skipping play file: path={} code={} err={}",
                file.path.display(),
                err.code_str(),
                err
            );
            return FileOutcome::Skipped(SkippedFile {
                file_id: file.file_id.clone(),
                code: err.code_str().to_string(),
                message: err.to_string(),
            });
        }
    };

    let characters = doc.character_set();
    if !matches(&characters, conditions) {
        debug!(file = %file.file_id, characters = characters.len(), "no match");
        return FileOutcome::Unmatched;
    }
    let display_name = doc.display_name(json_stem(&file.file_id));
    debug!(file = %file.file_id, display_name = %display_name, "matched");
    FileOutcome::Matched { display_name }
}
