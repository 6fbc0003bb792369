//! Directory scan: load every `.json` play and keep the ones whose cast
//! satisfies the conditions.

mod error;
mod types;
mod worker;

pub use error::{map_api_result, ScanError, ScanErrorCode, ScanResult};
pub use types::{MatchResult, SkippedFile};

use self::worker::{evaluate_file, FileOutcome, PlayFile};
use crate::{
    condition::Condition,
    fs_utils::{is_json_file_name, require_directory},
};
use rayon::prelude::*;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScanOrder {
    /// Whatever order `read_dir` yields. Not stable across platforms.
    #[default]
    Native,
    FileName,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ScanOptions {
    pub order: ScanOrder,
    /// Load files on the rayon pool. Output order is unchanged.
    pub parallel: bool,
}

pub fn scan(directory: &Path, conditions: &[Condition]) -> ScanResult<MatchResult> {
    scan_with_options(directory, conditions, &ScanOptions::default())
}

pub fn scan_with_options(
    directory: &Path,
    conditions: &[Condition],
    options: &ScanOptions,
) -> ScanResult<MatchResult> {
    let directory = require_directory(directory).map_err(ScanError::invalid_directory)?;
    if conditions.is_empty() {
        return Err(ScanError::no_conditions());
    }

    let files = list_play_files(&directory, options.order)?;
    debug!(
        dir = %directory.display(),
        files = files.len(),
        conditions = conditions.len(),
        parallel = options.parallel,
        "scan start"
    );

    let outcomes: Vec<FileOutcome> = if options.parallel {
        files
            .par_iter()
            .map(|file| evaluate_file(file, conditions))
            .collect()
    } else {
        files
            .iter()
            .map(|file| evaluate_file(file, conditions))
            .collect()
    };

    let mut result = MatchResult {
        scanned: files.len(),
        ..MatchResult::default()
    };
    for (file, outcome) in files.into_iter().zip(outcomes) {
        match outcome {
            FileOutcome::Matched { display_name } => result.push_match(display_name, file.file_id),
            FileOutcome::Unmatched => {}
            FileOutcome::Skipped(skipped) => result.skipped.push(skipped),
        }
    }

    info!(
        dir = %directory.display(),
        scanned = result.scanned,
        matched = result.len(),
        skipped = result.skipped.len(),
        "scan finished"
    );
    Ok(result)
}

fn list_play_files(directory: &Path, order: ScanOrder) -> ScanResult<Vec<PlayFile>> {
    let iter = fs::read_dir(directory).map_err(|e| {
        ScanError::new(
            ScanErrorCode::InvalidDirectory,
            format!("Please choose a valid directory: cannot list {}: {e}", directory.display()),
        )
    })?;

    let mut files = Vec::new();
    for entry in iter {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                debug!("scan read_dir entry failed: dir={} err={}", directory.display(), err);
                continue;
            }
        };
        let file_id = entry.file_name().to_string_lossy().into_owned();
        if is_json_file_name(&file_id) {
            files.push(PlayFile {
                path: entry.path(),
                file_id,
            });
        }
    }

    if order == ScanOrder::FileName {
        files.sort_by(|a, b| a.file_id.cmp(&b.file_id));
    }
    Ok(files)
}
