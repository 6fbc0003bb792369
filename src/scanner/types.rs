use serde::Serialize;

/// A `.json` file that could not be loaded. The scan carries on without it.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SkippedFile {
    pub file_id: String,
    pub code: String,
    pub message: String,
}

/// Parallel result columns: index `i` of both vectors describes the same file.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub display_names: Vec<String>,
    pub file_ids: Vec<String>,
    pub skipped: Vec<SkippedFile>,
    pub scanned: usize,
}

impl MatchResult {
    pub(super) fn push_match(&mut self, display_name: String, file_id: String) {
        self.display_names.push(display_name);
        self.file_ids.push(file_id);
    }

    pub fn len(&self) -> usize {
        self.file_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.file_ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.display_names
            .iter()
            .map(String::as_str)
            .zip(self.file_ids.iter().map(String::as_str))
    }

    pub fn into_parts(self) -> (Vec<String>, Vec<String>) {
        (self.display_names, self.file_ids)
    }
}
