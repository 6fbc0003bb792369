//! Character-name conditions and the AND/OR matcher.

mod error;
mod eval;

pub use error::{ConditionError, ConditionErrorCode};
pub use eval::matches;

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ConditionKind {
    And,
    Or,
}

impl ConditionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
        }
    }
}

impl fmt::Display for ConditionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConditionKind {
    type Err = ConditionError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "AND" => Ok(Self::And),
            "OR" => Ok(Self::Or),
            _ => Err(ConditionError::new(
                ConditionErrorCode::InvalidKind,
                format!("Unknown condition kind '{raw}', expected AND or OR"),
            )),
        }
    }
}

/// A trimmed, non-empty character name tagged with how it combines.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Condition {
    kind: ConditionKind,
    term: String,
}

impl Condition {
    /// Returns `None` for whitespace-only terms.
    pub fn new(kind: ConditionKind, term: impl AsRef<str>) -> Option<Self> {
        let term = term.as_ref().trim();
        if term.is_empty() {
            return None;
        }
        Some(Self {
            kind,
            term: term.to_string(),
        })
    }

    pub fn kind(&self) -> ConditionKind {
        self.kind
    }

    pub fn term(&self) -> &str {
        &self.term
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.term)
    }
}

/// Parses `and:Name`, `or:Name` or a bare `Name` (AND).
impl FromStr for Condition {
    type Err = ConditionError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let (kind, term) = match raw.split_once(':') {
            Some((prefix, term)) => match prefix.parse::<ConditionKind>() {
                Ok(kind) => (kind, term),
                // A colon inside a plain name is not a prefix.
                Err(_) if !prefix.trim().is_empty() && prefix.contains(char::is_whitespace) => {
                    (ConditionKind::And, raw)
                }
                Err(err) => return Err(err),
            },
            None => (ConditionKind::And, raw),
        };
        Condition::new(kind, term).ok_or_else(|| {
            ConditionError::new(
                ConditionErrorCode::EmptyTerm,
                format!("Condition '{raw}' has an empty character name"),
            )
        })
    }
}

/// Builds the condition list from raw rows, dropping whitespace-only terms.
pub fn collect_conditions<I, S>(rows: I) -> Vec<Condition>
where
    I: IntoIterator<Item = (ConditionKind, S)>,
    S: AsRef<str>,
{
    rows.into_iter()
        .filter_map(|(kind, term)| Condition::new(kind, term))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_trims_and_rejects_blank_terms() {
        let c = Condition::new(ConditionKind::Or, "  Knight \t").unwrap();
        assert_eq!(c.term, "Knight");
        assert_eq!(c.kind, ConditionKind::Or);
        assert!(Condition::new(ConditionKind::And, "   ").is_none());
        assert!(Condition::new(ConditionKind::And, "").is_none());
    }

    #[test]
    fn collect_keeps_order_and_drops_blanks() {
        let conditions = collect_conditions([
            (ConditionKind::And, " Knight"),
            (ConditionKind::Or, "  "),
            (ConditionKind::Or, "Wizard "),
            (ConditionKind::And, "Knight"),
        ]);
        let rendered: Vec<String> = conditions.iter().map(|c| c.to_string()).collect();
        assert_eq!(rendered, vec!["AND Knight", "OR Wizard", "AND Knight"]);
    }

    #[test]
    fn collect_of_only_blanks_is_empty() {
        let conditions = collect_conditions([(ConditionKind::And, " "), (ConditionKind::Or, "")]);
        assert!(conditions.is_empty());
    }

    #[test]
    fn kind_parses_case_insensitively() {
        assert_eq!("and".parse::<ConditionKind>().unwrap(), ConditionKind::And);
        assert_eq!(" OR ".parse::<ConditionKind>().unwrap(), ConditionKind::Or);
        let err = "xor".parse::<ConditionKind>().unwrap_err();
        assert_eq!(err.code(), ConditionErrorCode::InvalidKind);
    }

    #[test]
    fn parses_textual_conditions() {
        let c: Condition = "or:Wizard".parse().unwrap();
        assert_eq!((c.kind, c.term.as_str()), (ConditionKind::Or, "Wizard"));

        let c: Condition = "AND: Knight ".parse().unwrap();
        assert_eq!((c.kind, c.term.as_str()), (ConditionKind::And, "Knight"));

        let c: Condition = "Dragon".parse().unwrap();
        assert_eq!((c.kind, c.term.as_str()), (ConditionKind::And, "Dragon"));

        let c: Condition = "Lady of: the Lake".parse().unwrap();
        assert_eq!(c.term, "Lady of: the Lake");
    }

    #[test]
    fn rejects_bad_textual_conditions() {
        let err = "xor:Knight".parse::<Condition>().unwrap_err();
        assert_eq!(err.code(), ConditionErrorCode::InvalidKind);

        let err = "or:   ".parse::<Condition>().unwrap_err();
        assert_eq!(err.code(), ConditionErrorCode::EmptyTerm);
    }
}
