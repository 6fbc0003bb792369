//! Find plays whose cast satisfies a set of AND/OR character conditions.
//!
//! ```no_run
//! use playfinder::condition::{collect_conditions, ConditionKind};
//! use std::path::Path;
//!
//! let conditions = collect_conditions([(ConditionKind::And, "Knight")]);
//! let result = playfinder::scanner::scan(Path::new("plays"), &conditions)?;
//! let (display_names, file_ids) = result.into_parts();
//! # Ok::<(), playfinder::scanner::ScanError>(())
//! ```

pub mod condition;
pub mod errors;
pub mod fs_utils;
pub mod play;
pub mod scanner;

pub use condition::{Condition, ConditionKind};
pub use scanner::{scan, scan_with_options, MatchResult, ScanError, ScanOptions, ScanOrder};
