use clap::Parser;
use playfinder::condition::{
    collect_conditions, Condition, ConditionError, ConditionErrorCode, ConditionKind,
};
use playfinder::scanner::{ScanOptions, ScanOrder};

#[derive(Parser, Debug)]
#[command(
    name = "playfinder",
    version,
    about = "Find plays whose cast matches AND/OR character conditions"
)]
pub struct Cli {
    #[arg(
        long,
        short = 'd',
        help = "Directory of play .json files (defaults to the last one used)"
    )]
    pub dir: Option<String>,
    #[arg(long = "and", value_name = "NAME", help = "Character that must be in the cast")]
    pub and_terms: Vec<String>,
    #[arg(
        long = "or",
        value_name = "NAME",
        help = "Character of which at least one must be in the cast"
    )]
    pub or_terms: Vec<String>,
    #[arg(value_name = "CONDITION", help = "Conditions as and:NAME, or:NAME or NAME")]
    pub conditions: Vec<String>,
    #[arg(long, help = "Sort results by file name instead of directory order")]
    pub sorted: bool,
    #[arg(long, help = "Load play files in parallel")]
    pub parallel: bool,
    #[arg(long, help = "Output machine-readable JSON")]
    pub json: bool,
}

impl Cli {
    /// Flag terms first, then positional ones. Blank terms are dropped.
    pub fn conditions(&self) -> Result<Vec<Condition>, ConditionError> {
        let mut out = collect_conditions(
            self.and_terms
                .iter()
                .map(|t| (ConditionKind::And, t))
                .chain(self.or_terms.iter().map(|t| (ConditionKind::Or, t))),
        );
        for raw in &self.conditions {
            match raw.parse::<Condition>() {
                Ok(c) => out.push(c),
                Err(e) if e.code() == ConditionErrorCode::EmptyTerm => continue,
                Err(e) => return Err(e),
            }
        }
        Ok(out)
    }

    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            order: if self.sorted {
                ScanOrder::FileName
            } else {
                ScanOrder::Native
            },
            parallel: self.parallel,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("playfinder").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn gathers_flag_and_positional_conditions() {
        let cli = parse(&[
            "--dir", "plays", "--and", "Knight", "--or", "Wizard", "or:Dragon", "Imp",
        ]);
        let rendered: Vec<String> = cli
            .conditions()
            .unwrap()
            .iter()
            .map(|c| c.to_string())
            .collect();
        assert_eq!(
            rendered,
            vec!["AND Knight", "OR Wizard", "OR Dragon", "AND Imp"]
        );
        assert_eq!(cli.dir.as_deref(), Some("plays"));
    }

    #[test]
    fn blank_terms_are_dropped() {
        let cli = parse(&["--and", "  ", "or: "]);
        assert!(cli.conditions().unwrap().is_empty());
    }

    #[test]
    fn bad_kind_prefix_is_an_error() {
        let cli = parse(&["xor:Knight"]);
        let err = cli.conditions().unwrap_err();
        assert_eq!(err.code(), ConditionErrorCode::InvalidKind);
    }

    #[test]
    fn options_follow_flags() {
        let cli = parse(&["--sorted", "--parallel", "Knight"]);
        let options = cli.scan_options();
        assert_eq!(options.order, ScanOrder::FileName);
        assert!(options.parallel);

        let cli = parse(&["Knight"]);
        assert_eq!(cli.scan_options().order, ScanOrder::Native);
        assert!(!cli.json);
    }
}
