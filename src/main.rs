mod cli;
mod settings;

use clap::Parser;
use cli::Cli;
use once_cell::sync::OnceCell;
use playfinder::errors::{
    api_error::ApiError,
    domain::{DomainError, ErrorCode},
};
use playfinder::fs_utils::{expand_path, require_directory};
use playfinder::scanner::{self, MatchResult};
use serde::Serialize;
use std::process::ExitCode;
use tracing::{debug, warn};

#[derive(Serialize)]
struct JsonOut<T: Serialize> {
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ApiError>,
}

fn init_logging() {
    static GUARD: OnceCell<tracing_appender::non_blocking::WorkerGuard> = OnceCell::new();
    let filter = || {
        tracing_subscriber::EnvFilter::from_default_env()
            .add_directive(tracing_subscriber::filter::LevelFilter::INFO.into())
    };
    let base = dirs_next::data_dir().unwrap_or_else(std::env::temp_dir);
    let log_dir = base.join("playfinder").join("logs");
    if let Err(e) = std::fs::create_dir_all(&log_dir) {
        eprintln!("Failed to create log dir {:?}: {}", log_dir, e);
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter())
            .with_writer(std::io::stderr)
            .try_init();
        return;
    }
    let file_appender = tracing_appender::rolling::never(&log_dir, "playfinder.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    let _ = GUARD.set(guard);
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_ansi(false)
        .with_writer(non_blocking);
    if let Err(e) = subscriber.try_init() {
        eprintln!("Failed to init tracing subscriber: {e}");
    }
    debug!(log_dir = ?log_dir, cwd = ?std::env::current_dir().ok(), "logging initialized");
}

fn invalid_directory(message: impl Into<String>) -> ApiError {
    ApiError::new(
        scanner::ScanErrorCode::InvalidDirectory.as_code_str(),
        message,
    )
}

fn run(cli: &Cli) -> Result<MatchResult, ApiError> {
    let conditions = cli.conditions().map_err(|e| e.to_api_error())?;

    let raw_dir = match cli.dir.as_deref() {
        Some(dir) => dir.to_string(),
        None => settings::last_directory().unwrap_or_default(),
    };
    let directory = expand_path(raw_dir.trim())
        .and_then(|path| require_directory(&path))
        .map_err(|e| invalid_directory(format!("Please choose a valid directory: {e}")))?;

    // Only a directory that passed validation is remembered.
    if let Some(dir) = cli.dir.as_deref() {
        if let Err(e) = settings::remember_directory(dir) {
            warn!("could not save last directory: {e}");
        }
    }

    scanner::map_api_result(scanner::scan_with_options(
        &directory,
        &conditions,
        &cli.scan_options(),
    ))
}

fn print_text(result: &MatchResult) {
    for skipped in &result.skipped {
        eprintln!("warning: skipped {}: {}", skipped.file_id, skipped.message);
    }
    if result.is_empty() {
        println!("No plays matched the given conditions.");
        return;
    }
    for (display_name, file_id) in result.iter() {
        println!("{display_name}\t{file_id}");
    }
}

fn print_json<T: Serialize>(out: &JsonOut<T>) {
    match serde_json::to_string_pretty(out) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("error: failed to encode output: {e}"),
    }
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(result) => {
            if cli.json {
                print_json(&JsonOut {
                    ok: true,
                    data: Some(&result),
                    error: None,
                });
            } else {
                print_text(&result);
            }
            ExitCode::SUCCESS
        }
        Err(error) => {
            warn!(code = %error.code, "search failed: {}", error.message);
            if cli.json {
                print_json(&JsonOut::<()> {
                    ok: false,
                    data: None,
                    error: Some(error),
                });
            } else {
                eprintln!("error: {error}");
            }
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use std::time::{Duration, SystemTime};

    fn uniq_path(label: &str) -> PathBuf {
        let ts = SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .unwrap_or(Duration::from_secs(0))
            .as_nanos();
        std::env::temp_dir().join(format!("playfinder-main-test-{label}-{ts}"))
    }

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("playfinder").chain(args.iter().copied())).unwrap()
    }

    // One test owns PLAYFINDER_SETTINGS so parallel tests never race on it.
    #[test]
    fn run_remembers_only_valid_directories() {
        let base = uniq_path("run");
        let plays = base.join("plays");
        fs::create_dir_all(&plays).unwrap();
        fs::write(
            plays.join("hero.json"),
            r#"[{"id":"_meta","name":"The Hero's Tale"},{"id":"1","name":"Knight"}]"#,
        )
        .unwrap();
        let settings_file = base.join("settings.json");
        std::env::set_var("PLAYFINDER_SETTINGS", &settings_file);

        let missing = base.join("no-such-dir");
        let missing = missing.to_string_lossy();
        let err = run(&cli(&["--dir", &missing, "Knight"])).unwrap_err();
        assert_eq!(err.code, "invalid_directory");
        assert!(!settings_file.exists());

        let plays_arg = plays.to_string_lossy();
        let result = run(&cli(&["--dir", &plays_arg, "Knight"])).unwrap();
        assert_eq!(result.file_ids, vec!["hero.json"]);
        let saved = fs::read_to_string(&settings_file).unwrap();
        assert!(saved.contains("lastDirectory"));

        let err = run(&cli(&["--dir", &missing, "Knight"])).unwrap_err();
        assert_eq!(err.code, "invalid_directory");

        let result = run(&cli(&["Knight"])).unwrap();
        assert_eq!(result.display_names, vec!["The Hero's Tale"]);

        let err = run(&cli(&["   "])).unwrap_err();
        assert_eq!(err.code, "no_conditions");

        std::env::remove_var("PLAYFINDER_SETTINGS");
        let _ = fs::remove_dir_all(&base);
    }
}
