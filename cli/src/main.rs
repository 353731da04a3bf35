//! mobspawn CLI - list, decode and validate mob spawn reason names.
//!
//! Decoding policy is resolved in order: `--matching` flag, then the
//! `MOBSPAWN_MATCHING` environment variable, then `[decode] matching` in the
//! config file, then exact matching.

mod validate;

use std::env;
use std::ffi::OsString;
use std::fs;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use mobspawn_config::{ConfigError, MobspawnConfig};
use mobspawn_types::{MobSpawnReason, NameMatching};

use crate::validate::validate_names;

const MATCHING_ENV: &str = "MOBSPAWN_MATCHING";

#[derive(Parser)]
#[command(name = "mobspawn", version)]
#[command(about = "List, decode and validate mob spawn reason names")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every spawn reason in declaration order
    List {
        /// Print a JSON array instead of one name per line
        #[arg(long)]
        json: bool,
    },
    /// Decode names and print their canonical form (exit 1 if any is unknown)
    Decode {
        #[arg(required = true)]
        names: Vec<String>,
        /// Name matching policy: exact or ascii-case-insensitive
        #[arg(long, value_parser = NameMatching::parse)]
        matching: Option<NameMatching>,
    },
    /// Check a file with one name per line (exit 1 if any is unknown)
    Validate {
        file: PathBuf,
        /// Name matching policy: exact or ascii-case-insensitive
        #[arg(long, value_parser = NameMatching::parse)]
        matching: Option<NameMatching>,
    },
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // stdout carries command output; logs stay on stderr.
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_ansi(io::stderr().is_terminal()),
        )
        .with(env_filter)
        .init();
}

fn main() -> Result<ExitCode> {
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::List { json } => {
            println!("{}", render_list(json)?);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Decode { names, matching } => {
            let matching =
                resolve_matching(matching, env::var_os(MATCHING_ENV), MobspawnConfig::load)?;
            let failed = decode_names(&names, matching);
            Ok(if failed == 0 {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Commands::Validate { file, matching } => {
            let matching =
                resolve_matching(matching, env::var_os(MATCHING_ENV), MobspawnConfig::load)?;
            validate_file(&file, matching)
        }
    }
}

/// The config file is only read when neither the flag nor the env var decide.
fn resolve_matching(
    flag: Option<NameMatching>,
    env_value: Option<OsString>,
    load_config: impl FnOnce() -> Result<Option<MobspawnConfig>, ConfigError>,
) -> Result<NameMatching> {
    if let Some(matching) = flag {
        return Ok(matching);
    }

    if let Some(matching) = matching_from_env(env_value)? {
        return Ok(matching);
    }

    let config = load_config().context("Failed to load config")?;
    let matching = config
        .map(|config| config.matching())
        .unwrap_or_default();
    tracing::debug!(%matching, "Resolved name matching");
    Ok(matching)
}

/// Blank counts as unset; non-UTF-8 is an error rather than being ignored.
fn matching_from_env(value: Option<OsString>) -> Result<Option<NameMatching>> {
    let Some(value) = value else {
        return Ok(None);
    };
    let value = value
        .into_string()
        .map_err(|raw| anyhow!("{MATCHING_ENV} is not valid UTF-8: {}", raw.to_string_lossy()))?;
    if value.trim().is_empty() {
        return Ok(None);
    }
    NameMatching::parse(&value)
        .map(Some)
        .with_context(|| format!("Invalid {MATCHING_ENV}"))
}

fn render_list(json: bool) -> Result<String> {
    if json {
        return serde_json::to_string_pretty(MobSpawnReason::all())
            .context("Failed to serialize spawn reasons");
    }
    Ok(MobSpawnReason::canonical_names().join("\n"))
}

/// Returns how many names failed to decode.
fn decode_names(names: &[String], matching: NameMatching) -> usize {
    let mut failed = 0usize;
    for raw in names {
        match matching.decode(raw) {
            Ok(reason) => println!("{reason}"),
            Err(err) => {
                eprintln!("error: {err}");
                failed += 1;
            }
        }
    }

    if failed > 0 {
        tracing::warn!(failed, total = names.len(), "Some names did not decode");
    }
    failed
}

fn validate_file(file: &Path, matching: NameMatching) -> Result<ExitCode> {
    let content = fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;

    let report = validate_names(&content, matching);
    for rejection in &report.rejections {
        println!("{}:{}: {}", file.display(), rejection.line, rejection.error);
    }
    println!("{}", report.summary());

    Ok(if report.is_clean() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
