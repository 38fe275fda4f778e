//! Runtime Configuration
//!
//! All knobs of a population run live in [`Settings`], which is built once in
//! `main` and handed to each component at construction. Values come from
//! defaults, then `XKCD_*` environment variables, then command-line flags.

use anyhow::{Context, Result};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://xkcd.com/";
pub const DEFAULT_JSON_SUFFIX: &str = "/info.0.json";
pub const DEFAULT_OUTPUT: &str = "./XKCDCorpus.json";
pub const DEFAULT_WORKERS: usize = 8;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
/// Largest ID the bound finder may probe before giving up.
pub const DEFAULT_MAX_PROBE_ID: i64 = 100_000;
/// Fixed limit used by `--test-limit` when no value follows the flag.
pub const TEST_LIMIT: i64 = 10;

/// How the upper end of the ID range is determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitMode {
    /// Probe the endpoint with exponential + binary search.
    Discover,
    /// Use a known limit and skip discovery.
    Fixed(i64),
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub endpoint: String,
    pub json_suffix: String,
    pub request_timeout: Duration,
    pub workers: usize,
    pub limit: LimitMode,
    pub max_probe_id: i64,
    pub output_path: PathBuf,
    /// When set, the binary restores this snapshot instead of populating.
    pub load_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            json_suffix: DEFAULT_JSON_SUFFIX.to_string(),
            request_timeout: DEFAULT_TIMEOUT,
            workers: DEFAULT_WORKERS,
            limit: LimitMode::Discover,
            max_probe_id: DEFAULT_MAX_PROBE_ID,
            output_path: PathBuf::from(DEFAULT_OUTPUT),
            load_path: None,
        }
    }
}

impl Settings {
    /// Defaults overridden by any `XKCD_*` variables present in the environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Settings::from_env`] but reads variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();

        if let Some(endpoint) = lookup("XKCD_ENDPOINT") {
            settings.endpoint = endpoint;
        }
        if let Some(suffix) = lookup("XKCD_JSON_SUFFIX") {
            settings.json_suffix = suffix;
        }
        if let Some(raw) = lookup("XKCD_TIMEOUT_MS") {
            settings.request_timeout = Duration::from_millis(parse_value("XKCD_TIMEOUT_MS", &raw)?);
        }
        if let Some(raw) = lookup("XKCD_WORKERS") {
            settings.workers = parse_value("XKCD_WORKERS", &raw)?;
        }
        if let Some(raw) = lookup("XKCD_TEST_LIMIT") {
            settings.limit = LimitMode::Fixed(parse_value("XKCD_TEST_LIMIT", &raw)?);
        }
        if let Some(raw) = lookup("XKCD_MAX_PROBE_ID") {
            settings.max_probe_id = parse_value("XKCD_MAX_PROBE_ID", &raw)?;
        }
        if let Some(output) = lookup("XKCD_OUTPUT") {
            settings.output_path = PathBuf::from(output);
        }

        Ok(settings)
    }

    /// Applies command-line flags on top of the current values.
    ///
    /// `args` excludes the program name. Unrecognized arguments are skipped.
    pub fn apply_args(&mut self, args: &[String]) -> Result<()> {
        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--workers" => {
                    self.workers = parse_value("--workers", flag_value(args, i)?)?;
                    i += 2;
                }
                "--test-limit" => match args.get(i + 1).filter(|v| !v.starts_with("--")) {
                    Some(raw) => {
                        self.limit = LimitMode::Fixed(parse_value("--test-limit", raw)?);
                        i += 2;
                    }
                    None => {
                        self.limit = LimitMode::Fixed(TEST_LIMIT);
                        i += 1;
                    }
                },
                "--output" => {
                    self.output_path = PathBuf::from(flag_value(args, i)?);
                    i += 2;
                }
                "--endpoint" => {
                    self.endpoint = flag_value(args, i)?.to_string();
                    i += 2;
                }
                "--load" => {
                    self.load_path = Some(PathBuf::from(flag_value(args, i)?));
                    i += 2;
                }
                _ => {
                    i += 1;
                }
            }
        }
        Ok(())
    }
}

fn flag_value(args: &[String], i: usize) -> Result<&str> {
    args.get(i + 1)
        .map(String::as_str)
        .with_context(|| format!("{} requires a value", args[i]))
}

fn parse_value<T>(name: &str, raw: &str) -> Result<T>
where
    T: FromStr,
    <T as FromStr>::Err: std::error::Error + Send + Sync + 'static,
{
    raw.trim()
        .parse()
        .with_context(|| format!("invalid value for {}: {:?}", name, raw))
}
