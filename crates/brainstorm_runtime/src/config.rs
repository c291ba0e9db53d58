//! Runtime configuration.
//!
//! Settings are layered: built-in defaults, then environment variables, then
//! command-line arguments.

use std::path::PathBuf;
use std::str::FromStr;

use brainstorm_foundation::{Error, Result};
use brainstorm_lexicon::DataPaths;
use tracing::Level;

/// Environment variable naming the data directory.
pub const DATA_DIR_ENV: &str = "BRAINSTORM_DATA_DIR";
/// Environment variable holding a generator seed.
pub const SEED_ENV: &str = "BRAINSTORM_SEED";
/// Environment variable holding the log level (`error` … `trace`).
pub const LOG_ENV: &str = "BRAINSTORM_LOG";

/// Titles printed per request when subjects are given on the command line.
pub const DEFAULT_BATCH_COUNT: usize = 10;

/// Settings for one run of the front-end.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Root of the title and word lists.
    pub data_dir: PathBuf,
    /// Generator seed; `None` seeds from the operating system.
    pub seed: Option<u64>,
    /// Titles per request.
    pub count: Option<usize>,
    /// Subjects given on the command line. When set, the run is
    /// non-interactive.
    pub subjects: Option<String>,
    /// Print how each subject resolved.
    pub explain: bool,
    /// Validate the title library at start-up.
    pub self_check: bool,
    /// Maximum log level.
    pub log_level: Level,
    /// Print help and exit.
    pub show_help: bool,
    /// Print version and exit.
    pub show_version: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("resources"),
            seed: None,
            count: None,
            subjects: None,
            explain: false,
            self_check: true,
            log_level: Level::WARN,
            show_help: false,
            show_version: false,
        }
    }
}

impl RuntimeConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a configuration from the process environment and arguments.
    ///
    /// `args` includes the program name, as returned by `std::env::args`.
    ///
    /// # Errors
    ///
    /// Returns an error for malformed environment values or arguments.
    pub fn from_env_and_args(args: impl IntoIterator<Item = String>) -> Result<Self> {
        Self::new()
            .with_env(|key| std::env::var(key).ok())?
            .with_args(args.into_iter().skip(1))
    }

    /// Applies environment overrides read through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns an error if a seed or log level does not parse.
    pub fn with_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(dir) = lookup(DATA_DIR_ENV) {
            self.data_dir = PathBuf::from(dir);
        }
        if let Some(seed) = lookup(SEED_ENV) {
            self.seed = Some(parse_value(SEED_ENV, &seed)?);
        }
        if let Some(level) = lookup(LOG_ENV) {
            self.log_level = Level::from_str(level.trim()).map_err(|_| {
                config_error(format!("invalid {LOG_ENV} value: {level}"))
            })?;
        }
        Ok(self)
    }

    /// Applies command-line arguments (without the program name).
    ///
    /// # Errors
    ///
    /// Returns an error for unknown options, missing option values, or
    /// values that do not parse.
    pub fn with_args(mut self, args: impl IntoIterator<Item = String>) -> Result<Self> {
        let mut args = args.into_iter();
        let mut verbosity = 0u8;
        let mut subjects: Vec<String> = Vec::new();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => self.show_help = true,
                "-V" | "--version" => self.show_version = true,
                "--explain" => self.explain = true,
                "--no-check" => self.self_check = false,
                "-v" | "--verbose" => verbosity = verbosity.saturating_add(1),
                "-d" | "--data-dir" => {
                    self.data_dir = PathBuf::from(required_value(&arg, args.next())?);
                }
                "-n" | "--count" => {
                    let value = required_value(&arg, args.next())?;
                    self.count = Some(parse_value(&arg, &value)?);
                }
                "-s" | "--seed" => {
                    let value = required_value(&arg, args.next())?;
                    self.seed = Some(parse_value(&arg, &value)?);
                }
                other if other.starts_with('-') && other.len() > 1 => {
                    return Err(config_error(format!("unknown option: {other}")));
                }
                subject => subjects.push(subject.to_string()),
            }
        }

        if verbosity > 0 {
            self.log_level = match verbosity {
                1 => Level::INFO,
                2 => Level::DEBUG,
                _ => Level::TRACE,
            };
        }
        if !subjects.is_empty() {
            self.subjects = Some(subjects.join(" "));
        }
        Ok(self)
    }

    /// Sets the data directory.
    #[must_use]
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    /// Sets the generator seed.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Returns the data set locations.
    #[must_use]
    pub fn data_paths(&self) -> DataPaths {
        DataPaths::new(&self.data_dir)
    }

    /// Returns the number of titles to print for command-line subjects.
    #[must_use]
    pub fn batch_count(&self) -> usize {
        self.count.unwrap_or(DEFAULT_BATCH_COUNT)
    }
}

fn config_error(message: String) -> Error {
    Error::usage(message)
}

fn required_value(option: &str, value: Option<String>) -> Result<String> {
    value.ok_or_else(|| config_error(format!("{option} requires a value")))
}

fn parse_value<T: FromStr>(name: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| config_error(format!("invalid {name} value: {value}")))
}
