//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and the immutable configuration handed to the library.

use std::path::PathBuf;
use std::time::Duration;

use clap::builder::TypedValueParser;
use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_CONCURRENCY_LIMIT, DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_USER_AGENT,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Command-line options.
///
/// Parsed by `clap` and converted into a [`Config`] once at startup.
///
/// # Examples
///
/// ```bash
/// # Basic usage
/// url_processor urls.txt
///
/// # At most 10 requests in flight, 3 second timeout
/// url_processor urls.txt -n 10 -t 3
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "url_processor",
    version,
    about = "url_processor sends url requests and processes responses",
    long_about = "url_processor reads urls from file, validates them, sends requests, \
                  outputs the size of response content and processing time"
)]
pub struct Opt {
    /// File with urls, one per line (`-` reads from stdin)
    #[arg(value_parser)]
    pub file: PathBuf,

    /// Number of simultaneous requests that app sends
    #[arg(
        short = 'n',
        long,
        visible_alias = "req-num",
        default_value_t = DEFAULT_CONCURRENCY_LIMIT,
        value_parser = clap::value_parser!(u64).range(1..).map(|n| n as usize)
    )]
    pub concurrency_limit: usize,

    /// How long a response will be waited for, in seconds
    #[arg(
        short = 't',
        long,
        visible_alias = "req-timeout",
        default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub request_timeout_seconds: u64,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,
}

/// Library configuration (no CLI dependencies).
///
/// Built once at startup and passed by reference into the dispatcher and
/// fetcher; nothing mutates it during a run.
///
/// # Examples
///
/// ```no_run
/// use url_processor::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     file: PathBuf::from("urls.txt"),
///     concurrency_limit: 10,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// File to read URLs from (`-` for stdin)
    pub file: PathBuf,

    /// Admission gate capacity: maximum requests in flight
    pub concurrency_limit: usize,

    /// Total timeout per HTTP request
    pub request_timeout: Duration,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file: PathBuf::from("urls.txt"),
            concurrency_limit: DEFAULT_CONCURRENCY_LIMIT,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
        }
    }
}

impl From<Opt> for Config {
    fn from(opt: Opt) -> Self {
        Self {
            file: opt.file,
            concurrency_limit: opt.concurrency_limit,
            request_timeout: Duration::from_secs(opt.request_timeout_seconds),
            user_agent: opt.user_agent,
            log_level: opt.log_level,
            log_format: opt.log_format,
        }
    }
}
