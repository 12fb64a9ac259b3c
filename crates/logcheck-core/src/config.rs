//! Configuration types for logcheck.
//!
//! [`Config::load`] layers, lowest priority first: the embedded defaults,
//! `logcheck.toml` in the working directory (or an explicit file), and
//! `LOGCHECK_*` environment variables such as `LOGCHECK_TRACE__OUTPUT=stderr`.
//! [`Config::defaults`] returns the embedded defaults without touching the
//! filesystem or environment.

use serde::Deserialize;
use std::path::Path;

use crate::runner::RunOptions;
use crate::trace::TraceTarget;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[trace]
output = "stdout"
banner = true

[report]
show_counts = false
"#;

/// Looked up in the working directory when no explicit file is given.
pub const DEFAULT_CONFIG_FILE: &str = "logcheck.toml";

const ENV_PREFIX: &str = "LOGCHECK";

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub trace: TraceConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

/// `[trace]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct TraceConfig {
    /// `stdout`, `stderr`, `none`, or a file path.
    #[serde(default = "default_output")]
    pub output: String,
    /// Write a `-- logcheck --` line before any results.
    #[serde(default = "default_banner")]
    pub banner: bool,
}

fn default_output() -> String { "stdout".to_string() }
fn default_banner() -> bool { true }

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            output: default_output(),
            banner: default_banner(),
        }
    }
}

/// `[report]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportConfig {
    #[serde(default)]
    pub show_counts: bool,
}

/// `LOGCHECK_SECTION__KEY`: one underscore after the prefix, two between
/// section and key.
fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
}

impl Config {
    /// Load configuration. `explicit` must exist when given; the default
    /// `logcheck.toml` is optional.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        Self::load_layered(explicit, environment())
    }

    fn load_layered(explicit: Option<&Path>, env: config::Environment) -> anyhow::Result<Self> {
        let file = match explicit {
            Some(path) => config::File::from(path).required(true),
            None => config::File::new(DEFAULT_CONFIG_FILE, config::FileFormat::Toml).required(false),
        };

        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(file)
            .add_source(env)
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// The built-in defaults.
    pub fn defaults() -> Self {
        Self::default()
    }

    pub fn trace_target(&self) -> TraceTarget {
        let Ok(target) = self.trace.output.parse::<TraceTarget>();
        target
    }

    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            show_counts: self.report.show_counts,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
