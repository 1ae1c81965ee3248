//! Lexdfa Config - Pure configuration data structures
//!
//! This crate contains only data structures, no logic or global state.
//! It serves as the shared configuration vocabulary across all Lexdfa crates.

use serde::{Deserialize, Serialize};

/// Top-level configuration, usually loaded from `lexdfa.json`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexdfaConfig {
    /// Analyzer behavior
    pub analyzer: AnalyzerConfig,
    /// Per-phase log levels
    pub logging: LoggingConfig,
    /// CLI output options
    pub output: OutputConfig,
}

/// Configuration for the analyzer driver
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Re-run every closed lexeme through a fresh automaton to derive its kind.
    /// When disabled the live automaton's terminal state is used directly.
    pub replay_on_close: bool,
    /// Whether per-lexeme transition traces are written to the analysis log
    pub record_transitions: bool,
}

/// Log level names accepted in configuration files
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Global default level
    pub level: LogLevel,
    /// Comment preprocessing level (None falls back to `level`)
    pub preprocess: Option<LogLevel>,
    pub automaton: Option<LogLevel>,
    pub analyzer: Option<LogLevel>,
    pub stepper: Option<LogLevel>,
}

/// Report rendering selected by the CLI
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Full textual report
    Report,
    /// One token per line
    Tokens,
    /// Machine-readable JSON
    Json,
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Echo the numbered source before the results
    pub show_source: bool,
}

/// Analysis phase enum for phase-specific configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Preprocess,
    Automaton,
    Analyzer,
    Stepper,
}

impl Phase {
    pub const ALL: [Phase; 4] = [
        Phase::Preprocess,
        Phase::Automaton,
        Phase::Analyzer,
        Phase::Stepper,
    ];

    /// Get the string name of the phase
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Preprocess => "preprocess",
            Phase::Automaton => "automaton",
            Phase::Analyzer => "analyzer",
            Phase::Stepper => "stepper",
        }
    }

    /// Get the log target name for this phase
    pub fn target(&self) -> String {
        format!("lexdfa::{}", self.as_str())
    }
}

impl LoggingConfig {
    /// Effective level for a phase: the phase override, or the global level
    pub fn level_for(&self, phase: Phase) -> LogLevel {
        let specific = match phase {
            Phase::Preprocess => self.preprocess,
            Phase::Automaton => self.automaton,
            Phase::Analyzer => self.analyzer,
            Phase::Stepper => self.stepper,
        };
        specific.unwrap_or(self.level)
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            replay_on_close: true,
            record_transitions: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Warn,
            preprocess: None,
            automaton: None,
            analyzer: None,
            stepper: None,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Report,
            show_source: false,
        }
    }
}
