//! CLI 配置
//!
//! 把配置文件中的日志级别转换为 tracing 级别，并叠加命令行覆盖

use lexdfa_config::{LogLevel, LoggingConfig, Phase};
use tracing::Level;

/// CLI 日志配置：每个阶段的最终级别
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub global: Level,
    pub preprocess: Level,
    pub automaton: Level,
    pub analyzer: Level,
    pub stepper: Level,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::from_logging(&LoggingConfig::default(), None)
    }
}

impl LogConfig {
    /// 由配置文件构建；`override_level` 来自 `--log-level`，覆盖所有阶段
    pub fn from_logging(logging: &LoggingConfig, override_level: Option<LogLevel>) -> Self {
        let level = |phase| to_level(override_level.unwrap_or_else(|| logging.level_for(phase)));
        Self {
            global: to_level(override_level.unwrap_or(logging.level)),
            preprocess: level(Phase::Preprocess),
            automaton: level(Phase::Automaton),
            analyzer: level(Phase::Analyzer),
            stepper: level(Phase::Stepper),
        }
    }

    /// Get log level for a specific phase
    pub fn level_for(&self, phase: Phase) -> Level {
        match phase {
            Phase::Preprocess => self.preprocess,
            Phase::Automaton => self.automaton,
            Phase::Analyzer => self.analyzer,
            Phase::Stepper => self.stepper,
        }
    }
}

pub fn to_level(level: LogLevel) -> Level {
    match level {
        LogLevel::Error => Level::ERROR,
        LogLevel::Warn => Level::WARN,
        LogLevel::Info => Level::INFO,
        LogLevel::Debug => Level::DEBUG,
        LogLevel::Trace => Level::TRACE,
    }
}

/// Parse log level string (`silent` maps to errors only)
pub fn parse_log_level(s: &str) -> Option<LogLevel> {
    match s.to_lowercase().as_str() {
        "silent" | "error" => Some(LogLevel::Error),
        "warn" => Some(LogLevel::Warn),
        "info" => Some(LogLevel::Info),
        "debug" => Some(LogLevel::Debug),
        "trace" => Some(LogLevel::Trace),
        _ => None,
    }
}
