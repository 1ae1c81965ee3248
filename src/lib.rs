//! Lexdfa - table-driven DFA lexical analyzer
//!
//! Turns source text into classified tokens, explains invalid character
//! sequences with suggestions, and can replay the automaton step by step.
//!
//! # Architecture
//!
//! ```text
//! lexdfa-config/  - Configuration data (serde, no logic)
//! lexdfa-core/    - Automaton, analyzer, diagnostics, stepper (no IO)
//! lexdfa-cli/     - Command line front end
//! src/            - Facade: global config, file-level API, error type
//! ```
//!
//! # Quick Start
//!
//! ```
//! use lexdfa::quick_analyze;
//!
//! let result = quick_analyze("SI x = 1;");
//! assert_eq!(result.tokens.len(), 4);
//! assert!(!result.has_errors());
//! ```

// API 层（对外接口）
pub mod api;

// 全局配置
pub mod config;

// 重导出常用类型
pub use api::{analyze_file, analyze_source, load_config, stepper, LexdfaError};
pub use config::config;
pub use lexdfa_config::{
    AnalyzerConfig, LexdfaConfig, LogLevel, LoggingConfig, OutputConfig, OutputFormat, Phase,
};
pub use lexdfa_core::{
    analyze, render_report, AnalysisResult, Analyzer, Automaton, ErrorCause, LexicalError,
    Position, State, Step, StepOutcome, Stepper, Summary, SuggestionRule, Token, TokenKind,
};

/// 初始化全局配置
///
/// # Errors
/// 已初始化时返回 `LexdfaError::AlreadyInitialized`
pub fn init(config: LexdfaConfig) -> Result<(), LexdfaError> {
    config::init(config)
}

/// 使用全局配置（未初始化时为默认配置）分析源码
pub fn quick_analyze(source: &str) -> AnalysisResult {
    analyze_source(source, config::config())
}
