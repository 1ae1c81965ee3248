//! Lexdfa Core - table-driven DFA lexer (pure logic, no IO)
//!
//! Contains the automaton, comment preprocessing, the analyzer driver with
//! its diagnostics, report rendering and the stepper used by debuggers.
//! Only operates on in-memory text, no file IO or terminal output.
//!
//! Configuration is passed explicitly via parameters, not via global state.

pub mod analyzer;
pub mod automaton;
pub mod position;
pub mod stepper;
pub mod token;

// Re-export common types
pub use analyzer::{
    analyze, render_report, AnalysisResult, Analyzer, ErrorCause, LexemeFrequency, LexicalError,
    Summary, SuggestionRule,
};
pub use automaton::{Automaton, CharClass, State, TraceStep};
pub use position::Position;
pub use stepper::{Step, StepOutcome, Stepper};
pub use token::{Token, TokenKind};

// Re-export config types from lexdfa-config
pub use lexdfa_config::{AnalyzerConfig, Phase};
