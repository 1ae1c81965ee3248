//! 词法错误类型
//!
//! 词法错误是报告值而不是控制流：分析器把它们收集到结果里并继续扫描。

use crate::automaton::State;
use serde::Serialize;
use thiserror::Error;

/// 错误原因
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ErrorCause {
    /// 当前状态对该字符没有转移
    #[error("no transition from {state} on '{}'", .ch.escape_debug())]
    NoTransition { state: State, ch: char },
    /// lexeme 在非接受状态结束（如 `12.` 或未闭合的字符串）
    #[error("lexeme ended in non-accepting state {state}")]
    IncompleteLexeme { state: State },
    /// 块注释直到输入结束都没有 `*/`
    #[error("unterminated block comment")]
    UnterminatedComment,
}

/// 一条词法错误，附带两条建议
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LexicalError {
    /// 行号（1-based）
    pub row: usize,
    /// lexeme 起始列号（1-based）
    pub column: usize,
    pub lexeme: String,
    pub cause: ErrorCause,
    /// 基于 lexeme 模式的建议
    pub suggestion: String,
    /// 基于出错位置前后字符的建议
    pub context_suggestion: String,
}

impl LexicalError {
    pub fn line(&self) -> usize {
        self.row
    }

    pub fn column(&self) -> usize {
        self.column
    }

    /// 两条建议
    pub fn suggestions(&self) -> [&str; 2] {
        [&self.suggestion, &self.context_suggestion]
    }
}

impl std::fmt::Display for LexicalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "ERROR at row {}, column {}: '{}' ({})",
            self.row, self.column, self.lexeme, self.cause
        )?;
        writeln!(f, "   {}", self.suggestion)?;
        write!(f, "   {}", self.context_suggestion)
    }
}

impl std::error::Error for LexicalError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> LexicalError {
        LexicalError {
            row: 3,
            column: 7,
            lexeme: "1abc".to_string(),
            cause: ErrorCause::NoTransition {
                state: State::Integer,
                ch: 'a',
            },
            suggestion: "Suggestion: identifiers cannot start with digits".to_string(),
            context_suggestion: "Context suggestion: check the surrounding code".to_string(),
        }
    }

    #[test]
    fn test_display_is_multiline() {
        let text = sample().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("row 3, column 7"));
        assert!(lines[0].contains("'1abc'"));
        assert!(lines[0].contains("no transition from INTEGER on 'a'"));
        assert!(lines[1].contains("cannot start with digits"));
        assert!(lines[2].starts_with("   Context suggestion"));
    }

    #[test]
    fn test_cause_messages() {
        let incomplete = ErrorCause::IncompleteLexeme {
            state: State::DecimalPoint,
        };
        assert_eq!(
            incomplete.to_string(),
            "lexeme ended in non-accepting state DECIMAL_POINT"
        );
        assert_eq!(
            ErrorCause::UnterminatedComment.to_string(),
            "unterminated block comment"
        );
        let newline = ErrorCause::NoTransition {
            state: State::Identifier,
            ch: '\n',
        };
        assert!(newline.to_string().ends_with("on '\\n'"));
    }

    #[test]
    fn test_error_position() {
        let err = sample();
        assert_eq!(err.line(), 3);
        assert_eq!(err.column(), 7);
        assert!(err.suggestions().iter().all(|s| !s.is_empty()));
    }
}
