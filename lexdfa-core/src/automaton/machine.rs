use super::state::{CharClass, State};
use super::table::next_state;
use crate::token::TokenKind;

use serde::Serialize;
use std::fmt;
use tracing::trace;

/// 保留字（大小写敏感）
pub const RESERVED_WORDS: [&str; 8] = [
    "SI", "ENTONCES", "PARA", "ESCRIBIR", "si", "entonces", "para", "escribir",
];

/// 轨迹中的一次转移；`to == State::Error` 表示没有合法转移
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TraceStep {
    pub from: State,
    pub to: State,
    pub ch: char,
}

impl TraceStep {
    pub fn is_failure(&self) -> bool {
        self.to == State::Error
    }
}

impl fmt::Display for TraceStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_failure() {
            write!(
                f,
                "ERROR: no transition from {} on '{}'",
                self.from,
                self.ch.escape_debug()
            )
        } else {
            write!(
                f,
                "{} → {} on '{}'",
                self.from,
                self.to,
                self.ch.escape_debug()
            )
        }
    }
}

/// 表驱动 DFA 的一次运行
///
/// 每个候选 lexeme 使用一个实例：当前状态、已累积的 lexeme 和转移轨迹。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Automaton {
    state: State,
    lexeme: String,
    trace: Vec<TraceStep>,
}

impl Automaton {
    pub fn new() -> Self {
        Self {
            state: State::Initial,
            lexeme: String::new(),
            trace: Vec::new(),
        }
    }

    /// 用全新实例重放一段文本
    pub fn replay(text: &str) -> Self {
        let mut automaton = Self::new();
        for c in text.chars() {
            automaton.transition(c);
        }
        automaton
    }

    /// 重置到初始状态，清空 lexeme 和轨迹
    pub fn reset(&mut self) {
        self.state = State::Initial;
        self.lexeme.clear();
        self.trace.clear();
    }

    /// 消费一个字符
    ///
    /// 有转移则前进；否则强制进入 `Error`。两种情况下字符都会追加到 lexeme。
    pub fn transition(&mut self, c: char) -> State {
        let from = self.state;
        let to = next_state(from, CharClass::of(c)).unwrap_or(State::Error);

        trace!(target: "lexdfa::automaton", %from, %to, ch = ?c, "transition");

        self.trace.push(TraceStep { from, to, ch: c });
        self.state = to;
        self.lexeme.push(c);
        to
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn is_final_state(&self) -> bool {
        self.state.is_final()
    }

    pub fn is_error_state(&self) -> bool {
        self.state == State::Error
    }

    pub fn current_lexeme(&self) -> &str {
        &self.lexeme
    }

    pub fn trace(&self) -> &[TraceStep] {
        &self.trace
    }

    /// 轨迹的文本形式
    pub fn trace_lines(&self) -> Vec<String> {
        self.trace.iter().map(ToString::to_string).collect()
    }

    /// 最后一个字符刚把自动机从注释带回 `Initial` 时，该注释的 token 类型
    pub fn closed_comment(&self) -> Option<TokenKind> {
        let last = self.trace.last()?;
        if last.to != State::Initial {
            return None;
        }
        match last.from {
            State::LineComment => Some(TokenKind::LineComment),
            State::BlockCommentEnd => Some(TokenKind::BlockComment),
            _ => None,
        }
    }

    /// 根据当前状态和 lexeme 推导 token 类型
    pub fn token_kind(&self) -> TokenKind {
        let lexeme = self.lexeme.as_str();
        match self.state {
            State::Identifier => {
                if RESERVED_WORDS.contains(&lexeme) {
                    TokenKind::ReservedWord
                } else {
                    TokenKind::Identifier
                }
            }
            State::Integer => TokenKind::Integer,
            State::Decimal => TokenKind::Decimal,
            State::StringEnd => TokenKind::StringLit,
            State::Operator => match lexeme {
                "." | "," | ";" | ":" => TokenKind::Punctuation,
                "(" | ")" | "[" | "]" | "{" | "}" => TokenKind::Grouping,
                _ => TokenKind::Operator,
            },
            State::LineComment => TokenKind::LineComment,
            State::BlockComment | State::BlockCommentEnd => TokenKind::BlockComment,
            State::Error => TokenKind::Error,
            _ => TokenKind::UnknownChar,
        }
    }
}

impl Default for Automaton {
    fn default() -> Self {
        Self::new()
    }
}
