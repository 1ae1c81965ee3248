//! 自动机状态与字符类

use serde::Serialize;
use std::fmt;

/// 自动机状态（封闭集合）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum State {
    Initial,
    Identifier,
    Integer,
    DecimalPoint,
    Decimal,
    /// 字符串内部（未闭合）
    StringBody,
    /// 已读到结尾引号
    StringEnd,
    Operator,
    Slash,
    LineComment,
    BlockComment,
    BlockCommentEnd,
    /// 吸收态：没有任何出边
    Error,
}

impl State {
    pub const ALL: [State; 13] = [
        State::Initial,
        State::Identifier,
        State::Integer,
        State::DecimalPoint,
        State::Decimal,
        State::StringBody,
        State::StringEnd,
        State::Operator,
        State::Slash,
        State::LineComment,
        State::BlockComment,
        State::BlockCommentEnd,
        State::Error,
    ];

    /// 显示名称（供渲染器和日志使用）
    pub fn name(self) -> &'static str {
        match self {
            State::Initial => "INITIAL",
            State::Identifier => "IDENTIFIER",
            State::Integer => "INTEGER",
            State::DecimalPoint => "DECIMAL_POINT",
            State::Decimal => "DECIMAL",
            State::StringBody => "STRING_BODY",
            State::StringEnd => "STRING_END",
            State::Operator => "OPERATOR",
            State::Slash => "SLASH",
            State::LineComment => "LINE_COMMENT",
            State::BlockComment => "BLOCK_COMMENT",
            State::BlockCommentEnd => "BLOCK_COMMENT_END",
            State::Error => "ERROR",
        }
    }

    /// 是否为接受状态
    pub fn is_final(self) -> bool {
        matches!(
            self,
            State::Identifier
                | State::Integer
                | State::Decimal
                | State::StringEnd
                | State::Operator
                | State::LineComment
                | State::BlockComment
                | State::BlockCommentEnd
        )
    }

    /// 注释内部状态：空白字符属于注释内容
    pub fn is_comment(self) -> bool {
        matches!(
            self,
            State::LineComment | State::BlockComment | State::BlockCommentEnd
        )
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 字符类：转移表按 (状态, 字符类) 索引
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CharClass {
    /// ASCII 字母 a-z A-Z
    Letter,
    Digit,
    /// `"`
    Quote,
    /// `/`
    Slash,
    /// `*`
    Star,
    /// `.`
    Dot,
    /// `\n`
    Newline,
    /// `+ - % = < >`
    OperatorSymbol,
    /// `, ; :`
    Punctuation,
    /// `( ) [ ] { }`
    Grouping,
    /// 其余 0-255 范围内的字符（含空白）
    Other,
    /// 超出 0-255 的字符，任何状态下都没有转移
    Unmapped,
}

impl CharClass {
    pub const ALL: [CharClass; 12] = [
        CharClass::Letter,
        CharClass::Digit,
        CharClass::Quote,
        CharClass::Slash,
        CharClass::Star,
        CharClass::Dot,
        CharClass::Newline,
        CharClass::OperatorSymbol,
        CharClass::Punctuation,
        CharClass::Grouping,
        CharClass::Other,
        CharClass::Unmapped,
    ];

    pub fn of(c: char) -> Self {
        match c {
            'a'..='z' | 'A'..='Z' => CharClass::Letter,
            '0'..='9' => CharClass::Digit,
            '"' => CharClass::Quote,
            '/' => CharClass::Slash,
            '*' => CharClass::Star,
            '.' => CharClass::Dot,
            '\n' => CharClass::Newline,
            '+' | '-' | '%' | '=' | '<' | '>' => CharClass::OperatorSymbol,
            ',' | ';' | ':' => CharClass::Punctuation,
            '(' | ')' | '[' | ']' | '{' | '}' => CharClass::Grouping,
            c if (c as u32) <= 0xFF => CharClass::Other,
            _ => CharClass::Unmapped,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CharClass::Letter => "letter",
            CharClass::Digit => "digit",
            CharClass::Quote => "'\"'",
            CharClass::Slash => "'/'",
            CharClass::Star => "'*'",
            CharClass::Dot => "'.'",
            CharClass::Newline => "newline",
            CharClass::OperatorSymbol => "operator",
            CharClass::Punctuation => "punctuation",
            CharClass::Grouping => "grouping",
            CharClass::Other => "other",
            CharClass::Unmapped => "non-latin1",
        }
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
