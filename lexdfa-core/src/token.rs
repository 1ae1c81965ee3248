//! Token 与 TokenKind

use serde::Serialize;
use std::fmt;

/// Token 类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    ReservedWord,
    Identifier,
    Integer,
    Decimal,
    StringLit,
    Punctuation,
    Operator,
    Grouping,
    LineComment,
    BlockComment,
    Error,
    UnknownChar,
}

impl TokenKind {
    pub const ALL: [TokenKind; 12] = [
        TokenKind::ReservedWord,
        TokenKind::Identifier,
        TokenKind::Integer,
        TokenKind::Decimal,
        TokenKind::StringLit,
        TokenKind::Punctuation,
        TokenKind::Operator,
        TokenKind::Grouping,
        TokenKind::LineComment,
        TokenKind::BlockComment,
        TokenKind::Error,
        TokenKind::UnknownChar,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TokenKind::ReservedWord => "RESERVED_WORD",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Integer => "INTEGER",
            TokenKind::Decimal => "DECIMAL",
            TokenKind::StringLit => "STRING",
            TokenKind::Punctuation => "PUNCTUATION",
            TokenKind::Operator => "OPERATOR",
            TokenKind::Grouping => "GROUPING",
            TokenKind::LineComment => "LINE_COMMENT",
            TokenKind::BlockComment => "BLOCK_COMMENT",
            TokenKind::Error => "ERROR",
            TokenKind::UnknownChar => "UNKNOWN_CHAR",
        }
    }

    pub fn is_comment(self) -> bool {
        matches!(self, TokenKind::LineComment | TokenKind::BlockComment)
    }

    pub fn is_error(self) -> bool {
        matches!(self, TokenKind::Error | TokenKind::UnknownChar)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // 支持 {:<15} 之类的对齐
        f.pad(self.name())
    }
}

/// 不可变 token：类型、lexeme 文本和 1-based 起始位置
///
/// 字符串字面量的 lexeme 包含两侧的引号。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    kind: TokenKind,
    lexeme: String,
    row: usize,
    column: usize,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, row: usize, column: usize) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            row,
            column,
        }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn column(&self) -> usize {
        self.column
    }

    /// lexeme 的字符数
    pub fn len(&self) -> usize {
        self.lexeme.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.lexeme.is_empty()
    }

    /// 字符串字面量去掉引号后的内容；其他类型返回 None
    pub fn string_value(&self) -> Option<&str> {
        if self.kind != TokenKind::StringLit {
            return None;
        }
        self.lexeme
            .strip_prefix('"')
            .and_then(|rest| rest.strip_suffix('"'))
    }

    /// 报告中的定宽行
    pub fn to_report_line(&self) -> String {
        format!(
            "{:<15} {:<20} Row:{:<4} Col:{:<4}",
            self.kind,
            format!("'{}'", self.lexeme),
            self.row,
            self.column
        )
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Token[{}, '{}', Row:{}, Col:{}]",
            self.kind, self.lexeme, self.row, self.column
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_accessors() {
        let token = Token::new(TokenKind::Identifier, "total", 3, 7);
        assert_eq!(token.kind(), TokenKind::Identifier);
        assert_eq!(token.lexeme(), "total");
        assert_eq!(token.row(), 3);
        assert_eq!(token.column(), 7);
        assert_eq!(token.len(), 5);
    }

    #[test]
    fn test_string_value() {
        let token = Token::new(TokenKind::StringLit, "\"abc\"", 1, 1);
        assert_eq!(token.string_value(), Some("abc"));
        let ident = Token::new(TokenKind::Identifier, "abc", 1, 1);
        assert_eq!(ident.string_value(), None);
    }

    #[test]
    fn test_display() {
        let token = Token::new(TokenKind::ReservedWord, "SI", 2, 1);
        assert_eq!(token.to_string(), "Token[RESERVED_WORD, 'SI', Row:2, Col:1]");
    }

    #[test]
    fn test_report_line_is_padded() {
        let token = Token::new(TokenKind::Integer, "42", 1, 5);
        let line = token.to_report_line();
        assert!(line.starts_with("INTEGER         '42'"));
        assert!(line.contains("Row:1   "));
        assert!(line.ends_with("Col:5   "));
    }

    #[test]
    fn test_kind_flags() {
        assert!(TokenKind::LineComment.is_comment());
        assert!(!TokenKind::Operator.is_comment());
        assert!(TokenKind::UnknownChar.is_error());
        assert_eq!(TokenKind::ALL.len(), 12);
    }
}
