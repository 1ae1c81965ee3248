//! 启发式错误建议
//!
//! 两类建议：
//! - 基于 lexeme 模式（`generate_suggestion`）
//! - 基于出错位置前后字符（`context_suggestion`）
//!
//! 规则按顺序匹配，第一条命中即返回，并为该规则计数。

use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

/// 建议规则，同时作为统计计数的键
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionRule {
    UnterminatedComment,
    UnterminatedString,
    IncompleteDecimal,
    LeadingDigit,
    SingleQuote,
    TruncatedReservedWord,
    DigitInIdentifier,
    GroupingSymbol,
    Punctuation,
    SpecialCharacter,
    General,
    ComparisonOperator,
    MalformedComment,
    MalformedOperator,
    GeneralContext,
}

impl SuggestionRule {
    pub fn name(self) -> &'static str {
        match self {
            SuggestionRule::UnterminatedComment => "unterminated_comment",
            SuggestionRule::UnterminatedString => "unterminated_string",
            SuggestionRule::IncompleteDecimal => "incomplete_decimal",
            SuggestionRule::LeadingDigit => "leading_digit",
            SuggestionRule::SingleQuote => "single_quote",
            SuggestionRule::TruncatedReservedWord => "truncated_reserved_word",
            SuggestionRule::DigitInIdentifier => "digit_in_identifier",
            SuggestionRule::GroupingSymbol => "grouping_symbol",
            SuggestionRule::Punctuation => "punctuation",
            SuggestionRule::SpecialCharacter => "special_character",
            SuggestionRule::General => "general",
            SuggestionRule::ComparisonOperator => "comparison_operator",
            SuggestionRule::MalformedComment => "malformed_comment",
            SuggestionRule::MalformedOperator => "malformed_operator",
            SuggestionRule::GeneralContext => "general_context",
        }
    }

    /// 是否为上下文规则
    pub fn is_contextual(self) -> bool {
        matches!(
            self,
            SuggestionRule::ComparisonOperator
                | SuggestionRule::MalformedComment
                | SuggestionRule::MalformedOperator
                | SuggestionRule::GeneralContext
        )
    }
}

impl std::fmt::Display for SuggestionRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.name())
    }
}

const COMPOUND_OPERATOR_PREFIXES: &str = "+-*/%=<>!&|";

/// 建议生成器，持有每条规则的命中次数
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    counts: BTreeMap<SuggestionRule, usize>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.counts.clear();
    }

    pub fn counts(&self) -> &BTreeMap<SuggestionRule, usize> {
        &self.counts
    }

    pub fn into_counts(self) -> BTreeMap<SuggestionRule, usize> {
        self.counts
    }

    /// 基于 lexeme 形状的建议
    pub fn generate_suggestion(
        &mut self,
        lexeme: &str,
        failing_char: char,
        row: usize,
        column: usize,
    ) -> String {
        let (rule, message) = classify_lexeme(lexeme, failing_char);
        debug!(
            target: "lexdfa::analyzer",
            row,
            column,
            rule = rule.name(),
            lexeme,
            "suggestion"
        );
        self.bump(rule);
        message
    }

    /// 基于出错位置周围字符的建议
    ///
    /// `pos` 是出错字符在 `text` 中的下标；越界时退化为通用建议。
    pub fn context_suggestion(&mut self, text: &[char], pos: usize) -> String {
        let next = text.get(pos + 1).copied();
        let prev = pos.checked_sub(1).and_then(|i| text.get(i)).copied();

        let (rule, message) = match (prev, next) {
            (_, Some('=')) => (
                SuggestionRule::ComparisonOperator,
                "Context suggestion: were you trying to use a comparison operator? (==, !=, etc.)",
            ),
            (Some('/'), _) => (
                SuggestionRule::MalformedComment,
                "Context suggestion: were you trying to write a comment? Use // or /* */",
            ),
            (Some(p), _) if COMPOUND_OPERATOR_PREFIXES.contains(p) => (
                SuggestionRule::MalformedOperator,
                "Context suggestion: were you trying to use a compound operator? (&&, ||, ==, etc.)",
            ),
            _ => (
                SuggestionRule::GeneralContext,
                "Context suggestion: check the surrounding code",
            ),
        };
        debug!(target: "lexdfa::analyzer", pos, rule = rule.name(), "context suggestion");
        self.bump(rule);
        message.to_string()
    }

    fn bump(&mut self, rule: SuggestionRule) {
        *self.counts.entry(rule).or_insert(0) += 1;
    }
}

fn classify_lexeme(lexeme: &str, failing_char: char) -> (SuggestionRule, String) {
    if lexeme.starts_with("/*") && !lexeme.ends_with("*/") {
        return (
            SuggestionRule::UnterminatedComment,
            "Suggestion: block comment is never closed; add */".to_string(),
        );
    }
    if lexeme.starts_with('"') && lexeme.matches('"').count() == 1 {
        return (
            SuggestionRule::UnterminatedString,
            "Suggestion: string literal is not closed; add a closing \" on the same line"
                .to_string(),
        );
    }
    if let Some(digits) = lexeme.strip_suffix('.') {
        if !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) {
            return (
                SuggestionRule::IncompleteDecimal,
                format!("Suggestion: decimal needs digits after the point, e.g. '{digits}.0'"),
            );
        }
    }
    if appears_before(lexeme, |c| c.is_ascii_digit(), |c| c.is_ascii_alphabetic()) {
        return (
            SuggestionRule::LeadingDigit,
            "Suggestion: identifiers cannot start with digits".to_string(),
        );
    }
    if lexeme.contains('\'') {
        return (
            SuggestionRule::SingleQuote,
            "Suggestion: use double quotes \" for strings".to_string(),
        );
    }
    let completion = match lexeme {
        "whil" => Some("while"),
        "els" => Some("else"),
        "tru" => Some("true"),
        "fals" => Some("false"),
        _ => None,
    };
    if let Some(word) = completion {
        return (
            SuggestionRule::TruncatedReservedWord,
            format!("Suggestion: did you mean '{word}'? (incomplete reserved word)"),
        );
    }
    if appears_before(lexeme, |c| c.is_ascii_alphabetic(), |c| c.is_ascii_digit()) {
        return (
            SuggestionRule::DigitInIdentifier,
            "Suggestion: digits cannot appear inside identifiers here".to_string(),
        );
    }
    if "{}[]()".contains(failing_char) {
        return (
            SuggestionRule::GroupingSymbol,
            "Suggestion: check the grouping symbols".to_string(),
        );
    }
    if failing_char == ';' || failing_char == ':' {
        return (
            SuggestionRule::Punctuation,
            "Suggestion: check the use of punctuation".to_string(),
        );
    }
    if lexeme.chars().count() == 1 && !failing_char.is_alphanumeric() {
        return (
            SuggestionRule::SpecialCharacter,
            "Suggestion: unrecognized special character".to_string(),
        );
    }
    (
        SuggestionRule::General,
        "Suggestion: check the lexeme syntax".to_string(),
    )
}

/// lexeme 中是否存在满足 `first` 的字符出现在满足 `then` 的字符之前
fn appears_before(lexeme: &str, first: impl Fn(char) -> bool, then: impl Fn(char) -> bool) -> bool {
    lexeme
        .find(first)
        .map(|i| lexeme[i..].chars().skip(1).any(then))
        .unwrap_or(false)
}
