//! 属性测试 - 对任意输入成立的性质

use lexdfa_core::{analyze, Automaton, State, TokenKind};
use proptest::prelude::*;

/// 源码风格的输入：字母、数字、符号、空白、引号和注释标记
fn source_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            "[a-zA-Z]{1,6}",
            "[0-9]{1,4}(\\.[0-9]{0,2})?",
            "[-+*/%=<>(){}\\[\\];:,.]",
            "[ \t\n]{1,3}",
            Just("\"".to_string()),
            "\"[a-z /*]{0,5}\"",
            Just("//".to_string()),
            Just("/*".to_string()),
            Just("*/".to_string()),
            "[#@!'?]",
        ],
        0..40,
    )
    .prop_map(|parts| parts.concat())
}

/// 非空白字符数（空白与分析器的定义一致）
fn non_blank(text: &str) -> usize {
    text.chars()
        .filter(|c| !matches!(c, ' ' | '\t' | '\r' | '\n'))
        .count()
}

proptest! {
    #[test]
    fn prop_lexeme_length_equals_consumed_chars(text in "\\PC{0,40}") {
        let mut automaton = Automaton::new();
        for (i, c) in text.chars().enumerate() {
            let before = automaton.state();
            let after = automaton.transition(c);
            prop_assert_eq!(automaton.current_lexeme().chars().count(), i + 1);
            if before == State::Error {
                prop_assert_eq!(after, State::Error);
            }
        }
    }

    #[test]
    fn prop_reset_is_idempotent(text in "\\PC{0,20}") {
        let mut automaton = Automaton::replay(&text);
        automaton.reset();
        let once = automaton.clone();
        automaton.reset();
        prop_assert_eq!(&automaton, &once);
        prop_assert_eq!(automaton.state(), State::Initial);
        prop_assert!(automaton.current_lexeme().is_empty());
        prop_assert!(automaton.trace().is_empty());
    }

    #[test]
    fn prop_tokens_never_contain_bare_whitespace(text in source_text()) {
        let result = analyze(&text);
        for token in &result.tokens {
            prop_assert!(!token.lexeme().trim().is_empty());
        }
    }

    #[test]
    fn prop_tokens_cover_every_non_blank_char(text in source_text()) {
        // 注释 token 带着注释原文，其余 token 覆盖缓冲区中剩下的字符
        let result = analyze(&text);
        let covered: usize = result.tokens.iter().map(|t| non_blank(t.lexeme())).sum();
        prop_assert_eq!(covered, non_blank(&text));
    }

    #[test]
    fn prop_every_error_token_has_one_error(text in source_text()) {
        let result = analyze(&text);
        let error_tokens = result
            .tokens
            .iter()
            .filter(|t| t.kind() == TokenKind::Error)
            .count();
        prop_assert_eq!(error_tokens, result.errors.len());
        for error in &result.errors {
            prop_assert!(!error.suggestion.is_empty());
            prop_assert!(!error.context_suggestion.is_empty());
        }
    }

    #[test]
    fn prop_replay_reproduces_kind(text in source_text()) {
        let result = analyze(&text);
        for token in result.tokens.iter().filter(|t| !t.kind().is_error() && !t.kind().is_comment()) {
            let replayed = Automaton::replay(token.lexeme());
            prop_assert!(replayed.is_final_state());
            prop_assert_eq!(replayed.token_kind(), token.kind());
        }
    }

    #[test]
    fn prop_tokens_sorted_by_position(text in source_text()) {
        let result = analyze(&text);
        let positions: Vec<(usize, usize)> = result.tokens.iter().map(|t| (t.row(), t.column())).collect();
        let mut sorted = positions.clone();
        sorted.sort();
        prop_assert_eq!(positions, sorted);
    }
}
