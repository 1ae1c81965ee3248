//! 测试辅助工具
//!
//! 提供分析结果的简化视图，便于整表比较

#![allow(dead_code)]

use lexdfa_core::{analyze, AnalysisResult, TokenKind};

/// 分析文本并返回 (类型, lexeme, 行, 列) 列表
pub fn lex(text: &str) -> Vec<(TokenKind, String, usize, usize)> {
    analyze(text)
        .tokens
        .iter()
        .map(|t| (t.kind(), t.lexeme().to_string(), t.row(), t.column()))
        .collect()
}

/// 仅 (类型, lexeme)
pub fn kinds(text: &str) -> Vec<(TokenKind, String)> {
    analyze(text)
        .tokens
        .iter()
        .map(|t| (t.kind(), t.lexeme().to_string()))
        .collect()
}

/// 构造期望值的简写
pub fn tok(kind: TokenKind, lexeme: &str) -> (TokenKind, String) {
    (kind, lexeme.to_string())
}

/// 所有错误的 lexeme
pub fn error_lexemes(result: &AnalysisResult) -> Vec<&str> {
    result.errors.iter().map(|e| e.lexeme.as_str()).collect()
}

/// 在测试中启用 tracing 输出（重复调用无副作用）
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("lexdfa=trace")
        .with_test_writer()
        .try_init();
}
