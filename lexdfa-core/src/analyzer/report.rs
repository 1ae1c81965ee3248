//! 文本报告与汇总统计

use super::AnalysisResult;
use crate::token::TokenKind;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// 汇总统计
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total_tokens: usize,
    pub total_errors: usize,
    /// 每种 token 类型的数量（含注释与错误）
    pub per_kind: BTreeMap<TokenKind, usize>,
    /// 建议总条数（每个错误两条）
    pub suggestions: usize,
}

impl Summary {
    pub fn of(result: &AnalysisResult) -> Self {
        let mut per_kind = BTreeMap::new();
        for token in &result.tokens {
            *per_kind.entry(token.kind()).or_insert(0) += 1;
        }
        Self {
            total_tokens: result.tokens.len(),
            total_errors: result.errors.len(),
            per_kind,
            suggestions: result.suggestion_counts.values().sum(),
        }
    }

    pub fn count(&self, kind: TokenKind) -> usize {
        self.per_kind.get(&kind).copied().unwrap_or(0)
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total tokens: {}", self.total_tokens)?;
        writeln!(f, "Total errors: {}", self.total_errors)?;
        for (kind, count) in &self.per_kind {
            writeln!(f, "  {:<15} {}", kind, count)?;
        }
        Ok(())
    }
}

/// 报告视图，`Display` 输出完整报告
pub struct Report<'a>(pub &'a AnalysisResult);

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.0;

        writeln!(f, "=== LEXICAL ANALYSIS REPORT ===")?;
        writeln!(f)?;

        writeln!(f, "--- RECOGNIZED TOKENS ---")?;
        writeln!(f, "{:<15} {:<20} {:<8} {}", "KIND", "LEXEME", "ROW", "COLUMN")?;
        for token in result.recognized() {
            writeln!(f, "{}", token.to_report_line())?;
        }
        writeln!(f)?;

        writeln!(f, "--- ERRORS ---")?;
        if result.errors.is_empty() {
            writeln!(f, "No lexical errors")?;
        }
        for (i, error) in result.errors.iter().enumerate() {
            writeln!(f, "{}. {}", i + 1, error)?;
        }
        writeln!(f, "Total errors: {}", result.errors.len())?;
        writeln!(f)?;

        if !result.suggestion_counts.is_empty() {
            writeln!(f, "--- SUGGESTION STATISTICS ---")?;
            for (rule, count) in &result.suggestion_counts {
                writeln!(f, "  {:<25} {}", rule, count)?;
            }
            writeln!(f)?;
        }

        writeln!(f, "--- LEXEME COUNTS ---")?;
        writeln!(f, "{:<20} {:<15} {}", "LEXEME", "KIND", "COUNT")?;
        for ((lexeme, kind), count) in &result.frequency {
            writeln!(f, "{:<20} {:<15} {}", format!("'{lexeme}'"), kind, count)?;
        }
        writeln!(f)?;

        writeln!(f, "--- ANALYSIS LOG ---")?;
        for line in &result.log {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// 完整文本报告：token、错误、建议统计、lexeme 计数和分析日志
pub fn render_report(result: &AnalysisResult) -> String {
    Report(result).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::analyze;

    #[test]
    fn test_summary_counts() {
        let result = analyze("SI x = 1; // c\n#");
        let summary = result.summary();
        assert_eq!(summary.total_tokens, result.tokens.len());
        assert_eq!(summary.count(TokenKind::ReservedWord), 1);
        assert_eq!(summary.count(TokenKind::LineComment), 1);
        assert_eq!(summary.count(TokenKind::Error), 1);
        assert_eq!(summary.total_errors, 1);
        assert_eq!(summary.suggestions, 2);
    }

    #[test]
    fn test_report_sections() {
        let result = analyze("x = 12. ;");
        let report = render_report(&result);
        for section in [
            "--- RECOGNIZED TOKENS ---",
            "--- ERRORS ---",
            "--- SUGGESTION STATISTICS ---",
            "--- LEXEME COUNTS ---",
            "--- ANALYSIS LOG ---",
        ] {
            assert!(report.contains(section), "missing {section}");
        }
        assert!(report.contains("1. ERROR at row 1, column 5: '12.'"));
        assert!(report.contains("incomplete_decimal"));
    }

    #[test]
    fn test_report_without_errors() {
        let report = render_report(&analyze("a"));
        assert!(report.contains("No lexical errors"));
        assert!(!report.contains("SUGGESTION STATISTICS"));
    }
}
