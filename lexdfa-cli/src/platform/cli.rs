//! CLI 格式化输出
//!
//! 提供命令行友好的错误显示和源码上下文打印。

use lexdfa::{LexdfaError, LexicalError};

/// 打印文件或配置错误
pub fn print_error(e: &LexdfaError) {
    eprintln!("❌ {}", e);
}

/// 打印词法错误并显示源代码上下文
pub fn print_lexical_error_with_source(e: &LexicalError, source: &str) {
    eprintln!("❌ {}", e);
    print_source_context(source, e.line(), e.column(), e.lexeme.chars().count());
}

/// 带行号打印整个源码
pub fn print_numbered_source(source: &str) {
    println!("[Source]");
    for (i, line) in source.lines().enumerate() {
        println!("{:3} | {}", i + 1, line);
    }
    println!();
}

/// 打印源代码上下文（显示错误行前后几行）
///
/// `width` 为标记下划线的字符数，至少为 1。
pub fn print_source_context(source: &str, error_line: usize, error_col: usize, width: usize) {
    for line in render_source_context(source, error_line, error_col, width) {
        eprintln!("{}", line);
    }
}

fn render_source_context(
    source: &str,
    error_line: usize,
    error_col: usize,
    width: usize,
) -> Vec<String> {
    const CONTEXT_LINES: usize = 2;

    let lines: Vec<&str> = source.lines().collect();
    let total_lines = lines.len();

    if error_line == 0 || error_line > total_lines {
        return Vec::new();
    }

    let start_line = error_line.saturating_sub(CONTEXT_LINES).max(1);
    let end_line = (error_line + CONTEXT_LINES).min(total_lines);
    let gutter = end_line.to_string().len();

    let mut out = Vec::new();
    out.push(format!("{}|--", "-".repeat(gutter + 1)));
    for line_idx in start_line..=end_line {
        out.push(format!("{:>gutter$} | {}", line_idx, lines[line_idx - 1]));
        if line_idx == error_line {
            // 多行 lexeme 只标记到行尾
            let line_len = lines[line_idx - 1].chars().count();
            let offset = error_col.saturating_sub(1);
            let span = width.max(1).min(line_len.saturating_sub(offset).max(1));
            out.push(format!(
                "{} | {}{}",
                " ".repeat(gutter),
                " ".repeat(offset),
                "^".repeat(span)
            ));
        }
    }
    out.push(format!("{}|--", "-".repeat(gutter + 1)));
    out
}
