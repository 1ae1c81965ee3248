//! 注释预处理
//!
//! 单遍扫描，向前看一个字符。注释被单独切成 token，返回的缓冲区中
//! 注释字符被替换成空格（换行保留），因此缓冲区里的行列号与源文本一致。

use crate::position::Position;
use crate::token::{Token, TokenKind};
use tracing::{debug, trace};

/// 预处理结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preprocessed {
    /// 去掉注释后的文本，字符数与输入相同
    pub buffer: Vec<char>,
    /// 按出现顺序排列的注释 token
    pub comments: Vec<Token>,
    /// 未闭合的块注释（`/*` 到输入结束），以 `Error` token 表示
    pub unterminated: Option<Token>,
}

impl Preprocessed {
    pub fn buffer_string(&self) -> String {
        self.buffer.iter().collect()
    }
}

enum Mode {
    Code,
    Str,
    Line { start: Position, lexeme: String },
    Block { start: Position, lexeme: String },
}

/// 切出 `//` 与 `/* */` 注释
///
/// 字符串字面量（`"` 到下一个 `"` 或换行）内的 `//`、`/*` 不视为注释。
pub fn strip_comments(text: &str) -> Preprocessed {
    let chars: Vec<char> = text.chars().collect();
    let mut buffer = Vec::with_capacity(chars.len());
    let mut comments = Vec::new();
    let mut pos = Position::start();
    let mut mode = Mode::Code;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let next = chars.get(i + 1).copied();

        match &mut mode {
            Mode::Code => match (c, next) {
                ('/', Some('/')) => {
                    trace!(target: "lexdfa::preprocess", row = pos.row, column = pos.column, "line comment opens");
                    mode = Mode::Line {
                        start: pos,
                        lexeme: String::from("//"),
                    };
                    blank_pair(&mut buffer, &mut pos);
                    i += 2;
                    continue;
                }
                ('/', Some('*')) => {
                    trace!(target: "lexdfa::preprocess", row = pos.row, column = pos.column, "block comment opens");
                    mode = Mode::Block {
                        start: pos,
                        lexeme: String::from("/*"),
                    };
                    blank_pair(&mut buffer, &mut pos);
                    i += 2;
                    continue;
                }
                ('"', _) => {
                    mode = Mode::Str;
                    buffer.push(c);
                }
                _ => buffer.push(c),
            },
            Mode::Str => {
                buffer.push(c);
                if c == '"' || c == '\n' {
                    mode = Mode::Code;
                }
            }
            Mode::Line { start, lexeme } => {
                if c == '\n' {
                    let lexeme = lexeme.trim_end_matches('\r');
                    comments.push(finish(TokenKind::LineComment, lexeme, *start));
                    mode = Mode::Code;
                    buffer.push('\n');
                } else {
                    lexeme.push(c);
                    buffer.push(' ');
                }
            }
            Mode::Block { start, lexeme } => {
                if c == '*' && next == Some('/') {
                    lexeme.push_str("*/");
                    comments.push(finish(TokenKind::BlockComment, lexeme, *start));
                    mode = Mode::Code;
                    blank_pair(&mut buffer, &mut pos);
                    i += 2;
                    continue;
                }
                lexeme.push(c);
                buffer.push(if c == '\n' { '\n' } else { ' ' });
            }
        }

        pos.advance(c);
        i += 1;
    }

    let unterminated = match mode {
        Mode::Line { start, lexeme } => {
            let lexeme = lexeme.trim_end_matches('\r');
            comments.push(finish(TokenKind::LineComment, lexeme, start));
            None
        }
        Mode::Block { start, lexeme } => {
            debug!(
                target: "lexdfa::preprocess",
                row = start.row,
                column = start.column,
                "unterminated block comment"
            );
            Some(Token::new(TokenKind::Error, lexeme, start.row, start.column))
        }
        Mode::Code | Mode::Str => None,
    };

    Preprocessed {
        buffer,
        comments,
        unterminated,
    }
}

/// 两个注释定界字符（`//`、`/*`、`*/`）都不含换行
fn blank_pair(buffer: &mut Vec<char>, pos: &mut Position) {
    buffer.push(' ');
    buffer.push(' ');
    pos.column += 2;
}

fn finish(kind: TokenKind, lexeme: &str, start: Position) -> Token {
    debug!(
        target: "lexdfa::preprocess",
        kind = kind.name(),
        row = start.row,
        column = start.column,
        "comment token"
    );
    Token::new(kind, lexeme, start.row, start.column)
}
