//! 源代码位置追踪
//!
//! 行列号均为 1-based，用于 token 定位和错误显示。

use serde::Serialize;

/// 源代码位置
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Position {
    /// 行号，1-based
    pub row: usize,
    /// 列号，1-based，按字符计数
    pub column: usize,
}

impl Position {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// 文件起始位置
    pub fn start() -> Self {
        Self { row: 1, column: 1 }
    }

    /// 前进一个字符
    ///
    /// 换行符使行号加一并把列号重置为 1。
    pub fn advance(&mut self, c: char) {
        if c == '\n' {
            self.row += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::start()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.row, self.column)
    }
}
