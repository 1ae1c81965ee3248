//! 表驱动确定有限自动机
//!
//! - `state`: 状态与字符类
//! - `table`: (状态, 字符类) 转移表，纯函数
//! - `machine`: 单个 lexeme 的运行实例

pub mod machine;
pub mod state;
pub mod table;

pub use machine::{Automaton, TraceStep, RESERVED_WORDS};
pub use state::{CharClass, State};
pub use table::{edges, next_state, render_table, Edge};
