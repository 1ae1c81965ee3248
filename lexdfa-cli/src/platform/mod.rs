//! 终端相关的输出

mod cli;

pub use cli::{print_error, print_lexical_error_with_source, print_numbered_source};
