//! 转移表
//!
//! 表以纯函数形式给出：`(State, CharClass) -> Option<State>`。
//! 返回 `None` 表示没有合法转移，调用方必须进入 `State::Error`。

use super::state::{CharClass, State};
use serde::Serialize;

/// 查表：某状态在某字符类上的后继状态
pub fn next_state(state: State, class: CharClass) -> Option<State> {
    use CharClass as C;
    use State as S;

    // 超出 0-255 的字符在任何状态下都没有转移
    if class == C::Unmapped {
        return None;
    }

    match (state, class) {
        (S::Initial, C::Letter) => Some(S::Identifier),
        (S::Initial, C::Digit) => Some(S::Integer),
        (S::Initial, C::Quote) => Some(S::StringBody),
        (S::Initial, C::Slash) => Some(S::Slash),
        (
            S::Initial,
            C::OperatorSymbol | C::Star | C::Dot | C::Punctuation | C::Grouping,
        ) => Some(S::Operator),

        // `//` 行注释，`/*` 块注释，后接操作数则为除法
        (S::Slash, C::Slash) => Some(S::LineComment),
        (S::Slash, C::Star) => Some(S::BlockComment),
        (S::Slash, C::Letter | C::Digit) => Some(S::Operator),

        // 换行退出注释，不隐含任何 token 类型
        (S::LineComment, C::Newline) => Some(S::Initial),
        (S::LineComment, _) => Some(S::LineComment),

        (S::BlockComment, C::Star) => Some(S::BlockCommentEnd),
        (S::BlockComment, _) => Some(S::BlockComment),

        (S::BlockCommentEnd, C::Slash) => Some(S::Initial),
        (S::BlockCommentEnd, C::Star) => Some(S::BlockCommentEnd),
        (S::BlockCommentEnd, _) => Some(S::BlockComment),

        (S::Identifier, C::Letter | C::Digit) => Some(S::Identifier),

        (S::Integer, C::Digit) => Some(S::Integer),
        (S::Integer, C::Dot) => Some(S::DecimalPoint),
        (S::DecimalPoint, C::Digit) => Some(S::Decimal),
        (S::Decimal, C::Digit) => Some(S::Decimal),

        (S::StringBody, C::Quote) => Some(S::StringEnd),
        (S::StringBody, _) => Some(S::StringBody),

        // StringEnd / Operator / Error 没有出边
        _ => None,
    }
}

/// 表中的一条边
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub from: State,
    pub on: CharClass,
    pub to: State,
}

/// 枚举所有已定义的边（供转移表/状态图渲染）
pub fn edges() -> Vec<Edge> {
    State::ALL
        .into_iter()
        .flat_map(|from| {
            CharClass::ALL.into_iter().filter_map(move |on| {
                next_state(from, on).map(|to| Edge { from, on, to })
            })
        })
        .collect()
}

/// 以文本表格形式渲染转移表
pub fn render_table() -> String {
    let mut out = String::new();
    let width = CharClass::ALL
        .iter()
        .map(|c| c.name().len())
        .max()
        .unwrap_or(0)
        .max(5);
    let state_width = State::ALL
        .iter()
        .map(|s| s.name().len())
        .max()
        .unwrap_or(0);

    out.push_str(&format!("{:<state_width$}", "STATE"));
    for class in CharClass::ALL {
        out.push_str(&format!(" | {:<width$}", class.name()));
    }
    out.push('\n');

    for state in State::ALL {
        let marker = if state.is_final() { "*" } else { " " };
        out.push_str(&format!("{:<state_width$}", state.name()));
        for class in CharClass::ALL {
            let cell = match next_state(state, class) {
                Some(to) => abbreviate(to),
                None => "-",
            };
            out.push_str(&format!(" | {:<width$}", cell));
        }
        out.push(' ');
        out.push_str(marker);
        out.push('\n');
    }
    out.push_str("(* = accepting state, - = no transition)\n");
    out
}

fn abbreviate(state: State) -> &'static str {
    match state {
        State::Initial => "INIT",
        State::Identifier => "IDENT",
        State::Integer => "INT",
        State::DecimalPoint => "DPT",
        State::Decimal => "DEC",
        State::StringBody => "STR",
        State::StringEnd => "STR$",
        State::Operator => "OP",
        State::Slash => "SLASH",
        State::LineComment => "LCMT",
        State::BlockComment => "BCMT",
        State::BlockCommentEnd => "BCMT*",
        State::Error => "ERR",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_is_absorbing() {
        for class in CharClass::ALL {
            assert_eq!(next_state(State::Error, class), None);
        }
    }

    #[test]
    fn test_operator_and_string_end_have_no_edges() {
        for class in CharClass::ALL {
            assert_eq!(next_state(State::Operator, class), None);
            assert_eq!(next_state(State::StringEnd, class), None);
        }
    }

    #[test]
    fn test_unmapped_never_transitions() {
        for state in State::ALL {
            assert_eq!(next_state(state, CharClass::Unmapped), None);
        }
    }

    #[test]
    fn test_block_comment_star_run() {
        // `**/` 必须能闭合
        let s = next_state(State::BlockComment, CharClass::Star).unwrap();
        let s = next_state(s, CharClass::Star).unwrap();
        assert_eq!(s, State::BlockCommentEnd);
        assert_eq!(next_state(s, CharClass::Slash), Some(State::Initial));
        assert_eq!(
            next_state(State::BlockCommentEnd, CharClass::Letter),
            Some(State::BlockComment)
        );
    }

    #[test]
    fn test_line_comment_newline_exits() {
        assert_eq!(
            next_state(State::LineComment, CharClass::Newline),
            Some(State::Initial)
        );
        assert_eq!(
            next_state(State::LineComment, CharClass::Quote),
            Some(State::LineComment)
        );
    }

    #[test]
    fn test_decimal_point_requires_digit() {
        assert_eq!(
            next_state(State::DecimalPoint, CharClass::Digit),
            Some(State::Decimal)
        );
        assert_eq!(next_state(State::DecimalPoint, CharClass::Dot), None);
        assert_eq!(next_state(State::Decimal, CharClass::Dot), None);
    }

    #[test]
    fn test_edges_match_lookup() {
        let all = edges();
        assert!(all.contains(&Edge {
            from: State::Initial,
            on: CharClass::Letter,
            to: State::Identifier,
        }));
        assert!(all.iter().all(|e| next_state(e.from, e.on) == Some(e.to)));
        assert!(all.iter().all(|e| e.from != State::Error));
    }

    #[test]
    fn test_render_table_lists_every_state() {
        let table = render_table();
        for state in State::ALL {
            assert!(table.contains(state.name()), "missing {}", state);
        }
    }
}
