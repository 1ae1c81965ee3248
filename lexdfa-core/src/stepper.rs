//! 单步执行器
//!
//! 在原始文本（含注释）上逐字符驱动一个自动机，供调试器前端使用。
//! 每次前进都压入一个快照，后退时弹出并恢复，因此"后退再前进"
//! 产生与之前完全相同的步骤和日志。

use crate::analyzer::{at_boundary, is_blank};
use crate::automaton::{Automaton, State};
use crate::position::Position;
use crate::token::TokenKind;
use serde::Serialize;
use std::fmt;
use tracing::{debug, trace};

/// 一步的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StepOutcome {
    /// 仍在中间状态
    Pending,
    /// 到达接受状态，附带当前可得的 token 类型
    Accepted(TokenKind),
    /// 没有转移，进入 `Error`
    Rejected,
    /// 注释结束，回到 `Initial`
    CommentClosed,
}

/// 一次前进
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    /// 字符在文本中的下标
    pub index: usize,
    pub row: usize,
    pub column: usize,
    pub ch: char,
    pub from: State,
    pub to: State,
    /// 转移后的 lexeme
    pub lexeme: String,
    pub outcome: StepOutcome,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Char: '{}' | State: {} → {} | Lexeme: '{}'",
            self.ch.escape_debug(),
            self.from,
            self.to,
            self.lexeme.escape_debug()
        )
    }
}

#[derive(Debug, Clone)]
struct Snapshot {
    automaton: Automaton,
    index: usize,
    pos: Position,
    log_len: usize,
    steps_len: usize,
    finished: bool,
}

/// 可前进、后退的单步执行器
#[derive(Debug, Clone)]
pub struct Stepper {
    chars: Vec<char>,
    automaton: Automaton,
    index: usize,
    pos: Position,
    history: Vec<Snapshot>,
    steps: Vec<Step>,
    log: Vec<String>,
    finished: bool,
}

impl Stepper {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            automaton: Automaton::new(),
            index: 0,
            pos: Position::start(),
            history: Vec::new(),
            steps: Vec::new(),
            log: vec!["=== STEPPING STARTED ===".to_string()],
            finished: false,
        }
    }

    /// 前进一个（非空白）字符
    ///
    /// 到达文本末尾时返回 `None`。
    pub fn step_forward(&mut self) -> Option<Step> {
        if self.finished {
            return None;
        }
        let snapshot = self.snapshot();

        let Some(c) = self.skip_blanks() else {
            self.log.push("=== STEPPING COMPLETE ===".to_string());
            self.finished = true;
            self.history.push(snapshot);
            debug!(target: "lexdfa::stepper", steps = self.steps.len(), "reached end of text");
            return None;
        };
        self.history.push(snapshot);

        if self.closes_before(c) {
            trace!(target: "lexdfa::stepper", lexeme = self.automaton.current_lexeme(), "closing lexeme");
            self.log.push(format!(
                "Lexeme closed: '{}'",
                self.automaton.current_lexeme().escape_debug()
            ));
            self.automaton.reset();
        }

        let from = self.automaton.state();
        let to = self.automaton.transition(c);
        let outcome = if to == State::Error {
            StepOutcome::Rejected
        } else if from.is_comment() && to == State::Initial {
            StepOutcome::CommentClosed
        } else if to.is_final() {
            StepOutcome::Accepted(self.automaton.token_kind())
        } else {
            StepOutcome::Pending
        };

        let step = Step {
            index: self.index,
            row: self.pos.row,
            column: self.pos.column,
            ch: c,
            from,
            to,
            lexeme: self.automaton.current_lexeme().to_string(),
            outcome,
        };
        debug!(
            target: "lexdfa::stepper",
            index = step.index,
            row = step.row,
            column = step.column,
            %from,
            %to,
            "step"
        );

        self.log.push(step.to_string());
        match outcome {
            StepOutcome::Accepted(kind) => {
                self.log.push(format!(">>> FINAL STATE REACHED - Token: {kind}"))
            }
            StepOutcome::Rejected => self.log.push(">>> ERROR - no transition possible".to_string()),
            StepOutcome::CommentClosed => self.log.push(">>> comment closed".to_string()),
            StepOutcome::Pending => {}
        }

        self.pos.advance(c);
        self.index += 1;
        self.steps.push(step.clone());
        Some(step)
    }

    /// 撤销最近一次 `step_forward`；没有历史时返回 false
    pub fn step_back(&mut self) -> bool {
        let Some(snapshot) = self.history.pop() else {
            trace!(target: "lexdfa::stepper", "no previous steps");
            return false;
        };
        self.automaton = snapshot.automaton;
        self.index = snapshot.index;
        self.pos = snapshot.pos;
        self.log.truncate(snapshot.log_len);
        self.steps.truncate(snapshot.steps_len);
        self.finished = snapshot.finished;
        trace!(target: "lexdfa::stepper", index = self.index, "stepped back");
        true
    }

    /// 一直前进到文本末尾，返回本次执行的所有步骤
    pub fn run_to_end(&mut self) -> Vec<Step> {
        std::iter::from_fn(|| self.step_forward()).collect()
    }

    pub fn restart(&mut self) {
        self.automaton.reset();
        self.index = 0;
        self.pos = Position::start();
        self.history.clear();
        self.steps.clear();
        self.log.clear();
        self.log.push("=== STEPPING RESTARTED ===".to_string());
        self.finished = false;
        debug!(target: "lexdfa::stepper", "restarted");
    }

    /// 下一个待处理字符的下标
    pub fn position(&self) -> usize {
        self.index
    }

    pub fn row(&self) -> usize {
        self.pos.row
    }

    pub fn column(&self) -> usize {
        self.pos.column
    }

    pub fn current_char(&self) -> Option<char> {
        self.chars.get(self.index).copied()
    }

    pub fn automaton(&self) -> &Automaton {
        &self.automaton
    }

    pub fn state(&self) -> State {
        self.automaton.state()
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn log(&self) -> &[String] {
        &self.log
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn can_step_back(&self) -> bool {
        !self.history.is_empty()
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            automaton: self.automaton.clone(),
            index: self.index,
            pos: self.pos,
            log_len: self.log.len(),
            steps_len: self.steps.len(),
            finished: self.finished,
        }
    }

    /// 跳过不属于字符串或注释内容的空白，返回下一个要喂给自动机的字符
    fn skip_blanks(&mut self) -> Option<char> {
        while let Some(&c) = self.chars.get(self.index) {
            if !is_blank(c) || self.is_content(c) {
                return Some(c);
            }
            if !self.automaton.current_lexeme().is_empty() {
                self.log.push(format!(
                    "Lexeme closed: '{}'",
                    self.automaton.current_lexeme().escape_debug()
                ));
                self.automaton.reset();
            }
            self.log.push(format!("Skipping char: '{}'", blank_name(c)));
            self.pos.advance(c);
            self.index += 1;
        }
        None
    }

    /// 字符串内的空格/制表符和注释内的任何空白都是 lexeme 的内容
    fn is_content(&self, c: char) -> bool {
        let state = self.automaton.state();
        state.is_comment() || (state == State::StringBody && (c == ' ' || c == '\t'))
    }

    /// 喂入 `c` 之前是否应先闭合当前 lexeme
    fn closes_before(&self, c: char) -> bool {
        let state = self.automaton.state();
        if self.automaton.current_lexeme().is_empty() || self.is_content(c) {
            return false;
        }
        match state {
            State::Error | State::Initial => true,
            _ if state.is_final() && !state.is_comment() => {
                at_boundary(state, &self.chars, self.index - 1)
            }
            _ => false,
        }
    }
}

fn blank_name(c: char) -> &'static str {
    match c {
        ' ' => "SPACE",
        '\t' => "TAB",
        '\r' => "CR",
        _ => "NEWLINE",
    }
}
