//! 词法分析驱动
//!
//! 流程：
//! 1. 注释预处理（`preprocess::strip_comments`），得到注释 token 和去注释缓冲区
//! 2. 主扫描：每个 lexeme 一个自动机实例，按边界策略决定何时闭合
//! 3. 闭合的 lexeme 转为 token 或错误，错误附带两条建议
//! 4. 两路 token 按 (行, 列) 合并
//!
//! `analyze` 不会失败：词法错误作为结果的一部分返回。

pub mod diagnostics;
pub mod error;
pub mod preprocess;
pub mod report;

pub use diagnostics::{Diagnostics, SuggestionRule};
pub use error::{ErrorCause, LexicalError};
pub use preprocess::{strip_comments, Preprocessed};
pub use report::{render_report, Summary};

use crate::automaton::{next_state, Automaton, CharClass, State};
use crate::position::Position;
use crate::token::{Token, TokenKind};
use lexdfa_config::AnalyzerConfig;
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, info, trace};

/// 强制闭合 lexeme 的单字符符号
pub const BOUNDARY_SYMBOLS: &str = "()[]{};:,+-*/%=.<>";

/// (lexeme, kind) 出现次数
pub type LexemeFrequency = BTreeMap<(String, TokenKind), usize>;

/// 一次分析的全部输出
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalysisResult {
    /// 按位置排序，包含注释和错误 token
    pub tokens: Vec<Token>,
    /// 按位置排序
    pub errors: Vec<LexicalError>,
    pub log: Vec<String>,
    pub frequency: LexemeFrequency,
    pub suggestion_counts: BTreeMap<SuggestionRule, usize>,
}

impl AnalysisResult {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// 不含错误 token 的有效 token
    pub fn recognized(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter().filter(|t| !t.kind().is_error())
    }

    pub fn summary(&self) -> Summary {
        Summary::of(self)
    }

    pub fn report(&self) -> String {
        render_report(self)
    }
}

/// 词法分析器
///
/// 每次 `analyze` 都会清空上一次的结果。
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    config: AnalyzerConfig,
    result: AnalysisResult,
}

impl Analyzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: AnalyzerConfig) -> Self {
        Self {
            config,
            result: AnalysisResult::default(),
        }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// 分析一段文本，返回本次结果的引用
    pub fn analyze(&mut self, text: &str) -> &AnalysisResult {
        self.result = Scan::new(&self.config).run(text);
        &self.result
    }

    pub fn tokens(&self) -> &[Token] {
        &self.result.tokens
    }

    pub fn errors(&self) -> &[LexicalError] {
        &self.result.errors
    }

    pub fn analysis_log(&self) -> &[String] {
        &self.result.log
    }

    pub fn lexeme_frequency(&self) -> &LexemeFrequency {
        &self.result.frequency
    }

    pub fn suggestion_stats(&self) -> &BTreeMap<SuggestionRule, usize> {
        &self.result.suggestion_counts
    }

    pub fn report(&self) -> String {
        render_report(&self.result)
    }

    pub fn result(&self) -> &AnalysisResult {
        &self.result
    }

    pub fn into_result(self) -> AnalysisResult {
        self.result
    }
}

/// 使用默认配置分析
pub fn analyze(text: &str) -> AnalysisResult {
    Scan::new(&AnalyzerConfig::default()).run(text)
}

pub(crate) fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

/// 当前 lexeme 是否应在 `index` 处的字符之后闭合
///
/// 前提：自动机处于接受状态。边界符号只有在当前状态对它没有转移时才闭合，
/// 因此 `12.5` 不会在小数点处被切开。
pub fn at_boundary(state: State, buffer: &[char], index: usize) -> bool {
    match buffer.get(index + 1) {
        None => true,
        Some(&next) if is_blank(next) => true,
        Some(&next) => {
            BOUNDARY_SYMBOLS.contains(next) && next_state(state, CharClass::of(next)).is_none()
        }
    }
}

/// 单次扫描的可变状态
struct Scan<'a> {
    config: &'a AnalyzerConfig,
    diagnostics: Diagnostics,
    tokens: Vec<Token>,
    errors: Vec<LexicalError>,
    log: Vec<String>,
    frequency: LexemeFrequency,
    /// 预处理阶段已输出的注释起点 (行, 列)
    comment_starts: BTreeSet<(usize, usize)>,
}

impl<'a> Scan<'a> {
    fn new(config: &'a AnalyzerConfig) -> Self {
        Self {
            config,
            diagnostics: Diagnostics::new(),
            tokens: Vec::new(),
            errors: Vec::new(),
            log: Vec::new(),
            frequency: BTreeMap::new(),
            comment_starts: BTreeSet::new(),
        }
    }

    fn run(mut self, text: &str) -> AnalysisResult {
        self.log.push("=== STARTING LEXICAL ANALYSIS ===".to_string());

        if text.chars().all(is_blank) {
            debug!(target: "lexdfa::analyzer", "empty input");
            self.log.push("Empty input text".to_string());
            return self.finish();
        }

        let Preprocessed {
            buffer,
            comments,
            unterminated,
        } = strip_comments(text);

        for comment in comments {
            self.comment_starts.insert((comment.row(), comment.column()));
            self.log.push(recognized_line(&comment));
            self.count(comment.lexeme(), comment.kind());
            self.tokens.push(comment);
        }

        if let Some(token) = unterminated {
            let index = char_index(&buffer, token.row(), token.column());
            let start = Position::new(token.row(), token.column());
            let failing = token.lexeme().chars().last().unwrap_or('*');
            self.emit_error(
                token.lexeme(),
                start,
                ErrorCause::UnterminatedComment,
                failing,
                &buffer,
                index,
            );
        }

        self.scan(&buffer);

        // 预处理与主扫描的 token 按位置合并（稳定排序）
        self.tokens.sort_by_key(|t| (t.row(), t.column()));
        self.errors.sort_by_key(|e| (e.row, e.column));

        self.log.push("=== ANALYSIS COMPLETE ===".to_string());
        self.log.push(format!("Total tokens: {}", self.tokens.len()));
        self.log.push(format!("Total errors: {}", self.errors.len()));
        if !self.diagnostics.counts().is_empty() {
            self.log.push(format!(
                "Suggestion rules applied: {}",
                self.diagnostics.counts().len()
            ));
        }

        info!(
            target: "lexdfa::analyzer",
            tokens = self.tokens.len(),
            errors = self.errors.len(),
            "analysis complete"
        );
        self.finish()
    }

    fn scan(&mut self, buffer: &[char]) {
        let mut automaton = Automaton::new();
        // 正在累积的 lexeme 的起始位置
        let mut open: Option<Position> = None;
        let mut pos = Position::start();

        for (index, &c) in buffer.iter().enumerate() {
            let in_string = open.is_some() && automaton.state() == State::StringBody;

            if is_blank(c) && !(in_string && (c == ' ' || c == '\t')) {
                if let Some(start) = open.take() {
                    self.close(&automaton, start, buffer, index - 1);
                    automaton.reset();
                }
                pos.advance(c);
                continue;
            }

            let start = match open {
                Some(start) => start,
                None => {
                    automaton.reset();
                    open = Some(pos);
                    pos
                }
            };

            let state = automaton.transition(c);
            if state == State::Error {
                let from = automaton
                    .trace()
                    .last()
                    .map(|step| step.from)
                    .unwrap_or(State::Initial);
                self.log_transitions(&automaton);
                let lexeme = automaton.current_lexeme().to_string();
                self.emit_error(
                    &lexeme,
                    start,
                    ErrorCause::NoTransition { state: from, ch: c },
                    c,
                    buffer,
                    index,
                );
                self.end_transitions(&automaton);
                automaton.reset();
                open = None;
            } else if state == State::Initial {
                // `*/` 在主扫描中闭合了注释
                self.close(&automaton, start, buffer, index);
                automaton.reset();
                open = None;
            } else if automaton.is_final_state() && at_boundary(state, buffer, index) {
                self.close(&automaton, start, buffer, index);
                automaton.reset();
                open = None;
            }

            pos.advance(c);
        }

        if let Some(start) = open {
            trace!(target: "lexdfa::analyzer", "force-closing lexeme at end of input");
            self.close(&automaton, start, buffer, buffer.len().saturating_sub(1));
        }
    }

    /// 闭合一个 lexeme；`last` 是它最后一个字符在缓冲区中的下标
    fn close(&mut self, automaton: &Automaton, start: Position, buffer: &[char], last: usize) {
        let lexeme = automaton.current_lexeme().to_string();
        if lexeme.trim().is_empty() {
            return;
        }
        self.log_transitions(automaton);

        let replayed;
        let judge = if self.config.replay_on_close {
            replayed = Automaton::replay(&lexeme);
            &replayed
        } else {
            automaton
        };
        let state = judge.state();
        let accepted = if judge.is_final_state() {
            Some(judge.token_kind())
        } else {
            judge.closed_comment()
        };

        if let Some(kind) = accepted {
            if kind.is_comment() && self.comment_starts.contains(&(start.row, start.column)) {
                // 注释已在预处理阶段输出
                debug!(target: "lexdfa::analyzer", lexeme = %lexeme, "skipping comment from main scan");
            } else {
                let token = Token::new(kind, lexeme.as_str(), start.row, start.column);
                debug!(
                    target: "lexdfa::analyzer",
                    row = start.row,
                    column = start.column,
                    kind = kind.name(),
                    lexeme = %lexeme,
                    "token"
                );
                self.log.push(recognized_line(&token));
                self.count(&lexeme, kind);
                self.tokens.push(token);
            }
        } else {
            let failing = lexeme.chars().last().unwrap_or(' ');
            self.emit_error(
                &lexeme,
                start,
                ErrorCause::IncompleteLexeme { state },
                failing,
                buffer,
                last,
            );
        }

        self.end_transitions(automaton);
    }

    fn emit_error(
        &mut self,
        lexeme: &str,
        start: Position,
        cause: ErrorCause,
        failing_char: char,
        buffer: &[char],
        index: usize,
    ) {
        let suggestion =
            self.diagnostics
                .generate_suggestion(lexeme, failing_char, start.row, start.column);
        let context_suggestion = self.diagnostics.context_suggestion(buffer, index);

        let error = LexicalError {
            row: start.row,
            column: start.column,
            lexeme: lexeme.to_string(),
            cause,
            suggestion,
            context_suggestion,
        };
        debug!(
            target: "lexdfa::analyzer",
            row = start.row,
            column = start.column,
            lexeme,
            cause = %error.cause,
            "lexical error"
        );

        self.log.extend(error.to_string().lines().map(str::to_string));
        self.tokens
            .push(Token::new(TokenKind::Error, lexeme, start.row, start.column));
        self.count(lexeme, TokenKind::Error);
        self.errors.push(error);
    }

    fn log_transitions(&mut self, automaton: &Automaton) {
        if !self.config.record_transitions || automaton.trace().is_empty() {
            return;
        }
        self.log.push(format!(
            "--- transitions for: '{}'",
            automaton.current_lexeme()
        ));
        self.log
            .extend(automaton.trace().iter().map(|step| format!("  {step}")));
    }

    fn end_transitions(&mut self, automaton: &Automaton) {
        if self.config.record_transitions && !automaton.trace().is_empty() {
            self.log.push("--- end of transitions".to_string());
        }
    }

    fn count(&mut self, lexeme: &str, kind: TokenKind) {
        *self
            .frequency
            .entry((lexeme.to_string(), kind))
            .or_insert(0) += 1;
    }

    fn finish(self) -> AnalysisResult {
        AnalysisResult {
            tokens: self.tokens,
            errors: self.errors,
            log: self.log,
            frequency: self.frequency,
            suggestion_counts: self.diagnostics.into_counts(),
        }
    }
}

fn recognized_line(token: &Token) -> String {
    format!(
        "Token recognized: {} '{}' at row {}, column {}",
        token.kind(),
        token.lexeme(),
        token.row(),
        token.column()
    )
}

/// 由 1-based 行列号求缓冲区下标
fn char_index(buffer: &[char], row: usize, column: usize) -> usize {
    let mut pos = Position::start();
    for (index, &c) in buffer.iter().enumerate() {
        if pos.row == row && pos.column == column {
            return index;
        }
        pos.advance(c);
    }
    buffer.len()
}
