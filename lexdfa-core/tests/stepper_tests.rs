//! 单步执行器测试

use lexdfa_core::{State, StepOutcome, Stepper, TokenKind};
use pretty_assertions::assert_eq;

const SOURCE: &str = "SI x = 12.5; // fin\n/* a **/ \"s t\"";

#[test]
fn test_back_and_forward_reproduce_logs() {
    let mut forward = Stepper::new(SOURCE);
    let straight = forward.run_to_end();
    let straight_log = forward.log().to_vec();

    let mut wobbly = Stepper::new(SOURCE);
    let mut steps = Vec::new();
    while let Some(step) = wobbly.step_forward() {
        // 每前进一步都后退再重做
        assert!(wobbly.step_back());
        let again = wobbly.step_forward().unwrap();
        assert_eq!(again, step);
        steps.push(again);
    }
    assert_eq!(steps, straight);
    assert_eq!(wobbly.log(), straight_log.as_slice());
}

#[test]
fn test_full_rewind() {
    let mut stepper = Stepper::new(SOURCE);
    let initial_log = stepper.log().to_vec();
    stepper.run_to_end();
    while stepper.step_back() {}
    assert_eq!(stepper.position(), 0);
    assert_eq!((stepper.row(), stepper.column()), (1, 1));
    assert_eq!(stepper.state(), State::Initial);
    assert!(stepper.steps().is_empty());
    // 最后一次失败的后退不改变日志
    assert_eq!(stepper.log(), initial_log.as_slice());
}

#[test]
fn test_operator_glued_to_identifier_is_rejected() {
    let mut stepper = Stepper::new("x=y");
    let steps = stepper.run_to_end();
    let outcomes: Vec<StepOutcome> = steps.iter().map(|s| s.outcome).collect();
    assert_eq!(
        outcomes,
        vec![
            StepOutcome::Accepted(TokenKind::Identifier),
            StepOutcome::Accepted(TokenKind::Operator),
            StepOutcome::Rejected,
        ]
    );
    assert_eq!(steps[2].lexeme, "=y");
}

#[test]
fn test_outcomes_over_source() {
    let mut stepper = Stepper::new(SOURCE);
    let steps = stepper.run_to_end();

    let accepted: Vec<TokenKind> = steps
        .iter()
        .filter_map(|s| match s.outcome {
            StepOutcome::Accepted(kind) => Some(kind),
            _ => None,
        })
        .collect();
    assert!(accepted.contains(&TokenKind::ReservedWord));
    assert!(accepted.contains(&TokenKind::Decimal));
    assert!(accepted.contains(&TokenKind::LineComment));
    assert!(accepted.contains(&TokenKind::BlockComment));
    assert!(accepted.contains(&TokenKind::StringLit));

    let closed = steps
        .iter()
        .filter(|s| s.outcome == StepOutcome::CommentClosed)
        .count();
    assert_eq!(closed, 2);
    assert!(steps.iter().all(|s| s.outcome != StepOutcome::Rejected));
}

#[test]
fn test_step_positions_track_rows() {
    let mut stepper = Stepper::new("a\n  b");
    let steps = stepper.run_to_end();
    assert_eq!(steps.len(), 2);
    assert_eq!((steps[1].row, steps[1].column, steps[1].index), (2, 3, 4));
}

#[test]
fn test_step_after_finish_is_none() {
    let mut stepper = Stepper::new("x");
    assert!(stepper.step_forward().is_some());
    assert!(stepper.step_forward().is_none());
    assert!(stepper.is_finished());
    assert!(stepper.step_forward().is_none());
    assert_eq!(
        stepper
            .log()
            .iter()
            .filter(|l| l.as_str() == "=== STEPPING COMPLETE ===")
            .count(),
        1
    );
}

#[test]
fn test_trace_matches_automaton_replay() {
    let mut stepper = Stepper::new("abc");
    stepper.run_to_end();
    let lines = stepper.automaton().trace_lines();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "INITIAL → IDENTIFIER on 'a'");
}
