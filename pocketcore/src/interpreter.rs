//! Input interpreter — one button press at a time
//!
//! [`dispatch`] is a pure transition: it takes the current state by value
//! and returns the next one. Rules are checked in priority order:
//!
//! 1. **Clear** resets to the initial state.
//! 2. **Equals** evaluates only when both operands and an operator exist;
//!    otherwise it does nothing.
//! 3. **Operator** selects the pending operator once a first operand exists.
//! 4. **Digit** appends to the first operand, or to the second once an
//!    operator is pending.
//!
//! Digits are never validated on entry. Malformed operands surface as
//! `"Error"` when `=` is pressed.

use crate::evaluator;
use crate::state::CalculatorState;
use crate::token::{Digit, Operator, Token};

pub fn dispatch(state: CalculatorState, token: Token) -> CalculatorState {
    tracing::trace!(%token, display = %state.display, "dispatch");
    match token {
        Token::Clear => CalculatorState::new(),
        Token::Equals => equals(state),
        Token::Operator(op) => select_operator(state, op),
        Token::Digit(digit) => push_digit(state, digit),
    }
}

/// Feed a sequence of tokens through [`dispatch`].
pub fn dispatch_all<I>(state: CalculatorState, tokens: I) -> CalculatorState
where
    I: IntoIterator<Item = Token>,
{
    tokens.into_iter().fold(state, dispatch)
}

fn equals(mut state: CalculatorState) -> CalculatorState {
    let op = match state.pending_operator {
        Some(op) if !state.first_operand.is_empty() && !state.second_operand.is_empty() => op,
        _ => return state,
    };

    let result = evaluator::evaluate_or_marker(&state.first_operand, &state.second_operand, op);
    tracing::debug!(
        first = %state.first_operand,
        %op,
        second = %state.second_operand,
        %result,
        "evaluated"
    );

    state.display = result.clone();
    state.first_operand = result;
    state.second_operand.clear();
    state.pending_operator = None;
    state
}

fn select_operator(mut state: CalculatorState, op: Operator) -> CalculatorState {
    if state.first_operand.is_empty() {
        return state;
    }
    // A second operand typed so far is kept; only the operator changes.
    state.pending_operator = Some(op);
    state.display = format!("{} {}", state.first_operand, op);
    state
}

fn push_digit(mut state: CalculatorState, digit: Digit) -> CalculatorState {
    match state.pending_operator {
        None => {
            state.first_operand.push(digit.as_char());
            state.display = state.first_operand.clone();
        }
        Some(op) => {
            state.second_operand.push(digit.as_char());
            state.display = format!("{} {} {}", state.first_operand, op, state.second_operand);
        }
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(labels: &[&str]) -> CalculatorState {
        let tokens = labels
            .iter()
            .map(|l| Token::from_label(l).expect("known label"));
        dispatch_all(CalculatorState::new(), tokens)
    }

    #[test]
    fn test_digits_accumulate_first_operand() {
        for seq in ["0", "7", "42", "0012", "9876543210"] {
            let labels: Vec<String> = seq.chars().map(|c| c.to_string()).collect();
            let labels: Vec<&str> = labels.iter().map(String::as_str).collect();
            let state = press(&labels);
            assert_eq!(state.first_operand(), seq);
            assert_eq!(state.display(), seq);
            assert_eq!(state.pending_operator(), None);
            assert_eq!(state.second_operand(), "");
        }
    }

    #[test]
    fn test_end_to_end_addition() {
        let state = press(&["7", "+", "3", "="]);
        assert_eq!(state.display(), "10");
        assert_eq!(state.first_operand(), "10");
        assert_eq!(state.second_operand(), "");
        assert_eq!(state.pending_operator(), None);
    }

    #[test]
    fn test_display_while_typing_expression() {
        let state = press(&["1", "2", "*"]);
        assert_eq!(state.display(), "12 *");
        let state = dispatch(state, Token::from_label("4").unwrap());
        assert_eq!(state.display(), "12 * 4");
        let state = dispatch(state, Token::from_label("5").unwrap());
        assert_eq!(state.display(), "12 * 45");
        assert_eq!(state.second_operand(), "45");
        assert_eq!(dispatch(state, Token::Equals).display(), "540");
    }

    #[test]
    fn test_clear_resets_any_state() {
        for labels in [
            &[][..],
            &["5"][..],
            &["5", "/"][..],
            &["5", "/", "0"][..],
            &["5", "/", "0", "="][..],
        ] {
            let state = dispatch(press(labels), Token::Clear);
            assert!(state.is_initial());
        }
    }

    #[test]
    fn test_clear_is_idempotent() {
        let once = dispatch(press(&["8", "-", "2"]), Token::Clear);
        let twice = dispatch(once.clone(), Token::Clear);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_premature_equals_is_inert() {
        let state = press(&["4", "2"]);
        assert_eq!(dispatch(state.clone(), Token::Equals), state);

        let state = press(&["4", "2", "+"]);
        assert_eq!(dispatch(state.clone(), Token::Equals), state);

        let state = CalculatorState::new();
        assert_eq!(dispatch(state.clone(), Token::Equals), state);
    }

    #[test]
    fn test_operator_without_first_operand_is_inert() {
        let state = press(&["-"]);
        assert!(state.is_initial());
        let state = press(&["*", "/", "+"]);
        assert!(state.is_initial());
    }

    #[test]
    fn test_operator_replaces_pending_operator() {
        let state = press(&["9", "+", "-"]);
        assert_eq!(state.pending_operator(), Some(Operator::Minus));
        assert_eq!(state.display(), "9 -");
    }

    #[test]
    fn test_operator_keeps_typed_second_operand() {
        let state = press(&["9", "+", "4", "*"]);
        assert_eq!(state.display(), "9 *");
        assert_eq!(state.second_operand(), "4");
        assert_eq!(dispatch(state, Token::Equals).display(), "36");
    }

    #[test]
    fn test_result_chains_into_next_operation() {
        let state = press(&["7", "+", "3", "=", "*", "2", "="]);
        assert_eq!(state.display(), "20");
        assert_eq!(state.first_operand(), "20");
    }

    #[test]
    fn test_digits_append_to_result() {
        let state = press(&["2", "+", "3", "=", "1"]);
        assert_eq!(state.first_operand(), "51");
        assert_eq!(state.display(), "51");
    }

    #[test]
    fn test_division_by_zero_shows_infinity() {
        let state = press(&["1", "/", "0", "="]);
        assert_eq!(state.display(), "inf");
        assert_eq!(state.first_operand(), "inf");
    }

    #[test]
    fn test_error_is_recoverable() {
        // "NaN" parses, "NaN1" does not
        let state = press(&["0", "/", "0", "="]);
        assert_eq!(state.display(), "NaN");
        let state = dispatch_all(
            state,
            ["1", "+", "1", "="].map(|l| Token::from_label(l).unwrap()),
        );
        assert_eq!(state.display(), "Error");
        assert_eq!(state.first_operand(), "Error");

        // digits still work after an error, evaluation keeps failing
        let state = dispatch_all(
            state,
            ["4", "+", "1", "="].map(|l| Token::from_label(l).unwrap()),
        );
        assert_eq!(state.display(), "Error");

        // and Clear brings everything back
        assert!(dispatch(state, Token::Clear).is_initial());
    }

    #[test]
    fn test_invariant_holds_along_random_walk() {
        let labels = ["1", "+", "=", "C", "0", "/", "9", "*", "-", "=", "5", "C", "3"];
        let mut state = CalculatorState::new();
        // deterministic pseudo-random walk over the keypad
        let mut seed: u32 = 17;
        for _ in 0..500 {
            seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            let label = labels[(seed >> 16) as usize % labels.len()];
            state = dispatch(state, Token::from_label(label).unwrap());
            if !state.second_operand().is_empty() {
                assert!(!state.first_operand().is_empty());
                assert!(state.pending_operator().is_some());
            }
        }
    }
}
