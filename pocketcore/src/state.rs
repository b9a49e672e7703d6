//! Calculator session state

use crate::token::Operator;

/// Text shown on a freshly cleared calculator.
pub const INITIAL_DISPLAY: &str = "0";

/// Everything the calculator remembers between button presses.
///
/// A second operand only accumulates once a first operand exists and an
/// operator has been chosen. New values are produced by
/// [`dispatch`](crate::interpreter::dispatch); nothing else mutates a state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculatorState {
    pub(crate) display: String,
    pub(crate) first_operand: String,
    pub(crate) second_operand: String,
    pub(crate) pending_operator: Option<Operator>,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorState {
    pub fn new() -> Self {
        Self {
            display: INITIAL_DISPLAY.to_string(),
            first_operand: String::new(),
            second_operand: String::new(),
            pending_operator: None,
        }
    }

    /// The text a front end should render, verbatim.
    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn first_operand(&self) -> &str {
        &self.first_operand
    }

    pub fn second_operand(&self) -> &str {
        &self.second_operand
    }

    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending_operator
    }

    pub fn is_initial(&self) -> bool {
        *self == Self::new()
    }
}
