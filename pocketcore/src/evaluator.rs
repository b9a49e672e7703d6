//! Evaluator — combines two operand strings with one operator
//!
//! Operands are parsed as `f64` and combined with plain IEEE-754
//! arithmetic. Results are rendered with `f64`'s `Display`, so whole
//! numbers print without a fractional part (`9`, not `9.0`) and division by
//! zero prints `inf`, `-inf` or `NaN` rather than failing.

use std::num::ParseFloatError;

use thiserror::Error;

use crate::token::Operator;

/// What the display shows when evaluation fails.
pub const ERROR_MARKER: &str = "Error";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvaluationError {
    #[error("invalid operand {operand:?}: {source}")]
    InvalidOperand {
        operand: String,
        #[source]
        source: ParseFloatError,
    },
    #[error("unknown operator {0:?}")]
    UnknownOperator(String),
}

/// Evaluate `a op b` where the operator is still a raw symbol.
pub fn evaluate(a: &str, b: &str, op: &str) -> Result<String, EvaluationError> {
    let op = Operator::from_symbol(op)
        .ok_or_else(|| EvaluationError::UnknownOperator(op.to_string()))?;
    apply(a, b, op)
}

/// Evaluate `a op b` for an already-typed operator.
pub fn apply(a: &str, b: &str, op: Operator) -> Result<String, EvaluationError> {
    let lhs = parse_operand(a)?;
    let rhs = parse_operand(b)?;
    Ok(format_number(op.apply(lhs, rhs)))
}

/// Like [`apply`], with any failure folded into [`ERROR_MARKER`].
pub fn evaluate_or_marker(a: &str, b: &str, op: Operator) -> String {
    match apply(a, b, op) {
        Ok(result) => result,
        Err(err) => {
            tracing::debug!(%err, "evaluation failed");
            ERROR_MARKER.to_string()
        }
    }
}

pub fn format_number(n: f64) -> String {
    n.to_string()
}

fn parse_operand(operand: &str) -> Result<f64, EvaluationError> {
    operand
        .parse::<f64>()
        .map_err(|source| EvaluationError::InvalidOperand {
            operand: operand.to_string(),
            source,
        })
}
