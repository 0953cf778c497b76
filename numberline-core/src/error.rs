//! Structured evaluation failures
//!
//! Errors never panic the core. They are values precise enough for a
//! caller to tell "bad syntax" apart from "valid syntax, bad domain".

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Machine-readable reason codes.
pub mod codes {
    pub const INVALID_EXPRESSION: &str = "INVALID_EXPRESSION";
    pub const DIV_ZERO: &str = "DIV_ZERO";
    pub const NEGATIVE_RADICAND: &str = "NEGATIVE_RADICAND";
    pub const OUT_OF_RANGE: &str = "OUT_OF_RANGE";
    pub const DUPLICATE_POINT: &str = "DUPLICATE_POINT";
}

/// The input text could not be interpreted as a real-number expression.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
pub enum EvalError {
    /// No parsing stage recognized the text: malformed syntax, illegal
    /// characters, or no parse at all.
    #[error("not a valid number expression: {input:?}")]
    InvalidExpression { input: String },

    /// A structurally valid fraction with a zero denominator.
    #[error("division by zero in {input:?}")]
    DivisionByZero { input: String },

    /// A structurally valid radical with a negative radicand.
    #[error("negative radicand {radicand} in {input:?}")]
    NegativeRadicand { radicand: f64, input: String },
}

impl EvalError {
    /// Machine-readable reason code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidExpression { .. } => codes::INVALID_EXPRESSION,
            Self::DivisionByZero { .. } => codes::DIV_ZERO,
            Self::NegativeRadicand { .. } => codes::NEGATIVE_RADICAND,
        }
    }
}
