//! Point registry
//!
//! The ordered collection of accepted points, plus the display-range and
//! duplicate policies. These are policies of the line the points sit on,
//! not of parsing or classification, which stay pure.

use crate::{classify, evaluate};
use numberline_core::{codes, Classification, EvalError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Two points closer than this are the same point.
pub const DUPLICATE_EPSILON: f64 = 1e-4;

/// The line spans -10..10 until told otherwise.
pub const DEFAULT_RANGE: f64 = 10.0;

/// An accepted, classified value paired with the text it was typed as.
/// Points are owned by the registry and never mutated in place; removal
/// and re-addition replace them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub value: f64,
    pub input: String,
    pub classification: Classification,
}

impl Point {
    /// Short form rendered next to a plotted point: `√2 ≈ 1.414`.
    pub fn label(&self) -> String {
        format!("{} ≈ {:.3}", self.input, self.value)
    }

    /// List-row form with full display precision: `√2 ≈ 1.414214`.
    pub fn summary(&self) -> String {
        format!("{} ≈ {:.6}", self.input, self.value)
    }
}

/// Why an input was not added to the line.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
pub enum AddError {
    #[error(transparent)]
    Eval(#[from] EvalError),

    /// The value evaluated fine but falls outside the displayed range.
    #[error("{value} is outside the current range (-{range} to {range})")]
    OutOfRange { value: f64, range: f64 },

    /// A point with (nearly) the same value is already on the line.
    #[error("{value} is already on the line (existing point at {existing})")]
    Duplicate { value: f64, existing: f64 },
}

impl AddError {
    /// Machine-readable reason code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Eval(e) => e.code(),
            Self::OutOfRange { .. } => codes::OUT_OF_RANGE,
            Self::Duplicate { .. } => codes::DUPLICATE_POINT,
        }
    }
}

/// The number line: an owned registry of classified points and the
/// current display range. All access is single-threaded and synchronous;
/// the embedding application serializes calls.
#[derive(Debug, Clone)]
pub struct NumberLine {
    points: Vec<Point>,
    range: f64,
}

impl NumberLine {
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            range: DEFAULT_RANGE,
        }
    }

    /// Builder: set the display range.
    pub fn with_range(mut self, range: f64) -> Self {
        self.range = range;
        self
    }

    pub fn range(&self) -> f64 {
        self.range
    }

    /// Change the display range. Points already on the line are kept even
    /// when the new range no longer covers them.
    pub fn set_range(&mut self, range: f64) {
        self.range = range;
    }

    /// Evaluate, check and classify one input, then add it. The checks
    /// run in the order a user sees them fail: evaluation, range,
    /// duplicate.
    pub fn add(&mut self, input: &str) -> Result<&Point, AddError> {
        let value = evaluate(input)?;

        if value.abs() > self.range {
            return Err(AddError::OutOfRange {
                value,
                range: self.range,
            });
        }

        if let Some(existing) = self
            .points
            .iter()
            .find(|p| (p.value - value).abs() < DUPLICATE_EPSILON)
        {
            return Err(AddError::Duplicate {
                value,
                existing: existing.value,
            });
        }

        let classification = classify(value, input);
        self.points.push(Point {
            value,
            input: input.to_string(),
            classification,
        });
        Ok(&self.points[self.points.len() - 1])
    }

    /// Remove the point at `index`, keeping insertion order of the rest.
    pub fn remove(&mut self, index: usize) -> Option<Point> {
        if index < self.points.len() {
            Some(self.points.remove(index))
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Points in insertion order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Display-order copy, ascending by value. Renderers iterate over
    /// this copy rather than the live sequence.
    pub fn sorted(&self) -> Vec<Point> {
        let mut copy = self.points.clone();
        copy.sort_by(|a, b| a.value.total_cmp(&b.value));
        copy
    }

    /// Distance between two distinct points, by index. `None` for an
    /// unknown index or the same point selected twice.
    pub fn distance(&self, a: usize, b: usize) -> Option<f64> {
        if a == b {
            return None;
        }
        let pa = self.points.get(a)?;
        let pb = self.points.get(b)?;
        Some((pa.value - pb.value).abs())
    }
}

impl Default for NumberLine {
    fn default() -> Self {
        Self::new()
    }
}
