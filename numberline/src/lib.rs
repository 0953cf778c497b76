//! Numberline - place and classify real numbers on a number line
//!
//! The core behind an interactive number line: free-text numeric
//! expressions (`1/2`, `sqrt(7)`, `2*π`, `√2`) are evaluated to `f64`,
//! classified into the standard number sets, and collected as points
//! supporting display ordering and pairwise distance queries.
//!
//! `evaluate` and `classify` are pure functions with no shared state.
//! `NumberLine` owns the one mutable collection; the embedding UI holds
//! it explicitly instead of reaching into globals.

mod arith;
mod classify;
mod eval;
mod registry;

pub use classify::classify;
pub use eval::evaluate;
pub use registry::{AddError, NumberLine, Point, DEFAULT_RANGE, DUPLICATE_EPSILON};

/// Re-export core types for embedders
pub use numberline_core::{codes, constants, Classification, EvalError};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        classify, evaluate, AddError, Classification, EvalError, NumberLine, Point,
    };
}
