//! Number-set classifier
//!
//! The evaluated value alone cannot decide the set: `π/π` and `1/3` both
//! produce values that look rational in floating point, and an irrational
//! value can land arbitrarily close to an integer. Classification
//! therefore inspects the symbolic shape of the original input alongside
//! the value, with a small fixed whitelist of identities that are known
//! to cancel irrationality.

use crate::eval::{sqrt_inner, strip_whitespace};
use numberline_core::{constants, Classification};

/// Syntactic identities that reduce an irrational-looking expression to a
/// rational value, substring-matched against whitespace-stripped input.
/// The list is deliberately fixed: novel self-canceling expressions
/// beyond these still classify as irrational.
const SELF_CANCELLATIONS: [&str; 17] = [
    "π/π", "pi/pi", "e/e", "φ/φ", "phi/phi", "τ/τ", "tau/tau", "√2/√2", "√3/√3", "√5/√5", "π-π",
    "pi-pi", "e-e", "φ-φ", "phi-phi", "2*π/τ", "τ/2*π",
];

/// Classify a finite value together with the original text it came from.
/// Total: every (finite value, input) pair gets a category.
pub fn classify(value: f64, original: &str) -> Classification {
    // Integral values are decided by the value alone.
    if value > 0.0 && is_integral(value) {
        return Classification::Naturals;
    }
    if is_integral(value) {
        return Classification::Integers;
    }

    let input = strip_whitespace(original);

    // A bare constant literal is irrational: every table key is.
    if constants::table().is_irrational_symbol(&input) {
        return Classification::Irrationals;
    }

    // `sqrt(...)`: the radicand decides. sqrt(16/4) is a natural even
    // though the text looks compound; sqrt(7) is irrational.
    if input.contains(constants::SQRT_CALL) {
        return classify_sqrt_span(&input);
    }

    // Any remaining radical glyph marks the value irrational.
    if input.contains(constants::RADICAL_GLYPH) {
        return Classification::Irrationals;
    }

    // Compound expressions over irrational symbols stay irrational unless
    // a whitelisted identity cancels the irrationality.
    if contains_operator(&input) && contains_irrational_marker(&input) {
        if SELF_CANCELLATIONS.iter().any(|p| input.contains(p)) {
            if value > 0.0 && is_integral(value) {
                return Classification::Naturals;
            }
            if is_integral(value) {
                return Classification::Integers;
            }
            return Classification::Rationals;
        }
        return Classification::Irrationals;
    }

    // Plain fractions and everything else read as rational.
    Classification::Rationals
}

fn is_integral(value: f64) -> bool {
    value.is_finite() && value.fract() == 0.0
}

fn contains_operator(input: &str) -> bool {
    input.chars().any(|c| matches!(c, '*' | '+' | '-' | '/'))
}

fn contains_irrational_marker(input: &str) -> bool {
    constants::IRRATIONAL_MARKERS
        .iter()
        .any(|marker| input.contains(marker))
}

/// Recompute the radicand of a `sqrt(...)` span with the evaluator's
/// fraction and plain-float rules. An integral root is natural (or zero,
/// integer); anything non-integral, negative or undeterminable is
/// irrational.
fn classify_sqrt_span(input: &str) -> Classification {
    let Some(inner) = sqrt_inner(input) else {
        return Classification::Irrationals;
    };

    let inner_value = if inner.contains('/') {
        let parts: Vec<&str> = inner.split('/').collect();
        if parts.len() == 2 {
            match (parts[0].parse::<f64>(), parts[1].parse::<f64>()) {
                (Ok(n), Ok(d)) if n.is_finite() && d.is_finite() && d != 0.0 => Some(n / d),
                _ => None,
            }
        } else {
            None
        }
    } else {
        inner.parse::<f64>().ok().filter(|v| v.is_finite())
    };

    match inner_value {
        Some(v) if v >= 0.0 => {
            let root = v.sqrt();
            if is_integral(root) {
                if root > 0.0 {
                    Classification::Naturals
                } else {
                    Classification::Integers
                }
            } else {
                Classification::Irrationals
            }
        }
        _ => Classification::Irrationals,
    }
}
