//! Expression evaluator
//!
//! Input is free text mixing glyphs, ASCII math and call notation, and no
//! single grammar covers the idioms users actually type. Evaluation
//! therefore runs a sequence of detectors, most specific first. The
//! ordering is load-bearing: several detectors overlap, and a plain
//! fraction like `1/2` must be read before the substituted decimal string
//! is handed to general arithmetic.

use crate::arith;
use numberline_core::{constants, EvalError};

/// Evaluate raw input text to a finite value.
///
/// Whitespace is insignificant and stripped up front. Successful results
/// are always finite; the same literal evaluates to bit-identical values
/// on every call.
pub fn evaluate(raw: &str) -> Result<f64, EvalError> {
    let input = strip_whitespace(raw);

    // Stage 1: the whole input is a constant-table key.
    if let Some(value) = constants::table().lookup(&input) {
        return Ok(value);
    }

    // Stage 2: replace constant keys with their decimal renderings.
    // Only the fallback stages below look at this form.
    let substituted = substitute_constants(&input);

    // Stage 3: plain two-operand fraction on the original input.
    match two_part_fraction(&input) {
        Fraction::Value(v) => return Ok(v),
        Fraction::ZeroDenominator => {
            return Err(EvalError::DivisionByZero { input });
        }
        Fraction::NoMatch => {}
    }

    let mut pending: Option<EvalError> = None;

    // Stage 4: radical literal, `√n` or `-√n`.
    match radical_literal(&input) {
        Radical::Value(v) => return Ok(v),
        Radical::Negative(radicand) => {
            pending = Some(EvalError::NegativeRadicand {
                radicand,
                input: input.clone(),
            });
        }
        Radical::NoMatch => {}
    }

    // Stage 5: functional radical, `sqrt(...)`. A negative radicand here
    // fails this stage but evaluation still continues.
    match functional_radical(&input) {
        Radical::Value(v) => return Ok(v),
        Radical::Negative(radicand) => {
            pending = Some(EvalError::NegativeRadicand {
                radicand,
                input: input.clone(),
            });
        }
        Radical::NoMatch => {}
    }

    if arith::is_arithmetic(&substituted) {
        // Stage 6: general arithmetic on the substituted string.
        if let Some(value) = arith::eval(&substituted) {
            if value.is_finite() {
                return Ok(value);
            }
        }

        // Stage 7: last resort, the longest numeric prefix. Gated on the
        // same whitelist so text carrying identifiers or statements is
        // never recovered from.
        if let Some(value) = leading_float(&substituted) {
            return Ok(value);
        }
    }

    Err(pending.unwrap_or(EvalError::InvalidExpression { input }))
}

pub(crate) fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Replace every constant-key occurrence with the shortest round-trip
/// decimal rendering of its value. Table iteration is longest-key-first,
/// so overlapping keys (`√2` inside `√20` or `-√2`) substitute cleanly.
fn substitute_constants(input: &str) -> String {
    let mut out = input.to_string();
    for (key, value) in constants::table().iter() {
        if out.contains(key) {
            out = out.replace(key, &value.to_string());
        }
    }
    out
}

enum Fraction {
    Value(f64),
    ZeroDenominator,
    NoMatch,
}

enum Radical {
    Value(f64),
    Negative(f64),
    NoMatch,
}

fn has_minus_past_start(s: &str) -> bool {
    s.chars().skip(1).any(|c| c == '-')
}

/// The plain-fraction rule: exactly two full float literals around a
/// single `/`, no `*` or `+` anywhere, no `-` past position 0. A leading
/// sign on the numerator is fine; `√2/√2` is not a fraction because its
/// operands are not float literals.
fn two_part_fraction(input: &str) -> Fraction {
    if !input.contains('/')
        || input.contains('*')
        || input.contains('+')
        || has_minus_past_start(input)
    {
        return Fraction::NoMatch;
    }
    let parts: Vec<&str> = input.split('/').collect();
    if parts.len() != 2 {
        return Fraction::NoMatch;
    }
    let (numerator, denominator) = match (parts[0].parse::<f64>(), parts[1].parse::<f64>()) {
        (Ok(n), Ok(d)) if n.is_finite() && d.is_finite() => (n, d),
        _ => return Fraction::NoMatch,
    };
    if denominator == 0.0 {
        return Fraction::ZeroDenominator;
    }
    let quotient = numerator / denominator;
    if quotient.is_finite() {
        Fraction::Value(quotient)
    } else {
        Fraction::NoMatch
    }
}

/// `√n` and `-√n` with a bare float radicand. The remainder must parse as
/// a full literal, so compound forms like `√2/√2` fall through to the
/// substitution stages instead of being misread as `√(2/√2)`.
fn radical_literal(input: &str) -> Radical {
    if let Some(rest) = input.strip_prefix(constants::RADICAL_GLYPH) {
        if input.contains('*') || input.contains('+') || has_minus_past_start(input) {
            return Radical::NoMatch;
        }
        return match rest.parse::<f64>() {
            Ok(radicand) if radicand.is_finite() && radicand >= 0.0 => {
                Radical::Value(radicand.sqrt())
            }
            _ => Radical::NoMatch,
        };
    }

    if let Some(rest) = input.strip_prefix("-√") {
        if input.contains('*') || input.contains('+') {
            return Radical::NoMatch;
        }
        return match rest.parse::<f64>() {
            Ok(radicand) if radicand.is_finite() && radicand >= 0.0 => {
                Radical::Value(-radicand.sqrt())
            }
            Ok(radicand) if radicand.is_finite() => Radical::Negative(radicand),
            _ => Radical::NoMatch,
        };
    }

    Radical::NoMatch
}

/// The inner text of the first `sqrt(...)` span: everything between
/// `sqrt(` and the next `)`, when non-empty.
pub(crate) fn sqrt_inner(input: &str) -> Option<&str> {
    let start = input.find(constants::SQRT_CALL)? + constants::SQRT_CALL.len();
    let rest = &input[start..];
    let inner = &rest[..rest.find(')')?];
    if inner.is_empty() {
        None
    } else {
        Some(inner)
    }
}

/// `sqrt(...)` call notation. The inner text is read as, in order: a
/// plain two-operand fraction, whitelisted arithmetic (no `^` here), or a
/// leading float. An inner text that looks like a fraction but has
/// unparseable operands fails the stage outright rather than being
/// re-read by the later rules.
fn functional_radical(input: &str) -> Radical {
    let Some(inner) = sqrt_inner(input) else {
        return Radical::NoMatch;
    };

    let inner_value = if inner.contains('/')
        && !inner.contains('*')
        && !inner.contains('+')
        && !has_minus_past_start(inner)
    {
        match two_part_fraction(inner) {
            Fraction::Value(v) => Some(v),
            _ => None,
        }
    } else if arith::is_plain_arithmetic(inner) {
        arith::eval(inner)
    } else {
        leading_float(inner)
    };

    match inner_value {
        Some(v) if v.is_finite() && v >= 0.0 => Radical::Value(v.sqrt()),
        Some(v) if v.is_finite() => Radical::Negative(v),
        _ => Radical::NoMatch,
    }
}

/// Longest prefix of `s` that parses as a finite float.
fn leading_float(s: &str) -> Option<f64> {
    for end in (1..=s.len()).rev() {
        if !s.is_char_boundary(end) {
            continue;
        }
        if let Ok(v) = s[..end].parse::<f64>() {
            if v.is_finite() {
                return Some(v);
            }
        }
    }
    None
}
