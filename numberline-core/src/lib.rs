//! Numberline Core - Fundamental types
//!
//! This crate provides the leaf types used throughout Numberline:
//! - `Classification`: number-set category of an accepted value
//! - `constants`: the fixed symbol→value table of named constants
//! - `EvalError`: structured evaluation failures

mod classification;
mod error;

pub mod constants;

pub use classification::Classification;
pub use error::{codes, EvalError};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::error::codes;
    pub use crate::{constants, Classification, EvalError};
}

#[cfg(test)]
mod tests {
    use super::*;

    mod constant_tests {
        use super::constants;

        #[test]
        fn test_lookup_glyphs() {
            let table = constants::table();
            assert_eq!(table.lookup("π"), Some(std::f64::consts::PI));
            assert_eq!(table.lookup("τ"), Some(std::f64::consts::TAU));
            assert_eq!(table.lookup("e"), Some(std::f64::consts::E));
            assert_eq!(table.lookup("√2"), Some(2.0_f64.sqrt()));
        }

        #[test]
        fn test_aliases_are_bit_identical() {
            let table = constants::table();
            assert_eq!(table.lookup("pi"), table.lookup("π"));
            assert_eq!(table.lookup("phi"), table.lookup("φ"));
            assert_eq!(table.lookup("tau"), table.lookup("τ"));
        }

        #[test]
        fn test_negated_radicals_are_separate_keys() {
            let table = constants::table();
            assert_eq!(table.lookup("-√2"), Some(-(2.0_f64.sqrt())));
            assert_eq!(table.lookup("-√3"), Some(-(3.0_f64.sqrt())));
            assert_eq!(table.lookup("-√5"), Some(-(5.0_f64.sqrt())));
            // Only 2, 3 and 5 carry negated forms.
            assert_eq!(table.lookup("-√7"), None);
        }

        #[test]
        fn test_lookup_is_case_sensitive() {
            let table = constants::table();
            assert_eq!(table.lookup("PI"), None);
            assert_eq!(table.lookup("Pi"), None);
            assert_eq!(table.lookup("E"), None);
        }

        #[test]
        fn test_lookup_absent() {
            assert_eq!(constants::table().lookup("√4"), None);
            assert_eq!(constants::table().lookup(""), None);
        }

        #[test]
        fn test_every_key_is_irrational() {
            let table = constants::table();
            for (key, _) in table.iter() {
                assert!(
                    table.is_irrational_symbol(key),
                    "table key {} should read as irrational",
                    key
                );
            }
            assert!(!table.is_irrational_symbol("42"));
        }

        #[test]
        fn test_iteration_is_longest_key_first() {
            let keys: Vec<&str> = constants::table().iter().map(|(k, _)| k).collect();
            for pair in keys.windows(2) {
                assert!(
                    pair[0].len() >= pair[1].len(),
                    "{} should not come before {}",
                    pair[0],
                    pair[1]
                );
            }
            // The overlap that motivates the ordering.
            let sqrt2 = keys.iter().position(|k| *k == "√2").unwrap();
            let sqrt20 = keys.iter().position(|k| *k == "√20").unwrap();
            let neg_sqrt2 = keys.iter().position(|k| *k == "-√2").unwrap();
            assert!(sqrt20 < sqrt2);
            assert!(neg_sqrt2 < sqrt2);
        }

        #[test]
        fn test_table_size() {
            assert_eq!(constants::table().len(), 25);
            assert!(!constants::table().is_empty());
        }

        #[test]
        fn test_markers_are_distinct_from_keys() {
            let table = constants::table();
            assert_eq!(table.lookup(&constants::RADICAL_GLYPH.to_string()), None);
            assert_eq!(table.lookup(constants::SQRT_CALL), None);
        }
    }

    mod classification_tests {
        use super::*;

        #[test]
        fn test_display_names() {
            assert_eq!(Classification::Naturals.display_name(), "ℕ (Naturales)");
            assert_eq!(Classification::Integers.display_name(), "ℤ (Enteros)");
            assert_eq!(Classification::Rationals.display_name(), "ℚ (Racionales)");
            assert_eq!(
                Classification::Irrationals.display_name(),
                "ℝ-ℚ (Irracionales)"
            );
        }

        #[test]
        fn test_display_matches_display_name() {
            let c = Classification::Naturals;
            assert_eq!(format!("{}", c), c.display_name());
        }

        #[test]
        fn test_colors() {
            assert_eq!(Classification::Naturals.color(), "#e74c3c");
            assert_eq!(Classification::Integers.color(), "#3498db");
            assert_eq!(Classification::Rationals.color(), "#27ae60");
            assert_eq!(Classification::Irrationals.color(), "#f1c40f");
        }

        #[test]
        fn test_serde_round_trip() {
            let json = serde_json::to_string(&Classification::Irrationals).unwrap();
            assert_eq!(json, "\"irrationals\"");
            let back: Classification = serde_json::from_str(&json).unwrap();
            assert_eq!(back, Classification::Irrationals);
        }
    }

    mod error_tests {
        use super::*;

        #[test]
        fn test_codes() {
            let err = EvalError::InvalidExpression {
                input: "abc".to_string(),
            };
            assert_eq!(err.code(), codes::INVALID_EXPRESSION);

            let err = EvalError::DivisionByZero {
                input: "1/0".to_string(),
            };
            assert_eq!(err.code(), codes::DIV_ZERO);

            let err = EvalError::NegativeRadicand {
                radicand: -4.0,
                input: "sqrt(-4)".to_string(),
            };
            assert_eq!(err.code(), codes::NEGATIVE_RADICAND);
        }

        #[test]
        fn test_display() {
            let err = EvalError::DivisionByZero {
                input: "1/0".to_string(),
            };
            assert!(format!("{}", err).contains("division by zero"));
        }

        #[test]
        fn test_serde_round_trip() {
            let err = EvalError::NegativeRadicand {
                radicand: -4.0,
                input: "sqrt(-4)".to_string(),
            };
            let json = serde_json::to_string(&err).unwrap();
            let back: EvalError = serde_json::from_str(&json).unwrap();
            assert_eq!(back, err);
        }
    }
}
