//! Number-set classification

use serde::{Deserialize, Serialize};

/// The standard number-set categories.
///
/// Mathematically ℕ ⊂ ℤ ⊂ ℚ, but a classified value always carries the
/// most specific applicable label, never a broader one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    Naturals,
    Integers,
    Rationals,
    Irrationals,
}

impl Classification {
    /// Human-readable label (fixed mapping).
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Naturals => "ℕ (Naturales)",
            Self::Integers => "ℤ (Enteros)",
            Self::Rationals => "ℚ (Racionales)",
            Self::Irrationals => "ℝ-ℚ (Irracionales)",
        }
    }

    /// Hex color a renderer paints points of this class with.
    pub fn color(&self) -> &'static str {
        match self {
            Self::Naturals => "#e74c3c",
            Self::Integers => "#3498db",
            Self::Rationals => "#27ae60",
            Self::Irrationals => "#f1c40f",
        }
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
