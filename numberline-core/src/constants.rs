//! Named mathematical constants and radicals
//!
//! A fixed symbol→value table: glyph forms (`π`, `√2`) and ASCII aliases
//! (`pi`, `phi`, `tau`) are distinct keys, aliases map to bit-identical
//! values, and negated radicals are their own keys. Keys are
//! case-sensitive and the table is immutable for the process lifetime.

use std::sync::OnceLock;

/// The radical glyph, a structural marker distinct from any table key.
pub const RADICAL_GLYPH: char = '√';

/// The call-notation prefix, a structural marker distinct from any table key.
pub const SQRT_CALL: &str = "sqrt(";

/// Substrings whose presence marks an expression as potentially
/// irrational: the named constants plus the structural radical markers.
pub const IRRATIONAL_MARKERS: [&str; 11] = [
    "π", "pi", "e", "φ", "phi", "τ", "tau", "ln2", "ln10", "√", "sqrt",
];

/// The symbol→value table.
///
/// Entries are held longest-key-first so that textual substitution never
/// corrupts an overlapping key: `√2` must not fire inside `√20`, nor
/// inside `-√2`.
pub struct ConstantTable {
    entries: Vec<(&'static str, f64)>,
}

impl ConstantTable {
    fn build() -> Self {
        let phi = (1.0 + 5.0_f64.sqrt()) / 2.0;
        let mut entries: Vec<(&'static str, f64)> = vec![
            ("π", std::f64::consts::PI),
            ("pi", std::f64::consts::PI),
            ("e", std::f64::consts::E),
            ("φ", phi),
            ("phi", phi),
            ("τ", std::f64::consts::TAU),
            ("tau", std::f64::consts::TAU),
            ("ln2", std::f64::consts::LN_2),
            ("ln10", std::f64::consts::LN_10),
            ("√2", 2.0_f64.sqrt()),
            ("√3", 3.0_f64.sqrt()),
            ("√5", 5.0_f64.sqrt()),
            ("√7", 7.0_f64.sqrt()),
            ("√8", 8.0_f64.sqrt()),
            ("√10", 10.0_f64.sqrt()),
            ("√11", 11.0_f64.sqrt()),
            ("√12", 12.0_f64.sqrt()),
            ("√13", 13.0_f64.sqrt()),
            ("√15", 15.0_f64.sqrt()),
            ("√17", 17.0_f64.sqrt()),
            ("√19", 19.0_f64.sqrt()),
            ("√20", 20.0_f64.sqrt()),
            ("-√2", -(2.0_f64.sqrt())),
            ("-√3", -(3.0_f64.sqrt())),
            ("-√5", -(5.0_f64.sqrt())),
        ];
        // Stable sort: equal-length keys keep their definition order.
        entries.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
        Self { entries }
    }

    /// Exact, case-sensitive lookup.
    pub fn lookup(&self, key: &str) -> Option<f64> {
        self.entries.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
    }

    /// Every entry in this table names an irrational constant, so key
    /// membership doubles as the irrationality predicate.
    pub fn is_irrational_symbol(&self, key: &str) -> bool {
        self.lookup(key).is_some()
    }

    /// Entries in longest-key-first order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Process-wide table, initialized on first use. Immutable afterwards,
/// safe to read from any thread.
pub fn table() -> &'static ConstantTable {
    static TABLE: OnceLock<ConstantTable> = OnceLock::new();
    TABLE.get_or_init(ConstantTable::build)
}
