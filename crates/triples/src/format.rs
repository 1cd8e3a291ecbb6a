//! Locale-independent number formatting and the LaTeX listing lines.
//!
//! Numbers render like the `#.#` pattern: at most `max_fraction_digits` digits,
//! trailing zeros dropped, no dangling separator. Rounding is half-to-even on the
//! exact binary value (what `format!("{:.N}")` does).

use crate::triple::Triple;

/// Explicit number format; nothing here reads host locale state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NumberFormat {
    pub decimal_separator: char,
    pub max_fraction_digits: usize,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            decimal_separator: '.',
            max_fraction_digits: 1,
        }
    }
}

impl NumberFormat {
    pub fn format(&self, value: f64) -> String {
        let fixed = format!("{:.*}", self.max_fraction_digits, value);
        let trimmed = if fixed.contains('.') {
            fixed.trim_end_matches('0').trim_end_matches('.')
        } else {
            fixed.as_str()
        };
        // -0.04 rounds to "-0"
        let trimmed = if trimmed == "-0" { "0" } else { trimmed };
        if self.decimal_separator == '.' {
            trimmed.to_string()
        } else {
            trimmed.replace('.', &self.decimal_separator.to_string())
        }
    }
}

/// `<angle>°&: (<x>, <y>, <z>),\newline`
pub fn triple_line(triple: &Triple, fmt: &NumberFormat) -> String {
    format!(
        "{}°&: ({}, {}, {}),\\newline",
        fmt.format(triple.angle()),
        fmt.format(triple.x()),
        fmt.format(triple.y()),
        fmt.format(triple.hypotenuse()),
    )
}

pub fn summary_line(count: usize) -> String {
    format!("Number of triples: {count}")
}
