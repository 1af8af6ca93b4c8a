//! Parse-or-default view over a [`RawInputs`] map.
//!
//! Handlers never see raw strings. Every numeric read goes through
//! [`parse_number`], which accepts the longest leading decimal literal and
//! ignores the rest, so a half-typed or unit-suffixed field (`"80 lb"`)
//! still contributes a value. Anything without a numeric prefix reads as
//! zero.

use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use crate::models::RawInputs;

static NUMERIC_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?")
        .expect("numeric prefix pattern is a valid regex")
});

/// Parses the leading decimal literal of `raw`, skipping leading whitespace.
///
/// Returns `None` when there is no numeric prefix at all.
///
/// # Examples
///
/// ```
/// use calc_core::calculations::inputs::parse_number;
///
/// assert_eq!(parse_number(" 3.5"), Some(3.5));
/// assert_eq!(parse_number("80 lb"), Some(80.0));
/// assert_eq!(parse_number("1e3x"), Some(1000.0));
/// assert_eq!(parse_number("abc"), None);
/// ```
pub fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim_start();
    let literal = NUMERIC_PREFIX.find(trimmed)?.as_str();
    literal.parse().ok()
}

static INTEGER_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?\d+").expect("integer prefix pattern is a valid regex")
});

/// Parses the leading run of digits of `raw` (`"60 lb"` → 60, `"2.9"` → 2).
pub fn parse_integer(raw: &str) -> Option<f64> {
    let literal = INTEGER_PREFIX.find(raw.trim_start())?.as_str();
    literal.parse().ok()
}

/// Numeric and text accessors for one calculation.
#[derive(Debug, Clone, Copy)]
pub struct Inputs<'a> {
    raw: &'a RawInputs,
}

impl<'a> Inputs<'a> {
    pub fn new(raw: &'a RawInputs) -> Self {
        Self { raw }
    }

    /// Value of a number field, or `0` when absent or unparseable.
    pub fn number(
        &self,
        name: &str,
    ) -> f64 {
        match self.raw.get(name) {
            Some(raw) => parse_number(raw).unwrap_or_else(|| {
                if !raw.trim().is_empty() {
                    trace!(field = name, value = raw, "non-numeric input read as 0");
                }
                0.0
            }),
            None => 0.0,
        }
    }

    /// Value of a text or select field, or `""` when absent.
    pub fn text(
        &self,
        name: &str,
    ) -> &'a str {
        self.raw.get(name).unwrap_or("")
    }

    /// Value of a text or select field, or `fallback` when absent or empty.
    pub fn text_or(
        &self,
        name: &str,
        fallback: &'a str,
    ) -> &'a str {
        match self.text(name) {
            "" => fallback,
            value => value,
        }
    }

    /// Comma-separated numbers from a text field. Tokens without a numeric
    /// prefix are skipped.
    pub fn number_list(
        &self,
        name: &str,
    ) -> Vec<f64> {
        self.text(name)
            .split(',')
            .filter_map(|token| parse_number(token.trim()))
            .collect()
    }
}
