//! Value-to-text conversion for ruler marks.

/// Converts a mark value into the text a style draws under its unit tick.
pub trait MarkFormatter: Send + Sync {
    fn format(&self, value: f32) -> String;
}

impl<F> MarkFormatter for F
where
    F: Fn(f32) -> String + Send + Sync,
{
    fn format(&self, value: f32) -> String {
        self(value)
    }
}

/// Decimal formatter with bounded fraction digits and optional grouping.
///
/// # Examples
/// ```
/// use sliding_ruler::{MarkFormatter, NumberFormatter};
///
/// let formatter = NumberFormatter::new().grouping(',');
/// assert_eq!(formatter.format(1234.5), "1,234.5");
/// assert_eq!(formatter.format(-0.0), "0");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct NumberFormatter {
    min_fraction_digits: usize,
    max_fraction_digits: usize,
    grouping_separator: Option<char>,
}

impl NumberFormatter {
    /// Up to two fraction digits, no grouping.
    pub fn new() -> Self {
        Self {
            min_fraction_digits: 0,
            max_fraction_digits: 2,
            grouping_separator: None,
        }
    }

    /// Sets the fraction digit range. `max` is raised to `min` if smaller.
    pub fn fraction_digits(mut self, min: usize, max: usize) -> Self {
        self.min_fraction_digits = min;
        self.max_fraction_digits = max.max(min);
        self
    }

    /// Inserts `separator` between groups of three integer digits.
    pub fn grouping(mut self, separator: char) -> Self {
        self.grouping_separator = Some(separator);
        self
    }

    fn group_digits(&self, digits: &str) -> String {
        let Some(separator) = self.grouping_separator else {
            return digits.to_string();
        };
        let chars: Vec<char> = digits.chars().collect();
        let mut result = String::with_capacity(chars.len() + chars.len() / 3);
        for (i, ch) in chars.iter().enumerate() {
            if i > 0 && (chars.len() - i) % 3 == 0 {
                result.push(separator);
            }
            result.push(*ch);
        }
        result
    }
}

impl Default for NumberFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkFormatter for NumberFormatter {
    fn format(&self, value: f32) -> String {
        if !value.is_finite() {
            return value.to_string();
        }

        let rendered = format!("{:.*}", self.max_fraction_digits, value.abs());
        let (int_part, frac_part) = match rendered.split_once('.') {
            Some((int_part, frac_part)) => (int_part, frac_part),
            None => (rendered.as_str(), ""),
        };

        let mut frac = frac_part.to_string();
        while frac.len() > self.min_fraction_digits && frac.ends_with('0') {
            frac.pop();
        }

        let is_zero = int_part.bytes().all(|b| b == b'0') && frac.bytes().all(|b| b == b'0');
        let mut text = String::new();
        if value.is_sign_negative() && !is_zero {
            text.push('-');
        }
        text.push_str(&self.group_digits(int_part));
        if !frac.is_empty() {
            text.push('.');
            text.push_str(&frac);
        }
        text
    }
}
