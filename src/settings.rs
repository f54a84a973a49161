//! Persisted ruler preferences.
//!
//! Stored as JSON through eframe storage by the demo. Missing fields fall
//! back to their defaults so older saved settings keep loading.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::formatter::NumberFormatter;
use crate::theme::DEFAULT_THEME;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulerSettings {
    /// Name of the style in the [`crate::StyleRegistry`].
    pub style: String,
    /// Name of the palette in the [`crate::theme::ThemeManager`].
    pub theme: String,
    /// Value covered by one cell.
    pub step: f32,
    /// Lower and upper bound of the valid range.
    pub bounds: (f32, f32),
    /// Maximum fraction digits of labels.
    pub fraction_digits: usize,
    /// Group thousands in labels.
    pub grouping: bool,
    /// Last value selected on the ruler.
    pub value: f32,
}

impl Default for RulerSettings {
    fn default() -> Self {
        Self {
            style: "Primary".to_string(),
            theme: DEFAULT_THEME.to_string(),
            step: 1.0,
            bounds: (-50.0, 50.0),
            fraction_digits: 2,
            grouping: true,
            value: 0.0,
        }
    }
}

impl RulerSettings {
    /// Bounds as an inclusive range, ordered low to high.
    pub fn bounds_range(&self) -> RangeInclusive<f32> {
        let (a, b) = self.bounds;
        if a <= b {
            a..=b
        } else {
            b..=a
        }
    }

    /// Label formatter described by these settings.
    pub fn formatter(&self) -> NumberFormatter {
        let formatter = NumberFormatter::new().fraction_digits(0, self.fraction_digits);
        if self.grouping {
            formatter.grouping(',')
        } else {
            formatter
        }
    }

    /// `value` clamped into the bounds.
    pub fn clamped_value(&self) -> f32 {
        let range = self.bounds_range();
        self.value.clamp(*range.start(), *range.end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatter::MarkFormatter;

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings: RulerSettings = serde_json::from_str(r#"{"style":"Blank","step":5.0}"#).unwrap();
        assert_eq!(settings.style, "Blank");
        assert_eq!(settings.step, 5.0);
        assert_eq!(settings.theme, DEFAULT_THEME);
        assert_eq!(settings.bounds, (-50.0, 50.0));
    }

    #[test]
    fn test_serde_preserves_values() {
        let settings = RulerSettings {
            style: "Centered".to_string(),
            value: 12.5,
            ..RulerSettings::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        let loaded: RulerSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_bounds_are_ordered() {
        let settings = RulerSettings {
            bounds: (10.0, -10.0),
            value: 20.0,
            ..RulerSettings::default()
        };
        assert_eq!(settings.bounds_range(), -10.0..=10.0);
        assert_eq!(settings.clamped_value(), 10.0);
    }

    #[test]
    fn test_formatter_follows_settings() {
        let settings = RulerSettings {
            fraction_digits: 1,
            ..RulerSettings::default()
        };
        assert_eq!(settings.formatter().format(12345.67), "12,345.7");

        let plain = RulerSettings {
            grouping: false,
            ..RulerSettings::default()
        };
        assert_eq!(plain.formatter().format(12345.0), "12345");
    }
}
