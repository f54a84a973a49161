//! Built-in ruler styles and the registry that names them.
//!
//! Four styles ship with the crate:
//! - `Primary`: ticks hang from the top edge, values labelled under unit ticks
//! - `Centered`: ticks centred vertically, values labelled
//! - `Blank`: top-aligned ticks, no labels
//! - `Blank Centered`: centred ticks, no labels
//!
//! # Examples
//!
//! ```
//! use sliding_ruler::StyleRegistry;
//!
//! let registry = StyleRegistry::new();
//! let blank = registry.get_style("Blank").unwrap();
//! assert!(!blank.has_marks());
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::error::{Result, RulerError};
use crate::formatter::{MarkFormatter, NumberFormatter};
use crate::style::{CellBody, CellConfiguration, MarkLabel, RulerStyle, Tick, TickAlignment, TickKind};

pub const DEFAULT_CELL_WIDTH: f32 = 120.0;
pub const DEFAULT_FRACTIONS: usize = 10;

static DEFAULT_FORMATTER: Lazy<NumberFormatter> = Lazy::new(NumberFormatter::new);

/// Shared tick layout for the built-in styles.
#[derive(Debug, Clone)]
struct TickGeometry {
    cell_width: f32,
    fractions: usize,
    alignment: TickAlignment,
    labelled: bool,
}

impl TickGeometry {
    fn body(&self, configuration: &CellConfiguration) -> CellBody {
        let fractions = self.fractions.max(1);
        let spacing = self.cell_width / fractions as f32;
        let value_per_tick = configuration.step / fractions as f32;

        let ticks = (0..fractions)
            .map(|i| {
                let kind = if i == 0 {
                    TickKind::Unit
                } else if fractions % 2 == 0 && i == fractions / 2 {
                    TickKind::Half
                } else {
                    TickKind::Fraction
                };
                let value = configuration.mark + i as f32 * value_per_tick;
                Tick {
                    offset: i as f32 * spacing,
                    kind,
                    in_bounds: configuration.bounds.contains(&value),
                }
            })
            .collect();

        let label = self.labelled.then(|| {
            let text = match &configuration.formatter {
                Some(formatter) => formatter.format(configuration.mark),
                None => DEFAULT_FORMATTER.format(configuration.mark),
            };
            MarkLabel {
                text,
                offset: 0.0,
                in_bounds: configuration.bounds.contains(&configuration.mark),
            }
        });

        CellBody {
            width: self.cell_width,
            alignment: self.alignment,
            ticks,
            label,
        }
    }
}

macro_rules! builtin_style {
    ($(#[$doc:meta])* $ty:ident, $name:literal, $alignment:expr, $labelled:expr) => {
        $(#[$doc])*
        #[derive(Debug, Clone)]
        pub struct $ty {
            geometry: TickGeometry,
        }

        impl $ty {
            pub fn new() -> Self {
                Self::with_cell(DEFAULT_CELL_WIDTH, DEFAULT_FRACTIONS)
            }

            /// Custom cell width and number of subdivisions per cell.
            pub fn with_cell(cell_width: f32, fractions: usize) -> Self {
                Self {
                    geometry: TickGeometry {
                        cell_width,
                        fractions,
                        alignment: $alignment,
                        labelled: $labelled,
                    },
                }
            }
        }

        impl Default for $ty {
            fn default() -> Self {
                Self::new()
            }
        }

        impl RulerStyle for $ty {
            fn name(&self) -> &str {
                $name
            }

            fn cell_width(&self) -> f32 {
                self.geometry.cell_width
            }

            fn make_cell_body(&self, configuration: &CellConfiguration) -> CellBody {
                self.geometry.body(configuration)
            }

            fn has_marks(&self) -> bool {
                self.geometry.labelled
            }
        }
    };
}

builtin_style!(
    /// Top-aligned ticks with a value label under each unit tick.
    PrimaryStyle, "Primary", TickAlignment::Top, true
);
builtin_style!(
    /// Vertically centred ticks with value labels.
    CenteredStyle, "Centered", TickAlignment::Center, true
);
builtin_style!(
    /// Top-aligned ticks only.
    BlankStyle, "Blank", TickAlignment::Top, false
);
builtin_style!(
    /// Vertically centred ticks only.
    BlankCenteredStyle, "Blank Centered", TickAlignment::Center, false
);

/// Name-indexed collection of styles, seeded with the built-ins.
pub struct StyleRegistry {
    styles: HashMap<String, Arc<dyn RulerStyle>>,
}

impl StyleRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            styles: HashMap::new(),
        };
        registry.register(Arc::new(PrimaryStyle::new()));
        registry.register(Arc::new(CenteredStyle::new()));
        registry.register(Arc::new(BlankStyle::new()));
        registry.register(Arc::new(BlankCenteredStyle::new()));
        registry
    }

    /// Adds a style, replacing any style with the same name.
    pub fn register(&mut self, style: Arc<dyn RulerStyle>) {
        tracing::debug!(style = style.name(), "registering ruler style");
        self.styles.insert(style.name().to_string(), style);
    }

    /// Looks up a style by name.
    pub fn get_style(&self, name: &str) -> Result<Arc<dyn RulerStyle>> {
        self.styles
            .get(name)
            .cloned()
            .ok_or_else(|| RulerError::UnknownStyle(name.to_string()))
    }

    /// All registered names, sorted.
    pub fn list_styles(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.styles.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }
}

impl Default for StyleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configuration(mark: f32, step: f32) -> CellConfiguration {
        CellConfiguration {
            mark,
            bounds: 0.0..=10.0,
            step,
            formatter: None,
        }
    }

    #[test]
    fn test_primary_body_layout() {
        let body = PrimaryStyle::new().make_cell_body(&configuration(2.0, 1.0));

        assert_eq!(body.width, DEFAULT_CELL_WIDTH);
        assert_eq!(body.alignment, TickAlignment::Top);
        assert_eq!(body.ticks.len(), DEFAULT_FRACTIONS);
        assert_eq!(body.ticks[0].kind, TickKind::Unit);
        assert_eq!(body.ticks[5].kind, TickKind::Half);
        assert_eq!(body.ticks[3].kind, TickKind::Fraction);
        assert_eq!(body.ticks[1].offset, 12.0);

        let label = body.label.unwrap();
        assert_eq!(label.text, "2");
        assert!(label.in_bounds);
    }

    #[test]
    fn test_ticks_outside_bounds_are_dimmed() {
        // Cell covers 9.5..10.5 in steps of 0.1; the bounds end at 10.
        let body = PrimaryStyle::new().make_cell_body(&configuration(9.5, 1.0));
        assert!(body.ticks[0].in_bounds);
        assert!(body.ticks[4].in_bounds);
        assert!(!body.ticks[6].in_bounds);
        assert!(!body.ticks[9].in_bounds);
    }

    #[test]
    fn test_label_uses_given_formatter() {
        let mut config = configuration(3.0, 1.0);
        config.formatter = Some(Arc::new(|value: f32| format!("{value}cm")));
        let body = CenteredStyle::new().make_cell_body(&config);

        assert_eq!(body.alignment, TickAlignment::Center);
        assert_eq!(body.label.unwrap().text, "3cm");
    }

    #[test]
    fn test_blank_styles_have_no_marks() {
        let blank = BlankStyle::new();
        let centered = BlankCenteredStyle::new();

        assert!(!blank.has_marks());
        assert!(!centered.has_marks());
        assert!(blank.make_cell_body(&configuration(1.0, 1.0)).label.is_none());
        assert_eq!(
            centered.make_cell_body(&configuration(1.0, 1.0)).alignment,
            TickAlignment::Center
        );
    }

    #[test]
    fn test_odd_fraction_count_has_no_half_tick() {
        let body = BlankStyle::with_cell(90.0, 3).make_cell_body(&configuration(0.0, 1.0));
        assert_eq!(body.ticks.len(), 3);
        assert!(body.ticks.iter().all(|t| t.kind != TickKind::Half));
        assert_eq!(body.ticks[2].offset, 60.0);
    }

    #[test]
    fn test_registry_lists_builtins() {
        let registry = StyleRegistry::new();
        assert_eq!(
            registry.list_styles(),
            vec!["Blank", "Blank Centered", "Centered", "Primary"]
        );
    }

    #[test]
    fn test_registry_unknown_style() {
        let registry = StyleRegistry::new();
        let err = registry.get_style("Neon").err().unwrap();
        assert_eq!(err, RulerError::UnknownStyle("Neon".to_string()));
    }

    #[test]
    fn test_registry_replaces_by_name() {
        let mut registry = StyleRegistry::new();
        registry.register(Arc::new(PrimaryStyle::with_cell(60.0, 6)));
        assert_eq!(registry.get_style("Primary").unwrap().cell_width(), 60.0);
        assert_eq!(registry.list_styles().len(), 4);
    }
}
