pub mod cell;
pub mod error;
pub mod formatter;
pub mod logging;
pub mod node;
pub mod paint;
pub mod reconcile;
pub mod ruler;
pub mod settings;
pub mod style;
pub mod styles;
pub mod theme;

// Core ruler view
pub use cell::{CellId, RulerCell};
pub use node::{Animation, KeyedChild, Layout, RulerNode};
pub use ruler::{equals, Ruler};

// Style strategy and built-in styles
pub use style::{CellBody, CellConfiguration, MarkLabel, RulerStyle, Tick, TickAlignment, TickKind};
pub use styles::{BlankCenteredStyle, BlankStyle, CenteredStyle, PrimaryStyle, StyleRegistry};

pub use error::RulerError;
pub use formatter::{MarkFormatter, NumberFormatter};
pub use reconcile::RulerCache;
pub use settings::RulerSettings;

// Export theme support
pub use theme::{hex_to_color32, with_alpha, RulerColors, Theme, ThemeManager};
