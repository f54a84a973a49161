//! UI panel rendering subsystem
//!
//! - Header panel (style, step, value and theme controls)
//! - Ruler panel (the sliding ruler and its drag handling)
//! - Status bar (render statistics)
//! - Panel manager (panel orchestration and layout)

pub mod header;
pub mod ruler_panel;
pub mod status_bar;
pub mod panel_manager;
