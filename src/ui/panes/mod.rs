//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`structure`]: the snapshot under the playback cursor
//! - [`narration`]: step title, description and a legend of the marks in view
//! - [`catalog`]: operations grouped by family, current one highlighted
//! - [`status`]: status bar with keybindings and playback state
//!
//! Each module exports a `render_*` function taking the frame, its area and
//! borrowed data. The line builders behind them are pure so they can be tested
//! and reused by text output.

pub mod catalog;
pub mod narration;
pub mod status;
pub mod structure;

pub use catalog::render_catalog_pane;
pub use narration::render_narration_pane;
pub use status::{render_status_bar, StatusRenderData};
pub use structure::{plain_text, render_structure_pane, structure_lines};
