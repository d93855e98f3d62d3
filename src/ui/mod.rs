//! Terminal rendering
//!
//! - `theme` - colors and icons
//! - `json` - NDJSON output for `--json`
//! - `terminal` / `context` - capability detection and the resolved output mode
//! - `primitives` - icons and colored text
//! - `components` - line-numbered diffs
//! - `views` - complete blocks printed by notifiers and commands

pub mod components;
pub mod context;
pub mod json;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;

pub use context::UiContext;
