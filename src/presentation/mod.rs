//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//!
//! ## Structure
//!
//! - `cli` - Command-line definition
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//!
//! ## Usage
//!
//! ```ignore
//! use herald::presentation::factory;
//!
//! let notifiers = factory::create_notifiers(&config.notify.notifiers, options)?;
//! let mut use_case = factory::create_process_use_case(&config, notifiers);
//! let summary = use_case.execute(&mut walker)?;
//! ```

pub mod cli;
pub mod factory;

pub use cli::{Cli, ColorWhen, Commands};
