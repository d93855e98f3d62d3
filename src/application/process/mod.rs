//! Process Module
//!
//! Runs the extraction and diff pipeline over every file a revision walker
//! yields and forwards the reports to the registered notifiers.
//!
//! ## Structure
//!
//! - `result` - Result types (`RunSummary`)
//! - `use_case` - Core orchestration loop (`ProcessUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use herald::application::process::ProcessUseCase;
//!
//! let mut use_case = ProcessUseCase::new(extractor, notifiers);
//! let summary = use_case.execute(&mut walker)?;
//! ```

mod result;
mod use_case;

pub use result::RunSummary;
pub use use_case::ProcessUseCase;
