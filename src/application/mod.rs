//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `RegionExtractor` - Parse one revision and collect its regions
//! - `ProcessUseCase` - Walk revisions, diff them, notify

pub mod extract;
pub mod process;

pub use extract::RegionExtractor;
pub use process::{ProcessUseCase, RunSummary};
