//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use crate::application::{ProcessUseCase, RegionExtractor};
use crate::config::Config;
use crate::domain::ports::ChangeNotifier;
use crate::error::HeraldResult;
use crate::infrastructure::{notifier_by_name, JavaSourceParser, NotifierOptions};

/// Type alias for the extractor over Java sources
pub type JavaRegionExtractor = RegionExtractor<JavaSourceParser>;

/// Type alias for the concrete ProcessUseCase
pub type ConcreteProcessUseCase = ProcessUseCase<JavaSourceParser>;

/// Create an extractor for the configured marker
pub fn create_extractor(config: &Config) -> JavaRegionExtractor {
    RegionExtractor::new(JavaSourceParser::new(), config.marker.marker_name())
}

/// Create notifiers by name, in the given order
pub fn create_notifiers(
    names: &[String],
    options: NotifierOptions,
) -> HeraldResult<Vec<Box<dyn ChangeNotifier>>> {
    names
        .iter()
        .map(|name| notifier_by_name(name, options))
        .collect()
}

/// Create a process use case with all dependencies wired up
pub fn create_process_use_case(
    config: &Config,
    notifiers: Vec<Box<dyn ChangeNotifier>>,
) -> ConcreteProcessUseCase {
    ProcessUseCase::new(create_extractor(config), notifiers)
}
