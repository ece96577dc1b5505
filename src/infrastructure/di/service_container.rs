//! Service container for dependency injection
//!
//! Wires up all services with their dependencies.

use std::sync::Arc;

use crate::application::services::PuzzleService;
use crate::config::Settings;
use crate::domain::CATALOG;
use crate::infrastructure::traits::{Selector, SkimSelector};

/// Container holding all application services.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Puzzle service over the built-in catalog
    pub puzzle: PuzzleService,

    /// Interactive problem picker
    pub selector: Arc<dyn Selector>,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(settings: Settings) -> Self {
        Self::with_deps(settings, Arc::new(SkimSelector))
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(settings: Settings, selector: Arc<dyn Selector>) -> Self {
        Self {
            settings: Arc::new(settings),
            puzzle: PuzzleService::new(&CATALOG),
            selector,
        }
    }
}
