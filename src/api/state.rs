//! Application State
//!
//! Shared state accessible by all handlers.
//! Wrapped in Arc for sharing across async tasks; nothing in it is mutated
//! after startup.

use std::sync::Arc;
use std::time::Instant;

use crate::dataset::Dataset;
use crate::render::PageSettings;
use crate::view::ViewController;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Selector-change handler over the immutable dataset
    pub controller: ViewController,
    /// Static page text
    pub page: Arc<PageSettings>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    pub fn new(dataset: Arc<Dataset>, default_brand: Option<&str>, page: PageSettings) -> Self {
        Self {
            controller: ViewController::new(dataset, default_brand),
            page: Arc::new(page),
            start_time: Instant::now(),
        }
    }

    /// State over the built-in sample table with default page text
    pub fn sample() -> Self {
        Self::new(Arc::new(Dataset::sample()), None, PageSettings::default())
    }

    pub fn dataset(&self) -> &Dataset {
        self.controller.dataset()
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
