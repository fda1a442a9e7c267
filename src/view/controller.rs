//! View controller
//!
//! Binds the brand selector to its two outputs. `compute_view` is the pure
//! recompute step; `ViewController::select` is the selector-change handler
//! that the HTTP layer and CLI call once per selection.

use serde::Serialize;
use std::sync::Arc;

use super::{ChartSpec, Summary};
use crate::dataset::{Dataset, TransactionRecord};

/// Brand preselected when the configuration doesn't name one
pub const FALLBACK_BRAND: &str = "PhonePe";

/// Everything the renderer needs for one selector value
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DashboardView {
    pub brand: String,
    pub records: Vec<TransactionRecord>,
    pub chart: ChartSpec,
    pub summary: Summary,
}

/// Filter the dataset by `brand` and derive the chart and summary
///
/// An unknown brand is not an error: it yields no records, no bars and zero totals.
pub fn compute_view(dataset: &Dataset, brand: &str) -> DashboardView {
    let records: Vec<TransactionRecord> = dataset.filter_by_brand(brand).cloned().collect();

    DashboardView {
        brand: brand.to_string(),
        chart: ChartSpec::for_brand(brand, records.iter()),
        summary: Summary::from_records(records.iter()),
        records,
    }
}

/// Holds the dataset and the initial selection
#[derive(Debug, Clone)]
pub struct ViewController {
    dataset: Arc<Dataset>,
    initial_brand: Option<String>,
}

impl ViewController {
    /// Create a controller
    ///
    /// `preferred` is used as the initial brand when the dataset contains it;
    /// otherwise "PhonePe" if present, otherwise the first brand.
    pub fn new(dataset: Arc<Dataset>, preferred: Option<&str>) -> Self {
        let initial_brand = preferred
            .filter(|b| dataset.contains_brand(b))
            .or_else(|| Some(FALLBACK_BRAND).filter(|b| dataset.contains_brand(b)))
            .map(str::to_string)
            .or_else(|| dataset.brands().first().cloned());

        if let Some(wanted) = preferred {
            if initial_brand.as_deref() != Some(wanted) {
                tracing::warn!(
                    brand = %wanted,
                    fallback = ?initial_brand,
                    "Configured default brand not in dataset"
                );
            }
        }

        Self {
            dataset,
            initial_brand,
        }
    }

    pub fn dataset(&self) -> &Arc<Dataset> {
        &self.dataset
    }

    /// Selector options, in first-seen order
    pub fn brands(&self) -> &[String] {
        self.dataset.brands()
    }

    pub fn initial_brand(&self) -> Option<&str> {
        self.initial_brand.as_deref()
    }

    /// Handle a selector change
    pub fn select(&self, brand: &str) -> DashboardView {
        if !self.dataset.contains_brand(brand) {
            tracing::warn!(brand = %brand, "Unknown brand selected, rendering empty view");
        }

        let view = compute_view(&self.dataset, brand);
        tracing::debug!(
            brand = %brand,
            bars = view.chart.bars.len(),
            total_count = view.summary.total_count,
            "Recomputed dashboard view"
        );
        view
    }

    /// View for the initial brand (empty when the dataset has no brands)
    pub fn initial_view(&self) -> DashboardView {
        self.select(self.initial_brand().unwrap_or_default())
    }

    /// View for an optional selection, falling back to the initial brand
    pub fn view_for(&self, brand: Option<&str>) -> DashboardView {
        match brand {
            Some(brand) => self.select(brand),
            None => self.initial_view(),
        }
    }
}
