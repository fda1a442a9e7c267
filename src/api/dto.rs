//! Data Transfer Objects
//!
//! Query and response types for the JSON endpoints.

use serde::{Deserialize, Serialize};

use crate::dataset::TransactionRecord;
use crate::view::{ChartSpec, DashboardView};

/// `?brand=` query parameter
#[derive(Debug, Default, Deserialize)]
pub struct BrandQuery {
    #[serde(default)]
    pub brand: Option<String>,
}

/// Selector options
#[derive(Debug, Serialize)]
pub struct BrandsResponse {
    pub brands: Vec<String>,
    /// Initially selected brand
    pub default: Option<String>,
}

/// Computed view for one brand
#[derive(Debug, Serialize)]
pub struct ViewResponse {
    pub brand: String,
    pub chart: ChartSpec,
    pub summary: SummaryDto,
}

#[derive(Debug, Serialize)]
pub struct SummaryDto {
    pub total_count: u64,
    pub total_amount: f64,
    pub text: String,
}

impl From<DashboardView> for ViewResponse {
    fn from(view: DashboardView) -> Self {
        Self {
            summary: SummaryDto {
                total_count: view.summary.total_count,
                total_amount: view.summary.total_amount,
                text: view.summary.text(),
            },
            brand: view.brand,
            chart: view.chart,
        }
    }
}

/// Filtered table rows
#[derive(Debug, Serialize)]
pub struct RecordsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    pub total: usize,
    pub records: Vec<TransactionRecord>,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub records: usize,
    pub brands: usize,
    pub uptime_seconds: u64,
    pub version: String,
}
