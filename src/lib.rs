//! # Pulseboard
//!
//! A small web dashboard that charts UPI transaction amounts by state for a
//! selected payment brand, with a one-line summary of the totals.
//!
//! ## Modules
//!
//! - [`dataset`]: The immutable transaction table and its brand list
//! - [`view`]: Brand selection → chart spec and summary
//! - [`render`]: Server-side HTML and SVG rendering
//! - [`api`]: HTTP server with Axum
//! - [`config`]: TOML and environment configuration
//!
//! ## Quick Start
//!
//! ```rust
//! use pulseboard::{Dataset, ViewController};
//! use std::sync::Arc;
//!
//! let controller = ViewController::new(Arc::new(Dataset::sample()), None);
//! let view = controller.select("Paytm");
//!
//! assert_eq!(view.chart.bars.len(), 1);
//! assert_eq!(view.summary.compact(), "95,000 | ₹13,000,000");
//! ```

pub mod api;
pub mod config;
pub mod dataset;
pub mod logging;
pub mod render;
pub mod view;

pub use dataset::{Dataset, DatasetError, DatasetResult, TransactionRecord};

pub use view::{compute_view, Bar, ChartSpec, DashboardView, Summary, ViewController};

pub use render::{render_chart, render_page, PageSettings};

pub use api::{build_router, serve, ApiError, AppState};

pub use config::{Config, ConfigError, ConfigOrigin, DashboardConfig, LoggingConfig, ServerConfig};
