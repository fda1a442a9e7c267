//! Dashboard view
//!
//! Turns a brand selection into a [`DashboardView`]: the filtered records,
//! a [`ChartSpec`] (one bar per state) and a [`Summary`] line.

mod chart;
mod controller;
mod format;
mod summary;

pub use chart::{Bar, ChartSpec, STATE_COLORS, X_AXIS_LABEL, Y_AXIS_LABEL};
pub use controller::{compute_view, DashboardView, ViewController, FALLBACK_BRAND};
pub use format::{format_amount, format_count, format_si};
pub use summary::Summary;
