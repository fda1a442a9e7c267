//! Dashboard page
//!
//! One page: heading, brand dropdown, chart, summary. Changing the dropdown
//! submits the form, so every selection is one request and one recompute.

use std::fmt::Write;

use super::{escape_html, render_chart};
use crate::view::DashboardView;

/// Static text around the dashboard
#[derive(Debug, Clone, PartialEq)]
pub struct PageSettings {
    /// Browser tab title
    pub title: String,
    /// Page heading
    pub heading: String,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            title: "PhonePe Transaction Dashboard".to_string(),
            heading: "PhonePe Transactions - Aggregated User Data".to_string(),
        }
    }
}

const STYLE: &str = "body{font-family:system-ui,sans-serif;margin:0;padding:24px;color:#222}\
h1{text-align:center}\
.selector{width:50%;margin:auto}\
.selector label{font-weight:bold;display:block;margin-bottom:6px}\
.selector select{width:100%;padding:6px;font-size:15px}\
.chart-area{max-width:960px;margin:24px auto}\
.summary{text-align:center;margin-top:20px;font-size:18px}";

/// Render the complete dashboard page for a computed view
pub fn render_page(settings: &PageSettings, brands: &[String], view: &DashboardView) -> String {
    let mut options = String::new();
    for brand in brands {
        let selected = if brand == &view.brand { " selected" } else { "" };
        let escaped = escape_html(brand);
        let _ = write!(
            options,
            r#"<option value="{escaped}"{selected}>{escaped}</option>"#
        );
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>{style}</style>
</head>
<body>
<h1>{heading}</h1>
<form class="selector" method="get" action="/">
<label for="brand-dropdown">Select Brand:</label>
<select id="brand-dropdown" name="brand" onchange="this.form.submit()">{options}</select>
<noscript><button type="submit">Show</button></noscript>
</form>
<div id="transaction-graph" class="chart-area">{chart}</div>
<div id="summary" class="summary">{summary}</div>
</body>
</html>
"#,
        title = escape_html(&settings.title),
        style = STYLE,
        heading = escape_html(&settings.heading),
        options = options,
        chart = render_chart(&view.chart),
        summary = escape_html(&view.summary.text()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;
    use crate::view::compute_view;

    #[test]
    fn test_page_contents() {
        let dataset = Dataset::sample();
        let view = compute_view(&dataset, "Paytm");
        let html = render_page(&PageSettings::default(), dataset.brands(), &view);

        assert!(html.contains("<title>PhonePe Transaction Dashboard</title>"));
        assert!(html.contains("<h1>PhonePe Transactions - Aggregated User Data</h1>"));
        assert!(html.contains("Select Brand:"));
        assert!(html.contains(r#"<option value="Paytm" selected>Paytm</option>"#));
        assert!(html.contains(r#"<option value="PhonePe">PhonePe</option>"#));
        assert!(html.contains("Delhi"));
        assert!(html.contains("Total Transactions: 95,000"));
        assert!(html.contains("₹13,000,000"));
    }

    #[test]
    fn test_options_follow_brand_order_without_blank() {
        let dataset = Dataset::sample();
        let view = compute_view(&dataset, "PhonePe");
        let html = render_page(&PageSettings::default(), dataset.brands(), &view);

        assert_eq!(html.matches("<option").count(), 3);
        assert!(!html.contains(r#"<option value="">"#));
        let phonepe = html.find(r#"value="PhonePe""#).unwrap();
        let gpay = html.find(r#"value="Google Pay""#).unwrap();
        let paytm = html.find(r#"value="Paytm""#).unwrap();
        assert!(phonepe < gpay && gpay < paytm);
    }

    #[test]
    fn test_unknown_brand_selects_nothing() {
        let dataset = Dataset::sample();
        let view = compute_view(&dataset, "<script>");
        let html = render_page(&PageSettings::default(), dataset.brands(), &view);

        assert!(!html.contains(" selected>"));
        assert!(!html.contains("<script>"));
        assert!(html.contains("Total Transactions: 0"));
    }
}
