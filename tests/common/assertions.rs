//! Assertion helpers for tests.

use pretty_assertions::assert_eq;
use tincture::models::ConversionReport;

/// Assert the report contains `expected` for `model`
pub fn assert_render(report: &ConversionReport, model: &str, expected: &str) {
    assert_eq!(
        report.render_for(model),
        Some(expected),
        "Unexpected render for {}. Full report: {}",
        model,
        serde_json::to_string_pretty(report).unwrap()
    );
}

/// Assert the report's models appear in exactly this order
pub fn assert_models(report: &ConversionReport, expected: &[&str]) {
    let models: Vec<&str> = report.renders.iter().map(|r| r.model.as_str()).collect();
    assert_eq!(models, expected);
}
