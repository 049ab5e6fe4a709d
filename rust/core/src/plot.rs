// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Plot size parsing
//!
//! Accepts `"<width>x<length>"` or a single `"<side>"` (square plot).
//! Anything else falls back to the configured default plot; a bad plot
//! size is never reported as an error.

use crate::config::PlannerConfig;
use crate::types::PlotSize;

/// Parse a plot size using the default fallback plot (20 x 30)
pub fn parse_plot_size(raw: &str) -> PlotSize {
    parse_plot_size_or(raw, PlannerConfig::default().default_plot)
}

/// Parse a plot size, returning `fallback` when the text is unusable
pub fn parse_plot_size_or(raw: &str, fallback: PlotSize) -> PlotSize {
    match try_parse_plot_size(raw) {
        Some(plot) => plot,
        None => {
            tracing::debug!(raw = %raw, "Unparseable plot size, using default");
            fallback
        }
    }
}

fn try_parse_plot_size(raw: &str) -> Option<PlotSize> {
    let cleaned: String = raw
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect();

    if cleaned.is_empty() {
        return None;
    }

    let mut parts = cleaned.split('x');
    let first = parts.next().and_then(parse_meters)?;

    match (parts.next(), parts.next()) {
        (None, _) => Some(PlotSize::new(first, first)),
        (Some(second), None) => parse_meters(second).map(|length| PlotSize::new(first, length)),
        // "10x20x30"
        (Some(_), Some(_)) => None,
    }
}

/// A single positive, finite number of meters
fn parse_meters(text: &str) -> Option<f64> {
    let value: f64 = text.parse().ok()?;
    (value.is_finite() && value > 0.0).then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_by_length() {
        assert_eq!(parse_plot_size("20x30"), PlotSize::new(20.0, 30.0));
        assert_eq!(parse_plot_size("12.5x40"), PlotSize::new(12.5, 40.0));
    }

    #[test]
    fn test_case_and_whitespace_insensitive() {
        assert_eq!(parse_plot_size(" 15 X 22 "), PlotSize::new(15.0, 22.0));
    }

    #[test]
    fn test_square_plot() {
        assert_eq!(parse_plot_size("25"), PlotSize::new(25.0, 25.0));
    }

    #[test]
    fn test_fallback_to_default() {
        let default = PlotSize::new(20.0, 30.0);
        for raw in ["garbage", "", "   ", "x", "10x", "x10", "10x20x30", "abcx12", "-5", "0x10"] {
            assert_eq!(parse_plot_size(raw), default, "input {:?}", raw);
        }
    }

    #[test]
    fn test_non_finite_falls_back() {
        let default = PlotSize::new(20.0, 30.0);
        assert_eq!(parse_plot_size("inf"), default);
        assert_eq!(parse_plot_size("NaNx10"), default);
    }

    #[test]
    fn test_custom_fallback() {
        let fallback = PlotSize::new(8.0, 9.0);
        assert_eq!(parse_plot_size_or("??", fallback), fallback);
    }
}
