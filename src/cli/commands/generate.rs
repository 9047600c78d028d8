use anyhow::{Context, Result};
use common::{DaySeries, SeriesWindow};
use tracing::{debug, info, trace};

use crate::cli::OutputFormat;
use crate::config::GeneratorConfig;

pub fn generate(config: &GeneratorConfig, format: OutputFormat) -> Result<String> {
    trace!("Entering generate function");
    info!(days = config.days, seed = ?config.seed, "Generating synthetic series");

    let series = config.generator().build();
    debug!("Generated {} days", series.len());

    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(&series).context("Failed to serialize series")
        }
        OutputFormat::Table => Ok(render_series(&series)),
    }
}

/// Every channel of `series` as aligned text columns.
pub fn render_series(series: &DaySeries) -> String {
    let mut lines = vec![format!(
        "{:>5} {:>7} {:>8} {:>8} {:>8} {:>8}",
        "day", "label", "actual", "lr", "rf", "ensemble"
    )];
    for i in 0..series.len() {
        lines.push(format!(
            "{:>5} {:>7} {:>8.1} {:>8.1} {:>8.1} {:>8.1}",
            i,
            series.labels[i],
            series.actual[i],
            series.linear_regression[i],
            series.random_forest[i],
            series.ensemble[i]
        ));
    }
    lines.join("\n")
}

/// The three charted channels of `window`, with absolute day indices.
pub fn render_window(window: &SeriesWindow<'_>) -> String {
    let mut lines = vec![format!(
        "{:>5} {:>7} {:>8} {:>8} {:>8}",
        "day", "label", "actual", "ensemble", "rf"
    )];
    for (offset, label) in window.labels.iter().enumerate() {
        lines.push(format!(
            "{:>5} {:>7} {:>8.1} {:>8.1} {:>8.1}",
            window.start + offset,
            label,
            window.actual[offset],
            window.ensemble[offset],
            window.random_forest[offset]
        ));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::LabelLocale;

    fn config(days: i64) -> GeneratorConfig {
        GeneratorConfig::new(days, Some(21), LabelLocale::English)
    }

    #[test]
    fn test_table_has_header_and_one_row_per_day() {
        let output = generate(&config(10), OutputFormat::Table).unwrap();
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 11);
        assert!(lines[0].contains("ensemble"));
        assert!(lines[1].contains("1 Jan"));
        assert!(lines[10].contains("10 Jan"));
    }

    #[test]
    fn test_json_round_trips_into_series() {
        let output = generate(&config(20), OutputFormat::Json).unwrap();
        let series: DaySeries = serde_json::from_str(&output).unwrap();
        assert_eq!(series, config(20).generator().build());
    }

    #[test]
    fn test_empty_series_prints_header_only() {
        let output = generate(&config(0), OutputFormat::Table).unwrap();
        assert_eq!(output.lines().count(), 1);
    }
}
