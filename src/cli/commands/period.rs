use anyhow::Result;
use common::Period;
use compute::SeriesView;
use tracing::{info, trace};

use super::generate::render_window;
use crate::config::GeneratorConfig;

pub fn period(config: &GeneratorConfig, period: Period) -> Result<String> {
    trace!("Entering period function");
    let mut view = SeriesView::new(config.generator().build());

    let range = view.apply_period(period);
    info!(%period, start = range.start, end = range.end, "Selected period");

    Ok(render_window(&view.visible()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::LabelLocale;

    fn rows(output: &str) -> Vec<&str> {
        output.lines().skip(1).collect()
    }

    #[test]
    fn test_dry_period_rows() {
        let config = GeneratorConfig::new(365, Some(3), LabelLocale::English);
        let output = period(&config, Period::Dry).unwrap();
        let rows = rows(&output);
        assert_eq!(rows.len(), 90);
        assert!(rows[0].trim_start().starts_with("150"));
        assert!(rows[89].trim_start().starts_with("239"));
    }

    #[test]
    fn test_wet_period_on_short_series() {
        let config = GeneratorConfig::new(50, Some(3), LabelLocale::English);
        let output = period(&config, Period::Wet).unwrap();
        assert_eq!(rows(&output).len(), 50);
    }

    #[test]
    fn test_dry_period_outside_series_is_empty() {
        let config = GeneratorConfig::new(120, Some(3), LabelLocale::English);
        let output = period(&config, Period::Dry).unwrap();
        assert!(rows(&output).is_empty());
    }
}
