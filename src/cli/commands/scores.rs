use anyhow::{Context, Result};
use common::ModelScore;
use compute::metrics::{reference_scores, series_scores};
use tracing::{info, trace, warn};

use crate::config::GeneratorConfig;

pub fn scores(config: &GeneratorConfig) -> Result<String> {
    trace!("Entering scores function");
    let series = config.generator().build();
    info!(days = series.len(), "Scoring generated series");

    let measured = series_scores(&series)
        .inspect_err(|e| warn!("Cannot score series: {}", e))
        .context("Failed to score generated series")?;

    Ok(render_scores(&reference_scores(), &measured))
}

fn render_scores(reference: &[ModelScore], measured: &[ModelScore]) -> String {
    let mut lines = vec![format!("{:<14} {:>10} {:>10}", "model", "published", "measured")];
    for (published, score) in reference.iter().zip(measured) {
        lines.push(format!(
            "{:<14} {:>10.2} {:>10.2}",
            published.model, published.error, score.error
        ));
    }
    lines.join("\n")
}
