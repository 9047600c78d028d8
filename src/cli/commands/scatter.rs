use anyhow::{Context, Result};
use compute::sampling::scatter_points;
use tracing::{debug, trace};

use crate::config::GeneratorConfig;

pub fn scatter(config: &GeneratorConfig) -> Result<String> {
    trace!("Entering scatter function");
    let series = config.generator().build();
    let points = scatter_points(&series);
    debug!("Sampled {} of {} days", points.len(), series.len());

    serde_json::to_string_pretty(&points).context("Failed to serialize scatter points")
}
