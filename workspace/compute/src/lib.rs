pub mod error;
pub mod generator;
pub mod metrics;
pub mod sampling;
pub mod slider;
pub mod view;

#[cfg(test)]
pub(crate) mod testing;

pub use generator::{SeriesGenerator, generate, generate_with_locale};
pub use slider::compute_slider_values;
pub use view::SeriesView;

use common::DaySeries;
use generator::DEFAULT_DAYS;

/// Returns the one-year series the dashboard is built around.
///
/// With `seed` the series is reproducible; without it a fresh series is drawn from
/// entropy, like on every page load.
pub fn default_series(seed: Option<u64>) -> DaySeries {
    let generator = SeriesGenerator::new(DEFAULT_DAYS);
    match seed {
        Some(seed) => generator.with_seed(seed).build(),
        None => generator.build(),
    }
}
