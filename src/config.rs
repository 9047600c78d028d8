use common::LabelLocale;
use compute::SeriesGenerator;
use compute::generator::DEFAULT_DAYS;
use std::path::PathBuf;

/// Default `RUST_LOG` filter when none is set.
pub const DEFAULT_LOG_FILTER: &str = "raincast=info,compute=info";

/// Load `.env` from the working directory or its parents, returning the file used.
pub fn load_environment() -> Option<PathBuf> {
    dotenvy::dotenv().ok()
}

/// Everything needed to generate a series, resolved from flags and environment.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    pub days: usize,
    pub seed: Option<u64>,
    pub locale: LabelLocale,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            days: DEFAULT_DAYS,
            seed: None,
            locale: LabelLocale::default(),
        }
    }
}

impl GeneratorConfig {
    /// Negative day counts yield an empty series.
    pub fn new(days: i64, seed: Option<u64>, locale: LabelLocale) -> Self {
        Self {
            days: usize::try_from(days).unwrap_or(0),
            seed,
            locale,
        }
    }

    pub fn generator(&self) -> SeriesGenerator {
        let generator = SeriesGenerator::new(self.days).with_locale(self.locale);
        match self.seed {
            Some(seed) => generator.with_seed(seed),
            None => generator,
        }
    }
}
