//! Synthetic daily rainfall with three competing estimates.
//!
//! Every day is drawn independently from a zero-inflated distribution whose rain
//! probability and intensity follow a yearly sinusoid. The random source is always
//! passed in by the caller, so a seeded generator reproduces the same series.

use std::f64::consts::PI;

use common::{DaySeries, DayValues, LabelLocale, round_tenth, series_day_label};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

/// Length of one seasonal cycle in days.
pub const SEASON_PERIOD: usize = 365;

/// Number of days shown on the dashboard.
pub const DEFAULT_DAYS: usize = 365;

const SEASON_AMPLITUDE: f64 = 0.6;
const BASE_RAIN_PROBABILITY: f64 = 0.3;
const RAIN_INTENSITY: f64 = 8.0;
const EXTREME_THRESHOLD: f64 = 0.95;
const EXTREME_FACTOR: f64 = 3.0;

const LR_SLOPE: f64 = 0.6;
const LR_INTERCEPT: f64 = 2.0;
const LR_DRY_BASELINE: f64 = 1.0;
const LR_NOISE_SPAN: f64 = 3.0;

const RF_SLOPE: f64 = 0.9;
const RF_NOISE_SPAN: f64 = 5.0;

/// Weight of the linear-regression estimate in the ensemble.
pub const ENSEMBLE_LR_WEIGHT: f64 = 0.4;
/// Weight of the random-forest estimate in the ensemble.
pub const ENSEMBLE_RF_WEIGHT: f64 = 0.6;

/// Seasonal factor for day `index`: `1 + 0.6 * sin(2π·i/365)`, exactly periodic.
pub fn season_multiplier(index: usize) -> f64 {
    let day = (index % SEASON_PERIOD) as f64;
    1.0 + SEASON_AMPLITUDE * (2.0 * PI * day / SEASON_PERIOD as f64).sin()
}

/// Fixed-weight blend of the two estimates.
pub fn blend(linear_regression: f64, random_forest: f64) -> f64 {
    ENSEMBLE_LR_WEIGHT * linear_regression + ENSEMBLE_RF_WEIGHT * random_forest
}

/// Uniform noise in `[-span/2, span/2)`.
fn centered_noise<R: Rng + ?Sized>(rng: &mut R, span: f64) -> f64 {
    (rng.r#gen::<f64>() - 0.5) * span
}

/// Unrounded draw for a single day, including whether it rained.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulatedDay {
    pub index: usize,
    pub season: f64,
    pub rain: bool,
    pub actual: f64,
    pub linear_regression: f64,
    pub random_forest: f64,
}

impl SimulatedDay {
    /// The values stored in a [`DaySeries`]: every channel rounded to one decimal,
    /// with the ensemble blended from the rounded estimates.
    pub fn stored_values(&self) -> DayValues {
        let linear_regression = round_tenth(self.linear_regression);
        let random_forest = round_tenth(self.random_forest);
        DayValues {
            actual: round_tenth(self.actual),
            linear_regression,
            random_forest,
            ensemble: round_tenth(blend(linear_regression, random_forest)),
        }
    }
}

/// Draws day `index`.
///
/// Draw order: rain occurrence; on rainy days two intensity draws and the extreme-event
/// draw; the linear-regression noise; on rainy days the random-forest noise.
pub fn simulate_day<R: Rng + ?Sized>(index: usize, rng: &mut R) -> SimulatedDay {
    let season = season_multiplier(index);
    let rain = rng.r#gen::<f64>() < BASE_RAIN_PROBABILITY * season;

    let mut actual = 0.0;
    if rain {
        actual = (rng.r#gen::<f64>() + rng.r#gen::<f64>()) * RAIN_INTENSITY * season;
        if rng.r#gen::<f64>() > EXTREME_THRESHOLD {
            actual *= EXTREME_FACTOR;
        }
    }

    // The regression never predicts a dry day: it sits around 1 mm.
    let lr_base = if rain {
        actual * LR_SLOPE + LR_INTERCEPT
    } else {
        LR_DRY_BASELINE
    };
    let linear_regression = (lr_base + centered_noise(rng, LR_NOISE_SPAN)).max(0.0);

    let random_forest = if rain {
        (actual * RF_SLOPE + centered_noise(rng, RF_NOISE_SPAN)).max(0.0)
    } else {
        0.0
    };

    SimulatedDay {
        index,
        season,
        rain,
        actual,
        linear_regression,
        random_forest,
    }
}

/// Generates `days` consecutive days starting at the series epoch, labelled in Indonesian.
pub fn generate<R: Rng + ?Sized>(days: usize, rng: &mut R) -> DaySeries {
    generate_with_locale(days, LabelLocale::default(), rng)
}

/// Generates `days` consecutive days with labels in `locale`.
#[instrument(skip(rng))]
pub fn generate_with_locale<R: Rng + ?Sized>(
    days: usize,
    locale: LabelLocale,
    rng: &mut R,
) -> DaySeries {
    let mut series = DaySeries::with_capacity(days);
    let mut rainy_days = 0usize;

    for index in 0..days {
        let day = simulate_day(index, rng);
        if day.rain {
            rainy_days += 1;
        }
        series.push(series_day_label(index, locale), day.stored_values());
    }

    debug!(days, rainy_days, "Generated synthetic rainfall series");
    series
}

/// Builder for a series with an optional fixed seed.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesGenerator {
    days: usize,
    seed: Option<u64>,
    locale: LabelLocale,
}

impl Default for SeriesGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_DAYS)
    }
}

impl SeriesGenerator {
    pub fn new(days: usize) -> Self {
        Self {
            days,
            seed: None,
            locale: LabelLocale::default(),
        }
    }

    /// Reproducible output: the same seed always yields the same series.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_locale(mut self, locale: LabelLocale) -> Self {
        self.locale = locale;
        self
    }

    pub fn days(&self) -> usize {
        self.days
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn build(&self) -> DaySeries {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        generate_with_locale(self.days, self.locale, &mut rng)
    }
}
