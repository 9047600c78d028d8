//! Shared data types of the rainfall dashboard.
//! The generated series and everything derived from it is plain serde data so the
//! CLI can print it and the frontend can hand it to the charts.

mod labels;
mod rounding;
mod series;

pub use labels::{LabelLocale, SERIES_EPOCH, day_label, series_day_label};
pub use rounding::{format_tenth, round_tenth};
pub use series::{Channel, DaySeries, DayValues, Period, SeriesWindow};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when parsing user-supplied names.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown period '{0}', expected one of: wet, dry, all")]
    UnknownPeriod(String),

    #[error("unknown label locale '{0}', expected one of: id, en")]
    UnknownLocale(String),
}

/// One point of the actual-vs-ensemble scatter plot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    /// Actual rainfall
    pub x: f64,
    /// Ensemble estimate
    pub y: f64,
}

/// The three live estimates driven by the early-warning slider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderValues {
    pub linear_regression: f64,
    pub random_forest: f64,
    pub ensemble: f64,
}

impl SliderValues {
    /// Display strings with one decimal: `(lr, rf, ensemble)`.
    pub fn formatted(&self) -> (String, String, String) {
        (
            format_tenth(self.linear_regression),
            format_tenth(self.random_forest),
            format_tenth(self.ensemble),
        )
    }
}

/// Error of one model, as drawn in the error-comparison bar chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelScore {
    pub model: String,
    /// Mean absolute error in mm
    pub error: f64,
}

impl ModelScore {
    pub fn new(model: impl Into<String>, error: f64) -> Self {
        Self {
            model: model.into(),
            error,
        }
    }
}
