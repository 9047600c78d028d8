use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use crate::ParseError;

/// One year (or any number of days) of daily rainfall and the three model estimates.
///
/// All channels and `labels` have the same length; index `i` in every vector refers
/// to the same calendar day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DaySeries {
    /// Short day/month labels, one per day
    pub labels: Vec<String>,
    /// Observed rainfall in mm
    pub actual: Vec<f64>,
    /// Linear-regression-like estimate in mm
    pub linear_regression: Vec<f64>,
    /// Random-forest-like estimate in mm
    pub random_forest: Vec<f64>,
    /// Weighted blend of the two estimates in mm
    pub ensemble: Vec<f64>,
}

impl DaySeries {
    pub fn with_capacity(days: usize) -> Self {
        Self {
            labels: Vec::with_capacity(days),
            actual: Vec::with_capacity(days),
            linear_regression: Vec::with_capacity(days),
            random_forest: Vec::with_capacity(days),
            ensemble: Vec::with_capacity(days),
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Appends one aligned day to every channel.
    pub fn push(&mut self, label: String, values: DayValues) {
        self.labels.push(label);
        self.actual.push(values.actual);
        self.linear_regression.push(values.linear_regression);
        self.random_forest.push(values.random_forest);
        self.ensemble.push(values.ensemble);
    }

    pub fn channel(&self, channel: Channel) -> &[f64] {
        match channel {
            Channel::Actual => &self.actual,
            Channel::LinearRegression => &self.linear_regression,
            Channel::RandomForest => &self.random_forest,
            Channel::Ensemble => &self.ensemble,
        }
    }

    /// Borrowed view of `range`, clamped to the series bounds the way an array
    /// `slice(start, end)` would be.
    pub fn window(&self, range: Range<usize>) -> SeriesWindow<'_> {
        let end = range.end.min(self.len());
        let start = range.start.min(end);
        SeriesWindow {
            start,
            end,
            labels: &self.labels[start..end],
            actual: &self.actual[start..end],
            ensemble: &self.ensemble[start..end],
            random_forest: &self.random_forest[start..end],
        }
    }
}

/// The four stored numbers of a single day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DayValues {
    pub actual: f64,
    pub linear_regression: f64,
    pub random_forest: f64,
    pub ensemble: f64,
}

/// The numeric channels of a [`DaySeries`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    Actual,
    LinearRegression,
    RandomForest,
    Ensemble,
}

impl Channel {
    pub const ALL: [Channel; 4] = [
        Channel::Actual,
        Channel::LinearRegression,
        Channel::RandomForest,
        Channel::Ensemble,
    ];

    /// Legend name shown on the dashboard.
    pub fn display_name(self) -> &'static str {
        match self {
            Channel::Actual => "Aktual",
            Channel::LinearRegression => "Linear Reg",
            Channel::RandomForest => "Random Forest",
            Channel::Ensemble => "Ensemble",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Contiguous slice of a series as drawn by the main time-series chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesWindow<'a> {
    pub start: usize,
    pub end: usize,
    pub labels: &'a [String],
    pub actual: &'a [f64],
    pub ensemble: &'a [f64],
    pub random_forest: &'a [f64],
}

impl SeriesWindow<'_> {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Canned season filters of the main chart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    /// Days 0..90
    Wet,
    /// Days 150..240
    Dry,
    /// The first year
    #[default]
    All,
}

impl Period {
    pub const ALL: [Period; 3] = [Period::Wet, Period::Dry, Period::All];

    /// Index range of this period for a series of `len` days.
    pub fn range(self, len: usize) -> Range<usize> {
        let (start, end) = match self {
            Period::Wet => (0, 90),
            Period::Dry => (150, 240),
            Period::All => (0, 365),
        };
        let end = end.min(len);
        start.min(end)..end
    }

    /// Lenient lookup: anything that is not `wet` or `dry` selects the whole year.
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or(Period::All)
    }

    pub fn name(self) -> &'static str {
        match self {
            Period::Wet => "wet",
            Period::Dry => "dry",
            Period::All => "all",
        }
    }

    /// Button caption on the dashboard.
    pub fn caption(self) -> &'static str {
        match self {
            Period::Wet => "Musim Hujan",
            Period::Dry => "Musim Kemarau",
            Period::All => "Setahun",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Period {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "wet" => Ok(Period::Wet),
            "dry" => Ok(Period::Dry),
            "all" => Ok(Period::All),
            other => Err(ParseError::UnknownPeriod(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_series(days: usize) -> DaySeries {
        let mut series = DaySeries::with_capacity(days);
        for i in 0..days {
            let v = i as f64;
            series.push(
                format!("d{}", i),
                DayValues {
                    actual: v,
                    linear_regression: v * 10.0,
                    random_forest: v * 100.0,
                    ensemble: v * 1000.0,
                },
            );
        }
        series
    }

    #[test]
    fn test_period_ranges_full_year() {
        assert_eq!(Period::Wet.range(365), 0..90);
        assert_eq!(Period::Dry.range(365), 150..240);
        assert_eq!(Period::All.range(365), 0..365);
    }

    #[test]
    fn test_period_ranges_clamped_to_length() {
        assert_eq!(Period::All.range(500), 0..365);
        assert_eq!(Period::All.range(30), 0..30);
        assert_eq!(Period::Wet.range(30), 0..30);
        assert_eq!(Period::Dry.range(200), 150..200);
        assert_eq!(Period::Dry.range(100), 100..100);
        assert_eq!(Period::Dry.range(0), 0..0);
    }

    #[test]
    fn test_period_parsing() {
        assert_eq!("wet".parse::<Period>().unwrap(), Period::Wet);
        assert_eq!(" DRY ".parse::<Period>().unwrap(), Period::Dry);
        assert_eq!("all".parse::<Period>().unwrap(), Period::All);
        assert!(matches!(
            "monsoon".parse::<Period>(),
            Err(ParseError::UnknownPeriod(name)) if name == "monsoon"
        ));
    }

    #[test]
    fn test_period_lenient_lookup_defaults_to_all() {
        assert_eq!(Period::from_name("wet"), Period::Wet);
        assert_eq!(Period::from_name("dry"), Period::Dry);
        assert_eq!(Period::from_name(""), Period::All);
        assert_eq!(Period::from_name("anything"), Period::All);
    }

    #[test]
    fn test_window_slices_every_channel() {
        let series = sample_series(10);
        let window = series.window(2..5);

        assert_eq!(window.start, 2);
        assert_eq!(window.end, 5);
        assert_eq!(window.len(), 3);
        assert_eq!(window.labels, &["d2", "d3", "d4"]);
        assert_eq!(window.actual, &[2.0, 3.0, 4.0]);
        assert_eq!(window.random_forest, &[200.0, 300.0, 400.0]);
        assert_eq!(window.ensemble, &[2000.0, 3000.0, 4000.0]);
    }

    #[test]
    fn test_window_out_of_bounds_is_clamped() {
        let series = sample_series(10);

        let tail = series.window(8..100);
        assert_eq!(tail.start, 8);
        assert_eq!(tail.end, 10);

        let past_end = series.window(20..30);
        assert!(past_end.is_empty());
        assert_eq!(past_end.start, 10);
    }

    #[test]
    fn test_channel_lookup() {
        let series = sample_series(3);
        assert_eq!(series.channel(Channel::Actual), &[0.0, 1.0, 2.0]);
        assert_eq!(series.channel(Channel::LinearRegression), &[0.0, 10.0, 20.0]);
        assert_eq!(Channel::RandomForest.to_string(), "Random Forest");
    }

    #[test]
    fn test_series_serializes_channels() {
        let series = sample_series(2);
        let json = serde_json::to_value(&series).unwrap();
        assert_eq!(json["labels"].as_array().unwrap().len(), 2);
        assert_eq!(json["linear_regression"][1], 10.0);
    }
}
