use std::ops::Range;

use common::{DaySeries, Period, ScatterPoint, SeriesWindow};
use tracing::debug;

use crate::sampling;

/// Days shown by the main chart before any period filter is picked.
pub const INITIAL_WINDOW: usize = 100;

/// A generated series together with the range the main chart currently shows.
///
/// Switching periods only moves the window; the series itself is generated once.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesView {
    series: DaySeries,
    period: Option<Period>,
}

impl SeriesView {
    pub fn new(series: DaySeries) -> Self {
        Self {
            series,
            period: None,
        }
    }

    pub fn series(&self) -> &DaySeries {
        &self.series
    }

    /// The selected filter, `None` while the initial window is shown.
    pub fn period(&self) -> Option<Period> {
        self.period
    }

    pub fn range(&self) -> Range<usize> {
        let len = self.series.len();
        match self.period {
            Some(period) => period.range(len),
            None => 0..INITIAL_WINDOW.min(len),
        }
    }

    /// Selects `period` and returns the new visible range.
    pub fn apply_period(&mut self, period: Period) -> Range<usize> {
        self.period = Some(period);
        let range = self.range();
        debug!(%period, start = range.start, end = range.end, "Applied period filter");
        range
    }

    pub fn visible(&self) -> SeriesWindow<'_> {
        self.series.window(self.range())
    }

    pub fn scatter_points(&self) -> Vec<ScatterPoint> {
        sampling::scatter_points(&self.series)
    }
}
