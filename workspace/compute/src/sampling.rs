use common::{DaySeries, ScatterPoint};

/// Every n-th day is kept for the actual-vs-ensemble scatter plot.
pub const SCATTER_STRIDE: usize = 3;

/// Indices `0, 3, 6, …` below `len`.
pub fn scatter_indices(len: usize) -> impl Iterator<Item = usize> {
    (0..len).step_by(SCATTER_STRIDE)
}

/// Pairs `(actual, ensemble)` at every [`SCATTER_STRIDE`]-th day.
pub fn scatter_points(series: &DaySeries) -> Vec<ScatterPoint> {
    scatter_indices(series.len())
        .map(|i| ScatterPoint {
            x: series.actual[i],
            y: series.ensemble[i],
        })
        .collect()
}
