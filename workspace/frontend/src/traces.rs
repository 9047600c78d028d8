//! Plotly trace and layout specs for the dashboard panels.
//!
//! Traces are built with the `plotly` crate and kept as JSON values so they can be
//! handed to Plotly.js as plain objects.

use common::{Channel, ModelScore, ScatterPoint, SeriesWindow};
use plotly::common::{DashType, Fill, Line, LineShape, Marker, Mode, Orientation, Visible};
use plotly::{Bar, Scatter};
use serde::Serialize;
use serde_json::{json, Value};

const ACTUAL_COLOR: &str = "#1e293b";
const ENSEMBLE_COLOR: &str = "#2563eb";
const ENSEMBLE_FILL: &str = "rgba(37,99,235,0.1)";
const RANDOM_FOREST_COLOR: &str = "#fb923c";
const SCATTER_COLOR: &str = "rgba(37,99,235,0.5)";

/// Bar colors, in the order of the published scores.
const SCORE_COLORS: [&str; 4] = ["#cbd5e1", "#818cf8", "#fb923c", "#2563eb"];

pub const RAINFALL_AXIS_TITLE: &str = "Curah Hujan (mm)";

fn to_json<T: Serialize>(trace: &T) -> Value {
    serde_json::to_value(trace).unwrap_or(Value::Null)
}

/// Actual, ensemble and (legend-only) random forest lines of the visible window.
pub fn main_traces(window: &SeriesWindow<'_>) -> Vec<Value> {
    let labels = window.labels.to_vec();

    let actual = Scatter::new(labels.clone(), window.actual.to_vec())
        .name(Channel::Actual.display_name())
        .mode(Mode::Lines)
        .line(Line::new().color(ACTUAL_COLOR).width(2.0));

    let ensemble = Scatter::new(labels.clone(), window.ensemble.to_vec())
        .name(Channel::Ensemble.display_name())
        .mode(Mode::Lines)
        .fill(Fill::ToZeroY)
        .fill_color(ENSEMBLE_FILL)
        .line(
            Line::new()
                .color(ENSEMBLE_COLOR)
                .width(2.0)
                .shape(LineShape::Spline)
                .smoothing(0.3),
        );

    let random_forest = Scatter::new(labels, window.random_forest.to_vec())
        .name(Channel::RandomForest.display_name())
        .mode(Mode::Lines)
        .visible(Visible::LegendOnly)
        .line(
            Line::new()
                .color(RANDOM_FOREST_COLOR)
                .width(1.0)
                .dash(DashType::Dash),
        );

    vec![to_json(&actual), to_json(&ensemble), to_json(&random_forest)]
}

pub fn main_layout() -> Value {
    json!({
        "margin": {"t": 10, "r": 10, "l": 50, "b": 40},
        "paper_bgcolor": "rgba(0,0,0,0)",
        "plot_bgcolor": "rgba(0,0,0,0)",
        "hovermode": "x unified",
        "xaxis": {"showgrid": false},
        "yaxis": {
            "rangemode": "tozero",
            "showgrid": true,
            "gridcolor": "#eee",
            "title": {"text": RAINFALL_AXIS_TITLE}
        },
        "legend": {"orientation": "h", "y": -0.15}
    })
}

/// Horizontal bars, one per model.
pub fn error_traces(scores: &[ModelScore]) -> Vec<Value> {
    let models: Vec<String> = scores.iter().map(|s| s.model.clone()).collect();
    let errors: Vec<f64> = scores.iter().map(|s| s.error).collect();
    let colors: Vec<&str> = SCORE_COLORS.iter().copied().cycle().take(scores.len()).collect();

    let bars = Bar::new(errors, models)
        .orientation(Orientation::Horizontal)
        .marker(Marker::new().color_array(colors));

    vec![to_json(&bars)]
}

pub fn error_layout() -> Value {
    json!({
        "margin": {"t": 10, "r": 10, "l": 100, "b": 30},
        "paper_bgcolor": "rgba(0,0,0,0)",
        "plot_bgcolor": "rgba(0,0,0,0)",
        "showlegend": false,
        "xaxis": {"showgrid": true, "gridcolor": "#eee", "rangemode": "tozero"},
        "yaxis": {"autorange": "reversed"}
    })
}

pub fn scatter_traces(points: &[ScatterPoint]) -> Vec<Value> {
    let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.y).collect();

    let markers = Scatter::new(xs, ys)
        .mode(Mode::Markers)
        .marker(Marker::new().color(SCATTER_COLOR).size(6));

    vec![to_json(&markers)]
}

pub fn scatter_layout() -> Value {
    json!({
        "margin": {"t": 10, "r": 10, "l": 50, "b": 40},
        "paper_bgcolor": "rgba(0,0,0,0)",
        "plot_bgcolor": "rgba(0,0,0,0)",
        "showlegend": false,
        "xaxis": {"title": {"text": "Aktual (mm)"}, "rangemode": "tozero"},
        "yaxis": {"title": {"text": "Ensemble (mm)"}, "rangemode": "tozero"}
    })
}

pub fn plot_config() -> Value {
    json!({"responsive": true, "displayModeBar": false})
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::{DayValues, DaySeries};
    use compute::metrics::reference_scores;

    fn series(days: usize) -> DaySeries {
        let mut series = DaySeries::with_capacity(days);
        for i in 0..days {
            series.push(
                format!("{} Jan", i + 1),
                DayValues {
                    actual: i as f64,
                    linear_regression: 1.0,
                    random_forest: 2.0,
                    ensemble: 3.0,
                },
            );
        }
        series
    }

    #[test]
    fn test_main_traces_follow_window() {
        let series = series(10);
        let traces = main_traces(&series.window(2..6));

        assert_eq!(traces.len(), 3);
        assert_eq!(traces[0]["type"], "scatter");
        assert_eq!(traces[0]["name"], "Aktual");
        assert_eq!(traces[0]["x"], json!(["3 Jan", "4 Jan", "5 Jan", "6 Jan"]));
        assert_eq!(traces[0]["y"], json!([2.0, 3.0, 4.0, 5.0]));
        assert_eq!(traces[1]["name"], "Ensemble");
        assert_eq!(traces[1]["y"], json!([3.0, 3.0, 3.0, 3.0]));
        assert_eq!(traces[2]["name"], "Random Forest");
        assert_eq!(traces[2]["visible"], "legendonly");
    }

    #[test]
    fn test_main_traces_empty_window() {
        let series = series(0);
        let traces = main_traces(&series.window(0..100));
        assert_eq!(traces[0]["x"], json!([]));
    }

    #[test]
    fn test_error_bars_are_horizontal() {
        let traces = error_traces(&reference_scores());
        assert_eq!(traces.len(), 1);
        assert_eq!(traces[0]["type"], "bar");
        assert_eq!(traces[0]["orientation"], "h");
        assert_eq!(traces[0]["x"], json!([5.8, 4.12, 3.85, 3.42]));
        assert_eq!(traces[0]["y"][0], "Persistence");
    }

    #[test]
    fn test_scatter_trace_uses_markers() {
        let points = [ScatterPoint { x: 1.0, y: 2.0 }, ScatterPoint { x: 3.0, y: 4.0 }];
        let traces = scatter_traces(&points);
        assert_eq!(traces[0]["mode"], "markers");
        assert_eq!(traces[0]["x"], json!([1.0, 3.0]));
        assert_eq!(traces[0]["y"], json!([2.0, 4.0]));
    }

    #[test]
    fn test_layout_axis_title() {
        assert_eq!(main_layout()["yaxis"]["title"]["text"], RAINFALL_AXIS_TITLE);
        assert_eq!(plot_config()["displayModeBar"], false);
    }
}
