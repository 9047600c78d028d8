//! Error scores of the four forecasting approaches compared on the dashboard.

use common::{DaySeries, ModelScore};
use tracing::{debug, instrument};

use crate::error::{ComputeError, Result};

pub const PERSISTENCE: &str = "Persistence";
pub const LINEAR_REGRESSION: &str = "Linear Reg";
pub const RANDOM_FOREST: &str = "Random Forest";
pub const ENSEMBLE: &str = "Ensemble";

/// Published mean absolute errors (mm) shown in the error-comparison bar chart.
pub fn reference_scores() -> Vec<ModelScore> {
    vec![
        ModelScore::new(PERSISTENCE, 5.8),
        ModelScore::new(LINEAR_REGRESSION, 4.12),
        ModelScore::new(RANDOM_FOREST, 3.85),
        ModelScore::new(ENSEMBLE, 3.42),
    ]
}

pub fn mean_absolute_error(actual: &[f64], estimate: &[f64]) -> Result<f64> {
    if actual.len() != estimate.len() {
        return Err(ComputeError::LengthMismatch {
            expected: actual.len(),
            actual: estimate.len(),
        });
    }
    if actual.is_empty() {
        return Err(ComputeError::EmptyInput(
            "mean absolute error needs at least one value".to_string(),
        ));
    }

    let total: f64 = actual
        .iter()
        .zip(estimate)
        .map(|(a, e)| (a - e).abs())
        .sum();
    Ok(total / actual.len() as f64)
}

/// Scores measured on a generated series, in the same order as [`reference_scores`].
///
/// Persistence predicts yesterday's rainfall, so every model is scored from day 1 on
/// to compare all four on the same days.
#[instrument(skip(series), fields(days = series.len()))]
pub fn series_scores(series: &DaySeries) -> Result<Vec<ModelScore>> {
    if series.len() < 2 {
        return Err(ComputeError::EmptyInput(format!(
            "scoring needs at least 2 days, got {}",
            series.len()
        )));
    }

    let observed = &series.actual[1..];
    let scores = vec![
        ModelScore::new(
            PERSISTENCE,
            mean_absolute_error(observed, &series.actual[..series.len() - 1])?,
        ),
        ModelScore::new(
            LINEAR_REGRESSION,
            mean_absolute_error(observed, &series.linear_regression[1..])?,
        ),
        ModelScore::new(
            RANDOM_FOREST,
            mean_absolute_error(observed, &series.random_forest[1..])?,
        ),
        ModelScore::new(ENSEMBLE, mean_absolute_error(observed, &series.ensemble[1..])?),
    ];

    debug!(?scores, "Scored series");
    Ok(scores)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::generate;
    use common::DayValues;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_reference_scores_order() {
        let scores = reference_scores();
        let names: Vec<_> = scores.iter().map(|s| s.model.as_str()).collect();
        assert_eq!(names, vec!["Persistence", "Linear Reg", "Random Forest", "Ensemble"]);
        assert_eq!(scores[3].error, 3.42);
    }

    #[test]
    fn test_mean_absolute_error() {
        let mae = mean_absolute_error(&[1.0, 2.0, 3.0], &[2.0, 2.0, 1.0]).unwrap();
        assert_eq!(mae, 1.0);
    }

    #[test]
    fn test_mean_absolute_error_rejects_bad_input() {
        assert_eq!(
            mean_absolute_error(&[1.0, 2.0], &[1.0]),
            Err(ComputeError::LengthMismatch { expected: 2, actual: 1 })
        );
        assert!(matches!(
            mean_absolute_error(&[], &[]),
            Err(ComputeError::EmptyInput(_))
        ));
    }

    #[test]
    fn test_series_scores_on_hand_built_series() {
        let mut series = DaySeries::with_capacity(3);
        for (actual, lr, rf, ens) in [(0.0, 1.0, 0.0, 0.4), (4.0, 3.0, 5.0, 4.2), (2.0, 2.0, 2.0, 2.0)] {
            series.push(
                String::new(),
                DayValues {
                    actual,
                    linear_regression: lr,
                    random_forest: rf,
                    ensemble: ens,
                },
            );
        }

        let scores = series_scores(&series).unwrap();
        // persistence: |4-0| + |2-4| = 6 over 2 days
        assert_eq!(scores[0], ModelScore::new(PERSISTENCE, 3.0));
        assert_eq!(scores[1], ModelScore::new(LINEAR_REGRESSION, 0.5));
        assert_eq!(scores[2], ModelScore::new(RANDOM_FOREST, 0.5));
        assert_eq!(scores[3].model, ENSEMBLE);
    }

    #[test]
    fn test_series_scores_need_two_days() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(series_scores(&generate(1, &mut rng)).is_err());
    }

    #[test]
    fn test_random_forest_beats_persistence_over_a_year() {
        let mut rng = StdRng::seed_from_u64(11);
        let scores = series_scores(&generate(365, &mut rng)).unwrap();
        assert!(scores.iter().all(|s| s.error >= 0.0));
        assert!(scores[2].error < scores[0].error);
    }
}
