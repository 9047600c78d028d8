use compute::compute_slider_values;
use tracing::debug;

pub fn slider(value: f64) -> String {
    let values = compute_slider_values(value);
    debug!(?values, "Computed slider values");

    let (lr, rf, ensemble) = values.formatted();
    format!(
        "rainfall: {value}\nlinear regression: {lr}\nrandom forest: {rf}\nensemble: {ensemble}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slider_output() {
        let output = slider(50.0);
        assert!(output.contains("linear regression: 37.0"));
        assert!(output.contains("random forest: 47.5"));
        assert!(output.contains("ensemble: 43.8"));
    }
}
