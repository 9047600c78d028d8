use common::SliderValues;

/// Lower bound of the rainfall slider (mm).
pub const SLIDER_MIN: f64 = 0.0;
/// Upper bound of the rainfall slider (mm).
pub const SLIDER_MAX: f64 = 100.0;
/// Slider position on first render.
pub const SLIDER_DEFAULT: f64 = 50.0;

/// What each model would report for `rainfall` mm of actual rain.
///
/// Independent of any generated series; values are left unrounded and formatted for
/// display through [`SliderValues::formatted`].
pub fn compute_slider_values(rainfall: f64) -> SliderValues {
    let linear_regression = rainfall * 0.7 + 2.0;
    let random_forest = rainfall * 0.95;
    let ensemble = 0.35 * linear_regression + 0.65 * random_forest;
    SliderValues {
        linear_regression,
        random_forest,
        ensemble,
    }
}
