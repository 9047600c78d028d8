use compute::metrics::reference_scores;
use yew::prelude::*;

use crate::charts::{draw, DrawMode};
use crate::traces::{error_layout, error_traces};

const ERROR_CHART_ID: &str = "error-comparison-chart";

#[function_component(ErrorComparisonChart)]
pub fn error_comparison_chart() -> Html {
    use_effect_with((), |_| {
        draw(ERROR_CHART_ID, &error_traces(&reference_scores()), &error_layout(), DrawMode::New);
        || ()
    });

    html! {
        <div id={ERROR_CHART_ID} class="chart-container" style="height: 260px;"></div>
    }
}
