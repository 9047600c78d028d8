use std::rc::Rc;

use common::DaySeries;
use compute::sampling::scatter_points;
use yew::prelude::*;

use crate::charts::{draw, DrawMode};
use crate::traces::{scatter_layout, scatter_traces};

const SCATTER_CHART_ID: &str = "scatter-chart";

#[derive(Properties, PartialEq)]
pub struct Props {
    pub series: Rc<DaySeries>,
}

#[function_component(ScatterChart)]
pub fn scatter_chart(props: &Props) -> Html {
    use_effect_with(props.series.clone(), |series| {
        let points = scatter_points(series);
        log::debug!("Scatter plot with {} points", points.len());
        draw(SCATTER_CHART_ID, &scatter_traces(&points), &scatter_layout(), DrawMode::New);
        || ()
    });

    html! {
        <div id={SCATTER_CHART_ID} class="chart-container" style="height: 300px;"></div>
    }
}
