use std::rc::Rc;

use common::{DaySeries, Period};
use compute::SeriesView;
use yew::prelude::*;

use crate::charts::{draw, DrawMode};
use crate::traces::{main_layout, main_traces};

pub const MAIN_CHART_ID: &str = "main-time-series-chart";

/// The main time-series chart: owns its target element id and the series view it shows.
pub struct MainChart {
    div_id: String,
    view: SeriesView,
    drawn: bool,
}

impl MainChart {
    pub fn new(div_id: impl Into<String>, series: DaySeries) -> Self {
        Self {
            div_id: div_id.into(),
            view: SeriesView::new(series),
            drawn: false,
        }
    }

    /// Plots the visible window, replacing whatever the element showed before.
    pub fn draw(&mut self) {
        let mode = if self.drawn { DrawMode::Update } else { DrawMode::New };
        let traces = main_traces(&self.view.visible());
        draw(&self.div_id, &traces, &main_layout(), mode);
        self.drawn = true;
    }

    /// Switches the visible range to `period` and redraws without regenerating data.
    pub fn apply_period(&mut self, period: Period) {
        let range = self.view.apply_period(period);
        log::debug!("Main chart period {} -> days {}..{}", period, range.start, range.end);
        self.draw();
    }
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub series: Rc<DaySeries>,
}

#[function_component(TimeSeriesChart)]
pub fn time_series_chart(props: &Props) -> Html {
    let chart = use_mut_ref(|| None::<MainChart>);
    let active = use_state(|| None::<Period>);

    {
        let chart = chart.clone();
        let active = active.clone();
        use_effect_with(props.series.clone(), move |series| {
            let mut main = MainChart::new(MAIN_CHART_ID, (**series).clone());
            main.draw();
            *chart.borrow_mut() = Some(main);
            active.set(None);
            || ()
        });
    }

    let buttons = Period::ALL.iter().map(|&period| {
        let onclick = {
            let chart = chart.clone();
            let active = active.clone();
            Callback::from(move |_: MouseEvent| {
                if let Some(main) = chart.borrow_mut().as_mut() {
                    main.apply_period(period);
                }
                active.set(Some(period));
            })
        };
        let selected = *active == Some(period);
        html! {
            <button
                class={classes!("btn", "btn-sm", "join-item", selected.then_some("btn-active"))}
                {onclick}
            >
                {period.caption()}
            </button>
        }
    });

    html! {
        <>
            <div class="join mb-4">
                { for buttons }
            </div>
            <div id={MAIN_CHART_ID} class="chart-container" style="height: 360px;"></div>
        </>
    }
}
