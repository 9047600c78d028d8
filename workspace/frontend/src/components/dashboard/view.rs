use yew::prelude::*;

use super::chart::TimeSeriesChart;
use super::errors::ErrorComparisonChart;
use super::scatter::ScatterChart;
use super::slider::EarlyWarningSlider;
use crate::settings::get_settings;

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    // Generated once per page load
    let series = use_memo((), |_| {
        let settings = get_settings();
        let series = settings.generator().build();
        log::info!("Generated {} days (seed: {:?})", series.len(), settings.seed);
        series
    });

    html! {
        <>
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h2 class="card-title">{"Curah Hujan Harian: Aktual vs Model"}</h2>
                    <TimeSeriesChart series={series.clone()} />
                </div>
            </div>
            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6 mt-6">
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h2 class="card-title">{"Perbandingan Error (MAE)"}</h2>
                        <ErrorComparisonChart />
                    </div>
                </div>
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h2 class="card-title">{"Aktual vs Ensemble"}</h2>
                        <ScatterChart series={series.clone()} />
                    </div>
                </div>
            </div>
            <div class="card bg-base-100 shadow mt-6">
                <div class="card-body">
                    <h2 class="card-title">{"Simulasi Peringatan Dini"}</h2>
                    <EarlyWarningSlider />
                </div>
            </div>
        </>
    }
}
