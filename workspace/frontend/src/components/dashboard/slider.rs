use compute::compute_slider_values;
use compute::slider::{SLIDER_DEFAULT, SLIDER_MAX, SLIDER_MIN};
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Early-warning slider: the three estimates for a hypothetical rainfall amount.
#[function_component(EarlyWarningSlider)]
pub fn early_warning_slider() -> Html {
    let rainfall = use_state(|| SLIDER_DEFAULT);

    let oninput = {
        let rainfall = rainfall.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let value = input.value_as_number();
            if value.is_finite() {
                rainfall.set(value);
            }
        })
    };

    let (lr, rf, ensemble) = compute_slider_values(*rainfall).formatted();

    html! {
        <div class="flex flex-col gap-4">
            <div class="flex justify-between text-sm">
                <span>{"Curah hujan aktual"}</span>
                <span class="font-semibold">{format!("{} mm", *rainfall)}</span>
            </div>
            <input
                id="rain-slider"
                type="range"
                class="range range-primary"
                min={SLIDER_MIN.to_string()}
                max={SLIDER_MAX.to_string()}
                step="1"
                value={rainfall.to_string()}
                {oninput}
            />
            <div class="grid grid-cols-3 gap-2">
                <div class="stat bg-base-200 rounded-lg">
                    <div class="stat-title">{"Linear Reg"}</div>
                    <div id="val-lr" class="stat-value text-lg">{lr}</div>
                </div>
                <div class="stat bg-base-200 rounded-lg">
                    <div class="stat-title">{"Random Forest"}</div>
                    <div id="val-rf" class="stat-value text-lg text-warning">{rf}</div>
                </div>
                <div class="stat bg-base-200 rounded-lg">
                    <div class="stat-title">{"Ensemble"}</div>
                    <div id="val-ens" class="stat-value text-lg text-primary">{ensemble}</div>
                </div>
            </div>
        </div>
    }
}
