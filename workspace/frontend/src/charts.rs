use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::prelude::*;

use crate::traces::plot_config;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = Plotly, js_name = newPlot)]
    fn new_plot(div_id: &str, data: JsValue, layout: JsValue, config: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = Plotly)]
    fn react(div_id: &str, data: JsValue, layout: JsValue, config: JsValue) -> Result<JsValue, JsValue>;
}

/// Whether a chart is drawn for the first time or updated in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawMode {
    New,
    Update,
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, String> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| format!("cannot convert plot spec: {}", e))
}

fn target_exists(div_id: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(div_id))
        .is_some()
}

/// Draws `traces` into the element `div_id` through the global `Plotly` object.
///
/// A missing element or a failing Plotly call is logged and the panel stays empty.
pub fn draw(div_id: &str, traces: &[Value], layout: &Value, mode: DrawMode) {
    if !target_exists(div_id) {
        log::error!("Chart target #{} not found, skipping", div_id);
        return;
    }

    let specs = (to_js(traces), to_js(layout), to_js(&plot_config()));
    let (data, layout, config) = match specs {
        (Ok(data), Ok(layout), Ok(config)) => (data, layout, config),
        (Err(e), _, _) | (_, Err(e), _) | (_, _, Err(e)) => {
            log::error!("Chart #{}: {}", div_id, e);
            return;
        }
    };

    let result = match mode {
        DrawMode::New => new_plot(div_id, data, layout, config),
        DrawMode::Update => react(div_id, data, layout, config),
    };

    match result {
        Ok(_) => log::trace!("Chart #{} drawn ({:?})", div_id, mode),
        Err(e) => log::error!("Plotly failed on #{}: {:?}", div_id, e),
    }
}
