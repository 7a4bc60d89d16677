//! Browser entry point. Exposes `generatePlot(csvData, optionsJson)` to
//! JavaScript; everything interesting happens in the shared `plot` crate.

use plot::PlotResponse;

#[cfg(target_arch = "wasm32")]
mod bindings {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::prelude::*;

    use plot::PlotResponse;

    /// Returns `{ base64Image }` on success or `{ error }` on failure.
    #[wasm_bindgen(js_name = generatePlot)]
    pub fn generate_plot(csv_data: &str, options_json: &str) -> JsValue {
        to_js(super::respond(csv_data, options_json))
    }

    fn to_js(response: PlotResponse) -> JsValue {
        let (key, value) = match response {
            PlotResponse::Image { base64_image } => ("base64Image", base64_image),
            PlotResponse::Error { error } => ("error", error),
        };
        let object = Object::new();
        let _ = Reflect::set(&object, &JsValue::from_str(key), &JsValue::from_str(&value));
        object.into()
    }
}

#[cfg(target_arch = "wasm32")]
pub use bindings::generate_plot;

fn respond(csv_data: &str, options_json: &str) -> PlotResponse {
    plot::handle_request(csv_data, options_json)
}

/// Native stand-in for the wasm export: the same call, answered as the JSON
/// text the browser would see.
#[cfg(not(target_arch = "wasm32"))]
pub fn generate_plot(csv_data: &str, options_json: &str) -> String {
    respond(csv_data, options_json).to_json()
}
