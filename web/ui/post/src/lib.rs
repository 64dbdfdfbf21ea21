mod app;
mod components;
mod geolocation;

use wasm_bindgen::prelude::*;

use crate::app::App;

#[wasm_bindgen(start)]
pub fn main_js() -> Result<(), JsValue> {
    #[cfg(feature = "develop")]
    {
        wasm_logger::init(wasm_logger::Config::default());
        console_error_panic_hook::set_once();
    }

    dominator::append_dom(&dominator::body(), App::render(App::new()));
    Ok(())
}
