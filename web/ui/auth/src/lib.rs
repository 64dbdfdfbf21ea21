mod app;
mod browser;
mod components;
mod pages;
mod router;

use wasm_bindgen::prelude::*;

use crate::app::App;

#[wasm_bindgen(start)]
pub fn main_js() -> Result<(), JsValue> {
    #[cfg(feature = "develop")]
    {
        wasm_logger::init(wasm_logger::Config::default());
        console_error_panic_hook::set_once();
    }

    log::info!("auth_ui::start::{}", browser::api_base_url());
    dominator::append_dom(&dominator::body(), App::render(App::new()));
    Ok(())
}
