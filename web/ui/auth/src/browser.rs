use std::sync::Arc;
use std::time::Duration;

use dominator::routing;
use shashin::config::ApiConfig;
use shashin::transport::{ReqwestHttpClient, TransportAdapter};
use shashin::Navigator;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Moves the page with the router once the delay elapses.
#[derive(Debug, Clone, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn navigate_after(&self, target: &str, delay: Duration) {
        let Some(window) = web_sys::window() else {
            routing::go_to_url(target);
            return;
        };

        let target = target.to_string();
        let callback = Closure::once_into_js(move || routing::go_to_url(&target));
        let timeout = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
        if let Err(e) = window.set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), timeout) {
            log::error!("browser::navigate_after::set_timeout::{:?}", e);
        }
    }
}

/// The API is served from the page origin unless the build pins another one.
pub fn api_base_url() -> String {
    if let Some(base_url) = option_env!("SHASHIN_API_BASE_URL") {
        return base_url.to_string();
    }

    web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_else(|| ApiConfig::default().base_url)
}

pub fn query_string() -> String {
    web_sys::window()
        .and_then(|window| window.location().search().ok())
        .unwrap_or_default()
}

pub fn transport() -> TransportAdapter {
    let config = ApiConfig {
        base_url: api_base_url(),
        ..ApiConfig::default()
    };
    TransportAdapter::new(Arc::new(ReqwestHttpClient::new(&config)), config.base_url.clone())
}

pub fn navigator() -> Arc<dyn Navigator> {
    Arc::new(BrowserNavigator)
}
