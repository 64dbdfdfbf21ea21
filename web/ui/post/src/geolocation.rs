use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use futures::channel::oneshot;
use js_sys::Reflect;
use shashin::error::GeolocationError;
use shashin::location::Geolocation;
use shashin::model::Coordinate;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

type Reply = Result<Coordinate, GeolocationError>;

// PositionError codes
const PERMISSION_DENIED: u16 = 1;
const TIMEOUT: u16 = 3;

/// `navigator.geolocation.getCurrentPosition` behind the picker's [`Geolocation`] seam.
#[derive(Debug, Clone, Default)]
pub struct BrowserGeolocation;

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl Geolocation for BrowserGeolocation {
    async fn current_position(&self) -> Result<Coordinate, GeolocationError> {
        let (sender, receiver) = oneshot::channel::<Reply>();
        request_position(Arc::new(Mutex::new(Some(sender))))?;

        receiver
            .await
            .unwrap_or_else(|_| Err(GeolocationError::Unavailable("no reply".to_string())))
    }
}

fn request_position(sender: Arc<Mutex<Option<oneshot::Sender<Reply>>>>) -> Result<(), GeolocationError> {
    let window = web_sys::window().ok_or_else(|| GeolocationError::Unavailable("no window".to_string()))?;
    let geolocation = window
        .navigator()
        .geolocation()
        .map_err(|e| GeolocationError::Unavailable(format!("{:?}", e)))?;

    let on_success = {
        let sender = sender.clone();
        Closure::once_into_js(move |position: JsValue| reply(&sender, read_position(&position)))
    };
    let on_error = {
        let sender = sender.clone();
        Closure::once_into_js(move |error: JsValue| reply(&sender, Err(read_error(&error))))
    };

    geolocation
        .get_current_position_with_error_callback(on_success.unchecked_ref(), Some(on_error.unchecked_ref()))
        .map_err(|e| GeolocationError::Unavailable(format!("{:?}", e)))
}

fn reply(sender: &Mutex<Option<oneshot::Sender<Reply>>>, value: Reply) {
    if let Some(sender) = sender.lock().ok().and_then(|mut sender| sender.take()) {
        let _ = sender.send(value);
    }
}

fn number(target: &JsValue, key: &str) -> Option<f64> {
    Reflect::get(target, &JsValue::from_str(key)).ok()?.as_f64()
}

fn read_position(position: &JsValue) -> Reply {
    let coords = Reflect::get(position, &JsValue::from_str("coords"))
        .map_err(|_| GeolocationError::Unavailable("missing coords".to_string()))?;

    match (number(&coords, "latitude"), number(&coords, "longitude")) {
        (Some(latitude), Some(longitude)) => {
            Coordinate::new(latitude, longitude).map_err(|e| GeolocationError::Unavailable(e.to_string()))
        }
        _ => Err(GeolocationError::Unavailable("missing latitude/longitude".to_string())),
    }
}

fn read_error(error: &JsValue) -> GeolocationError {
    match number(error, "code").map(|code| code as u16) {
        Some(PERMISSION_DENIED) => GeolocationError::PermissionDenied,
        Some(TIMEOUT) => GeolocationError::Timeout,
        _ => {
            let message = Reflect::get(error, &JsValue::from_str("message"))
                .ok()
                .and_then(|message| message.as_string())
                .unwrap_or_default();
            GeolocationError::Unavailable(message)
        }
    }
}
