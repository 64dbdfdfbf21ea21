use std::sync::Arc;

use dominator::routing;
use futures_signals::signal::{Mutable, SignalExt};
use shashin::constants::{HOME_ROUTE, LOGIN_ROUTE};
use wasm_bindgen_futures::spawn_local;

pub const SIGNUP_ROUTE: &str = "/signup";
pub const RESET_PASSWORD_ROUTE: &str = "/reset-password";

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Route {
    Login,
    Signup,
    ResetPassword,
    NotFound,
}

pub struct Router {
    pub current_route: Mutable<Route>,
}

impl Router {
    pub fn new() -> Arc<Self> {
        let router = Arc::new(Self {
            current_route: Mutable::new(Route::Login),
        });

        {
            let router = router.clone();
            spawn_local(async move {
                routing::url()
                    .signal_ref(|url| Router::url_to_route(url))
                    .for_each(move |route| {
                        log::debug!("router::route_changed::{:?}", route);
                        router.current_route.set_neq(route);
                        async {}
                    })
                    .await;
            });
        }

        router
    }

    pub fn push(&self, path: &str) {
        log::debug!("router::push::{}", path);
        routing::go_to_url(path);
    }

    pub fn url_to_route(url: &str) -> Route {
        let path = match url::Url::parse(url) {
            Ok(parsed) => parsed.path().to_string(),
            Err(_) => url.split('?').next().unwrap_or(url).to_string(),
        };

        match path.as_str() {
            HOME_ROUTE | LOGIN_ROUTE => Route::Login,
            SIGNUP_ROUTE => Route::Signup,
            RESET_PASSWORD_ROUTE => Route::ResetPassword,
            _ => Route::NotFound,
        }
    }
}
