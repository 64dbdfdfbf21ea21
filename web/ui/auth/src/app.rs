use std::sync::Arc;

use dominator::{html, Dom};
use futures_signals::signal::SignalExt;

use crate::pages::login::LoginPage;
use crate::pages::not_found::not_found;
use crate::pages::reset_password::ResetPasswordView;
use crate::pages::signup::SignupPage;
use crate::router::{Route, Router};

pub struct App {
    pub router: Arc<Router>,
}

impl App {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            router: Router::new(),
        })
    }

    pub fn render(app: Arc<Self>) -> Dom {
        let app_clone = app.clone();
        html!("div", {
            .class(["min-h-screen", "bg-base-200", "flex", "flex-col"])
            .child_signal(app.router.current_route.signal().map(move |route| {
                Some(match route {
                    Route::Login => LoginPage::new(app_clone.clone()).render(),
                    Route::Signup => SignupPage::new(app_clone.clone()).render(),
                    Route::ResetPassword => ResetPasswordView::new().render(),
                    Route::NotFound => not_found(app_clone.clone()),
                })
            }))
        })
    }
}
