pub mod login;
pub mod not_found;
pub mod reset_password;
pub mod reset_request;
pub mod signup;

use std::sync::Arc;

use dominator::{html, Dom};
use shashin::form::FormFields;
use shashin::SubmissionController;
use wasm_bindgen_futures::spawn_local;

/// Fires one submission in the background. The controller state drives the view.
pub fn spawn_submit<F: FormFields>(controller: &Arc<SubmissionController<F>>) {
    let controller = controller.clone();
    spawn_local(async move {
        let outcome = controller.submit().await;
        log::debug!("{}::outcome::{:?}", controller.flow().name, outcome);
    });
}

/// Centred card shared by the full-page forms.
pub fn page_card(title: &str, body: Dom) -> Dom {
    html!("div", {
        .class(["flex-1", "flex", "flex-col", "items-center", "justify-center", "p-4"])
        .children(&mut [
            html!("div", {
                .class(["w-full", "max-w-sm"])
                .children(&mut [
                    html!("h2", {
                        .class(["text-2xl", "font-bold", "mb-6", "text-center"])
                        .text(title)
                    }),
                    body,
                ])
            })
        ])
    })
}
