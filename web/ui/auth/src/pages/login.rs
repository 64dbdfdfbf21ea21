use std::sync::Arc;

use dominator::{clone, events, html, Dom};
use futures_signals::signal::SignalExt;
use shashin::form::LoginFields;
use shashin::SubmissionController;

use crate::app::App;
use crate::browser;
use crate::components::form::{EmailInput, PasswordInput};
use crate::components::loading::loading_indicator;
use crate::components::message::message_banner;
use crate::pages::reset_request::ResetRequestModal;
use crate::pages::{page_card, spawn_submit};
use crate::router::SIGNUP_ROUTE;

pub struct LoginPage {
    app: Arc<App>,
    controller: Arc<SubmissionController<LoginFields>>,
    reset_request: Arc<ResetRequestModal>,
}

impl LoginPage {
    pub fn new(app: Arc<App>) -> Arc<Self> {
        Arc::new(Self {
            app,
            controller: Arc::new(SubmissionController::new(
                LoginFields::new(),
                browser::transport(),
                browser::navigator(),
            )),
            reset_request: ResetRequestModal::new(),
        })
    }

    pub fn render(self: &Arc<Self>) -> Dom {
        let state = self.clone();
        let controller = state.controller.clone();
        let fields = controller.fields();
        let email = EmailInput::new(fields.email.clone(), None);
        let password = PasswordInput::new(fields.password.clone(), "パスワード")
            .on_enter(clone!(controller => move || spawn_submit(&controller)));

        let form = html!("div", {
            .after_removed(clone!(controller => move |_| controller.detach()))
            .children(&mut [
                email.render(controller.controls_disabled_signal()),
                password.render(controller.controls_disabled_signal()),
                html!("div", {
                    .class(["text-right", "mt-2"])
                    .children(&mut [
                        html!("button", {
                            .class(["link", "link-primary", "text-sm"])
                            .text("パスワードをお忘れですか？")
                            .prop_signal("disabled", controller.controls_disabled_signal())
                            .event(clone!(state => move |_: events::Click| {
                                state.reset_request.open();
                            }))
                        })
                    ])
                }),
                html!("button", {
                    .class(["btn", "btn-primary", "w-full", "mt-4"])
                    .prop_signal("disabled", controller.controls_disabled_signal())
                    .children(&mut [
                        loading_indicator(controller.controls_disabled_signal()),
                        html!("span", {
                            .text_signal(controller.controls_disabled_signal().map(|busy| {
                                if busy { "ログイン中..." } else { "ログイン" }
                            }))
                        }),
                    ])
                    .event(clone!(controller => move |_: events::Click| {
                        spawn_submit(&controller);
                    }))
                }),
                message_banner(controller.message_signal()),
                html!("p", {
                    .class(["text-sm", "text-center", "mt-6"])
                    .children(&mut [
                        html!("span", { .text("アカウントをお持ちでないですか？ ") }),
                        html!("a", {
                            .class(["link", "link-primary"])
                            .text("新規登録")
                            .event(clone!(state => move |_: events::Click| {
                                state.app.router.push(SIGNUP_ROUTE);
                            }))
                        }),
                    ])
                }),
                state.reset_request.render(),
            ])
        });

        page_card("ログイン", form)
    }
}
