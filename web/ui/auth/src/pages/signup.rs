use std::sync::Arc;

use dominator::{clone, events, html, Dom};
use futures_signals::signal::SignalExt;
use shashin::constants::LOGIN_ROUTE;
use shashin::form::SignupFields;
use shashin::SubmissionController;

use crate::app::App;
use crate::browser;
use crate::components::form::{EmailInput, PasswordInput};
use crate::components::loading::loading_indicator;
use crate::components::message::message_banner;
use crate::pages::{page_card, spawn_submit};

pub struct SignupPage {
    app: Arc<App>,
    controller: Arc<SubmissionController<SignupFields>>,
}

impl SignupPage {
    pub fn new(app: Arc<App>) -> Arc<Self> {
        Arc::new(Self {
            app,
            controller: Arc::new(SubmissionController::new(
                SignupFields::new(),
                browser::transport(),
                browser::navigator(),
            )),
        })
    }

    pub fn render(self: &Arc<Self>) -> Dom {
        let state = self.clone();
        let controller = state.controller.clone();
        let fields = controller.fields();
        let email = EmailInput::new(fields.email.clone(), None);

        let form = html!("div", {
            .after_removed(clone!(controller => move |_| controller.detach()))
            .children(&mut [
                email.render(controller.controls_disabled_signal()),
                PasswordInput::new_password(fields.password.clone(), "パスワード")
                    .render(controller.controls_disabled_signal()),
                PasswordInput::new(fields.confirm_password.clone(), "パスワード（確認）")
                    .on_enter(clone!(controller => move || spawn_submit(&controller)))
                    .render(controller.controls_disabled_signal()),
                html!("p", {
                    .class(["text-xs", "mt-2", "text-base-content/70"])
                    .text("8〜20文字で、英大文字・英小文字・数字をそれぞれ1文字以上含めてください。記号は使用できません。")
                }),
                html!("button", {
                    .class(["btn", "btn-primary", "w-full", "mt-4"])
                    .prop_signal("disabled", controller.controls_disabled_signal())
                    .children(&mut [
                        loading_indicator(controller.controls_disabled_signal()),
                        html!("span", {
                            .text_signal(controller.controls_disabled_signal().map(|busy| {
                                if busy { "登録中..." } else { "登録する" }
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
                        html!("span", { .text("すでにアカウントをお持ちですか？ ") }),
                        html!("a", {
                            .class(["link", "link-primary"])
                            .text("ログイン")
                            .event(clone!(state => move |_: events::Click| {
                                state.app.router.push(LOGIN_ROUTE);
                            }))
                        }),
                    ])
                }),
            ])
        });

        page_card("新規登録", form)
    }
}
