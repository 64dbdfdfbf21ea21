use std::sync::Arc;

use dominator::{clone, events, html, Dom};
use futures_signals::signal::SignalExt;
use shashin::form::ResetRequestFields;
use shashin::SubmissionController;

use crate::browser;
use crate::components::form::EmailInput;
use crate::components::loading::loading_indicator;
use crate::components::message::message_banner;
use crate::pages::spawn_submit;

/// "Forgot your password?" modal opened from the login dialog.
pub struct ResetRequestModal {
    controller: Arc<SubmissionController<ResetRequestFields>>,
}

impl ResetRequestModal {
    pub fn new() -> Arc<Self> {
        let controller = SubmissionController::new(ResetRequestFields::new(), browser::transport(), browser::navigator());
        controller.set_open(false);
        Arc::new(Self {
            controller: Arc::new(controller),
        })
    }

    pub fn open(&self) {
        self.controller.set_open(true);
    }

    pub fn render(self: &Arc<Self>) -> Dom {
        let controller = self.controller.clone();
        let email = EmailInput::new(
            controller.fields().email.clone(),
            Some(Box::new(clone!(controller => move || spawn_submit(&controller)))),
        );

        html!("div", {
            .class("modal")
            .attr("role", "dialog")
            .class_signal("modal-open", controller.open_signal())
            .after_removed(clone!(controller => move |_| controller.detach()))
            .children(&mut [
                html!("div", {
                    .class("modal-box")
                    .children(&mut [
                        html!("h3", {
                            .class(["font-bold", "text-lg"])
                            .text("パスワードをお忘れですか？")
                        }),
                        html!("div", {
                            .visible_signal(controller.form_visible_signal())
                            .children(&mut [
                                html!("p", {
                                    .class(["text-sm", "py-2", "text-base-content/70"])
                                    .text("登録済みのメールアドレスを入力してください。パスワード再設定用のリンクをお送りします。")
                                }),
                                email.render(controller.controls_disabled_signal()),
                                html!("button", {
                                    .class(["btn", "btn-primary", "w-full", "mt-4"])
                                    .prop_signal("disabled", controller.controls_disabled_signal())
                                    .children(&mut [
                                        loading_indicator(controller.controls_disabled_signal()),
                                        html!("span", {
                                            .text_signal(controller.controls_disabled_signal().map(|busy| {
                                                if busy { "送信中..." } else { "送信" }
                                            }))
                                        }),
                                    ])
                                    .event(clone!(controller => move |_: events::Click| {
                                        spawn_submit(&controller);
                                    }))
                                }),
                            ])
                        }),
                        message_banner(controller.message_signal()),
                        html!("div", {
                            .class("modal-action")
                            .children(&mut [
                                html!("button", {
                                    .class("btn")
                                    .text("閉じる")
                                    .prop_signal("disabled", controller.controls_disabled_signal())
                                    .event(clone!(controller => move |_: events::Click| {
                                        controller.set_open(false);
                                    }))
                                })
                            ])
                        }),
                    ])
                })
            ])
        })
    }
}
