use std::sync::Arc;

use dominator::{clone, events, html, Dom};
use futures_signals::signal::SignalExt;
use shashin::form::{ResetPasswordFields, ResetPasswordPage};
use shashin::SubmissionController;

use crate::browser;
use crate::components::form::PasswordInput;
use crate::components::loading::loading_indicator;
use crate::components::message::{message_banner, static_banner};
use crate::pages::{page_card, spawn_submit};

/// Landing page of the emailed reset link.
pub struct ResetPasswordView {
    controller: Option<Arc<SubmissionController<ResetPasswordFields>>>,
    invalid_link_message: Option<&'static str>,
}

impl ResetPasswordView {
    pub fn new() -> Arc<Self> {
        let page = ResetPasswordPage::from_query(&browser::query_string());
        let invalid_link_message = page.invalid_link_message();
        let controller = match page {
            ResetPasswordPage::Ready(fields) => Some(Arc::new(SubmissionController::new(
                fields,
                browser::transport(),
                browser::navigator(),
            ))),
            ResetPasswordPage::InvalidLink => {
                log::warn!("reset_password::invalid_link");
                None
            }
        };

        Arc::new(Self {
            controller,
            invalid_link_message,
        })
    }

    pub fn render(self: &Arc<Self>) -> Dom {
        let body = match (&self.controller, self.invalid_link_message) {
            (Some(controller), _) => Self::render_form(controller.clone()),
            (None, message) => static_banner(message.unwrap_or_default()),
        };

        page_card("パスワード再設定", body)
    }

    fn render_form(controller: Arc<SubmissionController<ResetPasswordFields>>) -> Dom {
        let fields = controller.fields();

        html!("div", {
            .after_removed(clone!(controller => move |_| controller.detach()))
            .children(&mut [
                PasswordInput::new_password(fields.new_password.clone(), "新しいパスワード")
                    .render(controller.controls_disabled_signal()),
                PasswordInput::new(fields.confirm_password.clone(), "新しいパスワード（確認）")
                    .on_enter(clone!(controller => move || spawn_submit(&controller)))
                    .render(controller.controls_disabled_signal()),
                html!("button", {
                    .class(["btn", "btn-primary", "w-full", "mt-4"])
                    .prop_signal("disabled", controller.controls_disabled_signal())
                    .children(&mut [
                        loading_indicator(controller.controls_disabled_signal()),
                        html!("span", {
                            .text_signal(controller.controls_disabled_signal().map(|busy| {
                                if busy { "送信中..." } else { "パスワードを再設定" }
                            }))
                        }),
                    ])
                    .event(clone!(controller => move |_: events::Click| {
                        spawn_submit(&controller);
                    }))
                }),
                message_banner(controller.message_signal()),
            ])
        })
    }
}
