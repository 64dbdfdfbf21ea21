use dominator::{clone, events, html, with_node, Dom};
use futures_signals::signal::{Mutable, Signal};
use shashin::validator::validate_email;
use std::sync::Arc;
use web_sys::HtmlInputElement;

pub struct EmailInput {
    pub email: Mutable<String>,
    pub on_enter: Option<Box<dyn Fn()>>,
}

impl EmailInput {
    pub fn new(email: Mutable<String>, on_enter: Option<Box<dyn Fn()>>) -> Arc<Self> {
        Arc::new(Self { email, on_enter })
    }

    pub fn render<D>(self: &Arc<Self>, disabled: D) -> Dom
    where
        D: Signal<Item = bool> + 'static,
    {
        let state = self.clone();

        html!("div", {
            .class(["form-control", "w-full"])
            .children(&mut [
                html!("label", {
                    .class(["label"])
                    .children(&mut [
                        html!("span", {
                            .class(["label-text"])
                            .text("メールアドレス")
                        })
                    ])
                }),
                html!("input" => HtmlInputElement, {
                    .class(["input", "input-bordered", "w-full"])
                    .class_signal("input-error", state.email.signal_ref(|email| {
                        !email.is_empty() && validate_email(email).is_err()
                    }))
                    .attr("type", "email")
                    .attr("autocomplete", "email")
                    .attr("placeholder", "example@shashin.jp")
                    .prop_signal("value", state.email.signal_cloned())
                    .prop_signal("disabled", disabled)
                    .with_node!(input => {
                        .event(clone!(state => move |_: events::Input| {
                            state.email.set_neq(input.value());
                        }))
                        .event(clone!(state => move |e: events::KeyDown| {
                            if e.key() == "Enter" {
                                if let Some(callback) = &state.on_enter {
                                    callback();
                                }
                            }
                        }))
                    })
                })
            ])
        })
    }
}
