use dominator::{clone, events, html, with_node, Dom};
use futures_signals::signal::{Mutable, Signal, SignalExt};
use shashin::validator::{password_strength, PasswordStrength};
use std::sync::Arc;
use web_sys::HtmlInputElement;

pub struct PasswordInput {
    pub value: Mutable<String>,
    pub label: &'static str,
    pub autocomplete: &'static str,
    // Only new passwords get the meter
    pub show_strength: bool,
    pub on_enter: Option<Box<dyn Fn()>>,
}

impl PasswordInput {
    pub fn new(value: Mutable<String>, label: &'static str) -> Self {
        Self {
            value,
            label,
            autocomplete: "current-password",
            show_strength: false,
            on_enter: None,
        }
    }

    pub fn new_password(value: Mutable<String>, label: &'static str) -> Self {
        Self {
            value,
            label,
            autocomplete: "new-password",
            show_strength: true,
            on_enter: None,
        }
    }

    pub fn on_enter(mut self, callback: impl Fn() + 'static) -> Self {
        self.on_enter = Some(Box::new(callback));
        self
    }

    pub fn render<D>(self, disabled: D) -> Dom
    where
        D: Signal<Item = bool> + 'static,
    {
        let state = Arc::new(self);
        let visible = Mutable::new(false);

        html!("div", {
            .class(["form-control", "w-full", "mt-2"])
            .children(&mut [
                html!("label", {
                    .class(["label"])
                    .children(&mut [
                        html!("span", {
                            .class(["label-text"])
                            .text(state.label)
                        })
                    ])
                }),
                html!("div", {
                    .class(["join", "w-full"])
                    .children(&mut [
                        html!("input" => HtmlInputElement, {
                            .class(["input", "input-bordered", "join-item", "w-full"])
                            .attr_signal("type", visible.signal().map(|visible| if visible { "text" } else { "password" }))
                            .attr("autocomplete", state.autocomplete)
                            .prop_signal("value", state.value.signal_cloned())
                            .prop_signal("disabled", disabled)
                            .with_node!(input => {
                                .event(clone!(state => move |_: events::Input| {
                                    state.value.set_neq(input.value());
                                }))
                                .event(clone!(state => move |e: events::KeyDown| {
                                    if e.key() == "Enter" {
                                        if let Some(callback) = &state.on_enter {
                                            callback();
                                        }
                                    }
                                }))
                            })
                        }),
                        html!("button", {
                            .class(["btn", "join-item"])
                            .attr("type", "button")
                            .text_signal(visible.signal().map(|visible| if visible { "隠す" } else { "表示" }))
                            .event(clone!(visible => move |_: events::Click| {
                                visible.set(!visible.get());
                            }))
                        }),
                    ])
                }),
            ])
            .apply_if(state.show_strength, |dom| {
                dom.child_signal(state.value.signal_ref(|value| {
                    (!value.is_empty()).then(|| strength_meter(password_strength(value)))
                }))
            })
        })
    }
}

fn strength_meter(strength: PasswordStrength) -> Dom {
    let (value, class) = match strength {
        PasswordStrength::Weak => ("1", "progress-error"),
        PasswordStrength::Medium => ("2", "progress-warning"),
        PasswordStrength::Strong => ("3", "progress-success"),
    };

    html!("div", {
        .class(["flex", "items-center", "gap-2", "mt-1"])
        .children(&mut [
            html!("progress", {
                .class(["progress", "w-full"])
                .class(class)
                .attr("max", "3")
                .attr("value", value)
            }),
            html!("span", {
                .class(["text-xs", "whitespace-nowrap"])
                .text(strength.label())
            }),
        ])
    })
}
