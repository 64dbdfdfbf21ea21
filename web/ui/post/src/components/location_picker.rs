use std::sync::Arc;

use dominator::{clone, events, html, with_node, Dom};
use futures_signals::signal::{Mutable, SignalExt};
use shashin::location::{LiteralGeocoder, LocationPicker};
use shashin::model::Coordinate;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;

use crate::geolocation::BrowserGeolocation;

// Degrees moved by one press of a nudge button
const NUDGE_STEP: f64 = 0.01;

/// Modal around a [`LocationPicker`]. The pin is fixed; the map moves under it.
pub struct LocationPickerModal {
    picker: Arc<LocationPicker>,
    open: Mutable<bool>,
    on_confirm: Box<dyn Fn(Coordinate)>,
}

impl LocationPickerModal {
    pub fn new(initial: Option<Coordinate>, on_confirm: impl Fn(Coordinate) + 'static) -> Arc<Self> {
        Arc::new(Self {
            picker: Arc::new(LocationPicker::new(
                initial,
                Arc::new(BrowserGeolocation),
                Arc::new(LiteralGeocoder),
            )),
            open: Mutable::new(false),
            on_confirm: Box::new(on_confirm),
        })
    }

    pub fn open(&self) {
        self.picker.reset();
        self.open.set_neq(true);
    }

    fn nudge(&self, delta_latitude: f64, delta_longitude: f64) {
        if let Err(e) = self.picker.pan_by(delta_latitude, delta_longitude) {
            log::debug!("location_picker::nudge::{}", e);
        }
    }

    fn search(self: &Arc<Self>) {
        let picker = self.picker.clone();
        spawn_local(async move {
            picker.search().await;
        });
    }

    fn nudge_button(self: &Arc<Self>, label: &str, delta_latitude: f64, delta_longitude: f64) -> Dom {
        let state = self.clone();
        html!("button", {
            .class(["btn", "btn-sm", "btn-square"])
            .text(label)
            .event(move |_: events::Click| state.nudge(delta_latitude, delta_longitude))
        })
    }

    pub fn render(self: &Arc<Self>) -> Dom {
        let state = self.clone();
        let picker = state.picker.clone();

        html!("div", {
            .class("modal")
            .attr("role", "dialog")
            .class_signal("modal-open", state.open.signal())
            .children(&mut [
                html!("div", {
                    .class(["modal-box", "max-w-lg"])
                    .children(&mut [
                        html!("h3", {
                            .class(["font-bold", "text-lg", "mb-2"])
                            .text("撮影場所を選択")
                        }),
                        html!("div", {
                            .class(["join", "w-full"])
                            .children(&mut [
                                html!("input" => HtmlInputElement, {
                                    .class(["input", "input-bordered", "join-item", "w-full"])
                                    .attr("type", "search")
                                    .attr("placeholder", "35.6812, 139.7671")
                                    .prop_signal("value", picker.query().signal_cloned())
                                    .with_node!(input => {
                                        .event(clone!(picker => move |_: events::Input| {
                                            picker.query().set_neq(input.value());
                                        }))
                                        .event(clone!(state => move |e: events::KeyDown| {
                                            if e.key() == "Enter" {
                                                state.search();
                                            }
                                        }))
                                    })
                                }),
                                html!("button", {
                                    .class(["btn", "join-item"])
                                    .text("検索")
                                    .event(clone!(state => move |_: events::Click| state.search()))
                                }),
                            ])
                        }),
                        html!("div", {
                            .class(["relative", "w-full", "h-64", "mt-4", "rounded-box", "bg-base-300", "flex", "items-center", "justify-center"])
                            .children(&mut [
                                html!("span", {
                                    .class(["text-3xl"])
                                    .attr("aria-label", "pin")
                                    .text("📍")
                                }),
                                html!("span", {
                                    .class(["absolute", "bottom-2", "left-2", "text-xs", "font-mono"])
                                    .text_signal(picker.center_signal().map(|center| center.to_string()))
                                }),
                            ])
                        }),
                        html!("div", {
                            .class(["flex", "justify-center", "gap-1", "mt-2"])
                            .children(&mut [
                                state.nudge_button("←", 0.0, -NUDGE_STEP),
                                state.nudge_button("↑", NUDGE_STEP, 0.0),
                                state.nudge_button("↓", -NUDGE_STEP, 0.0),
                                state.nudge_button("→", 0.0, NUDGE_STEP),
                            ])
                        }),
                        html!("button", {
                            .class(["btn", "btn-outline", "btn-sm", "w-full", "mt-2"])
                            .prop_signal("disabled", picker.locating_signal())
                            .text_signal(picker.locating_signal().map(|locating| {
                                if locating { "取得中..." } else { "現在地を使用" }
                            }))
                            .event(clone!(picker => move |_: events::Click| {
                                let picker = picker.clone();
                                spawn_local(async move {
                                    let _ = picker.use_current_position().await;
                                });
                            }))
                        }),
                        html!("div", {
                            .child_signal(picker.error_signal().map(|error| error.map(|error| {
                                html!("div", {
                                    .attr("role", "alert")
                                    .class(["alert", "alert-error", "mt-2", "text-sm"])
                                    .text(&error)
                                })
                            })))
                        }),
                        html!("div", {
                            .class("modal-action")
                            .children(&mut [
                                html!("button", {
                                    .class("btn")
                                    .text("キャンセル")
                                    .event(clone!(state => move |_: events::Click| {
                                        state.picker.cancel();
                                        state.open.set_neq(false);
                                    }))
                                }),
                                html!("button", {
                                    .class(["btn", "btn-primary"])
                                    .text("決定")
                                    .event(clone!(state => move |_: events::Click| {
                                        (state.on_confirm)(state.picker.confirm());
                                        state.open.set_neq(false);
                                    }))
                                }),
                            ])
                        }),
                    ])
                })
            ])
        })
    }
}
