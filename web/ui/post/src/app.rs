use std::sync::Arc;

use dominator::{clone, events, html, Dom};
use futures_signals::signal::{Mutable, SignalExt};
use shashin::model::Coordinate;

use crate::components::location_picker::LocationPickerModal;

/// Post composer: for now only the shooting location is chosen here.
pub struct App {
    location: Mutable<Option<Coordinate>>,
    picker: Arc<LocationPickerModal>,
}

impl App {
    pub fn new() -> Arc<Self> {
        let location = Mutable::new(None);
        let picker = LocationPickerModal::new(None, clone!(location => move |coordinate| {
            log::info!("post_ui::location::confirmed::{}", coordinate);
            location.set(Some(coordinate));
        }));

        Arc::new(Self { location, picker })
    }

    pub fn render(app: Arc<Self>) -> Dom {
        html!("div", {
            .class(["min-h-screen", "bg-base-200", "flex", "flex-col", "items-center", "justify-center", "gap-4", "p-4"])
            .children(&mut [
                html!("p", {
                    .class(["text-sm"])
                    .text_signal(app.location.signal().map(|location| match location {
                        Some(location) => format!("撮影場所: {}", location),
                        None => "撮影場所は未設定です".to_string(),
                    }))
                }),
                html!("button", {
                    .class(["btn", "btn-primary"])
                    .text("撮影場所を選択")
                    .event(clone!(app => move |_: events::Click| app.picker.open()))
                }),
                app.picker.render(),
            ])
        })
    }
}
