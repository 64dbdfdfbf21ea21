use dominator::{html, Dom};
use futures_signals::signal::{Signal, SignalExt};
use shashin::FormMessage;

/// Success or error banner. Empty while there is nothing to say.
pub fn message_banner<S>(message: S) -> Dom
where
    S: Signal<Item = Option<FormMessage>> + 'static,
{
    html!("div", {
        .child_signal(message.map(|message| message.map(|message| {
            html!("div", {
                .attr("role", "alert")
                .class(["alert", "mt-4", "text-sm"])
                .class(if message.is_error() { "alert-error" } else { "alert-success" })
                .text(message.text())
            })
        })))
    })
}

pub fn static_banner(text: &str) -> Dom {
    html!("div", {
        .attr("role", "alert")
        .class(["alert", "alert-error", "text-sm"])
        .text(text)
    })
}
