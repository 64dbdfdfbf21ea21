use std::sync::Arc;

use dominator::{clone, events, html, Dom};
use shashin::constants::LOGIN_ROUTE;

use crate::app::App;

pub fn not_found(app: Arc<App>) -> Dom {
    html!("div", {
        .class(["flex-1", "flex", "flex-col", "items-center", "justify-center", "gap-4"])
        .children(&mut [
            html!("p", {
                .text("ページが見つかりませんでした。")
            }),
            html!("a", {
                .class(["link", "link-primary"])
                .text("ログインへ戻る")
                .event(clone!(app => move |_: events::Click| {
                    app.router.push(LOGIN_ROUTE);
                }))
            }),
        ])
    })
}
