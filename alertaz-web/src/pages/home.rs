//! Landing page.

use crate::routes::Route;
use dioxus::prelude::*;

#[component]
pub fn Home(locale: String) -> Element {
    rsx! {
        section {
            style: "padding: 32px 0; text-align: center;",
            h1 { style: "margin: 0 0 8px 0;", "Reach every customer, on every channel" }
            p {
                style: "color: #666; max-width: 640px; margin: 0 auto 16px auto;",
                "Bulk SMS and email campaigns with delivery tracking, plus live crypto market data."
            }
            div {
                style: "display: flex; gap: 16px; justify-content: center;",
                Link { to: Route::Messages { locale: locale.clone() }, "Open dashboard" }
                Link { to: Route::CoinList { locale: locale.clone() }, "View markets" }
            }
        }
    }
}
