//! Single coin page.

use super::{page_locale, spawn_fetch, use_unmount_guard};
use crate::routes::Route;
use alertaz_core::api::ApiClient;
use alertaz_core::config::AppConfig;
use alertaz_core::market::{format_price, CoinDetails, CoinDetailsRequest};
use alertaz_core::resource::{RemoteResource, ResourceState, GENERIC_ERROR_MESSAGE};
use alertaz_ui::components::{ErrorDisplay, LoadingSpinner};
use dioxus::prelude::*;

#[component]
pub fn CoinDetail(locale: String, id: String) -> Element {
    let api = use_context::<ApiClient>();
    let currency = use_context::<AppConfig>().default_currency;
    let mut resource = use_signal(RemoteResource::<CoinDetails>::new);
    use_unmount_guard(resource);

    let request = CoinDetailsRequest {
        id: id.clone(),
        currency: currency.clone(),
        locale: page_locale(&locale),
    };

    let effect_api = api.clone();
    use_effect(use_reactive((&request,), move |(request,)| {
        let api = effect_api.clone();
        let (ticket, fetch) = resource
            .write()
            .begin_with(move || async move { api.coin_details(&request).await });
        spawn_fetch(resource, ticket, fetch);
    }));

    let retry_request = request.clone();
    let on_retry = move |_: ()| {
        let api = api.clone();
        let request = retry_request.clone();
        let retried = resource
            .write()
            .retry_with(move || async move { api.coin_details(&request).await });
        if let Some((ticket, fetch)) = retried {
            spawn_fetch(resource, ticket, fetch);
        }
    };

    let body = match resource.read().state() {
        ResourceState::Loading => rsx! { LoadingSpinner {} },
        ResourceState::Error => rsx! {
            ErrorDisplay { message: GENERIC_ERROR_MESSAGE.to_string(), on_retry }
        },
        ResourceState::Success(coin) => rsx! {
            article {
                div {
                    style: "display: flex; gap: 12px; align-items: center;",
                    if let Some(image) = coin.image.as_ref() {
                        img { src: "{image}", alt: "{coin.name}", width: "48", height: "48" }
                    }
                    h2 { "{coin.name} ({coin.symbol.to_uppercase()})" }
                }
                dl {
                    if let Some(price) = coin.current_price {
                        dt { "Price" }
                        dd { "{format_price(price, &currency)}" }
                    }
                    if let Some(cap) = coin.market_cap {
                        dt { "Market cap" }
                        dd { "{format_price(cap, &currency)}" }
                    }
                    if let Some(change) = coin.price_change_percentage_24h {
                        dt { "24h change" }
                        dd { "{change:+.2}%" }
                    }
                }
                if let Some(description) = coin.description.as_ref() {
                    p { style: "color: #444; line-height: 1.5;", "{description}" }
                }
            }
        },
    };

    rsx! {
        Link { to: Route::CoinList { locale: locale.clone() }, "← All coins" }
        {body}
    }
}
