//! Crypto market overview.

use super::{page_locale, spawn_fetch, use_unmount_guard};
use crate::routes::Route;
use alertaz_core::api::ApiClient;
use alertaz_core::config::AppConfig;
use alertaz_core::market::{format_price, CoinListRequest, CoinSummary};
use alertaz_core::resource::{RemoteResource, ResourceState, GENERIC_ERROR_MESSAGE};
use alertaz_ui::components::{ErrorDisplay, LoadingSpinner};
use dioxus::prelude::*;

#[component]
pub fn CoinList(locale: String) -> Element {
    let api = use_context::<ApiClient>();
    let currency = use_context::<AppConfig>().default_currency;
    let mut resource = use_signal(RemoteResource::<Vec<CoinSummary>>::new);
    use_unmount_guard(resource);

    let request = CoinListRequest {
        currency: currency.clone(),
        locale: page_locale(&locale),
        page: 1,
    };

    let effect_api = api.clone();
    use_effect(use_reactive((&request,), move |(request,)| {
        let api = effect_api.clone();
        let (ticket, fetch) = resource
            .write()
            .begin_with(move || async move { api.coin_list(&request).await });
        spawn_fetch(resource, ticket, fetch);
    }));

    let retry_request = request.clone();
    let on_retry = move |_: ()| {
        let api = api.clone();
        let request = retry_request.clone();
        let retried = resource
            .write()
            .retry_with(move || async move { api.coin_list(&request).await });
        if let Some((ticket, fetch)) = retried {
            spawn_fetch(resource, ticket, fetch);
        }
    };

    let body = match resource.read().state() {
        ResourceState::Loading => rsx! { LoadingSpinner {} },
        ResourceState::Error => rsx! {
            ErrorDisplay { message: GENERIC_ERROR_MESSAGE.to_string(), on_retry }
        },
        ResourceState::Success(coins) => rsx! {
            table {
                style: "width: 100%; border-collapse: collapse;",
                thead {
                    tr {
                        th { style: "text-align: left;", "Coin" }
                        th { style: "text-align: right;", "Price" }
                        th { style: "text-align: right;", "24h" }
                    }
                }
                tbody {
                    for coin in coins.iter() {
                        tr {
                            key: "{coin.id}",
                            td {
                                Link {
                                    to: Route::CoinDetail { locale: locale.clone(), id: coin.id.clone() },
                                    "{coin.name} ({coin.symbol.to_uppercase()})"
                                }
                            }
                            td { style: "text-align: right;", "{price_cell(coin, &currency)}" }
                            td { style: "text-align: right;", "{change_cell(coin)}" }
                        }
                    }
                }
            }
        },
    };

    rsx! {
        h2 { "Crypto market" }
        {body}
    }
}

fn price_cell(coin: &CoinSummary, currency: &str) -> String {
    coin.current_price
        .map(|price| format_price(price, currency))
        .unwrap_or_else(|| "—".to_string())
}

fn change_cell(coin: &CoinSummary) -> String {
    coin.price_change_percentage_24h
        .map(|change| format!("{:+.2}%", change))
        .unwrap_or_default()
}
