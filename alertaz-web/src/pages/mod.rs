//! Routed pages. Pages that fetch keep a `RemoteResource` in a signal and
//! show a retry button when the fetch fails.

mod coin_detail;
mod coin_list;
mod home;
mod messages;

pub use coin_detail::CoinDetail;
pub use coin_list::CoinList;
pub use home::Home;
pub use messages::Messages;

use alertaz_core::error::Result;
use alertaz_core::locale::Locale;
use alertaz_core::resource::{FetchTicket, RemoteResource};
use dioxus::prelude::*;
use std::future::Future;

/// Run `fetch` on the current component's task scope and apply its result
/// under `ticket`. The task is dropped with the component.
fn spawn_fetch<T: 'static>(
    mut resource: Signal<RemoteResource<T>>,
    ticket: FetchTicket,
    fetch: impl Future<Output = Result<T>> + 'static,
) {
    spawn(async move {
        let result = fetch.await;
        resource.write().complete(ticket, result);
    });
}

/// Stop applying late results once the page is gone.
fn use_unmount_guard<T: 'static>(mut resource: Signal<RemoteResource<T>>) {
    use_drop(move || {
        if let Ok(mut resource) = resource.try_write() {
            resource.unmount();
        }
    });
}

/// The shell has already rejected unsupported locales.
fn page_locale(code: &str) -> Locale {
    Locale::from_code(code).unwrap_or_default()
}
