//! Frame around every locale-scoped page.

use crate::routes::Route;
use alertaz_core::api::ApiClient;
use alertaz_core::locale::{Locale, SUPPORTED_LOCALES};
use alertaz_core::widget::UserFields;
use alertaz_ui::components::{ChatWidget, ProjectSelector, TimezoneSelector};
use alertaz_ui::state::ProjectContext;
use dioxus::prelude::*;
use log::warn;

/// Validates the locale segment, then renders header, page and footer.
/// Unsupported locales get the not-found page instead of the frame.
#[component]
pub fn LocaleShell() -> Element {
    let route = use_route::<Route>();
    let api = use_context::<ApiClient>();
    let mut projects = use_context::<ProjectContext>();
    let mut user = use_signal(|| None::<UserFields>);

    // Account data is loaded once per session, under the session credential.
    use_hook(move || {
        spawn(async move {
            match api.projects().await {
                Ok(list) => projects.set_known_projects(list),
                Err(e) => warn!("shell: could not refresh projects: {}", e),
            }
            match api.current_user().await {
                Ok(fields) => user.set(Some(fields)),
                Err(e) => warn!("shell: could not load current user: {}", e),
            }
        });
    });

    let Some(locale) = route.locale() else {
        return rsx! {
            NotFoundView {}
        };
    };

    rsx! {
        div {
            lang: "{locale.code()}",
            style: "max-width: 1100px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",
            Header { locale, route: route.clone() }
            main {
                style: "min-height: 60vh;",
                Outlet::<Route> {}
            }
            Footer { locale }
            ChatWidget { user: user() }
        }
    }
}

#[component]
fn Header(locale: Locale, route: Route) -> Element {
    let code = locale.code().to_string();

    rsx! {
        header {
            style: "display: flex; flex-wrap: wrap; gap: 16px; align-items: center; justify-content: space-between; padding: 8px 0; border-bottom: 1px solid #e0e0e0;",
            nav {
                style: "display: flex; gap: 12px; align-items: center;",
                Link { to: Route::Home { locale: code.clone() }, strong { "Alertaz" } }
                Link { to: Route::CoinList { locale: code.clone() }, "Markets" }
                Link { to: Route::Messages { locale: code.clone() }, "Messages" }
            }
            div {
                style: "display: flex; gap: 12px; align-items: center;",
                ProjectSelector {}
                TimezoneSelector {}
                LocaleSwitcher { current: locale, route }
            }
        }
    }
}

#[component]
fn LocaleSwitcher(current: Locale, route: Route) -> Element {
    rsx! {
        span {
            style: "display: flex; gap: 6px;",
            for locale in SUPPORTED_LOCALES {
                if locale == current {
                    strong { title: "{locale.label()}", "{locale.code().to_uppercase()}" }
                } else {
                    span {
                        title: "{locale.label()}",
                        Link { to: route.with_locale(locale), "{locale.code().to_uppercase()}" }
                    }
                }
            }
        }
    }
}

#[component]
fn Footer(locale: Locale) -> Element {
    rsx! {
        footer {
            style: "margin-top: 24px; padding-top: 8px; border-top: 1px solid #e0e0e0; font-size: 12px; color: #888; text-align: center;",
            "© Alertaz · "
            Link { to: Route::CoinList { locale: locale.code().to_string() }, "Crypto market" }
        }
    }
}

#[component]
pub fn NotFoundView() -> Element {
    rsx! {
        div {
            style: "text-align: center; padding: 60px 16px; font-family: system-ui, -apple-system, sans-serif;",
            h1 { "404" }
            p { "This page does not exist." }
            Link { to: Route::Root {}, "Go to the home page" }
        }
    }
}
