//! Route table. Every page lives under a `/:locale` segment that
//! `LocaleShell` checks against the allow-list.

use crate::pages::{CoinDetail, CoinList, Home, Messages};
use crate::shell::{LocaleShell, NotFoundView};
use alertaz_core::config::AppConfig;
use alertaz_core::locale::Locale;
use dioxus::prelude::*;

#[derive(Routable, Clone, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Root {},
    #[layout(LocaleShell)]
        #[route("/:locale")]
        Home { locale: String },
        #[route("/:locale/coins")]
        CoinList { locale: String },
        #[route("/:locale/coins/:id")]
        CoinDetail { locale: String, id: String },
        #[route("/:locale/dashboard/messages")]
        Messages { locale: String },
    #[end_layout]
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

impl Route {
    /// Raw locale segment of a locale-scoped route.
    pub fn locale_segment(&self) -> Option<&str> {
        match self {
            Route::Home { locale }
            | Route::CoinList { locale }
            | Route::CoinDetail { locale, .. }
            | Route::Messages { locale } => Some(locale),
            Route::Root {} | Route::PageNotFound { .. } => None,
        }
    }

    /// Validated locale, `None` when missing or not allowed.
    pub fn locale(&self) -> Option<Locale> {
        self.locale_segment().and_then(Locale::from_code)
    }

    /// The same page in another locale.
    pub fn with_locale(&self, locale: Locale) -> Route {
        let locale = locale.code().to_string();
        match self {
            Route::CoinList { .. } => Route::CoinList { locale },
            Route::CoinDetail { id, .. } => Route::CoinDetail {
                locale,
                id: id.clone(),
            },
            Route::Messages { .. } => Route::Messages { locale },
            Route::Home { .. } | Route::Root {} | Route::PageNotFound { .. } => {
                Route::Home { locale }
            }
        }
    }
}

/// `/` redirects to the configured default locale.
#[component]
fn Root() -> Element {
    let code = use_context::<AppConfig>().locale().code();
    let nav = navigator();
    use_effect(move || {
        nav.replace(Route::Home {
            locale: code.to_string(),
        });
    });

    rsx! {}
}

#[component]
fn PageNotFound(segments: Vec<String>) -> Element {
    log::info!("router: no route for /{}", segments.join("/"));
    rsx! {
        NotFoundView {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_parsing_from_route() {
        let route = Route::CoinDetail {
            locale: "en".to_string(),
            id: "bitcoin".to_string(),
        };
        assert_eq!(route.locale(), Some(Locale::En));

        let unknown = Route::Messages {
            locale: "xx".to_string(),
        };
        assert_eq!(unknown.locale_segment(), Some("xx"));
        assert_eq!(unknown.locale(), None);

        let uppercase: Route = "/EN/coins".parse().unwrap();
        assert_eq!(uppercase.locale(), None);
        assert_eq!(Route::Root {}.locale(), None);
    }

    #[test]
    fn test_with_locale_keeps_page() {
        let route = Route::CoinDetail {
            locale: "az".to_string(),
            id: "eth".to_string(),
        };
        assert_eq!(
            route.with_locale(Locale::Ru),
            Route::CoinDetail {
                locale: "ru".to_string(),
                id: "eth".to_string()
            }
        );
        assert_eq!(
            Route::PageNotFound { segments: vec![] }.with_locale(Locale::En),
            Route::Home {
                locale: "en".to_string()
            }
        );
    }

    #[test]
    fn test_route_parsing() {
        let parsed: Route = "/en/coins/bitcoin".parse().unwrap();
        assert_eq!(
            parsed,
            Route::CoinDetail {
                locale: "en".to_string(),
                id: "bitcoin".to_string()
            }
        );
        let missing: Route = "/en/nowhere/at/all".parse().unwrap();
        assert!(matches!(missing, Route::PageNotFound { .. }));
    }
}
