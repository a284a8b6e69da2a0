//! Alertaz web front-end.
//!
//! Multi-locale marketing pages (crypto market) and the campaign dashboard.
//!
//! Startup:
//! 1. Settings are baked in at build time (`AppConfig::from_build_env`).
//! 2. The project `Credentials` handle is shared by the selection and the API client;
//!    account endpoints ride on the browser session cookie instead.
//! 3. The selection cache hydrates synchronously; the timezone preference after mount.
//! 4. The router validates the `/:locale` segment in `LocaleShell`.

use alertaz_core::api::ApiClient;
use alertaz_core::config::AppConfig;
use alertaz_core::credentials::Credentials;
use alertaz_ui::state::{ProjectProvider, TimezoneProvider};
use dioxus::prelude::*;
use log::{error, info};

mod pages;
mod routes;
mod shell;

use routes::Route;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("alertaz-root"))
        .launch(App);
}

fn load_config() -> AppConfig {
    let config = AppConfig::from_build_env();
    match config.validate() {
        Ok(()) => config,
        Err(e) => {
            error!("config: {}; falling back to defaults", e);
            AppConfig::default()
        }
    }
}

#[component]
fn App() -> Element {
    let config = use_context_provider(load_config);
    let credentials = use_context_provider(Credentials::new);
    use_context_provider(|| {
        info!("Starting Alertaz web app against {}", config.base_url());
        ApiClient::new(config.base_url(), Credentials::new(), credentials)
    });

    rsx! {
        TimezoneProvider {
            fallback: config.default_timezone.clone(),
            ProjectProvider {
                Router::<Route> {}
            }
        }
    }
}
