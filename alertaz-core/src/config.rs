//! Application configuration.
//!
//! The web build bakes its settings in at compile time from `ALERTAZ_*`
//! environment variables; a JSON document can be parsed the same way for
//! runtime overrides. Every field has a default.

use crate::error::{AlertazError, Result};
use crate::locale::Locale;
use crate::timezone::DEFAULT_TIMEZONE;
use crate::widget::WidgetConfig;
use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE_URL: &str = "https://api.alertaz.az/v1";
pub const DEFAULT_CURRENCY: &str = "usd";
pub const DEFAULT_MESSAGES_PER_PAGE: u32 = 20;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api_base_url: String,
    pub default_locale: String,
    pub default_timezone: String,
    pub default_currency: String,
    pub messages_per_page: u32,
    pub widget: Option<WidgetConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            default_locale: Locale::default().code().to_string(),
            default_timezone: DEFAULT_TIMEZONE.to_string(),
            default_currency: DEFAULT_CURRENCY.to_string(),
            messages_per_page: DEFAULT_MESSAGES_PER_PAGE,
            widget: None,
        }
    }
}

impl AppConfig {
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: AppConfig =
            serde_json::from_str(raw).map_err(|e| AlertazError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Settings captured from the build environment.
    pub fn from_build_env() -> Self {
        let mut config = AppConfig::default();
        if let Some(url) = option_env!("ALERTAZ_API_BASE_URL") {
            config.api_base_url = url.to_string();
        }
        if let Some(locale) = option_env!("ALERTAZ_DEFAULT_LOCALE") {
            config.default_locale = locale.to_string();
        }
        if let Some(tz) = option_env!("ALERTAZ_DEFAULT_TIMEZONE") {
            config.default_timezone = tz.to_string();
        }
        if let (Some(slug), Some(script)) = (
            option_env!("ALERTAZ_WIDGET_TENANT"),
            option_env!("ALERTAZ_WIDGET_SCRIPT_URL"),
        ) {
            config.widget = Some(WidgetConfig {
                tenant_slug: slug.to_string(),
                script_url: script.to_string(),
                options: serde_json::Value::Null,
            });
        }
        config
    }

    pub fn validate(&self) -> Result<()> {
        if self.api_base_url.trim().is_empty() {
            return Err(AlertazError::Config("api_base_url is empty".to_string()));
        }
        if Locale::from_code(&self.default_locale).is_none() {
            return Err(AlertazError::Config(format!(
                "default_locale {:?} is not supported",
                self.default_locale
            )));
        }
        if self.messages_per_page == 0 {
            return Err(AlertazError::Config("messages_per_page must be positive".to_string()));
        }
        if let Some(widget) = &self.widget {
            if widget.tenant_slug.trim().is_empty() {
                return Err(AlertazError::Config("widget.tenant_slug is empty".to_string()));
            }
        }
        Ok(())
    }

    /// Parsed default locale, falling back to the built-in default.
    pub fn locale(&self) -> Locale {
        Locale::from_code(&self.default_locale).unwrap_or_default()
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.api_base_url.trim_end_matches('/')
    }
}
