//! Crypto market view models and request shaping.

use crate::locale::Locale;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// `{ "data": ... }` wrapper used by the market endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinDetails {
    pub id: String,
    pub name: String,
    pub symbol: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub current_price: Option<f64>,
    #[serde(default)]
    pub market_cap: Option<f64>,
    #[serde(default)]
    pub price_change_percentage_24h: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinSummary {
    pub id: String,
    pub name: String,
    pub symbol: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub current_price: Option<f64>,
    #[serde(default)]
    pub price_change_percentage_24h: Option<f64>,
}

/// Parameters of `getCoinDetails(id, currency, locale)`.
#[derive(Debug, Clone, PartialEq)]
pub struct CoinDetailsRequest {
    pub id: String,
    pub currency: String,
    pub locale: Locale,
}

impl CoinDetailsRequest {
    pub fn path(&self) -> String {
        format!("/crypto/coins/{}", self.id)
    }

    pub fn query_pairs(&self) -> Vec<(String, String)> {
        vec![
            ("currency".to_string(), self.currency.to_lowercase()),
            ("locale".to_string(), self.locale.code().to_string()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CoinListRequest {
    pub currency: String,
    pub locale: Locale,
    pub page: u32,
}

impl CoinListRequest {
    pub fn path(&self) -> &'static str {
        "/crypto/coins"
    }

    pub fn query_pairs(&self) -> Vec<(String, String)> {
        vec![
            ("currency".to_string(), self.currency.to_lowercase()),
            ("locale".to_string(), self.locale.code().to_string()),
            ("page".to_string(), self.page.max(1).to_string()),
        ]
    }
}

/// Format a price with two decimals (more for sub-unit prices).
pub fn format_price(value: f64, currency: &str) -> String {
    let decimals = if value.abs() < 1.0 { 6 } else { 2 };
    format!("{:.*} {}", decimals, value, currency.to_uppercase())
}
