//! `coin` subcommand: market details for one coin.

use alertaz_core::api::ApiClient;
use alertaz_core::credentials::Credentials;
use alertaz_core::locale::Locale;
use alertaz_core::market::{format_price, CoinDetails, CoinDetailsRequest};
use log::info;

pub async fn run_coin(
    api_base_url: &str,
    id: String,
    currency: String,
    locale: Locale,
) -> anyhow::Result<()> {
    let client = ApiClient::new(api_base_url, Credentials::new(), Credentials::new());
    let request = CoinDetailsRequest { id, currency, locale };
    info!("Fetching coin {} in {} ({})", request.id, request.currency, locale);

    let coin = client.coin_details(&request).await?;
    print!("{}", format_coin(&coin, &request.currency));
    Ok(())
}

pub fn format_coin(coin: &CoinDetails, currency: &str) -> String {
    let mut out = format!("{} ({})\n", coin.name, coin.symbol.to_uppercase());
    if let Some(price) = coin.current_price {
        out.push_str(&format!("  price:      {}\n", format_price(price, currency)));
    }
    if let Some(change) = coin.price_change_percentage_24h {
        out.push_str(&format!("  24h change: {:+.2}%\n", change));
    }
    if let Some(cap) = coin.market_cap {
        out.push_str(&format!("  market cap: {}\n", format_price(cap, currency)));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_coin() {
        let coin: CoinDetails = serde_json::from_str(
            r#"{"id":"bitcoin","name":"Bitcoin","symbol":"btc","current_price":64000.5,"price_change_percentage_24h":-1.234}"#,
        )
        .unwrap();
        let text = format_coin(&coin, "usd");
        assert_eq!(
            text,
            "Bitcoin (BTC)\n  price:      64000.50 USD\n  24h change: -1.23%\n"
        );
    }
}
