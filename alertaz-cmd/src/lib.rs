//! Command implementations for the Alertaz CLI.
//!
//! Provides subcommands for listing a project's campaign messages, looking
//! up market data and checking message templates offline.

use alertaz_core::locale::Locale;
use alertaz_core::message::{Channel, MessageStatus};
use chrono::NaiveDate;
use clap::Subcommand;

pub mod market;
pub mod messages;
pub mod template;

pub use alertaz_core::config::DEFAULT_API_BASE_URL;

#[derive(Subcommand)]
pub enum Command {
    /// List campaign messages of a project
    Messages {
        /// Project id
        #[arg(short = 'p', long)]
        project_id: i64,

        /// Project API token
        #[arg(short = 't', long, env = "ALERTAZ_API_TOKEN", hide_env_values = true)]
        token: String,

        /// Only this channel (sms, email)
        #[arg(long, value_parser = parse_channel)]
        channel: Option<Channel>,

        /// Only this delivery status (pending, sent, delivered, failed)
        #[arg(long, value_parser = parse_status)]
        status: Option<MessageStatus>,

        /// Free text search over recipient and content
        #[arg(short = 's', long)]
        search: Option<String>,

        /// Earliest creation date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<NaiveDate>,

        /// Latest creation date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<NaiveDate>,

        /// Page number, starting at 1
        #[arg(long, default_value_t = 1)]
        page: u32,

        /// Messages per page
        #[arg(long, default_value_t = 20)]
        per_page: u32,
    },

    /// Show details for a single coin
    Coin {
        /// Coin id, e.g. bitcoin
        id: String,

        /// Quote currency
        #[arg(short = 'c', long, default_value = "usd")]
        currency: String,

        /// Response language (az, en, ru)
        #[arg(short = 'l', long, default_value = "az")]
        locale: Locale,
    },

    /// Analyze a message template: encoding, SMS segments and variables
    Template {
        /// Template text, e.g. "Hello {{name}}"
        text: String,
    },
}

fn parse_channel(value: &str) -> Result<Channel, String> {
    Channel::parse(value).ok_or_else(|| format!("unknown channel '{}'", value))
}

fn parse_status(value: &str) -> Result<MessageStatus, String> {
    MessageStatus::parse(value).ok_or_else(|| format!("unknown status '{}'", value))
}

pub async fn run(api_base_url: &str, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Messages {
            project_id,
            token,
            channel,
            status,
            search,
            from,
            to,
            page,
            per_page,
        } => {
            let filter = alertaz_core::message::MessageFilter {
                channel,
                status,
                search,
                date_from: from,
                date_to: to,
                page,
                per_page,
            };
            messages::run_messages(api_base_url, project_id, &token, &filter).await
        }
        Command::Coin {
            id,
            currency,
            locale,
        } => market::run_coin(api_base_url, id, currency, locale).await,
        Command::Template { text } => {
            template::run_template(&text);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_parsers() {
        assert_eq!(parse_channel("SMS"), Ok(Channel::Sms));
        assert!(parse_channel("fax").is_err());
        assert_eq!(parse_status("failed"), Ok(MessageStatus::Failed));
        assert!(parse_status("lost").is_err());
    }
}
