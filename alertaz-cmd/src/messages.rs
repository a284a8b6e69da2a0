//! `messages` subcommand: one page of a project's campaign messages.

use alertaz_core::api::ApiClient;
use alertaz_core::credentials::Credentials;
use alertaz_core::message::{Message, MessageFilter, MessagesPage};
use log::info;

pub async fn run_messages(
    api_base_url: &str,
    project_id: i64,
    token: &str,
    filter: &MessageFilter,
) -> anyhow::Result<()> {
    let client = ApiClient::new(api_base_url, Credentials::new(), Credentials::with_token(token));
    info!("Fetching messages for project {} (page {})", project_id, filter.page);

    let page = client.project_messages(project_id, filter).await?;
    print!("{}", format_messages_page(&page));
    Ok(())
}

fn format_message_line(message: &Message) -> String {
    let created = message
        .created_at
        .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string());
    let mut summary: String = message.summary().chars().take(48).collect();
    if message.summary().chars().count() > 48 {
        summary.push_str("...");
    }
    format!(
        "{:>8}  {:<5}  {:<10}  {:<24}  {}  {}",
        message.id,
        message.channel.as_str(),
        message.status.as_str(),
        message.recipient,
        created,
        summary
    )
}

/// Plain-text table of a messages page, with a pagination footer.
pub fn format_messages_page(page: &MessagesPage) -> String {
    let mut out = String::new();
    for message in &page.data {
        out.push_str(&format_message_line(message));
        out.push('\n');
    }
    let meta = &page.meta;
    out.push_str(&format!(
        "page {}/{} - {} total (sms: {}, email: {})\n",
        meta.current_page, meta.last_page, meta.total, meta.counts.sms, meta.counts.email
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_messages_page() {
        let page: MessagesPage = serde_json::from_str(
            r#"{
                "data": [{
                    "id": 7,
                    "channel": "sms",
                    "recipient": "+994501234567",
                    "content": "Your code is 1234",
                    "status": "delivered",
                    "created_at": "2024-03-01T09:30:00Z"
                }],
                "meta": {
                    "current_page": 1, "last_page": 3, "per_page": 1, "total": 3,
                    "counts": {"sms": 2, "email": 1}
                }
            }"#,
        )
        .unwrap();

        let text = format_messages_page(&page);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("+994501234567"));
        assert!(lines[0].contains("delivered"));
        assert!(lines[0].contains("2024-03-01 09:30"));
        assert!(lines[0].ends_with("Your code is 1234"));
        assert_eq!(lines[1], "page 1/3 - 3 total (sms: 2, email: 1)");
    }
}
