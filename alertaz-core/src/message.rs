//! Message dashboard view models and list filters.
//!
//! Messages are read-only on the client; the backend is authoritative.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Sms,
    Email,
}

impl Channel {
    pub fn as_str(self) -> &'static str {
        match self {
            Channel::Sms => "sms",
            Channel::Email => "email",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sms" => Some(Channel::Sms),
            "email" => Some(Channel::Email),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageStatus {
    Pending,
    Sent,
    Delivered,
    Failed,
}

impl MessageStatus {
    pub const ALL: [MessageStatus; 4] = [
        MessageStatus::Pending,
        MessageStatus::Sent,
        MessageStatus::Delivered,
        MessageStatus::Failed,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MessageStatus::Pending => "pending",
            MessageStatus::Sent => "sent",
            MessageStatus::Delivered => "delivered",
            MessageStatus::Failed => "failed",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for MessageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: i64,
    pub channel: Channel,
    pub recipient: String,
    #[serde(default)]
    pub content: Option<String>,
    /// Email only
    #[serde(default)]
    pub subject: Option<String>,
    pub status: MessageStatus,
    #[serde(default)]
    pub cost: Option<f64>,
    #[serde(default)]
    pub segments: Option<u32>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub sent_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub delivered_at: Option<DateTime<Utc>>,
}

impl Message {
    /// Subject for email, body for SMS, whichever is present.
    pub fn summary(&self) -> &str {
        match self.channel {
            Channel::Email => self
                .subject
                .as_deref()
                .or(self.content.as_deref())
                .unwrap_or(""),
            Channel::Sms => self.content.as_deref().unwrap_or(""),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChannelCounts {
    #[serde(default)]
    pub sms: u64,
    #[serde(default)]
    pub email: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessagesMeta {
    pub current_page: u32,
    pub last_page: u32,
    pub per_page: u32,
    pub total: u64,
    #[serde(default)]
    pub counts: ChannelCounts,
}

impl MessagesMeta {
    pub fn has_next(&self) -> bool {
        self.current_page < self.last_page
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }
}

/// `GET /projects/{id}/messages` response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessagesPage {
    pub data: Vec<Message>,
    pub meta: MessagesMeta,
}

/// Query filters for the message list. Unset fields are not sent.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MessageFilter {
    pub channel: Option<Channel>,
    pub status: Option<MessageStatus>,
    pub search: Option<String>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub page: u32,
    pub per_page: u32,
}

impl MessageFilter {
    pub fn new(per_page: u32) -> Self {
        Self {
            page: 1,
            per_page,
            ..Default::default()
        }
    }

    /// Query string pairs in a stable order.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(channel) = self.channel {
            pairs.push(("channel".to_string(), channel.as_str().to_string()));
        }
        if let Some(status) = self.status {
            pairs.push(("status".to_string(), status.as_str().to_string()));
        }
        if let Some(search) = self.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            pairs.push(("search".to_string(), search.to_string()));
        }
        if let Some(from) = self.date_from {
            pairs.push(("date_from".to_string(), from.format("%Y-%m-%d").to_string()));
        }
        if let Some(to) = self.date_to {
            pairs.push(("date_to".to_string(), to.format("%Y-%m-%d").to_string()));
        }
        pairs.push(("page".to_string(), self.page.max(1).to_string()));
        if self.per_page > 0 {
            pairs.push(("per_page".to_string(), self.per_page.to_string()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_messages_page() {
        let raw = r#"{
            "data": [
                {"id": 1, "channel": "sms", "recipient": "+994501234567", "content": "Salam",
                 "status": "delivered", "cost": 0.04, "segments": 1,
                 "created_at": "2024-03-01T10:00:00Z"},
                {"id": 2, "channel": "email", "recipient": "a@b.az", "subject": "Hello",
                 "status": "failed"}
            ],
            "meta": {"current_page": 1, "last_page": 3, "per_page": 2, "total": 6,
                     "counts": {"sms": 4, "email": 2}}
        }"#;
        let page: MessagesPage = serde_json::from_str(raw).unwrap();
        assert_eq!(page.data.len(), 2);
        assert_eq!(page.data[0].status, MessageStatus::Delivered);
        assert_eq!(page.data[1].summary(), "Hello");
        assert_eq!(page.meta.counts.sms, 4);
        assert!(page.meta.has_next());
        assert!(!page.meta.has_previous());
    }

    #[test]
    fn test_filter_query_pairs() {
        let mut filter = MessageFilter::new(20);
        filter.channel = Some(Channel::Sms);
        filter.status = Some(MessageStatus::Failed);
        filter.search = Some("  ".to_string());
        filter.date_from = NaiveDate::from_ymd_opt(2024, 1, 5);
        let pairs = filter.to_query_pairs();
        let keys: Vec<&str> = pairs.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["channel", "status", "date_from", "page", "per_page"]);
        assert_eq!(pairs[2].1, "2024-01-05");
    }

    #[test]
    fn test_default_filter_sends_page_one() {
        let pairs = MessageFilter::default().to_query_pairs();
        assert_eq!(pairs, vec![("page".to_string(), "1".to_string())]);
    }

    #[test]
    fn test_status_parse() {
        assert_eq!(MessageStatus::parse("Delivered"), Some(MessageStatus::Delivered));
        assert_eq!(MessageStatus::parse("bounced"), None);
        assert_eq!(Channel::parse("EMAIL"), Some(Channel::Email));
    }
}
