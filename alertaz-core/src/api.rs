//! Thin client for the backend REST API.
//!
//! Two credentials are in play. Account endpoints (`/projects`, `/user`)
//! act as the signed-in user: in the browser that is the session cookie,
//! natively an optional session token. Project endpoints act as the
//! selected project and carry its API token. The client never owns either
//! token; it reads the shared [`Credentials`] handles on every request, so
//! selecting a project elsewhere immediately changes which project
//! subsequent calls act as. Only the HTTP client's default timeouts apply;
//! there is no retry here.

use crate::credentials::Credentials;
use crate::error::{AlertazError, Result};
use crate::market::{CoinDetails, CoinDetailsRequest, CoinListRequest, CoinSummary, Envelope};
use crate::message::{MessageFilter, MessagesPage};
use crate::project::Project;
use crate::widget::UserFields;
use log::info;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

/// Which identity a request is made as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthScope {
    /// The signed-in user.
    Session,
    /// The selected project.
    Project,
    /// Public market data.
    Anonymous,
}

#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    session: Credentials,
    project: Credentials,
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url
    }
}

impl ApiClient {
    pub fn new(base_url: &str, session: Credentials, project: Credentials) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            session,
            project,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// `Authorization` value for a scope, if that scope has a token.
    pub fn bearer_for(&self, scope: AuthScope) -> Option<String> {
        match scope {
            AuthScope::Session => self.session.bearer(),
            AuthScope::Project => self.project.bearer(),
            AuthScope::Anonymous => None,
        }
    }

    fn request(&self, path: &str, query: &[(String, String)], scope: AuthScope) -> RequestBuilder {
        let mut request = self
            .http
            .get(self.url(path))
            .header(ACCEPT, "application/json")
            .query(query);
        if let Some(bearer) = self.bearer_for(scope) {
            request = request.header(AUTHORIZATION, bearer);
        }
        // Session cookies only travel on opt-in in the browser.
        #[cfg(target_arch = "wasm32")]
        let request = if scope == AuthScope::Session {
            request.fetch_credentials_include()
        } else {
            request
        };
        request
    }

    fn projects_request(&self) -> RequestBuilder {
        self.request("/projects", &[], AuthScope::Session)
    }

    fn current_user_request(&self) -> RequestBuilder {
        self.request("/user", &[], AuthScope::Session)
    }

    fn messages_request(&self, project_id: i64, filter: &MessageFilter) -> RequestBuilder {
        self.request(
            &messages_path(project_id),
            &filter.to_query_pairs(),
            AuthScope::Project,
        )
    }

    async fn send_json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T> {
        let response = request.send().await?;
        info!("api: GET {} -> {}", response.url(), response.status());
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(AlertazError::ApiStatus {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }
        serde_json::from_str(&body).map_err(|e| AlertazError::ResponseParse(e.to_string()))
    }

    pub async fn projects(&self) -> Result<Vec<Project>> {
        let envelope: Envelope<Vec<Project>> = Self::send_json(self.projects_request()).await?;
        Ok(envelope.data)
    }

    pub async fn current_user(&self) -> Result<UserFields> {
        let envelope: Envelope<UserFields> = Self::send_json(self.current_user_request()).await?;
        Ok(envelope.data)
    }

    pub async fn project_messages(&self, project_id: i64, filter: &MessageFilter) -> Result<MessagesPage> {
        Self::send_json(self.messages_request(project_id, filter)).await
    }

    pub async fn coin_details(&self, request: &CoinDetailsRequest) -> Result<CoinDetails> {
        let envelope: Envelope<CoinDetails> = Self::send_json(self.request(
            &request.path(),
            &request.query_pairs(),
            AuthScope::Anonymous,
        ))
        .await?;
        Ok(envelope.data)
    }

    pub async fn coin_list(&self, request: &CoinListRequest) -> Result<Vec<CoinSummary>> {
        let envelope: Envelope<Vec<CoinSummary>> = Self::send_json(self.request(
            request.path(),
            &request.query_pairs(),
            AuthScope::Anonymous,
        ))
        .await?;
        Ok(envelope.data)
    }
}

pub fn messages_path(project_id: i64) -> String {
    format!("/projects/{}/messages", project_id)
}

/// Pull `message` out of a JSON error body, else use the raw body.
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string))
        .unwrap_or_else(|| body.chars().take(200).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::SelectionCache;
    use crate::storage::MemoryStore;

    fn authorization(request: RequestBuilder) -> Option<String> {
        let request = request.build().unwrap();
        request
            .headers()
            .get(AUTHORIZATION)
            .map(|v| v.to_str().unwrap().to_string())
    }

    #[test]
    fn test_url_joining() {
        let client = ApiClient::new("https://api.example.az/v1/", Credentials::new(), Credentials::new());
        assert_eq!(client.url("/projects"), "https://api.example.az/v1/projects");
        assert_eq!(client.url(&messages_path(12)), "https://api.example.az/v1/projects/12/messages");
    }

    #[test]
    fn test_project_list_uses_session_on_fresh_start() {
        let session = Credentials::with_token("session-1");
        let selection = SelectionCache::open(MemoryStore::new(), Credentials::new());
        assert!(selection.credentials().bearer().is_none());

        let client = ApiClient::new("http://localhost", session, selection.credentials().clone());
        assert_eq!(authorization(client.projects_request()).as_deref(), Some("Bearer session-1"));
        assert_eq!(authorization(client.current_user_request()).as_deref(), Some("Bearer session-1"));
        assert_eq!(authorization(client.messages_request(1, &MessageFilter::new(20))), None);
    }

    #[test]
    fn test_selected_project_token_only_reaches_project_endpoints() {
        let session = Credentials::with_token("session-1");
        let project = Credentials::new();
        let mut selection = SelectionCache::open(MemoryStore::new(), project.clone());
        let client = ApiClient::new("http://localhost", session, project);

        selection
            .select(Some(Project::new(3, "project-3", "Shop")))
            .unwrap();
        assert_eq!(
            authorization(client.messages_request(3, &MessageFilter::new(20))).as_deref(),
            Some("Bearer project-3")
        );
        assert_eq!(authorization(client.projects_request()).as_deref(), Some("Bearer session-1"));
        assert_eq!(client.bearer_for(AuthScope::Anonymous), None);
    }

    #[test]
    fn test_error_message_extraction() {
        assert_eq!(error_message(r#"{"message":"Unauthenticated."}"#), "Unauthenticated.");
        assert_eq!(error_message("Bad Gateway"), "Bad Gateway");
    }
}
