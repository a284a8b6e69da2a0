//! Explicit API credential handle.
//!
//! The selected project's token is attached to every outgoing request. It is
//! shared between the selection cache (writer) and the API client (reader)
//! through this cloneable handle instead of a process-wide global.

use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Default, Debug)]
pub struct Credentials {
    token: Rc<RefCell<Option<String>>>,
}

impl Credentials {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle pre-loaded with a token (used by the CLI).
    pub fn with_token(token: impl Into<String>) -> Self {
        let credentials = Self::new();
        credentials.set_token(token);
        credentials
    }

    pub fn set_token(&self, token: impl Into<String>) {
        *self.token.borrow_mut() = Some(token.into());
    }

    pub fn clear(&self) {
        *self.token.borrow_mut() = None;
    }

    pub fn token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.borrow().as_deref().is_some_and(|t| !t.is_empty())
    }

    /// Value for the `Authorization` header, if a non-empty token is set.
    pub fn bearer(&self) -> Option<String> {
        match self.token.borrow().as_deref() {
            Some(token) if !token.is_empty() => Some(format!("Bearer {}", token)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Credentials;

    #[test]
    fn clones_observe_token_changes() {
        let credentials = Credentials::new();
        let reader = credentials.clone();
        assert!(!reader.is_authenticated());

        credentials.set_token("abc");
        assert_eq!(reader.bearer().as_deref(), Some("Bearer abc"));

        credentials.clear();
        assert_eq!(reader.token(), None);
        assert_eq!(reader.bearer(), None);
    }

    #[test]
    fn empty_token_is_not_authenticated() {
        let credentials = Credentials::with_token("");
        assert!(!credentials.is_authenticated());
        assert_eq!(credentials.bearer(), None);
    }
}
