use crate::error::{AlertazError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported route locales.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Az,
    En,
    Ru,
}

/// The allow-list, in the order shown by the locale switcher.
pub const SUPPORTED_LOCALES: [Locale; 3] = [Locale::Az, Locale::En, Locale::Ru];

impl Locale {
    pub fn code(self) -> &'static str {
        match self {
            Locale::Az => "az",
            Locale::En => "en",
            Locale::Ru => "ru",
        }
    }

    /// BCP 47 tag used for `Intl` date formatting.
    pub fn language_tag(self) -> &'static str {
        match self {
            Locale::Az => "az-AZ",
            Locale::En => "en-US",
            Locale::Ru => "ru-RU",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Locale::Az => "Azərbaycan",
            Locale::En => "English",
            Locale::Ru => "Русский",
        }
    }

    /// Exact match against the allow-list; `"EN"` and `" en"` are rejected.
    pub fn from_code(code: &str) -> Option<Self> {
        SUPPORTED_LOCALES
            .into_iter()
            .find(|locale| locale.code() == code)
    }
}

impl FromStr for Locale {
    type Err = AlertazError;

    fn from_str(s: &str) -> Result<Self> {
        Locale::from_code(s).ok_or_else(|| AlertazError::UnsupportedLocale(s.to_string()))
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allow_list() {
        assert_eq!(Locale::from_code("az"), Some(Locale::Az));
        assert_eq!(Locale::from_code("en"), Some(Locale::En));
        assert_eq!(Locale::from_code("ru"), Some(Locale::Ru));
        assert_eq!(Locale::from_code("EN"), None);
        assert_eq!(Locale::from_code(" ru "), None);
        assert_eq!(Locale::from_code("de"), None);
        assert_eq!(Locale::from_code(""), None);
        assert_eq!(Locale::from_code("en-us"), None);
    }

    #[test]
    fn test_from_str_error() {
        let err = "fr".parse::<Locale>().unwrap_err();
        assert!(matches!(err, AlertazError::UnsupportedLocale(code) if code == "fr"));
    }

    #[test]
    fn test_display_matches_code() {
        for locale in SUPPORTED_LOCALES {
            assert_eq!(locale.to_string(), locale.code());
        }
    }
}
