//! Display timezone preference.
//!
//! Two-phase: the store starts `Uninitialized` and reports the fallback
//! zone; after [`TimezonePreference::hydrate`] it reports whatever was
//! persisted under [`TIMEZONE_KEY`]. Renderers must branch on
//! [`TimezonePreference::hydrated`] and show a placeholder until it returns
//! `Some`, otherwise the first paint can disagree with the hydrated one.

use crate::error::Result;
use crate::storage::{KeyValueStore, TIMEZONE_KEY};
use log::warn;

/// Fallback zone used before hydration and when nothing is persisted.
pub const DEFAULT_TIMEZONE: &str = "Asia/Baku";

/// Zones offered by the timezone selector, as (IANA id, label).
pub const COMMON_TIMEZONES: &[(&str, &str)] = &[
    ("Asia/Baku", "Baku (GMT+4)"),
    ("Europe/Istanbul", "Istanbul (GMT+3)"),
    ("Europe/Moscow", "Moscow (GMT+3)"),
    ("Asia/Dubai", "Dubai (GMT+4)"),
    ("Asia/Tbilisi", "Tbilisi (GMT+4)"),
    ("Europe/London", "London"),
    ("Europe/Berlin", "Berlin"),
    ("America/New_York", "New York"),
    ("UTC", "UTC"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HydrationPhase {
    Uninitialized,
    Hydrated,
}

pub struct TimezonePreference<S> {
    store: S,
    timezone: String,
    phase: HydrationPhase,
}

impl<S: KeyValueStore> TimezonePreference<S> {
    pub fn new(store: S) -> Self {
        Self::with_fallback(store, DEFAULT_TIMEZONE)
    }

    pub fn with_fallback(store: S, fallback: impl Into<String>) -> Self {
        Self {
            store,
            timezone: fallback.into(),
            phase: HydrationPhase::Uninitialized,
        }
    }

    /// Load the persisted zone, if any, and mark the store hydrated.
    pub fn hydrate(&mut self) {
        match self.store.get_item(TIMEZONE_KEY) {
            Ok(Some(tz)) if !tz.trim().is_empty() => self.timezone = tz,
            Ok(_) => {}
            Err(e) => warn!("timezone: failed to read {}: {}", TIMEZONE_KEY, e),
        }
        self.phase = HydrationPhase::Hydrated;
    }

    /// Current zone; the fallback until hydration.
    pub fn get(&self) -> &str {
        &self.timezone
    }

    /// Current zone only once hydrated.
    pub fn hydrated(&self) -> Option<&str> {
        match self.phase {
            HydrationPhase::Hydrated => Some(&self.timezone),
            HydrationPhase::Uninitialized => None,
        }
    }

    pub fn phase(&self) -> HydrationPhase {
        self.phase
    }

    pub fn is_mounted(&self) -> bool {
        self.phase == HydrationPhase::Hydrated
    }

    /// Overwrite and persist. The identifier is not validated.
    pub fn set(&mut self, timezone: impl Into<String>) -> Result<()> {
        self.timezone = timezone.into();
        self.store.set_item(TIMEZONE_KEY, &self.timezone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn fallback_before_hydration() {
        let pref = TimezonePreference::new(MemoryStore::new());
        assert_eq!(pref.get(), DEFAULT_TIMEZONE);
        assert!(!pref.is_mounted());
        assert_eq!(pref.hydrated(), None);
    }

    #[test]
    fn set_persists_across_reinitialization() {
        let store = MemoryStore::new();
        let mut pref = TimezonePreference::new(store.clone());
        pref.hydrate();
        pref.set("Europe/London").unwrap();

        let mut reloaded = TimezonePreference::new(store);
        assert_eq!(reloaded.get(), DEFAULT_TIMEZONE);
        reloaded.hydrate();
        assert_eq!(reloaded.get(), "Europe/London");
        assert_eq!(reloaded.hydrated(), Some("Europe/London"));
    }

    #[test]
    fn hydrate_without_persisted_value_keeps_fallback() {
        let mut pref = TimezonePreference::with_fallback(MemoryStore::new(), "UTC");
        pref.hydrate();
        assert_eq!(pref.phase(), HydrationPhase::Hydrated);
        assert_eq!(pref.hydrated(), Some("UTC"));
    }

    #[test]
    fn set_does_not_validate() {
        let mut pref = TimezonePreference::new(MemoryStore::new());
        pref.set("Not/A_Zone").unwrap();
        assert_eq!(pref.get(), "Not/A_Zone");
    }
}
