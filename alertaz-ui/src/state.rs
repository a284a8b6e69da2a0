//! Client-side state shared through Dioxus context.
//!
//! `ProjectContext` and `TimezoneContext` wrap the core caches in signals.
//! They are installed by `ProjectProvider` / `TimezoneProvider`; children
//! retrieve them with `use_context::<ProjectContext>()` etc.

use crate::storage::BrowserStorage;
use alertaz_core::credentials::Credentials;
use alertaz_core::project::Project;
use alertaz_core::selection::SelectionCache;
use alertaz_core::timezone::TimezonePreference;
use dioxus::prelude::*;
use log::error;

/// Selected project plus the known-projects mirror.
#[derive(Clone, Copy)]
pub struct ProjectContext {
    cache: Signal<SelectionCache<BrowserStorage>>,
}

impl ProjectContext {
    pub fn selected(&self) -> Option<Project> {
        self.cache.read().selected().cloned()
    }

    pub fn selected_id(&self) -> Option<i64> {
        self.cache.read().selected().map(|p| p.id)
    }

    pub fn projects(&self) -> Vec<Project> {
        self.cache.read().projects().to_vec()
    }

    pub fn is_loading(&self) -> bool {
        self.cache.read().is_loading()
    }

    /// Select a project. This also switches the credential every API call uses.
    pub fn select(&mut self, project: Option<Project>) {
        if let Err(e) = self.cache.write().select(project) {
            error!("project: failed to persist selection: {}", e);
        }
    }

    pub fn set_known_projects(&mut self, projects: Vec<Project>) {
        if let Err(e) = self.cache.write().set_known_projects(projects) {
            error!("project: failed to persist project list: {}", e);
        }
    }
}

/// Hydrates the selection synchronously, before children render.
/// Expects a `Credentials` context from an ancestor.
#[component]
pub fn ProjectProvider(children: Element) -> Element {
    let credentials = use_context::<Credentials>();
    let cache = use_signal(move || SelectionCache::open(BrowserStorage, credentials));
    use_context_provider(|| ProjectContext { cache });

    rsx! { {children} }
}

/// Display timezone preference.
#[derive(Clone, Copy)]
pub struct TimezoneContext {
    pref: Signal<TimezonePreference<BrowserStorage>>,
}

impl TimezoneContext {
    /// The zone to render with, or `None` while not yet hydrated.
    pub fn hydrated(&self) -> Option<String> {
        self.pref.read().hydrated().map(str::to_string)
    }

    pub fn set(&mut self, timezone: String) {
        if let Err(e) = self.pref.write().set(timezone) {
            error!("timezone: failed to persist preference: {}", e);
        }
    }
}

/// Hydrates the timezone after mount, never during the first render.
#[component]
pub fn TimezoneProvider(fallback: String, children: Element) -> Element {
    let mut pref = use_signal(move || TimezonePreference::with_fallback(BrowserStorage, fallback));
    use_context_provider(|| TimezoneContext { pref });

    use_effect(move || {
        pref.write().hydrate();
    });

    rsx! { {children} }
}
