//! Selected-project cache.
//!
//! Holds the currently selected project and a client-side mirror of the
//! known projects, persisted to durable storage under
//! [`SELECTED_PROJECT_ID_KEY`] and [`PROJECTS_KEY`]. Selecting a project
//! hands its API token to the shared [`Credentials`] handle, so every API
//! call made afterwards is authenticated as that project.
//!
//! The cache is created empty with `is_loading == true`; call
//! [`SelectionCache::initialize`] once before rendering anything that
//! depends on the selection.

use crate::credentials::Credentials;
use crate::error::{AlertazError, Result};
use crate::project::Project;
use crate::storage::{KeyValueStore, PROJECTS_KEY, SELECTED_PROJECT_ID_KEY};
use log::{info, warn};

#[derive(Debug, Clone, PartialEq)]
struct SelectionState {
    selected_project: Option<Project>,
    projects: Vec<Project>,
    is_loading: bool,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            selected_project: None,
            projects: Vec::new(),
            is_loading: true,
        }
    }
}

pub struct SelectionCache<S> {
    store: S,
    credentials: Credentials,
    state: SelectionState,
}

impl<S: KeyValueStore> SelectionCache<S> {
    /// Create an unhydrated cache. Nothing is read from storage yet.
    pub fn new(store: S, credentials: Credentials) -> Self {
        Self {
            store,
            credentials,
            state: SelectionState::default(),
        }
    }

    /// Create and immediately hydrate from storage.
    pub fn open(store: S, credentials: Credentials) -> Self {
        let mut cache = Self::new(store, credentials);
        cache.initialize();
        cache
    }

    /// Rehydrate from durable storage.
    ///
    /// Never fails: unreadable storage or a corrupt project list is logged
    /// and leaves the cache empty. A restored selection also restores its
    /// credential.
    pub fn initialize(&mut self) {
        self.state.projects = self.read_persisted_projects();
        self.state.selected_project = self
            .read_persisted_selected_id()
            .and_then(|id| self.state.projects.iter().find(|p| p.id == id).cloned());

        match &self.state.selected_project {
            Some(project) => {
                info!("selection: restored project {}", project.id);
                self.credentials.set_token(project.api_token.clone());
            }
            None => self.credentials.clear(),
        }
        self.state.is_loading = false;
    }

    pub fn selected(&self) -> Option<&Project> {
        self.state.selected_project.as_ref()
    }

    pub fn projects(&self) -> &[Project] {
        &self.state.projects
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Set (or clear) the current selection.
    ///
    /// The in-memory selection and the credential are always updated; the
    /// returned error only reports a failed storage write.
    pub fn select(&mut self, project: Option<Project>) -> Result<()> {
        match project {
            Some(project) => {
                self.credentials.set_token(project.api_token.clone());
                let id = project.id;
                self.state.selected_project = Some(project);
                self.store
                    .set_item(SELECTED_PROJECT_ID_KEY, &id.to_string())
            }
            None => {
                self.credentials.clear();
                self.state.selected_project = None;
                self.store.remove_item(SELECTED_PROJECT_ID_KEY)
            }
        }
    }

    /// Replace the known-projects mirror and persist it.
    ///
    /// The selection is left untouched, even when a non-empty new list no
    /// longer contains it; that case is only logged. The in-memory list is
    /// replaced before the write, so the error only reports storage.
    pub fn set_known_projects(&mut self, projects: Vec<Project>) -> Result<()> {
        let json = serde_json::to_string(&projects).map_err(|source| AlertazError::Serialize {
            key: PROJECTS_KEY.to_string(),
            source,
        })?;
        if let Some(selected) = &self.state.selected_project {
            if !projects.is_empty() && !projects.iter().any(|p| p.id == selected.id) {
                warn!(
                    "selection: project {} is missing from the refreshed list, keeping it selected",
                    selected.id
                );
            }
        }
        self.state.projects = projects;
        self.store.set_item(PROJECTS_KEY, &json)
    }

    fn read_persisted_projects(&self) -> Vec<Project> {
        let raw = match self.store.get_item(PROJECTS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!("selection: failed to read {}: {}", PROJECTS_KEY, e);
                return Vec::new();
            }
        };
        match serde_json::from_str::<Vec<Project>>(&raw) {
            Ok(projects) => projects,
            Err(e) => {
                warn!("selection: ignoring corrupt {} entry: {}", PROJECTS_KEY, e);
                Vec::new()
            }
        }
    }

    fn read_persisted_selected_id(&self) -> Option<i64> {
        match self.store.get_item(SELECTED_PROJECT_ID_KEY) {
            Ok(Some(raw)) => raw.trim().parse::<i64>().ok(),
            Ok(None) => None,
            Err(e) => {
                warn!("selection: failed to read {}: {}", SELECTED_PROJECT_ID_KEY, e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    /// Reads as empty, rejects every write.
    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get_item(&self, _key: &str) -> Result<Option<String>> {
            Ok(None)
        }

        fn set_item(&self, key: &str, _value: &str) -> Result<()> {
            Err(AlertazError::StorageUnavailable(format!("{} is read-only", key)))
        }

        fn remove_item(&self, _key: &str) -> Result<()> {
            Ok(())
        }
    }

    fn project(id: i64) -> Project {
        Project::new(id, format!("token-{}", id), format!("Project {}", id))
    }

    /// Build a fresh cache over the same store, as a page reload would.
    fn reload(store: &MemoryStore) -> SelectionCache<MemoryStore> {
        SelectionCache::open(store.clone(), Credentials::new())
    }

    #[test]
    fn new_cache_is_loading_until_initialized() {
        let mut cache = SelectionCache::new(MemoryStore::new(), Credentials::new());
        assert!(cache.is_loading());
        cache.initialize();
        assert!(!cache.is_loading());
        assert!(cache.selected().is_none());
        assert!(cache.projects().is_empty());
    }

    #[test]
    fn select_survives_reload() {
        let store = MemoryStore::new();
        let mut cache = reload(&store);
        cache.set_known_projects(vec![project(1), project(2)]).unwrap();
        cache.select(Some(project(2))).unwrap();

        let restored = reload(&store);
        assert_eq!(restored.selected().map(|p| p.id), Some(2));
        assert_eq!(restored.projects().len(), 2);
        assert_eq!(restored.credentials().token().as_deref(), Some("token-2"));
    }

    #[test]
    fn select_propagates_token_to_shared_credentials() {
        let credentials = Credentials::new();
        let api_side = credentials.clone();
        let mut cache = SelectionCache::open(MemoryStore::new(), credentials);

        cache.select(Some(project(5))).unwrap();
        assert_eq!(api_side.bearer().as_deref(), Some("Bearer token-5"));

        cache.select(None).unwrap();
        assert_eq!(api_side.token(), None);
    }

    #[test]
    fn select_none_clears_persisted_id() {
        let store = MemoryStore::new();
        let mut cache = reload(&store);
        cache.set_known_projects(vec![project(1)]).unwrap();
        cache.select(Some(project(1))).unwrap();
        cache.select(None).unwrap();

        assert_eq!(store.get_item(SELECTED_PROJECT_ID_KEY).unwrap(), None);
        assert!(reload(&store).selected().is_none());
    }

    #[test]
    fn selected_id_missing_from_list_restores_nothing() {
        let store = MemoryStore::new();
        store
            .set_item(PROJECTS_KEY, &serde_json::to_string(&vec![project(1)]).unwrap())
            .unwrap();
        store.set_item(SELECTED_PROJECT_ID_KEY, "9").unwrap();

        let cache = reload(&store);
        assert!(cache.selected().is_none());
        assert_eq!(cache.projects().len(), 1);
    }

    #[test]
    fn corrupt_project_list_yields_empty_state() {
        let store = MemoryStore::new();
        store.set_item(PROJECTS_KEY, "{not json").unwrap();
        store.set_item(SELECTED_PROJECT_ID_KEY, "1").unwrap();

        let cache = reload(&store);
        assert!(!cache.is_loading());
        assert!(cache.projects().is_empty());
        assert!(cache.selected().is_none());
        assert!(!cache.credentials().is_authenticated());
    }

    #[test]
    fn non_numeric_selected_id_is_ignored() {
        let store = MemoryStore::new();
        store
            .set_item(PROJECTS_KEY, &serde_json::to_string(&vec![project(1)]).unwrap())
            .unwrap();
        store.set_item(SELECTED_PROJECT_ID_KEY, "one").unwrap();
        assert!(reload(&store).selected().is_none());
    }

    #[test]
    fn replacing_list_without_selection_keeps_it() {
        let store = MemoryStore::new();
        let mut cache = reload(&store);
        cache.set_known_projects(vec![project(1), project(2)]).unwrap();
        cache.select(Some(project(1))).unwrap();

        cache.set_known_projects(vec![project(2)]).unwrap();
        assert_eq!(cache.selected().map(|p| p.id), Some(1));
        assert_eq!(cache.credentials().token().as_deref(), Some("token-1"));
        assert_eq!(cache.projects().len(), 1);
        assert_eq!(store.get_item(SELECTED_PROJECT_ID_KEY).unwrap().as_deref(), Some("1"));
    }

    #[test]
    fn failed_list_write_is_reported() {
        let mut cache = SelectionCache::open(ReadOnlyStore, Credentials::new());
        let err = cache.set_known_projects(vec![project(1)]).unwrap_err();
        assert!(matches!(err, AlertazError::StorageUnavailable(_)));
        assert_eq!(cache.projects().len(), 1);
        assert!(cache.selected().is_none());
    }

    #[test]
    fn empty_list_keeps_selection() {
        let mut cache = reload(&MemoryStore::new());
        cache.select(Some(project(4))).unwrap();
        cache.set_known_projects(Vec::new()).unwrap();
        assert_eq!(cache.selected().map(|p| p.id), Some(4));
    }
}
