//! Dropdown selector for choosing the active project.

use crate::state::ProjectContext;
use dioxus::prelude::*;

/// Project dropdown selector.
/// Reads known projects from ProjectContext and updates the selection on change.
#[component]
pub fn ProjectSelector() -> Element {
    let mut projects = use_context::<ProjectContext>();
    let known = projects.projects();
    let selected = projects.selected_id();

    let on_change = move |evt: Event<FormData>| {
        let picked = evt
            .value()
            .parse::<i64>()
            .ok()
            .and_then(|id| projects.projects().into_iter().find(|p| p.id == id));
        projects.select(picked);
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "project-select",
                style: "font-weight: bold; margin-right: 8px;",
                "Project: "
            }
            select {
                id: "project-select",
                disabled: projects.is_loading(),
                onchange: on_change,
                option {
                    value: "",
                    selected: selected.is_none(),
                    "Select a project"
                }
                for project in known.iter() {
                    option {
                        value: "{project.id}",
                        selected: Some(project.id) == selected,
                        "{project.display_name()}"
                    }
                }
            }
        }
    }
}
