//! Dropdown selector for the display timezone.

use crate::state::TimezoneContext;
use alertaz_core::timezone::COMMON_TIMEZONES;
use dioxus::prelude::*;

#[component]
pub fn TimezoneSelector() -> Element {
    let mut timezone = use_context::<TimezoneContext>();

    // Same markup as the server-side pass until hydrated.
    let Some(current) = timezone.hydrated() else {
        return rsx! {
            select { id: "timezone-select", disabled: true,
                option { "…" }
            }
        };
    };
    let is_listed = COMMON_TIMEZONES.iter().any(|(id, _)| *id == current);

    let on_change = move |evt: Event<FormData>| {
        timezone.set(evt.value());
    };

    rsx! {
        select {
            id: "timezone-select",
            title: "Display timezone",
            onchange: on_change,
            if !is_listed {
                option { value: "{current}", selected: true, "{current}" }
            }
            for (id, label) in COMMON_TIMEZONES.iter() {
                option {
                    value: "{id}",
                    selected: *id == current,
                    "{label}"
                }
            }
        }
    }
}
