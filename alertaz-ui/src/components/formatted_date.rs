//! Timezone-aware timestamp.

use crate::js_bridge;
use crate::state::TimezoneContext;
use alertaz_core::locale::Locale;
use chrono::{DateTime, Utc};
use dioxus::prelude::*;

/// Renders `value` in the user's display timezone.
///
/// Until the timezone preference is hydrated only a placeholder is shown,
/// so the first paint never shows a time in the wrong zone.
#[component]
pub fn FormattedDate(value: DateTime<Utc>, locale: Locale) -> Element {
    let timezone = use_context::<TimezoneContext>();

    let Some(tz) = timezone.hydrated() else {
        return rsx! {
            span { class: "date-placeholder", "…" }
        };
    };
    let text = js_bridge::format_or_utc(&value, &tz, locale);

    rsx! {
        time {
            datetime: "{value.to_rfc3339()}",
            title: "{tz}",
            "{text}"
        }
    }
}
