//! Campaign message dashboard for the selected project.
//!
//! Filters (channel, status, search, date range) and the page number live in
//! signals; the list re-fetches whenever one of them or the selected
//! project changes.

use super::{page_locale, spawn_fetch, use_unmount_guard};
use alertaz_core::api::ApiClient;
use alertaz_core::config::AppConfig;
use alertaz_core::locale::Locale;
use alertaz_core::message::{Channel, Message, MessageFilter, MessageStatus, MessagesPage};
use alertaz_core::resource::{RemoteResource, ResourceState, GENERIC_ERROR_MESSAGE};
use alertaz_ui::components::{
    ErrorDisplay, FormattedDate, LoadingSpinner, ProjectSelector, TemplateHintsPanel,
};
use alertaz_ui::state::ProjectContext;
use chrono::NaiveDate;
use dioxus::prelude::*;

fn parse_date_input(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Paging restarts when the dashboard switches to another project.
fn project_changed(previous: Option<i64>, current: i64) -> bool {
    previous.is_some_and(|id| id != current)
}

#[component]
pub fn Messages(locale: String) -> Element {
    let api = use_context::<ApiClient>();
    let per_page = use_context::<AppConfig>().messages_per_page;
    let projects = use_context::<ProjectContext>();
    let locale = page_locale(&locale);

    let mut channel = use_signal(|| None::<Channel>);
    let mut status = use_signal(|| None::<MessageStatus>);
    let mut search = use_signal(String::new);
    let mut date_from = use_signal(|| None::<NaiveDate>);
    let mut date_to = use_signal(|| None::<NaiveDate>);
    let mut page = use_signal(|| 1u32);
    let mut draft = use_signal(String::new);
    let mut resource = use_signal(RemoteResource::<MessagesPage>::new);
    use_unmount_guard(resource);

    let current_filter = move || MessageFilter {
        channel: channel(),
        status: status(),
        search: Some(search()),
        date_from: date_from(),
        date_to: date_to(),
        page: page(),
        per_page,
    };

    let mut filtered_project = use_signal(|| None::<i64>);
    let effect_api = api.clone();
    use_effect(move || {
        let Some(project_id) = projects.selected_id() else {
            return;
        };
        let filter = current_filter();
        let previous = *filtered_project.peek();
        filtered_project.set(Some(project_id));
        if project_changed(previous, project_id) && filter.page != 1 {
            // Re-runs this effect with page 1.
            page.set(1);
            return;
        }
        let api = effect_api.clone();
        let (ticket, fetch) = resource
            .write()
            .begin_with(move || async move { api.project_messages(project_id, &filter).await });
        spawn_fetch(resource, ticket, fetch);
    });

    let on_retry = move |_: ()| {
        let Some(project_id) = projects.selected_id() else {
            return;
        };
        let filter = current_filter();
        let api = api.clone();
        let retried = resource
            .write()
            .retry_with(move || async move { api.project_messages(project_id, &filter).await });
        if let Some((ticket, fetch)) = retried {
            spawn_fetch(resource, ticket, fetch);
        }
    };

    if projects.selected_id().is_none() {
        return rsx! {
            h2 { "Messages" }
            p { "Select a project to see its messages." }
            ProjectSelector {}
        };
    }

    let body = match resource.read().state() {
        ResourceState::Loading => rsx! { LoadingSpinner { label: "Loading messages..." } },
        ResourceState::Error => rsx! {
            ErrorDisplay { message: GENERIC_ERROR_MESSAGE.to_string(), on_retry }
        },
        ResourceState::Success(result) => {
            let meta = result.meta.clone();
            rsx! {
                p {
                    style: "font-size: 13px; color: #555;",
                    "{meta.total} messages · SMS: {meta.counts.sms} · Email: {meta.counts.email}"
                }
                table {
                    style: "width: 100%; border-collapse: collapse; font-size: 14px;",
                    thead {
                        tr {
                            th { style: "text-align: left;", "Channel" }
                            th { style: "text-align: left;", "Recipient" }
                            th { style: "text-align: left;", "Message" }
                            th { style: "text-align: left;", "Status" }
                            th { style: "text-align: right;", "Segments" }
                            th { style: "text-align: right;", "Cost" }
                            th { style: "text-align: left;", "Created" }
                        }
                    }
                    tbody {
                        for message in result.data.iter() {
                            MessageRow { key: "{message.id}", message: message.clone(), locale }
                        }
                    }
                }
                div {
                    style: "display: flex; gap: 8px; align-items: center; margin-top: 8px;",
                    button {
                        disabled: !meta.has_previous(),
                        onclick: move |_| page -= 1,
                        "Previous"
                    }
                    span { "Page {meta.current_page} of {meta.last_page}" }
                    button {
                        disabled: !meta.has_next(),
                        onclick: move |_| page += 1,
                        "Next"
                    }
                }
            }
        }
    };

    rsx! {
        h2 { "Messages" }
        div {
            class: "filters",
            style: "display: flex; flex-wrap: wrap; gap: 12px; align-items: center; margin: 8px 0;",
            select {
                onchange: move |evt: Event<FormData>| {
                    channel.set(Channel::parse(&evt.value()));
                    page.set(1);
                },
                option { value: "", "All channels" }
                option { value: "sms", "SMS" }
                option { value: "email", "Email" }
            }
            select {
                onchange: move |evt: Event<FormData>| {
                    status.set(MessageStatus::parse(&evt.value()));
                    page.set(1);
                },
                option { value: "", "All statuses" }
                for s in MessageStatus::ALL {
                    option { value: "{s}", "{s}" }
                }
            }
            input {
                r#type: "search",
                placeholder: "Search recipient or text",
                value: "{search}",
                onchange: move |evt: Event<FormData>| {
                    search.set(evt.value());
                    page.set(1);
                },
            }
            label {
                "From: "
                input {
                    r#type: "date",
                    onchange: move |evt: Event<FormData>| {
                        date_from.set(parse_date_input(&evt.value()));
                        page.set(1);
                    },
                }
            }
            label {
                "To: "
                input {
                    r#type: "date",
                    onchange: move |evt: Event<FormData>| {
                        date_to.set(parse_date_input(&evt.value()));
                        page.set(1);
                    },
                }
            }
        }
        {body}
        section {
            style: "margin-top: 24px; padding-top: 8px; border-top: 1px solid #e0e0e0;",
            h3 { style: "margin: 0 0 4px 0; font-size: 16px;", "Compose preview" }
            textarea {
                rows: "4",
                style: "width: 100%;",
                placeholder: "Hello {{{{name}}}}, your code is {{{{code}}}}",
                value: "{draft}",
                oninput: move |evt: Event<FormData>| draft.set(evt.value()),
            }
            TemplateHintsPanel { text: draft() }
        }
    }
}

#[component]
fn MessageRow(message: Message, locale: Locale) -> Element {
    let color = match message.status {
        MessageStatus::Delivered => "#2E7D32",
        MessageStatus::Sent => "#1565C0",
        MessageStatus::Pending => "#757575",
        MessageStatus::Failed => "#C62828",
    };
    let segments = message.segments.map(|s| s.to_string()).unwrap_or_default();
    let cost = message.cost.map(|c| format!("{:.3}", c)).unwrap_or_default();

    rsx! {
        tr {
            td { "{message.channel}" }
            td { "{message.recipient}" }
            td { style: "max-width: 320px; overflow: hidden; text-overflow: ellipsis; white-space: nowrap;",
                "{message.summary()}"
            }
            td { style: "color: {color};", "{message.status}" }
            td { style: "text-align: right;", "{segments}" }
            td { style: "text-align: right;", "{cost}" }
            td {
                if let Some(created) = message.created_at {
                    FormattedDate { value: created, locale }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_date_input, project_changed};
    use chrono::NaiveDate;

    #[test]
    fn test_parse_date_input() {
        assert_eq!(parse_date_input("2024-02-29"), NaiveDate::from_ymd_opt(2024, 2, 29));
        assert_eq!(parse_date_input(""), None);
        assert_eq!(parse_date_input("29/02/2024"), None);
    }

    #[test]
    fn test_project_changed() {
        assert!(!project_changed(None, 3));
        assert!(!project_changed(Some(3), 3));
        assert!(project_changed(Some(3), 4));
    }
}
