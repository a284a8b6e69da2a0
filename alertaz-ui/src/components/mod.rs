//! Reusable Dioxus RSX components for the Alertaz web app.

mod chat_widget;
mod error_display;
mod formatted_date;
mod loading_spinner;
mod project_selector;
mod template_hints;
mod timezone_selector;

pub use chat_widget::ChatWidget;
pub use error_display::ErrorDisplay;
pub use formatted_date::FormattedDate;
pub use loading_spinner::LoadingSpinner;
pub use project_selector::ProjectSelector;
pub use template_hints::TemplateHintsPanel;
pub use timezone_selector::TimezoneSelector;
