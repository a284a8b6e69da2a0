//! Compose-preview hints for a message template.

use alertaz_core::template;
use dioxus::prelude::*;

/// Shows encoding, segment estimate and detected `{{variables}}` for `text`.
#[component]
pub fn TemplateHintsPanel(text: String) -> Element {
    let hints = template::analyze(&text);
    let encoding = match hints.encoding {
        template::SmsEncoding::Gsm7 => "GSM-7",
        template::SmsEncoding::Ucs2 => "Unicode (UCS-2)",
    };

    rsx! {
        div {
            class: "template-hints",
            style: "font-size: 12px; color: #555; margin-top: 4px;",
            span { "{hints.characters} characters · {hints.segments} segment(s) · {encoding}" }
            if hints.unicode {
                p {
                    style: "color: #E65100; margin: 4px 0;",
                    "This message contains Unicode characters and is billed at a higher per-segment rate."
                }
            }
            if !hints.variables.is_empty() {
                p {
                    style: "margin: 4px 0;",
                    "Variables: "
                    for name in hints.variables.iter() {
                        code { style: "margin-right: 6px;", "{{{{{name}}}}}" }
                    }
                }
            }
        }
    }
}
