//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! All values interpolated into JS are JSON-encoded first, so they arrive as
//! string/object literals and never as code.

use alertaz_core::error::{AlertazError, Result};
use alertaz_core::locale::Locale;
use alertaz_core::widget::{command_js, WidgetCommand, WidgetHost, WIDGET_GLOBAL};
use chrono::{DateTime, Utc};
use log::warn;

/// DOM id of the injected widget script tag.
const WIDGET_SCRIPT_ID: &str = "alertaz-chat-widget";

/// Evaluate an expression and return it if it is a string.
pub fn eval_string(expression: &str) -> Option<String> {
    js_sys::eval(expression).ok().and_then(|value| value.as_string())
}

fn js_literal(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

/// Format an instant in `timezone` using the browser's `Intl` data.
///
/// Returns `None` if the zone is unknown to the browser.
pub fn format_in_timezone(value: &DateTime<Utc>, timezone: &str, locale: Locale) -> Option<String> {
    let expression = format!(
        r#"(function() {{
            try {{
                return new Date({iso}).toLocaleString({tag}, {{
                    timeZone: {tz}, dateStyle: 'medium', timeStyle: 'short'
                }});
            }} catch(e) {{ return null; }}
        }})()"#,
        iso = js_literal(&value.to_rfc3339()),
        tag = js_literal(locale.language_tag()),
        tz = js_literal(timezone),
    );
    eval_string(&expression)
}

/// Like [`format_in_timezone`], falling back to a UTC rendering.
pub fn format_or_utc(value: &DateTime<Utc>, timezone: &str, locale: Locale) -> String {
    format_in_timezone(value, timezone, locale).unwrap_or_else(|| {
        warn!("js_bridge: timezone {:?} rejected, showing UTC", timezone);
        value.format("%Y-%m-%d %H:%M UTC").to_string()
    })
}

/// Browser host for the `satis` chat widget.
///
/// Before the remote script finishes loading, `window.satis` is a stub
/// that queues calls; the real script drains the queue on startup.
#[derive(Debug, Default)]
pub struct JsWidgetHost {
    script_injected: bool,
}

impl WidgetHost for JsWidgetHost {
    fn load_script(&mut self, url: &str) -> Result<()> {
        if self.script_injected {
            return Ok(());
        }
        let code = format!(
            r#"
            (function() {{
                if (!window.{global}) {{
                    window.{global} = function() {{
                        (window.{global}.q = window.{global}.q || []).push(arguments);
                    }};
                }}
                if (!document.getElementById({id})) {{
                    var s = document.createElement('script');
                    s.id = {id};
                    s.async = true;
                    s.src = {url};
                    document.head.appendChild(s);
                }}
            }})();
            "#,
            global = WIDGET_GLOBAL,
            id = js_literal(WIDGET_SCRIPT_ID),
            url = js_literal(url),
        );
        js_sys::eval(&code).map_err(|e| AlertazError::Widget(format!("{:?}", e)))?;
        self.script_injected = true;
        Ok(())
    }

    fn send(&mut self, command: &WidgetCommand) -> Result<()> {
        js_sys::eval(&command_js(command))
            .map(|_| ())
            .map_err(|e| AlertazError::Widget(format!("{} failed: {:?}", command.name(), e)))
    }
}
