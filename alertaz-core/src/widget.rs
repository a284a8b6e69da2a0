//! Chat widget contract.
//!
//! The third-party widget exposes one global callable, `satis`, which takes a
//! command name followed by arguments. We only ever send `init`, `identify`
//! and `destroy`, and never read a return value. [`WidgetHost`] is the seam
//! between the adapter and the page: the browser host lives in
//! `alertaz_ui::js_bridge`, tests use a recording host.

use crate::error::Result;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Name of the global the widget script installs.
pub const WIDGET_GLOBAL: &str = "satis";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetConfig {
    pub tenant_slug: String,
    pub script_url: String,
    /// Passed through to `init` untouched.
    #[serde(default)]
    pub options: Value,
}

/// Identifying fields pushed once the user is authenticated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserFields {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum WidgetCommand {
    Init { tenant_slug: String, config: Value },
    Identify(UserFields),
    Destroy,
}

impl WidgetCommand {
    pub fn name(&self) -> &'static str {
        match self {
            WidgetCommand::Init { .. } => "init",
            WidgetCommand::Identify(_) => "identify",
            WidgetCommand::Destroy => "destroy",
        }
    }

    pub fn args(&self) -> Vec<Value> {
        match self {
            WidgetCommand::Init {
                tenant_slug,
                config,
            } => vec![Value::String(tenant_slug.clone()), config.clone()],
            WidgetCommand::Identify(user) => {
                vec![serde_json::to_value(user).unwrap_or(Value::Null)]
            }
            WidgetCommand::Destroy => Vec::new(),
        }
    }
}

/// JS statement invoking the widget global, with JSON-encoded arguments.
pub fn command_js(command: &WidgetCommand) -> String {
    let mut parts = vec![Value::String(command.name().to_string()).to_string()];
    parts.extend(command.args().iter().map(Value::to_string));
    format!("window.{}({});", WIDGET_GLOBAL, parts.join(", "))
}

/// Where widget commands go.
pub trait WidgetHost {
    /// Inject the widget script tag (idempotent).
    fn load_script(&mut self, url: &str) -> Result<()>;
    fn send(&mut self, command: &WidgetCommand) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetPhase {
    Idle,
    Initialized,
    Identified,
    Destroyed,
}

pub struct WidgetAdapter<H> {
    host: H,
    config: WidgetConfig,
    phase: WidgetPhase,
    identified_user: Option<i64>,
}

impl<H: WidgetHost> WidgetAdapter<H> {
    pub fn new(host: H, config: WidgetConfig) -> Self {
        Self {
            host,
            config,
            phase: WidgetPhase::Idle,
            identified_user: None,
        }
    }

    pub fn phase(&self) -> WidgetPhase {
        self.phase
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Inject the script and send `init`.
    pub fn mount(&mut self) -> Result<()> {
        if self.phase != WidgetPhase::Idle {
            return Ok(());
        }
        self.host.load_script(&self.config.script_url)?;
        self.host.send(&WidgetCommand::Init {
            tenant_slug: self.config.tenant_slug.clone(),
            config: self.config.options.clone(),
        })?;
        info!("widget: initialized for tenant {}", self.config.tenant_slug);
        self.phase = WidgetPhase::Initialized;
        Ok(())
    }

    /// Push user fields once per distinct user. Failures are logged and
    /// the widget stays usable without personalization.
    pub fn identify(&mut self, user: &UserFields) {
        let ready = matches!(self.phase, WidgetPhase::Initialized | WidgetPhase::Identified);
        if !ready || self.identified_user == Some(user.id) {
            return;
        }
        match self.host.send(&WidgetCommand::Identify(user.clone())) {
            Ok(()) => {
                self.identified_user = Some(user.id);
                self.phase = WidgetPhase::Identified;
            }
            Err(e) => warn!("widget: identify failed, continuing anonymously: {}", e),
        }
    }

    /// Send `destroy`. Errors are logged only.
    pub fn unmount(&mut self) {
        if matches!(self.phase, WidgetPhase::Idle | WidgetPhase::Destroyed) {
            return;
        }
        if let Err(e) = self.host.send(&WidgetCommand::Destroy) {
            warn!("widget: destroy failed: {}", e);
        }
        self.identified_user = None;
        self.phase = WidgetPhase::Destroyed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AlertazError;
    use serde_json::json;

    #[derive(Default)]
    struct RecordingHost {
        scripts: Vec<String>,
        sent: Vec<String>,
        fail_identify: bool,
    }

    impl WidgetHost for RecordingHost {
        fn load_script(&mut self, url: &str) -> Result<()> {
            self.scripts.push(url.to_string());
            Ok(())
        }

        fn send(&mut self, command: &WidgetCommand) -> Result<()> {
            if self.fail_identify && matches!(command, WidgetCommand::Identify(_)) {
                return Err(AlertazError::Widget("identify rejected".to_string()));
            }
            self.sent.push(command.name().to_string());
            Ok(())
        }
    }

    fn config() -> WidgetConfig {
        WidgetConfig {
            tenant_slug: "alertaz".to_string(),
            script_url: "https://widget.example/satis.js".to_string(),
            options: json!({"position": "right"}),
        }
    }

    fn user(id: i64) -> UserFields {
        UserFields {
            id,
            name: "Aysel".to_string(),
            email: Some("aysel@example.az".to_string()),
            phone: None,
        }
    }

    #[test]
    fn test_lifecycle() {
        let mut adapter = WidgetAdapter::new(RecordingHost::default(), config());
        adapter.identify(&user(1)); // ignored before mount
        adapter.mount().unwrap();
        adapter.mount().unwrap();
        adapter.identify(&user(1));
        adapter.identify(&user(1));
        adapter.unmount();

        assert_eq!(adapter.phase(), WidgetPhase::Destroyed);
        assert_eq!(adapter.host().scripts.len(), 1);
        assert_eq!(adapter.host().sent, vec!["init", "identify", "destroy"]);
    }

    #[test]
    fn test_identify_failure_is_swallowed() {
        let host = RecordingHost {
            fail_identify: true,
            ..Default::default()
        };
        let mut adapter = WidgetAdapter::new(host, config());
        adapter.mount().unwrap();
        adapter.identify(&user(1));
        assert_eq!(adapter.phase(), WidgetPhase::Initialized);
        adapter.unmount();
        assert_eq!(adapter.host().sent, vec!["init", "destroy"]);
    }

    #[test]
    fn test_new_user_is_identified_again() {
        let mut adapter = WidgetAdapter::new(RecordingHost::default(), config());
        adapter.mount().unwrap();
        adapter.identify(&user(1));
        adapter.identify(&user(2));
        assert_eq!(adapter.host().sent, vec!["init", "identify", "identify"]);
    }

    #[test]
    fn test_command_js() {
        let init = WidgetCommand::Init {
            tenant_slug: "alertaz".to_string(),
            config: json!({"lang": "az"}),
        };
        assert_eq!(
            command_js(&init),
            r#"window.satis("init", "alertaz", {"lang":"az"});"#
        );
        assert_eq!(command_js(&WidgetCommand::Destroy), r#"window.satis("destroy");"#);

        let quoted = WidgetCommand::Identify(UserFields {
            id: 1,
            name: "O'Brien \"x\"".to_string(),
            email: None,
            phone: None,
        });
        assert_eq!(
            command_js(&quoted),
            r#"window.satis("identify", {"id":1,"name":"O'Brien \"x\""});"#
        );
    }
}
