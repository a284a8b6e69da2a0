//! Third-party chat widget mount point.

use crate::js_bridge::JsWidgetHost;
use alertaz_core::config::AppConfig;
use alertaz_core::widget::{UserFields, WidgetAdapter};
use dioxus::prelude::*;
use log::warn;
use std::cell::RefCell;
use std::rc::Rc;

type SharedAdapter = Option<Rc<RefCell<WidgetAdapter<JsWidgetHost>>>>;

/// Loads the widget after mount, identifies `user` whenever it changes,
/// and destroys the widget on unmount. Renders nothing itself.
#[component]
pub fn ChatWidget(user: Option<UserFields>) -> Element {
    let config = use_context::<AppConfig>();
    let adapter: SharedAdapter = use_hook(move || {
        config
            .widget
            .map(|widget| Rc::new(RefCell::new(WidgetAdapter::new(JsWidgetHost::default(), widget))))
    });

    let on_mount = adapter.clone();
    use_effect(move || {
        if let Some(adapter) = &on_mount {
            if let Err(e) = adapter.borrow_mut().mount() {
                warn!("widget: failed to load: {}", e);
            }
        }
    });

    let on_user = adapter.clone();
    use_effect(use_reactive((&user,), move |(user,)| {
        if let (Some(adapter), Some(user)) = (&on_user, user) {
            adapter.borrow_mut().identify(&user);
        }
    }));

    use_drop(move || {
        if let Some(adapter) = &adapter {
            adapter.borrow_mut().unmount();
        }
    });

    rsx! {}
}
