use contracts::system::navigation::AppRoute;
use leptos::prelude::*;
use wasm_bindgen::JsValue;
use web_sys::window;

/// Shell-wide state: the current location and sidebar visibility.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    /// Mirrors `location.pathname`
    pub path: RwSignal<String>,
    pub left_open: RwSignal<bool>,
}

fn current_pathname() -> String {
    window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            path: RwSignal::new(current_pathname()),
            left_open: RwSignal::new(true),
        }
    }

    /// Follow browser back/forward. Called once by the main layout.
    pub fn init_router_integration(&self) {
        let this = *self;
        // listener lives as long as the page
        let _ = window_event_listener(leptos::ev::popstate, move |_| {
            let path = current_pathname();
            leptos::logging::log!("popstate: {}", path);
            this.path.set(path);
        });
    }

    pub fn current_route(&self) -> Option<AppRoute> {
        self.path.with(|path| AppRoute::from_path(path))
    }

    /// Go to `path`, adding a history entry
    pub fn navigate(&self, path: &str) {
        if self.path.with_untracked(|current| current == path) {
            return;
        }
        if let Some(history) = window().and_then(|w| w.history().ok()) {
            if let Err(e) = history.push_state_with_url(&JsValue::NULL, "", Some(path)) {
                log::warn!("pushState failed for {}: {:?}", path, e);
            }
        }
        self.path.set(path.to_string());
    }

    /// Go to `path`, replacing the current history entry
    pub fn redirect(&self, path: &str) {
        if let Some(history) = window().and_then(|w| w.history().ok()) {
            if let Err(e) = history.replace_state_with_url(&JsValue::NULL, "", Some(path)) {
                log::warn!("replaceState failed for {}: {:?}", path, e);
            }
        }
        self.path.set(path.to_string());
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}
