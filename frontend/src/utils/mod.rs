use front_shared::content_loaded;
use js_sys::Function;
use leptos::logging::{error, warn};
use shared::{
    dom::{Badge, HIDDEN_CLASS, Mount},
    storage::KeyValueStore,
};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, Storage, Window};

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    window()?.document()
}

/// Last path segment source for the page guard.
pub fn pathname() -> String {
    window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default()
}

pub fn navigate(href: &str) {
    let Some(window) = window() else {
        error!("No window to navigate to {}", href);
        return;
    };
    if let Err(e) = window.location().set_href(href) {
        error!("Failed to navigate to {}: {:?}", href, e);
    }
}

/// `sessionStorage` or `localStorage`. A scope the browser refuses to hand out
/// behaves as an empty one.
#[derive(Clone)]
pub struct BrowserStorage(Option<Storage>);

impl BrowserStorage {
    pub fn session() -> Self {
        BrowserStorage(window().and_then(|w| {
            w.session_storage().unwrap_or_else(|e| {
                warn!("Session storage unavailable: {:?}", e);
                None
            })
        }))
    }

    pub fn local() -> Self {
        BrowserStorage(window().and_then(|w| {
            w.local_storage().unwrap_or_else(|e| {
                warn!("Local storage unavailable: {:?}", e);
                None
            })
        }))
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.0.as_ref()?.get_item(key).unwrap_or_else(|e| {
            warn!("Failed to read {} from storage: {:?}", key, e);
            None
        })
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = &self.0 {
            if let Err(e) = storage.remove_item(key) {
                warn!("Failed to remove {} from storage: {:?}", key, e);
            }
        }
    }
}

#[derive(Clone)]
pub struct DomElement(pub Element);

pub fn element_by_id(id: &str) -> Option<DomElement> {
    document()?.get_element_by_id(id).map(DomElement)
}

impl Mount for DomElement {
    fn replace_content(&self, html: &str) {
        self.0.set_inner_html(html);
    }
}

impl Badge for DomElement {
    fn show(&self, text: &str) {
        self.0.set_text_content(Some(text));
        if let Err(e) = self.0.class_list().remove_1(HIDDEN_CLASS) {
            warn!("Failed to show badge: {:?}", e);
        }
    }

    fn hide(&self) {
        if let Err(e) = self.0.class_list().add_1(HIDDEN_CLASS) {
            warn!("Failed to hide badge: {:?}", e);
        }
    }
}

impl DomElement {
    /// Handler stays attached for the life of the document.
    pub fn on_click(&self, handler: impl FnMut(Event) + 'static) {
        let closure = Closure::<dyn FnMut(Event)>::new(handler);
        let callback = closure.as_ref().unchecked_ref::<Function>();
        if let Err(e) = self.0.add_event_listener_with_callback("click", callback) {
            error!("Failed to attach click handler: {:?}", e);
            return;
        }
        closure.forget();
    }
}

/// Runs `f` once the DOM is parsed. The wasm bundle may finish loading after
/// `DOMContentLoaded` has already fired, in which case `f` runs right away.
pub fn on_content_ready(f: impl FnOnce() + 'static) {
    let Some(document) = document() else {
        error!("No document; skipping content-ready work");
        return;
    };
    if content_loaded(&document.ready_state()) {
        f();
        return;
    }
    let callback = Closure::once_into_js(f);
    let callback = callback.unchecked_ref::<Function>();
    if let Err(e) = document.add_event_listener_with_callback("DOMContentLoaded", callback) {
        error!("Failed to wait for DOMContentLoaded: {:?}", e);
    }
}
