//! In-memory stand-ins for the browser, used by tests across the workspace.

use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
};

use crate::{
    dom::{Badge, Mount},
    storage::KeyValueStore,
};

/// Records every write so tests can count them.
#[derive(Debug, Default)]
pub struct MemoryMount {
    writes: RefCell<Vec<String>>,
}

impl MemoryMount {
    pub fn content(&self) -> Option<String> {
        self.writes.borrow().last().cloned()
    }

    pub fn write_count(&self) -> usize {
        self.writes.borrow().len()
    }
}

impl Mount for MemoryMount {
    fn replace_content(&self, html: &str) {
        self.writes.borrow_mut().push(html.to_string());
    }
}

/// Starts hidden and empty, like the badge in the rendered sidebar.
#[derive(Debug)]
pub struct MemoryBadge {
    text: RefCell<String>,
    hidden: Cell<bool>,
}

impl Default for MemoryBadge {
    fn default() -> Self {
        MemoryBadge {
            text: RefCell::new(String::new()),
            hidden: Cell::new(true),
        }
    }
}

impl MemoryBadge {
    pub fn text(&self) -> String {
        self.text.borrow().clone()
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden.get()
    }
}

impl Badge for MemoryBadge {
    fn show(&self, text: &str) {
        *self.text.borrow_mut() = text.to_string();
        self.hidden.set(false);
    }

    fn hide(&self) {
        self.hidden.set(true);
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn with(items: &[(&str, &str)]) -> Self {
        let store = MemoryStore::default();
        for (key, value) in items {
            store.insert(key, value);
        }
        store
    }

    pub fn insert(&self, key: &str, value: &str) {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn remove(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }
}
