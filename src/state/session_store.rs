//! Durable slot holding the serialized signed-in user.
//!
//! The store deals in raw strings; (de)serialization and the "malformed means
//! signed out" rule live in the session manager so every store behaves the
//! same way.

#[cfg(test)]
#[path = "session_store_test.rs"]
mod session_store_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::util::browser_storage::{self, StorageArea};

/// `localStorage` key for the persisted session.
pub const SESSION_STORAGE_KEY: &str = "user";

/// A single persisted slot. Only the session manager writes to it.
pub trait SessionStore {
    fn load(&self) -> Option<String>;
    fn save(&self, raw: &str);
    fn clear(&self);
}

/// [`SessionStore`] backed by browser `localStorage`.
#[derive(Clone, Debug)]
pub struct LocalSessionStore {
    key: String,
}

impl Default for LocalSessionStore {
    fn default() -> Self {
        Self::new(SESSION_STORAGE_KEY)
    }
}

impl LocalSessionStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl SessionStore for LocalSessionStore {
    fn load(&self) -> Option<String> {
        browser_storage::get_item(StorageArea::Local, &self.key)
    }

    fn save(&self, raw: &str) {
        browser_storage::set_item(StorageArea::Local, &self.key, raw);
    }

    fn clear(&self) {
        browser_storage::remove_item(StorageArea::Local, &self.key);
    }
}

/// In-memory [`SessionStore`]. Clones share the same slot.
#[derive(Clone, Debug, Default)]
pub struct MemorySessionStore {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemorySessionStore {
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            slot: Rc::new(RefCell::new(Some(raw.into()))),
        }
    }

    /// Current contents of the slot.
    pub fn raw(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Option<String> {
        self.raw()
    }

    fn save(&self, raw: &str) {
        *self.slot.borrow_mut() = Some(raw.to_owned());
    }

    fn clear(&self) {
        *self.slot.borrow_mut() = None;
    }
}
