//! Browser Web Storage helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Centralizes the csr-only `web-sys` glue so the session store and the OAuth
//! flow can read/write `localStorage`/`sessionStorage` without repeating it.
//! Every operation is best-effort: storage can be disabled (private mode,
//! quota) and callers treat that the same as an empty slot.

#[cfg(test)]
#[path = "browser_storage_test.rs"]
mod browser_storage_test;

/// Which Web Storage area to use.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageArea {
    /// Survives reloads and browser restarts.
    Local,
    /// Scoped to the tab; cleared when it closes.
    Session,
}

#[cfg(feature = "csr")]
fn storage(area: StorageArea) -> Option<web_sys::Storage> {
    let window = web_sys::window()?;
    let storage = match area {
        StorageArea::Local => window.local_storage(),
        StorageArea::Session => window.session_storage(),
    };
    storage.ok().flatten()
}

/// Read `key` from `area`.
pub fn get_item(area: StorageArea, key: &str) -> Option<String> {
    #[cfg(feature = "csr")]
    {
        storage(area)?.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (area, key);
        None
    }
}

/// Write `value` under `key` in `area`.
pub fn set_item(area: StorageArea, key: &str, value: &str) {
    #[cfg(feature = "csr")]
    {
        let Some(storage) = storage(area) else {
            log::warn!("{area:?} storage unavailable; {key} not saved");
            return;
        };
        if storage.set_item(key, value).is_err() {
            log::warn!("failed to write {key} to {area:?} storage");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (area, key, value);
    }
}

/// Remove `key` from `area`.
pub fn remove_item(area: StorageArea, key: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = storage(area) {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (area, key);
    }
}
