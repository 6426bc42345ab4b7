use fx_core::{FlagStore, MemoryStore, StoreError};
use web_sys as web;

/// `localStorage`-backed flags.
pub struct LocalStore {
    storage: web::Storage,
}

impl LocalStore {
    /// `None` when storage is disabled or access throws (e.g. privacy mode).
    pub fn open(window: &web::Window) -> Option<Self> {
        window
            .local_storage()
            .ok()
            .flatten()
            .map(|storage| Self { storage })
    }
}

impl FlagStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| StoreError::Rejected(format!("{:?}", e)))
    }
}

/// Browser storage when available, otherwise an in-memory fallback.
pub fn open_store(window: &web::Window) -> Box<dyn FlagStore> {
    match LocalStore::open(window) {
        Some(store) => Box::new(store),
        None => Box::new(MemoryStore::new()),
    }
}
