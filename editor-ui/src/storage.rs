//! Draft persistence: the editor HTML survives page reloads

use std::cell::{Cell, RefCell};

use dioxus_logger::tracing::warn;

use crate::config::STORAGE_KEY;

/// Load-at-init / save-on-change persistence of the editor content
pub trait DraftStore {
    fn load(&self) -> Option<String>;
    fn save(&self, content: &str);
}

/// Browser `localStorage` under a single key.
///
/// Values are stored JSON-encoded, so drafts written by the earlier
/// `store.js` frontend still load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalDraftStore {
    key: &'static str,
}

impl LocalDraftStore {
    pub const fn new(key: &'static str) -> Self {
        Self { key }
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|window| window.local_storage().ok().flatten())
    }
}

impl Default for LocalDraftStore {
    fn default() -> Self {
        Self::new(STORAGE_KEY)
    }
}

impl DraftStore for LocalDraftStore {
    fn load(&self) -> Option<String> {
        Self::storage()
            .and_then(|storage| storage.get_item(self.key).ok().flatten())
            .map(|raw| decode_draft(&raw))
    }

    fn save(&self, content: &str) {
        let Some(storage) = Self::storage() else {
            warn!("localStorage unavailable, draft not saved");
            return;
        };
        if let Err(e) = storage.set_item(self.key, &encode_draft(content)) {
            warn!("Failed to save draft: {:?}", e);
        }
    }
}

fn encode_draft(content: &str) -> String {
    serde_json::Value::String(content.to_string()).to_string()
}

/// Accept both JSON-encoded and bare stored values.
fn decode_draft(raw: &str) -> String {
    serde_json::from_str::<String>(raw).unwrap_or_else(|_| raw.to_string())
}

/// In-memory store for tests and non-browser hosts
#[derive(Debug, Default)]
pub struct MemoryDraftStore {
    content: RefCell<Option<String>>,
    saves: Cell<usize>,
}

impl MemoryDraftStore {
    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            content: RefCell::new(Some(content.into())),
            saves: Cell::new(0),
        }
    }

    /// Number of `save` calls so far
    pub fn saves(&self) -> usize {
        self.saves.get()
    }
}

impl DraftStore for MemoryDraftStore {
    fn load(&self) -> Option<String> {
        self.content.borrow().clone()
    }

    fn save(&self, content: &str) {
        self.saves.set(self.saves.get() + 1);
        *self.content.borrow_mut() = Some(content.to_string());
    }
}
