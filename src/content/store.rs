use super::Content;
use crate::storage::{Storage, SITE_CONTENT_KEY};

/// Whole-object repository for [`Content`].
///
/// There is no partial-section API: callers load everything, change what they
/// need and save everything back. Concurrent writers are last-write-wins.
#[derive(Debug, Clone)]
pub struct ContentStore {
    storage: Storage,
}

impl ContentStore {
    pub fn new(storage: Storage) -> Self {
        Self { storage }
    }

    /// Stored content, or [`Content::default`] if nothing usable is stored.
    ///
    /// A stored object whose shape no longer matches is logged and replaced by
    /// the default for this read; the stored text itself is left alone.
    pub fn load(&self) -> Content {
        self.storage.get(SITE_CONTENT_KEY, Content::default())
    }

    pub fn save(&self, content: &Content) -> bool {
        let ok = self.storage.set(SITE_CONTENT_KEY, content);
        if ok {
            log::info!("content: saved site content");
        }
        ok
    }

    pub fn reset_to_defaults(&self) -> bool {
        log::info!("content: restoring default content");
        self.save(&Content::default())
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }
}
