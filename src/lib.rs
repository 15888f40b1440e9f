//! mediasite
//!
//! Content store, page renderer and tracking-pixel manager for a small
//! media-production marketing site.
//!
//! # Features
//!
//! - **Whole-object content store**: navigation, hero slides, portfolio,
//!   pricing and contact info are read and written as one JSON blob
//! - **Dashboard editor**: add/update/remove mutators per section
//! - **Tracking pixels**: validated Facebook, Google Analytics and Google Tag
//!   Manager ids and the snippets they produce
//! - **Forgiving persistence**: read failures fall back to defaults instead of
//!   surfacing errors
//!
//! # Example
//!
//! ```
//! use mediasite::{Site, SiteConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let site = Site::in_memory(SiteConfig::default())?;
//! site.editor().add_menu_item()?;
//! let html = site.render_page("<nav><!-- mediasite:nav-links --></nav>");
//! assert!(html.contains(">Nuevo</a>"));
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

pub mod auth;
pub mod backup;
pub mod content;
pub mod editor;
pub mod error;
pub mod rendering;
pub mod storage;
pub mod tracking;

pub use auth::Auth;
pub use backup::{Backup, ExportDocument};
pub use content::{Content, ContentStore};
pub use editor::Editor;
pub use error::{Error, Result};
pub use rendering::{Page, Region};
pub use storage::{Backend, FileBackend, MemoryBackend, Storage};
pub use tracking::{Provider, ProviderSettings, TrackingManager, TrackingSettings, TrackingStatus};

/// Configuration for a site store
///
/// The defaults match the stock site: a store file in the working directory
/// and the out-of-the-box dashboard password.
///
/// # Examples
///
/// ```
/// let cfg = mediasite::SiteConfig::default();
/// assert_eq!(cfg.min_password_len, 6);
/// ```
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// JSON file backing the store
    pub store_path: PathBuf,
    /// Dashboard password used until the owner sets one
    pub default_password: String,
    /// Minimum length accepted by `Auth::change_password`
    pub min_password_len: usize,
    /// File name prefix for backup exports
    pub backup_prefix: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from("mediasite-store.json"),
            default_password: "admin123".to_string(),
            min_password_len: 6,
            backup_prefix: "sermultimedia-backup".to_string(),
        }
    }
}

impl SiteConfig {
    pub fn validate(&self) -> Result<()> {
        if self.store_path.as_os_str().is_empty() {
            return Err(Error::ConfigError("store_path is empty".into()));
        }
        if self.default_password.is_empty() {
            return Err(Error::ConfigError("default_password is empty".into()));
        }
        if self.min_password_len == 0 {
            return Err(Error::ConfigError("min_password_len must be at least 1".into()));
        }
        Ok(())
    }
}

/// Every store of one site, sharing a single backend.
#[derive(Debug, Clone)]
pub struct Site {
    config: SiteConfig,
    storage: Storage,
}

impl Site {
    /// Open the file-backed store at `config.store_path`.
    pub fn open(config: SiteConfig) -> Result<Self> {
        config.validate()?;
        let storage = Storage::new(FileBackend::new(config.store_path.clone()));
        Ok(Self { config, storage })
    }

    /// A site whose store lives only as long as this value.
    pub fn in_memory(config: SiteConfig) -> Result<Self> {
        Self::with_storage(config, Storage::in_memory())
    }

    pub fn with_storage(config: SiteConfig, storage: Storage) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, storage })
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    pub fn content(&self) -> ContentStore {
        ContentStore::new(self.storage.clone())
    }

    pub fn editor(&self) -> Editor {
        Editor::new(self.content())
    }

    pub fn tracking(&self) -> TrackingManager {
        TrackingManager::new(self.storage.clone())
    }

    pub fn backup(&self) -> Backup {
        Backup::new(self.tracking(), self.config.backup_prefix.clone())
    }

    pub fn auth(&self) -> Auth {
        Auth::new(
            self.storage.clone(),
            self.config.default_password.clone(),
            self.config.min_password_len,
        )
    }

    /// Render `template` with the stored content and tracking settings.
    pub fn render_page(&self, template: &str) -> String {
        rendering::render_site(
            template,
            &self.content().load(),
            &self.tracking().load_settings(),
        )
    }
}
