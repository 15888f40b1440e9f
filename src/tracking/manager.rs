use std::fmt;

use chrono::Utc;

use super::{Provider, TrackingSettings};
use crate::storage::{Storage, TRACKING_SETTINGS_KEY};
use crate::{Error, Result};

const PREVIEW_HEADER: &str = "<!-- CÓDIGOS DE SEGUIMIENTO -->\n\n";

/// Whether a provider will emit its snippet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackingStatus {
    Active,
    NotConfigured,
}

impl fmt::Display for TrackingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackingStatus::Active => f.write_str("✓ active"),
            TrackingStatus::NotConfigured => f.write_str("○ not configured"),
        }
    }
}

/// Reads, validates and persists [`TrackingSettings`].
#[derive(Debug, Clone)]
pub struct TrackingManager {
    storage: Storage,
}

impl TrackingManager {
    pub fn new(storage: Storage) -> Self {
        Self { storage }
    }

    /// Stored settings, or every provider disabled with an empty id.
    pub fn load_settings(&self) -> TrackingSettings {
        self.storage
            .get(TRACKING_SETTINGS_KEY, TrackingSettings::default())
    }

    /// Persist settings as they are, without validation.
    pub fn store_settings(&self, settings: &TrackingSettings) -> bool {
        self.storage.set(TRACKING_SETTINGS_KEY, settings)
    }

    /// Validate and save a full settings form.
    ///
    /// Ids are trimmed first. If any non-empty id fails its provider's format
    /// nothing is written and the first offending provider is reported. On
    /// success every provider gets a fresh `last_updated` stamp.
    pub fn save_settings(&self, form: TrackingSettings) -> Result<TrackingSettings> {
        let mut settings = form;
        for provider in Provider::ALL {
            let entry = settings.get_mut(provider);
            entry.id = entry.id.trim().to_string();
            if !entry.id.is_empty() && !provider.validate(&entry.id) {
                log::warn!("tracking: rejected {} id {:?}", provider, entry.id);
                return Err(Error::InvalidTrackingId {
                    provider,
                    id: entry.id.clone(),
                });
            }
        }

        let now = Utc::now();
        for provider in Provider::ALL {
            settings.get_mut(provider).last_updated = Some(now);
        }

        if !self.store_settings(&settings) {
            return Err(Error::Storage("failed to persist tracking settings".into()));
        }
        log::info!("tracking: saved settings");
        Ok(settings)
    }

    /// Flip a provider's enabled flag and persist immediately.
    ///
    /// The stored id is kept as it is, valid or not.
    pub fn set_enabled(&self, provider: Provider, enabled: bool) -> Result<TrackingStatus> {
        let mut settings = self.load_settings();
        settings.get_mut(provider).enabled = enabled;
        if !self.store_settings(&settings) {
            return Err(Error::Storage("failed to persist tracking settings".into()));
        }
        Ok(status_of(&settings, provider))
    }

    pub fn status(&self, provider: Provider) -> TrackingStatus {
        status_of(&self.load_settings(), provider)
    }

    /// Code of every active provider, for the page.
    pub fn inject(&self) -> String {
        self.load_settings().inject()
    }

    /// Code of every active provider under a header comment, one blank line
    /// after each snippet. `None` when no provider is active.
    pub fn preview(&self) -> Option<String> {
        let settings = self.load_settings();
        let mut code = String::from(PREVIEW_HEADER);
        for (provider, id) in settings.active() {
            code.push_str(&super::generate_code(provider, id));
            code.push_str("\n\n");
        }
        if code == PREVIEW_HEADER {
            None
        } else {
            Some(code)
        }
    }
}

fn status_of(settings: &TrackingSettings, provider: Provider) -> TrackingStatus {
    if settings.get(provider).is_active() {
        TrackingStatus::Active
    } else {
        TrackingStatus::NotConfigured
    }
}
