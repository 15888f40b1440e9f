//! Tracking pixels: per-provider settings, id validators and snippet generators
//!
//! Three providers are supported. Each has an enabled flag and an id; a
//! provider is *active* when it is enabled and its id is non-empty. Ids are
//! checked against a fixed format before they are saved, but ids already in
//! the store are used as they are.

pub mod manager;
pub mod snippets;

pub use manager::{TrackingManager, TrackingStatus};
pub use snippets::generate_code;

use std::fmt;
use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// A third-party analytics provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Provider {
    FacebookPixel,
    GoogleAnalytics,
    GoogleTagManager,
}

impl Provider {
    pub const ALL: [Provider; 3] = [
        Provider::FacebookPixel,
        Provider::GoogleAnalytics,
        Provider::GoogleTagManager,
    ];

    /// Stable name used in the store and on the command line
    pub fn key(self) -> &'static str {
        match self {
            Provider::FacebookPixel => "facebook",
            Provider::GoogleAnalytics => "google-analytics",
            Provider::GoogleTagManager => "google-tag-manager",
        }
    }

    /// Name the original dashboard stored this provider under
    pub fn legacy_key(self) -> &'static str {
        match self {
            Provider::FacebookPixel => "facebookPixel",
            Provider::GoogleAnalytics => "googleAnalytics",
            Provider::GoogleTagManager => "googleTagManager",
        }
    }

    /// Provider stored under `key`, in either layout.
    pub fn from_settings_key(key: &str) -> Option<Provider> {
        Provider::ALL
            .into_iter()
            .find(|p| p.key() == key || p.legacy_key() == key)
    }

    pub fn format_hint(self) -> &'static str {
        match self {
            Provider::FacebookPixel => "15-16 digits",
            Provider::GoogleAnalytics => "G-XXXXXXXXXX",
            Provider::GoogleTagManager => "GTM-XXXXXXX",
        }
    }

    fn pattern(self) -> &'static Regex {
        static FACEBOOK: OnceLock<Regex> = OnceLock::new();
        static ANALYTICS: OnceLock<Regex> = OnceLock::new();
        static TAG_MANAGER: OnceLock<Regex> = OnceLock::new();

        let (cell, src) = match self {
            Provider::FacebookPixel => (&FACEBOOK, r"^[0-9]{15,16}$"),
            Provider::GoogleAnalytics => (&ANALYTICS, r"^G-[A-Z0-9]{10}$"),
            Provider::GoogleTagManager => (&TAG_MANAGER, r"^GTM-[A-Z0-9]{7}$"),
        };
        cell.get_or_init(|| Regex::new(src).expect("tracking id pattern is valid"))
    }

    /// Whether `id` matches this provider's id format.
    pub fn validate(self, id: &str) -> bool {
        self.pattern().is_match(id)
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Provider::FacebookPixel => "Facebook Pixel",
            Provider::GoogleAnalytics => "Google Analytics",
            Provider::GoogleTagManager => "Google Tag Manager",
        })
    }
}

impl std::str::FromStr for Provider {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        Provider::ALL
            .into_iter()
            .find(|p| p.key() == s)
            .ok_or_else(|| {
                crate::Error::InvalidField(format!(
                    "unknown provider {:?} (expected facebook, google-analytics or google-tag-manager)",
                    s
                ))
            })
    }
}

/// Settings of one provider
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderSettings {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default, alias = "pixelId", alias = "measurementId", alias = "containerId")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
}

impl ProviderSettings {
    pub fn new(enabled: bool, id: impl Into<String>) -> Self {
        Self {
            enabled,
            id: id.into(),
            last_updated: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.enabled && !self.id.is_empty()
    }
}

/// Settings of every provider, persisted as one object
///
/// Stores written by the original dashboard (`facebookPixel.pixelId` and
/// friends) read into the same fields.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TrackingSettings {
    #[serde(default, alias = "facebookPixel")]
    pub facebook: ProviderSettings,
    #[serde(rename = "google-analytics", alias = "googleAnalytics", default)]
    pub google_analytics: ProviderSettings,
    #[serde(rename = "google-tag-manager", alias = "googleTagManager", default)]
    pub google_tag_manager: ProviderSettings,
}

impl TrackingSettings {
    pub fn get(&self, provider: Provider) -> &ProviderSettings {
        match provider {
            Provider::FacebookPixel => &self.facebook,
            Provider::GoogleAnalytics => &self.google_analytics,
            Provider::GoogleTagManager => &self.google_tag_manager,
        }
    }

    pub fn get_mut(&mut self, provider: Provider) -> &mut ProviderSettings {
        match provider {
            Provider::FacebookPixel => &mut self.facebook,
            Provider::GoogleAnalytics => &mut self.google_analytics,
            Provider::GoogleTagManager => &mut self.google_tag_manager,
        }
    }

    /// Active providers in page order, with their ids.
    pub fn active(&self) -> impl Iterator<Item = (Provider, &str)> + '_ {
        Provider::ALL
            .into_iter()
            .filter(move |p| self.get(*p).is_active())
            .map(move |p| (p, self.get(p).id.as_str()))
    }

    /// Snippets of every active provider, concatenated for the page head.
    pub fn inject(&self) -> String {
        self.active()
            .map(|(provider, id)| generate_code(provider, id))
            .collect()
    }
}
