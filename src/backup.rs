//! Backup files for tracking settings
//!
//! An export is a pretty-printed JSON document
//! `{ "trackingSettings": …, "exportDate": …, "version": "1.0" }`. Any JSON
//! document carrying a usable `trackingSettings` value can be imported; all
//! other keys are ignored.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::tracking::{Provider, TrackingManager, TrackingSettings};
use crate::{Error, Result};

/// Format version written into every export
pub const EXPORT_VERSION: &str = "1.0";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub tracking_settings: TrackingSettings,
    pub export_date: DateTime<Utc>,
    pub version: String,
}

impl ExportDocument {
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// `PREFIX-YYYY-MM-DD.json`
pub fn export_file_name(prefix: &str, date: NaiveDate) -> String {
    format!("{}-{}.json", prefix, date.format("%Y-%m-%d"))
}

/// Exports and imports the tracking settings store.
#[derive(Debug, Clone)]
pub struct Backup {
    tracking: TrackingManager,
    file_prefix: String,
}

impl Backup {
    pub fn new(tracking: TrackingManager, file_prefix: impl Into<String>) -> Self {
        Self {
            tracking,
            file_prefix: file_prefix.into(),
        }
    }

    pub fn export(&self, now: DateTime<Utc>) -> ExportDocument {
        ExportDocument {
            tracking_settings: self.tracking.load_settings(),
            export_date: now,
            version: EXPORT_VERSION.to_string(),
        }
    }

    /// Write an export named after `now`'s date into `dir`; returns its path.
    pub fn export_to_dir(&self, dir: &Path, now: DateTime<Utc>) -> Result<PathBuf> {
        let doc = self.export(now);
        let path = dir.join(export_file_name(&self.file_prefix, now.date_naive()));
        fs::write(&path, doc.to_json_pretty()?)?;
        log::info!("backup: exported tracking settings to {}", path.display());
        Ok(path)
    }

    /// Replace the stored settings with those in `text`.
    ///
    /// Rejects text that is not JSON, has no `trackingSettings` key, or whose
    /// `trackingSettings` is not a settings object naming at least one known
    /// provider. Both the current and the original dashboard layouts are
    /// accepted. The store is untouched on rejection.
    pub fn import(&self, text: &str) -> Result<TrackingSettings> {
        let doc: serde_json::Value = serde_json::from_str(text).map_err(|e| {
            log::warn!("backup: import is not valid JSON: {}", e);
            Error::InvalidImport(format!("not valid JSON: {}", e))
        })?;

        let raw = match doc.get("trackingSettings") {
            Some(v) if !v.is_null() => v.clone(),
            _ => {
                log::warn!("backup: import has no trackingSettings");
                return Err(Error::InvalidImport("missing trackingSettings".into()));
            }
        };

        let known = raw
            .as_object()
            .is_some_and(|obj| obj.keys().any(|k| Provider::from_settings_key(k).is_some()));
        if !known {
            log::warn!("backup: import has no recognised tracking provider");
            return Err(Error::InvalidImport(
                "trackingSettings names no known provider".into(),
            ));
        }

        let settings: TrackingSettings = serde_json::from_value(raw)
            .map_err(|e| Error::InvalidImport(format!("malformed trackingSettings: {}", e)))?;

        if !self.tracking.store_settings(&settings) {
            return Err(Error::Storage("failed to persist tracking settings".into()));
        }
        log::info!("backup: imported tracking settings");
        Ok(settings)
    }

    pub fn import_file(&self, path: &Path) -> Result<TrackingSettings> {
        let text = fs::read_to_string(path)?;
        self.import(&text)
    }
}
