use chrono::{TimeZone, Utc};
use mediasite::storage::TRACKING_SETTINGS_KEY;
use mediasite::{
    Error, Provider, ProviderSettings, Site, SiteConfig, TrackingSettings, TrackingStatus,
};
use tempfile::TempDir;

fn site() -> Site {
    Site::in_memory(SiteConfig::default()).expect("Failed to create site")
}

fn form(fb: &str, ga: &str, gtm: &str) -> TrackingSettings {
    TrackingSettings {
        facebook: ProviderSettings::new(true, fb),
        google_analytics: ProviderSettings::new(true, ga),
        google_tag_manager: ProviderSettings::new(true, gtm),
    }
}

#[test]
fn test_save_trims_and_stamps() {
    let site = site();
    let tracking = site.tracking();
    let saved = tracking
        .save_settings(form(" 123456789012345 ", "G-ABCDE12345", ""))
        .unwrap();
    assert_eq!(saved.facebook.id, "123456789012345");
    assert!(saved.facebook.last_updated.is_some());
    assert!(saved.google_tag_manager.last_updated.is_some());

    assert_eq!(tracking.load_settings(), saved);
    assert_eq!(tracking.status(Provider::FacebookPixel), TrackingStatus::Active);
    assert_eq!(tracking.status(Provider::GoogleTagManager), TrackingStatus::NotConfigured);
}

#[test]
fn test_one_bad_id_rejects_the_whole_form() {
    let site = site();
    let tracking = site.tracking();
    let err = tracking
        .save_settings(form("123456789012345", "UA-12345", "GTM-ABC1234"))
        .unwrap_err();
    match err {
        Error::InvalidTrackingId { provider, id } => {
            assert_eq!(provider, Provider::GoogleAnalytics);
            assert_eq!(id, "UA-12345");
        }
        other => panic!("unexpected error: {}", other),
    }
    assert!(site.storage().get_raw(TRACKING_SETTINGS_KEY).is_none());
    assert_eq!(tracking.load_settings(), TrackingSettings::default());
}

#[test]
fn test_toggle_keeps_id() {
    let site = site();
    let tracking = site.tracking();
    tracking
        .save_settings(form("", "", "GTM-ABC1234"))
        .unwrap();

    assert_eq!(
        tracking.set_enabled(Provider::GoogleTagManager, false).unwrap(),
        TrackingStatus::NotConfigured
    );
    let settings = tracking.load_settings();
    assert_eq!(settings.google_tag_manager.id, "GTM-ABC1234");
    assert!(tracking.preview().is_none());

    assert_eq!(
        tracking.set_enabled(Provider::GoogleTagManager, true).unwrap(),
        TrackingStatus::Active
    );
    let preview = tracking.preview().unwrap();
    assert!(preview.starts_with("<!-- CÓDIGOS DE SEGUIMIENTO -->\n\n"));
    assert!(preview.contains("GTM-ABC1234"));
}

#[test]
fn test_export_then_import_into_another_site() {
    let dir = TempDir::new().unwrap();
    let source = site();
    source
        .tracking()
        .save_settings(form("1234567890123456", "G-ABCDE12345", ""))
        .unwrap();

    let now = Utc.with_ymd_and_hms(2026, 10, 19, 8, 30, 0).unwrap();
    let path = source.backup().export_to_dir(dir.path(), now).unwrap();
    assert_eq!(
        path.file_name().unwrap().to_str().unwrap(),
        "sermultimedia-backup-2026-10-19.json"
    );

    let target = site();
    let imported = target.backup().import_file(&path).unwrap();
    assert_eq!(imported, source.tracking().load_settings());
    assert_eq!(target.tracking().inject(), source.tracking().inject());
}

#[test]
fn test_import_does_not_revalidate_ids() {
    let site = site();
    let text = r#"{"trackingSettings":{"facebook":{"enabled":true,"id":"abc"}}}"#;
    let imported = site.backup().import(text).unwrap();
    assert_eq!(imported.facebook.id, "abc");
    assert_eq!(site.tracking().status(Provider::FacebookPixel), TrackingStatus::Active);
}

#[test]
fn test_rejected_import_leaves_store() {
    let dir = TempDir::new().unwrap();
    let bad = dir.path().join("bad.json");
    std::fs::write(&bad, r#"{"version":"1.0"}"#).unwrap();

    let site = site();
    let before = site.tracking().save_settings(form("", "G-ABCDE12345", "")).unwrap();
    assert!(matches!(
        site.backup().import_file(&bad),
        Err(Error::InvalidImport(_))
    ));
    assert!(site.backup().import_file(&dir.path().join("missing.json")).is_err());
    assert_eq!(site.tracking().load_settings(), before);
}

#[test]
fn test_import_without_known_providers_keeps_settings() {
    let site = site();
    let before = site
        .tracking()
        .save_settings(form("", "G-ABCDE12345", ""))
        .unwrap();

    let text = r#"{"trackingSettings":{"pixel":{"enabled":true,"id":"123456789012345"}},"version":"1.0"}"#;
    assert!(matches!(
        site.backup().import(text),
        Err(Error::InvalidImport(_))
    ));
    assert_eq!(site.tracking().load_settings(), before);
}

#[test]
fn test_import_original_dashboard_backup() {
    let site = site();
    site.tracking()
        .save_settings(form("", "G-ABCDE12345", ""))
        .unwrap();

    let text = r#"{
        "trackingSettings": {
            "facebookPixel": {"enabled": true, "pixelId": "123456789012345"},
            "googleAnalytics": {"enabled": true, "measurementId": "G-ZZZZZ99999"},
            "googleTagManager": {"enabled": false, "containerId": ""}
        },
        "exportDate": "2024-05-01T10:00:00.000Z",
        "version": "1.0"
    }"#;
    site.backup().import(text).unwrap();

    let settings = site.tracking().load_settings();
    assert_eq!(settings.facebook.id, "123456789012345");
    assert_eq!(settings.google_analytics.id, "G-ZZZZZ99999");
    assert_eq!(site.tracking().status(Provider::FacebookPixel), TrackingStatus::Active);
    assert_eq!(
        site.tracking().status(Provider::GoogleTagManager),
        TrackingStatus::NotConfigured
    );
}
