//! Core domain: tests for the startup asset check.

use std::path::Path;

use super::{asset_root, verify_assets};

#[test]
fn test_missing_assets_are_all_reported() {
    let err = verify_assets(Path::new("no/such/dir"), &["hero.png", "background.png"]).unwrap_err();
    assert_eq!(err.missing.len(), 2);
    assert!(err.to_string().contains("hero.png"));
    assert!(err.to_string().contains("background.png"));
}

#[test]
fn test_present_assets_pass() {
    let base = Path::new(env!("CARGO_MANIFEST_DIR"));
    assert!(verify_assets(base, &["Cargo.toml"]).is_ok());
}

#[test]
fn test_directories_do_not_count_as_assets() {
    let base = Path::new(env!("CARGO_MANIFEST_DIR"));
    let err = verify_assets(base, &["Cargo.toml", "src"]).unwrap_err();
    assert_eq!(err.missing, vec![base.join("src")]);
}

#[test]
fn test_asset_root_matches_asset_server_base() {
    // Under cargo the asset server reads from the manifest dir unless
    // BEVY_ASSET_ROOT overrides it.
    if std::env::var_os("BEVY_ASSET_ROOT").is_some() {
        return;
    }
    assert_eq!(
        asset_root(),
        Path::new(env!("CARGO_MANIFEST_DIR")).join("assets")
    );
}

#[test]
fn test_shipped_tuning_lives_under_asset_root() {
    if std::env::var_os("BEVY_ASSET_ROOT").is_some() {
        return;
    }
    assert!(asset_root().join("data").join("movement.ron").is_file());
}
