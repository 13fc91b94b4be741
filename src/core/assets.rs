//! Core domain: startup check for required image assets.

use bevy::asset::io::file::FileAssetReader;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::sprites::{BACKGROUND, HERO_SHEET};

pub const ASSET_DIR: &str = "assets";

/// Directory the asset server reads from: `BEVY_ASSET_ROOT`, else
/// `CARGO_MANIFEST_DIR`, else the executable's directory, joined with
/// `assets`.
pub fn asset_root() -> PathBuf {
    FileAssetReader::get_base_path().join(ASSET_DIR)
}

pub const REQUIRED_ASSETS: [&str; 2] = [HERO_SHEET, BACKGROUND];

/// One or more required images are not on disk.
#[derive(Debug)]
pub struct MissingAssetsError {
    pub missing: Vec<PathBuf>,
}

impl fmt::Display for MissingAssetsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Missing required assets:")?;
        for path in &self.missing {
            write!(f, " {}", path.display())?;
        }
        Ok(())
    }
}

impl std::error::Error for MissingAssetsError {}

pub fn verify_assets(base: &Path, required: &[&str]) -> Result<(), MissingAssetsError> {
    let missing: Vec<PathBuf> = required
        .iter()
        .map(|name| base.join(name))
        .filter(|path| !path.is_file())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(MissingAssetsError { missing })
    }
}
