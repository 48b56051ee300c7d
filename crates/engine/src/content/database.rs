use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::texture_keys::{validate_texture_key, TextureKeyError};

use super::manifest::read_manifest;

pub const MANIFEST_FILE_NAME: &str = "content.json";

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read content manifest at {path}: {source}")]
    ReadManifest {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse content manifest at {path}: {source}")]
    ParseManifest {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid {kind} signature '{key}': {source}")]
    InvalidSignature {
        kind: &'static str,
        key: String,
        #[source]
        source: TextureKeyError,
    },
    #[error("{kind} asset for signature '{key}' is missing at {path}")]
    MissingAsset {
        kind: &'static str,
        key: String,
        path: PathBuf,
    },
    #[error("failed to read {kind} asset '{key}' at {path}: {source}")]
    ReadAsset {
        kind: &'static str,
        key: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unknown {kind} signature '{key}'")]
    UnknownSignature { kind: &'static str, key: String },
}

/// Resolves string signatures to asset paths. Every referenced file is
/// checked at load time; a missing asset is a configuration error, not a
/// runtime condition.
#[derive(Debug, Default)]
pub struct ContentDatabase {
    textures: HashMap<String, PathBuf>,
    sounds: HashMap<String, PathBuf>,
}

impl ContentDatabase {
    pub fn load(assets_dir: &Path) -> Result<Self, ContentError> {
        let manifest = read_manifest(&assets_dir.join(MANIFEST_FILE_NAME))?;

        let mut textures = HashMap::new();
        for (key, relative) in &manifest.textures {
            textures.insert(
                key.clone(),
                resolve_asset_path(assets_dir, "texture", key, relative)?,
            );
        }

        let mut sounds = HashMap::new();
        for (key, relative) in &manifest.sounds {
            sounds.insert(
                key.clone(),
                resolve_asset_path(assets_dir, "sound", key, relative)?,
            );
        }

        Ok(Self { textures, sounds })
    }

    pub fn texture_count(&self) -> usize {
        self.textures.len()
    }

    pub fn sound_count(&self) -> usize {
        self.sounds.len()
    }

    pub fn texture_path(&self, key: &str) -> Result<&Path, ContentError> {
        self.textures
            .get(key)
            .map(PathBuf::as_path)
            .ok_or_else(|| ContentError::UnknownSignature {
                kind: "texture",
                key: key.to_string(),
            })
    }

    pub fn sound_path(&self, key: &str) -> Result<&Path, ContentError> {
        self.sounds
            .get(key)
            .map(PathBuf::as_path)
            .ok_or_else(|| ContentError::UnknownSignature {
                kind: "sound",
                key: key.to_string(),
            })
    }

    pub fn sound_keys(&self) -> impl Iterator<Item = &str> {
        self.sounds.keys().map(String::as_str)
    }

    pub fn read_sound_bytes(&self, key: &str) -> Result<Vec<u8>, ContentError> {
        let path = self
            .sounds
            .get(key)
            .ok_or_else(|| ContentError::UnknownSignature {
                kind: "sound",
                key: key.to_string(),
            })?;
        fs::read(path).map_err(|source| ContentError::ReadAsset {
            kind: "sound",
            key: key.to_string(),
            path: path.clone(),
            source,
        })
    }

    /// Ownership of the texture path table passes to the renderer cache.
    pub fn texture_paths(&self) -> HashMap<String, PathBuf> {
        self.textures.clone()
    }
}

fn resolve_asset_path(
    assets_dir: &Path,
    kind: &'static str,
    key: &str,
    relative: &str,
) -> Result<PathBuf, ContentError> {
    validate_texture_key(key).map_err(|source| ContentError::InvalidSignature {
        kind,
        key: key.to_string(),
        source,
    })?;
    let path = assets_dir.join(relative);
    if !path.is_file() {
        return Err(ContentError::MissingAsset {
            kind,
            key: key.to_string(),
            path,
        });
    }
    Ok(path)
}
