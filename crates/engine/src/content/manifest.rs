use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::database::ContentError;

/// On-disk shape of `assets/content.json`: signature -> asset path relative
/// to the assets directory.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ContentManifest {
    #[serde(default)]
    pub textures: BTreeMap<String, String>,
    #[serde(default)]
    pub sounds: BTreeMap<String, String>,
}

pub(crate) fn read_manifest(path: &Path) -> Result<ContentManifest, ContentError> {
    let raw = fs::read_to_string(path).map_err(|source| ContentError::ReadManifest {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ContentError::ParseManifest {
        path: path.to_path_buf(),
        source,
    })
}
