use std::{fs, path::Path};

use eyre::{bail, eyre, WrapErr};
use serde::Deserialize;

use crate::name::META_FILE;

#[derive(Debug, Deserialize)]
struct PackageMeta {
    metadata: Option<ObjectMeta>,
}

#[derive(Debug, Deserialize)]
struct ObjectMeta {
    #[serde(default)]
    name: Option<String>,
}

/// Reads the package name (`metadata.name`) from a metadata file.
///
/// `path` may point at the file or at the package root, in which case
/// `crossplane.yaml` inside it is read.
pub fn parse_name_from_meta(path: impl AsRef<Path>) -> eyre::Result<String> {
    let path = path.as_ref();
    let path = if path.is_dir() {
        path.join(META_FILE)
    } else {
        path.to_path_buf()
    };

    tracing::debug!("reading package metadata (path: {})", path.display());
    let contents = fs::read_to_string(&path)
        .wrap_err(format!("failed to read metadata (path: {})", path.display()))?;

    parse_name_from_meta_str(&contents)
        .wrap_err(format!("invalid metadata (path: {})", path.display()))
}

pub fn parse_name_from_meta_str(contents: &str) -> eyre::Result<String> {
    let meta: PackageMeta = serde_yaml::from_str(contents)?;
    let name = meta
        .metadata
        .and_then(|metadata| metadata.name)
        .ok_or_else(|| eyre!("metadata.name is missing"))?;

    if name.is_empty() {
        bail!("metadata.name is empty");
    }

    Ok(name)
}
