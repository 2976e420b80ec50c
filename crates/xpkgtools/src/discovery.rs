use std::{
    fs,
    path::{Path, PathBuf},
};

use eyre::{bail, WrapErr};
use walkdir::WalkDir;

use crate::name::XPKG_MATCH_PATTERN;

/// Whether the file name of `path` matches `*.xpkg`.
pub fn is_xpkg_path(path: impl AsRef<Path>) -> bool {
    path.as_ref()
        .file_name()
        .and_then(|name| name.to_str())
        .zip(XPKG_MATCH_PATTERN.strip_prefix('*'))
        .is_some_and(|(name, suffix)| name.ends_with(suffix))
}

/// Finds the single compiled package at the top level of `root`.
///
/// Subdirectories are not searched. Fails when `root` is not a directory, or
/// when it holds zero or more than one package.
pub fn find_xpkg_in_dir(root: impl AsRef<Path>) -> eyre::Result<PathBuf> {
    let root = root.as_ref();
    let metadata = fs::metadata(root).wrap_err(format!(
        "failed to read package directory (root: {})",
        root.display()
    ))?;
    if !metadata.is_dir() {
        bail!("package root is not a directory (root: {})", root.display());
    }

    tracing::debug!("searching for packages (root: {})", root.display());

    let mut found: Option<PathBuf> = None;
    for entry in WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        if !entry.file_type().is_file() || !is_xpkg_path(entry.path()) {
            continue;
        }

        tracing::debug!("found package (path: {})", entry.path().display());
        if let Some(previous) = &found {
            bail!(
                "multiple packages found (first: {}, second: {})",
                previous.display(),
                entry.path().display()
            );
        }
        found = Some(entry.into_path());
    }

    let Some(path) = found else {
        bail!("no package found (root: {})", root.display());
    };

    Ok(path)
}
