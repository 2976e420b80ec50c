use std::{fs, path::Path};

use eyre::{bail, WrapErr};
use serde::Deserialize;

use crate::name::{
    build_path_with_extension, friendly_id_with_limits, MAX_HASH_LEN, MAX_PACKAGE_LEN,
    XPKG_EXTENSION,
};

/// Naming limits and the package extension.
///
/// Every field is optional in the TOML form; missing ones keep the defaults
/// used by [`crate::friendly_id`] and [`crate::build_path`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NamingConfig {
    pub max_package_len: usize,
    pub max_hash_len: usize,
    pub extension: String,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            max_package_len: MAX_PACKAGE_LEN,
            max_hash_len: MAX_HASH_LEN,
            extension: XPKG_EXTENSION.to_string(),
        }
    }
}

impl NamingConfig {
    pub fn load(path: impl AsRef<Path>) -> eyre::Result<Self> {
        let path = path.as_ref();
        tracing::info!("loading naming config from {}", path.display());

        let contents = fs::read_to_string(path)
            .wrap_err(format!("failed to read config (path: {})", path.display()))?;

        Self::from_toml_str(&contents)
            .wrap_err(format!("invalid config (path: {})", path.display()))
    }

    pub fn from_toml_str(contents: &str) -> eyre::Result<Self> {
        let config: Self = toml::from_str(contents)?;
        config.normalize()
    }

    fn normalize(mut self) -> eyre::Result<Self> {
        // accept ".xpkg" as well as "xpkg"
        if let Some(stripped) = self.extension.strip_prefix('.') {
            self.extension = stripped.to_string();
        }

        if self.extension.is_empty() {
            bail!("extension must not be empty");
        }
        if self.extension.contains(['/', '.']) {
            bail!(
                "extension must be a single path-free suffix (extension: {})",
                self.extension
            );
        }

        Ok(self)
    }

    pub fn friendly_id(&self, package: &str, hash: &str) -> String {
        friendly_id_with_limits(package, hash, self.max_package_len, self.max_hash_len)
    }

    pub fn build_path(&self, directory: &str, name: &str) -> String {
        build_path_with_extension(directory, name, &self.extension)
    }
}
