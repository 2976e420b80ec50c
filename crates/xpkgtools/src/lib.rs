//! Naming helpers for compiled `.xpkg` packages.

pub mod config;
pub mod discovery;
pub mod meta;
pub mod name;
mod utils;

pub use config::NamingConfig;
pub use discovery::{find_xpkg_in_dir, is_xpkg_path};
pub use meta::{parse_name_from_meta, parse_name_from_meta_str};
pub use name::*;
