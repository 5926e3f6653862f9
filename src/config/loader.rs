// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::config::model::ConfigStore;
use crate::config::parser::parse_config;

/// Load a configuration file from a given path and parse it into a
/// [`ConfigStore`].
///
/// Both failure modes here are fatal to the run: an unreadable file and a
/// duplicate `[$global]` section. Everything less severe is logged inside
/// the parser and degrades to a skipped line.
pub fn load_config(path: impl AsRef<Path>) -> Result<ConfigStore> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .with_context(|| format!("reading config file at {:?}", path))?;

    parse_config(&contents)
        .with_context(|| format!("parsing config from {:?}", path))
}

/// Helper to resolve a default config path.
///
/// Currently this just returns `stencil.cf` in the current working
/// directory, but this function exists so you can later:
///
/// - Respect an env var (e.g. `STENCIL_CONFIG`).
/// - Look for multiple default locations.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("stencil.cf")
}
