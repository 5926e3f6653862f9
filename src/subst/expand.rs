// src/subst/expand.rs

use std::path::PathBuf;

use tracing::warn;

/// Expand a filesystem glob pattern into the concrete files it matches,
/// in the order the underlying glob walk yields them.
///
/// Nothing here is fatal: a syntactically invalid pattern is logged and
/// treated as zero matches, and entries the walk cannot read are logged
/// and skipped. The result is recomputed fresh on every call, never
/// cached.
pub fn expand_pattern(pattern: &str) -> Vec<PathBuf> {
    let paths = match glob::glob(pattern) {
        Ok(paths) => paths,
        Err(err) => {
            warn!(pattern, error = %err, "bad glob pattern");
            return Vec::new();
        }
    };

    let mut files = Vec::new();
    for entry in paths {
        match entry {
            Ok(path) => files.push(path),
            Err(err) => {
                warn!(pattern, error = %err, "skipping unreadable match");
            }
        }
    }
    files
}
