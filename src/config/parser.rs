// src/config/parser.rs

use anyhow::{bail, Result};
use tracing::error;

use crate::config::model::{ConfigStore, Section, GLOBAL_PATH};

/// Where assignments currently land while scanning lines.
enum Cursor {
    /// No section header seen yet.
    None,
    Global,
    /// Index into `ConfigStore::patterns`.
    Pattern(usize),
}

/// Parse raw configuration text into a [`ConfigStore`].
///
/// Grammar, line by line:
/// - a line longer than two bytes whose bracket-stripped interior is
///   `$global` opens the global section; a second one is fatal
/// - any other line longer than two bytes starting with `[` opens a new
///   pattern section keyed by its interior (the glob pattern)
/// - lines starting with `#` are comments
/// - lines containing `=` are assignments to the open section, split on the
///   first `=` with spaces trimmed on both sides; `$`-prefixed keys are
///   directives, the rest are variables
/// - any other non-blank line is logged and skipped
///
/// The only fatal outcome is a duplicate `[$global]` header; every other
/// malformed line degrades to a logged skip. No filesystem access happens
/// here.
pub fn parse_config(input: &str) -> Result<ConfigStore> {
    let mut store = ConfigStore::default();
    let mut seen_global = false;
    let mut cursor = Cursor::None;

    for (idx, line) in input.lines().enumerate() {
        let line_num = idx + 1;
        let interior = header_interior(line);

        if interior == Some(GLOBAL_PATH) {
            if seen_global {
                error!(line = line_num, "second [$global] section");
                bail!("second [$global] section on line {line_num}");
            }
            seen_global = true;
            cursor = Cursor::Global;
        } else if line.len() > 2 && line.starts_with('[') {
            // The interior is missing only if the trailing byte splits a
            // multi-byte character; such a header cannot name a usable
            // glob pattern.
            let Some(key) = interior else {
                error!(line = line_num, "unusable section header");
                continue;
            };
            store.patterns.push((key.to_string(), Section::default()));
            cursor = Cursor::Pattern(store.patterns.len() - 1);
        } else if line.starts_with('#') {
            // comment
        } else if let Some((key, value)) = split_assignment(line) {
            let section = match cursor {
                Cursor::None => {
                    error!(line = line_num, "assignment before any section header");
                    continue;
                }
                Cursor::Global => &mut store.global,
                Cursor::Pattern(i) => &mut store.patterns[i].1,
            };
            section.insert(key.to_string(), value.to_string());
        } else if !line.trim_matches(' ').is_empty() {
            error!(line = line_num, "bad variable declaration");
        }
    }

    Ok(store)
}

/// Bracket-stripped interior of a header-shaped line.
///
/// Note the length check is on bytes and the wrapping characters are not
/// inspected, so the global marker is recognised inside any single-byte
/// delimiters. Pattern headers additionally require a leading `[` at the
/// call site.
fn header_interior(line: &str) -> Option<&str> {
    if line.len() > 2 {
        line.get(1..line.len() - 1)
    } else {
        None
    }
}

/// Split `key = value` on the first `=`, trimming surrounding spaces
/// (spaces only, not all whitespace) from both sides.
fn split_assignment(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once('=')?;
    Some((key.trim_matches(' '), value.trim_matches(' ')))
}
