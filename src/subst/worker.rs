// src/subst/worker.rs

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use regex::Regex;
use tokio::fs;
use tokio::sync::mpsc;
use tracing::{error, info};

use crate::engine::WorkerDone;
use crate::scope::merge::MergedScope;
use crate::scope::template::resolve_template;

/// Rewrite one file under a merged scope, then signal completion.
///
/// This is the body of each spawned worker task. All errors are logged
/// here; exactly one completion token is sent on every exit path, success
/// or failure, because the run's drain counts on it.
pub async fn run_worker(path: PathBuf, scope: MergedScope, done_tx: mpsc::Sender<WorkerDone>) {
    info!(path = %path.display(), "substituting file");

    if let Err(err) = substitute_file(&path, &scope).await {
        error!(path = %path.display(), error = %err, "file substitution failed");
    }

    let _ = done_tx.send(WorkerDone).await;
}

/// Read the file, substitute every bound variable, write the result back
/// in place (no backup, no atomic rename).
///
/// A read failure skips the write; a template problem is handled inside
/// [`apply_substitutions`] and still results in a write.
pub async fn substitute_file(path: &Path, scope: &MergedScope) -> Result<()> {
    let content = fs::read_to_string(path)
        .await
        .with_context(|| format!("reading {:?}", path))?;

    let rewritten = apply_substitutions(&content, scope);

    fs::write(path, rewritten.as_bytes())
        .await
        .with_context(|| format!("writing {:?}", path))?;

    Ok(())
}

/// Replace every occurrence of every bound placeholder in `content`.
///
/// The replacement is a single simultaneous pass: one alternation of all
/// escaped placeholders, longest placeholder first so that overlapping
/// placeholders resolve deterministically, with a lookup closure mapping
/// each match to its value. A substituted value is never rescanned, so a
/// value containing another variable's placeholder does not cascade.
///
/// A malformed `$template` directive skips every substitution of the scope
/// (the placeholders cannot be formed without it) but leaves the content
/// intact so the caller still writes the file.
pub fn apply_substitutions(content: &str, scope: &MergedScope) -> String {
    let template = match resolve_template(&scope.directives) {
        Ok(t) => t,
        Err(err) => {
            error!(error = %err, "skipping substitutions for this scope");
            return content.to_string();
        }
    };

    let mut table: Vec<(String, &str)> = scope
        .variables
        .iter()
        .map(|(name, value)| (template.placeholder(name), value.as_str()))
        .filter(|(placeholder, _)| !placeholder.is_empty())
        .collect();

    if table.is_empty() {
        return content.to_string();
    }

    table.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then_with(|| a.0.cmp(&b.0)));

    let alternation = table
        .iter()
        .map(|(placeholder, _)| regex::escape(placeholder))
        .collect::<Vec<_>>()
        .join("|");

    let matcher = match Regex::new(&alternation) {
        Ok(re) => re,
        Err(err) => {
            error!(error = %err, "failed to compile placeholder matcher");
            return content.to_string();
        }
    };

    let values: HashMap<&str, &str> = table
        .iter()
        .map(|(placeholder, value)| (placeholder.as_str(), *value))
        .collect();

    matcher
        .replace_all(content, |caps: &regex::Captures| {
            let found = &caps[0];
            values.get(found).copied().unwrap_or(found).to_string()
        })
        .into_owned()
}
