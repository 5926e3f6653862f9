// src/scope/merge.rs

use std::collections::BTreeMap;

use crate::config::model::Section;

/// The effective scope of one pattern section: global bindings overlaid
/// with the section's own, section values winning per key.
///
/// Computed fresh for every dispatch and handed to each worker by clone;
/// never stored back into the config.
#[derive(Debug, Clone, Default)]
pub struct MergedScope {
    pub variables: BTreeMap<String, String>,
    pub directives: BTreeMap<String, String>,
}

/// Merge the global section with a pattern-local section.
pub fn merge_scopes(global: &Section, local: &Section) -> MergedScope {
    MergedScope {
        variables: merge_maps(&global.variables, &local.variables),
        directives: merge_maps(&global.directives, &local.directives),
    }
}

/// Key-wise union of two maps; `overlay` wins on collision.
pub fn merge_maps(
    base: &BTreeMap<String, String>,
    overlay: &BTreeMap<String, String>,
) -> BTreeMap<String, String> {
    let mut out = base.clone();
    for (k, v) in overlay {
        out.insert(k.clone(), v.clone());
    }
    out
}
