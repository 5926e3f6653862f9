use std::collections::BTreeMap;
use std::error::Error;

use stencil::config::Section;
use stencil::scope::{merge_scopes, resolve_template};

type TestResult = Result<(), Box<dyn Error>>;

fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn local_bindings_override_global_and_union_otherwise() -> TestResult {
    let global = Section {
        variables: map(&[("a", "1")]),
        directives: BTreeMap::new(),
    };
    let local = Section {
        variables: map(&[("a", "2"), ("b", "3")]),
        directives: BTreeMap::new(),
    };

    let merged = merge_scopes(&global, &local);
    assert_eq!(merged.variables, map(&[("a", "2"), ("b", "3")]));

    Ok(())
}

#[test]
fn empty_local_scope_leaves_global_unchanged() -> TestResult {
    let global = Section {
        variables: map(&[("a", "1"), ("b", "2")]),
        directives: map(&[("$template", "<< >>")]),
    };

    let merged = merge_scopes(&global, &Section::default());
    assert_eq!(merged.variables, global.variables);
    assert_eq!(merged.directives, global.directives);

    Ok(())
}

#[test]
fn directives_merge_with_the_same_override_rule() -> TestResult {
    let global = Section {
        variables: BTreeMap::new(),
        directives: map(&[("$template", "#{{ }}")]),
    };
    let local = Section {
        variables: BTreeMap::new(),
        directives: map(&[("$template", "{{ }}")]),
    };

    let merged = merge_scopes(&global, &local);
    assert_eq!(merged.directives.get("$template").map(String::as_str), Some("{{ }}"));

    Ok(())
}

#[test]
fn template_directive_shapes_the_placeholder() -> TestResult {
    let template = resolve_template(&map(&[("$template", "<< >>")]))?;
    assert_eq!(template.placeholder("X"), "<<X>>");

    Ok(())
}

#[test]
fn missing_template_directive_falls_back_to_the_default() -> TestResult {
    let template = resolve_template(&BTreeMap::new())?;
    assert_eq!(template.placeholder("X"), "#{{X}}");

    Ok(())
}

#[test]
fn template_with_wrong_token_count_fails_resolution() {
    let one = resolve_template(&map(&[("$template", "bad")])).unwrap_err();
    assert!(one.to_string().contains("malformed template format"));

    let three = resolve_template(&map(&[("$template", "a b c")])).unwrap_err();
    assert!(three.to_string().contains("malformed template format"));
}

#[test]
fn template_split_is_on_a_single_space_only() {
    // Two consecutive spaces produce an empty middle token, which is a
    // three-token value and therefore malformed.
    let err = resolve_template(&map(&[("$template", "{{  }}")])).unwrap_err();
    assert!(err.to_string().contains("malformed template format"));
}
