//! Every `t!("...")` literal in `src/` must resolve in the fallback locale.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

const FTL_FILENAME: &str = "bikeshare-ui.ftl";

fn is_key_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-')
}

fn ftl_keys(content: &str) -> BTreeSet<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.starts_with('#') && !line.starts_with('-'))
        .filter_map(|line| line.split_once('='))
        .map(|(id, _)| id.trim())
        .filter(|id| !id.is_empty() && id.chars().all(is_key_char))
        .map(str::to_string)
        .collect()
}

/// Literal first arguments of `t!` calls (not `format!` and friends). Anything built
/// at runtime is not seen.
fn referenced_keys(content: &str, found: &mut BTreeSet<String>) {
    const NEEDLE: &str = "t!(\"";
    let mut rest = content;
    while let Some(pos) = rest.find(NEEDLE) {
        let standalone = rest[..pos]
            .chars()
            .next_back()
            .map_or(true, |c| !(c.is_alphanumeric() || c == '_'));
        rest = &rest[pos + NEEDLE.len()..];
        let Some(end) = rest.find('"') else { break };
        let key = &rest[..end];
        if standalone && !key.is_empty() && key.chars().all(is_key_char) {
            found.insert(key.to_string());
        }
        rest = &rest[end..];
    }
}

fn walk(dir: &Path, found: &mut BTreeSet<String>) {
    let Ok(entries) = fs::read_dir(dir) else { return };
    for path in entries.flatten().map(|e| e.path()) {
        if path.is_dir() {
            walk(&path, found);
        } else if path.extension().and_then(|s| s.to_str()) == Some("rs") {
            if let Ok(content) = fs::read_to_string(&path) {
                referenced_keys(&content, found);
            }
        }
    }
}

#[test]
fn referenced_keys_exist_in_fallback() {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let fallback = fs::read_to_string(root.join("i18n/en-US").join(FTL_FILENAME))
        .expect("fallback FTL file readable");
    let defined = ftl_keys(&fallback);

    let mut used = BTreeSet::new();
    walk(&root.join("src"), &mut used);
    assert!(used.len() > 20, "expected many t! lookups, found {}", used.len());

    let missing: Vec<_> = used.difference(&defined).cloned().collect();
    assert!(
        missing.is_empty(),
        "keys used in src/ but missing from en-US:\n{}",
        missing.join("\n")
    );
}

#[test]
fn scanner_picks_up_macro_arguments() {
    let mut found = BTreeSet::new();
    referenced_keys(
        r#"let a = t!("nav-day"); t!("weather-filter-option", code = 2); format!("plain-text")"#,
        &mut found,
    );
    assert_eq!(
        found.into_iter().collect::<Vec<_>>(),
        vec!["nav-day".to_string(), "weather-filter-option".to_string()]
    );
}
