//! Loading fragment files from disk and resolving them

use docsite_core::{ColorScheme, Resolver};
use docsite_loader::{Error, FragmentStack, OVERRIDES_FRAGMENT};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const APP_CONFIG: &str = r#"
title = "GDPR"
description = "Wrangle Directus permissions with ease"
url = "https://akronym.io"

[socials]
github = "akronym-org/gdpr"

[aside]
level = 0
exclude = []

[header]
logo = true
showLinkIcon = true

[[footer.textLinks]]
text = "akronym.io"
href = "https://akronym.io"

[github]
edit = true
dir = "docs/content"
branch = "main"
owner = "akronym-org"
repo = "gdpr"
"#;

const NUXT_CONFIG: &str = r#"
build:
  preset: cloudflare_pages
colorMode:
  preference: green
  fallback: light
  classSuffix: "-mode"
"#;

const TOKENS_CONFIG: &str = r##"{
  "color": {
    "primary": {
      "50": "#FCE3F3",
      "500": "#D500A9",
      "900": "#1D000F"
    }
  }
}"##;

fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

fn site_files(dir: &TempDir) -> Vec<PathBuf> {
    vec![
        write(dir.path(), "app.config.toml", APP_CONFIG),
        write(dir.path(), "nuxt.config.yaml", NUXT_CONFIG),
        write(dir.path(), "tokens.config.json", TOKENS_CONFIG),
    ]
}

#[test]
fn resolves_mixed_format_stack() {
    let temp_dir = TempDir::new().unwrap();
    let mut stack = FragmentStack::with_theme_defaults();
    stack.push_files(site_files(&temp_dir)).unwrap();

    let config = stack.resolve(&Resolver::new()).unwrap();

    assert_eq!(config.get_str("title").unwrap(), "GDPR");
    assert_eq!(
        config.get_str("footer.textLinks[0].href").unwrap(),
        "https://akronym.io"
    );
    assert_eq!(
        config.color_mode().unwrap().preference,
        ColorScheme::Custom("green".into())
    );
    assert_eq!(config.source_of("colorMode.storageKey"), Some("theme"));
    assert_eq!(config.source_of("build.preset"), Some("nuxt.config"));
    assert_eq!(config.palettes().unwrap()["primary"].len(), 3);
}

#[test]
fn fragments_are_named_after_file_stem() {
    let temp_dir = TempDir::new().unwrap();
    let mut stack = FragmentStack::new();
    stack.push_files(site_files(&temp_dir)).unwrap();

    let names: Vec<_> = stack.fragments().iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["app.config", "nuxt.config", "tokens.config"]);
}

#[test]
fn later_file_wins() {
    let temp_dir = TempDir::new().unwrap();
    let mut files = site_files(&temp_dir);
    files.push(write(
        temp_dir.path(),
        "production.toml",
        "title = \"GDPR Docs\"\n[aside]\nexclude = [\"/internal\"]\n",
    ));

    let mut stack = FragmentStack::with_theme_defaults();
    stack.push_files(&files).unwrap();
    let config = stack.resolve(&Resolver::new()).unwrap();

    assert_eq!(config.get_str("title").unwrap(), "GDPR Docs");
    assert_eq!(config.aside().unwrap().exclude, vec!["/internal".to_string()]);
    assert!(
        config
            .warnings()
            .iter()
            .any(|w| w.path == "title" && w.loser == "app.config" && w.winner == "production")
    );
}

#[test]
fn overrides_sit_above_files() {
    let temp_dir = TempDir::new().unwrap();
    let mut stack = FragmentStack::with_theme_defaults();
    stack.push_files(site_files(&temp_dir)).unwrap();
    stack
        .push_assignments(["colorMode.preference=dark", "header.logo=false"])
        .unwrap();

    let config = stack.resolve(&Resolver::new()).unwrap();

    assert_eq!(config.color_mode().unwrap().preference, ColorScheme::Dark);
    assert!(!config.header().unwrap().logo);
    assert_eq!(config.source_of("header.logo"), Some(OVERRIDES_FRAGMENT));
}

#[test]
fn missing_file_reports_path() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("absent.toml");

    let err = FragmentStack::new().push_file(&missing).unwrap_err();

    match err {
        Error::Io { path, .. } => assert_eq!(path, missing),
        other => panic!("expected Io error, got {other:?}"),
    }
}

#[test]
fn invalid_token_in_file_fails_resolution() {
    let temp_dir = TempDir::new().unwrap();
    let mut files = site_files(&temp_dir);
    files.push(write(
        temp_dir.path(),
        "broken.yml",
        "color:\n  primary:\n    500: D500A\n",
    ));

    let mut stack = FragmentStack::with_theme_defaults();
    stack.push_files(&files).unwrap();

    let err = stack.resolve(&Resolver::new()).unwrap_err();
    assert!(
        matches!(
            err,
            Error::Core(docsite_core::Error::InvalidColorToken { ref level, .. }) if level == "500"
        ),
        "got: {err:?}"
    );
}
