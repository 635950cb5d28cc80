//! End-to-end resolution of the documentation site fixtures
//!
//! Exercises the full flow: fixture files -> fragment stack -> effective
//! configuration -> typed views.

use docsite_core::{ColorScheme, EffectiveConfig, Resolver};
use docsite_loader::FragmentStack;
use pretty_assertions::assert_eq;
use std::path::PathBuf;
use std::sync::Arc;
use std::thread;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../test-fixtures/site")
        .join(name)
}

/// Theme defaults, then the legacy duplicate, then the current declarations
fn resolve_site() -> EffectiveConfig {
    let mut stack = FragmentStack::with_theme_defaults();
    stack
        .push_files([
            fixture("app.config.legacy.toml"),
            fixture("app.config.toml"),
            fixture("nuxt.config.yaml"),
            fixture("tokens.config.json"),
        ])
        .unwrap();
    stack.resolve(&Resolver::new()).unwrap()
}

#[test]
fn later_declaration_of_duplicate_block_wins() {
    let config = resolve_site();

    assert_eq!(config.get_str("title").unwrap(), "GDPR");
    assert_eq!(config.source_of("title"), Some("app.config"));
    assert!(config.header().unwrap().logo);
}

#[test]
fn divergent_duplicates_are_reported() {
    let config = resolve_site();

    let conflicts: Vec<_> = config
        .warnings()
        .iter()
        .map(|w| (w.path.as_str(), w.loser.as_str(), w.winner.as_str()))
        .collect();

    assert_eq!(
        conflicts,
        [
            ("description", "app.config.legacy", "app.config"),
            ("github.edit", "theme", "app.config"),
            ("header.logo", "app.config.legacy", "app.config"),
            ("header.showLinkIcon", "theme", "app.config"),
            ("title", "app.config.legacy", "app.config"),
            ("colorMode.preference", "theme", "nuxt.config"),
        ]
    );
}

#[test]
fn identical_values_across_layers_are_silent() {
    let config = resolve_site();

    assert!(config.warnings().iter().all(|w| w.path != "url"));
    assert!(config.warnings().iter().all(|w| w.path != "colorMode.fallback"));
    assert_eq!(config.source_of("colorMode.fallback"), Some("nuxt.config"));
}

#[test]
fn typed_views_describe_the_site() {
    let config = resolve_site();

    let color_mode = config.color_mode().unwrap();
    assert_eq!(color_mode.preference, ColorScheme::Custom("green".into()));
    assert_eq!(color_mode.class_for(&ColorScheme::Dark), "dark-mode");

    assert_eq!(config.build().unwrap().preset, "cloudflare_pages");
    assert_eq!(config.footer().unwrap().text_links.len(), 1);

    let primary = &config.palettes().unwrap()["primary"];
    assert_eq!(primary.get(500).unwrap().hex, "#D500A9");
}

#[test]
fn resolved_config_is_shared_read_only_across_threads() {
    let config = Arc::new(resolve_site());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let config = Arc::clone(&config);
            thread::spawn(move || config.get_str("url").map(str::to_string))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap().unwrap(), "https://akronym.io");
    }
}

#[test]
fn rebuilding_yields_identical_config() {
    assert_eq!(resolve_site(), resolve_site());
}
