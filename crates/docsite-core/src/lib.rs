//! Layered configuration resolution for documentation sites
//!
//! A documentation site is configured through several partially-overlapping
//! layers: built-in defaults, theme defaults, site settings and
//! environment-specific overrides. This crate merges those layers into one
//! effective configuration:
//!
//! - **Fragments**: named, prioritized partial trees ([`ConfigFragment`])
//! - **Resolution**: deterministic last-writer-wins merge ([`Resolver`])
//! - **Provenance**: which fragment supplied every resolved leaf
//! - **Warnings**: non-fatal notices where layers disagree
//! - **Validation**: required fields, placeholders and color tokens
//!
//! The crate performs no I/O. Reading fragments from files is left to the
//! caller (see `docsite-loader`).
//!
//! # Example
//!
//! ```
//! use docsite_core::{ConfigFragment, Resolver};
//! use serde_json::json;
//!
//! let defaults = ConfigFragment::from_json("defaults", 0, json!({
//!     "title": "Docs",
//!     "colorMode": {"preference": "light", "fallback": "light"}
//! })).unwrap();
//! let site = ConfigFragment::from_json("site", 1, json!({
//!     "title": "GDPR",
//!     "colorMode": {"preference": "green"}
//! })).unwrap();
//!
//! let config = Resolver::with_required(["title"]).load(&[defaults, site]).unwrap();
//! assert_eq!(config.get_str("title").unwrap(), "GDPR");
//! assert_eq!(config.get_str("colorMode.fallback").unwrap(), "light");
//! assert_eq!(config.source_of("title"), Some("site"));
//! ```

pub mod defaults;
pub mod effective;
pub mod error;
pub mod fragment;
pub mod palette;
pub mod path;
pub mod resolver;
pub mod sections;
pub mod value;
pub mod warning;

pub use defaults::{THEME_FRAGMENT, theme_defaults};
pub use effective::EffectiveConfig;
pub use error::{Error, Result};
pub use fragment::ConfigFragment;
pub use palette::{ColorPalette, ColorToken};
pub use resolver::{DEFAULT_REQUIRED, Resolver, load};
pub use sections::{
    AsideOptions, BuildTarget, ColorModePreference, ColorScheme, FooterOptions, GithubEdit,
    HeaderOptions, SiteIdentity, Socials, TextLink,
};
pub use value::{ConfigValue, Mapping};
pub use warning::{ConflictWarning, TracingSink, WarningSink};
