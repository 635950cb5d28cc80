//! Typed views over the merged configuration tree
//!
//! Each struct mirrors one block of the site configuration. Fields absent
//! from the tree take the documentation theme's defaults.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Site identity: top-level `title`, `description`, `url`, `socials`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteIdentity {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub url: String,
    #[serde(default)]
    pub socials: Socials,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Socials {
    /// `owner/repo` slug
    #[serde(default)]
    pub github: Option<String>,
}

/// `aside` block
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AsideOptions {
    #[serde(default)]
    pub level: u32,
    /// Routes without an aside; replaced wholesale by higher layers
    #[serde(default)]
    pub exclude: Vec<String>,
}

/// `header` block
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderOptions {
    #[serde(default)]
    pub logo: bool,
    #[serde(default)]
    pub show_link_icon: bool,
}

/// `footer` block
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterOptions {
    #[serde(default)]
    pub text_links: Vec<TextLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextLink {
    pub text: String,
    pub href: String,
}

fn default_branch() -> String {
    "main".to_string()
}

/// `github` block, controlling "edit this page" links
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GithubEdit {
    #[serde(default)]
    pub edit: bool,
    #[serde(default)]
    pub dir: Option<String>,
    #[serde(default = "default_branch")]
    pub branch: String,
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub repo: Option<String>,
}

impl Default for GithubEdit {
    fn default() -> Self {
        Self {
            edit: false,
            dir: None,
            branch: default_branch(),
            owner: None,
            repo: None,
        }
    }
}

impl GithubEdit {
    /// Base URL for edit links, when editing is enabled and the repository is known
    pub fn edit_url(&self) -> Option<String> {
        if !self.edit {
            return None;
        }
        let (owner, repo) = (self.owner.as_deref()?, self.repo.as_deref()?);
        let mut url = format!("https://github.com/{owner}/{repo}/edit/{}", self.branch);
        if let Some(dir) = self.dir.as_deref().map(|d| d.trim_matches('/')) {
            if !dir.is_empty() {
                url.push('/');
                url.push_str(dir);
            }
        }
        Some(url)
    }
}

fn default_true() -> bool {
    true
}

/// `build` block naming the deployment target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildTarget {
    pub preset: String,
    #[serde(default = "default_true")]
    pub ssr: bool,
    #[serde(default)]
    pub telemetry: bool,
}

/// A color scheme identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ColorScheme {
    Light,
    Dark,
    /// Follow the operating system preference
    System,
    /// Theme-defined scheme such as `green`
    Custom(String),
}

impl ColorScheme {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
            Self::Custom(name) => name,
        }
    }
}

impl From<String> for ColorScheme {
    fn from(value: String) -> Self {
        match value.as_str() {
            "light" => Self::Light,
            "dark" => Self::Dark,
            "system" => Self::System,
            _ => Self::Custom(value),
        }
    }
}

impl From<ColorScheme> for String {
    fn from(value: ColorScheme) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn default_hid() -> String {
    "nuxt-color-mode-script".to_string()
}

fn default_global_name() -> String {
    "__NUXT_COLOR_MODE__".to_string()
}

fn default_component_name() -> String {
    "ColorScheme".to_string()
}

fn default_class_suffix() -> String {
    "-mode".to_string()
}

fn default_storage_key() -> String {
    "nuxt-color-mode".to_string()
}

fn default_fallback() -> ColorScheme {
    ColorScheme::Light
}

/// `colorMode` block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorModePreference {
    pub preference: ColorScheme,
    #[serde(default = "default_fallback")]
    pub fallback: ColorScheme,
    #[serde(default = "default_hid")]
    pub hid: String,
    #[serde(default = "default_global_name")]
    pub global_name: String,
    #[serde(default = "default_component_name")]
    pub component_name: String,
    #[serde(default)]
    pub class_prefix: String,
    #[serde(default = "default_class_suffix")]
    pub class_suffix: String,
    /// Persistence identifier used by the consumer
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
}

impl ColorModePreference {
    /// Class name applied to the document root for `scheme`
    pub fn class_for(&self, scheme: &ColorScheme) -> String {
        format!("{}{}{}", self.class_prefix, scheme, self.class_suffix)
    }
}
