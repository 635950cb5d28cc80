//! Built-in theme defaults
//!
//! The documentation theme ships defaults for its color-mode module and its
//! navigation blocks. Site fragments layered above only need to name what
//! they change.

use crate::fragment::ConfigFragment;
use crate::value::{ConfigValue, Mapping};
use serde_json::json;

/// Name used for the theme defaults fragment
pub const THEME_FRAGMENT: &str = "theme";

/// The theme defaults tree
pub fn theme_tree() -> Mapping {
    let tree = json!({
        "aside": {
            "level": 0,
            "exclude": []
        },
        "header": {
            "logo": false,
            "showLinkIcon": false
        },
        "github": {
            "edit": false,
            "branch": "main"
        },
        "colorMode": {
            "preference": "system",
            "fallback": "light",
            "hid": "nuxt-color-mode-script",
            "globalName": "__NUXT_COLOR_MODE__",
            "componentName": "ColorScheme",
            "classPrefix": "",
            "classSuffix": "-mode",
            "storageKey": "nuxt-color-mode"
        },
        "build": {
            "ssr": true,
            "telemetry": false
        }
    });

    match ConfigValue::from(tree) {
        ConfigValue::Mapping(map) => map,
        _ => Mapping::new(),
    }
}

/// Theme defaults as a fragment at the given priority
pub fn theme_defaults(priority: i64) -> ConfigFragment {
    ConfigFragment::new(THEME_FRAGMENT, priority, theme_tree())
}
