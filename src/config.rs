//! Menu definition files.
//!
//! A menu is defined in JSON:
//!
//! ```json
//! {
//!   "brand": "Logo",
//!   "entries": [
//!     { "label": "Dashboard", "path": "/", "icon": "table-2" },
//!     { "label": "About", "path": "/about", "icon": { "name": "notepad-text", "size": 16 } }
//!   ],
//!   "style": { "link": "flex items-center gap-1" }
//! }
//! ```
//!
//! `brand` and every `style` field are optional.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::web::{NavEntry, NavMenu, NavStyle, DEFAULT_BRAND};

fn default_brand() -> String {
    DEFAULT_BRAND.to_owned()
}

/// A menu definition as read from disk.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct MenuConfig {
    #[serde(default = "default_brand")]
    pub brand: String,
    pub entries: Vec<NavEntry>,
    #[serde(default)]
    pub style: NavStyle,
}

impl MenuConfig {
    /// Read and parse a menu definition file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read and [`Error::Json`]
    /// if it is not a valid definition.
    pub fn load(path: &Path) -> Result<Self> {
        log::info!("Loading menu from {}", path.display());
        let json = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// # Errors
    ///
    /// Returns [`Error::Json`] if `json` is not a valid definition.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        log::debug!("Menu config: {config:?}");
        Ok(config)
    }

    /// Pretty-printed JSON for the definition.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the entries and build the menu.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidEntry`] for the first rejected entry.
    pub fn menu(self) -> Result<NavMenu> {
        Ok(NavMenu::new(self.entries)?
            .with_brand(self.brand)
            .with_style(self.style))
    }
}

impl From<&NavMenu> for MenuConfig {
    fn from(menu: &NavMenu) -> Self {
        Self {
            brand: menu.brand().to_owned(),
            entries: menu.entries().to_vec(),
            style: menu.style().clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InvalidEntry;
    use crate::web::IconName;

    #[test]
    fn minimal_definition_uses_defaults() {
        let config = MenuConfig::from_json(
            r#"{"entries": [{"label": "Dashboard", "path": "/", "icon": "table-2"}]}"#,
        )
        .unwrap();
        assert_eq!(config.brand, DEFAULT_BRAND);
        assert_eq!(config.style, NavStyle::default());
        let menu = config.menu().unwrap();
        assert_eq!(menu.len(), 1);
        assert_eq!(menu.entries()[0].icon.name, IconName::Table2);
        assert_eq!(menu.entries()[0].icon.size, 16);
    }

    #[test]
    fn default_menu_round_trips() {
        let config = MenuConfig::from(&NavMenu::default_routes());
        let parsed = MenuConfig::from_json(&config.to_json().unwrap()).unwrap();
        assert_eq!(parsed, config);
        assert_eq!(parsed.menu().unwrap(), NavMenu::default_routes());
    }

    #[test]
    fn duplicate_paths_are_rejected() {
        let config = MenuConfig::from_json(
            r#"{"entries": [
                {"label": "Home", "path": "/", "icon": "table-2"},
                {"label": "Dashboard", "path": "/", "icon": "table-2"}
            ]}"#,
        )
        .unwrap();
        assert!(matches!(
            config.menu(),
            Err(Error::InvalidEntry(InvalidEntry::DuplicatePath { index: 1, .. }))
        ));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(matches!(
            MenuConfig::from_json(r#"{"entries": [], "routes": []}"#),
            Err(Error::Json(_))
        ));
    }

    #[test]
    fn missing_file() {
        let err = MenuConfig::load(Path::new("/nonexistent/menu.json")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/menu.json"));
    }
}
