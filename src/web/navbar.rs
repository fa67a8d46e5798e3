use std::borrow::Cow;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{InvalidEntry, Result};
use crate::web::icon::{Icon, IconName};
use crate::web::style::NavStyle;
use crate::web::view::{LinkView, NavView};

pub const DEFAULT_BRAND: &str = "Logo";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavEntry {
    pub label: String,
    pub path: String,
    pub icon: Icon,
}

impl NavEntry {
    pub fn new(label: impl Into<String>, path: impl Into<String>, icon: Icon) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
            icon,
        }
    }

    fn check(&self, index: usize) -> std::result::Result<(), InvalidEntry> {
        if self.path.is_empty() {
            return Err(InvalidEntry::EmptyPath { index });
        }
        if self.path.trim() != self.path {
            return Err(InvalidEntry::Whitespace {
                index,
                field: "path",
            });
        }
        if self.label.trim() != self.label {
            return Err(InvalidEntry::Whitespace {
                index,
                field: "label",
            });
        }
        Ok(())
    }

    /// Link target: the path as given, with spaces, control characters and
    /// non-ASCII percent-encoded.
    #[must_use]
    pub fn href(&self) -> Cow<'_, str> {
        encode_illegal(&self.path)
    }
}

fn encode_illegal(path: &str) -> Cow<'_, str> {
    if path.chars().all(|c| c.is_ascii_graphic()) {
        return Cow::Borrowed(path);
    }
    let mut encoded = String::with_capacity(path.len());
    let mut buf = [0_u8; 4];
    for c in path.chars() {
        if c.is_ascii_graphic() {
            encoded.push(c);
        } else {
            encoded.push_str(&urlencoding::encode(c.encode_utf8(&mut buf)));
        }
    }
    Cow::Owned(encoded)
}

// Paths are unique within a menu; they double as the keys of the rendered links.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavMenu {
    entries: Vec<NavEntry>,
    brand: String,
    style: NavStyle,
}

impl Default for NavMenu {
    fn default() -> Self {
        Self::default_routes()
    }
}

impl NavMenu {
    /// Build a menu from `entries`, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidEntry`](crate::Error::InvalidEntry) for the
    /// first entry that is malformed or reuses an earlier entry's path.
    pub fn new(entries: Vec<NavEntry>) -> Result<Self> {
        let mut seen: HashMap<&str, usize> = HashMap::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            let checked = entry.check(index).and_then(|()| {
                match seen.insert(entry.path.as_str(), index) {
                    Some(first) => Err(InvalidEntry::DuplicatePath {
                        first,
                        index,
                        path: entry.path.clone(),
                    }),
                    None => Ok(()),
                }
            });
            if let Err(e) = checked {
                log::warn!("Rejecting menu entry: {e}");
                return Err(e.into());
            }
        }
        log::debug!("Menu with {} entries", entries.len());
        Ok(Self {
            entries,
            brand: DEFAULT_BRAND.to_owned(),
            style: NavStyle::default(),
        })
    }

    #[must_use]
    pub fn default_routes() -> Self {
        Self {
            entries: vec![
                NavEntry::new("Dashboard", "/", Icon::new(IconName::Table2)),
                NavEntry::new("About", "/about", Icon::new(IconName::NotepadText)),
            ],
            brand: DEFAULT_BRAND.to_owned(),
            style: NavStyle::default(),
        }
    }

    #[must_use]
    pub fn with_brand(self, brand: impl Into<String>) -> Self {
        Self {
            brand: brand.into(),
            ..self
        }
    }

    #[must_use]
    pub fn with_style(self, style: NavStyle) -> Self {
        Self { style, ..self }
    }

    #[must_use]
    pub fn entries(&self) -> &[NavEntry] {
        &self.entries
    }

    #[must_use]
    pub fn brand(&self) -> &str {
        &self.brand
    }

    #[must_use]
    pub fn style(&self) -> &NavStyle {
        &self.style
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn render(&self) -> NavView {
        self.render_links(None)
    }

    #[must_use]
    pub fn render_at(&self, current: &str) -> NavView {
        self.render_links(Some(current))
    }

    fn render_links(&self, current: Option<&str>) -> NavView {
        let links = self
            .entries
            .iter()
            .map(|entry| LinkView {
                key: entry.path.clone(),
                href: entry.href().into_owned(),
                label: entry.label.clone(),
                glyph: entry.icon.glyph(),
                active: current == Some(entry.path.as_str()),
            })
            .collect::<Vec<_>>();
        log::debug!("Rendered {} links", links.len());
        NavView {
            brand: self.brand.clone(),
            style: self.style.clone(),
            links,
        }
    }
}
