//! Small fixed-size vector icons for menu entries.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Pixel size used when a menu definition does not give one.
pub const DEFAULT_ICON_SIZE: u16 = 16;

const TABLE_2_PATHS: &str = r#"<path d="M9 3H5a2 2 0 0 0-2 2v4m6-6h10a2 2 0 0 1 2 2v4M9 3v18m0 0h10a2 2 0 0 0 2-2V9M9 21H5a2 2 0 0 1-2-2V9m0 0h18"/>"#;

const NOTEPAD_TEXT_PATHS: &str = r#"<path d="M8 2v4"/><path d="M12 2v4"/><path d="M16 2v4"/><rect width="16" height="18" x="4" y="4" rx="2"/><path d="M8 10h6"/><path d="M8 14h8"/><path d="M8 18h5"/>"#;

/// Icon identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum IconName {
    /// A table with a header row.
    Table2,
    /// A notepad with lines of text.
    NotepadText,
    /// Anything else, resolved against an SVG sprite sheet on the page.
    Custom(String),
}

impl IconName {
    /// Name as used in menu definitions and CSS classes.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Table2 => "table-2",
            Self::NotepadText => "notepad-text",
            Self::Custom(name) => name,
        }
    }

    fn paths(&self) -> Option<&'static str> {
        match self {
            Self::Table2 => Some(TABLE_2_PATHS),
            Self::NotepadText => Some(NOTEPAD_TEXT_PATHS),
            Self::Custom(_) => None,
        }
    }
}

impl From<String> for IconName {
    fn from(name: String) -> Self {
        match name.as_str() {
            "table-2" => Self::Table2,
            "notepad-text" => Self::NotepadText,
            _ => Self::Custom(name),
        }
    }
}

impl From<&str> for IconName {
    fn from(name: &str) -> Self {
        name.to_string().into()
    }
}

impl From<IconName> for String {
    fn from(name: IconName) -> Self {
        match name {
            IconName::Custom(name) => name,
            builtin => builtin.name().to_string(),
        }
    }
}

impl fmt::Display for IconName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An icon request: which glyph, at what pixel size.
///
/// Menu definitions may give just the name (`"table-2"`) or the full
/// form (`{"name": "table-2", "size": 20}`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "IconRepr")]
pub struct Icon {
    pub name: IconName,
    pub size: u16,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IconRepr {
    Name(IconName),
    Full {
        name: IconName,
        #[serde(default = "default_icon_size")]
        size: u16,
    },
}

const fn default_icon_size() -> u16 {
    DEFAULT_ICON_SIZE
}

impl From<IconRepr> for Icon {
    fn from(repr: IconRepr) -> Self {
        match repr {
            IconRepr::Name(name) => Self::new(name),
            IconRepr::Full { name, size } => Self { name, size },
        }
    }
}

impl Icon {
    /// Icon at the default size.
    pub fn new(name: impl Into<IconName>) -> Self {
        Self {
            name: name.into(),
            size: DEFAULT_ICON_SIZE,
        }
    }

    #[must_use]
    pub fn with_size(self, size: u16) -> Self {
        Self { size, ..self }
    }

    /// Resolve the icon into a renderable glyph.
    #[must_use]
    pub fn glyph(&self) -> Glyph {
        let sprite = match self.name {
            IconName::Custom(ref name) => Some(name.clone()),
            _ => None,
        };
        Glyph {
            name: self.name.name().to_string(),
            size: self.size,
            paths: self.name.paths().unwrap_or_default(),
            sprite,
        }
    }
}

/// Inline `<svg>` markup for one icon, `size` pixels square.
///
/// `Display` writes the markup.
#[derive(Debug, Clone, PartialEq, Eq, askama::Template)]
#[template(
    source = r##"<svg xmlns="http://www.w3.org/2000/svg" width="{{ size }}" height="{{ size }}" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" class="icon icon-{{ name }}" aria-hidden="true">{% match sprite %}{% when Some with (id) %}<use href="#{{ id }}"></use>{% when None %}{{ paths|safe }}{% endmatch %}</svg>"##,
    ext = "html"
)]
pub struct Glyph {
    name: String,
    size: u16,
    paths: &'static str,
    sprite: Option<String>,
}

impl Glyph {
    /// Icon name the glyph was resolved from.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Width and height in pixels.
    #[must_use]
    pub const fn size(&self) -> u16 {
        self.size
    }
}
