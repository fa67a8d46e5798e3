use serde::{Deserialize, Serialize};

/// CSS classes applied to the panel's elements.
///
/// Defaults are Tailwind utility classes for a dark, 300px wide side panel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavStyle {
    /// The outer `<nav>`.
    pub nav: String,
    /// Padding wrapper inside the `<nav>`.
    pub inner: String,
    /// Brand block above the list.
    pub brand: String,
    /// The `<ul>` holding the links.
    pub list: String,
    /// Each `<a>`.
    pub link: String,
}

impl Default for NavStyle {
    fn default() -> Self {
        Self {
            nav: "block w-[300px] self-stretch rounded-l bg-zinc-900 text-white".to_owned(),
            inner: "p-4".to_owned(),
            brand: "mb-4".to_owned(),
            list: "space-y-4".to_owned(),
            link: "flex items-center gap-1".to_owned(),
        }
    }
}
