//! Rendered menu output.
//!
//! A [`NavView`] is what one render pass of a [`NavMenu`](crate::web::NavMenu)
//! produces. Every link carries a key (its entry's path) so two passes can be
//! matched up with [`reconcile`] without rebuilding links that did not change.

use std::collections::HashMap;

use crate::error::Result;
use crate::web::icon::Glyph;
use crate::web::panel::NavPanel;
use crate::web::style::NavStyle;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkView {
    pub key: String,
    pub href: String,
    pub label: String,
    pub glyph: Glyph,
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavView {
    pub brand: String,
    pub style: NavStyle,
    pub links: Vec<LinkView>,
}

impl NavView {
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.links.iter().map(|link| link.key.as_str())
    }

    pub fn to_html(&self) -> Result<String> {
        Ok(NavPanel::new(self).to_html()?)
    }
}

/// What happened to a link between two render passes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkChange {
    // `from` is the position in the previous pass.
    Kept { from: usize },
    Updated { from: usize },
    Created,
}

/// Keyed diff between two render passes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Reconciliation {
    pub changes: Vec<(String, LinkChange)>,
    pub removed: Vec<String>,
}

impl Reconciliation {
    /// True when the new pass is the previous one, link for link.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.removed.is_empty()
            && self
                .changes
                .iter()
                .enumerate()
                .all(|(index, (_, change))| *change == LinkChange::Kept { from: index })
    }

    #[must_use]
    pub fn created(&self) -> usize {
        self.changes
            .iter()
            .filter(|(_, change)| *change == LinkChange::Created)
            .count()
    }
}

/// Match the links of `next` against `prev` by key.
#[must_use]
pub fn reconcile(prev: &NavView, next: &NavView) -> Reconciliation {
    let previous = prev
        .links
        .iter()
        .enumerate()
        .map(|(index, link)| (link.key.as_str(), (index, link)))
        .collect::<HashMap<_, _>>();

    let changes = next
        .links
        .iter()
        .map(|link| {
            let change = match previous.get(link.key.as_str()) {
                Some(&(from, old)) if old == link => LinkChange::Kept { from },
                Some(&(from, _)) => LinkChange::Updated { from },
                None => LinkChange::Created,
            };
            (link.key.clone(), change)
        })
        .collect::<Vec<_>>();

    let removed = prev
        .keys()
        .filter(|key| !next.keys().any(|k| k == *key))
        .map(ToOwned::to_owned)
        .collect::<Vec<_>>();

    log::debug!(
        "Reconciled {} links ({} removed)",
        changes.len(),
        removed.len()
    );
    Reconciliation { changes, removed }
}
