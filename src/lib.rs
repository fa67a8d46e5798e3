//! Side-panel navigation menus rendered to HTML.
//!
//! A [`NavMenu`] is an ordered list of [`NavEntry`] values (label, path,
//! icon). [`NavMenu::render`] maps it to a [`NavView`] holding one link per
//! entry, keyed by path, which renders to HTML with [`NavView::to_html`].
//!
//! ```
//! let view = sidenav::NavMenu::default_routes().render();
//! assert_eq!(view.keys().collect::<Vec<_>>(), ["/", "/about"]);
//! let html = view.to_html().unwrap();
//! assert!(html.contains("<span>Dashboard</span>"));
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod web;

pub use config::MenuConfig;
pub use error::{Error, InvalidEntry, Result};
pub use web::{Icon, IconName, NavEntry, NavMenu, NavStyle, NavView};
