mod home_page;
mod icon;
mod navbar;
mod panel;
mod style;
mod view;

// Exports
pub use home_page::HomePage;
pub use icon::{Glyph, Icon, IconName, DEFAULT_ICON_SIZE};
pub use navbar::{NavEntry, NavMenu, DEFAULT_BRAND};
pub use panel::NavPanel;
pub use style::NavStyle;
pub use view::{reconcile, LinkChange, LinkView, NavView, Reconciliation};
