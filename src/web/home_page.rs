use askama::Template;

use crate::error::Result;
use crate::web::view::NavView;

/// Minimal HTML document hosting the nav panel, for previewing a menu.
#[derive(Clone, askama::Template)]
#[template(path = "index.html")]
pub struct HomePage {
    title: String,
    stylesheet: Option<String>,
    panel: String,
}

impl HomePage {
    /// # Errors
    ///
    /// Returns [`Error::Render`](crate::Error::Render) if the panel fails to render.
    pub fn new(title: impl Into<String>, view: &NavView) -> Result<Self> {
        Ok(Self {
            title: title.into(),
            stylesheet: None,
            panel: view.to_html()?,
        })
    }

    #[must_use]
    pub fn with_stylesheet(self, href: impl Into<String>) -> Self {
        Self {
            stylesheet: Some(href.into()),
            ..self
        }
    }

    /// # Errors
    ///
    /// Returns [`Error::Render`](crate::Error::Render) if the template fails.
    pub fn to_html(&self) -> Result<String> {
        Ok(self.render()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web::navbar::NavMenu;

    #[test]
    fn page_embeds_panel() {
        let view = NavMenu::default_routes().render();
        let html = HomePage::new("Dashboard", &view).unwrap().to_html().unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Dashboard</title>"));
        assert!(html.contains(&view.to_html().unwrap()));
        assert!(!html.contains("stylesheet"));
    }

    #[test]
    fn optional_stylesheet() {
        let view = NavMenu::default_routes().render();
        let html = HomePage::new("Menu", &view)
            .unwrap()
            .with_stylesheet("/style.css")
            .to_html()
            .unwrap();
        assert!(html.contains(r#"<link rel="stylesheet" href="/style.css">"#));
    }
}
