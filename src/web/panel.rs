use askama::Template;

use crate::web::view::NavView;

/// The `<nav>` side panel for a rendered menu.
#[derive(askama::Template)]
#[template(path = "nav_panel.html")]
pub struct NavPanel<'a> {
    view: &'a NavView,
}

impl<'a> NavPanel<'a> {
    pub fn new(view: &'a NavView) -> Self {
        Self { view }
    }

    pub fn to_html(&self) -> askama::Result<String> {
        let html = self.render()?;
        log::debug!("Panel HTML: {} bytes", html.len());
        Ok(html)
    }
}

#[cfg(test)]
mod tests {
    use crate::web::icon::{Icon, IconName};
    use crate::web::navbar::{NavEntry, NavMenu};

    #[test]
    fn one_list_item_per_link() {
        let html = NavMenu::default_routes().render().to_html().unwrap();
        assert_eq!(html.matches("<li ").count(), 2);
        assert_eq!(html.matches("<a ").count(), 2);
        assert!(html.contains(r#"<li data-key="/">"#));
        assert!(html.contains(r#"<li data-key="/about">"#));
        assert!(html.contains(r#"href="/about""#));
        assert!(html.contains(r#"<div class="mb-4">Logo</div>"#));
        assert!(html.contains(r#"<nav class="block w-[300px] self-stretch rounded-l bg-zinc-900 text-white">"#));
    }

    #[test]
    fn icon_comes_before_label() {
        let html = NavMenu::default_routes().render().to_html().unwrap();
        let dashboard = html.find("<span>Dashboard</span>").unwrap();
        let icon = html.find("icon-table-2").unwrap();
        let about = html.find("<span>About</span>").unwrap();
        assert!(icon < dashboard);
        assert!(dashboard < about);
        assert!(html.contains("</svg><span>Dashboard</span>"));
    }

    #[test]
    fn labels_are_escaped() {
        let menu = NavMenu::new(vec![NavEntry::new(
            "<b>Bold</b>",
            "/bold",
            Icon::new(IconName::Table2),
        )])
        .unwrap();
        let html = menu.render().to_html().unwrap();
        assert!(!html.contains("<b>"));
        assert!(html.contains("&lt;b&gt;Bold&lt;/b&gt;"));
    }

    #[test]
    fn active_link_has_aria_current() {
        let html = NavMenu::default_routes()
            .render_at("/about")
            .to_html()
            .unwrap();
        assert_eq!(html.matches(r#"aria-current="page""#).count(), 1);
        assert!(html.contains(r#"href="/about" aria-current="page""#));
    }

    #[test]
    fn empty_menu_renders_empty_list() {
        let html = NavMenu::new(Vec::new()).unwrap().render().to_html().unwrap();
        assert!(html.contains("<ul class=\"space-y-4\">"));
        assert!(!html.contains("<li"));
    }
}
