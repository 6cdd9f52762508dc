//! NavigationController - mobile menu toggle and active link highlight

use crate::application::dto::UiEvent;
use crate::application::ports::{EventResponse, PageBehavior};
use crate::application::services::PageContext;
use crate::domain::entities::{Document, NodeId};
use crate::domain::errors::DomainError;
use crate::domain::services::is_active_link;
use crate::domain::value_objects::PagePath;
use crate::selector::Selector;

const ACTIVE: &str = "active";

/// Mark the nav link for `page` active and clear the rest. Returns the
/// number of links marked.
pub fn highlight_active_links(
    doc: &mut Document,
    page: &PagePath,
    default_page: &str,
) -> Result<usize, DomainError> {
    let mut marked = 0;
    for link in doc.select(".nav-link")? {
        let active = doc
            .attribute(link, "href")
            .is_some_and(|href| is_active_link(href, page, default_page));
        doc.set_class(link, ACTIVE, active);
        if active {
            marked += 1;
        }
    }
    Ok(marked)
}

/// Controller for the hamburger menu
pub struct NavigationController {
    menu: Option<(NodeId, NodeId)>,
    nav_link: Selector,
}

impl NavigationController {
    pub fn attach(ctx: &mut PageContext<'_>) -> Result<Self, DomainError> {
        let default_page = &ctx.config.navigation.default_page;
        let page = ctx.window.page(default_page);
        let marked = highlight_active_links(ctx.document, &page, default_page)?;
        tracing::debug!(page = page.as_str(), marked, "active nav link set");

        let hamburger = ctx.document.select_one(".hamburger")?;
        let menu = ctx.document.select_one(".nav-menu")?;
        if hamburger.is_none() || menu.is_none() {
            tracing::debug!("no hamburger menu on this page");
        }

        Ok(Self {
            menu: hamburger.zip(menu),
            nav_link: Selector::parse(".nav-link")?,
        })
    }

    fn set_open(doc: &mut Document, hamburger: NodeId, menu: NodeId, open: bool) {
        doc.set_class(hamburger, ACTIVE, open);
        doc.set_class(menu, ACTIVE, open);
    }
}

impl PageBehavior for NavigationController {
    fn name(&self) -> &'static str {
        "navigation"
    }

    fn handle(
        &mut self,
        ctx: &mut PageContext<'_>,
        event: &UiEvent,
    ) -> Result<EventResponse, DomainError> {
        let (UiEvent::Click { target }, Some((hamburger, menu))) = (event, self.menu) else {
            return Ok(EventResponse::Ignored);
        };
        let doc = &mut *ctx.document;

        if doc.contains(hamburger, *target) {
            doc.toggle_class(hamburger, ACTIVE);
            doc.toggle_class(menu, ACTIVE);
            return Ok(EventResponse::Handled);
        }

        let on_link = doc.closest(*target, &self.nav_link).is_some();
        if on_link || !doc.contains(menu, *target) {
            Self::set_open(doc, hamburger, menu, false);
            return Ok(EventResponse::Handled);
        }
        Ok(EventResponse::Ignored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::controllers::test_support::Harness;

    struct Nav {
        h: Harness,
        hamburger: NodeId,
        menu: NodeId,
        links: Vec<NodeId>,
        outside: NodeId,
    }

    fn nav_page(location: &str) -> Nav {
        let mut h = Harness::new(location);
        let body = h.body();
        let header = h.append(body, "nav", &[("class", "navbar")]);
        let hamburger = h.append(header, "div", &[("class", "hamburger")]);
        let menu = h.append(header, "ul", &[("class", "nav-menu")]);
        let links = ["#", "services.html", "booking.html"]
            .iter()
            .map(|href| {
                let item = h.append(menu, "li", &[]);
                h.append(item, "a", &[("class", "nav-link"), ("href", *href)])
            })
            .collect();
        let outside = h.append(body, "section", &[("id", "hero")]);
        Nav {
            h,
            hamburger,
            menu,
            links,
            outside,
        }
    }

    fn active_links(nav: &Nav) -> Vec<NodeId> {
        nav.links
            .iter()
            .copied()
            .filter(|l| nav.h.document.has_class(*l, "active"))
            .collect()
    }

    #[test]
    fn test_index_highlights_hash_link() {
        let mut nav = nav_page("/");
        NavigationController::attach(&mut nav.h.ctx()).unwrap();
        assert_eq!(active_links(&nav), vec![nav.links[0]]);
    }

    #[test]
    fn test_exactly_one_active_link_per_page() {
        for (path, index) in [("/site/services.html", 1), ("/booking.html", 2), ("/index.html", 0)] {
            let mut nav = nav_page(path);
            nav.h.document.add_class(nav.links[1], "active");
            NavigationController::attach(&mut nav.h.ctx()).unwrap();
            assert_eq!(active_links(&nav), vec![nav.links[index]], "{}", path);
        }
    }

    #[test]
    fn test_hamburger_toggles_menu() {
        let mut nav = nav_page("/");
        let mut controller = NavigationController::attach(&mut nav.h.ctx()).unwrap();
        let click = UiEvent::Click {
            target: nav.hamburger,
        };

        controller.handle(&mut nav.h.ctx(), &click).unwrap();
        assert!(nav.h.document.has_class(nav.hamburger, "active"));
        assert!(nav.h.document.has_class(nav.menu, "active"));

        controller.handle(&mut nav.h.ctx(), &click).unwrap();
        assert!(!nav.h.document.has_class(nav.menu, "active"));
    }

    #[test]
    fn test_link_and_outside_clicks_close_menu() {
        let mut nav = nav_page("/");
        let mut controller = NavigationController::attach(&mut nav.h.ctx()).unwrap();
        let open = UiEvent::Click {
            target: nav.hamburger,
        };

        controller.handle(&mut nav.h.ctx(), &open).unwrap();
        controller
            .handle(&mut nav.h.ctx(), &UiEvent::Click { target: nav.links[2] })
            .unwrap();
        assert!(!nav.h.document.has_class(nav.menu, "active"));

        controller.handle(&mut nav.h.ctx(), &open).unwrap();
        controller
            .handle(&mut nav.h.ctx(), &UiEvent::Click { target: nav.outside })
            .unwrap();
        assert!(!nav.h.document.has_class(nav.hamburger, "active"));
    }

    #[test]
    fn test_click_inside_menu_keeps_it_open() {
        let mut nav = nav_page("/");
        let mut controller = NavigationController::attach(&mut nav.h.ctx()).unwrap();

        controller
            .handle(&mut nav.h.ctx(), &UiEvent::Click { target: nav.hamburger })
            .unwrap();
        let response = controller
            .handle(&mut nav.h.ctx(), &UiEvent::Click { target: nav.menu })
            .unwrap();

        assert_eq!(response, EventResponse::Ignored);
        assert!(nav.h.document.has_class(nav.menu, "active"));
    }

    #[test]
    fn test_missing_hamburger_is_a_no_op() {
        let mut h = Harness::new("/");
        let body = h.body();
        let menu = h.append(body, "ul", &[("class", "nav-menu")]);
        let mut controller = NavigationController::attach(&mut h.ctx()).unwrap();

        let response = controller
            .handle(&mut h.ctx(), &UiEvent::Click { target: body })
            .unwrap();
        assert_eq!(response, EventResponse::Ignored);
        assert!(!h.document.has_class(menu, "active"));
    }
}
