//! Active navigation link resolution

use crate::domain::value_objects::PagePath;

/// Whether a nav link pointing at `href` represents the current page.
///
/// On the default page the bare `#` link also counts as active.
pub fn is_active_link(href: &str, page: &PagePath, default_page: &str) -> bool {
    page.is(href) || (page.is(default_page) && href == "#")
}

#[cfg(test)]
mod tests {
    use super::*;

    const HREFS: [&str; 4] = ["#", "services.html", "booking.html", "contact.html"];

    fn active(pathname: &str) -> Vec<&'static str> {
        let page = PagePath::from_location(pathname, "index.html");
        HREFS
            .into_iter()
            .filter(|href| is_active_link(href, &page, "index.html"))
            .collect()
    }

    #[test]
    fn test_exactly_one_link_for_each_page() {
        assert_eq!(active("/services.html"), vec!["services.html"]);
        assert_eq!(active("/site/booking.html"), vec!["booking.html"]);
        assert_eq!(active("/"), vec!["#"]);
        assert_eq!(active(""), vec!["#"]);
        assert_eq!(active("/index.html"), vec!["#"]);
    }

    #[test]
    fn test_unknown_page_has_no_active_link() {
        assert!(active("/pricing.html").is_empty());
    }
}
