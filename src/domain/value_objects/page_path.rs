//! PagePath value object - the current page's base filename

/// Base filename of the page currently shown (`services.html`, ...)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PagePath(String);

impl PagePath {
    /// Take the last segment of a location path, using `default_page` when
    /// the path is empty or ends in a slash
    pub fn from_location(pathname: &str, default_page: &str) -> Self {
        let last = pathname.rsplit('/').next().unwrap_or("");
        if last.is_empty() {
            Self(default_page.to_string())
        } else {
            Self(last.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is(&self, page: &str) -> bool {
        self.0 == page
    }
}
