//! Page identity and page events
//!
//! The host page decides which view to build and forwards user
//! interaction back to the controller as `PageEvent`s.

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Which view the page wants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageType {
    /// Full list with category tabs
    News,
    /// Latest-news summary
    Top,
}

impl PageType {
    /// Guess the page type from a URL path.
    ///
    /// `news.html` wins over the index rules, so `/news.html` is `News`
    /// and `/` or `/index.html` is `Top`. Other paths render nothing.
    pub fn from_path(path: &str) -> Option<PageType> {
        if path.contains("news.html") {
            Some(PageType::News)
        } else if path.contains("index.html") || path.ends_with('/') {
            Some(PageType::Top)
        } else {
            None
        }
    }
}

impl fmt::Display for PageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageType::News => write!(f, "news"),
            PageType::Top => write!(f, "top"),
        }
    }
}

impl FromStr for PageType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "news" => Ok(PageType::News),
            "top" => Ok(PageType::Top),
            _ => Err(ConfigError::UnknownPageType(s.to_string())),
        }
    }
}

/// Events the host page delivers to the controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    /// The page finished loading and wants the given view
    Ready(PageType),
    /// A category tab was activated
    TabActivated(String),
}
