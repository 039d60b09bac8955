use std::fmt::Display;

use strum_macros::EnumIter;

/// Pages the shell knows about, keyed by the file they are served from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Page {
    Home,
    Explore,
    Profile,
    Notifications,
    CreatePost,
    Login,
    Signup,
    Other,
}

/// What a page demands of the session before it may be viewed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum AccessClass {
    RequiresAuthenticated,
    RequiresAnonymous,
    Unrestricted,
}

impl Page {
    /// The root path (empty segment) is served by the home page.
    pub fn from_segment(segment: &str) -> Self {
        match segment {
            "" | "index.html" => Page::Home,
            "explore.html" => Page::Explore,
            "profile.html" => Page::Profile,
            "notifications.html" => Page::Notifications,
            "create-post.html" => Page::CreatePost,
            "login.html" => Page::Login,
            "signup.html" => Page::Signup,
            _ => Page::Other,
        }
    }

    pub fn file_name(self) -> Option<&'static str> {
        match self {
            Page::Home => Some("index.html"),
            Page::Explore => Some("explore.html"),
            Page::Profile => Some("profile.html"),
            Page::Notifications => Some("notifications.html"),
            Page::CreatePost => Some("create-post.html"),
            Page::Login => Some("login.html"),
            Page::Signup => Some("signup.html"),
            Page::Other => None,
        }
    }

    pub fn access_class(self) -> AccessClass {
        match self {
            Page::Home | Page::Profile | Page::CreatePost | Page::Notifications => {
                AccessClass::RequiresAuthenticated
            }
            Page::Login | Page::Signup => AccessClass::RequiresAnonymous,
            Page::Explore | Page::Other => AccessClass::Unrestricted,
        }
    }
}

impl Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.file_name().unwrap_or("other"))
    }
}

/// The current page as seen at load time: the raw last path segment plus the
/// page it resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageId {
    segment: String,
    page: Page,
}

impl PageId {
    /// Takes `location.pathname` and keeps only its last segment.
    pub fn from_pathname(pathname: &str) -> Self {
        Self::from_segment(pathname.rsplit('/').next().unwrap_or(""))
    }

    pub fn from_segment(segment: impl Into<String>) -> Self {
        let segment = segment.into();
        let page = Page::from_segment(&segment);
        PageId { segment, page }
    }

    pub fn segment(&self) -> &str {
        &self.segment
    }

    pub fn page(&self) -> Page {
        self.page
    }
}

impl From<Page> for PageId {
    fn from(page: Page) -> Self {
        PageId {
            segment: page.file_name().unwrap_or_default().to_string(),
            page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn root_path_is_home() {
        assert_eq!(PageId::from_pathname("/").page(), Page::Home);
        assert_eq!(PageId::from_pathname("/app/").page(), Page::Home);
        assert_eq!(PageId::from_pathname("").page(), Page::Home);
        assert_eq!(
            PageId::from_pathname("/app/").page().access_class(),
            PageId::from_pathname("/app/index.html").page().access_class()
        );
    }

    #[test]
    fn last_segment_is_kept() {
        let id = PageId::from_pathname("/static/pages/notifications.html");
        assert_eq!(id.segment(), "notifications.html");
        assert_eq!(id.page(), Page::Notifications);
    }

    #[test]
    fn unknown_pages_are_unrestricted() {
        let id = PageId::from_pathname("/post.html");
        assert_eq!(id.page(), Page::Other);
        assert_eq!(id.page().access_class(), AccessClass::Unrestricted);
        assert_eq!(Page::Explore.access_class(), AccessClass::Unrestricted);
    }

    #[test]
    fn file_names_round_trip() {
        for page in Page::iter().filter(|p| *p != Page::Other) {
            let name = page.file_name().expect("named page");
            assert_eq!(Page::from_segment(name), page);
            assert_eq!(PageId::from(page).page(), page);
        }
    }

    #[test]
    fn access_table_matches_site_layout() {
        let private: Vec<_> = Page::iter()
            .filter(|p| p.access_class() == AccessClass::RequiresAuthenticated)
            .collect();
        let public: Vec<_> = Page::iter()
            .filter(|p| p.access_class() == AccessClass::RequiresAnonymous)
            .collect();
        assert_eq!(
            private,
            vec![Page::Home, Page::Profile, Page::Notifications, Page::CreatePost]
        );
        assert_eq!(public, vec![Page::Login, Page::Signup]);
        assert!(private.iter().all(|p| !public.contains(p)));
    }

    #[test]
    fn access_class_display() {
        assert_eq!(
            AccessClass::RequiresAuthenticated.to_string(),
            "requires-authenticated"
        );
        assert_eq!(Page::Other.to_string(), "other");
        assert_eq!(Page::CreatePost.to_string(), "create-post.html");
    }
}
