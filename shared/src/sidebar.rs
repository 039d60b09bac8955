use crate::{
    dom::{
        HIDDEN_CLASS, LOGOUT_BUTTON_ID, Mount, NOTIFICATION_BADGE_ID, NOTIFICATIONS_LINK_ID,
        PROFILE_LINK_ID,
    },
    models::{Page, PageId, SessionIdentity},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Authenticated,
    Anonymous,
}

/// Which sidebar link is highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum ActiveTag {
    Home,
    Explore,
    Notifications,
    Profile,
    Other,
}

impl ActiveTag {
    pub fn for_page(variant: Variant, page: &PageId) -> Self {
        match (variant, page.page()) {
            (Variant::Authenticated, Page::Home) => ActiveTag::Home,
            (_, Page::Explore) => ActiveTag::Explore,
            (Variant::Authenticated, Page::Notifications) => ActiveTag::Notifications,
            (Variant::Authenticated, _) if page.segment().starts_with("profile.html") => {
                ActiveTag::Profile
            }
            _ => ActiveTag::Other,
        }
    }
}

/// A rendered sidebar. Never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    variant: Variant,
    active: ActiveTag,
    html: String,
}

impl Fragment {
    /// Builds the sidebar for the viewer. Holding an identity selects the
    /// authenticated variant.
    pub fn build(identity: Option<&SessionIdentity>, page: &PageId) -> Self {
        match identity {
            Some(identity) => {
                let active = ActiveTag::for_page(Variant::Authenticated, page);
                Fragment {
                    variant: Variant::Authenticated,
                    active,
                    html: authenticated_html(active, identity),
                }
            }
            None => {
                let active = ActiveTag::for_page(Variant::Anonymous, page);
                Fragment {
                    variant: Variant::Anonymous,
                    active,
                    html: anonymous_html(active),
                }
            }
        }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn active(&self) -> ActiveTag {
        self.active
    }

    pub fn html(&self) -> &str {
        &self.html
    }
}

/// Replaces the mount's content with the viewer's sidebar. Pages without a
/// mount get nothing and `None` comes back.
pub fn render<M: Mount>(
    mount: Option<M>,
    identity: Option<&SessionIdentity>,
    page: &PageId,
) -> Option<Fragment> {
    let Some(mount) = mount else {
        tracing::debug!(segment = page.segment(), "no sidebar mount on this page");
        return None;
    };
    let fragment = Fragment::build(identity, page);
    tracing::debug!(
        variant = ?fragment.variant,
        active = %fragment.active,
        "rendering sidebar"
    );
    mount.replace_content(fragment.html());
    Some(fragment)
}

fn active_class(active: ActiveTag, link: ActiveTag) -> &'static str {
    if active == link { "active" } else { "" }
}

fn authenticated_html(active: ActiveTag, identity: &SessionIdentity) -> String {
    let home = active_class(active, ActiveTag::Home);
    let explore = active_class(active, ActiveTag::Explore);
    let notifications = active_class(active, ActiveTag::Notifications);
    let profile = active_class(active, ActiveTag::Profile);
    let user_id = identity.url_encoded();
    format!(
        r##"
        <aside class="w-64 flex-shrink-0 bg-white border-r border-gray-200 hidden md:block">
            <div class="p-6">
                <h1 class="text-3xl font-extrabold text-gray-800">
                    <a href="index.html"><span class="text-emerald-500">Echo</span></a>
                </h1>
            </div>
            <nav class="mt-6 px-4">
                <a href="index.html" class="sidebar-link {home} flex items-center px-4 py-3 text-gray-500 hover:bg-gray-100 rounded-lg">
                    <i class="fas fa-home w-6 text-center"></i>
                    <span class="ml-4">Home</span>
                </a>
                <a href="explore.html" class="sidebar-link {explore} flex items-center px-4 py-3 text-gray-500 hover:bg-gray-100 rounded-lg mt-2">
                    <i class="fas fa-compass w-6 text-center"></i>
                    <span class="ml-4">Explore</span>
                </a>
                <a href="notifications.html" id="{NOTIFICATIONS_LINK_ID}" class="sidebar-link {notifications} flex items-center justify-between px-4 py-3 text-gray-500 hover:bg-gray-100 rounded-lg mt-2">
                    <div class="flex items-center">
                        <i class="fas fa-bell w-6 text-center"></i>
                        <span class="ml-4">Notifications</span>
                    </div>
                    <span id="{NOTIFICATION_BADGE_ID}" class="{HIDDEN_CLASS} w-5 h-5 bg-red-500 text-white text-xs font-bold rounded-full flex items-center justify-center"></span>
                </a>
                <a href="profile.html?user_id={user_id}" id="{PROFILE_LINK_ID}" class="sidebar-link {profile} flex items-center px-4 py-3 text-gray-500 hover:bg-gray-100 rounded-lg mt-2">
                    <i class="fas fa-user w-6 text-center"></i>
                    <span class="ml-4">Profile</span>
                </a>

                <div class="border-t my-4"></div>
                <a href="#" id="{LOGOUT_BUTTON_ID}" class="sidebar-link flex items-center px-4 py-3 text-red-500 hover:bg-red-50 rounded-lg mt-2">
                    <i class="fas fa-sign-out-alt w-6 text-center"></i>
                    <span class="ml-4">Logout</span>
                </a>
            </nav>
            <div class="px-6 mt-8">
                <a href="create-post.html" class="block w-full text-center bg-emerald-500 text-white font-semibold px-5 py-3 rounded-lg hover:bg-emerald-600 transition-colors">
                    New Post
                </a>
            </div>
        </aside>
    "##
    )
}

fn anonymous_html(active: ActiveTag) -> String {
    let explore = active_class(active, ActiveTag::Explore);
    format!(
        r##"
        <aside class="w-64 flex-shrink-0 bg-white border-r border-gray-200 hidden md:block">
            <div class="p-6">
                <h1 class="text-3xl font-extrabold text-gray-800">
                    <a href="explore.html"><span class="text-emerald-500">Echo</span></a>
                </h1>
            </div>
            <nav class="mt-6 px-4">
                <a href="explore.html" class="sidebar-link {explore} flex items-center px-4 py-3 text-gray-500 hover:bg-gray-100 rounded-lg mt-2">
                    <i class="fas fa-compass w-6 text-center"></i>
                    <span class="ml-4">Explore</span>
                </a>

                <div class="border-t my-4"></div>
                <a href="login.html" class="sidebar-link flex items-center px-4 py-3 text-gray-500 hover:bg-gray-100 rounded-lg mt-2">
                    <i class="fas fa-sign-in-alt w-6 text-center"></i>
                    <span class="ml-4">Login</span>
                </a>
                <a href="signup.html" class="sidebar-link flex items-center px-4 py-3 text-gray-500 hover:bg-gray-100 rounded-lg mt-2">
                    <i class="fas fa-user-plus w-6 text-center"></i>
                    <span class="ml-4">Sign Up</span>
                </a>
            </nav>
            <div class="px-6 mt-8">
                <a href="login.html" class="block w-full text-center bg-emerald-500 text-white font-semibold px-5 py-3 rounded-lg hover:bg-emerald-600 transition-colors">
                    New Post
                </a>
            </div>
        </aside>
    "##
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MemoryMount;

    fn user(id: &str) -> SessionIdentity {
        SessionIdentity::new(id).unwrap()
    }

    /// The `<a ...>` opening tag that carries `href`.
    fn link<'a>(html: &'a str, href: &str) -> &'a str {
        let start = html
            .find(&format!("<a href=\"{href}\" "))
            .unwrap_or_else(|| panic!("no link to {href}"));
        let end = start + html[start..].find('>').expect("unterminated tag");
        &html[start..=end]
    }

    fn is_active(tag: &str) -> bool {
        tag.contains("sidebar-link active ")
    }

    #[test]
    fn active_tags_for_logged_in_viewers() {
        let cases = [
            ("", ActiveTag::Home),
            ("index.html", ActiveTag::Home),
            ("explore.html", ActiveTag::Explore),
            ("notifications.html", ActiveTag::Notifications),
            ("profile.html", ActiveTag::Profile),
            ("create-post.html", ActiveTag::Other),
            ("post.html", ActiveTag::Other),
        ];
        for (segment, expected) in cases {
            let page = PageId::from_segment(segment);
            assert_eq!(
                ActiveTag::for_page(Variant::Authenticated, &page),
                expected,
                "{segment:?}"
            );
        }
    }

    #[test]
    fn active_tags_for_anonymous_viewers() {
        assert_eq!(
            ActiveTag::for_page(Variant::Anonymous, &PageId::from(Page::Explore)),
            ActiveTag::Explore
        );
        for page in [Page::Home, Page::Notifications, Page::Profile, Page::Login] {
            assert_eq!(
                ActiveTag::for_page(Variant::Anonymous, &PageId::from(page)),
                ActiveTag::Other
            );
        }
    }

    #[test]
    fn profile_page_marks_only_the_profile_link() {
        let fragment = Fragment::build(Some(&user("42")), &PageId::from_segment("profile.html"));
        assert_eq!(fragment.variant(), Variant::Authenticated);
        assert_eq!(fragment.active(), ActiveTag::Profile);

        let html = fragment.html();
        let profile = link(html, "profile.html?user_id=42");
        assert!(is_active(profile));
        assert!(profile.contains(PROFILE_LINK_ID));
        for href in ["index.html", "explore.html", "notifications.html", "#"] {
            assert!(!is_active(link(html, href)), "{href} should not be active");
        }
        assert_eq!(html.matches("sidebar-link active").count(), 1);
    }

    #[test]
    fn logged_in_sidebar_has_controls() {
        let fragment = Fragment::build(Some(&user("7")), &PageId::from_segment(""));
        let html = fragment.html();
        assert!(is_active(link(html, "index.html")));
        assert!(html.contains(r#"id="logout-button""#));
        assert!(html.contains(r#"<span id="notification-badge" class="hidden "#));
        assert!(html.contains(r#"href="create-post.html""#));
        assert!(!html.contains("signup.html"));
    }

    #[test]
    fn anonymous_sidebar_points_at_login() {
        let fragment = Fragment::build(None, &PageId::from(Page::Explore));
        assert_eq!(fragment.variant(), Variant::Anonymous);
        let html = fragment.html();
        assert!(is_active(link(html, "explore.html")));
        assert!(!html.contains(LOGOUT_BUTTON_ID));
        assert!(!html.contains(NOTIFICATION_BADGE_ID));
        assert!(!html.contains("profile.html"));
        assert_eq!(html.matches(r#"href="login.html""#).count(), 2);
        assert!(html.contains(r#"href="signup.html""#));
    }

    #[test]
    fn identity_is_encoded_into_the_profile_link() {
        let fragment = Fragment::build(Some(&user("a\"b")), &PageId::from(Page::Home));
        assert!(fragment.html().contains("profile.html?user_id=a%22b"));
    }

    #[test]
    fn rendering_twice_is_identical() {
        let mount = MemoryMount::default();
        let page = PageId::from_segment("notifications.html");
        let first = render(Some(&mount), Some(&user("42")), &page).expect("rendered");
        let after_first = mount.content();
        let second = render(Some(&mount), Some(&user("42")), &page).expect("rendered");
        assert_eq!(mount.write_count(), 2);
        assert_eq!(after_first, mount.content());
        assert_eq!(first, second);
        assert_eq!(after_first.as_deref(), Some(first.html()));
    }

    #[test]
    fn missing_mount_is_a_no_op() {
        let page = PageId::from(Page::Login);
        assert!(render::<&MemoryMount>(None, None, &page).is_none());
        assert!(render::<&MemoryMount>(None, Some(&user("1")), &page).is_none());
    }
}
