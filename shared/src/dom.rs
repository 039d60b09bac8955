//! The slice of the document the shell touches, behind traits so the render
//! and badge logic runs without a browser.

pub const SIDEBAR_PLACEHOLDER_ID: &str = "sidebar-placeholder";
pub const LOGOUT_BUTTON_ID: &str = "logout-button";
pub const NOTIFICATION_BADGE_ID: &str = "notification-badge";
pub const NOTIFICATIONS_LINK_ID: &str = "sidebar-notifications-link";
pub const PROFILE_LINK_ID: &str = "sidebar-profile-link";

/// Class that keeps an element out of the layout.
pub const HIDDEN_CLASS: &str = "hidden";

/// Element whose children get replaced by a rendered fragment.
pub trait Mount {
    fn replace_content(&self, html: &str);
}

/// The unread badge inside the notifications link.
pub trait Badge {
    fn show(&self, text: &str);
    fn hide(&self);
}

impl<T: Mount + ?Sized> Mount for &T {
    fn replace_content(&self, html: &str) {
        (**self).replace_content(html)
    }
}

impl<T: Badge + ?Sized> Badge for &T {
    fn show(&self, text: &str) {
        (**self).show(text)
    }

    fn hide(&self) {
        (**self).hide()
    }
}
