/// Base URL of the Echo API. Set `ECHO_API_URL` at build time to point a
/// bundle somewhere other than the local dev server.
pub const URL: &str = match option_env!("ECHO_API_URL") {
    Some(url) => url,
    None => "http://127.0.0.1:8000",
};

/// Session storage key holding the logged-in user's id. The entry check reads
/// the same key from local storage.
pub const USER_ID_KEY: &str = "current_user_id";
/// Session storage key holding the cached display name.
pub const USERNAME_KEY: &str = "current_username";

pub use shared::dom::{LOGOUT_BUTTON_ID, NOTIFICATION_BADGE_ID, SIDEBAR_PLACEHOLDER_ID};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    pub api_url: String,
}

impl ShellConfig {
    pub fn new(api_url: impl Into<String>) -> Self {
        let api_url: String = api_url.into();
        ShellConfig {
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        ShellConfig::new(URL)
    }
}
