use front_shared::{
    LOGOUT_BUTTON_ID, LoginStatus, NOTIFICATION_BADGE_ID, SIDEBAR_PLACEHOLDER_ID, ShellConfig,
    UnreadClient, check_access, sign_out,
};
use leptos::logging::{error, log};
use shared::{PageId, SessionIdentity, sidebar};
use wasm_bindgen_futures::spawn_local;

use crate::utils::{BrowserStorage, element_by_id, navigate, on_content_ready, pathname};

/// Page-load entry point: guard first, sidebar once the DOM is ready.
pub fn start() {
    let page = PageId::from_pathname(&pathname());
    let action = check_access(&BrowserStorage::session(), &BrowserStorage::local(), &page);
    if let Some(href) = action.redirect_href() {
        log!("Redirecting from {:?} to {}", page.segment(), href);
        navigate(href);
        return;
    }
    on_content_ready(move || mount_sidebar(&page));
}

fn mount_sidebar(page: &PageId) {
    let status = LoginStatus::from_store(&BrowserStorage::session());
    let mount = element_by_id(SIDEBAR_PLACEHOLDER_ID);
    if sidebar::render(mount.as_ref(), status.identity(), page).is_none() {
        return;
    }
    let LoginStatus::LoggedIn(session) = status else {
        return;
    };

    if let Some(button) = element_by_id(LOGOUT_BUTTON_ID) {
        button.on_click(|ev| {
            ev.prevent_default();
            let target = sign_out(&BrowserStorage::session());
            if let Some(href) = target.file_name() {
                navigate(href);
            }
        });
    }

    spawn_unread_count(session.user_id);
}

/// Detached; nothing waits on it. If the viewer leaves first, the badge it
/// writes to belongs to a discarded document and the write goes nowhere.
fn spawn_unread_count(identity: SessionIdentity) {
    let badge = element_by_id(NOTIFICATION_BADGE_ID);
    spawn_local(async move {
        let client = UnreadClient::new(&ShellConfig::default());
        match client.decorate(badge, &identity).await {
            Ok(()) => {}
            Err(front_shared::Error::Status(code)) => {
                log!("Unread count unavailable (status {})", code);
            }
            Err(e) => error!("Failed to fetch notification count: {}", e),
        }
    });
}
