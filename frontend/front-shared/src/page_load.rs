//! Decisions taken once per page load, before anything is rendered.

use shared::{Action, EntryCheck, PageId, SessionIdentity, guard, storage::KeyValueStore};

use crate::{LoginStatus, USER_ID_KEY};

/// Runs the session guard over `session`, then the entry check over
/// `persistent`. A stale persistent id is removed from `persistent`.
pub fn check_access(
    session: &impl KeyValueStore,
    persistent: &impl KeyValueStore,
    page: &PageId,
) -> Action {
    let status = LoginStatus::from_store(session);
    let action = guard::evaluate(status.identity(), page);
    if action != Action::None {
        return action;
    }

    let remembered = SessionIdentity::from_stored(persistent.get(USER_ID_KEY));
    match guard::evaluate_entry(remembered.as_ref(), status.identity(), page) {
        EntryCheck::Proceed => Action::None,
        EntryCheck::Redirect(target) => Action::Redirect(target),
        EntryCheck::ForgetStale => {
            tracing::warn!("Dropping stale {} from persistent storage", USER_ID_KEY);
            persistent.remove(USER_ID_KEY);
            Action::None
        }
    }
}

/// `document.readyState` past `"loading"` means `DOMContentLoaded` has fired.
pub fn content_loaded(ready_state: &str) -> bool {
    ready_state != "loading"
}
