use crate::models::{AccessClass, Page, PageId, SessionIdentity};

/// Outcome of a guard check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    Redirect(Page),
}

impl Action {
    /// Relative href to navigate to, if any.
    pub fn redirect_href(&self) -> Option<&'static str> {
        match self {
            Action::None => None,
            Action::Redirect(page) => page.file_name(),
        }
    }
}

/// Session guard. `identity` is whatever the session store holds right now.
pub fn evaluate(identity: Option<&SessionIdentity>, page: &PageId) -> Action {
    let class = page.page().access_class();
    let action = match (class, identity) {
        (AccessClass::RequiresAuthenticated, None) => Action::Redirect(Page::Login),
        (AccessClass::RequiresAnonymous, Some(_)) => Action::Redirect(Page::Home),
        _ => Action::None,
    };
    tracing::debug!(
        segment = page.segment(),
        %class,
        logged_in = identity.is_some(),
        ?action,
        "session guard evaluated"
    );
    action
}

/// Result of the entry check run on the login and signup pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryCheck {
    Proceed,
    Redirect(Page),
    /// Persistent storage remembers a viewer the session no longer knows.
    /// Sending them home would bounce straight back here, so the stale id
    /// should be dropped instead.
    ForgetStale,
}

/// Entry check for the login and signup pages, fed from persistent storage
/// alongside the session scope the main guard uses.
pub fn evaluate_entry(
    persistent_identity: Option<&SessionIdentity>,
    session_identity: Option<&SessionIdentity>,
    page: &PageId,
) -> EntryCheck {
    if page.page().access_class() != AccessClass::RequiresAnonymous {
        return EntryCheck::Proceed;
    }
    match (persistent_identity, session_identity) {
        (None, _) => EntryCheck::Proceed,
        (Some(_), Some(_)) => EntryCheck::Redirect(Page::Home),
        (Some(_), None) => EntryCheck::ForgetStale,
    }
}
