pub mod dom;
pub mod guard;
pub mod models;
pub mod sidebar;
pub mod storage;
#[cfg(any(test, feature = "testing"))]
pub mod testing;

mod err;

pub use err::Error;
pub use guard::{Action, EntryCheck};
pub use models::{AccessClass, Page, PageId, SessionIdentity, UnreadCount};
