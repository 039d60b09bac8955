mod config;
pub use config::*;

mod err;
pub use err::Error;

mod login;
pub use login::{LoginStatus, Session, sign_out};

pub mod notifications;
pub use notifications::UnreadClient;

pub mod page_load;
pub use page_load::{check_access, content_loaded};
