mod page;
mod session;
mod unread;

pub use page::*;
pub use session::*;
pub use unread::*;
