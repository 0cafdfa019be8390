pub mod bell;
pub mod list;
pub mod store;

pub use bell::NotificationBell;
pub use list::NotificationsPage;
pub use store::{use_notifications, NotificationsStore};
