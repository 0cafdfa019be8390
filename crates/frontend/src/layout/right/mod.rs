pub mod right;

pub use right::{NotificationsPanel, Right};
