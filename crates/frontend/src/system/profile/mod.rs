pub mod api;
pub mod ui;

pub use api::ProfileApi;
