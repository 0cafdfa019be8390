pub mod config;
pub mod error;
pub mod extract;
pub mod format;
pub mod language;
pub mod state;
