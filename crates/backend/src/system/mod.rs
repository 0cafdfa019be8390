pub mod account;
pub mod middleware;
pub mod notifications;
pub mod payment;
pub mod profile;
pub mod tracing;
