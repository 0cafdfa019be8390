//! Account-level features outside reference data

pub mod account;
pub mod notifications;
pub mod payment;
pub mod profile;
