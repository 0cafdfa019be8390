//! Shared types for the admin portal frontend and the development backend.
//!
//! Everything here is pure data plus pure transforms (tree building, error
//! flattening, search normalization), so it compiles for both wasm and native.

pub mod domain;
pub mod shared;
pub mod system;
