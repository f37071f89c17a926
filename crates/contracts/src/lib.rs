//! Wire contracts shared between the admin front-end and the inventory API.
//!
//! Everything here is plain serde data plus small pure helpers, so the crate
//! compiles for both the WASM front-end and native test runs.

pub mod domain;
pub mod enums;
pub mod system;
