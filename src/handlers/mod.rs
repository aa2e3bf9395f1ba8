//! HTTP handlers for the games resource.

pub mod games;
pub use games::*;
