//! Detection and dispatch.

pub mod detect;
pub mod dispatch;
pub mod file;
pub mod traits;
