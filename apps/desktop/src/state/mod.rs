//! # Application State
//!
//! State held by the running app, split by concern:
//! - `session`: who is logged in
//! - `listing`: rows, selection, and refresh cycle per management window
//! - `windows`: which windows are open and what closing them does

pub mod listing;
pub mod session;
pub mod windows;

pub use listing::{ListingPhase, ListingView};
pub use session::Session;
pub use windows::{CloseOutcome, Navigator, WindowKind};
