//! # Commands
//!
//! Everything a button press can do. Commands take the dialog surface,
//! the relevant state, and a repository; they never reach into globals.

pub mod auth;
pub mod gestion;
