//! casefile library crate
//!
//! Exposes the case model, the detective and the TUI so the binary and the
//! render benchmark share one build.

pub mod app;
pub mod assistant;
pub mod case;
pub mod config;
pub mod keyring;
pub mod logging;
pub mod ui;
pub mod util;
