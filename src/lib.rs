//! Modnuke library crate
//!
//! This crate provides both the CLI binary and a library API so the
//! scanner/nuker/spinner pieces can be driven programmatically and tested
//! end to end.

pub mod cli;
pub mod nuker;
pub mod package_manager;
pub mod reinstall;
pub mod scanner;
pub mod spinner;
pub mod theme;
pub mod utils;
