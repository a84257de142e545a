//! Shared utilities for the timing workspace.
//!
//! Currently this is the process-wide [`config::AppConfig`] singleton.

pub mod config;
