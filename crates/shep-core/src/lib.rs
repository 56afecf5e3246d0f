//! Core library for shep: configuration, logging bootstrap, and the
//! shepherd service client.

pub mod client;
pub mod config;
pub mod logging;
pub mod session;
