//! Infrastructure: configuration and process-wide setup.

pub mod config;
