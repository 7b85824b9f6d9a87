//! Infrastructure configuration modules.

pub mod analytics;
pub mod logging;
pub mod settings;

pub use settings::Config;
