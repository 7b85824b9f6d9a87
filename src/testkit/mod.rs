//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`domain`] - Builders for timestamps, entries and collections.
//! - [`store`] - Fake [`EntryStore`](crate::port::outbound::store::EntryStore)
//!   implementations: `FailingStore`, `CountingStore`.

pub mod domain;
pub mod store;
