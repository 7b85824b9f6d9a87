//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!   CLI ──▶ inbound::AnalyticsQuery ──▶ application ──▶ outbound::EntryStore ──▶ SQLite / memory
//! ```

pub mod inbound;
pub mod outbound;
