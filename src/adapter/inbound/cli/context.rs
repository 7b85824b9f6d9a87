//! Per-invocation setup shared by command handlers.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::debug;

use super::command::WindowArgs;
use crate::adapter::outbound::sqlite::SqliteEntryStore;
use crate::application::analytics::AnalyticsService;
use crate::domain::{AnalyticsResult, CollectionId, DateRange, OwnerId, RangeCode};
use crate::error::{ConfigError, Result};
use crate::infrastructure::config::Config;
use crate::port::inbound::analytics::AnalyticsQuery;

/// Effective configuration and storage location for one command.
#[derive(Debug)]
pub struct Context {
    pub config: Config,
    pub database: PathBuf,
}

impl Context {
    /// Load `config_path` (defaults when the file is absent) and resolve the
    /// database path, letting `database` override the configured one.
    ///
    /// # Errors
    /// Returns an error if an existing config file is invalid.
    pub fn load(config_path: &Path, database: Option<&Path>) -> Result<Self> {
        let config = Config::load_or_default(config_path)?;
        let database = database
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(&config.database));
        debug!(config = %config_path.display(), database = %database.display(), "Loaded context");
        Ok(Self { config, database })
    }

    /// Open the entry store, creating the database directory if needed.
    ///
    /// # Errors
    /// Returns an error if the directory or database cannot be created.
    pub fn open_store(&self) -> Result<SqliteEntryStore> {
        if let Some(parent) = self.database.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        SqliteEntryStore::open(&self.database)
    }

    /// Analytics service over the configured store.
    ///
    /// # Errors
    /// Returns an error if the store cannot be opened.
    pub fn service(&self) -> Result<AnalyticsService<SqliteEntryStore>> {
        Ok(AnalyticsService::new(self.open_store()?))
    }
}

/// The window a report covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Window {
    /// A dashboard range code, kept verbatim.
    Range(String),
    /// A custom number of days.
    Days(i64),
}

impl Window {
    /// Pick the window from flags, falling back to the configured range.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidValue`] when `--days` exceeds
    /// `max_custom_days`.
    pub fn resolve(args: &WindowArgs, config: &Config) -> Result<Self> {
        if let Some(days) = args.days {
            let max = config.analytics.max_custom_days;
            if days > max {
                return Err(ConfigError::InvalidValue {
                    field: "days",
                    reason: format!("{days} exceeds max_custom_days ({max})"),
                }
                .into());
            }
            return Ok(Self::Days(days));
        }
        Ok(Self::Range(
            args.range
                .clone()
                .unwrap_or_else(|| config.analytics.default_range().as_str().to_string()),
        ))
    }

    /// Number of days the window spans.
    #[must_use]
    pub fn days(&self) -> i64 {
        match self {
            Self::Range(code) => RangeCode::from_code(code).days(),
            Self::Days(days) => *days,
        }
    }
}

/// A computed report with the window it covers.
#[derive(Debug)]
pub struct Computed {
    pub result: AnalyticsResult,
    pub range: DateRange,
    pub anchor: DateTime<Utc>,
}

/// Run the analytics query for `window`, optionally scoped to one of the
/// owner's collections.
///
/// Owner-wide range codes never fail (the empty result stands in for
/// errors); custom day windows and collection-scoped queries surface
/// invalid ranges, unknown collections and store failures.
///
/// # Errors
/// Returns an error for an invalid custom window, an unknown collection or a
/// failed fetch.
pub async fn compute<Q: AnalyticsQuery>(
    query: &Q,
    owner: &OwnerId,
    collection: Option<&CollectionId>,
    window: &Window,
    anchor: Option<DateTime<Utc>>,
) -> Result<Computed> {
    let anchor = anchor.unwrap_or_else(Utc::now);
    let result = match (collection, window) {
        (Some(collection), window) => {
            query
                .collection_analytics_for_days(owner, collection, window.days(), anchor)
                .await?
        }
        (None, Window::Range(code)) => query.analytics(owner, code, anchor).await,
        (None, Window::Days(days)) => query.analytics_for_days(owner, *days, anchor).await?,
    };
    let range = DateRange::ending_at(window.days(), anchor)?;
    Ok(Computed {
        result,
        range,
        anchor,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::outbound::memory::MemoryEntryStore;
    use crate::domain::DomainError;
    use crate::error::Error;
    use crate::testkit::domain::{at, collection, pending};

    #[test]
    fn days_beyond_the_configured_limit_are_rejected() {
        let args = WindowArgs {
            days: Some(731),
            ..WindowArgs::default()
        };
        let err = Window::resolve(&args, &Config::default()).unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError::InvalidValue { field: "days", .. })
        ));
    }

    #[test]
    fn missing_flags_use_the_configured_range() {
        let mut config = Config::default();
        config.analytics.default_range = "90d".into();
        let window = Window::resolve(&WindowArgs::default(), &config).unwrap();
        assert_eq!(window, Window::Range("90d".into()));
        assert_eq!(window.days(), 90);
    }

    #[test]
    fn unknown_codes_span_a_week() {
        assert_eq!(Window::Range("nope".into()).days(), 7);
    }

    #[tokio::test]
    async fn custom_window_errors_surface() {
        let service = AnalyticsService::new(MemoryEntryStore::with_data(
            [collection("wl", "o")],
            [pending("wl", at(2024, 1, 1, 0, 0))],
        ));
        let err = compute(
            &service,
            &OwnerId::new("o"),
            None,
            &Window::Days(-2),
            Some(at(2024, 1, 2, 0, 0)),
        )
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Domain(DomainError::InvalidRange { days: -2 })));
    }

    #[tokio::test]
    async fn computed_range_matches_series_length() {
        let service = AnalyticsService::new(MemoryEntryStore::with_data(
            [collection("wl", "o")],
            [pending("wl", at(2024, 1, 1, 0, 0))],
        ));
        let computed = compute(
            &service,
            &OwnerId::new("o"),
            None,
            &Window::Range("30d".into()),
            Some(at(2024, 1, 2, 0, 0)),
        )
        .await
        .unwrap();
        assert_eq!(computed.range.len(), computed.result.charts.signups.len());
        assert_eq!(computed.range.label, "Last 30 Days");
    }

    #[tokio::test]
    async fn unknown_collection_fails_even_for_range_codes() {
        let service = AnalyticsService::new(MemoryEntryStore::with_data([collection("wl", "o")], []));
        let err = compute(
            &service,
            &OwnerId::new("o"),
            Some(&CollectionId::new("missing")),
            &Window::Range("7d".into()),
            Some(at(2024, 1, 2, 0, 0)),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }
}
