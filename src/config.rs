//! Runtime configuration loaded from environment variables.
//!
//! - `ORDER_DESK_ORDERS_FILE`: JSON order collection; sample orders when unset
//! - `ORDER_DESK_UTC_OFFSET_MINUTES`: zone used for "today", default `180`
//! - `ORDER_DESK_SEARCH`, `ORDER_DESK_STATUS`, `ORDER_DESK_PLATFORM`,
//!   `ORDER_DESK_TIME_RANGE`, `ORDER_DESK_SORT_BY`, `ORDER_DESK_SORT_ORDER`:
//!   the initial query
//!
//! Empty values are treated as unset.

use std::path::PathBuf;

use chrono::{FixedOffset, Offset, Utc};

use crate::query::{OrderQuery, QueryError};

/// Istanbul, where the demo restaurant operates
const DEFAULT_UTC_OFFSET_MINUTES: i32 = 180;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} must be a whole number of minutes, got {value:?}")]
    InvalidOffset { name: &'static str, value: String },

    #[error(transparent)]
    Query(#[from] QueryError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub orders_file: Option<PathBuf>,
    pub utc_offset: FixedOffset,
    pub query: OrderQuery,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            orders_file: None,
            utc_offset: default_offset(),
            query: OrderQuery::default(),
        }
    }
}

impl DashboardConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the config from any key/value source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.is_empty());
        let mut config = Self::default();

        config.orders_file = var("ORDER_DESK_ORDERS_FILE").map(PathBuf::from);

        if let Some(value) = var("ORDER_DESK_UTC_OFFSET_MINUTES") {
            config.utc_offset = parse_offset("ORDER_DESK_UTC_OFFSET_MINUTES", &value)?;
        }

        if let Some(search) = var("ORDER_DESK_SEARCH") {
            config.query.search = search;
        }
        if let Some(status) = var("ORDER_DESK_STATUS") {
            config.query.status = status.parse()?;
        }
        if let Some(platform) = var("ORDER_DESK_PLATFORM") {
            config.query.platform = platform.parse()?;
        }
        if let Some(range) = var("ORDER_DESK_TIME_RANGE") {
            config.query.time_range = range.parse()?;
        }
        if let Some(sort_by) = var("ORDER_DESK_SORT_BY") {
            config.query.sort_by = sort_by.parse()?;
        }
        if let Some(sort_order) = var("ORDER_DESK_SORT_ORDER") {
            config.query.sort_order = sort_order.parse()?;
        }

        Ok(config)
    }
}

fn default_offset() -> FixedOffset {
    FixedOffset::east_opt(DEFAULT_UTC_OFFSET_MINUTES * 60).unwrap_or_else(|| Utc.fix())
}

fn parse_offset(name: &'static str, value: &str) -> Result<FixedOffset, ConfigError> {
    let invalid = || ConfigError::InvalidOffset {
        name,
        value: value.to_string(),
    };

    let minutes: i32 = value.trim().parse().map_err(|_| invalid())?;
    minutes
        .checked_mul(60)
        .and_then(FixedOffset::east_opt)
        .ok_or_else(invalid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::{OrderStatus, Platform};
    use crate::query::{PlatformFilter, SortBy, SortOrder, StatusFilter, TimeRange};
    use std::collections::HashMap;

    fn from_pairs(pairs: &[(&str, &str)]) -> Result<DashboardConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        DashboardConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults_without_vars() {
        let config = from_pairs(&[]).unwrap();
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.utc_offset.local_minus_utc(), 3 * 3600);
        assert_eq!(config.orders_file, None);
    }

    #[test]
    fn test_query_from_vars() {
        let config = from_pairs(&[
            ("ORDER_DESK_ORDERS_FILE", "/tmp/orders.json"),
            ("ORDER_DESK_UTC_OFFSET_MINUTES", "-300"),
            ("ORDER_DESK_SEARCH", "ayşe"),
            ("ORDER_DESK_STATUS", "preparing"),
            ("ORDER_DESK_PLATFORM", "getir"),
            ("ORDER_DESK_TIME_RANGE", "week"),
            ("ORDER_DESK_SORT_BY", "totalAmount"),
            ("ORDER_DESK_SORT_ORDER", "asc"),
        ])
        .unwrap();

        assert_eq!(config.orders_file, Some(PathBuf::from("/tmp/orders.json")));
        assert_eq!(config.utc_offset.local_minus_utc(), -5 * 3600);
        assert_eq!(config.query.search, "ayşe");
        assert_eq!(config.query.status, StatusFilter::Only(OrderStatus::Preparing));
        assert_eq!(config.query.platform, PlatformFilter::Only(Platform::Getir));
        assert_eq!(config.query.time_range, TimeRange::Week);
        assert_eq!(config.query.sort_by, SortBy::TotalAmount);
        assert_eq!(config.query.sort_order, SortOrder::Asc);
    }

    #[test]
    fn test_empty_values_are_ignored() {
        let config = from_pairs(&[("ORDER_DESK_STATUS", ""), ("ORDER_DESK_ORDERS_FILE", "")]).unwrap();
        assert_eq!(config.query.status, StatusFilter::All);
        assert_eq!(config.orders_file, None);
    }

    #[test]
    fn test_invalid_values_fail() {
        assert!(matches!(
            from_pairs(&[("ORDER_DESK_SORT_BY", "customer")]),
            Err(ConfigError::Query(QueryError::InvalidArgument { field: "sort_by", .. }))
        ));
        assert!(matches!(
            from_pairs(&[("ORDER_DESK_UTC_OFFSET_MINUTES", "+03:00")]),
            Err(ConfigError::InvalidOffset { .. })
        ));
        assert!(matches!(
            from_pairs(&[("ORDER_DESK_UTC_OFFSET_MINUTES", "100000")]),
            Err(ConfigError::InvalidOffset { .. })
        ));
    }
}
