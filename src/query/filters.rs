use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::order::{OrderStatus, Platform};

use super::QueryError;

const ALL: &str = "all";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusFilter {
    #[default]
    All,
    Only(OrderStatus),
}

impl StatusFilter {
    pub fn matches(&self, status: OrderStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL {
            return Ok(StatusFilter::All);
        }
        s.parse()
            .map(StatusFilter::Only)
            .map_err(|_| QueryError::invalid("status", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlatformFilter {
    #[default]
    All,
    Only(Platform),
}

impl PlatformFilter {
    pub fn matches(&self, platform: Platform) -> bool {
        match self {
            PlatformFilter::All => true,
            PlatformFilter::Only(wanted) => *wanted == platform,
        }
    }
}

impl FromStr for PlatformFilter {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL {
            return Ok(PlatformFilter::All);
        }
        s.parse()
            .map(PlatformFilter::Only)
            .map_err(|_| QueryError::invalid("platform", s))
    }
}

/// Window on `order_date`, measured from midnight of the query's "now".
///
/// `Today` applies no filtering at all. `Week` and `Month` have no upper
/// bound, so future-dated orders pass them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeRange {
    #[default]
    Today,
    Yesterday,
    Week,
    Month,
    /// `from` inclusive, `to` exclusive; a missing bound is open
    Custom {
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
    },
}

impl FromStr for TimeRange {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "today" => Ok(TimeRange::Today),
            "yesterday" => Ok(TimeRange::Yesterday),
            "week" => Ok(TimeRange::Week),
            "month" => Ok(TimeRange::Month),
            // "custom" needs bounds, build TimeRange::Custom directly
            _ => Err(QueryError::invalid("time_range", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    #[default]
    OrderDate,
    TotalAmount,
    /// Compares status identifiers as strings, not lifecycle position
    Status,
}

impl FromStr for SortBy {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "orderDate" | "order_date" => Ok(SortBy::OrderDate),
            "totalAmount" | "total_amount" => Ok(SortBy::TotalAmount),
            "status" => Ok(SortBy::Status),
            _ => Err(QueryError::invalid("sort_by", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

impl FromStr for SortOrder {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            _ => Err(QueryError::invalid("sort_order", s)),
        }
    }
}

/// Search, filter and sort parameters for one view of the orders.
///
/// The default is the unfiltered list, newest first.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OrderQuery {
    pub search: String,
    pub status: StatusFilter,
    pub platform: PlatformFilter,
    pub time_range: TimeRange,
    pub sort_by: SortBy,
    pub sort_order: SortOrder,
}

impl OrderQuery {
    /// Number of filters that differ from the unfiltered default
    pub fn active_filter_count(&self) -> usize {
        [
            !self.search.is_empty(),
            self.status != StatusFilter::All,
            self.platform != PlatformFilter::All,
            self.time_range != TimeRange::Today,
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }

    /// Same sort, every filter reset
    pub fn cleared(&self) -> Self {
        Self {
            sort_by: self.sort_by,
            sort_order: self.sort_order,
            ..Self::default()
        }
    }
}
