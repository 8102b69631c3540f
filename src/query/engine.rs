use std::cmp::Ordering;

use chrono::{DateTime, Duration, Offset, TimeZone, Utc};

use crate::domain::order::Order;

use super::filters::{OrderQuery, SortBy, SortOrder, TimeRange};

/// Run a query over a collection, returning a filtered and sorted copy.
///
/// Filters are conjunctive: search, then status, then platform, then time
/// range. Time windows are measured from midnight of `now` in `now`'s own
/// time zone. Sorting is stable, so orders with equal keys keep the
/// collection's order in both directions.
pub fn run<'a, I, Tz>(orders: I, query: &OrderQuery, now: &DateTime<Tz>) -> Vec<Order>
where
    I: IntoIterator<Item = &'a Order>,
    Tz: TimeZone,
{
    let today0 = start_of_day(now);
    let needle = query.search.to_lowercase();

    let mut view: Vec<Order> = orders
        .into_iter()
        .filter(|order| matches_search(order, &query.search, &needle))
        .filter(|order| query.status.matches(order.status))
        .filter(|order| query.platform.matches(order.platform))
        .filter(|order| in_time_range(order.order_date, &query.time_range, today0))
        .cloned()
        .collect();

    sort(&mut view, query.sort_by, query.sort_order);

    tracing::debug!(
        matched = view.len(),
        active_filters = query.active_filter_count(),
        sort_by = ?query.sort_by,
        sort_order = ?query.sort_order,
        "Order query evaluated"
    );

    view
}

/// Midnight of `now`'s calendar day, in `now`'s time zone
pub fn start_of_day<Tz: TimeZone>(now: &DateTime<Tz>) -> DateTime<Utc> {
    let Some(midnight) = now.date_naive().and_hms_opt(0, 0, 0) else {
        return now.with_timezone(&Utc);
    };

    match now.timezone().from_local_datetime(&midnight).earliest() {
        Some(local) => local.with_timezone(&Utc),
        // Midnight skipped by a DST jump: use the current offset
        None => {
            let offset = now.offset().fix().local_minus_utc();
            Utc.from_utc_datetime(&(midnight - Duration::seconds(i64::from(offset))))
        }
    }
}

fn matches_search(order: &Order, raw: &str, needle: &str) -> bool {
    if raw.is_empty() {
        return true;
    }

    order.order_id.to_lowercase().contains(needle)
        || order.customer.name.to_lowercase().contains(needle)
        // phone numbers have no case
        || order.customer.phone.contains(raw)
}

fn in_time_range(date: DateTime<Utc>, range: &TimeRange, today0: DateTime<Utc>) -> bool {
    match range {
        TimeRange::Today => true,
        TimeRange::Yesterday => date >= today0 - Duration::hours(24) && date < today0,
        TimeRange::Week => date >= today0 - Duration::hours(7 * 24),
        TimeRange::Month => date >= today0 - Duration::hours(30 * 24),
        TimeRange::Custom { from, to } => {
            from.map_or(true, |from| date >= from) && to.map_or(true, |to| date < to)
        }
    }
}

fn sort(view: &mut [Order], sort_by: SortBy, sort_order: SortOrder) {
    view.sort_by(|a, b| {
        let ordering = compare(a, b, sort_by);
        match sort_order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
}

fn compare(a: &Order, b: &Order, sort_by: SortBy) -> Ordering {
    match sort_by {
        SortBy::OrderDate => a.order_date.cmp(&b.order_date),
        SortBy::TotalAmount => a.total_amount.cmp(&b.total_amount),
        SortBy::Status => a.status.as_str().cmp(b.status.as_str()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::{OrderId, OrderStatus, Platform};
    use crate::query::{PlatformFilter, StatusFilter};
    use crate::sample_data::sample_orders;
    use chrono::FixedOffset;
    use rust_decimal_macros::dec;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 10, 15, 0, 0).unwrap()
    }

    fn ids(view: &[Order]) -> Vec<&str> {
        view.iter().map(|o| o.id.as_str()).collect()
    }

    fn order_at(id: &str, date: DateTime<Utc>) -> Order {
        let mut order = sample_orders(fixed_now()).remove(0);
        order.id = OrderId::new(id);
        order.order_date = date;
        order
    }

    #[test]
    fn test_start_of_day_utc() {
        let today0 = start_of_day(&fixed_now());
        assert_eq!(today0, Utc.with_ymd_and_hms(2025, 3, 10, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_start_of_day_uses_callers_zone() {
        let istanbul = FixedOffset::east_opt(3 * 3600).unwrap();
        let now = istanbul.with_ymd_and_hms(2025, 3, 10, 1, 30, 0).unwrap();

        assert_eq!(
            start_of_day(&now),
            Utc.with_ymd_and_hms(2025, 3, 9, 21, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_yesterday_window_is_half_open() {
        let now = fixed_now();
        let today0 = start_of_day(&now);
        let orders = vec![
            order_at("exactly-24h", today0 - Duration::hours(24)),
            order_at("25h", today0 - Duration::hours(25)),
            order_at("midnight", today0),
            order_at("just-before-midnight", today0 - Duration::seconds(1)),
        ];

        let query = OrderQuery {
            time_range: TimeRange::Yesterday,
            ..OrderQuery::default()
        };
        let view = run(&orders, &query, &now);
        let mut matched = ids(&view);
        matched.sort();

        assert_eq!(matched, vec!["exactly-24h", "just-before-midnight"]);
    }

    #[test]
    fn test_today_applies_no_filter() {
        let now = fixed_now();
        let orders = vec![
            order_at("last-year", now - Duration::days(365)),
            order_at("tomorrow", now + Duration::days(1)),
        ];

        let view = run(&orders, &OrderQuery::default(), &now);
        assert_eq!(view.len(), 2);
    }

    #[test]
    fn test_week_and_month_have_no_upper_bound() {
        let now = fixed_now();
        let today0 = start_of_day(&now);
        let orders = vec![
            order_at("future", now + Duration::days(3)),
            order_at("6-days", today0 - Duration::days(6)),
            order_at("7-days", today0 - Duration::days(7)),
            order_at("8-days", today0 - Duration::days(8)),
            order_at("30-days", today0 - Duration::days(30)),
            order_at("31-days", today0 - Duration::days(31)),
        ];

        let week = OrderQuery {
            time_range: TimeRange::Week,
            ..OrderQuery::default()
        };
        let view = run(&orders, &week, &now);
        let mut matched = ids(&view);
        matched.sort();
        assert_eq!(matched, vec!["6-days", "7-days", "future"]);

        let month = OrderQuery {
            time_range: TimeRange::Month,
            ..OrderQuery::default()
        };
        let matched = run(&orders, &month, &now);
        assert_eq!(matched.len(), 5);
        assert!(!ids(&matched).contains(&"31-days"));
    }

    #[test]
    fn test_custom_range_bounds() {
        let now = fixed_now();
        let from = now - Duration::hours(2);
        let to = now;
        let orders = vec![
            order_at("at-from", from),
            order_at("inside", now - Duration::hours(1)),
            order_at("at-to", to),
            order_at("before", from - Duration::seconds(1)),
        ];

        let query = OrderQuery {
            time_range: TimeRange::Custom {
                from: Some(from),
                to: Some(to),
            },
            ..OrderQuery::default()
        };
        let view = run(&orders, &query, &now);
        let mut matched = ids(&view);
        matched.sort();
        assert_eq!(matched, vec!["at-from", "inside"]);

        let open = OrderQuery {
            time_range: TimeRange::Custom { from: None, to: None },
            ..OrderQuery::default()
        };
        assert_eq!(run(&orders, &open, &now).len(), 4);
    }

    #[test]
    fn test_search_is_case_insensitive_on_code_and_name() {
        let now = fixed_now();
        let orders = sample_orders(now);

        let by_code = OrderQuery {
            search: "gt-6".to_string(),
            ..OrderQuery::default()
        };
        assert_eq!(ids(&run(&orders, &by_code, &now)), vec!["2"]);

        let by_name = OrderQuery {
            search: "DEMIR".to_string(),
            ..OrderQuery::default()
        };
        assert_eq!(ids(&run(&orders, &by_name, &now)), vec!["2"]);

        let by_name_lower = OrderQuery {
            search: "yılmaz".to_string(),
            ..OrderQuery::default()
        };
        assert_eq!(ids(&run(&orders, &by_name_lower, &now)), vec!["1"]);
    }

    #[test]
    fn test_search_matches_phone_substring() {
        let now = fixed_now();
        let orders = sample_orders(now);

        let query = OrderQuery {
            search: "987 65".to_string(),
            ..OrderQuery::default()
        };
        assert_eq!(ids(&run(&orders, &query, &now)), vec!["2"]);

        let no_match = OrderQuery {
            search: "535987".to_string(),
            ..OrderQuery::default()
        };
        assert!(run(&orders, &no_match, &now).is_empty());
    }

    #[test]
    fn test_status_and_platform_filters_commute() {
        let now = fixed_now();
        let mut orders = sample_orders(now);
        orders[4].platform = Platform::Getir;

        let status = OrderQuery {
            status: StatusFilter::Only(OrderStatus::Confirmed),
            ..OrderQuery::default()
        };
        let platform = OrderQuery {
            platform: PlatformFilter::Only(Platform::Getir),
            ..OrderQuery::default()
        };

        let status_first = run(&run(&orders, &status, &now), &platform, &now);
        let platform_first = run(&run(&orders, &platform, &now), &status, &now);

        assert_eq!(ids(&status_first), ids(&platform_first));
        assert_eq!(ids(&status_first), vec!["5"]);
    }

    #[test]
    fn test_sort_by_total_amount() {
        let now = fixed_now();
        let orders: Vec<Order> = sample_orders(now).into_iter().take(3).collect();

        let asc = OrderQuery {
            sort_by: SortBy::TotalAmount,
            sort_order: SortOrder::Asc,
            ..OrderQuery::default()
        };
        let totals: Vec<_> = run(&orders, &asc, &now).iter().map(|o| o.total_amount).collect();
        assert_eq!(totals, vec![dec!(65.00), dec!(119.90), dec!(169.00)]);

        let desc = OrderQuery {
            sort_order: SortOrder::Desc,
            ..asc
        };
        let totals: Vec<_> = run(&orders, &desc, &now).iter().map(|o| o.total_amount).collect();
        assert_eq!(totals, vec![dec!(169.00), dec!(119.90), dec!(65.00)]);
    }

    #[test]
    fn test_default_sort_is_newest_first() {
        let now = fixed_now();
        let orders = sample_orders(now);

        let view = run(&orders, &OrderQuery::default(), &now);
        assert_eq!(ids(&view), vec!["1", "5", "2", "3", "6", "4"]);
    }

    #[test]
    fn test_sort_by_status_is_alphabetical_not_lifecycle() {
        let now = fixed_now();
        let orders = sample_orders(now);

        let query = OrderQuery {
            sort_by: SortBy::Status,
            sort_order: SortOrder::Asc,
            ..OrderQuery::default()
        };
        let statuses: Vec<_> = run(&orders, &query, &now).iter().map(|o| o.status).collect();

        // "delivered" sorts before "new" even though it comes last in the lifecycle
        assert_eq!(
            statuses,
            vec![
                OrderStatus::Confirmed,
                OrderStatus::Delivered,
                OrderStatus::New,
                OrderStatus::PickedUp,
                OrderStatus::Preparing,
                OrderStatus::Ready,
            ]
        );
    }

    #[test]
    fn test_equal_keys_keep_collection_order() {
        let now = fixed_now();
        let orders = vec![
            order_at("a", now),
            order_at("b", now),
            order_at("c", now),
        ];

        for sort_order in [SortOrder::Asc, SortOrder::Desc] {
            let query = OrderQuery {
                sort_by: SortBy::TotalAmount,
                sort_order,
                ..OrderQuery::default()
            };
            assert_eq!(ids(&run(&orders, &query, &now)), vec!["a", "b", "c"]);
        }
    }

    #[test]
    fn test_run_does_not_mutate_input() {
        let now = fixed_now();
        let orders = sample_orders(now);
        let before = orders.clone();

        let query = OrderQuery {
            sort_by: SortBy::TotalAmount,
            sort_order: SortOrder::Asc,
            status: StatusFilter::Only(OrderStatus::New),
            ..OrderQuery::default()
        };
        let view = run(&orders, &query, &now);

        assert_eq!(orders, before);
        assert_eq!(ids(&view), vec!["1"]);
    }
}
