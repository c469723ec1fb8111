//! Stats Aggregator
//!
//! Summary statistics over an already-filtered collection. The reference
//! timestamp is injected, never read from the system clock, so the
//! trailing-window count is deterministic and testable.

use chrono::{DateTime, Duration, Utc};

use crate::models::entry::{CatalogEntry, EntryKind, EntryStatus};
use crate::models::stats::CatalogStats;

/// Trailing window for the `recently_added` count
const RECENT_WINDOW_DAYS: i64 = 7;

pub struct StatsAggregator;

impl StatsAggregator {
    pub fn aggregate(entries: &[CatalogEntry], now: DateTime<Utc>) -> CatalogStats {
        let mut stats = CatalogStats {
            total: entries.len(),
            ..Default::default()
        };

        let recent_cutoff = now - Duration::days(RECENT_WINDOW_DAYS);
        let mut priced = 0usize;

        for entry in entries {
            match entry.status {
                EntryStatus::Active => stats.active += 1,
                EntryStatus::Inactive => stats.inactive += 1,
                EntryStatus::Discontinued => stats.discontinued += 1,
                EntryStatus::Suspended => stats.suspended += 1,
            }
            match entry.kind() {
                EntryKind::Product => stats.products += 1,
                EntryKind::Service => stats.services += 1,
            }

            stats.total_value += entry.unit_price();
            priced += 1;

            if entry.created_at > recent_cutoff && entry.created_at <= now {
                stats.recently_added += 1;
            }
        }

        // Division-by-zero guard: an empty collection averages to 0
        if priced > 0 {
            stats.average_price = stats.total_value / priced as f64;
        }

        stats
    }
}
