use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::record::{InstituteType, Quota, Record};

/// Aggregate counts over a loaded snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreStats {
    pub records: usize,
    pub advanced_tier: usize,
    pub standard_tier: usize,
    pub all_india: usize,
    pub home_state: usize,
    /// Keyed by seat category label; BTreeMap keeps output order stable.
    pub by_category: BTreeMap<String, usize>,
    pub inverted_ranks: usize,
}

impl StoreStats {
    pub fn collect<'a>(records: impl IntoIterator<Item = &'a Record>) -> Self {
        let mut stats = StoreStats::default();

        for record in records {
            stats.records += 1;

            match record.institute_type {
                InstituteType::AdvancedTier => stats.advanced_tier += 1,
                InstituteType::StandardTier => stats.standard_tier += 1,
            }

            match record.quota {
                Quota::AllIndia => stats.all_india += 1,
                Quota::HomeState(_) => stats.home_state += 1,
            }

            *stats
                .by_category
                .entry(record.seat_category.as_str().to_string())
                .or_insert(0) += 1;

            if record.is_inverted() {
                stats.inverted_ranks += 1;
            }
        }

        stats
    }
}
