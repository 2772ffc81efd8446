use crate::record::{InstituteType, Quota, Record};
use crate::selection::category::{gender_matches, resolve};
use crate::selection::tolerance::adjust;
use crate::store::RecordStore;
use crate::types::category::{Gender, SeatCategory};
use crate::types::eligibility_bundle::{EligibilityError, Query, Tier};
use crate::types::identifiers::StateId;

/// Advanced searches only see all-India seats at advanced-tier institutes.
/// Main searches see standard-tier institutes, all-India or the candidate's
/// home state.
pub fn tier_matches(record: &Record, tier: Tier, home_state: StateId) -> bool {
    match tier {
        Tier::Advanced => {
            record.institute_type == InstituteType::AdvancedTier && record.quota.is_all_india()
        }
        Tier::Main => {
            record.institute_type == InstituteType::StandardTier
                && match record.quota {
                    Quota::AllIndia => true,
                    Quota::HomeState(state) => state == home_state,
                }
        }
    }
}

pub fn category_matches(record: &Record, category: SeatCategory) -> bool {
    record.seat_category == category
}

/// Larger rank numbers are weaker; a seat is reachable when its closing rank
/// is at or beyond the candidate's adjusted rank.
pub fn rank_matches(record: &Record, threshold: i64) -> bool {
    i64::from(record.closing_rank) >= threshold
}

/// Fully resolved predicate for one tier of one query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EligibilityFilter {
    pub tier: Tier,
    pub category: SeatCategory,
    pub gender: Gender,
    pub home_state: StateId,
    pub threshold: i64,
}

impl EligibilityFilter {
    /// Returns `Ok(None)` when the query carries no rank for `tier`.
    pub fn for_query(query: &Query, tier: Tier) -> Result<Option<Self>, EligibilityError> {
        let category = resolve(&query.reservation)?;

        let Some(raw_rank) = query.rank_for(tier) else {
            return Ok(None);
        };
        let threshold = adjust(raw_rank, query.tolerance_pct, query.gender.is_female())?;

        Ok(Some(Self {
            tier,
            category,
            gender: query.gender,
            home_state: query.home_state,
            threshold,
        }))
    }

    pub fn matches(&self, record: &Record) -> bool {
        tier_matches(record, self.tier, self.home_state)
            && category_matches(record, self.category)
            && gender_matches(self.gender, record.gender_policy)
            && rank_matches(record, self.threshold)
    }

    pub fn apply<'a>(&self, records: &'a [Record]) -> Vec<&'a Record> {
        records.iter().filter(|r| self.matches(r)).collect()
    }
}

/// Unordered records of `store` the query is eligible for in `tier`.
pub fn filter<'a>(
    store: &'a RecordStore,
    query: &Query,
    tier: Tier,
) -> Result<Vec<&'a Record>, EligibilityError> {
    Ok(match EligibilityFilter::for_query(query, tier)? {
        Some(f) => f.apply(store.all()),
        None => Vec::new(),
    })
}
