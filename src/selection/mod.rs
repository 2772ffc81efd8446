pub mod category;
pub mod filters;
pub mod ranking;
pub mod tolerance;
pub mod truncation;

use tracing::debug;

use crate::record::Record;
use crate::store::RecordStore;
use crate::types::category::ReservationCode;
use crate::types::eligibility_bundle::{
	EligibilityError, Query, ResultSet, SelectionMetadata, Tier,
};
pub use category::{gender_matches, resolve};
pub use filters::{filter, EligibilityFilter};
pub use ranking::{Ranker, SelectivityRanker};
pub use tolerance::adjust;
pub use truncation::{truncate, TruncationResult};

pub struct SeatSelector<R> {
	ranker: R,
}

impl Default for SeatSelector<SelectivityRanker> {
	fn default() -> Self {
		Self {
			ranker: SelectivityRanker,
		}
	}
}

impl<R> SeatSelector<R>
where
	R: Ranker,
{
	pub fn new(ranker: R) -> Self {
		Self { ranker }
	}

	pub fn select(&self, store: &RecordStore, query: &Query) -> Result<ResultSet, EligibilityError> {
		// 0. Reject malformed queries before touching the store
		let code: ReservationCode = query.reservation.parse()?;
		let category = code.category();
		tolerance::validate_tolerance(query.tolerance_pct)?;

		// 1. Filtering + ordering + truncation, once per tier
		let advanced = self.run_tier(store, query, Tier::Advanced)?;
		let main = self.run_tier(store, query, Tier::Main)?;

		debug!(
			reservation = %code,
			category = %category,
			advanced_threshold = ?advanced.threshold,
			main_threshold = ?main.threshold,
			advanced_matched = advanced.result.matched,
			main_matched = main.result.matched,
			"eligibility search"
		);

		// 2. Empty-but-valid outcome
		if advanced.result.selected.is_empty() && main.result.selected.is_empty() {
			return Err(EligibilityError::NoResults);
		}

		let metadata = SelectionMetadata {
			reservation: code,
			category,
			gender: query.gender,
			home_state: query.home_state,
			tolerance_pct: query.tolerance_pct,
			cap: query.cap,
			advanced_threshold: advanced.threshold,
			main_threshold: main.threshold,
			records_considered: store.len(),
			advanced_matched: advanced.result.matched,
			main_matched: main.result.matched,
			dataset_version: store.dataset_version().as_str().to_string(),
		};

		Ok(ResultSet {
			advanced: advanced.result.selected,
			main: main.result.selected,
			selection: metadata,
		})
	}

	fn run_tier(&self, store: &RecordStore, query: &Query, tier: Tier) -> Result<TierOutcome, EligibilityError> {
		let Some(eligibility) = EligibilityFilter::for_query(query, tier)? else {
			return Ok(TierOutcome {
				threshold: None,
				result: truncate(Vec::new(), query.cap),
			});
		};

		let ranked: Vec<&Record> = self.ranker.rank(eligibility.apply(store.all()));

		Ok(TierOutcome {
			threshold: Some(eligibility.threshold),
			result: truncate(ranked, query.cap),
		})
	}
}

struct TierOutcome {
	threshold: Option<i64>,
	result: TruncationResult,
}
