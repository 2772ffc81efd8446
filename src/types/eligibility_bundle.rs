use serde::{Deserialize, Serialize};

use crate::record::Record;
use crate::types::category::{Gender, ReservationCode, SeatCategory};
use crate::types::identifiers::StateId;

/// Which institute population a search runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Advanced,
    Main,
}

/// A candidate's eligibility query.
///
/// The reservation code is kept as supplied; it is resolved against the
/// fixed code table when the query is evaluated, so an unknown code surfaces
/// as `EligibilityError::UnknownCode` from the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub reservation: String,
    pub gender: Gender,
    pub home_state: StateId,
    pub advanced_rank: Option<u32>,
    pub main_rank: Option<u32>,
    pub tolerance_pct: f64,
    pub cap: usize,
}

impl Query {
    pub const DEFAULT_RESERVATION: &'static str = "O";
    pub const DEFAULT_TOLERANCE_PCT: f64 = 2.5;
    pub const DEFAULT_CAP: usize = 20;

    /// Query with the boundary defaults and no ranks supplied.
    pub fn new(reservation: impl Into<String>) -> Self {
        Self {
            reservation: reservation.into(),
            gender: Gender::Male,
            home_state: StateId::default(),
            advanced_rank: None,
            main_rank: None,
            tolerance_pct: Self::DEFAULT_TOLERANCE_PCT,
            cap: Self::DEFAULT_CAP,
        }
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = gender;
        self
    }

    pub fn with_home_state(mut self, state: impl Into<StateId>) -> Self {
        self.home_state = state.into();
        self
    }

    pub fn with_advanced_rank(mut self, rank: u32) -> Self {
        self.advanced_rank = Some(rank);
        self
    }

    pub fn with_main_rank(mut self, rank: u32) -> Self {
        self.main_rank = Some(rank);
        self
    }

    pub fn with_tolerance(mut self, tolerance_pct: f64) -> Self {
        self.tolerance_pct = tolerance_pct;
        self
    }

    pub fn with_cap(mut self, cap: usize) -> Self {
        self.cap = cap;
        self
    }

    pub fn rank_for(&self, tier: Tier) -> Option<u32> {
        match tier {
            Tier::Advanced => self.advanced_rank,
            Tier::Main => self.main_rank,
        }
    }
}

/// Metadata describing how a result set was produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionMetadata {
    pub reservation: ReservationCode,
    pub category: SeatCategory,
    pub gender: Gender,
    pub home_state: StateId,
    pub tolerance_pct: f64,
    pub cap: usize,

    pub advanced_threshold: Option<i64>,
    pub main_threshold: Option<i64>,

    pub records_considered: usize,
    pub advanced_matched: usize,
    pub main_matched: usize,

    pub dataset_version: String,
}

/// The final, size-bounded output of an eligibility search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultSet {
    pub advanced: Vec<Record>,
    pub main: Vec<Record>,
    pub selection: SelectionMetadata,
}

impl ResultSet {
    pub fn tier(&self, tier: Tier) -> &[Record] {
        match tier {
            Tier::Advanced => &self.advanced,
            Tier::Main => &self.main,
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EligibilityError {
    #[error("Unknown reservation code: {0}")]
    UnknownCode(String),

    #[error("Invalid tolerance: {0}")]
    InvalidTolerance(f64),

    #[error("No seats matched the query")]
    NoResults,
}
