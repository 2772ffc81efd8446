use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::row::RecordRow;
use crate::types::category::{SeatCategory, UnknownSeatCategory};
use crate::types::identifiers::StateId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("Unknown institute type: {0}")]
    UnknownInstituteType(String),
    #[error("Unknown quota: {0}")]
    UnknownQuota(String),
    #[error("Home-state quota row has no State-Id")]
    MissingStateId,
    #[error("{0}")]
    UnknownSeatCategory(#[from] UnknownSeatCategory),
    #[error("Unknown gender policy: {0}")]
    UnknownGenderPolicy(String),
    #[error("Rank must be positive")]
    ZeroRank,
}

/// Whether an institute admits through the advanced entrance track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum InstituteType {
    AdvancedTier,
    StandardTier,
}

impl InstituteType {
    pub fn parse(raw: &str) -> Result<Self, RecordError> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "IIT" => Ok(InstituteType::AdvancedTier),
            "NIT" | "IIIT" | "GFTI" | "NIT+" => Ok(InstituteType::StandardTier),
            _ => Err(RecordError::UnknownInstituteType(raw.to_string())),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            InstituteType::AdvancedTier => "IIT",
            InstituteType::StandardTier => "NIT+",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Quota {
    AllIndia,
    HomeState(StateId),
}

impl Quota {
    pub fn parse(raw: &str, state_id: Option<u32>) -> Result<Self, RecordError> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "AI" => Ok(Quota::AllIndia),
            "HS" => state_id
                .map(|id| Quota::HomeState(StateId::new(id)))
                .ok_or(RecordError::MissingStateId),
            _ => Err(RecordError::UnknownQuota(raw.to_string())),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Quota::AllIndia => "AI",
            Quota::HomeState(_) => "HS",
        }
    }

    pub fn is_all_india(self) -> bool {
        matches!(self, Quota::AllIndia)
    }

    pub fn state(self) -> Option<StateId> {
        match self {
            Quota::AllIndia => None,
            Quota::HomeState(id) => Some(id),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GenderPolicy {
    GenderNeutral,
    FemaleOnly,
}

impl GenderPolicy {
    pub fn parse(raw: &str) -> Result<Self, RecordError> {
        let trimmed = raw.trim();
        if trimmed.eq_ignore_ascii_case("Gender-Neutral") {
            Ok(GenderPolicy::GenderNeutral)
        } else if trimmed.to_ascii_lowercase().starts_with("female-only") {
            Ok(GenderPolicy::FemaleOnly)
        } else {
            Err(RecordError::UnknownGenderPolicy(raw.to_string()))
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GenderPolicy::GenderNeutral => "Gender-Neutral",
            GenderPolicy::FemaleOnly => "Female-only (including Supernumerary)",
        }
    }
}

/// One historical seat allotment boundary.
///
/// Records are validated once when the store is loaded and never mutated
/// afterwards. Serialization goes through the tabular row form so a record
/// round-trips field-for-field with its source columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RecordRow", into = "RecordRow")]
pub struct Record {
    pub institute: String,
    pub program: String,
    pub institute_type: InstituteType,
    pub quota: Quota,
    pub seat_category: SeatCategory,
    pub gender_policy: GenderPolicy,
    pub opening_rank: u32,
    pub closing_rank: u32,
}

impl Record {
    /// Source data does not guarantee `opening_rank <= closing_rank`.
    pub fn is_inverted(&self) -> bool {
        self.opening_rank > self.closing_rank
    }
}

impl TryFrom<RecordRow> for Record {
    type Error = RecordError;

    fn try_from(row: RecordRow) -> Result<Self, Self::Error> {
        if row.opening_rank == 0 || row.closing_rank == 0 {
            return Err(RecordError::ZeroRank);
        }

        Ok(Record {
            institute_type: InstituteType::parse(&row.institute_type)?,
            quota: Quota::parse(&row.quota, row.state_id)?,
            seat_category: row.seat_type.parse()?,
            gender_policy: GenderPolicy::parse(&row.gender)?,
            opening_rank: row.opening_rank,
            closing_rank: row.closing_rank,
            institute: row.institute,
            program: row.program,
        })
    }
}

impl From<Record> for RecordRow {
    fn from(record: Record) -> Self {
        RecordRow {
            institute: record.institute,
            program: record.program,
            institute_type: record.institute_type.as_str().to_string(),
            quota: record.quota.as_str().to_string(),
            state_id: record.quota.state().map(StateId::get),
            seat_type: record.seat_category.as_str().to_string(),
            gender: record.gender_policy.as_str().to_string(),
            opening_rank: record.opening_rank,
            closing_rank: record.closing_rank,
        }
    }
}
