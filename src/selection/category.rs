use std::str::FromStr;

use crate::record::GenderPolicy;
use crate::types::category::{Gender, ReservationCode, SeatCategory};
use crate::types::eligibility_bundle::EligibilityError;

impl ReservationCode {
    pub const ALL: [ReservationCode; 10] = [
        ReservationCode::O,
        ReservationCode::E,
        ReservationCode::On,
        ReservationCode::Sc,
        ReservationCode::St,
        ReservationCode::Op,
        ReservationCode::Ep,
        ReservationCode::Onp,
        ReservationCode::Scp,
        ReservationCode::Stp,
    ];

    /// Flat mapping: every code matches exactly one category, there is no
    /// cascading into less-reserved categories.
    pub fn category(self) -> SeatCategory {
        match self {
            ReservationCode::O => SeatCategory::Open,
            ReservationCode::E => SeatCategory::Ews,
            ReservationCode::On => SeatCategory::ObcNcl,
            ReservationCode::Sc => SeatCategory::Sc,
            ReservationCode::St => SeatCategory::St,
            ReservationCode::Op => SeatCategory::OpenPwd,
            ReservationCode::Ep => SeatCategory::EwsPwd,
            ReservationCode::Onp => SeatCategory::ObcNclPwd,
            ReservationCode::Scp => SeatCategory::ScPwd,
            ReservationCode::Stp => SeatCategory::StPwd,
        }
    }
}

impl FromStr for ReservationCode {
    type Err = EligibilityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        ReservationCode::ALL
            .into_iter()
            .find(|code| code.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| EligibilityError::UnknownCode(s.to_string()))
    }
}

/// Resolve a raw reservation code to the single seat category it is eligible for.
pub fn resolve(code: &str) -> Result<SeatCategory, EligibilityError> {
    code.parse::<ReservationCode>().map(ReservationCode::category)
}

/// Female candidates match both policies; male candidates only gender-neutral seats.
pub fn gender_matches(gender: Gender, policy: GenderPolicy) -> bool {
    match gender {
        Gender::Female => true,
        Gender::Male => policy == GenderPolicy::GenderNeutral,
    }
}
