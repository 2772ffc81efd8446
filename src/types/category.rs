use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Seat category label attached to a historical seat boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SeatCategory {
    #[serde(rename = "OPEN")]
    Open,
    #[serde(rename = "EWS")]
    Ews,
    #[serde(rename = "OBC-NCL")]
    ObcNcl,
    #[serde(rename = "SC")]
    Sc,
    #[serde(rename = "ST")]
    St,
    #[serde(rename = "OPEN (PwD)")]
    OpenPwd,
    #[serde(rename = "EWS (PwD)")]
    EwsPwd,
    #[serde(rename = "OBC-NCL (PwD)")]
    ObcNclPwd,
    #[serde(rename = "SC (PwD)")]
    ScPwd,
    #[serde(rename = "ST (PwD)")]
    StPwd,
}

impl SeatCategory {
    pub const ALL: [SeatCategory; 10] = [
        SeatCategory::Open,
        SeatCategory::Ews,
        SeatCategory::ObcNcl,
        SeatCategory::Sc,
        SeatCategory::St,
        SeatCategory::OpenPwd,
        SeatCategory::EwsPwd,
        SeatCategory::ObcNclPwd,
        SeatCategory::ScPwd,
        SeatCategory::StPwd,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SeatCategory::Open => "OPEN",
            SeatCategory::Ews => "EWS",
            SeatCategory::ObcNcl => "OBC-NCL",
            SeatCategory::Sc => "SC",
            SeatCategory::St => "ST",
            SeatCategory::OpenPwd => "OPEN (PwD)",
            SeatCategory::EwsPwd => "EWS (PwD)",
            SeatCategory::ObcNclPwd => "OBC-NCL (PwD)",
            SeatCategory::ScPwd => "SC (PwD)",
            SeatCategory::StPwd => "ST (PwD)",
        }
    }
}

impl fmt::Display for SeatCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown seat category: {0}")]
pub struct UnknownSeatCategory(pub String);

impl FromStr for SeatCategory {
    type Err = UnknownSeatCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        SeatCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == trimmed)
            .ok_or_else(|| UnknownSeatCategory(s.to_string()))
    }
}

/// Candidate-side reservation code. Each code maps to exactly one
/// [`SeatCategory`]; see `selection::category::resolve`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReservationCode {
    #[serde(rename = "O")]
    O,
    #[serde(rename = "E")]
    E,
    #[serde(rename = "ON")]
    On,
    #[serde(rename = "SC")]
    Sc,
    #[serde(rename = "ST")]
    St,
    #[serde(rename = "OP")]
    Op,
    #[serde(rename = "EP")]
    Ep,
    #[serde(rename = "ONP")]
    Onp,
    #[serde(rename = "SCP")]
    Scp,
    #[serde(rename = "STP")]
    Stp,
}

impl ReservationCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ReservationCode::O => "O",
            ReservationCode::E => "E",
            ReservationCode::On => "ON",
            ReservationCode::Sc => "SC",
            ReservationCode::St => "ST",
            ReservationCode::Op => "OP",
            ReservationCode::Ep => "EP",
            ReservationCode::Onp => "ONP",
            ReservationCode::Scp => "SCP",
            ReservationCode::Stp => "STP",
        }
    }
}

impl fmt::Display for ReservationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Candidate gender flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    pub fn is_female(self) -> bool {
        matches!(self, Gender::Female)
    }
}
