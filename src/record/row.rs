use serde::{Deserialize, Serialize};

/// Tabular form of a [`Record`](super::Record), one CSV row.
///
/// Column order here is the column order of the source and of serialized
/// output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordRow {
    #[serde(rename = "Institute")]
    pub institute: String,
    #[serde(rename = "Academic-Program-Name")]
    pub program: String,
    #[serde(rename = "Institute-Type")]
    pub institute_type: String,
    #[serde(rename = "Quota")]
    pub quota: String,
    #[serde(rename = "State-Id", default)]
    pub state_id: Option<u32>,
    #[serde(rename = "Seat-Type")]
    pub seat_type: String,
    #[serde(rename = "Gender")]
    pub gender: String,
    #[serde(rename = "Opening-Rank")]
    pub opening_rank: u32,
    #[serde(rename = "Closing-Rank")]
    pub closing_rank: u32,
}
