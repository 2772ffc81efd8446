pub mod record;
pub mod row;

pub use crate::types::category::SeatCategory;
pub use crate::types::identifiers::StateId;
pub use record::{GenderPolicy, InstituteType, Quota, Record, RecordError};
pub use row::RecordRow;
