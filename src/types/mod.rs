pub mod category;
pub mod eligibility_bundle;
pub mod identifiers;

pub use category::{Gender, ReservationCode, SeatCategory, UnknownSeatCategory};
pub use eligibility_bundle::{EligibilityError, Query, ResultSet, SelectionMetadata, Tier};
pub use identifiers::{DatasetVersion, StateId};
