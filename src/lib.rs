//! Deterministic rank-eligibility search over historical admission seat boundaries.
//!
//! `seat-core` loads an immutable snapshot of seat records (institute, program,
//! category, gender policy, quota, opening/closing rank) and answers which
//! seats a candidate could plausibly reach given their reservation code,
//! gender, home state and rank. Results are split into the advanced and main
//! institute tiers, ordered by selectivity and capped. Identical inputs always
//! produce identical outputs.

pub mod config;
pub mod params;
pub mod record;
pub mod selection;
pub mod store;
pub mod types;
