use std::cmp::Ordering;

use crate::record::Record;

pub trait Ranker {
    fn compare(&self, a: &Record, b: &Record) -> Ordering;

    /// Stable sort by [`Ranker::compare`].
    fn rank<'a>(&self, mut records: Vec<&'a Record>) -> Vec<&'a Record> {
        records.sort_by(|a, b| self.compare(a, b));
        records
    }
}

/// Most selective seats first: closing rank ascending, then opening rank
/// ascending.
///
/// Remaining ties fall back to the display and policy fields so the output
/// does not depend on input order.
#[derive(Debug, Default, Clone, Copy)]
pub struct SelectivityRanker;

impl Ranker for SelectivityRanker {
    fn compare(&self, a: &Record, b: &Record) -> Ordering {
        a.closing_rank
            .cmp(&b.closing_rank)
            .then_with(|| a.opening_rank.cmp(&b.opening_rank))
            .then_with(|| a.institute.cmp(&b.institute))
            .then_with(|| a.program.cmp(&b.program))
            .then_with(|| a.seat_category.cmp(&b.seat_category))
            .then_with(|| a.quota.cmp(&b.quota))
            .then_with(|| a.gender_policy.cmp(&b.gender_policy))
            .then_with(|| a.institute_type.cmp(&b.institute_type))
    }
}
