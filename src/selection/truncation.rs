use crate::record::Record;

pub struct TruncationResult {
    pub selected: Vec<Record>,
    pub matched: usize,
    pub excluded_by_cap: usize,
}

/// Keep the first `min(cap, ranked.len())` records of an already ranked list.
pub fn truncate(ranked: Vec<&Record>, cap: usize) -> TruncationResult {
    let matched = ranked.len();
    let selected: Vec<Record> = ranked.into_iter().take(cap).cloned().collect();
    let excluded_by_cap = matched - selected.len();

    TruncationResult {
        selected,
        matched,
        excluded_by_cap,
    }
}
