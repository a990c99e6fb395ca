use leetbat_core::DifficultyCounts;
use leetbat_core::model::Difficulty;

/// One difficulty counter in the stats bar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatCounterVm {
    pub label: &'static str,
    pub count: u32,
}

/// Easy, Medium, Hard counters in display order.
#[must_use]
pub fn map_stat_counters(counts: &DifficultyCounts) -> Vec<StatCounterVm> {
    Difficulty::ALL
        .into_iter()
        .map(|difficulty| StatCounterVm {
            label: difficulty.as_str(),
            count: counts.get(difficulty),
        })
        .collect()
}
