mod fairness;
mod histogram;

use crate::scheduler::Schedule;

pub use fairness::{detail, FairnessReport};
pub use histogram::{Histogram, HistogramBin};

/// Everything the report layers need for one strategy run.
#[derive(Debug, Clone)]
pub struct StrategyReport {
    pub schedule: Schedule,
    pub fairness: FairnessReport,
    pub histogram: Histogram,
}

impl StrategyReport {
    pub fn new(schedule: Schedule, track_space: i32) -> Self {
        let fairness = FairnessReport::analyze(&schedule);
        let histogram = Histogram::build(&schedule, track_space);
        Self {
            schedule,
            fairness,
            histogram,
        }
    }
}
