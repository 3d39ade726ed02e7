use crate::scheduler::{Request, Schedule};

/// Delay statistics for one schedule, relative to arrival order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FairnessReport {
    requests: usize,
    delayed_count: usize,
    delayed_total: u64,
    early_count: usize,
    early_total: u64,
    max_delay: i64,
}

impl FairnessReport {
    pub const DETAIL_ROWS: usize = 10;

    pub fn analyze(schedule: &Schedule) -> Self {
        Self::from_requests(schedule.requests())
    }

    pub fn from_requests(requests: &[Request]) -> Self {
        let mut report = Self {
            requests: requests.len(),
            ..Self::default()
        };

        for request in requests {
            let delay = request.delay();
            if delay > 0 {
                report.delayed_count += 1;
                report.delayed_total += delay.unsigned_abs();
                report.max_delay = report.max_delay.max(delay);
            } else if delay < 0 {
                report.early_count += 1;
                report.early_total += delay.unsigned_abs();
            }
        }
        report
    }

    pub fn requests(&self) -> usize {
        self.requests
    }

    /// Largest positive delay, or 0 when nothing was delayed.
    pub fn max_delay(&self) -> i64 {
        self.max_delay
    }

    pub fn delayed_count(&self) -> usize {
        self.delayed_count
    }

    pub fn early_count(&self) -> usize {
        self.early_count
    }

    pub fn delayed_percentage(&self) -> f64 {
        percentage(self.delayed_count, self.requests)
    }

    pub fn early_percentage(&self) -> f64 {
        percentage(self.early_count, self.requests)
    }

    /// Mean delay among delayed requests only.
    pub fn mean_delay(&self) -> f64 {
        mean(self.delayed_total, self.delayed_count)
    }

    /// Mean number of positions gained among early requests only.
    pub fn mean_early(&self) -> f64 {
        mean(self.early_total, self.early_count)
    }
}

/// The leading requests in entry order, for tabular display.
pub fn detail(requests: &[Request]) -> &[Request] {
    &requests[..requests.len().min(FairnessReport::DETAIL_ROWS)]
}

fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    count as f64 / total as f64 * 100.0
}

fn mean(sum: u64, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    sum as f64 / count as f64
}
