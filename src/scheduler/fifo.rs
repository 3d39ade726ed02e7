use super::{Bookkeeping, Schedule, ScheduleError, Scheduler, Strategy};
use crate::workload::Workload;

/// Services requests exactly in arrival order.
pub struct FifoScheduler;

impl Scheduler for FifoScheduler {
    const NAME: &'static str = "FIFO";
    const STRATEGY: Strategy = Strategy::Fifo;

    // The head starts on the first request, so the supplied position is unused.
    fn effective_start_position(&self, workload: &Workload, _initial_position: i32) -> Option<i32> {
        workload.tracks().first().copied()
    }

    fn schedule(
        &self,
        workload: &Workload,
        initial_position: i32,
    ) -> Result<Schedule, ScheduleError> {
        let Some(start) = self.effective_start_position(workload, initial_position) else {
            return Ok(Schedule::empty(Self::STRATEGY));
        };

        let mut books = Bookkeeping::reserve(workload, start)?;
        for index in 0..workload.len() {
            books.service(index);
        }
        Ok(books.finish(Self::STRATEGY))
    }
}
