use super::{Bookkeeping, Direction, Schedule, ScheduleError, Scheduler, Strategy};
use crate::workload::Workload;
use log::debug;

/// Circular SCAN: sweeps upward only, then jumps back to track 0.
///
/// The jump to track 0 is free; only the sweeps are charged.
pub struct CScanScheduler;

impl CScanScheduler {
    const WRAP_TRACK: i32 = 0;
}

impl Scheduler for CScanScheduler {
    const NAME: &'static str = "C-SCAN";
    const STRATEGY: Strategy = Strategy::CScan;

    fn effective_start_position(&self, workload: &Workload, initial_position: i32) -> Option<i32> {
        (!workload.is_empty()).then_some(initial_position)
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
        while books.remaining() > 0 {
            let head = books.head();
            books.sweep(Direction::Up, |track| track >= head);

            if books.remaining() > 0 {
                debug!("{} wraps from track {} to {}", Self::NAME, books.head(), Self::WRAP_TRACK);
                books.jump(Self::WRAP_TRACK);
                books.sweep(Direction::Up, |_| true);
            }
        }
        Ok(books.finish(Self::STRATEGY))
    }
}
