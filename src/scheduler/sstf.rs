use super::{Bookkeeping, Schedule, ScheduleError, Scheduler, Strategy};
use crate::workload::Workload;
use log::trace;

/// Shortest-seek-time-first: always moves to the nearest pending track.
///
/// Ties go to the earliest arrival. The first request is serviced before any
/// seeking happens, so the head starts on its track.
pub struct SstfScheduler;

impl SstfScheduler {
    /// The unserviced request closest to the head. Scans in arrival order and
    /// only replaces the candidate on a strictly shorter distance.
    fn nearest(books: &Bookkeeping) -> Option<usize> {
        let head = books.head();
        let mut nearest: Option<(usize, u32)> = None;
        for (index, &track) in books.tracks.iter().enumerate() {
            if books.is_serviced(index) {
                continue;
            }
            let distance = track.abs_diff(head);
            if nearest.map_or(true, |(_, best)| distance < best) {
                nearest = Some((index, distance));
            }
        }
        nearest.map(|(index, _)| index)
    }
}

impl Scheduler for SstfScheduler {
    const NAME: &'static str = "SSTF";
    const STRATEGY: Strategy = Strategy::Sstf;

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
        books.service(0);

        while let Some(index) = Self::nearest(&books) {
            trace!("{} seeks from {} to request {}", Self::NAME, books.head(), index);
            books.service(index);
        }
        Ok(books.finish(Self::STRATEGY))
    }
}
