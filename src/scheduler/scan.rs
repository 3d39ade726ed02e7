use super::{Bookkeeping, Direction, Schedule, ScheduleError, Scheduler, Strategy};
use crate::workload::Workload;

/// The elevator algorithm, starting upward from the supplied position.
///
/// The head reverses as soon as nothing is pending ahead of it rather than
/// travelling on to the edge of the track space.
pub struct ScanScheduler;

impl Scheduler for ScanScheduler {
    const NAME: &'static str = "SCAN";
    const STRATEGY: Strategy = Strategy::Scan;

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
        let mut direction = Direction::Up;
        while books.remaining() > 0 {
            let head = books.head();
            books.sweep(direction, |track| direction.reaches(head, track));
            direction = direction.reversed();
        }
        Ok(books.finish(Self::STRATEGY))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::tests::reference_workload;
    use proptest::collection::vec;
    use proptest::prelude::{prop_assert, prop_assert_eq, proptest};

    #[test]
    fn reference_scenario() {
        let schedule = ScanScheduler.schedule(&reference_workload(), 50).unwrap();
        assert_eq!(schedule.total_movement(), 122);
        assert_eq!(schedule.service_sequence(), &[0, 4, 1, 3, 2]);
        assert_eq!(schedule.start_position(), Some(50));
    }

    #[test]
    fn reverses_at_last_request_not_disk_edge() {
        // Up to 70 then down to 10: 20 + 60, never touching track 99.
        let workload = Workload::new(vec![10, 70, 60]);
        let schedule = ScanScheduler.schedule(&workload, 50).unwrap();
        assert_eq!(schedule.total_movement(), 80);
        assert_eq!(schedule.service_sequence(), &[2, 1, 0]);
    }

    #[test]
    fn starts_downward_sweep_when_nothing_lies_above() {
        let workload = Workload::new(vec![30, 10, 20]);
        let schedule = ScanScheduler.schedule(&workload, 90).unwrap();
        assert_eq!(schedule.service_sequence(), &[0, 2, 1]);
        assert_eq!(schedule.total_movement(), 80);
    }

    #[test]
    fn requests_at_head_are_serviced_on_the_way_up() {
        let workload = Workload::new(vec![40, 50, 50]);
        let schedule = ScanScheduler.schedule(&workload, 50).unwrap();
        assert_eq!(schedule.service_sequence(), &[1, 2, 0]);
        assert_eq!(schedule.total_movement(), 10);
    }

    #[test]
    fn each_pass_respects_its_direction() {
        let workload = Workload::new(vec![5, 95, 45, 55, 20, 80, 50]);
        let schedule = ScanScheduler.schedule(&workload, 50).unwrap();
        let visited: Vec<i32> = schedule
            .service_sequence()
            .iter()
            .map(|&index| workload.tracks()[index])
            .collect();
        assert_eq!(visited, vec![50, 55, 80, 95, 45, 20, 5]);
    }

    proptest! {
        #[test]
        fn climbs_then_descends_once(
            tracks in vec(0..100i32, 1..60),
            initial in 0..100i32,
        ) {
            let workload = Workload::new(tracks.clone());
            let schedule = ScanScheduler.schedule(&workload, initial).unwrap();
            let visited: Vec<i32> = schedule
                .service_sequence()
                .iter()
                .map(|&index| tracks[index])
                .collect();

            let above = tracks.iter().filter(|&&track| track >= initial).count();
            let (up, down) = visited.split_at(above);
            prop_assert!(up.iter().all(|&track| track >= initial));
            prop_assert!(up.windows(2).all(|pair| pair[0] <= pair[1]));
            prop_assert!(down.iter().all(|&track| track < initial));
            prop_assert!(down.windows(2).all(|pair| pair[0] >= pair[1]));

            let mut head = initial;
            let mut expected = 0u64;
            for &track in &visited {
                expected += u64::from(track.abs_diff(head));
                head = track;
            }
            prop_assert_eq!(schedule.total_movement(), expected);
        }
    }
}
