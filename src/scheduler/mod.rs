mod c_scan;
mod fifo;
mod request;
mod scan;
mod sstf;

use crate::workload::Workload;
use log::{debug, warn};
use std::{cmp::Reverse, collections::TryReserveError};
use thiserror::Error;

pub use c_scan::CScanScheduler;
pub use fifo::FifoScheduler;
pub use request::Request;
pub use scan::ScanScheduler;
pub use sstf::SstfScheduler;

#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("failed to reserve bookkeeping for {requests} requests: {source}")]
    Bookkeeping {
        requests: usize,
        #[source]
        source: TryReserveError,
    },
}

/// A head scheduling strategy.
///
/// Strategies disagree on where the head starts: FIFO and SSTF begin at the
/// first request's track and ignore the supplied initial position, while SCAN
/// and C-SCAN begin at the supplied position. `effective_start_position`
/// reports which one a strategy uses.
pub trait Scheduler {
    const NAME: &'static str;
    const STRATEGY: Strategy;

    /// Head position before the first request is serviced, or `None` when
    /// the workload is empty and there is nothing to service.
    fn effective_start_position(&self, workload: &Workload, initial_position: i32) -> Option<i32>;

    fn schedule(
        &self,
        workload: &Workload,
        initial_position: i32,
    ) -> Result<Schedule, ScheduleError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    Fifo,
    Sstf,
    Scan,
    CScan,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::Fifo,
        Strategy::Sstf,
        Strategy::Scan,
        Strategy::CScan,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Fifo => FifoScheduler::NAME,
            Strategy::Sstf => SstfScheduler::NAME,
            Strategy::Scan => ScanScheduler::NAME,
            Strategy::CScan => CScanScheduler::NAME,
        }
    }

    pub fn schedule(
        self,
        workload: &Workload,
        initial_position: i32,
    ) -> Result<Schedule, ScheduleError> {
        match self {
            Strategy::Fifo => FifoScheduler.schedule(workload, initial_position),
            Strategy::Sstf => SstfScheduler.schedule(workload, initial_position),
            Strategy::Scan => ScanScheduler.schedule(workload, initial_position),
            Strategy::CScan => CScanScheduler.schedule(workload, initial_position),
        }
    }
}

/// Runs every strategy over the same workload, each with its own bookkeeping.
pub fn schedule_all(
    workload: &Workload,
    initial_position: i32,
) -> Result<Vec<Schedule>, ScheduleError> {
    Strategy::ALL
        .iter()
        .map(|strategy| strategy.schedule(workload, initial_position))
        .collect()
}

/// The outcome of one strategy run over a workload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    strategy: Strategy,
    start_position: Option<i32>,
    total_movement: u64,
    sequence: Vec<usize>,
    requests: Vec<Request>,
}

impl Schedule {
    fn empty(strategy: Strategy) -> Self {
        warn!("{} received an empty workload", strategy.name());
        Self {
            strategy,
            start_position: None,
            total_movement: 0,
            sequence: Vec::new(),
            requests: Vec::new(),
        }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn start_position(&self) -> Option<i32> {
        self.start_position
    }

    pub fn total_movement(&self) -> u64 {
        self.total_movement
    }

    /// Entry indices in the order they were serviced.
    pub fn service_sequence(&self) -> &[usize] {
        &self.sequence
    }

    /// Requests indexed by entry order.
    pub fn requests(&self) -> &[Request] {
        &self.requests
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Up,
    Down,
}

impl Direction {
    fn reaches(self, head: i32, track: i32) -> bool {
        match self {
            Direction::Up => track >= head,
            Direction::Down => track <= head,
        }
    }

    fn reversed(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }
}

/// Per-run state: which requests are done, in what order, and where the
/// head is.
struct Bookkeeping<'a> {
    tracks: &'a [i32],
    serviced: Vec<bool>,
    sequence: Vec<usize>,
    start: i32,
    head: i32,
    total_movement: u64,
}

impl<'a> Bookkeeping<'a> {
    fn reserve(workload: &'a Workload, start: i32) -> Result<Self, ScheduleError> {
        let requests = workload.len();
        let reserve_failed =
            |source: TryReserveError| ScheduleError::Bookkeeping { requests, source };

        let mut serviced = Vec::new();
        serviced.try_reserve_exact(requests).map_err(reserve_failed)?;
        serviced.resize(requests, false);

        let mut sequence = Vec::new();
        sequence.try_reserve_exact(requests).map_err(reserve_failed)?;

        Ok(Self {
            tracks: workload.tracks(),
            serviced,
            sequence,
            start,
            head: start,
            total_movement: 0,
        })
    }

    fn head(&self) -> i32 {
        self.head
    }

    fn is_serviced(&self, index: usize) -> bool {
        self.serviced[index]
    }

    fn remaining(&self) -> usize {
        self.tracks.len() - self.sequence.len()
    }

    /// Moves the head to `index`'s track, charging the distance travelled.
    fn service(&mut self, index: usize) {
        let track = self.tracks[index];
        self.total_movement += u64::from(track.abs_diff(self.head));
        self.head = track;
        self.serviced[index] = true;
        self.sequence.push(index);
    }

    /// Repositions the head without charging any movement.
    fn jump(&mut self, track: i32) {
        self.head = track;
    }

    /// Services every unserviced request accepted by `reachable`, ordered by
    /// track in the direction of travel. Returns how many were serviced.
    fn sweep<F>(&mut self, direction: Direction, reachable: F) -> usize
    where
        F: Fn(i32) -> bool,
    {
        let tracks = self.tracks;
        let mut pass: Vec<usize> = (0..tracks.len())
            .filter(|&index| !self.serviced[index] && reachable(tracks[index]))
            .collect();

        match direction {
            Direction::Up => pass.sort_by_key(|&index| tracks[index]),
            Direction::Down => pass.sort_by_key(|&index| Reverse(tracks[index])),
        }

        debug!(
            "{:?} pass from track {} services {} requests",
            direction,
            self.head,
            pass.len()
        );
        for &index in &pass {
            self.service(index);
        }
        pass.len()
    }

    fn finish(self, strategy: Strategy) -> Schedule {
        let mut service_orders = vec![0; self.tracks.len()];
        for (order, &index) in self.sequence.iter().enumerate() {
            service_orders[index] = order;
        }
        debug_assert_eq!(self.sequence.len(), self.tracks.len());

        let requests = self
            .tracks
            .iter()
            .enumerate()
            .map(|(entry, &track)| Request::new(track, entry, service_orders[entry]))
            .collect();

        debug!(
            "{} moved the head {} tracks over {} requests",
            strategy.name(),
            self.total_movement,
            self.tracks.len()
        );
        Schedule {
            strategy,
            start_position: Some(self.start),
            total_movement: self.total_movement,
            sequence: self.sequence,
            requests,
        }
    }
}
