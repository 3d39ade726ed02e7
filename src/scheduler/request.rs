/// One workload entry as serviced by a single strategy run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Request {
    track: i32,
    entry_order: usize,
    service_order: usize,
}

impl Request {
    pub fn new(track: i32, entry_order: usize, service_order: usize) -> Self {
        Self {
            track,
            entry_order,
            service_order,
        }
    }

    pub fn track(&self) -> i32 {
        self.track
    }

    pub fn entry_order(&self) -> usize {
        self.entry_order
    }

    pub fn service_order(&self) -> usize {
        self.service_order
    }

    /// Positive when serviced later than arrival order, negative when earlier.
    pub fn delay(&self) -> i64 {
        self.service_order as i64 - self.entry_order as i64
    }
}
