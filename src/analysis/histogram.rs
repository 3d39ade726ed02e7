use crate::scheduler::{Request, Schedule};

/// Delay statistics for one contiguous range of tracks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistogramBin {
    first_track: i32,
    last_track: i32,
    count: usize,
    delay_sum: i64,
    max_delay: i64,
    bar_len: usize,
}

impl HistogramBin {
    fn empty(first_track: i32, last_track: i32) -> Self {
        Self {
            first_track,
            last_track,
            count: 0,
            delay_sum: 0,
            max_delay: 0,
            bar_len: 0,
        }
    }

    /// Inclusive track range covered by this bin.
    pub fn range(&self) -> (i32, i32) {
        (self.first_track, self.last_track)
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn mean_delay(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        self.delay_sum as f64 / self.count as f64
    }

    /// Largest delay above zero in this bin. A bin holding only early
    /// requests reports 0, not its least negative delay.
    pub fn max_delay(&self) -> i64 {
        self.max_delay
    }

    pub fn bar_len(&self) -> usize {
        self.bar_len
    }
}

/// Mean delay per track range, scaled into bars for display.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    bins: Vec<HistogramBin>,
    scale: f64,
}

impl Histogram {
    pub const BIN_COUNT: usize = 10;
    pub const RENDER_WIDTH: usize = 50;

    pub fn build(schedule: &Schedule, track_space: i32) -> Self {
        Self::from_requests(schedule.requests(), track_space)
    }

    pub fn from_requests(requests: &[Request], track_space: i32) -> Self {
        let bin_width = (track_space / Self::BIN_COUNT as i32).max(1);
        let mut bins: Vec<HistogramBin> = (0..Self::BIN_COUNT as i32)
            .map(|bin| HistogramBin::empty(bin * bin_width, (bin + 1) * bin_width - 1))
            .collect();

        for request in requests {
            let bin = &mut bins[Self::bin_index(request.track(), bin_width)];
            let delay = request.delay();
            bin.count += 1;
            bin.delay_sum += delay;
            if delay > bin.max_delay {
                bin.max_delay = delay;
            }
        }

        // Bars are scaled against the largest mean, floored at zero so that
        // schedules that only pull requests earlier still get a finite scale.
        let max_mean = bins
            .iter()
            .filter(|bin| bin.count > 0)
            .map(HistogramBin::mean_delay)
            .fold(0.0_f64, f64::max);
        let scale = (Self::RENDER_WIDTH as f64 / (max_mean.floor() + 1.0)).max(1.0);

        for bin in &mut bins {
            bin.bar_len = (bin.mean_delay() * scale).floor().max(0.0) as usize;
        }

        Self { bins, scale }
    }

    fn bin_index(track: i32, bin_width: i32) -> usize {
        (track / bin_width).clamp(0, Self::BIN_COUNT as i32 - 1) as usize
    }

    pub fn bins(&self) -> &[HistogramBin] {
        &self.bins
    }

    /// Bar characters per unit of mean delay.
    pub fn scale(&self) -> f64 {
        self.scale
    }
}
