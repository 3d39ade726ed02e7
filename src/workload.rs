use log::{debug, info, warn};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use std::{fs, io, path::Path};
use thiserror::Error;

/// Errors raised while reading or writing a workload file.
#[derive(Error, Debug)]
pub enum WorkloadError {
    #[error("failed to access workload file: {0}")]
    Io(#[from] io::Error),

    #[error("workload file is missing the request count")]
    MissingCount,

    #[error("invalid request count {0:?}")]
    InvalidCount(String),

    #[error("invalid track {value:?} for request {index}")]
    InvalidTrack { index: usize, value: String },

    #[error("track {track} for request {index} is outside 0..{track_space}")]
    TrackOutOfRange {
        index: usize,
        track: i32,
        track_space: i32,
    },

    #[error("expected {expected} requests but the file holds {found}")]
    Truncated { expected: usize, found: usize },
}

/// An ordered, immutable sequence of track requests.
///
/// A request's entry order is its index in the sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workload {
    tracks: Vec<i32>,
}

impl Workload {
    pub const DEFAULT_TRACK_SPACE: i32 = 100;

    pub fn new(tracks: Vec<i32>) -> Self {
        Self { tracks }
    }

    /// Draws `count` tracks uniformly from `0..track_space`.
    ///
    /// The same seed always yields the same workload.
    pub fn generate(count: usize, seed: u64, track_space: i32) -> Self {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let upper = track_space.max(1);
        let tracks = (0..count).map(|_| rng.gen_range(0..upper)).collect();

        info!("Generated {} track requests with seed {}", count, seed);
        Self { tracks }
    }

    pub fn tracks(&self) -> &[i32] {
        &self.tracks
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Parses the line-oriented workload format: a request count followed by
    /// that many track numbers. Tokens past the declared count are ignored.
    pub fn parse(content: &str, track_space: i32) -> Result<Self, WorkloadError> {
        let mut tokens = content.split_whitespace();

        let count_token = tokens.next().ok_or(WorkloadError::MissingCount)?;
        let count: usize = count_token
            .parse()
            .map_err(|_| WorkloadError::InvalidCount(count_token.to_owned()))?;

        let mut tracks = Vec::with_capacity(count);
        for index in 0..count {
            let token = tokens.next().ok_or(WorkloadError::Truncated {
                expected: count,
                found: index,
            })?;
            let track: i32 = token.parse().map_err(|_| WorkloadError::InvalidTrack {
                index,
                value: token.to_owned(),
            })?;
            if !(0..track_space).contains(&track) {
                return Err(WorkloadError::TrackOutOfRange {
                    index,
                    track,
                    track_space,
                });
            }
            tracks.push(track);
        }

        if tracks.is_empty() {
            warn!("Workload declares zero requests");
        }
        Ok(Self { tracks })
    }

    /// Renders the workload in the same format `parse` reads.
    pub fn render(&self) -> String {
        let mut out = format!("{}\n", self.tracks.len());
        for track in &self.tracks {
            out.push_str(&track.to_string());
            out.push('\n');
        }
        out
    }

    pub fn load(path: &Path, track_space: i32) -> Result<Self, WorkloadError> {
        let content = fs::read_to_string(path)?;
        let workload = Self::parse(&content, track_space)?;
        info!(
            "Loaded {} track requests from {}",
            workload.len(),
            path.display()
        );
        Ok(workload)
    }

    pub fn save(&self, path: &Path) -> Result<(), WorkloadError> {
        fs::write(path, self.render())?;
        debug!("Wrote {} track requests to {}", self.len(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_reads_count_then_tracks() {
        let workload = Workload::parse("5\n50\n91\n10\n25\n63\n", 100).unwrap();
        assert_eq!(workload.tracks(), &[50, 91, 10, 25, 63]);
    }

    #[test]
    fn parse_skips_blank_lines_and_ignores_trailing_tokens() {
        let workload = Workload::parse("\n2\n\n7\n8\n9\n", 100).unwrap();
        assert_eq!(workload.tracks(), &[7, 8]);
    }

    #[test]
    fn parse_accepts_zero_requests() {
        let workload = Workload::parse("0\n", 100).unwrap();
        assert!(workload.is_empty());
    }

    #[test]
    fn parse_rejects_malformed_input() {
        assert!(matches!(
            Workload::parse("", 100),
            Err(WorkloadError::MissingCount)
        ));
        assert!(matches!(
            Workload::parse("-3\n", 100),
            Err(WorkloadError::InvalidCount(value)) if value == "-3"
        ));
        assert!(matches!(
            Workload::parse("2\n4\nx\n", 100),
            Err(WorkloadError::InvalidTrack { index: 1, .. })
        ));
        assert!(matches!(
            Workload::parse("3\n4\n5\n", 100),
            Err(WorkloadError::Truncated {
                expected: 3,
                found: 2
            })
        ));
        assert!(matches!(
            Workload::parse("1\n100\n", 100),
            Err(WorkloadError::TrackOutOfRange { track: 100, .. })
        ));
    }

    #[test]
    fn rendered_workload_parses_back() {
        let workload = Workload::new(vec![0, 99, 42]);
        assert_eq!(workload.render(), "3\n0\n99\n42\n");
        assert_eq!(Workload::parse(&workload.render(), 100).unwrap(), workload);
    }

    #[test]
    fn generation_is_reproducible_and_in_range() {
        let first = Workload::generate(500, 42, 100);
        let second = Workload::generate(500, 42, 100);
        assert_eq!(first, second);
        assert_eq!(first.len(), 500);
        assert!(first.tracks().iter().all(|track| (0..100).contains(track)));
        assert_ne!(first, Workload::generate(500, 43, 100));
    }

    #[test]
    fn save_then_load_from_disk() {
        let path = std::env::temp_dir().join(format!(
            "disk-sched-workload-{}.txt",
            std::process::id()
        ));
        let workload = Workload::generate(20, 7, 100);
        workload.save(&path).unwrap();
        let loaded = Workload::load(&path, 100).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(loaded, workload);
    }

    #[test]
    fn load_reports_missing_file() {
        let path = std::env::temp_dir().join("disk-sched-does-not-exist.txt");
        assert!(matches!(
            Workload::load(&path, 100),
            Err(WorkloadError::Io(_))
        ));
    }
}
