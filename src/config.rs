use crate::workload::Workload;
use clap::Parser;
use std::{
    path::PathBuf,
    time::{SystemTime, UNIX_EPOCH},
};

#[derive(Parser, Debug)]
#[command(name = "disk-sched")]
#[command(about = "Compare FIFO, SSTF, SCAN and C-SCAN head scheduling over a random workload")]
pub struct Args {
    /// Number of track requests to generate.
    #[arg(default_value_t = SimulationConfig::DEFAULT_REQUESTS)]
    requests: usize,

    /// Seed for the workload generator (defaults to the current time).
    seed: Option<u64>,

    /// Head position SCAN and C-SCAN start from.
    #[arg(long, default_value_t = SimulationConfig::DEFAULT_INITIAL_POSITION)]
    initial_position: i32,

    /// Number of tracks on the simulated disk.
    #[arg(long, default_value_t = Workload::DEFAULT_TRACK_SPACE,
          value_parser = clap::value_parser!(i32).range(10..))]
    track_space: i32,

    /// Where the workload is written to and read back from.
    #[arg(long, default_value = SimulationConfig::DEFAULT_WORKLOAD_FILE)]
    workload_file: PathBuf,

    /// Read the existing workload file instead of generating a new one.
    #[arg(long)]
    reuse_workload: bool,

    /// Browse the results in a terminal viewer.
    #[arg(long)]
    interactive: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationConfig {
    pub requests: usize,
    pub seed: u64,
    pub initial_position: i32,
    pub track_space: i32,
    pub workload_file: PathBuf,
    pub reuse_workload: bool,
    pub interactive: bool,
}

impl SimulationConfig {
    pub const DEFAULT_REQUESTS: usize = 100;
    pub const DEFAULT_INITIAL_POSITION: i32 = 50;
    pub const DEFAULT_WORKLOAD_FILE: &'static str = "track_requests.txt";
}

impl From<Args> for SimulationConfig {
    fn from(args: Args) -> Self {
        let seed = args.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|elapsed| elapsed.as_secs())
                .unwrap_or_default()
        });

        Self {
            requests: args.requests,
            seed,
            initial_position: args.initial_position,
            track_space: args.track_space,
            workload_file: args.workload_file,
            reuse_workload: args.reuse_workload,
            interactive: args.interactive,
        }
    }
}
