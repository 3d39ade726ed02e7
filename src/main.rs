use anyhow::Context;
use clap::Parser;
use disk_head_scheduler::{
    analysis::StrategyReport,
    config::{Args, SimulationConfig},
    report, scheduler, viewer,
    workload::Workload,
};
use log::info;
use std::io;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = SimulationConfig::from(Args::parse());
    let path = config.workload_file.as_path();

    if !config.reuse_workload {
        println!(
            "Generating {} random track requests with seed {}",
            config.requests, config.seed
        );
        Workload::generate(config.requests, config.seed, config.track_space)
            .save(path)
            .with_context(|| format!("failed to write workload to {}", path.display()))?;
    }

    let workload = Workload::load(path, config.track_space)
        .with_context(|| format!("failed to read workload from {}", path.display()))?;
    println!("Testing with {} track requests", workload.len());

    let reports: Vec<StrategyReport> = scheduler::schedule_all(&workload, config.initial_position)
        .context("scheduling failed")?
        .into_iter()
        .map(|schedule| StrategyReport::new(schedule, config.track_space))
        .collect();
    info!("Scheduled {} strategies", reports.len());

    report::write_report(&mut io::stdout().lock(), config.initial_position, &reports)?;

    if config.interactive {
        viewer::browse(&reports).context("terminal viewer failed")?;
    }
    Ok(())
}
