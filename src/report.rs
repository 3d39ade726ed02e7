use crate::analysis::{detail, FairnessReport, Histogram, StrategyReport};
use crate::scheduler::Strategy;
use std::io::{self, Write};

const BAR: &str = "█";

/// Writes the console report: movement totals for every strategy, then
/// fairness and histogram blocks for each strategy measured against FIFO.
pub fn write_report<W: Write>(
    out: &mut W,
    initial_position: i32,
    reports: &[StrategyReport],
) -> io::Result<()> {
    writeln!(out, "\n=== Disk Scheduling Algorithm Performance ===")?;
    writeln!(out, "Initial head position: {}", initial_position)?;
    for report in reports {
        writeln!(
            out,
            "{}: {} tracks traversed",
            report.schedule.strategy().name(),
            report.schedule.total_movement()
        )?;
    }

    writeln!(out, "\n=== Fairness Analysis (compared to FIFO) ===")?;
    for report in reports
        .iter()
        .filter(|report| report.schedule.strategy() != Strategy::Fifo)
    {
        let name = report.schedule.strategy().name();
        writeln!(out, "\n{} Fairness:", name)?;
        write_fairness(out, report)?;
        writeln!(out, "\n{} Delay Histogram:", name)?;
        write_histogram(out, &report.histogram)?;
    }
    Ok(())
}

pub fn write_fairness<W: Write>(out: &mut W, report: &StrategyReport) -> io::Result<()> {
    let fairness: &FairnessReport = &report.fairness;

    writeln!(out, "Longest delay: {} requests", fairness.max_delay())?;
    writeln!(
        out,
        "Requests delayed: {} out of {} ({:.2}%)",
        fairness.delayed_count(),
        fairness.requests(),
        fairness.delayed_percentage()
    )?;
    write_mean(
        out,
        "Average delay for delayed requests",
        fairness.delayed_count(),
        fairness.mean_delay(),
    )?;
    writeln!(
        out,
        "Requests serviced early: {} out of {} ({:.2}%)",
        fairness.early_count(),
        fairness.requests(),
        fairness.early_percentage()
    )?;
    write_mean(
        out,
        "Average early service",
        fairness.early_count(),
        fairness.mean_early(),
    )?;

    writeln!(out, "\nDetail for first {} requests:", FairnessReport::DETAIL_ROWS)?;
    writeln!(out, "Track | Entry Order | Service Order | Delay")?;
    writeln!(out, "------|-------------|--------------|------")?;
    for request in detail(report.schedule.requests()) {
        writeln!(
            out,
            "{:<5} | {:<11} | {:<12} | {:<5}",
            request.track(),
            request.entry_order(),
            request.service_order(),
            request.delay()
        )?;
    }
    Ok(())
}

// An empty group prints a bare 0 instead of a formatted mean.
fn write_mean<W: Write>(out: &mut W, label: &str, count: usize, mean: f64) -> io::Result<()> {
    if count > 0 {
        writeln!(out, "{}: {:.2} requests", label, mean)
    } else {
        writeln!(out, "{}: 0", label)
    }
}

pub fn write_histogram<W: Write>(out: &mut W, histogram: &Histogram) -> io::Result<()> {
    writeln!(
        out,
        "Track Range | Avg Delay | Max Delay | Histogram (each {} = approx. 1 unit of delay)",
        BAR
    )?;
    writeln!(out, "------------|-----------|-----------|-----------------------------------")?;

    for bin in histogram.bins() {
        let (first, last) = bin.range();
        writeln!(
            out,
            "{:>2} - {:>2}     | {:>9.2} | {:>9} | {}",
            first,
            last,
            bin.mean_delay(),
            bin.max_delay(),
            BAR.repeat(bin.bar_len())
        )?;
    }
    Ok(())
}
