mod display;
mod runner;

use crate::analysis::StrategyReport;
use std::io;

use runner::ReportViewer;

/// Opens the terminal viewer and blocks until the user quits.
pub fn browse(reports: &[StrategyReport]) -> Result<(), io::Error> {
    let mut viewer = ReportViewer::new(reports)?;
    while viewer.run()? {}
    Ok(())
}
