use super::display::DisplayTerminal;
use crate::analysis::StrategyReport;
use std::io;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunnerEvent {
    Quit,
    Next,
    Previous,
    None,
}

pub struct ReportViewer<'a> {
    terminal: DisplayTerminal,
    reports: &'a [StrategyReport],
    selected: usize,
}

impl<'a> ReportViewer<'a> {
    pub fn new(reports: &'a [StrategyReport]) -> Result<Self, io::Error> {
        let terminal = DisplayTerminal::new()?;

        Ok(Self {
            terminal,
            reports,
            selected: 0,
        })
    }

    // Returns false if the viewer should close
    pub fn run(&mut self) -> Result<bool, io::Error> {
        let Some(report) = self.reports.get(self.selected) else {
            return Ok(false);
        };
        self.terminal.draw(report, self.selected, self.reports.len())?;

        match self.terminal.get_input() {
            RunnerEvent::Quit => return Ok(false),
            event => self.selected = select(self.selected, self.reports.len(), event),
        }
        Ok(true)
    }
}

/// The strategy shown after `event`, wrapping around at either end.
fn select(selected: usize, total: usize, event: RunnerEvent) -> usize {
    if total == 0 {
        return 0;
    }
    match event {
        RunnerEvent::Next => (selected + 1) % total,
        RunnerEvent::Previous => (selected + total - 1) % total,
        RunnerEvent::Quit | RunnerEvent::None => selected,
    }
}
