use super::runner::RunnerEvent;
use crate::analysis::{detail, StrategyReport};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::warn;
use std::{
    io::{self, Stdout},
    sync::mpsc::{self, Receiver},
    thread,
    time::{Duration, Instant},
};
use tui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Span, Spans},
    widgets::{BarChart, Block, BorderType, Borders, Cell, Paragraph, Row, Table},
    Frame, Terminal,
};

pub enum DisplayEvent {
    Input(KeyEvent),
    Tick,
}

const TICK_RATE: Duration = Duration::from_millis(200);

pub struct DisplayTerminal {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    input_rx: Receiver<DisplayEvent>,
}

impl DisplayTerminal {
    pub fn new() -> Result<Self, io::Error> {
        enable_raw_mode()?;
        let terminal = undo_on_error(Self::enter_screen(), "leave raw mode", disable_raw_mode)?;

        // Set up the input handling thread; it exits once the viewer hangs up
        let (input_tx, input_rx) = mpsc::channel();
        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                let timeout = TICK_RATE
                    .checked_sub(last_tick.elapsed())
                    .unwrap_or(Duration::ZERO);

                match event::poll(timeout) {
                    Ok(true) => {
                        if let Ok(Event::Key(key)) = event::read() {
                            if input_tx.send(DisplayEvent::Input(key)).is_err() {
                                break;
                            }
                        }
                    }
                    Ok(false) => {}
                    Err(err) => {
                        warn!("Stopped polling terminal input: {}", err);
                        break;
                    }
                }

                if last_tick.elapsed() >= TICK_RATE {
                    if input_tx.send(DisplayEvent::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Ok(Self { terminal, input_rx })
    }

    fn enter_screen() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
        execute!(io::stdout(), EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(io::stdout());
        undo_on_error(Terminal::new(backend), "restore the screen", || {
            execute!(io::stdout(), LeaveAlternateScreen)
        })
    }

    pub fn draw(
        &mut self,
        report: &StrategyReport,
        position: usize,
        total: usize,
    ) -> io::Result<()> {
        self.terminal.draw(|f| render(f, report, position, total))?;
        Ok(())
    }

    pub fn get_input(&self) -> RunnerEvent {
        // A closed channel means input can no longer arrive, so leave
        let event = match self.input_rx.recv() {
            Ok(event) => event,
            Err(_) => return RunnerEvent::Quit,
        };

        if let DisplayEvent::Input(key) = event {
            if key.modifiers.is_empty() {
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return RunnerEvent::Quit,
                    KeyCode::Char('n') | KeyCode::Right => return RunnerEvent::Next,
                    KeyCode::Char('p') | KeyCode::Left => return RunnerEvent::Previous,
                    _ => {}
                }
            }
        }
        RunnerEvent::None
    }
}

impl Drop for DisplayTerminal {
    fn drop(&mut self) {
        if let Err(err) = disable_raw_mode() {
            warn!("Failed to leave raw mode: {}", err);
        }
        if let Err(err) = execute!(self.terminal.backend_mut(), LeaveAlternateScreen) {
            warn!("Failed to restore the screen: {}", err);
        }
        if let Err(err) = self.terminal.show_cursor() {
            warn!("Failed to show the cursor: {}", err);
        }
    }
}

/// Runs `undo` when `result` failed, so a half-initialised terminal is put
/// back before the error is returned.
fn undo_on_error<T, F>(result: io::Result<T>, step: &str, undo: F) -> io::Result<T>
where
    F: FnOnce() -> io::Result<()>,
{
    if result.is_err() {
        if let Err(err) = undo() {
            warn!("Failed to {}: {}", step, err);
        }
    }
    result
}

/// Lays out one strategy's results: a title bar, the first requests in entry
/// order next to the fairness summary, and the delay histogram underneath.
pub fn render<B: Backend>(
    f: &mut Frame<B>,
    report: &StrategyReport,
    position: usize,
    total: usize,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Length(3), Constraint::Length(14), Constraint::Min(8)])
        .split(f.size());

    let schedule = &report.schedule;
    let title = Paragraph::new(format!(
        "{} | {} tracks traversed | {} of {} | n/p: switch, q: quit",
        schedule.strategy().name(),
        schedule.total_movement(),
        position + 1,
        total
    ))
    .style(
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::LightBlue),
    )
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("Strategy")
            .border_type(BorderType::Rounded),
    );
    f.render_widget(title, chunks[0]);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    let rows = detail(schedule.requests()).iter().map(|request| {
        Row::new(vec![
            Cell::from(request.track().to_string())
                .style(Style::default().add_modifier(Modifier::BOLD)),
            Cell::from(request.entry_order().to_string()),
            Cell::from(request.service_order().to_string()),
            Cell::from(request.delay().to_string()),
        ])
    });
    let table = Table::new(rows)
        .header(
            Row::new(vec!["Track", "Entry", "Service", "Delay"])
                .style(Style::default().add_modifier(Modifier::BOLD)),
        )
        .widths(&[
            Constraint::Length(6),
            Constraint::Length(6),
            Constraint::Length(8),
            Constraint::Length(6),
        ])
        .block(Block::default().title("First requests").borders(Borders::ALL))
        .style(Style::default().fg(Color::LightGreen))
        .column_spacing(1);
    f.render_widget(table, middle[0]);

    let fairness = &report.fairness;
    let start = match schedule.start_position() {
        Some(track) => track.to_string(),
        None => "-".to_owned(),
    };
    let summary = Paragraph::new(vec![
        Spans::from(format!("Head start: {}", start)),
        Spans::from(format!("Longest delay: {}", fairness.max_delay())),
        Spans::from(format!(
            "Delayed: {} of {} ({:.2}%)",
            fairness.delayed_count(),
            fairness.requests(),
            fairness.delayed_percentage()
        )),
        Spans::from(format!("Mean delay: {:.2}", fairness.mean_delay())),
        Spans::from(format!(
            "Early: {} of {} ({:.2}%)",
            fairness.early_count(),
            fairness.requests(),
            fairness.early_percentage()
        )),
        Spans::from(format!("Mean early: {:.2}", fairness.mean_early())),
        Spans::from(""),
        Spans::from(Span::styled(
            format!("Bar scale: {:.2} per unit", report.histogram.scale()),
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .block(Block::default().title("Fairness").borders(Borders::ALL));
    f.render_widget(summary, middle[1]);

    let labels: Vec<String> = report
        .histogram
        .bins()
        .iter()
        .map(|bin| format!("{}-{}", bin.range().0, bin.range().1))
        .collect();
    let data: Vec<(&str, u64)> = labels
        .iter()
        .zip(report.histogram.bins())
        .map(|(label, bin)| (label.as_str(), bin.bar_len() as u64))
        .collect();
    let chart = BarChart::default()
        .block(
            Block::default()
                .title("Mean delay by track range")
                .borders(Borders::ALL),
        )
        .data(&data)
        .bar_width(6)
        .bar_gap(1)
        .bar_style(Style::default().fg(Color::Yellow))
        .value_style(Style::default().fg(Color::Black).bg(Color::Yellow));
    f.render_widget(chart, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::schedule_all;
    use crate::scheduler::tests::reference_workload;
    use tui::backend::TestBackend;

    #[test]
    fn frame_shows_strategy_and_fairness() {
        let report = schedule_all(&reference_workload(), 50)
            .unwrap()
            .into_iter()
            .map(|schedule| StrategyReport::new(schedule, 100))
            .nth(1)
            .unwrap();

        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|f| render(f, &report, 1, 4)).unwrap();

        let screen: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol.as_str())
            .collect();
        assert!(screen.contains("SSTF | 122 tracks traversed | 2 of 4"));
        assert!(screen.contains("Longest delay: 2"));
        assert!(screen.contains("Delayed: 2 of 5 (40.00%)"));
        assert!(screen.contains("10-19"));
    }

    #[test]
    fn failed_setup_step_is_undone() {
        let mut undone = 0;
        let failed: io::Result<()> = Err(io::Error::new(io::ErrorKind::Other, "no tty"));
        let result = undo_on_error(failed, "leave raw mode", || {
            undone += 1;
            Ok(())
        });
        assert!(result.is_err());
        assert_eq!(undone, 1);
    }

    #[test]
    fn successful_setup_step_is_kept() {
        let mut undone = 0;
        let result = undo_on_error(Ok(7), "leave raw mode", || {
            undone += 1;
            Ok(())
        });
        assert_eq!(result.unwrap(), 7);
        assert_eq!(undone, 0);
    }

    #[test]
    fn failing_undo_still_returns_the_original_error() {
        let failed: io::Result<()> = Err(io::Error::new(io::ErrorKind::Other, "no tty"));
        let result = undo_on_error(failed, "restore the screen", || {
            Err(io::Error::new(io::ErrorKind::Other, "still no tty"))
        });
        assert_eq!(result.unwrap_err().to_string(), "no tty");
    }
}
