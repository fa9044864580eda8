//! Terminal event loop for the interactive report.

use crate::report::panel::ReportPanel;
use crate::session::AnalysisSession;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Run the interactive report over the session's current result until
/// the user quits. `r` re-derives the document from the session, the
/// arrow keys scroll, `q`/Esc exits.
pub fn run(session: &AnalysisSession) -> anyhow::Result<()> {
    let mut terminal = ratatui::init();
    let mut panel = ReportPanel::new();
    panel.refresh(session.current());

    let outcome = event_loop(&mut terminal, &mut panel, session);
    ratatui::restore();
    outcome
}

fn event_loop(
    terminal: &mut ratatui::DefaultTerminal,
    panel: &mut ReportPanel,
    session: &AnalysisSession,
) -> anyhow::Result<()> {
    loop {
        terminal.draw(|frame| panel.render(frame))?;

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Char('r') => panel.refresh(session.current()),
                KeyCode::Up | KeyCode::Char('k') => panel.scroll_up(),
                KeyCode::Down | KeyCode::Char('j') => panel.scroll_down(),
                _ => {}
            }
        }
    }
}
