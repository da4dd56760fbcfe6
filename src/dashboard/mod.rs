//! Interactive terminal dashboard.
//!
//! One `Dashboard` is one user session: it owns the navigation state, the
//! cursor over the skill grid and the detail summary of the open page. The
//! dataset itself is shared read-only.

pub mod panic_hook;
pub mod render;

use crate::aggregator::{detail_for, top_skills};
use crate::navigation::NavigationState;
use crate::parser::dataset::Dataset;
use crate::parser::schema::{DetailSummary, SkillRanking};
use crate::utils::config::SKILL_GRID_COLUMNS;
use anyhow::{Context, Result};
use log::debug;
use ratatui::backend::CrosstermBackend;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::Terminal;
use std::io;
use std::sync::Arc;
use std::time::Duration;

/// Dashboard session state
pub struct Dashboard {
    dataset: Arc<Dataset>,
    ranking: SkillRanking,
    top_n: usize,
    navigation: NavigationState,
    /// Index into `ranking` of the highlighted skill
    cursor: usize,
    /// Summary for the open detail page
    detail: Option<DetailSummary>,
    should_quit: bool,
}

impl Dashboard {
    /// Start a session on the overview page
    pub fn new(dataset: Arc<Dataset>, top_n: usize) -> Self {
        let ranking = top_skills(&dataset, top_n);
        Self {
            dataset,
            ranking,
            top_n,
            navigation: NavigationState::new(),
            cursor: 0,
            detail: None,
            should_quit: false,
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn ranking(&self) -> &SkillRanking {
        &self.ranking
    }

    pub fn top_n(&self) -> usize {
        self.top_n
    }

    pub fn navigation(&self) -> &NavigationState {
        &self.navigation
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn detail(&self) -> Option<&DetailSummary> {
        self.detail.as_ref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Open the detail page for `skill`, recomputing its summary
    pub fn select_skill(&mut self, skill: &str) {
        if self.navigation.select(skill) {
            debug!("Selected skill: {}", skill);
            self.detail = Some(detail_for(&self.dataset, skill));
        }
    }

    /// Return to the overview page
    pub fn go_back(&mut self) {
        if self.navigation.go_back() {
            self.detail = None;
        }
    }

    /// Apply one key press
    ///
    /// Returns `true` when the session should end.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return true;
        }

        if key.code == KeyCode::Char('q') {
            self.should_quit = true;
            return true;
        }

        if self.navigation.is_overview() {
            self.handle_overview_key(key.code);
        } else {
            self.handle_detail_key(key.code);
        }

        false
    }

    fn handle_overview_key(&mut self, code: KeyCode) {
        let len = self.ranking.len();
        if len == 0 {
            return;
        }

        match code {
            KeyCode::Left | KeyCode::Char('h') => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right | KeyCode::Char('l') => self.cursor = (self.cursor + 1).min(len - 1),
            KeyCode::Up | KeyCode::Char('k') => {
                self.cursor = self.cursor.saturating_sub(SKILL_GRID_COLUMNS);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.cursor + SKILL_GRID_COLUMNS < len {
                    self.cursor += SKILL_GRID_COLUMNS;
                }
            }
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = len - 1,
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(entry) = self.ranking.get(self.cursor) {
                    let skill = entry.skill.clone();
                    self.select_skill(&skill);
                }
            }
            _ => {}
        }
    }

    fn handle_detail_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Left | KeyCode::Char('b') => {
                self.go_back();
            }
            _ => {}
        }
    }
}

/// Run the dashboard until the user quits
///
/// **Public** - entry point for the `dashboard` command
pub fn run_dashboard(dashboard: &mut Dashboard) -> Result<()> {
    panic_hook::install_panic_hook();
    let mut terminal = setup_terminal()?;
    panic_hook::mark_tui_active();
    let result = run_loop(&mut terminal, dashboard);
    panic_hook::mark_tui_inactive();
    restore_terminal(terminal)?;
    result
}

/// Initialize terminal for the dashboard
fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let terminal =
        Terminal::new(CrosstermBackend::new(stdout)).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    dashboard: &mut Dashboard,
) -> Result<()> {
    loop {
        terminal.draw(|f| render::render(f, dashboard))?;

        // Poll for events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if dashboard.handle_key(key) {
                    break;
                }
            }
            // Resize events are picked up by the next draw
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::dataset::Posting;

    fn dashboard() -> Dashboard {
        let postings = vec![
            Posting::new(vec!["Python".into(), "SQL".into()], Some("Data"), Some("KL")),
            Posting::new(vec!["Python".into()], Some("Software"), Some("Penang")),
            Posting::new(vec!["Java".into()], Some("Software"), Some("Penang")),
        ];
        Dashboard::new(Arc::new(Dataset::from_postings("mem", postings)), 10)
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_enter_opens_detail_for_cursor_skill() {
        let mut d = dashboard();
        d.handle_key(press(KeyCode::Right));
        d.handle_key(press(KeyCode::Enter));

        assert_eq!(d.navigation().selected_skill(), Some("SQL"));
        assert_eq!(d.detail().unwrap().total_count, 1);
    }

    #[test]
    fn test_back_returns_to_overview() {
        let mut d = dashboard();
        d.handle_key(press(KeyCode::Enter));
        assert!(!d.navigation().is_overview());

        d.handle_key(press(KeyCode::Esc));
        assert!(d.navigation().is_overview());
        assert!(d.detail().is_none());
        // Cursor position survives the round trip
        assert_eq!(d.cursor(), 0);
    }

    #[test]
    fn test_cursor_is_clamped() {
        let mut d = dashboard();
        d.handle_key(press(KeyCode::Left));
        assert_eq!(d.cursor(), 0);
        for _ in 0..10 {
            d.handle_key(press(KeyCode::Right));
        }
        assert_eq!(d.cursor(), 2);
        d.handle_key(press(KeyCode::Down));
        assert_eq!(d.cursor(), 2);
    }

    #[test]
    fn test_quit_keys() {
        let mut d = dashboard();
        assert!(d.handle_key(press(KeyCode::Char('q'))));
        assert!(d.should_quit());

        let mut d = dashboard();
        assert!(d.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
    }

    #[test]
    fn test_enter_on_empty_ranking_does_nothing() {
        let mut d = Dashboard::new(Arc::new(Dataset::from_postings("mem", vec![])), 10);
        d.handle_key(press(KeyCode::Enter));
        assert!(d.navigation().is_overview());
    }
}
