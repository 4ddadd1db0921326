mod ui;
pub(crate) mod widgets;

use std::io;
use std::time::Duration;

use chrono::{Local, NaiveDate, NaiveDateTime};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::warn;

use crate::error::Result;
use crate::models::{ProblemRecord, Stats};
use crate::storage::JsonFile;
use crate::store::ProblemStore;

// How many queued problems the dashboard shows
const QUEUE_PREVIEW: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Dashboard,
    Problems,
    ProblemDetail,
}

impl View {
    fn next(&self) -> Self {
        match self {
            View::Dashboard => View::Problems,
            View::Problems => View::Dashboard,
            View::ProblemDetail => View::Problems,
        }
    }

    fn prev(&self) -> Self {
        match self {
            View::Dashboard => View::Problems,
            View::Problems => View::Dashboard,
            View::ProblemDetail => View::Problems,
        }
    }
}

pub struct StatefulList<T> {
    pub items: Vec<T>,
    pub selected: Option<usize>,
}

impl<T> StatefulList<T> {
    fn with_items(items: Vec<T>) -> Self {
        let selected = if items.is_empty() { None } else { Some(0) };
        Self { items, selected }
    }

    fn next(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let i = match self.selected {
            Some(i) if i + 1 < self.items.len() => i + 1,
            _ => 0,
        };
        self.selected = Some(i);
    }

    fn previous(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let i = match self.selected {
            Some(0) | None => self.items.len() - 1,
            Some(i) => i - 1,
        };
        self.selected = Some(i);
    }

    fn selected_item(&self) -> Option<&T> {
        self.selected.and_then(|i| self.items.get(i))
    }
}

pub struct App {
    store: ProblemStore,
    file: JsonFile,
    clock: fn() -> NaiveDateTime,
    pub today: NaiveDate,
    pub view: View,
    pub problems: StatefulList<String>,
    pub queue: Vec<String>,
    pub selected_problem: Option<String>,
    pub stats: Stats,
    pub filter_tag: Option<String>,
    pub filter_input: String,
    pub filter_mode: bool,
    pub status: Option<String>,
    pub should_quit: bool,
}

fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

impl App {
    pub fn new(store: ProblemStore, file: JsonFile) -> Self {
        Self::with_clock(store, file, local_now)
    }

    pub fn with_clock(store: ProblemStore, file: JsonFile, clock: fn() -> NaiveDateTime) -> Self {
        let mut app = Self {
            store,
            file,
            clock,
            today: clock().date(),
            view: View::Dashboard,
            problems: StatefulList::with_items(Vec::new()),
            queue: Vec::new(),
            selected_problem: None,
            stats: Stats::default(),
            filter_tag: None,
            filter_input: String::new(),
            filter_mode: false,
            status: None,
            should_quit: false,
        };
        app.refresh_data();
        app
    }

    pub fn record(&self, name: &str) -> Option<&ProblemRecord> {
        self.store.get(name)
    }

    pub fn refresh_data(&mut self) {
        self.today = (self.clock)().date();
        self.stats = self.store.stats(self.today);
        self.queue = self
            .store
            .next_problems(self.today)
            .take(QUEUE_PREVIEW)
            .map(|(name, _)| name.to_string())
            .collect();
        self.reload_problems();
    }

    fn reload_problems(&mut self) {
        let previous = self.problems.selected;
        let names = self
            .store
            .list(self.filter_tag.as_deref(), false, self.today)
            .into_iter()
            .map(|(name, _)| name.to_string())
            .collect();
        self.problems = StatefulList::with_items(names);
        // Keep the cursor in place across refreshes
        if let Some(i) = previous {
            if i < self.problems.items.len() {
                self.problems.selected = Some(i);
            }
        }
    }

    fn apply_filter(&mut self) {
        if self.filter_input.is_empty() {
            self.filter_tag = None;
        } else {
            self.filter_tag = Some(self.filter_input.clone());
        }
        self.problems.selected = None;
        self.reload_problems();
    }

    fn select_problem(&mut self) {
        if let Some(name) = self.problems.selected_item() {
            self.selected_problem = Some(name.clone());
            self.view = View::ProblemDetail;
        }
    }

    /// The problem an action key applies to in the current view.
    fn target(&self) -> Option<String> {
        match self.view {
            View::Dashboard => self.queue.first().cloned(),
            View::Problems => self.problems.selected_item().cloned(),
            View::ProblemDetail => self.selected_problem.clone(),
        }
    }

    fn complete(&mut self, name: &str) -> Result<()> {
        let before = self.store.clone();
        let count = self.store.increment_count(name, (self.clock)())?;
        if let Err(e) = self.file.save(self.store.records()) {
            // Nothing reached disk, so drop the in-memory change too
            self.store = before;
            self.refresh_data();
            return Err(e);
        }
        self.status = Some(format!("✓ {} completed ({} total)", name, count));
        self.refresh_data();
        Ok(())
    }

    fn handle_key(&mut self, key: KeyCode, modifiers: KeyModifiers) -> Result<()> {
        if self.filter_mode {
            match key {
                KeyCode::Esc => {
                    self.filter_mode = false;
                    self.filter_input.clear();
                }
                KeyCode::Enter => {
                    self.filter_mode = false;
                    self.apply_filter();
                }
                KeyCode::Backspace => {
                    self.filter_input.pop();
                }
                KeyCode::Char(c) => {
                    self.filter_input.push(c);
                }
                _ => {}
            }
            return Ok(());
        }

        match key {
            KeyCode::Char('q') => self.should_quit = true,

            KeyCode::Char('r') if modifiers.contains(KeyModifiers::CONTROL) => {
                self.refresh_data();
            }

            KeyCode::Char('c') => {
                if let Some(name) = self.target() {
                    self.complete(&name)?;
                }
            }

            KeyCode::Char('/') if self.view == View::Problems => {
                self.filter_mode = true;
                self.filter_input.clear();
            }

            KeyCode::Esc => match self.view {
                View::ProblemDetail => {
                    self.view = View::Problems;
                    self.selected_problem = None;
                }
                View::Problems if self.filter_tag.is_some() => {
                    self.filter_tag = None;
                    self.filter_input.clear();
                    self.apply_filter();
                }
                View::Problems | View::Dashboard => {}
            },

            KeyCode::Char('h') | KeyCode::Left => match self.view {
                View::ProblemDetail => {
                    self.view = View::Problems;
                    self.selected_problem = None;
                }
                _ => self.view = self.view.prev(),
            },
            KeyCode::Char('l') | KeyCode::Right => match self.view {
                View::Problems => self.select_problem(),
                _ => self.view = self.view.next(),
            },

            KeyCode::Tab => {
                if modifiers.contains(KeyModifiers::SHIFT) {
                    self.view = self.view.prev();
                } else {
                    self.view = self.view.next();
                }
            }
            KeyCode::BackTab => {
                self.view = self.view.prev();
            }

            KeyCode::Char('j') | KeyCode::Down if self.view == View::Problems => {
                self.problems.next()
            }
            KeyCode::Char('k') | KeyCode::Up if self.view == View::Problems => {
                self.problems.previous()
            }

            KeyCode::Char('g') if !self.problems.items.is_empty() => {
                self.problems.selected = Some(0);
            }
            KeyCode::Char('G') if !self.problems.items.is_empty() => {
                self.problems.selected = Some(self.problems.items.len() - 1);
            }

            KeyCode::Enter => match self.view {
                View::Problems => self.select_problem(),
                View::ProblemDetail => {
                    if let Some(name) = self.selected_problem.clone() {
                        self.complete(&name)?;
                    }
                }
                View::Dashboard => {}
            },

            _ => {}
        }
        Ok(())
    }
}

pub fn run(store: ProblemStore, file: JsonFile) -> std::result::Result<(), Box<dyn std::error::Error>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(store, file);

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if let Err(e) = app.handle_key(key.code, key.modifiers) {
                    // Lookup and save failures stay on screen instead of closing the UI
                    warn!(error = %e, "action failed");
                    app.status = Some(format!("Error: {}", e));
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{tempdir, TempDir};

    fn fixed_now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 5)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    fn setup_app() -> (App, TempDir) {
        let dir = tempdir().unwrap();
        let mut store = ProblemStore::default();
        store.reset(
            &[("Stack", &["Min Stack", "Car Fleet"]), ("Heap", &["Design Twitter"])],
            fixed_now(),
        );
        let file = JsonFile::new(dir.path().join("problems.json"));
        (App::with_clock(store, file, fixed_now), dir)
    }

    fn press(app: &mut App, key: KeyCode) {
        app.handle_key(key, KeyModifiers::NONE).unwrap();
    }

    #[test]
    fn starts_on_dashboard_with_queue() {
        let (app, _dir) = setup_app();
        assert_eq!(app.view, View::Dashboard);
        assert_eq!(app.queue, vec!["Min Stack", "Car Fleet", "Design Twitter"]);
        assert_eq!(app.stats.total_problems, 3);
    }

    #[test]
    fn navigates_problem_list() {
        let (mut app, _dir) = setup_app();
        press(&mut app, KeyCode::Char('l'));
        assert_eq!(app.view, View::Problems);

        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.problems.selected, Some(1));
        press(&mut app, KeyCode::Char('k'));
        press(&mut app, KeyCode::Char('k'));
        assert_eq!(app.problems.selected, Some(2));

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.view, View::ProblemDetail);
        assert_eq!(app.selected_problem.as_deref(), Some("Design Twitter"));
    }

    #[test]
    fn filter_by_tag() {
        let (mut app, _dir) = setup_app();
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('/'));
        for c in "heap".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.filter_tag.as_deref(), Some("heap"));
        assert_eq!(app.problems.items, vec!["Design Twitter"]);

        press(&mut app, KeyCode::Esc);
        assert!(app.filter_tag.is_none());
        assert_eq!(app.problems.items.len(), 3);
    }

    #[test]
    fn failed_save_rolls_back_completion() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();

        let mut store = ProblemStore::default();
        store.reset(&[("Stack", &["Min Stack"])], fixed_now());
        let file = JsonFile::new(blocker.join("problems.json"));
        let mut app = App::with_clock(store, file, fixed_now);

        assert!(app.handle_key(KeyCode::Char('c'), KeyModifiers::NONE).is_err());
        assert_eq!(app.record("Min Stack").unwrap().count, 0);
        assert_eq!(app.queue, vec!["Min Stack"]);
        assert_eq!(app.stats.attempted, 0);
    }

    #[test]
    fn complete_from_dashboard_saves_and_requeues() {
        let (mut app, dir) = setup_app();
        press(&mut app, KeyCode::Char('c'));

        assert_eq!(app.record("Min Stack").unwrap().count, 1);
        assert_eq!(app.queue, vec!["Car Fleet", "Design Twitter"]);
        assert_eq!(app.stats.attempted, 1);

        let saved = JsonFile::new(dir.path().join("problems.json")).load().unwrap();
        assert_eq!(saved["Min Stack"].count, 1);
    }

    #[test]
    fn complete_from_detail() {
        let (mut app, _dir) = setup_app();
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.record("Car Fleet").unwrap().count, 1);
        assert!(app.status.as_deref().unwrap_or_default().contains("Car Fleet"));
    }

    #[test]
    fn quit() {
        let (mut app, _dir) = setup_app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
