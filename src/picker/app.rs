use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use crate::index::RouteIndex;

use super::input::{InputField, KeyCommand};
use super::results::{PickerRow, ResultList};
use super::theme::ColorPalette;
use super::ui;

/// How a picker session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerOutcome {
    /// A route row was accepted; open this file
    Open(PathBuf),
    /// The user dismissed the picker
    Cancelled,
}

/// State of one picker session over a route index
pub struct PickerApp<'a> {
    index: &'a mut RouteIndex,
    input: InputField,
    results: ResultList,
    palette: ColorPalette,
    /// No input event yet: every route is listed
    browsing: bool,
    info_message: Option<String>,
    outcome: Option<PickerOutcome>,
}

impl<'a> PickerApp<'a> {
    pub fn new(index: &'a mut RouteIndex, initial_query: Option<String>) -> Self {
        let mut input = InputField::new();
        let browsing = match initial_query {
            Some(query) if !query.is_empty() => {
                input.set_value(query);
                false
            }
            _ => true,
        };

        let mut app = Self {
            index,
            input,
            results: ResultList::new(),
            palette: ColorPalette::detect(),
            browsing,
            info_message: None,
            outcome: None,
        };
        app.refresh();
        app
    }

    /// Run the interactive event loop until a row is accepted or the picker
    /// is dismissed
    pub fn run(mut self) -> Result<PickerOutcome> {
        let mut terminal = Self::setup_terminal()?;
        let result = self.event_loop(&mut terminal);
        Self::restore_terminal(terminal)?;
        result?;

        Ok(self.outcome.unwrap_or(PickerOutcome::Cancelled))
    }

    fn event_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        while self.outcome.is_none() {
            terminal.draw(|f| ui::render(f, self))?;

            if event::poll(Duration::from_millis(100))? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
                    // Redrawn on the next iteration
                    Event::Resize(_, _) => {}
                    _ => {}
                }
            }
        }
        Ok(())
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match KeyCommand::from_key(key) {
            KeyCommand::Cancel => self.outcome = Some(PickerOutcome::Cancelled),
            KeyCommand::Accept => self.accept(),
            KeyCommand::NextRow => self.results.next(),
            KeyCommand::PrevRow => self.results.prev(),
            KeyCommand::PageDown => self.results.jump_down(10),
            KeyCommand::PageUp => self.results.jump_up(10),
            KeyCommand::Rebuild => self.rebuild(),
            KeyCommand::None => {
                if self.input.handle_key(key) {
                    self.browsing = false;
                    self.info_message = None;
                    self.refresh();
                }
            }
        }
    }

    /// Recompute the rows from scratch for the current input
    fn refresh(&mut self) {
        let project_root = self.index.project_root().to_path_buf();

        let rows: Vec<PickerRow> = if self.browsing {
            self.index
                .entries()
                .iter()
                .map(|entry| PickerRow::from_entry(entry, &project_root))
                .collect()
        } else if self.input.is_empty() {
            Vec::new()
        } else {
            let matches = self.index.find(self.input.value());
            if matches.is_empty() {
                vec![PickerRow::NoResults]
            } else {
                matches
                    .into_iter()
                    .map(|entry| PickerRow::from_entry(entry, &project_root))
                    .collect()
            }
        };

        self.results.set_rows(rows);
    }

    /// Accepting the placeholder (or nothing) leaves the picker open
    fn accept(&mut self) {
        if let Some(file) = self.results.selected().and_then(PickerRow::file) {
            self.outcome = Some(PickerOutcome::Open(file.to_path_buf()));
        }
    }

    fn rebuild(&mut self) {
        let total = self.index.rebuild().total_routes;
        self.info_message = Some(format!("Re-indexed {} routes", total));
        self.refresh();
    }

    fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
        crossterm::terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        crossterm::execute!(stdout, crossterm::terminal::EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        crossterm::terminal::disable_raw_mode()?;
        crossterm::execute!(terminal.backend_mut(), crossterm::terminal::LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    // Getters for UI rendering
    pub fn input(&self) -> &InputField {
        &self.input
    }

    pub fn results(&self) -> &ResultList {
        &self.results
    }

    pub fn palette(&self) -> &ColorPalette {
        &self.palette
    }

    pub fn index(&self) -> &RouteIndex {
        &*self.index
    }

    pub fn is_browsing(&self) -> bool {
        self.browsing
    }

    pub fn info_message(&self) -> Option<&str> {
        self.info_message.as_deref()
    }

    pub fn outcome(&self) -> Option<&PickerOutcome> {
        self.outcome.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Convention, RouteRoot};
    use crossterm::event::{KeyCode, KeyModifiers};
    use std::path::Path;
    use tempfile::TempDir;

    fn touch(root: &Path, relative: &str) {
        let path = root.join(relative);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, "").unwrap();
    }

    fn fixture() -> (TempDir, RouteIndex) {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "app/page.tsx");
        touch(temp.path(), "app/blog/page.tsx");
        touch(temp.path(), "app/users/[id]/page.tsx");

        let mut index = RouteIndex::new(temp.path(), vec![RouteRoot::new("app", Convention::App)]);
        index.rebuild();
        (temp, index)
    }

    fn type_text(app: &mut PickerApp, text: &str) {
        for c in text.chars() {
            app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
    }

    fn press(app: &mut PickerApp, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn descriptions(app: &PickerApp) -> Vec<String> {
        app.results().rows().iter().map(|r| r.description().to_string()).collect()
    }

    #[test]
    fn test_opens_in_browse_mode() {
        let (_temp, mut index) = fixture();
        let app = PickerApp::new(&mut index, None);

        assert!(app.is_browsing());
        assert_eq!(app.results().len(), 3);
    }

    #[test]
    fn test_typing_filters_and_clearing_empties() {
        let (_temp, mut index) = fixture();
        let mut app = PickerApp::new(&mut index, None);

        type_text(&mut app, "/users/42");
        assert!(!app.is_browsing());
        // the root route is contained in every query
        assert_eq!(descriptions(&app), vec!["/", "/users/[id]"]);

        for _ in 0.."/users/42".len() {
            press(&mut app, KeyCode::Backspace);
        }
        assert!(app.results().is_empty());
    }

    #[test]
    fn test_placeholder_accept_is_noop() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "app/blog/page.tsx");
        let mut index = RouteIndex::new(temp.path(), vec![RouteRoot::new("app", Convention::App)]);
        index.rebuild();

        let mut app = PickerApp::new(&mut index, Some("pricing".to_string()));
        assert_eq!(app.results().rows(), &[PickerRow::NoResults]);

        press(&mut app, KeyCode::Enter);
        assert!(app.outcome().is_none());
    }

    #[test]
    fn test_accept_selected_route() {
        let (temp, mut index) = fixture();
        let mut app = PickerApp::new(&mut index, Some("blog".to_string()));
        assert_eq!(descriptions(&app), vec!["/blog", "/"]);

        press(&mut app, KeyCode::Enter);

        assert_eq!(
            app.outcome(),
            Some(&PickerOutcome::Open(temp.path().join("app/blog/page.tsx")))
        );
    }

    #[test]
    fn test_escape_cancels() {
        let (_temp, mut index) = fixture();
        let mut app = PickerApp::new(&mut index, None);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.outcome(), Some(&PickerOutcome::Cancelled));
    }

    #[test]
    fn test_rebuild_picks_up_new_routes() {
        let (temp, mut index) = fixture();
        touch(temp.path(), "app/about/page.tsx");

        let mut app = PickerApp::new(&mut index, None);
        assert_eq!(app.results().len(), 3);

        app.handle_key(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL));
        assert_eq!(app.results().len(), 4);
        assert_eq!(app.info_message(), Some("Re-indexed 4 routes"));
    }
}
