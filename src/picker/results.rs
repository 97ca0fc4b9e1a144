use std::cell::Cell;
use std::path::{Path, PathBuf};

use crate::models::RouteEntry;

/// Text shown when a query matches nothing
pub const NO_RESULTS_LABEL: &str = "No matching results";

/// One row of the picker list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerRow {
    /// A route: file label, route description, absolute file payload
    Route {
        label: String,
        description: String,
        file: PathBuf,
    },
    /// Placeholder shown when nothing matched; carries no file
    NoResults,
}

impl PickerRow {
    pub fn from_entry(entry: &RouteEntry, project_root: &Path) -> Self {
        PickerRow::Route {
            label: entry.relative_file(project_root),
            description: entry.display_route(),
            file: entry.file.clone(),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            PickerRow::Route { label, .. } => label,
            PickerRow::NoResults => NO_RESULTS_LABEL,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            PickerRow::Route { description, .. } => description,
            PickerRow::NoResults => "",
        }
    }

    /// File to open when this row is accepted
    pub fn file(&self) -> Option<&Path> {
        match self {
            PickerRow::Route { file, .. } => Some(file),
            PickerRow::NoResults => None,
        }
    }
}

/// Picker rows with selection and scroll state
#[derive(Debug)]
pub struct ResultList {
    rows: Vec<PickerRow>,
    selected_index: usize,
    scroll_offset: usize,
    /// Updated during rendering, hence the Cell
    last_visible_height: Cell<usize>,
}

impl Default for ResultList {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultList {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            selected_index: 0,
            scroll_offset: 0,
            last_visible_height: Cell::new(20),
        }
    }

    /// Replace the rows and reset selection to the top
    pub fn set_rows(&mut self, rows: Vec<PickerRow>) {
        self.rows = rows;
        self.selected_index = 0;
        self.scroll_offset = 0;
    }

    pub fn rows(&self) -> &[PickerRow] {
        &self.rows
    }

    pub fn selected(&self) -> Option<&PickerRow> {
        self.rows.get(self.selected_index)
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of real routes (the placeholder does not count)
    pub fn route_count(&self) -> usize {
        self.rows.iter().filter(|row| row.file().is_some()).count()
    }

    pub fn next(&mut self) {
        self.jump_down(1);
    }

    pub fn prev(&mut self) {
        self.jump_up(1);
    }

    pub fn jump_down(&mut self, n: usize) {
        if self.rows.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + n).min(self.rows.len() - 1);
        self.update_scroll(self.last_visible_height.get());
    }

    pub fn jump_up(&mut self, n: usize) {
        self.selected_index = self.selected_index.saturating_sub(n);
        self.update_scroll(self.last_visible_height.get());
    }

    /// Keep the selected row inside the visible window; returns true if the
    /// scroll offset moved
    pub fn update_scroll(&mut self, visible_height: usize) -> bool {
        if self.rows.is_empty() || visible_height == 0 {
            return false;
        }

        let old_offset = self.scroll_offset;

        if self.selected_index < self.scroll_offset {
            self.scroll_offset = self.selected_index;
        }
        if self.selected_index >= self.scroll_offset + visible_height {
            self.scroll_offset = self.selected_index - visible_height + 1;
        }

        old_offset != self.scroll_offset
    }

    pub fn set_visible_height(&self, height: usize) {
        self.last_visible_height.set(height);
    }

    pub fn visible_rows(&self, height: usize) -> &[PickerRow] {
        let start = self.scroll_offset.min(self.rows.len());
        let end = (start + height).min(self.rows.len());
        &self.rows[start..end]
    }
}
