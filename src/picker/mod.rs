//! Interactive route picker
//!
//! A single-input TUI: the list starts with every indexed route, narrows on
//! each keystroke through the route matcher, and hands the accepted file
//! back to the caller.

mod app;
mod input;
mod results;
mod theme;
mod ui;

use anyhow::Result;

use crate::index::RouteIndex;

pub use app::{PickerApp, PickerOutcome};
pub use results::{PickerRow, NO_RESULTS_LABEL};

/// Launch the picker over `index`, optionally pre-filled with a query
pub fn run_picker(index: &mut RouteIndex, initial_query: Option<String>) -> Result<PickerOutcome> {
    PickerApp::new(index, initial_query).run()
}
