use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::app::PickerApp;
use super::results::PickerRow;

/// Prompt shown in the empty input box
pub const PLACEHOLDER_PROMPT: &str = "Enter route (e.g. /users/[id] or /blog)";

pub fn render(f: &mut Frame, app: &PickerApp) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Input
            Constraint::Min(1),    // Rows
            Constraint::Length(1), // Footer
        ])
        .split(f.area());

    render_input(f, chunks[0], app);
    render_rows(f, chunks[1], app);
    render_footer(f, chunks[2], app);
}

fn render_input(f: &mut Frame, area: Rect, app: &PickerApp) {
    let palette = app.palette();

    let title_left = " Find route ";
    let status = format!("{} routes indexed ", app.index().len());

    let available_width = area.width.saturating_sub(2) as usize;
    let spacing = " ".repeat(available_width.saturating_sub(title_left.width() + status.width()));

    let block = Block::default()
        .borders(Borders::ALL)
        .title_top(Line::from(vec![
            Span::raw(title_left),
            Span::raw(spacing),
            Span::styled(status, Style::default().fg(palette.muted)),
        ]))
        .border_style(Style::default().fg(palette.accent).add_modifier(Modifier::BOLD));

    let paragraph = if app.input().is_empty() {
        Paragraph::new(PLACEHOLDER_PROMPT).style(Style::default().fg(palette.muted))
    } else {
        Paragraph::new(app.input().value()).style(Style::default().fg(palette.foreground))
    };

    f.render_widget(paragraph.block(block), area);

    f.set_cursor_position((input_cursor_x(area, app.input().visual_cursor()), area.y + 1));
}

/// Column of the input cursor, clamped to the inside of the input box
fn input_cursor_x(area: Rect, visual_cursor: usize) -> u16 {
    let offset = u16::try_from(visual_cursor).unwrap_or(u16::MAX);
    area.x
        .saturating_add(1)
        .saturating_add(offset)
        .min(area.right().saturating_sub(2))
}

fn render_rows(f: &mut Frame, area: Rect, app: &PickerApp) {
    let palette = app.palette();
    let results = app.results();

    if let Some(info) = app.info_message() {
        if results.is_empty() {
            let info_text = Paragraph::new(info)
                .block(Block::default().borders(Borders::ALL).title(" Info "))
                .style(Style::default().fg(palette.muted))
                .wrap(Wrap { trim: true });
            f.render_widget(info_text, area);
            return;
        }
    }

    if results.is_empty() {
        let message = if app.index().is_empty() {
            "No routes found.\n\nLooked for app/ and pages/ directories (see .routefinder/config.toml)."
        } else {
            "Start typing a route to search"
        };

        let empty_text = Paragraph::new(message)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Routes ")
                    .border_style(Style::default().fg(palette.muted)),
            )
            .style(Style::default().fg(palette.muted))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        f.render_widget(empty_text, area);
        return;
    }

    let visible_height = area.height.saturating_sub(2) as usize;
    results.set_visible_height(visible_height);

    let inner_width = area.width.saturating_sub(4) as usize;

    let items: Vec<ListItem> = results
        .visible_rows(visible_height)
        .iter()
        .enumerate()
        .map(|(idx, row)| {
            let is_selected = idx + results.scroll_offset() == results.selected_index();

            let line = match row {
                PickerRow::NoResults => Line::from(Span::styled(
                    row.label(),
                    Style::default().fg(palette.warning).add_modifier(Modifier::ITALIC),
                )),
                PickerRow::Route { label, description, .. } => {
                    let label_budget = inner_width.saturating_sub(description.width() + 2);
                    Line::from(vec![
                        Span::styled(
                            truncate_start(label, label_budget),
                            Style::default().fg(palette.foreground),
                        ),
                        Span::raw("  "),
                        Span::styled(description.clone(), Style::default().fg(palette.route)),
                    ])
                }
            };

            if is_selected && row.file().is_some() {
                ListItem::new(line).style(
                    Style::default()
                        .bg(palette.highlight)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ListItem::new(line)
            }
        })
        .collect();

    let title = if app.is_browsing() {
        format!(" All routes ({}) ", results.route_count())
    } else {
        format!(" Matches ({}) ", results.route_count())
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(palette.accent)),
    );
    f.render_widget(list, area);

    if results.len() > visible_height {
        let mut scrollbar_state = ScrollbarState::new(results.len()).position(results.selected_index());
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("▲"))
            .end_symbol(Some("▼"))
            .style(Style::default().fg(palette.accent));
        f.render_stateful_widget(
            scrollbar,
            area.inner(Margin { horizontal: 0, vertical: 1 }),
            &mut scrollbar_state,
        );
    }
}

fn render_footer(f: &mut Frame, area: Rect, app: &PickerApp) {
    let palette = app.palette();
    let key = Style::default().fg(palette.accent).add_modifier(Modifier::BOLD);
    let text = Style::default().fg(palette.muted);

    let footer = Paragraph::new(Line::from(vec![
        Span::styled("Enter", key),
        Span::styled(" open  ", text),
        Span::styled("↑↓", key),
        Span::styled(" navigate  ", text),
        Span::styled("Ctrl+R", key),
        Span::styled(" re-index  ", text),
        Span::styled("Esc", key),
        Span::styled(" close", text),
    ]));

    f.render_widget(footer, area);
}

/// Keep the tail of a path that does not fit, prefixed with an ellipsis
pub fn truncate_start(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width <= 1 {
        return "…".repeat(max_width);
    }

    let mut kept = Vec::new();
    let mut width = 0;
    for c in text.chars().rev() {
        let w = c.width().unwrap_or(0);
        if width + w > max_width - 1 {
            break;
        }
        width += w;
        kept.push(c);
    }

    let tail: String = kept.into_iter().rev().collect();
    format!("…{}", tail)
}
