use job_board_core::{AppViewModel, PostingRowView, PostingSource, RowAction, ViewMode};
use ratatui::layout::Alignment;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use super::layout;

pub const TITLE: &str = "Job Listing Mini Portal";
const SEARCH_PLACEHOLDER: &str = "Search by role...";
const LOADING_TEXT: &str = "Loading jobs...";
const KEY_HINTS: &str = "Type to search | Tab: switch view | Enter: save/remove | Esc: quit";

pub fn render(frame: &mut Frame, view: &AppViewModel, list_state: &mut ListState) {
    let areas = layout::split(frame.area());

    frame.render_widget(header(view), areas.header);
    frame.render_widget(search_box(view), areas.search);
    frame.render_widget(toggles(view), areas.toggles);

    if view.loading {
        frame.render_widget(centered_message(LOADING_TEXT), areas.list);
    } else if let Some(message) = view.empty_message {
        frame.render_widget(centered_message(message), areas.list);
    } else {
        let items: Vec<ListItem> = view.rows.iter().map(row_item).collect();
        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
        frame.render_stateful_widget(list, areas.list, list_state);
    }

    frame.render_widget(
        Paragraph::new(status_text(view)).style(Style::default().fg(Color::DarkGray)),
        areas.status,
    );
}

fn header(view: &AppViewModel) -> Paragraph<'static> {
    let line = Line::from(vec![
        Span::styled(TITLE, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("   "),
        Span::styled(
            format!(" Saved: {} ", view.saved_count),
            Style::default().fg(Color::White).bg(Color::Blue),
        ),
    ]);
    Paragraph::new(line).block(Block::default().borders(Borders::ALL))
}

fn search_box(view: &AppViewModel) -> Paragraph<'static> {
    let line = if view.query.is_empty() {
        Line::from(Span::styled(
            SEARCH_PLACEHOLDER,
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(view.query.clone())
    };
    Paragraph::new(line).block(Block::default().borders(Borders::ALL).title("Search"))
}

fn toggles(view: &AppViewModel) -> Paragraph<'static> {
    let (all, saved) = toggle_labels(view);
    let style_for = |mode: ViewMode| {
        if view.view_mode == mode {
            Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default()
        }
    };
    let line = Line::from(vec![
        Span::styled(format!(" {all} "), style_for(ViewMode::All)),
        Span::raw("  "),
        Span::styled(format!(" {saved} "), style_for(ViewMode::Saved)),
    ]);
    Paragraph::new(line).block(Block::default().borders(Borders::ALL).title("View"))
}

fn centered_message(text: &'static str) -> Paragraph<'static> {
    Paragraph::new(Span::styled(text, Style::default().fg(Color::DarkGray)))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL))
}

fn row_item(row: &PostingRowView) -> ListItem<'static> {
    let action_style = match row.action {
        RowAction::Save {
            already_saved: false,
        } => Style::default().fg(Color::Green),
        RowAction::Save {
            already_saved: true,
        } => Style::default().fg(Color::DarkGray),
        RowAction::Remove => Style::default().fg(Color::Red),
    };
    ListItem::new(vec![
        Line::from(vec![
            Span::styled(
                row.role.clone(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(format!("[{}]", action_label(row.action)), action_style),
        ]),
        Line::from(Span::styled(
            row.description.clone(),
            Style::default().fg(Color::Gray),
        )),
    ])
}

pub fn action_label(action: RowAction) -> &'static str {
    match action {
        RowAction::Save {
            already_saved: false,
        } => "Save Job",
        RowAction::Save {
            already_saved: true,
        } => "Saved ✓",
        RowAction::Remove => "Remove",
    }
}

pub fn toggle_labels(view: &AppViewModel) -> (String, String) {
    (
        "All Jobs".to_string(),
        format!("Saved Jobs ({})", view.saved_count),
    )
}

pub fn status_text(view: &AppViewModel) -> String {
    let source = match view.source {
        Some(PostingSource::Remote) => "remote",
        Some(PostingSource::Fallback) => "offline sample",
        None => "loading",
    };
    format!(
        "Source: {source} | Showing {shown} of {total} | {KEY_HINTS}",
        shown = view.rows.len(),
        total = match view.view_mode {
            ViewMode::All => view.total_count,
            ViewMode::Saved => view.saved_count,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn action_labels_follow_saved_state() {
        assert_eq!(
            action_label(RowAction::Save {
                already_saved: false
            }),
            "Save Job"
        );
        assert_eq!(
            action_label(RowAction::Save {
                already_saved: true
            }),
            "Saved ✓"
        );
        assert_eq!(action_label(RowAction::Remove), "Remove");
    }

    #[test]
    fn saved_toggle_carries_live_count() {
        let view = AppViewModel {
            saved_count: 4,
            ..AppViewModel::default()
        };
        let (all, saved) = toggle_labels(&view);
        assert_eq!(all, "All Jobs");
        assert_eq!(saved, "Saved Jobs (4)");
    }

    #[test]
    fn status_counts_against_active_base_list() {
        let view = AppViewModel {
            view_mode: ViewMode::Saved,
            source: Some(PostingSource::Fallback),
            total_count: 20,
            saved_count: 2,
            ..AppViewModel::default()
        };
        let text = status_text(&view);
        assert!(text.starts_with("Source: offline sample | Showing 0 of 2 |"));
    }
}
