use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use job_board_core::{AppViewModel, Msg, RowAction, ViewMode};

/// What a key press asks the front-end to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Dispatch(Msg),
    SelectPrevious,
    SelectNext,
    Quit,
    Ignore,
}

/// Maps a key press to an action given the current view and selected row.
///
/// Typing always edits the search box; navigation and row actions use keys
/// that never produce text.
pub fn map_key(key: KeyEvent, view: &AppViewModel, selected: Option<usize>) -> KeyAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => KeyAction::Quit,
            _ => KeyAction::Ignore,
        };
    }

    match key.code {
        KeyCode::Esc => KeyAction::Quit,
        KeyCode::Up => KeyAction::SelectPrevious,
        KeyCode::Down => KeyAction::SelectNext,
        KeyCode::Tab => KeyAction::Dispatch(Msg::ViewModeSelected(view.view_mode.toggled())),
        KeyCode::F(1) => KeyAction::Dispatch(Msg::ViewModeSelected(ViewMode::All)),
        KeyCode::F(2) => KeyAction::Dispatch(Msg::ViewModeSelected(ViewMode::Saved)),
        KeyCode::Enter => row_action(view, selected),
        KeyCode::Backspace => {
            let mut query = view.query.clone();
            if query.pop().is_none() {
                return KeyAction::Ignore;
            }
            KeyAction::Dispatch(Msg::QueryChanged(query))
        }
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::ALT) => {
            let mut query = view.query.clone();
            query.push(ch);
            KeyAction::Dispatch(Msg::QueryChanged(query))
        }
        _ => KeyAction::Ignore,
    }
}

fn row_action(view: &AppViewModel, selected: Option<usize>) -> KeyAction {
    let Some(row) = selected.and_then(|index| view.rows.get(index)) else {
        return KeyAction::Ignore;
    };
    match row.action {
        RowAction::Save {
            already_saved: false,
        } => KeyAction::Dispatch(Msg::SaveClicked { posting_id: row.id }),
        // Disabled button.
        RowAction::Save {
            already_saved: true,
        } => KeyAction::Ignore,
        RowAction::Remove => KeyAction::Dispatch(Msg::RemoveClicked { posting_id: row.id }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use job_board_core::PostingRowView;
    use pretty_assertions::assert_eq;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn view_with(action: RowAction, query: &str) -> AppViewModel {
        AppViewModel {
            query: query.to_string(),
            rows: vec![PostingRowView {
                id: 3,
                role: "Product Manager".to_string(),
                description: "text".to_string(),
                action,
            }],
            ..AppViewModel::default()
        }
    }

    #[test]
    fn typing_appends_to_query() {
        let view = view_with(RowAction::Remove, "fro");
        assert_eq!(
            map_key(key(KeyCode::Char('n')), &view, None),
            KeyAction::Dispatch(Msg::QueryChanged("fron".to_string()))
        );
        assert_eq!(
            map_key(
                KeyEvent::new(KeyCode::Char('N'), KeyModifiers::SHIFT),
                &view,
                None
            ),
            KeyAction::Dispatch(Msg::QueryChanged("froN".to_string()))
        );
    }

    #[test]
    fn backspace_trims_query_and_ignores_empty() {
        let view = view_with(RowAction::Remove, "qa");
        assert_eq!(
            map_key(key(KeyCode::Backspace), &view, None),
            KeyAction::Dispatch(Msg::QueryChanged("q".to_string()))
        );

        let empty = view_with(RowAction::Remove, "");
        assert_eq!(map_key(key(KeyCode::Backspace), &empty, None), KeyAction::Ignore);
    }

    #[test]
    fn enter_saves_unsaved_row() {
        let view = view_with(
            RowAction::Save {
                already_saved: false,
            },
            "",
        );
        assert_eq!(
            map_key(key(KeyCode::Enter), &view, Some(0)),
            KeyAction::Dispatch(Msg::SaveClicked { posting_id: 3 })
        );
    }

    #[test]
    fn enter_on_saved_row_is_disabled() {
        let view = view_with(
            RowAction::Save {
                already_saved: true,
            },
            "",
        );
        assert_eq!(map_key(key(KeyCode::Enter), &view, Some(0)), KeyAction::Ignore);
    }

    #[test]
    fn enter_removes_in_saved_view() {
        let view = view_with(RowAction::Remove, "");
        assert_eq!(
            map_key(key(KeyCode::Enter), &view, Some(0)),
            KeyAction::Dispatch(Msg::RemoveClicked { posting_id: 3 })
        );
        assert_eq!(map_key(key(KeyCode::Enter), &view, None), KeyAction::Ignore);
        assert_eq!(map_key(key(KeyCode::Enter), &view, Some(5)), KeyAction::Ignore);
    }

    #[test]
    fn tab_toggles_view_mode() {
        let view = AppViewModel::default();
        assert_eq!(
            map_key(key(KeyCode::Tab), &view, None),
            KeyAction::Dispatch(Msg::ViewModeSelected(ViewMode::Saved))
        );
        assert_eq!(
            map_key(key(KeyCode::F(1)), &view, None),
            KeyAction::Dispatch(Msg::ViewModeSelected(ViewMode::All))
        );
    }

    #[test]
    fn escape_and_ctrl_c_quit() {
        let view = AppViewModel::default();
        assert_eq!(map_key(key(KeyCode::Esc), &view, None), KeyAction::Quit);
        assert_eq!(
            map_key(
                KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
                &view,
                None
            ),
            KeyAction::Quit
        );
    }
}
