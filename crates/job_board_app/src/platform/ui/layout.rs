use ratatui::layout::{Constraint, Direction, Layout, Rect};

const HEADER_HEIGHT: u16 = 3;
const CONTROLS_HEIGHT: u16 = 3;
const STATUS_HEIGHT: u16 = 1;
const TOGGLES_WIDTH: u16 = 40;

/// Screen regions, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Areas {
    pub header: Rect,
    pub search: Rect,
    pub toggles: Rect,
    pub list: Rect,
    pub status: Rect,
}

pub fn split(area: Rect) -> Areas {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(CONTROLS_HEIGHT),
            Constraint::Min(1),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(area);

    let controls = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(TOGGLES_WIDTH)])
        .split(rows[1]);

    Areas {
        header: rows[0],
        search: controls[0],
        toggles: controls[1],
        list: rows[2],
        status: rows[3],
    }
}
