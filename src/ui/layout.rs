use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen regions, top to bottom.
pub struct Regions {
    pub search: Rect,
    pub history: Rect,
    pub status: Rect,
    pub results: Rect,
    pub footer: Rect,
}

pub fn layout_regions(area: Rect, status_lines: u16) -> Regions {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(status_lines),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    Regions {
        search: chunks[0],
        history: chunks[1],
        status: chunks[2],
        results: chunks[3],
        footer: chunks[4],
    }
}

pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
