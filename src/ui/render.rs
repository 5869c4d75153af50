use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

use crate::ui::app::App;
use crate::ui::layout::{centered_rect, layout_regions};
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, POPUP_BORDER, SKELETON,
    STATUS_ERROR, STATUS_OK,
};
use crate::ui::view::{DetailView, ResultsView, Screen, StatusLine, SEARCHING};

const HINTS: &str =
    " Enter: Search │ Tab: Focus │ ↑↓: Move │ m: More │ x: Clear history │ Esc: Dismiss │ Ctrl+Q: Quit";

pub fn draw(frame: &mut Frame<'_>, app: &App, screen: Option<&Screen>) {
    match screen {
        Some(screen) => draw_screen(frame, screen),
        None => draw_fallback(frame, app),
    }
}

fn draw_screen(frame: &mut Frame<'_>, screen: &Screen) {
    let area = frame.area();
    let regions = layout_regions(area, screen.status.len() as u16);

    frame.render_widget(search_box(screen), regions.search);
    frame.render_widget(history_bar(screen), regions.history);
    frame.render_widget(status_lines(screen), regions.status);
    draw_results(frame, &screen.results, regions.results);
    frame.render_widget(
        Paragraph::new(HINTS).style(Style::default().fg(MUTED_TEXT)),
        regions.footer,
    );

    if let Some(detail) = &screen.detail {
        draw_detail(frame, detail, area);
    }
}

fn search_box(screen: &Screen) -> Paragraph<'static> {
    let border = if screen.input_focused {
        ACCENT
    } else {
        GLOBAL_BORDER
    };
    let mut spans = vec![Span::styled(
        screen.input.clone(),
        Style::default().fg(HEADER_TEXT),
    )];
    if screen.input_focused {
        spans.push(Span::styled("▏", Style::default().fg(ACCENT)));
    }

    Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(" Search movies "),
    )
}

fn history_bar(screen: &Screen) -> Paragraph<'static> {
    if screen.history.is_empty() {
        return Paragraph::new("");
    }

    let mut spans = vec![Span::styled(
        " Recent: ",
        Style::default().fg(MUTED_TEXT),
    )];
    for chip in &screen.history {
        let style = if chip.selected {
            Style::default()
                .fg(ACCENT)
                .bg(ACTIVE_HIGHLIGHT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(HEADER_TEXT)
        };
        spans.push(Span::styled(format!(" {} ", chip.term), style));
        spans.push(Span::raw(" "));
    }
    Paragraph::new(Line::from(spans))
}

fn status_lines(screen: &Screen) -> Paragraph<'static> {
    let lines: Vec<Line> = screen
        .status
        .iter()
        .map(|status| match status {
            StatusLine::Searching => {
                Line::styled(format!(" {}", SEARCHING), Style::default().fg(ACCENT))
            }
            StatusLine::Error(message) => Line::from(vec![
                Span::styled(format!(" ✕ {}", message), Style::default().fg(STATUS_ERROR)),
                Span::styled("  (Esc to dismiss)", Style::default().fg(MUTED_TEXT)),
            ]),
            StatusLine::Summary(text) => {
                Line::styled(format!(" {}", text), Style::default().fg(STATUS_OK))
            }
        })
        .collect();
    Paragraph::new(lines)
}

fn draw_results(frame: &mut Frame<'_>, results: &ResultsView, area: Rect) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(GLOBAL_BORDER));

    match results {
        ResultsView::Empty => frame.render_widget(block, area),
        ResultsView::Skeleton(rows) => {
            let lines: Vec<Line> = (0..*rows)
                .map(|_| Line::styled(" ░░░░░░░░░░░░░░░░░░░░░░░░  ░░░░", Style::default().fg(SKELETON)))
                .collect();
            frame.render_widget(Paragraph::new(lines).block(block), area);
        }
        ResultsView::List {
            rows,
            selected,
            footer,
        } => {
            let mut items: Vec<ListItem> = rows
                .iter()
                .map(|row| {
                    ListItem::new(vec![
                        Line::from(vec![
                            Span::styled(row.title.clone(), Style::default().fg(HEADER_TEXT)),
                            Span::styled(format!("  {}", row.meta), Style::default().fg(MUTED_TEXT)),
                        ]),
                        Line::styled(format!("   {}", row.poster), Style::default().fg(MUTED_TEXT)),
                    ])
                })
                .collect();
            if let Some(footer) = footer {
                items.push(ListItem::new(Line::styled(
                    format!(" {}", footer),
                    Style::default().fg(ACCENT),
                )));
            }

            let list = List::new(items)
                .block(block)
                .highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT).add_modifier(Modifier::BOLD))
                .highlight_symbol("▶ ");
            let mut state = ListState::default().with_selected(*selected);
            frame.render_stateful_widget(list, area, &mut state);
        }
    }
}

fn draw_detail(frame: &mut Frame<'_>, detail: &DetailView, area: Rect) {
    let popup = centered_rect(70, 70, area);
    let label = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);
    let text = Style::default().fg(HEADER_TEXT);

    let mut lines = vec![
        Line::styled(detail.headline.clone(), Style::default().fg(MUTED_TEXT)),
        Line::styled(detail.rating.clone(), Style::default().fg(ACCENT)),
        Line::from(""),
        Line::styled(detail.plot.clone(), text),
        Line::from(""),
    ];
    for (name, value) in &detail.facts {
        lines.push(Line::from(vec![
            Span::styled(format!("{}: ", name), label),
            Span::styled(value.clone(), text),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::styled(
        format!("Poster: {}", detail.poster),
        Style::default().fg(MUTED_TEXT),
    ));

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(POPUP_BORDER))
                .title(format!(" {} ", detail.title))
                .title_bottom(Line::from(" Esc: Close ").alignment(Alignment::Right)),
        ),
        popup,
    );
}

fn draw_fallback(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let popup = centered_rect(60, 40, area);
    let lines: Vec<Line> = app
        .boundary()
        .fallback_lines()
        .into_iter()
        .enumerate()
        .map(|(idx, line)| {
            let style = if idx == 0 {
                Style::default().fg(STATUS_ERROR).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(HEADER_TEXT)
            };
            Line::styled(line, style)
        })
        .collect();

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(STATUS_ERROR)),
            ),
        popup,
    );
}
