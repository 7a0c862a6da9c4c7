use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::models::{format_price, CourseAverage, MenuItem};

/// Build the text for one dish card. The selected card gets a marker and a
/// highlighted title.
pub(crate) fn dish_card_lines(item: &MenuItem, selected: bool) -> Vec<Line<'static>> {
    let title = if selected {
        format!("> {}", item.name)
    } else {
        item.name.clone()
    };

    let mut lines = vec![
        Line::from(Span::styled(
            title,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            item.description.clone(),
            Style::default().fg(Color::Gray),
        )),
        Line::from(vec![
            Span::styled(item.course.label(), Style::default().fg(Color::LightBlue)),
            Span::raw("  "),
            Span::styled(
                item.display_price(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    if let Some(image) = item.image.as_deref().filter(|image| !image.trim().is_empty()) {
        lines.push(Line::from(Span::styled(
            image.trim().to_string(),
            Style::default().fg(Color::DarkGray),
        )));
    }

    lines
}

/// One summary row per course: `Starters: R 85.00 (3 items)`.
pub(crate) fn average_line(average: &CourseAverage) -> Line<'static> {
    let amount = if average.count > 0 {
        Span::styled(
            format_price(average.average),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled("No items", Style::default().fg(Color::DarkGray))
    };

    Line::from(vec![
        Span::styled(
            format!("{:<10}", format!("{}:", average.course)),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        amount,
        Span::styled(
            format!("  ({} items)", average.count),
            Style::default().fg(Color::Gray),
        ),
    ])
}

/// First index of the window of `capacity` rows that keeps `selected` visible.
pub(crate) fn visible_window(selected: usize, len: usize, capacity: usize) -> (usize, usize) {
    let capacity = capacity.max(1);
    let mut start = if selected >= capacity {
        selected + 1 - capacity
    } else {
        0
    };
    if start + capacity > len {
        start = len.saturating_sub(capacity);
    }
    (start, (start + capacity).min(len))
}

/// Column for a text cursor `offset` cells into `area`, pinned to the last
/// column when the text is wider than the area.
pub(crate) fn cursor_column(area: Rect, offset: usize) -> u16 {
    let offset = u16::try_from(offset).unwrap_or(u16::MAX);
    area.x
        .saturating_add(offset)
        .min(area.right().saturating_sub(1))
}

/// Produce a rectangle centered within `area` that spans the requested percent
/// of the width and height. Used for modal dialogs.
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(area);

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(horizontal[1]);

    vertical[1]
}
