use crate::game::{Disk, COLUMN_COUNT};
use crate::session::BoardView;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const BLOCK: &str = "\u{2588}";
/// Blank cells to the left of each column
const GAP: usize = 3;
/// Pole rows drawn above the tallest possible stack
const POLE_ROWS: usize = 2;

const DISK_COLOR: Color = Color::White;
const POLE_COLOR: Color = Color::DarkGray;
const CURSOR_COLOR: Color = Color::Cyan;
const ARMED_COLOR: Color = Color::Blue;

pub fn render(frame: &mut Frame, view: &BoardView<'_>, message: Option<&str>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(POLE_ROWS as u16 + 3), // Towers
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, view, chunks[0]);
    render_towers(frame, view, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, view, chunks[3]);
}

fn render_header(frame: &mut Frame, view: &BoardView<'_>, area: Rect) {
    let puzzle = view.puzzle;
    let status = format!("{}/{}", puzzle.move_count(), puzzle.minimum_moves());

    let header = Paragraph::new(status)
        .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Towers of Hanoi"),
        );

    frame.render_widget(header, area);
}

fn render_towers(frame: &mut Frame, view: &BoardView<'_>, area: Rect) {
    let mut lines = tower_lines(view);
    lines.push(Line::default());
    if let Some(line) = selector_line(view) {
        lines.push(line);
    }

    let towers = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(towers, area);
}

fn render_message(frame: &mut Frame, message: Option<&str>, area: Rect) {
    let msg_widget = Paragraph::new(message.unwrap_or(""))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, view: &BoardView<'_>, area: Rect) {
    let help = if view.cursor.is_some() {
        "←/→: Column  |  Enter: Pick up / Drop  |  R: Restart  |  Q: Quit"
    } else {
        "Q: Stop"
    };

    let controls = Paragraph::new(help)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}

/// Block-art rows for the three columns, top row first.
///
/// Every column is `2 * degree + 1` cells wide. A disk of size `s` fills
/// `2 * s + 1` of them, and a slot without a disk shows the 1-cell pole.
pub fn tower_lines(view: &BoardView<'_>) -> Vec<Line<'static>> {
    let degree = view.puzzle.degree() as usize;
    let columns = view.puzzle.columns();
    let mut lines = Vec::with_capacity(POLE_ROWS + degree);

    for _ in 0..POLE_ROWS {
        let mut spans = Vec::new();
        for _ in 0..COLUMN_COUNT {
            spans.push(Span::raw(" ".repeat(GAP)));
            spans.extend(slot_spans(degree, None));
        }
        lines.push(Line::from(spans));
    }

    for height in (0..degree).rev() {
        let mut spans = Vec::new();
        for column in columns {
            spans.push(Span::raw(" ".repeat(GAP)));
            spans.extend(slot_spans(degree, column.get(height)));
        }
        lines.push(Line::from(spans));
    }

    lines
}

fn slot_spans(degree: usize, disk: Option<Disk>) -> [Span<'static>; 3] {
    let (size, color) = match disk {
        Some(disk) => (disk.size() as usize, DISK_COLOR),
        None => (0, POLE_COLOR),
    };
    let padding = " ".repeat(degree - size);

    [
        Span::raw(padding.clone()),
        Span::styled(BLOCK.repeat(2 * size + 1), Style::default().fg(color)),
        Span::raw(padding),
    ]
}

/// Column labels under the towers: `<n>` marks the cursor and the armed
/// column is coloured. Absent when nobody is selecting.
pub fn selector_line(view: &BoardView<'_>) -> Option<Line<'static>> {
    let cursor = view.cursor?;
    let side = " ".repeat(view.puzzle.degree() as usize - 1);
    let mut spans = Vec::new();

    for column in 0..COLUMN_COUNT {
        let label = if column == cursor {
            format!("<{}>", column + 1)
        } else {
            format!(" {} ", column + 1)
        };
        let mut style = Style::default();
        if column == cursor {
            style = style.fg(CURSOR_COLOR).add_modifier(Modifier::BOLD);
        }
        if view.armed == Some(column) {
            style = style.fg(ARMED_COLOR).add_modifier(Modifier::BOLD);
        }

        spans.push(Span::raw(" ".repeat(GAP)));
        spans.push(Span::raw(side.clone()));
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(side.clone()));
    }

    Some(Line::from(spans))
}
