//! UI rendering logic
//!
//! Handles layout and rendering of the application using Ratatui.
//! Layout structure:
//! - Title bar (1 line, fixed)
//! - Middle section (responsive height):
//!   - Program viewer (34 chars, fixed width)
//!   - Scene canvas (remaining space)
//! - Status line (1 line, fixed)

use super::app::App;
use super::model::Focus;
use super::viewer::Viewer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// Minimum terminal width required for the UI
const MIN_TERMINAL_WIDTH: u16 = 50;
/// Width allocated to the program viewer
const PROGRAM_VIEWER_WIDTH: u16 = 34;
/// Height of the status line
const STATUS_LINE_HEIGHT: u16 = 1;

/// Render the entire UI
pub fn render(frame: &mut Frame, app: &App, file_name: &str) {
    let size = frame.area();

    // Check minimum width
    if size.width < MIN_TERMINAL_WIDTH {
        render_error_too_narrow(frame, size);
        return;
    }

    // Split layout vertically: title, middle (program|canvas), status line
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),                  // Title bar
            Constraint::Min(1),                     // Middle - fills the rest
            Constraint::Length(STATUS_LINE_HEIGHT), // Status line
        ])
        .split(size);

    render_title_bar(frame, chunks[0], file_name);
    render_middle_section(frame, chunks[1], app);
    render_status_line(frame, chunks[2], app);
}

fn render_error_too_narrow(frame: &mut Frame, area: Rect) {
    let msg = format!(
        "Terminal too narrow: {} < {} chars",
        area.width, MIN_TERMINAL_WIDTH
    );
    let paragraph =
        Paragraph::new(msg).style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD));
    frame.render_widget(paragraph, area);
}

fn render_title_bar(frame: &mut Frame, area: Rect, file_name: &str) {
    let title = format!("sketch:: {}", file_name);
    let paragraph = Paragraph::new(title).style(
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(paragraph, area);
}

fn render_middle_section(frame: &mut Frame, area: Rect, app: &App) {
    // Split horizontally: program viewer and scene canvas
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(PROGRAM_VIEWER_WIDTH), // Program viewer
            Constraint::Min(1),                       // Scene canvas
        ])
        .split(area);

    render_program_viewer(frame, chunks[0], app);
    render_canvas_viewer(frame, chunks[1], app);
}

fn render_program_viewer(frame: &mut Frame, area: Rect, app: &App) {
    let focus_indicator = if app.focus == Focus::Program {
        " [FOCUSED]"
    } else {
        ""
    };

    let title = format!("Program{}", focus_indicator);
    let block = Block::default().borders(Borders::ALL).title(title);
    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    app.program_viewer.render(frame, inner_area, &app.model);
}

fn render_canvas_viewer(frame: &mut Frame, area: Rect, app: &App) {
    let focus_indicator = if app.focus == Focus::Canvas {
        " [FOCUSED]"
    } else {
        ""
    };

    let title = format!("Scene{}", focus_indicator);
    let block = Block::default().borders(Borders::ALL).title(title);
    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    app.canvas_viewer.render(frame, inner_area, &app.model);
}

fn render_status_line(frame: &mut Frame, area: Rect, app: &App) {
    let mut parts = Vec::new();

    match app.model.selected_command() {
        Some(command) => {
            parts.push(Span::styled(
                "Selected: ",
                Style::default().fg(Color::Yellow),
            ));
            parts.push(Span::raw(command.to_string()));
            if let Some(line) = app.model.selected_line() {
                parts.push(Span::raw(format!(" (line {})", line)));
            }
            if let Some(drawable) = app.model.selected_drawable() {
                parts.push(Span::raw(" | "));
                parts.push(Span::styled("At: ", Style::default().fg(Color::Yellow)));
                parts.push(Span::raw(describe_drawable(drawable)));
            } else {
                parts.push(Span::styled(
                    " | unresolved",
                    Style::default().fg(Color::Red),
                ));
            }
        }
        None => {
            parts.push(Span::raw("Empty program"));
        }
    }

    let (errors, warnings) = app.model.diagnostic_counts();
    if errors + warnings > 0 {
        parts.push(Span::raw(" | "));
        parts.push(Span::styled(
            format!("{} error(s), {} warning(s)", errors, warnings),
            Style::default().fg(Color::Red),
        ));
    }

    let paragraph = Paragraph::new(ratatui::text::Line::from(parts))
        .style(Style::default().bg(Color::Black).fg(Color::White));

    frame.render_widget(paragraph, area);
}

fn describe_drawable(drawable: &sketch_parser::sketch::resolve::Drawable) -> String {
    use sketch_parser::sketch::resolve::Drawable;
    match drawable {
        Drawable::Point { at, .. } => at.to_string(),
        Drawable::Circle { center, radius, .. } => {
            format!("center {}, radius {}", center.at, radius)
        }
        Drawable::Segment { from, to, .. } => format!("{} -> {}", from.at, to.at),
    }
}
