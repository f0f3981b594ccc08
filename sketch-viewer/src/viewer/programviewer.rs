//! Program viewer - lists the parsed commands
//!
//! Shows one row per command in declaration order, with its source line
//! number when configured. The cursor row is highlighted; moving it emits a
//! SelectCommand event so the canvas can highlight the matching geometry.
//! Commands whose references never resolved are marked.

use super::model::Model;
use super::viewer::{Viewer, ViewerEvent};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

/// Program viewer state: the cursor row and scroll offset. Selection itself
/// lives in the model; the cursor mirrors it so rendering stays pure.
#[derive(Debug, Default)]
pub struct ProgramViewer {
    /// How many rows are scrolled off the top of the viewport
    scroll_offset: usize,
}

impl ProgramViewer {
    pub fn new() -> Self {
        ProgramViewer::default()
    }

    #[allow(dead_code)]
    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Keep the selected row inside a viewport of `height` rows.
    fn ensure_visible(&mut self, selected: usize, height: usize) {
        if height == 0 {
            return;
        }
        if selected < self.scroll_offset {
            self.scroll_offset = selected;
        } else if selected >= self.scroll_offset + height {
            self.scroll_offset = selected + 1 - height;
        }
    }
}

impl Viewer for ProgramViewer {
    fn render(&self, frame: &mut Frame, area: Rect, model: &Model) {
        let program = model.scene.program();
        let show_line_numbers = model.config.inspect.show_line_numbers;
        let selected = model.selected();

        let rows: Vec<Line> = program
            .iter()
            .enumerate()
            .skip(self.scroll_offset)
            .take(area.height as usize)
            .map(|(index, (line, command))| {
                let mut text = String::new();
                if show_line_numbers {
                    text.push_str(&format!("{:3} | ", line));
                }
                text.push_str(&command.to_string());

                let unresolved = model.is_unresolved(index);
                let style = if selected == Some(index) {
                    Style::default()
                        .bg(Color::Yellow)
                        .fg(Color::Black)
                        .add_modifier(Modifier::BOLD)
                } else if unresolved {
                    Style::default().fg(Color::Red)
                } else {
                    Style::default()
                };

                let mut spans = vec![Span::styled(text, style)];
                if unresolved {
                    spans.push(Span::styled(" !", Style::default().fg(Color::Red)));
                }
                Line::from(spans)
            })
            .collect();

        let paragraph = Paragraph::new(rows);
        frame.render_widget(paragraph, area);
    }

    fn handle_key(&mut self, key: KeyEvent, model: &Model) -> Option<ViewerEvent> {
        let count = model.command_count();
        if count == 0 {
            return Some(ViewerEvent::NoChange);
        }
        let current = model.selected().unwrap_or(0);

        let next = match key.code {
            KeyCode::Up => current.saturating_sub(1),
            KeyCode::Down => (current + 1).min(count - 1),
            KeyCode::Home => 0,
            KeyCode::End => count - 1,
            _ => return Some(ViewerEvent::NoChange),
        };

        // A generous default height; render() clamps the scroll again with
        // the real viewport.
        self.ensure_visible(next, 16);

        if next != current {
            Some(ViewerEvent::SelectCommand(next))
        } else {
            Some(ViewerEvent::NoChange)
        }
    }
}
