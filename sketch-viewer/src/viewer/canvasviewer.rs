//! Canvas viewer - draws the resolved scene on a Cartesian plane
//!
//! The canvas shows a unit grid with axes and numeric labels, then every
//! drawable in source order: labeled point dots, circles, and lines for
//! chords, segments and radii. The selected command's geometry is
//! highlighted. Arrow keys pan, `+`/`-` zoom, `0` resets the view.

use super::model::Model;
use super::viewer::{Viewer, ViewerEvent};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::symbols::Marker;
use ratatui::text::Span;
use ratatui::widgets::canvas::{Canvas, Circle, Line, Points};
use ratatui::Frame;
use sketch_parser::sketch::resolve::Drawable;

/// Grids denser than this many cells per axis are not drawn.
const GRID_DENSITY_LIMIT: i64 = 120;
/// Zoom step per keypress.
const ZOOM_STEP: f64 = 1.25;

/// Canvas viewer state: a pan offset and zoom factor over the scene's
/// logical bounding box. The scene itself is owned by the model.
#[derive(Debug)]
pub struct CanvasViewer {
    offset_x: f64,
    offset_y: f64,
    zoom: f64,
}

impl CanvasViewer {
    pub fn new() -> Self {
        CanvasViewer {
            offset_x: 0.0,
            offset_y: 0.0,
            zoom: 1.0,
        }
    }

    #[allow(dead_code)]
    pub fn offset(&self) -> (f64, f64) {
        (self.offset_x, self.offset_y)
    }

    #[allow(dead_code)]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// The viewport in logical coordinates: scene bounds plus the
    /// configured margin, scaled by zoom and shifted by the pan offset.
    fn viewport(&self, model: &Model) -> ([f64; 2], [f64; 2]) {
        let bounds = model.scene.logical_bounds();
        let margin = model.config.canvas.margin as f64;

        let center_x = (bounds.min.x + bounds.max.x) as f64 / 2.0 + self.offset_x;
        let center_y = (bounds.min.y + bounds.max.y) as f64 / 2.0 + self.offset_y;
        let half_width = ((bounds.width() as f64 / 2.0) + margin) / self.zoom;
        let half_height = ((bounds.height() as f64 / 2.0) + margin) / self.zoom;

        (
            [center_x - half_width, center_x + half_width],
            [center_y - half_height, center_y + half_height],
        )
    }

    fn pan(&mut self, dx: f64, dy: f64) {
        self.offset_x += dx / self.zoom;
        self.offset_y += dy / self.zoom;
    }

    fn zoom_by(&mut self, factor: f64) {
        self.zoom = (self.zoom * factor).clamp(0.05, 50.0);
    }

    fn reset_view(&mut self) {
        self.offset_x = 0.0;
        self.offset_y = 0.0;
        self.zoom = 1.0;
    }
}

impl Default for CanvasViewer {
    fn default() -> Self {
        Self::new()
    }
}

impl Viewer for CanvasViewer {
    fn render(&self, frame: &mut Frame, area: Rect, model: &Model) {
        let ([x_min, x_max], [y_min, y_max]) = self.viewport(model);

        let canvas = Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([x_min, x_max])
            .y_bounds([y_min, y_max])
            .paint(|ctx| {
                if model.config.canvas.show_grid {
                    draw_grid(ctx, x_min, x_max, y_min, y_max);
                }
                draw_axes(ctx, x_min, x_max, y_min, y_max);
                if model.config.canvas.show_labels {
                    draw_axis_labels(ctx, model, x_min, x_max, y_min, y_max);
                }
                draw_scene(ctx, model);
            });

        frame.render_widget(canvas, area);
    }

    fn handle_key(&mut self, key: KeyEvent, _model: &Model) -> Option<ViewerEvent> {
        match key.code {
            KeyCode::Left => self.pan(-1.0, 0.0),
            KeyCode::Right => self.pan(1.0, 0.0),
            KeyCode::Up => self.pan(0.0, 1.0),
            KeyCode::Down => self.pan(0.0, -1.0),
            KeyCode::Char('+') | KeyCode::Char('=') => self.zoom_by(ZOOM_STEP),
            KeyCode::Char('-') => self.zoom_by(1.0 / ZOOM_STEP),
            KeyCode::Char('0') => self.reset_view(),
            _ => return Some(ViewerEvent::NoChange),
        }
        Some(ViewerEvent::NoChange)
    }
}

fn draw_grid(
    ctx: &mut ratatui::widgets::canvas::Context,
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
) {
    if (x_max - x_min) as i64 > GRID_DENSITY_LIMIT || (y_max - y_min) as i64 > GRID_DENSITY_LIMIT {
        return;
    }

    let mut x = x_min.ceil();
    while x <= x_max {
        ctx.draw(&Line {
            x1: x,
            y1: y_min,
            x2: x,
            y2: y_max,
            color: Color::DarkGray,
        });
        x += 1.0;
    }

    let mut y = y_min.ceil();
    while y <= y_max {
        ctx.draw(&Line {
            x1: x_min,
            y1: y,
            x2: x_max,
            y2: y,
            color: Color::DarkGray,
        });
        y += 1.0;
    }
}

fn draw_axes(
    ctx: &mut ratatui::widgets::canvas::Context,
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
) {
    ctx.draw(&Line {
        x1: x_min,
        y1: 0.0,
        x2: x_max,
        y2: 0.0,
        color: Color::Gray,
    });
    ctx.draw(&Line {
        x1: 0.0,
        y1: y_min,
        x2: 0.0,
        y2: y_max,
        color: Color::Gray,
    });
}

fn draw_axis_labels(
    ctx: &mut ratatui::widgets::canvas::Context,
    model: &Model,
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
) {
    let step = model.config.canvas.label_step.max(1);
    let style = Style::default().fg(Color::Red);

    let mut x = ((x_min / step as f64).ceil() as i64) * step;
    while (x as f64) <= x_max {
        if x != 0 {
            ctx.print(x as f64, 0.0, Span::styled(x.to_string(), style));
        }
        x += step;
    }

    let mut y = ((y_min / step as f64).ceil() as i64) * step;
    while (y as f64) <= y_max {
        if y != 0 {
            ctx.print(0.0, y as f64, Span::styled(y.to_string(), style));
        }
        y += step;
    }
}

fn draw_scene(ctx: &mut ratatui::widgets::canvas::Context, model: &Model) {
    let show_labels = model.config.canvas.show_labels;
    let selected = model.selected();

    // A fresh layer so scene geometry is never overdrawn by the grid.
    ctx.layer();

    for (index, drawable) in model.scene.drawables() {
        let highlighted = selected == Some(index);
        match drawable {
            Drawable::Point { at, label } => {
                let color = if highlighted { Color::Yellow } else { Color::White };
                ctx.draw(&Points {
                    coords: &[(at.x as f64, at.y as f64)],
                    color,
                });
                if show_labels {
                    ctx.print(
                        at.x as f64,
                        at.y as f64 + 0.5,
                        Span::styled(label.clone(), Style::default().fg(color)),
                    );
                }
            }
            Drawable::Circle {
                center,
                radius,
                label,
            } => {
                let color = if highlighted { Color::Yellow } else { Color::White };
                ctx.draw(&Circle {
                    x: center.at.x as f64,
                    y: center.at.y as f64,
                    radius: radius.unsigned_abs() as f64,
                    color,
                });
                if show_labels {
                    if let Some(label) = label {
                        ctx.print(
                            center.at.x as f64,
                            center.at.y as f64 + 0.5,
                            Span::styled(label.clone(), Style::default().fg(color)),
                        );
                    }
                }
            }
            Drawable::Segment { from, to, .. } => {
                let color = if highlighted { Color::Yellow } else { Color::Blue };
                ctx.draw(&Line {
                    x1: from.at.x as f64,
                    y1: from.at.y as f64,
                    x2: to.at.x as f64,
                    y2: to.at.y as f64,
                    color,
                });
            }
        }
    }
}
