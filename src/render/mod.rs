use eframe::egui::{self, Align2, FontId, Stroke};

use crate::model::Layout;
use crate::view::ViewState;

pub mod openings;
pub mod scene;

pub use scene::{DrawCmd, Scene};

/// Binds scenes to a live egui painter.
///
/// Rendering never fails on a valid layout: if the target surface is not
/// ready (a degenerate canvas rect) the call is a silent no-op and a later
/// frame picks it up.
#[derive(Debug, Default)]
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    /// Draws `layout` under `view` into `canvas`, clipped to it.
    pub fn render(
        &self,
        painter: &egui::Painter,
        canvas: egui::Rect,
        layout: &Layout,
        view: ViewState,
    ) {
        if canvas.width() <= 0.0 || canvas.height() <= 0.0 {
            // Surface not ready yet; not an error.
            return;
        }
        let scene = Scene::build(layout, view, canvas.size());
        self.paint(&painter.with_clip_rect(canvas), canvas.min, &scene);
    }

    /// Maps drawing instructions onto the painter, offset into the canvas.
    fn paint(&self, painter: &egui::Painter, origin: egui::Pos2, scene: &Scene) {
        let offset = origin.to_vec2();
        for cmd in scene.cmds() {
            match cmd {
                DrawCmd::Fill { rect, color } => {
                    painter.rect_filled(rect.translate(offset), 0.0, *color);
                }
                DrawCmd::Stroke { rect, color, width } => {
                    painter.rect_stroke(rect.translate(offset), 0.0, Stroke::new(*width, *color));
                }
                DrawCmd::Line {
                    from,
                    to,
                    color,
                    width,
                } => {
                    painter.line_segment([*from + offset, *to + offset], Stroke::new(*width, *color));
                }
                DrawCmd::Label {
                    pos,
                    text,
                    size,
                    color,
                } => {
                    painter.text(
                        *pos + offset,
                        Align2::CENTER_CENTER,
                        text,
                        FontId::proportional(*size),
                        *color,
                    );
                }
            }
        }
    }
}
