//! Pure mapping from a layout plus view state to drawing instructions.
//!
//! Building a [`Scene`] touches no drawing surface, so the whole rendering
//! algorithm is testable by asserting on instructions instead of pixels.
//! Given identical inputs the instruction list is identical.

use egui::{Color32, Pos2, Rect, Vec2, pos2, vec2};

use crate::model::Layout;
use crate::render::openings;
use crate::style;
use crate::view::ViewState;

/// Grid line spacing in plan units.
pub const GRID_SPACING: f32 = 20.0;
/// Room borders keep this width at every zoom level.
pub const ROOM_BORDER_WIDTH: f32 = 2.0;
pub const GRID_LINE_WIDTH: f32 = 0.5;
pub const OPENING_STROKE_WIDTH: f32 = 3.0;
/// Coarse display-unit conversion: 10 plan units read as one foot on the
/// dimension labels. Deliberately approximate, kept for output parity.
pub const PLAN_UNITS_PER_FOOT: f32 = 10.0;

const NAME_FONT_SIZE: f32 = 14.0;
const DIMENSION_FONT_SIZE: f32 = 10.0;
const LABEL_OFFSET: f32 = 8.0;

// Fixed main-entrance marker, in plan units.
const ENTRANCE_FROM: Pos2 = Pos2 { x: 150.0, y: 50.0 };
const ENTRANCE_TO: Pos2 = Pos2 { x: 150.0, y: 35.0 };

/// One drawing instruction, already in screen space.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Fill {
        rect: Rect,
        color: Color32,
    },
    Stroke {
        rect: Rect,
        color: Color32,
        width: f32,
    },
    Line {
        from: Pos2,
        to: Pos2,
        color: Color32,
        width: f32,
    },
    Label {
        pos: Pos2,
        text: String,
        size: f32,
        color: Color32,
    },
}

/// Ordered drawing instructions for one frame.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scene {
    cmds: Vec<DrawCmd>,
}

/// The secondary label under a room name, e.g. `20' × 15'`.
pub fn dimension_label(width: f32, height: f32) -> String {
    format!(
        "{}' × {}'",
        (width / PLAN_UNITS_PER_FOOT).round() as i64,
        (height / PLAN_UNITS_PER_FOOT).round() as i64,
    )
}

impl Scene {
    /// Builds the instruction list for `layout` under `view`, filling a
    /// viewport of the given size (screen points).
    ///
    /// Zoom is a uniform scale about the top-left origin: geometry and font
    /// sizes grow from the top-left while stroke widths stay constant.
    pub fn build(layout: &Layout, view: ViewState, viewport: Vec2) -> Self {
        let zoom = view.zoom;
        let mut cmds = Vec::new();

        cmds.push(DrawCmd::Fill {
            rect: Rect::from_min_size(Pos2::ZERO, viewport),
            color: style::BACKGROUND,
        });

        // Grid lines every GRID_SPACING plan units across the viewport.
        let step = GRID_SPACING * zoom;
        let mut x = 0.0;
        while x < viewport.x {
            cmds.push(DrawCmd::Line {
                from: pos2(x, 0.0),
                to: pos2(x, viewport.y),
                color: style::GRID_LINE,
                width: GRID_LINE_WIDTH,
            });
            x += step;
        }
        let mut y = 0.0;
        while y < viewport.y {
            cmds.push(DrawCmd::Line {
                from: pos2(0.0, y),
                to: pos2(viewport.x, y),
                color: style::GRID_LINE,
                width: GRID_LINE_WIDTH,
            });
            y += step;
        }

        // Rooms in sequence order; later rooms draw over earlier ones.
        for room in layout.rooms() {
            let rect = Rect::from_min_size(
                pos2(room.x * zoom, room.y * zoom),
                vec2(room.width * zoom, room.height * zoom),
            );
            let room_style = style::room_style(&room.category);
            cmds.push(DrawCmd::Fill {
                rect,
                color: room_style.fill,
            });
            cmds.push(DrawCmd::Stroke {
                rect,
                color: room_style.border,
                width: ROOM_BORDER_WIDTH,
            });

            let center = rect.center();
            cmds.push(DrawCmd::Label {
                pos: pos2(center.x, center.y - LABEL_OFFSET * zoom),
                text: room.name.clone(),
                size: NAME_FONT_SIZE * zoom,
                color: style::TEXT_PRIMARY,
            });
            cmds.push(DrawCmd::Label {
                pos: pos2(center.x, center.y + LABEL_OFFSET * zoom),
                text: dimension_label(room.width, room.height),
                size: DIMENSION_FONT_SIZE * zoom,
                color: style::TEXT_SECONDARY,
            });
        }

        cmds.push(DrawCmd::Line {
            from: (ENTRANCE_FROM.to_vec2() * zoom).to_pos2(),
            to: (ENTRANCE_TO.to_vec2() * zoom).to_pos2(),
            color: style::DOOR_STROKE,
            width: OPENING_STROKE_WIDTH,
        });

        for (segment, color) in openings::segments(layout) {
            cmds.push(DrawCmd::Line {
                from: (segment.0.to_vec2() * zoom).to_pos2(),
                to: (segment.1.to_vec2() * zoom).to_pos2(),
                color,
                width: OPENING_STROKE_WIDTH,
            });
        }

        Self { cmds }
    }

    pub fn cmds(&self) -> &[DrawCmd] {
        &self.cmds
    }
}
