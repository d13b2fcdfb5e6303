//! Strict parser for the structured floor-plan specification consumed when
//! the input surface is the code editor.
//!
//! The payload is a JSON object with a required `rooms` list and optional
//! `doors` / `windows` lists; unknown top-level fields are ignored. Syntax
//! problems surface as [`GenerationError::Parse`], structural problems
//! (missing or dangling fields) as [`GenerationError::Schema`], and
//! out-of-range geometry as [`InvalidLayout`](crate::model::InvalidLayout)
//! via layout construction.

use serde::Deserialize;

use crate::generator::GenerationError;
use crate::model::{Layout, Opening, Room, SourceKind, WallSide, PLAN_WIDTH};

#[derive(Debug, Deserialize)]
struct PlanSpec {
    rooms: Vec<RoomSpec>,
    #[serde(default)]
    doors: Vec<DoorSpec>,
    #[serde(default)]
    windows: Vec<WindowSpec>,
}

#[derive(Debug, Deserialize)]
struct RoomSpec {
    name: String,
    width: f32,
    height: f32,
    #[serde(default)]
    x: Option<f32>,
    #[serde(default)]
    y: Option<f32>,
}

#[derive(Debug, Deserialize)]
struct DoorSpec {
    from: String,
    to: String,
}

#[derive(Debug, Deserialize)]
struct WindowSpec {
    room: String,
    wall: WallSide,
    size: f32,
}

pub fn parse(payload: &str) -> Result<Layout, GenerationError> {
    let spec: PlanSpec = serde_json::from_str(payload).map_err(classify)?;
    if spec.rooms.is_empty() {
        return Err(GenerationError::Schema("`rooms` is empty".into()));
    }

    let mut packer = ShelfPacker::default();
    let mut rooms = Vec::with_capacity(spec.rooms.len());
    for room in spec.rooms {
        let (x, y) = match (room.x, room.y) {
            (Some(x), Some(y)) => (x, y),
            _ => packer.place(room.width, room.height),
        };
        rooms.push(Room::new(room.name, x, y, room.width, room.height));
    }

    let resolve = |name: &str| {
        rooms
            .iter()
            .find(|room| room.name == name)
            .map(|room| room.id)
            .ok_or_else(|| GenerationError::Schema(format!("reference to unknown room '{name}'")))
    };

    let mut openings = Vec::with_capacity(spec.doors.len() + spec.windows.len());
    for door in &spec.doors {
        openings.push(Opening::Door {
            from: resolve(&door.from)?,
            to: resolve(&door.to)?,
        });
    }
    for window in &spec.windows {
        if window.size <= 0.0 {
            return Err(GenerationError::Schema(format!(
                "window on '{}' has non-positive size",
                window.room
            )));
        }
        openings.push(Opening::Window {
            room: resolve(&window.room)?,
            wall: window.wall,
            size: window.size,
        });
    }

    Ok(Layout::new(rooms, openings, SourceKind::Code)?)
}

fn classify(err: serde_json::Error) -> GenerationError {
    use serde_json::error::Category;
    match err.classify() {
        Category::Syntax | Category::Eof => GenerationError::Parse(err.to_string()),
        _ => GenerationError::Schema(err.to_string()),
    }
}

/// Left-to-right shelf placement for rooms that omit `x`/`y`. Packed rooms
/// sit flush against each other so doors between them fall on shared edges.
#[derive(Default)]
struct ShelfPacker {
    cursor_x: f32,
    cursor_y: f32,
    row_height: f32,
}

impl ShelfPacker {
    fn place(&mut self, width: f32, height: f32) -> (f32, f32) {
        if self.cursor_x > 0.0 && self.cursor_x + width > PLAN_WIDTH {
            self.cursor_y += self.row_height;
            self.cursor_x = 0.0;
            self.row_height = 0.0;
        }
        let slot = (self.cursor_x, self.cursor_y);
        self.cursor_x += width.max(0.0);
        self.row_height = self.row_height.max(height);
        slot
    }
}
