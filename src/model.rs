use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::util::time;

/// Width of the drawable plan area, in plan units.
pub const PLAN_WIDTH: f32 = 600.0;
/// Height of the drawable plan area, in plan units.
pub const PLAN_HEIGHT: f32 = 500.0;

/// Errors raised when a layout is constructed with out-of-range geometry.
///
/// Construction fails fast: an invalid room rejects the whole layout, it is
/// never partially applied.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidLayout {
    #[error("room '{name}' has non-positive size {width}×{height}")]
    NonPositiveSize {
        name: String,
        width: f32,
        height: f32,
    },

    #[error("room '{name}' lies outside the plan bounds")]
    OutOfBounds { name: String },
}

/// Which input surface produced a layout. Informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Voice,
    Text,
    Drawing,
    Code,
}

/// Category tag used to pick a room's fill and border colors.
///
/// The recognized set is closed; anything else is carried through as
/// `Other` and drawn with the default style rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoomCategory {
    Bedroom,
    Living,
    Kitchen,
    Bathroom,
    Garden,
    Dining,
    Other(String),
}

impl RoomCategory {
    /// Guess a category from a free-text room name.
    pub fn infer(name: &str) -> Self {
        let lower = name.to_lowercase();
        if lower.contains("bed") {
            Self::Bedroom
        } else if lower.contains("kitchen") {
            Self::Kitchen
        } else if lower.contains("bath") || lower.contains("toilet") {
            Self::Bathroom
        } else if lower.contains("living") || lower.contains("hall") || lower.contains("lounge") {
            Self::Living
        } else if lower.contains("dining") {
            Self::Dining
        } else if lower.contains("garden") || lower.contains("yard") {
            Self::Garden
        } else {
            Self::Other(lower)
        }
    }
}

/// Wall of a room, used to anchor windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WallSide {
    North,
    South,
    East,
    West,
}

/// A rectangular named area of the plan.
///
/// Coordinates and sizes are plan units (10 plan units ≈ 1 foot on the
/// rendered dimension labels), not pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: Uuid,
    pub name: String,
    pub category: RoomCategory,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Room {
    pub fn new(name: impl Into<String>, x: f32, y: f32, width: f32, height: f32) -> Self {
        let name = name.into();
        let category = RoomCategory::infer(&name);
        Self {
            id: Uuid::new_v4(),
            name,
            category,
            x,
            y,
            width,
            height,
        }
    }

    /// Bounding rectangle in plan units.
    pub fn rect(&self) -> egui::Rect {
        egui::Rect::from_min_size(
            egui::pos2(self.x, self.y),
            egui::vec2(self.width, self.height),
        )
    }

    fn validate(&self) -> Result<(), InvalidLayout> {
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(InvalidLayout::NonPositiveSize {
                name: self.name.clone(),
                width: self.width,
                height: self.height,
            });
        }
        if self.x < 0.0
            || self.y < 0.0
            || self.x + self.width > PLAN_WIDTH
            || self.y + self.height > PLAN_HEIGHT
        {
            return Err(InvalidLayout::OutOfBounds {
                name: self.name.clone(),
            });
        }
        Ok(())
    }
}

/// A door or window annotation.
///
/// Openings hold only logical references (room ids, wall sides); their
/// drawn position is derived from room geometry at render time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Opening {
    Door { from: Uuid, to: Uuid },
    Window { room: Uuid, wall: WallSide, size: f32 },
}

/// The complete floor plan produced for one design request.
///
/// Immutable once constructed: a new input produces a brand-new layout,
/// never a mutation of the previous one. Room order is z-order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    rooms: Vec<Room>,
    openings: Vec<Opening>,
    source: SourceKind,
    created_at: u64,
}

impl Layout {
    /// Validates every room and assembles the layout.
    ///
    /// Rooms may overlap; only degenerate sizes and geometry outside the
    /// plan bounds are rejected.
    pub fn new(
        rooms: Vec<Room>,
        openings: Vec<Opening>,
        source: SourceKind,
    ) -> Result<Self, InvalidLayout> {
        for room in &rooms {
            room.validate()?;
        }
        Ok(Self {
            rooms,
            openings,
            source,
            created_at: time::timestamp_secs(),
        })
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn openings(&self) -> &[Opening] {
        &self.openings
    }

    pub fn source(&self) -> SourceKind {
        self.source
    }

    pub fn created_at(&self) -> u64 {
        self.created_at
    }

    pub fn room(&self, id: Uuid) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_size() {
        let rooms = vec![Room::new("X", 0.0, 0.0, -1.0, 2.0)];
        let err = Layout::new(rooms, Vec::new(), SourceKind::Code).unwrap_err();
        assert!(matches!(err, InvalidLayout::NonPositiveSize { .. }));
    }

    #[test]
    fn rejects_out_of_bounds_room() {
        let rooms = vec![Room::new("Garage", 550.0, 0.0, 100.0, 50.0)];
        let err = Layout::new(rooms, Vec::new(), SourceKind::Code).unwrap_err();
        assert_eq!(
            err,
            InvalidLayout::OutOfBounds {
                name: "Garage".into()
            }
        );
    }

    #[test]
    fn overlapping_rooms_are_allowed() {
        let rooms = vec![
            Room::new("Living Room", 0.0, 0.0, 100.0, 100.0),
            Room::new("Kitchen", 50.0, 50.0, 100.0, 100.0),
        ];
        let layout = Layout::new(rooms, Vec::new(), SourceKind::Text).unwrap();
        assert_eq!(layout.rooms().len(), 2);
    }

    #[test]
    fn category_inference_from_name() {
        assert_eq!(RoomCategory::infer("Bedroom 2"), RoomCategory::Bedroom);
        assert_eq!(RoomCategory::infer("Master Bath"), RoomCategory::Bathroom);
        assert_eq!(RoomCategory::infer("Living Room"), RoomCategory::Living);
        assert_eq!(RoomCategory::infer("Dining Area"), RoomCategory::Dining);
        assert_eq!(
            RoomCategory::infer("Attic"),
            RoomCategory::Other("attic".into())
        );
    }

    #[test]
    fn unknown_category_room_is_retained() {
        let rooms = vec![Room::new("Attic", 0.0, 0.0, 80.0, 80.0)];
        let layout = Layout::new(rooms, Vec::new(), SourceKind::Text).unwrap();
        assert_eq!(layout.rooms()[0].category, RoomCategory::Other("attic".into()));
    }
}
