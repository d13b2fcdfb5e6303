use crate::model::{Layout, RoomCategory};
use crate::style::{self, RoomStyle};

/// One legend row: a room name plus the swatch colors of its category.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub name: String,
    pub style: RoomStyle,
}

/// One of the four fixed legend buckets.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendGroup {
    pub title: &'static str,
    pub entries: Vec<LegendEntry>,
}

/// Groups a layout's rooms into the fixed side-panel buckets: bedrooms,
/// kitchen & dining, bathrooms, and living/garden. Categories outside
/// these buckets are simply omitted.
pub fn summarize(layout: &Layout) -> [LegendGroup; 4] {
    let bucket = |title, matches: fn(&RoomCategory) -> bool| LegendGroup {
        title,
        entries: layout
            .rooms()
            .iter()
            .filter(|room| matches(&room.category))
            .map(|room| LegendEntry {
                name: room.name.clone(),
                style: style::room_style(&room.category),
            })
            .collect(),
    };

    [
        bucket("Rooms", |c| matches!(c, RoomCategory::Bedroom)),
        bucket("Kitchen & Dining", |c| {
            matches!(c, RoomCategory::Kitchen | RoomCategory::Dining)
        }),
        bucket("Bathrooms", |c| matches!(c, RoomCategory::Bathroom)),
        bucket("Others", |c| {
            matches!(c, RoomCategory::Living | RoomCategory::Garden)
        }),
    ]
}
