use egui::Color32;

use crate::model::RoomCategory;

/// Fill and border color pair for one room category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomStyle {
    pub fill: Color32,
    pub border: Color32,
}

/// Neutral style used for categories outside the recognized set.
pub const DEFAULT_STYLE: RoomStyle = RoomStyle {
    fill: Color32::from_rgb(0xf3, 0xf4, 0xf6),
    border: Color32::from_rgb(0x9c, 0xa3, 0xaf),
};

/// Static category → color table.
pub fn room_style(category: &RoomCategory) -> RoomStyle {
    match category {
        RoomCategory::Bedroom => RoomStyle {
            fill: Color32::from_rgb(0xe0, 0xe7, 0xff),
            border: Color32::from_rgb(0x63, 0x66, 0xf1),
        },
        RoomCategory::Living => RoomStyle {
            fill: Color32::from_rgb(0xfe, 0xf3, 0xc7),
            border: Color32::from_rgb(0xf5, 0x9e, 0x0b),
        },
        RoomCategory::Kitchen => RoomStyle {
            fill: Color32::from_rgb(0xdc, 0xfc, 0xe7),
            border: Color32::from_rgb(0x10, 0xb9, 0x81),
        },
        RoomCategory::Bathroom => RoomStyle {
            fill: Color32::from_rgb(0xfc, 0xe7, 0xf3),
            border: Color32::from_rgb(0xec, 0x48, 0x99),
        },
        RoomCategory::Garden => RoomStyle {
            fill: Color32::from_rgb(0xd1, 0xfa, 0xe5),
            border: Color32::from_rgb(0x05, 0x96, 0x69),
        },
        RoomCategory::Dining => RoomStyle {
            fill: Color32::from_rgb(0xfe, 0xd7, 0xd7),
            border: Color32::from_rgb(0xef, 0x44, 0x44),
        },
        RoomCategory::Other(_) => DEFAULT_STYLE,
    }
}

// Shared drawing palette.
pub const BACKGROUND: Color32 = Color32::from_rgb(0xfa, 0xfa, 0xfa);
pub const GRID_LINE: Color32 = Color32::from_rgb(0xe5, 0xe7, 0xeb);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(0x37, 0x41, 0x51);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0x6b, 0x72, 0x80);
pub const DOOR_STROKE: Color32 = Color32::from_rgb(0x37, 0x41, 0x51);
pub const WINDOW_STROKE: Color32 = Color32::from_rgb(0x3b, 0x82, 0xf6);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_category_gets_default_style() {
        let style = room_style(&RoomCategory::Other("attic".into()));
        assert_eq!(style, DEFAULT_STYLE);
    }

    #[test]
    fn recognized_categories_have_distinct_fills() {
        let bedroom = room_style(&RoomCategory::Bedroom);
        let kitchen = room_style(&RoomCategory::Kitchen);
        assert_ne!(bedroom.fill, kitchen.fill);
    }
}
