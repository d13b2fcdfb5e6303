//! Opening placement derived from room geometry.
//!
//! Openings store only logical references (room ids, wall sides); the
//! stroke each one is drawn as gets computed here from the referenced
//! rooms' rectangles, in plan units.

use egui::{Color32, Pos2, pos2};

use crate::model::{Layout, Opening, Room, WallSide};
use crate::style;

/// Length of a door stroke in plan units, clamped to the edge overlap.
pub const DOOR_WIDTH: f32 = 20.0;

pub type Segment = (Pos2, Pos2);

/// Resolves every opening of the layout into a drawable segment. Openings
/// whose room references are missing are skipped with a warning.
pub fn segments(layout: &Layout) -> Vec<(Segment, Color32)> {
    let mut out = Vec::with_capacity(layout.openings().len());
    for opening in layout.openings() {
        match opening {
            Opening::Door { from, to } => match (layout.room(*from), layout.room(*to)) {
                (Some(a), Some(b)) => out.push((door_segment(a, b), style::DOOR_STROKE)),
                _ => log::warn!("door references a room that is not in the layout"),
            },
            Opening::Window { room, wall, size } => match layout.room(*room) {
                Some(room) => out.push((window_segment(room, *wall, *size), style::WINDOW_STROKE)),
                None => log::warn!("window references a room that is not in the layout"),
            },
        }
    }
    out
}

/// Door stroke between two rooms, anchored on their shared or facing edge.
///
/// If the rooms' x-intervals overlap the door runs horizontally at the
/// vertical mid-gap (on the shared edge when the rooms touch); symmetric
/// for overlapping y-intervals. Diagonal neighbors get a stroke at the
/// midpoint between their nearest corners.
pub fn door_segment(a: &Room, b: &Room) -> Segment {
    let ra = a.rect();
    let rb = b.rect();

    let x_lo = ra.min.x.max(rb.min.x);
    let x_hi = ra.max.x.min(rb.max.x);
    let y_lo = ra.min.y.max(rb.min.y);
    let y_hi = ra.max.y.min(rb.max.y);

    if x_hi > x_lo {
        // Vertically related rooms: horizontal stroke centered on the
        // x-overlap at the mid-gap between the facing edges.
        let cx = (x_lo + x_hi) / 2.0;
        let half = DOOR_WIDTH.min(x_hi - x_lo) / 2.0;
        let y = if y_hi > y_lo {
            (y_lo + y_hi) / 2.0
        } else if ra.max.y <= rb.min.y {
            (ra.max.y + rb.min.y) / 2.0
        } else {
            (rb.max.y + ra.min.y) / 2.0
        };
        (pos2(cx - half, y), pos2(cx + half, y))
    } else if y_hi > y_lo {
        let cy = (y_lo + y_hi) / 2.0;
        let half = DOOR_WIDTH.min(y_hi - y_lo) / 2.0;
        let x = if ra.max.x <= rb.min.x {
            (ra.max.x + rb.min.x) / 2.0
        } else {
            (rb.max.x + ra.min.x) / 2.0
        };
        (pos2(x, cy - half), pos2(x, cy + half))
    } else {
        // No overlap on either axis: midpoint between the nearest corners.
        let x = if ra.max.x <= rb.min.x {
            (ra.max.x + rb.min.x) / 2.0
        } else {
            (rb.max.x + ra.min.x) / 2.0
        };
        let y = if ra.max.y <= rb.min.y {
            (ra.max.y + rb.min.y) / 2.0
        } else {
            (rb.max.y + ra.min.y) / 2.0
        };
        let half = DOOR_WIDTH / 2.0;
        (pos2(x - half, y), pos2(x + half, y))
    }
}

/// Window stroke along the named wall, centered on it.
pub fn window_segment(room: &Room, wall: WallSide, size: f32) -> Segment {
    let rect = room.rect();
    match wall {
        WallSide::North | WallSide::South => {
            let y = if wall == WallSide::North {
                rect.min.y
            } else {
                rect.max.y
            };
            let half = size.min(room.width) / 2.0;
            let cx = rect.center().x;
            (pos2(cx - half, y), pos2(cx + half, y))
        }
        WallSide::East | WallSide::West => {
            let x = if wall == WallSide::East {
                rect.max.x
            } else {
                rect.min.x
            };
            let half = size.min(room.height) / 2.0;
            let cy = rect.center().y;
            (pos2(x, cy - half), pos2(x, cy + half))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn door_on_shared_vertical_edge() {
        // Rooms flush against each other at x = 100.
        let a = Room::new("Living Room", 0.0, 0.0, 100.0, 80.0);
        let b = Room::new("Kitchen", 100.0, 0.0, 80.0, 80.0);
        let (from, to) = door_segment(&a, &b);
        assert_eq!(from.x, 100.0);
        assert_eq!(to.x, 100.0);
        assert_eq!(from.y, 30.0);
        assert_eq!(to.y, 50.0);
    }

    #[test]
    fn door_between_separated_rooms_sits_in_the_gap() {
        // A 20-unit corridor between the rooms, as in the stub layout.
        let a = Room::new("Living Room", 50.0, 50.0, 200.0, 150.0);
        let b = Room::new("Kitchen", 270.0, 50.0, 120.0, 100.0);
        let (from, to) = door_segment(&a, &b);
        assert_eq!(from.x, 260.0);
        assert_eq!(to.x, 260.0);
        assert!(from.y >= 50.0 && to.y <= 150.0);
    }

    #[test]
    fn door_between_diagonal_rooms_uses_corner_midpoint() {
        let a = Room::new("A", 0.0, 0.0, 50.0, 50.0);
        let b = Room::new("B", 100.0, 100.0, 50.0, 50.0);
        let (from, to) = door_segment(&a, &b);
        let mid = pos2((from.x + to.x) / 2.0, (from.y + to.y) / 2.0);
        assert_eq!(mid, pos2(75.0, 75.0));
    }

    #[test]
    fn door_length_clamps_to_narrow_overlap() {
        let a = Room::new("A", 0.0, 0.0, 100.0, 50.0);
        let b = Room::new("B", 90.0, 60.0, 100.0, 50.0);
        let (from, to) = door_segment(&a, &b);
        // Only 10 units of x-overlap, so the stroke shrinks to fit.
        assert!((to.x - from.x - 10.0).abs() < 1e-4);
    }

    #[test]
    fn window_lies_on_the_named_wall() {
        let room = Room::new("Bedroom 1", 50.0, 220.0, 140.0, 120.0);
        let (from, to) = window_segment(&room, WallSide::South, 30.0);
        assert_eq!(from.y, 340.0);
        assert_eq!(to.y, 340.0);
        assert!((to.x - from.x - 30.0).abs() < 1e-4);

        let (from, to) = window_segment(&room, WallSide::East, 40.0);
        assert_eq!(from.x, 190.0);
        assert_eq!(to.x, 190.0);
    }
}
