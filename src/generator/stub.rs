use std::time::Duration;

use crate::generator::{GenerationError, LayoutGenerator};
use crate::model::{Layout, Opening, Room, SourceKind, WallSide};

/// Simulated "AI processing" delay matching the original service's feel.
pub const DEFAULT_DELAY: Duration = Duration::from_secs(3);

/// Placeholder inference backend.
///
/// Stands in for the external natural-language / sketch inference service:
/// it waits a fixed delay and then returns a deterministic eight-room
/// layout, regardless of what the description says. Real backends replace
/// this behind the same [`LayoutGenerator`] contract.
pub struct StubInference {
    delay: Duration,
}

impl StubInference {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// No-delay variant for tests and headless use.
    pub fn immediate() -> Self {
        Self::new(Duration::ZERO)
    }
}

impl Default for StubInference {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}

impl LayoutGenerator for StubInference {
    fn generate(&self, payload: &str, source: SourceKind) -> Result<Layout, GenerationError> {
        log::info!(
            "stub inference handling {} chars of {:?} input",
            payload.len(),
            source
        );

        // Blocking here is fine: the queue runs generators off the UI
        // thread. The browser build cannot block, so it skips the delay.
        #[cfg(not(target_arch = "wasm32"))]
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }

        let rooms = vec![
            Room::new("Living Room", 50.0, 50.0, 200.0, 150.0),
            Room::new("Kitchen", 270.0, 50.0, 120.0, 100.0),
            Room::new("Bedroom 1", 50.0, 220.0, 140.0, 120.0),
            Room::new("Bedroom 2", 210.0, 220.0, 140.0, 120.0),
            Room::new("Bedroom 3", 370.0, 220.0, 140.0, 120.0),
            Room::new("Bathroom 1", 270.0, 170.0, 80.0, 80.0),
            Room::new("Bathroom 2", 370.0, 170.0, 80.0, 80.0),
            Room::new("Garden", 50.0, 360.0, 460.0, 80.0),
        ];

        let living = rooms[0].id;
        let kitchen = rooms[1].id;
        let bedroom_1 = rooms[2].id;
        let bedroom_2 = rooms[3].id;
        let openings = vec![
            Opening::Door {
                from: living,
                to: kitchen,
            },
            Opening::Door {
                from: living,
                to: bedroom_1,
            },
            Opening::Door {
                from: kitchen,
                to: bedroom_2,
            },
            Opening::Window {
                room: living,
                wall: WallSide::North,
                size: 40.0,
            },
            Opening::Window {
                room: bedroom_1,
                wall: WallSide::South,
                size: 30.0,
            },
        ];

        Ok(Layout::new(rooms, openings, source)?)
    }
}
