use serde::{Deserialize, Serialize};

use crate::model::Layout;

pub const MIN_ZOOM: f32 = 0.5;
pub const MAX_ZOOM: f32 = 2.0;
pub const ZOOM_STEP: f32 = 0.2;

/// Zoom (and, fixed at the origin for now, pan) controlling how a layout
/// is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    pub zoom: f32,
}

impl Default for ViewState {
    fn default() -> Self {
        Self { zoom: 1.0 }
    }
}

impl ViewState {
    pub fn zoom_in(&mut self) {
        self.zoom = (self.zoom + ZOOM_STEP).min(MAX_ZOOM);
    }

    pub fn zoom_out(&mut self) {
        self.zoom = (self.zoom - ZOOM_STEP).max(MIN_ZOOM);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// The one active layout + view pair.
///
/// Owned by the app and passed explicitly to the renderer; the layout slot
/// is only ever replaced whole, never mutated mid-render.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Session {
    layout: Option<Layout>,
    view: ViewState,
}

impl Session {
    pub fn layout(&self) -> Option<&Layout> {
        self.layout.as_ref()
    }

    pub fn view(&self) -> ViewState {
        self.view
    }

    pub fn view_mut(&mut self) -> &mut ViewState {
        &mut self.view
    }

    /// Installs a freshly generated layout and resets the view to defaults.
    pub fn replace_layout(&mut self, layout: Layout) {
        self.layout = Some(layout);
        self.view.reset();
    }
}
