#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod export;
pub mod generator;
pub mod legend;
pub mod model;
pub mod panels;
pub mod render;
pub mod style;
pub mod util;
pub mod view;

pub use app::PlanApp;
pub use generator::{DesignService, GenerationError, GenerationQueue, LayoutGenerator};
pub use model::{InvalidLayout, Layout, Opening, Room, RoomCategory, SourceKind, WallSide};
pub use render::{DrawCmd, Renderer, Scene};
pub use view::{Session, ViewState};
