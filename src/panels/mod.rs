mod input_panel;
mod plan_panel;

pub use input_panel::input_panel;
pub use plan_panel::plan_panel;
