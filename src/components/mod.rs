pub mod app;
pub mod cutter_controls;
pub mod cutter_view;
pub mod preview_panel;

pub use app::App;
