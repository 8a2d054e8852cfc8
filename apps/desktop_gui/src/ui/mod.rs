//! UI layer for the color changer: app shell, widget panels, and swatch
//! resolution for painting.

pub mod app;
pub mod panels;
pub mod swatch;

pub use app::ColorChangerApp;
