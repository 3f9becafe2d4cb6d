//! UI layer for desktop GUI: app shell, view models and theme colours.

pub mod app;
pub mod render;
pub mod theme;

pub use app::KataDesktopApp;
