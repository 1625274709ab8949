//! Domain types and models

pub mod unit;
pub mod window;

pub use unit::TimeUnit;
pub use window::RelativeWindow;
