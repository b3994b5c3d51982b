pub mod color;
pub mod error;
pub mod geometry;
pub mod icon;
pub mod render;

pub use color::Rgb;
pub use error::{RapError, Result, SpecError};
pub use geometry::IconLayout;
pub use icon::{BackgroundMode, CheckmarkStyle, IconSpec};
pub use render::render;
