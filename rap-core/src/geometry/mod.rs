//! Icon geometry in canvas pixel coordinates

mod layout;

pub use layout::{HandleArc, IconLayout, Point, RoundedRect};
