//! File I/O for the asset pipeline: PNG output, icon-set generation and
//! asset inspection

pub mod error;
pub mod icon_set;
pub mod image;
pub mod inspect;

pub use self::image::{write_png, ImageInfo};
pub use error::{IoError, Result};
pub use icon_set::{generate_icon, generate_icon_set, standard_icon_set, Palette};
pub use inspect::{inspect_asset, inspect_assets, AssetReport, AssetStatus, InspectionProfile};

// Re-export from rap-core for convenience
pub use rap_core::{BackgroundMode, CheckmarkStyle, IconSpec, Rgb};
