//! The fixed set of icons the mobile app ships

use std::fs;
use std::path::{Path, PathBuf};

use rap_core::{render, IconSpec, Rgb};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{IoError, Result};
use crate::image::write_png;

/// App icon edge length in pixels
pub const ICON_SIZE: u32 = 1024;
/// Browser favicon edge length in pixels
pub const FAVICON_SIZE: u32 = 48;

/// Brand colors the icon set is drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub background: Rgb,
    pub accent: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgb::BACKGROUND,
            accent: Rgb::ACCENT,
        }
    }
}

/// Main icon, splash, adaptive-icon layers and favicon, in that order
pub fn standard_icon_set(palette: &Palette) -> Vec<IconSpec> {
    let Palette { background, accent } = *palette;

    vec![
        IconSpec::opaque("icon.png", ICON_SIZE, background, accent),
        IconSpec::transparent("splash-icon.png", ICON_SIZE, background, accent),
        IconSpec::transparent("android-icon-foreground.png", ICON_SIZE, background, accent),
        // Same color twice gives a solid fill
        IconSpec::opaque("android-icon-background.png", ICON_SIZE, background, background),
        IconSpec::transparent("android-icon-monochrome.png", ICON_SIZE, background, Rgb::WHITE),
        IconSpec::transparent("favicon.png", FAVICON_SIZE, background, accent),
    ]
}

/// Render one icon and write it to `dir/output_name`
pub fn generate_icon<P: AsRef<Path>>(spec: &IconSpec, dir: P) -> Result<PathBuf> {
    let image = render(spec)?;
    let path = dir.as_ref().join(&spec.output_name);
    write_png(&image, &path)?;

    info!("Generated {}", path.display());
    Ok(path)
}

/// Render every spec into `dir`, creating it if needed.
///
/// Specs render in parallel; returned paths follow the input order.
pub fn generate_icon_set<P: AsRef<Path>>(specs: &[IconSpec], dir: P) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir).map_err(|source| IoError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;

    specs
        .par_iter()
        .map(|spec| generate_icon(spec, dir))
        .collect()
}
