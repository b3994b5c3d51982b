use std::path::PathBuf;

use rap_core::{CheckmarkStyle, IconSpec};
use rap_io::Palette;

use crate::cli::{GenerateArgs, RenderArgs};

/// Settings resolved from flags and environment for one run
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub asset_dir: PathBuf,
    pub palette: Palette,
    pub checkmark: CheckmarkStyle,
}

impl Config {
    pub fn for_generate(asset_dir: PathBuf, args: &GenerateArgs) -> Self {
        Self {
            asset_dir,
            palette: Palette {
                background: args.palette.background,
                accent: args.palette.accent,
            },
            checkmark: checkmark_style(args.cutout),
        }
    }

    pub fn for_render(asset_dir: PathBuf, args: &RenderArgs) -> Self {
        Self {
            asset_dir,
            palette: Palette {
                background: args.palette.background,
                accent: args.palette.accent,
            },
            checkmark: checkmark_style(args.cutout),
        }
    }

    /// Standard icon set with this run's palette and checkmark style
    pub fn icon_set(&self) -> Vec<IconSpec> {
        rap_io::standard_icon_set(&self.palette)
            .into_iter()
            .map(|spec| spec.with_checkmark(self.checkmark))
            .collect()
    }

    /// Single icon drawn in the accent color
    pub fn single_icon(&self, output: &str, size: u32, transparent: bool) -> IconSpec {
        let Palette { background, accent } = self.palette;
        let spec = if transparent {
            IconSpec::transparent(output, size, background, accent)
        } else {
            IconSpec::opaque(output, size, background, accent)
        };
        spec.with_checkmark(self.checkmark)
    }
}

fn checkmark_style(cutout: bool) -> CheckmarkStyle {
    if cutout {
        CheckmarkStyle::Cutout
    } else {
        CheckmarkStyle::Painted
    }
}
