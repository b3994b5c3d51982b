use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use rap_core::Rgb;

/// Default asset location, relative to the mobile project root
pub const DEFAULT_ASSET_DIR: &str = "assets/images";

#[derive(Parser, Debug)]
#[command(name = "rap", version, about = "Generate and check mobile app icon assets")]
pub struct Cli {
    /// Directory holding the app's image assets
    #[arg(long, global = true, env = "RAP_ASSET_DIR", default_value = DEFAULT_ASSET_DIR)]
    pub asset_dir: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write the full icon set (app icon, splash, adaptive layers, favicon)
    Generate(GenerateArgs),
    /// Write a single icon
    Render(RenderArgs),
    /// Report size and presence of expected assets
    Check(CheckArgs),
}

#[derive(Args, Debug)]
pub struct PaletteArgs {
    /// Background color as #RRGGBB
    #[arg(long, env = "RAP_BACKGROUND", default_value = "#121212")]
    pub background: Rgb,

    /// Accent color as #RRGGBB
    #[arg(long, env = "RAP_ACCENT", default_value = "#1DB954")]
    pub accent: Rgb,
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub palette: PaletteArgs,

    /// Erase the checkmark to transparency on transparent icons
    #[arg(long)]
    pub cutout: bool,
}

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Canvas edge length in pixels
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub size: u32,

    /// Output file name inside the asset directory
    #[arg(long)]
    pub output: String,

    /// Start from a transparent canvas instead of the background color
    #[arg(long)]
    pub transparent: bool,

    // Bag is drawn in the accent color
    #[command(flatten)]
    pub palette: PaletteArgs,

    /// Erase the checkmark to transparency (transparent canvas only)
    #[arg(long)]
    pub cutout: bool,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Check brand marks and print their formats
    #[arg(long)]
    pub branded: bool,

    /// Exit with failure when any expected file is missing
    #[arg(long)]
    pub strict: bool,

    /// Print reports as JSON
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_generate_defaults() {
        let cli = Cli::try_parse_from(["rap", "generate"]).unwrap();
        let Command::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.palette.background, Rgb::BACKGROUND);
        assert_eq!(args.palette.accent, Rgb::ACCENT);
        assert!(!args.cutout);
    }

    #[test]
    fn test_parse_generate_overrides() {
        let cli = Cli::try_parse_from([
            "rap",
            "generate",
            "--asset-dir",
            "out/icons",
            "--accent",
            "ff0000",
            "--cutout",
        ])
        .unwrap();
        assert_eq!(cli.asset_dir, PathBuf::from("out/icons"));
        let Command::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.palette.accent, Rgb::new(255, 0, 0));
        assert!(args.cutout);
    }

    #[test]
    fn test_parse_render() {
        let cli = Cli::try_parse_from([
            "rap",
            "render",
            "--size",
            "96",
            "--output",
            "badge.png",
            "--transparent",
        ])
        .unwrap();
        let Command::Render(args) = cli.command else {
            panic!("expected render");
        };
        assert_eq!(args.size, 96);
        assert_eq!(args.output, "badge.png");
        assert!(args.transparent);
        assert_eq!(args.palette.background, Rgb::BACKGROUND);
        assert_eq!(args.palette.accent, Rgb::ACCENT);
    }

    #[test]
    fn test_parse_render_accent() {
        let cli = Cli::try_parse_from([
            "rap",
            "render",
            "--size",
            "32",
            "--output",
            "dot.png",
            "--accent",
            "ff0000",
        ])
        .unwrap();
        let Command::Render(args) = cli.command else {
            panic!("expected render");
        };
        assert_eq!(args.palette.accent, Rgb::new(255, 0, 0));
        assert_eq!(args.palette.background, Rgb::BACKGROUND);
    }

    #[test]
    fn test_render_rejects_foreground_flag() {
        let result = Cli::try_parse_from([
            "rap",
            "render",
            "--size",
            "32",
            "--output",
            "dot.png",
            "--foreground",
            "ff0000",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_render_rejects_zero_size() {
        let result = Cli::try_parse_from(["rap", "render", "--size", "0", "--output", "x.png"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_bad_color() {
        let result = Cli::try_parse_from(["rap", "generate", "--background", "charcoal"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_check_flags() {
        let cli = Cli::try_parse_from(["rap", "check", "--branded", "--strict", "--json"]).unwrap();
        let Command::Check(args) = cli.command else {
            panic!("expected check");
        };
        assert!(args.branded && args.strict && args.json);
    }
}
