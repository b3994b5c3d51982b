//! Parameters for a single icon rendering

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::error::SpecError;

/// How the canvas is prepared before the bag is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundMode {
    /// Filled with the background color at full alpha
    Opaque,
    /// Every pixel starts at alpha 0
    Transparent,
}

/// How the checkmark is drawn on a transparent canvas.
///
/// On an opaque canvas the checkmark is always stroked in the background
/// color, so both styles look the same there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckmarkStyle {
    /// Stroked in [`Rgb::BACKGROUND`], so it reads as a hole on dark backdrops
    /// but is opaque pixels.
    #[default]
    Painted,
    /// Stroke area erased to alpha 0.
    Cutout,
}

/// Everything needed to render and name one icon
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconSpec {
    pub canvas_size: u32,
    pub background_mode: BackgroundMode,
    pub background_color: Rgb,
    pub foreground_color: Rgb,
    pub output_name: String,
    #[serde(default)]
    pub checkmark: CheckmarkStyle,
}

impl IconSpec {
    /// Icon on a solid background
    pub fn opaque(
        output_name: impl Into<String>,
        canvas_size: u32,
        background_color: Rgb,
        foreground_color: Rgb,
    ) -> Self {
        Self {
            canvas_size,
            background_mode: BackgroundMode::Opaque,
            background_color,
            foreground_color,
            output_name: output_name.into(),
            checkmark: CheckmarkStyle::default(),
        }
    }

    /// Icon on a fully transparent background
    pub fn transparent(
        output_name: impl Into<String>,
        canvas_size: u32,
        background_color: Rgb,
        foreground_color: Rgb,
    ) -> Self {
        Self {
            background_mode: BackgroundMode::Transparent,
            ..Self::opaque(output_name, canvas_size, background_color, foreground_color)
        }
    }

    /// Set the checkmark style
    pub fn with_checkmark(mut self, style: CheckmarkStyle) -> Self {
        self.checkmark = style;
        self
    }

    pub fn is_transparent(&self) -> bool {
        self.background_mode == BackgroundMode::Transparent
    }

    /// Check the spec can be rendered and written
    pub fn validate(&self) -> Result<(), SpecError> {
        if self.canvas_size == 0 {
            return Err(SpecError::ZeroCanvas);
        }
        if self.output_name.trim().is_empty() {
            return Err(SpecError::EmptyOutputName);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opaque_constructor() {
        let spec = IconSpec::opaque("icon.png", 1024, Rgb::BACKGROUND, Rgb::ACCENT);
        assert_eq!(spec.canvas_size, 1024);
        assert_eq!(spec.background_mode, BackgroundMode::Opaque);
        assert_eq!(spec.output_name, "icon.png");
        assert_eq!(spec.checkmark, CheckmarkStyle::Painted);
        assert!(!spec.is_transparent());
    }

    #[test]
    fn test_transparent_constructor() {
        let spec = IconSpec::transparent("favicon.png", 48, Rgb::BACKGROUND, Rgb::ACCENT);
        assert!(spec.is_transparent());
        assert_eq!(spec.foreground_color, Rgb::ACCENT);
    }

    #[test]
    fn test_with_checkmark() {
        let spec = IconSpec::transparent("a.png", 64, Rgb::BACKGROUND, Rgb::ACCENT)
            .with_checkmark(CheckmarkStyle::Cutout);
        assert_eq!(spec.checkmark, CheckmarkStyle::Cutout);
    }

    #[test]
    fn test_validate_ok() {
        let spec = IconSpec::opaque("icon.png", 1, Rgb::BACKGROUND, Rgb::ACCENT);
        assert_eq!(spec.validate(), Ok(()));
    }

    #[test]
    fn test_validate_zero_canvas() {
        let spec = IconSpec::opaque("icon.png", 0, Rgb::BACKGROUND, Rgb::ACCENT);
        assert_eq!(spec.validate(), Err(SpecError::ZeroCanvas));
    }

    #[test]
    fn test_validate_empty_name() {
        let spec = IconSpec::opaque("  ", 32, Rgb::BACKGROUND, Rgb::ACCENT);
        assert_eq!(spec.validate(), Err(SpecError::EmptyOutputName));
    }

    #[test]
    fn test_deserialize_defaults_checkmark() {
        let json = r##"{
            "canvas_size": 48,
            "background_mode": "transparent",
            "background_color": "#121212",
            "foreground_color": "#1DB954",
            "output_name": "favicon.png"
        }"##;
        let spec: IconSpec = serde_json::from_str(json).unwrap();
        assert_eq!(
            spec,
            IconSpec::transparent("favicon.png", 48, Rgb::BACKGROUND, Rgb::ACCENT)
        );
    }
}
