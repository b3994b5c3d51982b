//! Presence and size checks for expected branding assets

use std::path::Path;

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::Result;
use crate::image::ImageInfo;

/// What was found for one expected file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum AssetStatus {
    Missing,
    Present {
        width: u32,
        height: u32,
        format: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssetReport {
    pub name: String,
    #[serde(flatten)]
    pub status: AssetStatus,
}

impl AssetReport {
    pub fn is_missing(&self) -> bool {
        self.status == AssetStatus::Missing
    }

    /// One console line, e.g. `icon.png: 1024x1024 (Format: PNG)`
    pub fn line(&self, with_format: bool) -> String {
        match &self.status {
            AssetStatus::Missing => format!("{}: MISSING", self.name),
            AssetStatus::Present {
                width,
                height,
                format,
            } if with_format => {
                format!("{}: {}x{} (Format: {})", self.name, width, height, format)
            }
            AssetStatus::Present { width, height, .. } => {
                format!("{}: {}x{}", self.name, width, height)
            }
        }
    }
}

/// Fixed lists of files the mobile app expects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InspectionProfile {
    /// App icons and adaptive-icon layers
    Standard,
    /// Brand marks, reported with their format
    Branded,
}

const STANDARD_ASSETS: &[&str] = &[
    "orderker-icon.png",
    "orderker-logo-full.png",
    "android-icon-foreground.png",
    "android-icon-background.png",
    "splash-icon.png",
    "icon.png",
];

const BRANDED_ASSETS: &[&str] = &[
    "orderker-icon.png",
    "orderker-logo-full.png",
    "orderker-logo-banner.jpg",
];

impl InspectionProfile {
    pub fn file_names(&self) -> &'static [&'static str] {
        match self {
            InspectionProfile::Standard => STANDARD_ASSETS,
            InspectionProfile::Branded => BRANDED_ASSETS,
        }
    }

    pub fn shows_format(&self) -> bool {
        matches!(self, InspectionProfile::Branded)
    }

    /// Inspect every file of this profile in `dir`
    pub fn inspect<P: AsRef<Path>>(&self, dir: P) -> Result<Vec<AssetReport>> {
        inspect_assets(dir, self.file_names())
    }
}

/// Report on `dir/name`; absence is a status, not an error
pub fn inspect_asset<P: AsRef<Path>>(dir: P, name: &str) -> Result<AssetReport> {
    let path = dir.as_ref().join(name);

    if !path.exists() {
        warn!("{} is missing", path.display());
        return Ok(AssetReport {
            name: name.to_string(),
            status: AssetStatus::Missing,
        });
    }

    let info = ImageInfo::open(&path)?;
    debug!(width = info.width(), height = info.height(), "inspected {}", path.display());

    Ok(AssetReport {
        name: name.to_string(),
        status: AssetStatus::Present {
            width: info.width(),
            height: info.height(),
            format: info.format_name(),
        },
    })
}

/// One report per name, in the given order
pub fn inspect_assets<P: AsRef<Path>, S: AsRef<str>>(
    dir: P,
    names: &[S],
) -> Result<Vec<AssetReport>> {
    names
        .iter()
        .map(|name| inspect_asset(dir.as_ref(), name.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IoError;
    use crate::image::write_png;
    use image::{ImageFormat, Rgb, RgbImage, RgbaImage};

    fn png(dir: &Path, name: &str, width: u32, height: u32) {
        write_png(&RgbaImage::new(width, height), dir.join(name)).unwrap();
    }

    #[test]
    fn test_missing_reported_for_exactly_absent_file() {
        let dir = tempfile::tempdir().unwrap();
        png(dir.path(), "orderker-icon.png", 512, 512);
        RgbImage::from_pixel(1200, 400, Rgb([9, 9, 9]))
            .save_with_format(dir.path().join("orderker-logo-banner.jpg"), ImageFormat::Jpeg)
            .unwrap();

        let reports = InspectionProfile::Branded.inspect(dir.path()).unwrap();
        let lines: Vec<String> = reports.iter().map(|r| r.line(true)).collect();

        assert_eq!(
            lines,
            vec![
                "orderker-icon.png: 512x512 (Format: PNG)",
                "orderker-logo-full.png: MISSING",
                "orderker-logo-banner.jpg: 1200x400 (Format: JPEG)",
            ]
        );
        assert_eq!(reports.iter().filter(|r| r.is_missing()).count(), 1);
    }

    #[test]
    fn test_standard_profile_lines() {
        let dir = tempfile::tempdir().unwrap();
        png(dir.path(), "icon.png", 64, 64);
        png(dir.path(), "splash-icon.png", 32, 16);

        let reports = InspectionProfile::Standard.inspect(dir.path()).unwrap();
        let lines: Vec<String> = reports.iter().map(|r| r.line(false)).collect();

        assert_eq!(
            lines,
            vec![
                "orderker-icon.png: MISSING",
                "orderker-logo-full.png: MISSING",
                "android-icon-foreground.png: MISSING",
                "android-icon-background.png: MISSING",
                "splash-icon.png: 32x16",
                "icon.png: 64x64",
            ]
        );
    }

    #[test]
    fn test_profile_flags() {
        assert!(InspectionProfile::Branded.shows_format());
        assert!(!InspectionProfile::Standard.shows_format());
        assert_eq!(InspectionProfile::Standard.file_names().len(), 6);
        assert_eq!(InspectionProfile::Branded.file_names().len(), 3);
    }

    #[test]
    fn test_missing_directory_reports_all_missing() {
        let dir = tempfile::tempdir().unwrap();
        let reports = inspect_assets(dir.path().join("absent"), &["a.png", "b.png"]).unwrap();
        assert!(reports.iter().all(|r| r.is_missing()));
    }

    #[test]
    fn test_unreadable_asset_is_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("icon.png"), b"garbage").unwrap();

        let result = inspect_asset(dir.path(), "icon.png");
        assert!(matches!(result, Err(IoError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_report_serializes_flat() {
        let report = AssetReport {
            name: "icon.png".to_string(),
            status: AssetStatus::Present {
                width: 48,
                height: 48,
                format: "PNG".to_string(),
            },
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "icon.png",
                "status": "present",
                "width": 48,
                "height": 48,
                "format": "PNG"
            })
        );

        let missing = AssetReport {
            name: "favicon.png".to_string(),
            status: AssetStatus::Missing,
        };
        assert_eq!(
            serde_json::to_value(&missing).unwrap(),
            serde_json::json!({ "name": "favicon.png", "status": "missing" })
        );
    }
}
