use std::path::Path;

use image::{ImageError, ImageFormat, ImageReader, RgbaImage};

use crate::error::{IoError, Result};

/// Header-level facts about an image file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageInfo {
    width: u32,
    height: u32,
    format: ImageFormat,
}

impl ImageInfo {
    /// Read dimensions and format from a file without decoding pixels.
    ///
    /// The format is guessed from content, not from the extension.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let read_err = |source: ImageError| match source {
            ImageError::Unsupported(_) => IoError::UnsupportedFormat(path.to_path_buf()),
            source => IoError::FileRead {
                path: path.to_path_buf(),
                source,
            },
        };

        // `open` presets the format from the extension; let content decide
        let reader = ImageReader::open(path)
            .and_then(|mut reader| {
                reader.clear_format();
                reader.with_guessed_format()
            })
            .map_err(|e| read_err(e.into()))?;

        let format = reader
            .format()
            .ok_or_else(|| IoError::UnsupportedFormat(path.to_path_buf()))?;
        let (width, height) = reader.into_dimensions().map_err(read_err)?;

        Ok(Self {
            width,
            height,
            format,
        })
    }

    /// Get image dimensions (width, height)
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn format(&self) -> ImageFormat {
        self.format
    }

    /// Conventional upper-case name, e.g. `PNG` or `JPEG`
    pub fn format_name(&self) -> String {
        format_name(self.format)
    }
}

fn format_name(format: ImageFormat) -> String {
    match format {
        ImageFormat::Png => "PNG".to_string(),
        ImageFormat::Jpeg => "JPEG".to_string(),
        ImageFormat::Gif => "GIF".to_string(),
        ImageFormat::WebP => "WEBP".to_string(),
        ImageFormat::Bmp => "BMP".to_string(),
        ImageFormat::Tiff => "TIFF".to_string(),
        ImageFormat::Ico => "ICO".to_string(),
        other => other
            .extensions_str()
            .first()
            .map(|ext| ext.to_uppercase())
            .unwrap_or_else(|| format!("{other:?}").to_uppercase()),
    }
}

/// Encode an RGBA raster as PNG at `path`
pub fn write_png<P: AsRef<Path>>(image: &RgbaImage, path: P) -> Result<()> {
    let path = path.as_ref();
    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|source| IoError::FileWrite {
            path: path.to_path_buf(),
            source,
        })
}
