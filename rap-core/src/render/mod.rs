//! Rasterization of the shopping-bag icon

mod path;

use image::RgbaImage;
use tiny_skia::{BlendMode, Color, FillRule, LineCap, LineJoin, Paint, Pixmap, Stroke, Transform};
use tracing::debug;

use crate::color::Rgb;
use crate::error::{RapError, Result};
use crate::geometry::IconLayout;
use crate::icon::{CheckmarkStyle, IconSpec};

/// Render an icon to an RGBA raster of `canvas_size` x `canvas_size`.
///
/// Output is deterministic: the same spec always yields the same pixels.
pub fn render(spec: &IconSpec) -> Result<RgbaImage> {
    spec.validate()?;

    let size = spec.canvas_size;
    let layout = IconLayout::new(size);
    debug!(
        size,
        mode = ?spec.background_mode,
        foreground = %spec.foreground_color,
        "rendering {}",
        spec.output_name
    );

    let mut pixmap = Pixmap::new(size, size)
        .ok_or_else(|| RapError::Render(format!("failed to allocate pixmap {size}x{size}")))?;

    if !spec.is_transparent() {
        pixmap.fill(to_skia(spec.background_color));
    }

    let foreground = solid_paint(spec.foreground_color);
    let stroke = Stroke {
        width: layout.stroke_width,
        line_cap: LineCap::Butt,
        line_join: LineJoin::Round,
        ..Stroke::default()
    };

    // Handle first so the body covers its ends
    if let Some(handle) = path::handle_arc(&layout.handle) {
        pixmap.stroke_path(&handle, &foreground, &stroke, Transform::identity(), None);
    }

    if let Some(body) = path::rounded_rect(&layout.body) {
        pixmap.fill_path(&body, &foreground, FillRule::Winding, Transform::identity(), None);
    }

    if let Some(check) = path::polyline(&layout.checkmark) {
        let paint = checkmark_paint(spec);
        pixmap.stroke_path(&check, &paint, &stroke, Transform::identity(), None);
    }

    to_rgba_image(&pixmap)
}

/// Paint for the checkmark stroke
fn checkmark_paint(spec: &IconSpec) -> Paint<'static> {
    if !spec.is_transparent() {
        return solid_paint(spec.background_color);
    }

    let mut paint = solid_paint(Rgb::BACKGROUND);
    if spec.checkmark == CheckmarkStyle::Cutout {
        paint.blend_mode = BlendMode::Clear;
    }
    paint
}

fn solid_paint(color: Rgb) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(to_skia(color));
    paint.anti_alias = true;
    paint
}

fn to_skia(color: Rgb) -> Color {
    Color::from_rgba8(color.r, color.g, color.b, 255)
}

/// Pixmaps store premultiplied alpha; images do not
fn to_rgba_image(pixmap: &Pixmap) -> Result<RgbaImage> {
    let mut data = Vec::with_capacity(pixmap.data().len());
    for pixel in pixmap.pixels() {
        let c = pixel.demultiply();
        data.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }

    RgbaImage::from_raw(pixmap.width(), pixmap.height(), data)
        .ok_or_else(|| RapError::Render("pixel buffer size mismatch".to_string()))
}
