use tiny_skia::{Path, PathBuilder};

use crate::geometry::{HandleArc, Point, RoundedRect};

/// Cubic control-point distance for a quarter circle of radius 1
const KAPPA: f32 = 0.552_284_8;

/// Closed outline of a rounded rectangle, clockwise from the top edge
pub(super) fn rounded_rect(rect: &RoundedRect) -> Option<Path> {
    let r = rect.clamped_radius();
    let k = r * KAPPA;
    let (left, top, right, bottom) = (rect.x, rect.y, rect.right(), rect.bottom());

    let mut pb = PathBuilder::new();
    pb.move_to(left + r, top);
    pb.line_to(right - r, top);
    pb.cubic_to(right - r + k, top, right, top + r - k, right, top + r);
    pb.line_to(right, bottom - r);
    pb.cubic_to(right, bottom - r + k, right - r + k, bottom, right - r, bottom);
    pb.line_to(left + r, bottom);
    pb.cubic_to(left + r - k, bottom, left, bottom - r + k, left, bottom - r);
    pb.line_to(left, top + r);
    pb.cubic_to(left, top + r - k, left + r - k, top, left + r, top);
    pb.close();
    pb.finish()
}

/// Open path over the top of the handle circle, left to right
pub(super) fn handle_arc(handle: &HandleArc) -> Option<Path> {
    let r = handle.path_radius();
    if r <= 0.0 {
        return None;
    }
    let k = r * KAPPA;
    let Point { x: cx, y: cy } = handle.center;

    let mut pb = PathBuilder::new();
    pb.move_to(cx - r, cy);
    pb.cubic_to(cx - r, cy - k, cx - k, cy - r, cx, cy - r);
    pb.cubic_to(cx + k, cy - r, cx + r, cy - k, cx + r, cy);
    pb.finish()
}

/// Open path through each point in order
pub(super) fn polyline(points: &[Point]) -> Option<Path> {
    let (first, rest) = points.split_first()?;

    let mut pb = PathBuilder::new();
    pb.move_to(first.x, first.y);
    for p in rest {
        pb.line_to(p.x, p.y);
    }
    pb.finish()
}
