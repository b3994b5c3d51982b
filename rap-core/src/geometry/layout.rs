/// Point in canvas pixels, origin top-left, y down
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle with circular corners
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundedRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub radius: f32,
}

impl RoundedRect {
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Corner radius limited to half the shorter side
    pub fn clamped_radius(&self) -> f32 {
        self.radius.min(self.width / 2.0).min(self.height / 2.0).max(0.0)
    }
}

/// Upper half of a circle, stroked inside its bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleArc {
    pub center: Point,
    /// Radius of the bounding box (outer edge of the stroke)
    pub radius: f32,
    pub stroke_width: f32,
}

impl HandleArc {
    /// Radius of the stroke centerline
    pub fn path_radius(&self) -> f32 {
        (self.radius - self.stroke_width / 2.0).max(0.0)
    }
}

/// Shopping-bag icon layout for a square canvas of `size` pixels
#[derive(Debug, Clone, PartialEq)]
pub struct IconLayout {
    pub body: RoundedRect,
    pub handle: HandleArc,
    /// Down-stroke then up-stroke
    pub checkmark: [Point; 3],
    pub stroke_width: f32,
}

// Fractions of the canvas size
const BODY_WIDTH: f32 = 0.55;
const BODY_HEIGHT: f32 = 0.5;
const BODY_OFFSET_Y: f32 = 0.08;
const CORNER_RADIUS: f32 = 0.1;
const STROKE_WIDTH: f64 = 0.06;

// Fractions of the body
const HANDLE_DIAMETER: f32 = 0.5;
const CHECK_WIDTH: f32 = 0.4;
const CHECK_BASELINE: f32 = 0.55;

impl IconLayout {
    pub fn new(size: u32) -> Self {
        let s = size as f32;

        let width = s * BODY_WIDTH;
        let height = s * BODY_HEIGHT;
        let body = RoundedRect {
            x: (s - width) / 2.0,
            y: (s - height) / 2.0 + s * BODY_OFFSET_Y,
            width,
            height,
            radius: s * CORNER_RADIUS,
        };

        // Whole pixels, truncated in f64 so 200 * 0.06 lands on 12
        let stroke_width = (size as f64 * STROKE_WIDTH).floor().max(1.0) as f32;

        let cx = s / 2.0;
        let handle = HandleArc {
            center: Point::new(cx, body.y),
            radius: width * HANDLE_DIAMETER / 2.0,
            stroke_width,
        };

        let w = width * CHECK_WIDTH;
        let ym = body.y + height * CHECK_BASELINE;
        let checkmark = [
            Point::new(cx - w * 0.5, ym),
            Point::new(cx - w * 0.1, ym + w * 0.4),
            Point::new(cx + w * 0.6, ym - w * 0.6),
        ];

        Self {
            body,
            handle,
            checkmark,
            stroke_width,
        }
    }
}
