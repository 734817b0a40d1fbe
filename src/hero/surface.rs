use std::fmt;

/// Stroke colour with unclamped floating-point channels in 0..=255.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub fn from_array(c: [f32; 3]) -> Self {
        Self::new(c[0], c[1], c[2])
    }

    #[inline]
    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        Rgb::new(
            self.r + (other.r - self.r) * t,
            self.g + (other.g - self.g) * t,
            self.b + (other.b - self.b) * t,
        )
    }
}

// CSS colour; channels are floored to integers.
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgb({},{},{})",
            self.r.floor() as i32,
            self.g.floor() as i32,
            self.b.floor() as i32
        )
    }
}

/// The subset of a 2-D canvas context the string field draws with.
///
/// Coordinates are logical (CSS) pixels; any device-pixel-ratio scaling is
/// applied by the implementor.
pub trait Surface {
    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64);
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn quadratic_curve_to(&mut self, cpx: f64, cpy: f64, x: f64, y: f64);
    fn set_stroke_color(&mut self, color: Rgb);
    fn set_line_width(&mut self, width: f64);
    fn stroke(&mut self);
}
