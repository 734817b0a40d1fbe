use super::config::{PhysicsParams, StrokeStyle};
use super::point::Point;
use super::pointer::PointerTracker;
use super::surface::{Rgb, Surface};
use crate::constants::ACTIVE_IDLE_EPSILON;
use smallvec::SmallVec;

pub type Points = SmallVec<[Point; 16]>;

/// A vertical strand of points pinned at both ends.
#[derive(Clone, Debug, PartialEq)]
pub struct GuitarString {
    pub x: f32,
    /// Excitation in 0..=1; drives stroke colour and width.
    pub active: f32,
    pub points: Points,
}

impl GuitarString {
    /// Build a string at rest spanning `0..=height` in `segments` equal steps.
    pub fn new(x: f32, height: f32, segments: usize) -> Self {
        let segments = segments.max(1);
        let step = height / segments as f32;
        let points = (0..=segments)
            .map(|i| Point::at_rest(x, step * i as f32))
            .collect();
        Self {
            x,
            active: 0.0,
            points,
        }
    }

    /// Step every interior point one frame and decay the excitation.
    ///
    /// A frame that plucks the string leaves `active` at exactly 1; otherwise
    /// it is multiplied by the decay factor. Returns whether the string is
    /// still visibly moving.
    pub fn update(&mut self, pointer: &PointerTracker, params: &PhysicsParams) -> bool {
        let mut moving = false;
        let mut excited = false;
        let last = self.points.len().saturating_sub(1);
        for point in self.points.iter_mut().take(last).skip(1) {
            let step = point.step(pointer, params);
            excited |= step.excited;
            moving |= step.moving;
        }
        if excited {
            self.active = 1.0;
        } else {
            self.active *= params.active_decay;
        }
        moving || self.active > ACTIVE_IDLE_EPSILON
    }

    /// Stroke a midpoint-smoothed curve through the points.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, style: &StrokeStyle) {
        let Some(first) = self.points.first() else {
            return;
        };
        surface.begin_path();
        surface.move_to(first.x as f64, first.y as f64);
        for (i, pair) in self.points.windows(2).enumerate() {
            let (p1, p2) = (pair[0], pair[1]);
            let mid_x = (p1.x + p2.x) * 0.5;
            let mid_y = (p1.y + p2.y) * 0.5;
            if i == 0 {
                surface.line_to(mid_x as f64, mid_y as f64);
            } else {
                surface.quadratic_curve_to(p1.x as f64, p1.y as f64, mid_x as f64, mid_y as f64);
            }
        }
        if let Some(last) = self.points.last() {
            surface.line_to(last.x as f64, last.y as f64);
        }
        surface.set_stroke_color(stroke_color(style, self.active));
        surface.set_line_width(stroke_width(style, self.active) as f64);
        surface.stroke();
    }
}

#[inline]
pub fn stroke_color(style: &StrokeStyle, active: f32) -> Rgb {
    Rgb::from_array(style.rest_color).lerp(Rgb::from_array(style.accent_color), active)
}

#[inline]
pub fn stroke_width(style: &StrokeStyle, active: f32) -> f32 {
    style.rest_width + (style.accent_width - style.rest_width) * active
}
