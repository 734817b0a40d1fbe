use crate::constants::POINTER_SENTINEL;
use glam::Vec2;

/// Pointer position in canvas-local pixels plus a once-per-frame velocity.
///
/// `vel` is computed by [`PointerTracker::tick`] from the position stored on
/// the previous frame, so it always lags the latest move event by one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerTracker {
    pub pos: Vec2,
    pub prev: Vec2,
    pub vel: Vec2,
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self {
            pos: Vec2::splat(POINTER_SENTINEL),
            prev: Vec2::ZERO,
            vel: Vec2::ZERO,
        }
    }
}

impl PointerTracker {
    /// Store a viewport-space position relative to the canvas's on-screen origin.
    #[inline]
    pub fn set_from_viewport(&mut self, client: Vec2, canvas_origin: Vec2) {
        self.pos = client - canvas_origin;
    }

    #[inline]
    pub fn tick(&mut self) {
        self.vel = self.pos - self.prev;
        self.prev = self.pos;
    }
}
