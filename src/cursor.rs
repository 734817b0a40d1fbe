use crate::constants::{CURSOR_LERP, CURSOR_TRAIL_LERP};
use glam::Vec2;

/// Two-stage cursor follower: a dot that tracks the pointer quickly and a
/// trail that lags behind it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CursorFollower {
    pub target: Vec2,
    pub cursor: Vec2,
    pub trail: Vec2,
}

impl CursorFollower {
    #[inline]
    pub fn set_target(&mut self, client: Vec2) {
        self.target = client;
    }

    /// Ease both followers toward the target by their per-frame fraction.
    #[inline]
    pub fn step(&mut self) {
        self.cursor += (self.target - self.cursor) * CURSOR_LERP;
        self.trail += (self.target - self.trail) * CURSOR_TRAIL_LERP;
    }
}

/// What sits under the pointer, as far as the cursor cares.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HoverTarget {
    pub interactive: bool,
    pub project: bool,
    pub drag: bool,
    pub mailto: bool,
}

impl HoverTarget {
    pub fn label(&self) -> &'static str {
        if self.project {
            "VIEW"
        } else if self.drag {
            "DRAG"
        } else if self.mailto {
            "SEND"
        } else {
            "VIEW"
        }
    }
}

#[inline]
pub fn translate3d(p: Vec2) -> String {
    format!("translate3d({}px, {}px, 0)", p.x, p.y)
}
