use super::config::PhysicsParams;
use super::pointer::PointerTracker;
use crate::constants::{MOTION_DISPLACEMENT_EPSILON, MOTION_VELOCITY_EPSILON};

/// One sample along a string. Only `x` and `vx` ever change.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f32,
    pub base_x: f32,
    pub y: f32,
    pub vx: f32,
}

/// Outcome of a single integration step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PointStep {
    /// The pointer plucked this point this frame.
    pub excited: bool,
    pub moving: bool,
}

impl Point {
    #[inline]
    pub fn at_rest(x: f32, y: f32) -> Self {
        Self {
            x,
            base_x: x,
            y,
            vx: 0.0,
        }
    }

    #[inline]
    pub fn displacement(&self) -> f32 {
        self.x - self.base_x
    }

    /// Advance one frame: spring toward `base_x`, damp, move, then couple to
    /// the pointer. Motion is judged on the displacement from before the move.
    pub fn step(&mut self, pointer: &PointerTracker, params: &PhysicsParams) -> PointStep {
        let dx = self.displacement();
        let spring_force = -params.spring_k * dx;
        self.vx += spring_force;
        self.vx *= params.damping;
        self.x += self.vx;

        let excited = self.couple(pointer, params);
        let moving =
            self.vx.abs() > MOTION_VELOCITY_EPSILON || dx.abs() > MOTION_DISPLACEMENT_EPSILON;
        PointStep { excited, moving }
    }

    // Vertical distance only gates; falloff and impulse are horizontal.
    fn couple(&mut self, pointer: &PointerTracker, params: &PhysicsParams) -> bool {
        let r = params.interaction_radius;
        let dist_x = pointer.pos.x - self.x;
        let dist_y = pointer.pos.y - self.y;
        if dist_y.abs() >= r || dist_x.abs() >= r {
            return false;
        }
        if pointer.vel.x.abs() <= params.velocity_threshold {
            return false;
        }
        let influence = ((r - dist_x.abs()) / r).max(0.0);
        self.vx += pointer.vel.x * influence * params.impulse_scale;
        true
    }
}
