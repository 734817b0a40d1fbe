// Host-side tests for constants and their mathematical relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn physics_constants_are_within_reasonable_bounds() {
    // Damping and decay must shrink every frame
    assert!(DAMPING > 0.0 && DAMPING < 1.0);
    assert!(ACTIVE_DECAY > 0.0 && ACTIVE_DECAY < 1.0);

    // Spring pulls toward rest without overshooting the integrator
    assert!(SPRING_K > 0.0 && SPRING_K < 1.0);

    assert!(INTERACTION_RADIUS > 0.0);
    assert!(POINTER_VELOCITY_THRESHOLD > 0.0);
    assert!(IMPULSE_SCALE > 0.0);
}

#[test]
fn point_integrator_is_stable() {
    // (dx, v) -> (dx + v', v') with v' = d(v - k dx); stable iff both
    // eigenvalues sit inside the unit circle, i.e. det < 1 and |trace| < 1 + det.
    let trace = 1.0 - DAMPING * SPRING_K + DAMPING;
    let det = DAMPING;
    assert!(det < 1.0);
    assert!(trace.abs() < 1.0 + det);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn layout_constants_are_positive() {
    assert!(STRING_COUNT > 0);
    assert!(STRING_SEGMENTS >= 2);
    assert!(POINTER_SENTINEL < -INTERACTION_RADIUS);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn stroke_constants_have_logical_relationships() {
    assert!(ACCENT_LINE_WIDTH > REST_LINE_WIDTH);
    for c in REST_COLOR.iter().chain(ACCENT_COLOR.iter()) {
        assert!((0.0..=255.0).contains(c));
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn cursor_and_timing_constants() {
    // The trail should lag behind the dot
    assert!(CURSOR_TRAIL_LERP < CURSOR_LERP);
    assert!(CURSOR_LERP > 0.0 && CURSOR_LERP <= 1.0);

    assert_eq!(PRELOADER_DURATION_MS % PRELOADER_TICK_MS, 0);
    assert_eq!(PRELOADER_STATUSES.len(), 6);
    assert!(REVEAL_VIEWPORT_FRACTION > 0.0 && REVEAL_VIEWPORT_FRACTION <= 1.0);
    assert!(SCROLLBAR_MIN_THUMB_PX > 0.0);
}
