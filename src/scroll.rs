use crate::constants::{
    HORIZONTAL_END_PADDING, HORIZONTAL_MIN_VIEWPORT, REVEAL_VIEWPORT_FRACTION,
    SCROLLBAR_MIN_THUMB_PX,
};

/// Smooth-scroll easing: exponential ease-out, clamped to 1.
#[inline]
pub fn ease_out_expo(t: f64) -> f64 {
    (1.001 - 2f64.powf(-10.0 * t)).min(1.0)
}

/// Scrub progress of a pinned section from "top hits top" to "bottom hits bottom".
///
/// `section_top` is the section's top relative to the viewport.
pub fn scrub_progress(section_top: f64, section_height: f64, viewport_height: f64) -> f64 {
    let distance = section_height - viewport_height;
    if distance <= 0.0 {
        return if section_top <= 0.0 { 1.0 } else { 0.0 };
    }
    (-section_top / distance).clamp(0.0, 1.0)
}

#[inline]
pub fn horizontal_enabled(viewport_width: f64) -> bool {
    viewport_width >= HORIZONTAL_MIN_VIEWPORT
}

/// Track translation (negative, px) at a given scrub progress.
#[inline]
pub fn horizontal_offset(progress: f64, track_scroll_width: f64, viewport_width: f64) -> f64 {
    let travel = track_scroll_width - viewport_width + HORIZONTAL_END_PADDING;
    -travel * progress
}

/// Whether an element whose top is at `element_top` has crossed the reveal line.
#[inline]
pub fn is_revealed(element_top: f64, viewport_height: f64) -> bool {
    element_top < viewport_height * REVEAL_VIEWPORT_FRACTION
}

/// Custom scrollbar thumb size and offset, both in px.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThumbGeometry {
    pub height: f64,
    pub top: f64,
}

pub fn thumb_geometry(scroll_height: f64, client_height: f64, scroll_top: f64) -> ThumbGeometry {
    let height = thumb_height(scroll_height, client_height);
    let max_scroll = scroll_height - client_height;
    let top = if max_scroll > 0.0 {
        (scroll_top / max_scroll).clamp(0.0, 1.0) * (client_height - height)
    } else {
        0.0
    };
    ThumbGeometry { height, top }
}

/// Document scroll position for a thumb dragged `delta_y` px from where it
/// was grabbed at `start_scroll`.
pub fn drag_scroll_target(
    start_scroll: f64,
    delta_y: f64,
    scroll_height: f64,
    client_height: f64,
) -> f64 {
    let track = client_height - thumb_height(scroll_height, client_height);
    let max_scroll = (scroll_height - client_height).max(0.0);
    if track <= 0.0 {
        return start_scroll.clamp(0.0, max_scroll);
    }
    (start_scroll + delta_y / track * max_scroll).clamp(0.0, max_scroll)
}

#[inline]
fn thumb_height(scroll_height: f64, client_height: f64) -> f64 {
    if scroll_height <= 0.0 {
        return client_height.max(SCROLLBAR_MIN_THUMB_PX);
    }
    (client_height / scroll_height * client_height).max(SCROLLBAR_MIN_THUMB_PX)
}
