// Host-side tests for the non-canvas site runtime: cursor, preloader,
// scroll effects and navigation helpers.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod cursor {
    include!("../src/cursor.rs");
}
mod nav {
    include!("../src/nav.rs");
}
mod preloader {
    include!("../src/preloader.rs");
}
mod scroll {
    include!("../src/scroll.rs");
}

use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

// ---------------- Cursor ----------------
#[test]
fn cursor_and_trail_ease_at_different_rates() {
    let mut f = cursor::CursorFollower::default();
    f.set_target(Vec2::new(100.0, 40.0));
    f.step();
    assert_eq!(f.cursor, Vec2::new(25.0, 10.0));
    assert!((f.trail.x - 12.0).abs() < 1e-4);
    assert!((f.trail.y - 4.8).abs() < 1e-4);
    assert!(f.trail.x < f.cursor.x);
}

#[test]
fn cursor_converges_on_target() {
    let mut f = cursor::CursorFollower::default();
    f.set_target(Vec2::new(640.0, 360.0));
    for _ in 0..200 {
        f.step();
    }
    assert!(f.cursor.distance(f.target) < 1e-2);
    assert!(f.trail.distance(f.target) < 1e-2);
}

#[test]
fn hover_label_prefers_project_then_drag_then_mail() {
    use cursor::HoverTarget;
    let none = HoverTarget::default();
    assert_eq!(none.label(), "VIEW");
    let drag = HoverTarget {
        drag: true,
        ..Default::default()
    };
    assert_eq!(drag.label(), "DRAG");
    let mail = HoverTarget {
        interactive: true,
        mailto: true,
        ..Default::default()
    };
    assert_eq!(mail.label(), "SEND");
    let project_drag = HoverTarget {
        project: true,
        drag: true,
        ..Default::default()
    };
    assert_eq!(project_drag.label(), "VIEW");
}

#[test]
fn translate3d_formats_pixels() {
    assert_eq!(
        cursor::translate3d(Vec2::new(1.5, 2.0)),
        "translate3d(1.5px, 2px, 0)"
    );
}

// ---------------- Preloader ----------------
#[test]
fn preloader_increment_covers_duration() {
    assert_eq!(preloader::increment_per_tick(2000, 80), 4);
    assert_eq!(preloader::increment_per_tick(1000, 100), 10);
    assert_eq!(preloader::increment_per_tick(10, 80), 100);
}

#[test]
fn preloader_status_tracks_progress_bands() {
    assert_eq!(preloader::status_for(0), "INITIALIZING KERNEL...");
    assert_eq!(preloader::status_for(16), "INITIALIZING KERNEL...");
    assert_eq!(preloader::status_for(17), "LOADING ASSETS...");
    assert_eq!(preloader::status_for(50), "ESTABLISHING SECURE CONNECTION...");
    assert_eq!(preloader::status_for(99), "SYSTEM READY");
    assert_eq!(preloader::status_for(100), "SYSTEM READY");
}

#[test]
fn preloader_runs_to_completion() {
    for seed in 0..16 {
        let mut p = preloader::Preloader::new(StdRng::seed_from_u64(seed));
        let mut ticks = 0;
        let mut prev = p.progress();
        loop {
            let t = p.tick();
            ticks += 1;
            assert!(t.progress > prev, "progress must advance");
            assert!(t.progress - prev <= 6);
            assert!(t.progress <= 100);
            prev = t.progress;
            if t.done {
                assert_eq!(t.progress, 100);
                assert_eq!(t.status, "SYSTEM READY");
                break;
            }
        }
        assert!((17..=25).contains(&ticks), "seed {seed}: {ticks} ticks");
    }
}

// ---------------- Scroll ----------------
#[test]
fn easing_starts_near_zero_and_ends_at_one() {
    assert!(scroll::ease_out_expo(0.0) < 0.01);
    assert_eq!(scroll::ease_out_expo(1.0), 1.0);
    assert_eq!(scroll::ease_out_expo(2.0), 1.0);
    let mut prev = scroll::ease_out_expo(0.0);
    for i in 1..=10 {
        let v = scroll::ease_out_expo(i as f64 / 10.0);
        assert!(v >= prev);
        prev = v;
    }
}

#[test]
fn scrub_progress_spans_pinned_section() {
    assert_eq!(scroll::scrub_progress(300.0, 2000.0, 800.0), 0.0);
    assert_eq!(scroll::scrub_progress(0.0, 2000.0, 800.0), 0.0);
    assert_eq!(scroll::scrub_progress(-600.0, 2000.0, 800.0), 0.5);
    assert_eq!(scroll::scrub_progress(-1200.0, 2000.0, 800.0), 1.0);
    assert_eq!(scroll::scrub_progress(-5000.0, 2000.0, 800.0), 1.0);
    // Section no taller than the viewport: jumps once its top is reached.
    assert_eq!(scroll::scrub_progress(10.0, 600.0, 800.0), 0.0);
    assert_eq!(scroll::scrub_progress(-10.0, 600.0, 800.0), 1.0);
}

#[test]
fn horizontal_track_travels_its_overflow_plus_padding() {
    assert!(!scroll::horizontal_enabled(767.0));
    assert!(scroll::horizontal_enabled(768.0));
    assert_eq!(scroll::horizontal_offset(0.0, 3000.0, 1000.0), 0.0);
    assert_eq!(scroll::horizontal_offset(0.5, 3000.0, 1000.0), -1025.0);
    assert_eq!(scroll::horizontal_offset(1.0, 3000.0, 1000.0), -2050.0);
}

#[test]
fn reveal_line_sits_at_eighty_percent() {
    assert!(scroll::is_revealed(799.0, 1000.0));
    assert!(!scroll::is_revealed(800.0, 1000.0));
    assert!(scroll::is_revealed(-400.0, 1000.0));
}

#[test]
fn scrollbar_thumb_geometry() {
    let g = scroll::thumb_geometry(4000.0, 1000.0, 0.0);
    assert_eq!(g.height, 250.0);
    assert_eq!(g.top, 0.0);
    let g = scroll::thumb_geometry(4000.0, 1000.0, 3000.0);
    assert_eq!(g.top, 750.0);

    let tall = scroll::thumb_geometry(100_000.0, 1000.0, 0.0);
    assert_eq!(tall.height, 50.0);

    let short = scroll::thumb_geometry(1000.0, 1000.0, 0.0);
    assert_eq!(short.height, 1000.0);
    assert_eq!(short.top, 0.0);
}

#[test]
fn scrollbar_drag_maps_to_document_scroll() {
    assert_eq!(scroll::drag_scroll_target(0.0, 375.0, 4000.0, 1000.0), 1500.0);
    assert_eq!(scroll::drag_scroll_target(1500.0, -375.0, 4000.0, 1000.0), 0.0);
    assert_eq!(scroll::drag_scroll_target(0.0, 5000.0, 4000.0, 1000.0), 3000.0);
    assert_eq!(scroll::drag_scroll_target(0.0, -50.0, 4000.0, 1000.0), 0.0);
    assert_eq!(scroll::drag_scroll_target(0.0, 100.0, 1000.0, 1000.0), 0.0);
}

// ---------------- Navigation ----------------
#[test]
fn current_page_is_last_path_segment() {
    assert_eq!(nav::current_page("/work/about.html"), "about.html");
    assert_eq!(nav::current_page("/contact.html"), "contact.html");
    assert_eq!(nav::current_page("/"), "index.html");
    assert_eq!(nav::current_page(""), "index.html");
}

#[test]
fn active_link_matches_exact_href() {
    assert!(nav::is_active_link(Some("about.html"), "about.html"));
    assert!(!nav::is_active_link(Some("/about.html"), "about.html"));
    assert!(!nav::is_active_link(None, "index.html"));
}
