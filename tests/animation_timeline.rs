//! Timeline tests for eased scrolling, drags and debouncing.
//!
//! Each test drives a mounted viewport with a manual clock and checks what
//! the offset looks like frame by frame.

use contentscroll::frame::{Clock, ManualClock};
use contentscroll::model::ScrollConfig;
use contentscroll::state::{ease_out_quad, Viewport};
use proptest::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

const T0: f64 = 5_000.0;
const FRAME: f64 = 16.0;

fn viewport(scroll_height: f64, height: f64) -> (Viewport<ManualClock>, ManualClock) {
    let clock = ManualClock::new(T0);
    let mut viewport = Viewport::new(scroll_height, clock.clone()).height(height);
    viewport.mount();
    (viewport, clock)
}

fn run_frames(viewport: &mut Viewport<ManualClock>, clock: &ManualClock) -> Vec<(f64, f64)> {
    let mut samples = Vec::new();
    while viewport.has_pending_frames() {
        clock.advance(FRAME);
        viewport.tick();
        samples.push((clock.now(), viewport.scroll_top()));
        assert!(samples.len() < 100, "animation never finished");
    }
    samples
}

#[test]
fn eased_scroll_is_monotone_and_lands_at_deadline() {
    let (mut viewport, clock) = viewport(1000.0, 100.0);

    viewport.scroll(100.0);
    let samples = run_frames(&mut viewport, &clock);

    let mut previous = 0.0;
    for &(now, top) in &samples {
        assert!(top >= previous, "offset went backwards at {now}: {top} < {previous}");
        let progress = ((now - T0) / 240.0).min(1.0);
        assert!((top - 100.0 * ease_out_quad(progress)).abs() < 1e-9);
        previous = top;
    }
    let &(end, last) = samples.last().unwrap();
    assert_eq!(last, 100.0);
    assert!(end >= T0 + 240.0);
}

#[test]
fn late_frame_snaps_to_target() {
    let (mut viewport, clock) = viewport(1000.0, 100.0);

    viewport.scroll(300.0);
    clock.advance(1_000.0);
    viewport.tick();

    assert_eq!(viewport.scroll_top(), 300.0);
    assert!(!viewport.is_animating());
}

#[test]
fn custom_duration_shortens_the_timeline() {
    let clock = ManualClock::new(T0);
    let config = ScrollConfig {
        animation_duration_ms: 80.0,
        ..ScrollConfig::default()
    };
    let mut viewport = Viewport::new(1000.0, clock.clone()).height(100.0).config(config);
    viewport.mount();

    viewport.scroll(60.0);
    let samples = run_frames(&mut viewport, &clock);

    assert_eq!(samples.len(), 5);
    assert_eq!(samples.last().unwrap().1, 60.0);
}

#[test]
fn on_scroll_sees_every_intermediate_offset() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let clock = ManualClock::new(T0);
    let mut viewport = Viewport::new(1000.0, clock.clone())
        .height(100.0)
        .on_scroll(move |top| sink.borrow_mut().push(top));
    viewport.mount();

    viewport.scroll(100.0);
    let samples = run_frames(&mut viewport, &clock);

    let seen = seen.borrow();
    assert_eq!(seen[0], 0.0);
    let reported: Vec<f64> = seen[1..].to_vec();
    let expected: Vec<f64> = samples.iter().map(|&(_, top)| top).collect();
    assert_eq!(reported, expected);
}

proptest! {
    #[test]
    fn drag_moves_opposite_to_pointer(
        start in 0..900i32,
        y0 in 0..100i32,
        dy in -1000..1000i32,
    ) {
        let (start, y0, dy) = (f64::from(start), f64::from(y0), f64::from(dy));
        let (mut viewport, _clock) = viewport(1000.0, 100.0);
        viewport.set_scroll_top(start);

        viewport.touch_start(0.0, y0);
        viewport.touch_move(0.0, y0 + dy);

        prop_assert_eq!(viewport.scroll_top(), (start - dy).clamp(0.0, 900.0));
        prop_assert!(!viewport.is_animating());
    }

    #[test]
    fn requests_inside_debounce_window_are_dropped(gap in 0.0..40.0f64) {
        let (mut viewport, clock) = viewport(1000.0, 100.0);

        viewport.scroll(100.0);
        clock.advance(gap);
        viewport.scroll(300.0);

        prop_assert_eq!(viewport.animation().map(|a| a.target_offset), Some(100.0));
    }

    #[test]
    fn requests_after_debounce_window_retarget(gap in 40.0..400.0f64) {
        let (mut viewport, clock) = viewport(1000.0, 100.0);

        viewport.scroll(100.0);
        clock.advance(gap);
        viewport.scroll(300.0);

        let animation = viewport.animation().copied();
        prop_assert_eq!(animation.map(|a| a.target_offset), Some(300.0));
        prop_assert_eq!(animation.map(|a| a.end_time), Some(T0 + 240.0));
    }
}
