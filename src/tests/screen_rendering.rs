//! What the terminal shows as the viewport moves.

use crate::test_harness::{AcceptanceTestHarness, FRAME_MS};
use crossterm::event::KeyCode;

fn lines(screen: &str) -> Vec<&str> {
    screen.lines().collect()
}

#[test]
fn first_record_header_on_top_row() {
    let mut h = AcceptanceTestHarness::generated(3, 7).unwrap();
    let screen = h.render().unwrap();

    assert!(lines(&screen)[0].starts_with("#0 "), "{screen}");
}

#[test]
fn status_line_shows_offset_and_count() {
    let mut h = AcceptanceTestHarness::generated(3, 7).unwrap();
    let max = h.app().viewport().max_scroll_top();
    let screen = h.render().unwrap();

    let status = lines(&screen)[23];
    assert!(
        status.contains(&format!("0/{max:.0} · 90 records")),
        "{status}"
    );
    assert!(status.contains("q quit"), "{status}");
}

#[test]
fn drag_by_one_record_shows_next_header() {
    let mut h = AcceptanceTestHarness::generated(3, 7).unwrap();
    let rows = h.app().layout().total() / h.app().layout().len();

    h.drag(10, 20, 20 - rows as u16);
    let screen = h.render().unwrap();

    assert!(lines(&screen)[0].starts_with("#1 "), "{screen}");
}

#[test]
fn status_reports_animation_in_flight() {
    let mut h = AcceptanceTestHarness::generated(3, 7).unwrap();

    h.send_key(KeyCode::Down);
    h.advance(FRAME_MS).unwrap();
    let moving = h.render().unwrap();
    assert!(lines(&moving)[23].contains("animating"), "{moving}");

    h.settle().unwrap();
    let settled = h.render().unwrap();
    assert!(!lines(&settled)[23].contains("animating"), "{settled}");
    assert!(lines(&settled)[23].contains(" 50/"), "{settled}");
}

#[test]
fn frame_reports_change_only_while_moving() {
    let mut h = AcceptanceTestHarness::generated(3, 7).unwrap();
    assert!(!h.advance(FRAME_MS).unwrap());

    h.send_key(KeyCode::Down);
    assert!(h.advance(FRAME_MS).unwrap());
}
