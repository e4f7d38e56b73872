// tests/feedback_timers.rs
//
// Overlay/tooltip lifecycle driven by a manual clock.
use std::time::Duration;

use vgmdb_info::config::options::FeedbackOptions;
use vgmdb_info::feedback::{Anchor, FeedbackLayer, ManualClock, Phase, TimerQueue, WidgetKind};

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn frame(layer: &mut FeedbackLayer, q: &mut TimerQueue<&ManualClock>) {
    let due = q.begin_frame();
    layer.run_due(q, due);
}

#[test]
fn tooltip_fades_in_holds_fades_out_and_goes_away() {
    let clock = ManualClock::new();
    let mut q = TimerQueue::new(&clock);
    let mut layer = FeedbackLayer::new(FeedbackOptions::default());

    let anchor = Anchor { left: 40.0, bottom: 20.0 };
    let id = layer.show_tooltip(&mut q, anchor, "Copied to clipboard");
    assert_eq!(layer.phase(id), Some(Phase::Created));
    assert_eq!(layer.get(id).unwrap().opacity(), 0.0);
    assert_eq!(anchor.below(5.0), (40.0, 25.0));

    frame(&mut layer, &mut q);
    assert_eq!(layer.phase(id), Some(Phase::Visible));
    assert_eq!(layer.get(id).unwrap().opacity(), 1.0);

    clock.advance(ms(499));
    frame(&mut layer, &mut q);
    assert_eq!(layer.phase(id), Some(Phase::Visible));

    clock.advance(ms(1));
    frame(&mut layer, &mut q);
    assert_eq!(layer.phase(id), Some(Phase::Dismissed));

    clock.advance(ms(500));
    frame(&mut layer, &mut q);
    assert_eq!(layer.phase(id), None);
    assert!(layer.widgets().is_empty());
    assert!(q.is_empty());
}

#[test]
fn overlay_stays_until_closed() {
    let clock = ManualClock::new();
    let mut q = TimerQueue::new(&clock);
    let mut layer = FeedbackLayer::new(FeedbackOptions::default());

    let id = layer.show_overlay(&mut q, "[quote]...[/quote]".into());
    frame(&mut layer, &mut q);
    clock.advance(ms(60_000));
    frame(&mut layer, &mut q);
    assert_eq!(layer.phase(id), Some(Phase::Visible));
    assert!(matches!(&layer.get(id).unwrap().kind, WidgetKind::Overlay { text } if text == "[quote]...[/quote]"));

    assert!(layer.dismiss(&mut q, id));
    assert!(!layer.dismiss(&mut q, id), "no re-entry");
    assert_eq!(layer.phase(id), Some(Phase::Dismissed));

    clock.advance(ms(500));
    frame(&mut layer, &mut q);
    assert_eq!(layer.phase(id), None);
}

#[test]
fn closing_before_first_frame_never_shows() {
    let clock = ManualClock::new();
    let mut q = TimerQueue::new(&clock);
    let mut layer = FeedbackLayer::new(FeedbackOptions::default());

    let id = layer.show_overlay(&mut q, "x".into());
    layer.dismiss(&mut q, id);
    frame(&mut layer, &mut q); // stale Reveal
    assert_eq!(layer.phase(id), Some(Phase::Dismissed));
}

#[test]
fn stale_timers_after_removal_are_noops() {
    let clock = ManualClock::new();
    let mut q = TimerQueue::new(&clock);
    let opts = FeedbackOptions { fade: ms(100), tooltip_hold: ms(1_000) };
    let mut layer = FeedbackLayer::new(opts);

    let id = layer.show_tooltip(&mut q, Anchor::default(), "hi");
    frame(&mut layer, &mut q);
    // user-closed early: removed long before the hold timer fires
    layer.dismiss(&mut q, id);
    clock.advance(ms(100));
    frame(&mut layer, &mut q);
    assert_eq!(layer.phase(id), None);

    let other = layer.show_tooltip(&mut q, Anchor::default(), "again");
    clock.advance(ms(900));
    frame(&mut layer, &mut q); // first tooltip's FadeOut fires here
    assert_eq!(layer.phase(other), Some(Phase::Visible));
    assert_eq!(layer.widgets().len(), 1);
}

#[test]
fn alert_blocks_until_acknowledged() {
    let mut layer = FeedbackLayer::default();
    assert_eq!(layer.alert_message(), None);
    layer.alert("Error occurred, please check the log!");
    assert_eq!(layer.alert_message(), Some("Error occurred, please check the log!"));
    layer.acknowledge_alert();
    assert_eq!(layer.alert_message(), None);
}
