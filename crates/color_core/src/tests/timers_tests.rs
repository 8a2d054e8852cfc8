use super::*;
use crate::clock::ManualClock;

fn deadline_timers() -> (ManualClock, DeadlineTimers<ManualClock>) {
    let clock = ManualClock::new();
    (clock.clone(), DeadlineTimers::new(clock))
}

#[test]
fn deadline_timer_fires_once_delay_has_elapsed() {
    let (clock, mut timers) = deadline_timers();
    let handle = timers.schedule(ANIMATION_PULSE, TransientFlag::Animating);

    clock.advance_millis(499);
    assert!(timers.drain_expired().is_empty());

    clock.advance_millis(1);
    assert_eq!(
        timers.drain_expired(),
        vec![Expired {
            handle,
            flag: TransientFlag::Animating
        }]
    );
    assert_eq!(timers.pending_count(), 0);
    assert!(timers.drain_expired().is_empty());
}

#[test]
fn cancelled_deadline_timer_never_fires() {
    let (clock, mut timers) = deadline_timers();
    let handle = timers.schedule(COPIED_FEEDBACK, TransientFlag::Copied);
    timers.cancel(handle);

    clock.advance(COPIED_FEEDBACK * 2);
    assert!(timers.drain_expired().is_empty());
}

#[test]
fn expired_timers_drain_in_deadline_order() {
    let (clock, mut timers) = deadline_timers();
    let copied = timers.schedule(COPIED_FEEDBACK, TransientFlag::Copied);
    let animating = timers.schedule(ANIMATION_PULSE, TransientFlag::Animating);

    clock.advance(COPIED_FEEDBACK);
    let handles: Vec<_> = timers
        .drain_expired()
        .into_iter()
        .map(|expired| expired.handle)
        .collect();
    assert_eq!(handles, vec![animating, copied]);
}

#[test]
fn time_until_next_tracks_earliest_deadline() {
    let (clock, mut timers) = deadline_timers();
    assert_eq!(timers.time_until_next(), None);

    timers.schedule(COPIED_FEEDBACK, TransientFlag::Copied);
    timers.schedule(ANIMATION_PULSE, TransientFlag::Animating);
    clock.advance_millis(200);
    assert_eq!(timers.time_until_next(), Some(Duration::from_millis(300)));

    timers.cancel_all();
    assert_eq!(timers.pending_count(), 0);
}

#[tokio::test(start_paused = true)]
async fn tokio_timer_reports_expiry() {
    let mut timers = TokioTimers::new();
    let handle = timers.schedule(ANIMATION_PULSE, TransientFlag::Animating);

    let expired = timers.next_expired().await.expect("expiry");
    assert_eq!(expired.handle, handle);
    assert_eq!(expired.flag, TransientFlag::Animating);
    assert_eq!(timers.pending_count(), 0);
}

#[tokio::test(start_paused = true)]
async fn cancelled_tokio_timer_is_superseded_by_replacement() {
    let mut timers = TokioTimers::new();
    let stale = timers.schedule(ANIMATION_PULSE, TransientFlag::Animating);
    tokio::time::sleep(Duration::from_millis(300)).await;
    timers.cancel(stale);
    let fresh = timers.schedule(ANIMATION_PULSE, TransientFlag::Animating);

    let started = tokio::time::Instant::now();
    let expired = timers.next_expired().await.expect("expiry");
    assert_eq!(expired.handle, fresh);
    assert!(started.elapsed() >= ANIMATION_PULSE);
}

#[tokio::test(start_paused = true)]
async fn drain_skips_reports_from_cancelled_tokio_timers() {
    let mut timers = TokioTimers::new();
    let handle = timers.schedule(Duration::from_millis(10), TransientFlag::Copied);
    tokio::time::sleep(Duration::from_millis(20)).await;
    timers.cancel(handle);

    assert!(timers.drain_expired().is_empty());
}
