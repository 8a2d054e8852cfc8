use color_core::{
    ColorStateController, DeadlineTimers, ManualClock, MemoryClipboard, Settings, ANIMATION_PULSE,
    COPIED_FEEDBACK,
};
use shared::{domain::ColorValue, protocol::Intent};

#[test]
fn scripted_widget_session_acceptance() {
    let clock = ManualClock::new();
    let clipboard = MemoryClipboard::new();
    let mut controller = ColorStateController::new(
        &Settings::default(),
        DeadlineTimers::new(clock.clone()),
        Box::new(clipboard.clone()),
    );
    let updates = controller.subscribe();

    let script = [
        "preset 0",
        "select blue",
        "draft #123456",
        "apply",
        "copy",
        "history 2",
        "reset",
        "copy",
    ];
    for line in script {
        let intent: Intent = line.parse().expect("intent");
        assert!(controller.dispatch(intent), "intent rejected: {line}");
    }

    let snapshot = controller.snapshot();
    assert!(snapshot.is_default_background);
    assert_eq!(snapshot.background_label, "Gradient Background");
    assert_eq!(
        snapshot.history,
        vec![
            ColorValue::from("#123456"),
            ColorValue::from("blue"),
            ColorValue::from("red"),
        ]
    );
    assert!(snapshot.animating);
    assert!(snapshot.copied);
    assert_eq!(
        clipboard.writes(),
        vec!["#123456".to_string(), "gradient".to_string()]
    );

    clock.advance(ANIMATION_PULSE);
    controller.pump_timers();
    assert!(!controller.animating());
    assert!(controller.copied());

    clock.advance(COPIED_FEEDBACK);
    controller.pump_timers();
    assert!(!controller.copied());

    let delivered: Vec<_> = updates.try_iter().collect();
    assert_eq!(delivered.last(), Some(&controller.snapshot()));
}

#[test]
fn history_never_exceeds_capacity_over_long_sessions() {
    let clock = ManualClock::new();
    let mut controller = ColorStateController::new(
        &Settings::default(),
        DeadlineTimers::new(clock),
        Box::new(MemoryClipboard::new()),
    );

    for round in 0..50 {
        controller.select_color(format!("#{round:06x}"));
        if round % 7 == 0 {
            controller.select_color("");
        }
        assert!(controller.history().len() <= 8);
        assert!(controller.history().iter().all(|color| !color.is_empty()));
    }
    assert_eq!(controller.history().get(0).map(ColorValue::as_str), Some("#000031"));
}
