//! End-to-end behavior of the composite controls, exercised the way a
//! host panel would drive them.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use armature::prelude::*;

fn setup() {
    init_global_registry();
}

fn count_notifications(signal: &Signal<()>) -> Arc<AtomicU32> {
    let count = Arc::new(AtomicU32::new(0));
    let count_clone = count.clone();
    signal.connect(move |_| {
        count_clone.fetch_add(1, Ordering::SeqCst);
    });
    count
}

#[test]
fn scaled_range_reproduces_rounded_values() {
    setup();
    for digits in 0..=4u32 {
        let scale = 10f64.powi(digits as i32);
        let mut slider = FloatSlider::new(digits).with_range(0.0, 100.0);
        for &v in &[0.0, 0.5, 1.25, 3.333, 50.05, 99.9] {
            slider.set_value(v);
            let expected = (v * scale).round() / scale;
            assert_eq!(
                slider.value(),
                expected,
                "digits={digits} v={v} value={}",
                slider.value()
            );
            // Never further from the input than half a grid step.
            assert!((slider.value() - v).abs() <= 0.5 / scale + 1e-9);
        }
    }
}

#[test]
fn constructed_edit_slider_is_consistent() {
    setup();
    for (min, max, start) in [(0.0, 1.0, 0.5), (-2.0, 2.0, 0.0), (0.0, 10.0, 10.0)] {
        let slider = EditFloatSlider::new(min, max, start, 1);
        assert_eq!(slider.value(), start);
        assert_eq!(
            slider.line_edit().text(),
            format!("{start:.1}"),
            "displayed text is the canonical string form"
        );
    }
}

#[test]
fn set_value_is_idempotent_and_change_only() {
    setup();
    let mut slider = EditSlider::new(0, 100, 10);
    let count = count_notifications(&slider.value_changed);

    slider.set_value(25);
    assert_eq!(slider.value(), 25);
    assert_eq!(count.load(Ordering::SeqCst), 1);

    slider.set_value(25); // same value: same observable state, no signal
    assert_eq!(slider.value(), 25);
    assert_eq!(slider.line_edit().text(), "25");
    assert_eq!(slider.slider().value(), 25);
    assert_eq!(count.load(Ordering::SeqCst), 1);
}

#[test]
fn steppers_are_noops_at_the_bounds() {
    setup();
    let mut slider = EditSlider::new(0, 5, 5);
    let count = count_notifications(&slider.value_changed);

    slider.increment();
    assert_eq!(slider.value(), 5);
    assert_eq!(count.load(Ordering::SeqCst), 0);

    let mut slider = EditSlider::new(0, 5, 0);
    let count = count_notifications(&slider.value_changed);
    slider.decrement();
    assert_eq!(slider.value(), 0);
    assert_eq!(count.load(Ordering::SeqCst), 0);
}

#[test]
fn collapse_expand_round_trip_restores_children() {
    setup();
    let mut group = CollapsibleGroupBox::new("Filters");
    group.add_child(Box::new(LabelSlider::new().with_maximum(100)));
    group.add_child(Box::new(LineEdit::new()));
    group.add_child(Box::new(PushButton::new("Apply")));

    let before: Vec<bool> = group.children().map(|c| c.is_visible()).collect();
    assert_eq!(before, vec![true, true, true]);

    group.set_checked(false);
    assert!(group.children().all(|c| !c.is_visible()));

    group.set_checked(true);
    let after: Vec<bool> = group.children().map(|c| c.is_visible()).collect();
    assert_eq!(before, after);
}

#[test]
fn three_clamped_increments_fire_three_notifications() {
    setup();
    // min=0, max=1, current=0.5, one decimal digit of precision.
    let mut slider = EditFloatSlider::new(0.0, 1.0, 0.5, 1);
    let count = count_notifications(&slider.value_changed);

    slider.increment();
    slider.increment();
    slider.increment();

    assert_eq!(slider.value(), 0.8);
    assert_eq!(count.load(Ordering::SeqCst), 3);
}

#[test]
fn typed_out_of_range_value_is_rejected() {
    setup();
    let mut slider = EditFloatSlider::new(0.0, 1.0, 0.5, 1);
    let count = count_notifications(&slider.value_changed);

    slider.line_edit_mut().set_text("2.0");
    slider.submit_text();

    assert_eq!(slider.value(), 0.5);
    assert_eq!(slider.slider().value(), 0.5);
    assert_eq!(count.load(Ordering::SeqCst), 0);
}

#[test]
fn decorated_widget_falls_back_and_stays_transparent() {
    setup();
    let mut decorated = IconDecoration::new(
        LineEdit::new().with_text("untouched"),
        Arc::new(StatusIconSet::new()),
        Arc::new(StatusColorSet::new()),
        24.0,
    );

    // Empty maps: "warn" renders the fallback icon and default color.
    decorated.set_status(Some("warn"));
    assert_eq!(decorated.badge().icon().name(), "none");
    assert_eq!(decorated.badge().color(), Color::BLACK);

    // The inner widget's interface answers through the wrapper, unchanged.
    assert_eq!(decorated.text(), "untouched");
}

#[test]
fn drag_gesture_commits_once_on_release() {
    setup();
    let mut slider = EditSlider::new(0, 100, 20);
    let count = count_notifications(&slider.value_changed);

    slider.begin_slider_drag();
    for position in [25, 40, 55, 70] {
        slider.drag_slider_to(position);
        // Live feedback in the field, authoritative value untouched.
        assert_eq!(slider.line_edit().text(), position.to_string());
        assert_eq!(slider.value(), 20);
    }
    assert_eq!(count.load(Ordering::SeqCst), 0);

    slider.release_slider();
    assert_eq!(slider.value(), 70);
    assert_eq!(count.load(Ordering::SeqCst), 1);
}

#[test]
fn composites_nest_inside_collapsible_groups() {
    setup();
    let mut group = CollapsibleGroupBox::new("Advanced");
    let opacity = EditFloatSlider::new(0.0, 1.0, 1.0, 2);
    let opacity_id = opacity.object_id();
    group.add_child(Box::new(opacity));

    group.set_checked(false);

    // The composite is hidden along with everything else.
    let index = group.index_of(opacity_id).unwrap();
    assert!(!group.child_at(index).unwrap().is_visible());

    // Layout geometry still distributes once re-expanded.
    group.set_checked(true);
    group.set_geometry(Rect::new(0.0, 0.0, 400.0, 120.0));
    assert!(group.child_at(index).unwrap().geometry().width() > 0.0);
}
