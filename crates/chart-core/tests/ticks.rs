// File: crates/chart-core/tests/ticks.rs
// Purpose: Tick step selection and label formatting.

use chart_core::grid::{format_tick, nice_ticks};

#[test]
fn unit_range_ticks() {
    let t = nice_ticks(0.0, 10.0, 5);
    assert_eq!(t.step, 2.0);
    assert_eq!(t.values, vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
    assert_eq!(t.labels(), vec!["0", "2", "4", "6", "8", "10"]);
}

#[test]
fn fractional_steps_get_decimals() {
    let t = nice_ticks(0.0, 1.0, 4);
    assert_eq!(t.step, 0.25);
    assert_eq!(t.labels(), vec!["0.00", "0.25", "0.50", "0.75", "1.00"]);

    assert_eq!(format_tick(0.035, 0.005), "0.035");
}

#[test]
fn ticks_stay_inside_range() {
    let t = nice_ticks(4_294_755_000.0, 4_294_776_500.0, 8);
    assert!(!t.values.is_empty());
    assert!(t.values.iter().all(|&v| (4_294_755_000.0..=4_294_776_500.0).contains(&v)));
    assert!(t.labels().iter().all(|l| !l.contains('.')));
}

#[test]
fn origin_is_not_negative_zero() {
    let t = nice_ticks(-1.0, 1.0, 4);
    assert!(t.labels().contains(&"0.0".to_string()));
}

#[test]
fn degenerate_inputs() {
    assert!(nice_ticks(f64::NAN, 1.0, 5).values.is_empty());
    assert!(nice_ticks(0.0, 1.0, 0).values.is_empty());
    assert_eq!(nice_ticks(2.0, 2.0, 5).values, vec![2.0]);
    // reversed bounds are accepted
    assert_eq!(nice_ticks(10.0, 0.0, 5).values.len(), 6);
}
