use super::*;

#[test]
fn fake_clock_advances_by_duration() {
    let clock = FakeClock::new();
    let start = clock.now();
    clock.advance(chrono::Duration::hours(25));
    assert_eq!(clock.now() - start, chrono::Duration::hours(25));
}

#[test]
fn fake_clock_set_overrides_current_time() {
    let clock = FakeClock::new();
    let fixed = "2026-01-01T00:00:00Z".parse().unwrap();
    clock.set(fixed);
    assert_eq!(clock.now(), fixed);
}

#[test]
fn system_clock_is_monotonic_enough_for_ordering() {
    let clock = SystemClock;
    let a = clock.now();
    let b = clock.now();
    assert!(b >= a);
}
