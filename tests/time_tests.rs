use tripwise::shared::time::{Duration, Time};

#[test]
fn valid_time_test_1() {
    assert_eq!(Time::parse("00:00").unwrap().as_seconds(), 0);
}

#[test]
fn valid_time_test_2() {
    assert_eq!(Time::parse("00:01").unwrap().as_seconds(), 60);
}

#[test]
fn valid_time_test_3() {
    assert_eq!(Time::parse("01:01:30").unwrap().as_seconds(), 3690);
}

#[test]
fn valid_time_test_4() {
    assert_eq!(Time::parse(" 09:30 ").unwrap(), Time::from_hm(9, 30));
}

#[test]
fn invalid_time_test_1() {
    assert!(Time::parse("00:0a").is_none())
}

#[test]
fn invalid_time_test_2() {
    assert!(Time::parse("24:00").is_none())
}

#[test]
fn invalid_time_test_3() {
    assert!(Time::parse("9").is_none())
}

#[test]
fn seconds_until_is_signed() {
    let nine = Time::from_hm(9, 0);
    let half_past = Time::from_hm(9, 30);
    assert_eq!(nine.seconds_until(half_past), 1800);
    assert_eq!(half_past.seconds_until(nine), -1800);
}

#[test]
fn duration_rounds_to_minutes() {
    assert_eq!(Duration::from_seconds(89).as_minutes(), 1);
    assert_eq!(Duration::from_seconds(90).as_minutes(), 2);
    assert_eq!(Duration::from_seconds_f64(-3.0), Duration::ZERO);
    assert_eq!(Duration::from_seconds_f64(1199.6), Duration::from_minutes(20));
}

#[test]
fn fractional_seconds_round_up() {
    assert_eq!(Duration::from_seconds_f64(1200.4).as_seconds(), 1201);
    assert_eq!(Duration::from_seconds_f64(1200.0).as_seconds(), 1200);
}

#[test]
fn huge_duration_rounds_without_overflow() {
    assert_eq!(Duration::from_seconds(u32::MAX).as_minutes(), u32::MAX / 60);
}

#[test]
fn duration_display() {
    assert_eq!(Duration::from_minutes(80).to_string(), "1 hr 20 min");
    assert_eq!(Duration::from_minutes(45).to_string(), "45 min");
}
