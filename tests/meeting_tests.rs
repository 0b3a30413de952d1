use chrono::Weekday;
use schedule_planner::{MeetingDay, MeetingSpec, ValidationError, meeting::time_string};

#[test]
fn valid_patterns_round_trip() {
    let cases = [
        ("MW", 1330, 1445),
        ("TH", 800, 915),
        ("F", 1200, 1300),
        ("MTWHF", 910, 1100),
        ("HT", 1330, 1345),
    ];
    for (pattern, start, end) in cases {
        let spec = MeetingSpec::for_course(pattern, start, end).unwrap();
        assert_eq!(spec.pattern(), pattern);
        assert_eq!(i32::from(spec.start_time()), start);
        assert_eq!(i32::from(spec.end_time()), end);
        assert!(!spec.is_arranged());
    }
}

#[test]
fn repeated_day_codes_are_rejected() {
    for pattern in ["MM", "MWM", "TWHT", "FMF"] {
        assert_eq!(
            MeetingSpec::for_course(pattern, 1000, 1100),
            Err(ValidationError::MeetingDaysAndTime),
            "pattern {pattern} should be rejected"
        );
        assert!(MeetingSpec::for_event(pattern, 1000, 1100).is_err());
        assert!(MeetingSpec::new(pattern, 1000, 1100).is_err());
    }
}

#[test]
fn empty_pattern_is_rejected() {
    assert!(MeetingSpec::new("", 1000, 1100).is_err());
    assert!(MeetingSpec::for_course("", 1000, 1100).is_err());
    assert!(MeetingSpec::for_event("", 1000, 1100).is_err());
}

#[test]
fn arranged_requires_zero_times_and_sole_code() {
    let spec = MeetingSpec::for_course("A", 0, 0).unwrap();
    assert!(spec.is_arranged());
    assert_eq!(spec.pattern(), "A");
    assert_eq!(spec.start_time(), 0);
    assert_eq!(spec.end_time(), 0);
    assert_eq!(spec, MeetingSpec::arranged());

    assert!(MeetingSpec::for_course("A", 1000, 0).is_err());
    assert!(MeetingSpec::for_course("A", 0, 1100).is_err());
    assert!(MeetingSpec::for_course("AM", 0, 0).is_err());
    assert!(MeetingSpec::for_course("MA", 1000, 1100).is_err());
    assert!(MeetingSpec::for_course("AA", 0, 0).is_err());
}

#[test]
fn course_alphabet_excludes_weekends() {
    assert!(MeetingSpec::for_course("S", 1000, 1100).is_err());
    assert!(MeetingSpec::for_course("MU", 1000, 1100).is_err());
    assert!(MeetingSpec::for_course("X", 1000, 1100).is_err());
    assert!(MeetingSpec::for_course("mw", 1000, 1100).is_err());
}

#[test]
fn event_alphabet_allows_weekends_but_not_arranged() {
    assert!(MeetingSpec::for_event("SU", 1000, 1100).is_ok());
    assert!(MeetingSpec::for_event("MTWHFSU", 1000, 1100).is_ok());
    assert!(MeetingSpec::for_event("A", 0, 0).is_err());
    assert!(MeetingSpec::for_event("X", 1000, 1100).is_err());
}

#[test]
fn base_rules_allow_weekends_and_arranged() {
    assert!(MeetingSpec::new("SU", 1000, 1100).is_ok());
    assert!(MeetingSpec::new("A", 0, 0).unwrap().is_arranged());
    assert!(MeetingSpec::new("M", 30, 100).is_err());
    assert!(MeetingSpec::new("M", 1000, 1000).is_err());
}

#[test]
fn times_must_decode_to_real_clock_values() {
    for (start, end) in [
        (-1, 1000),
        (1000, 2400),
        (1060, 1100),
        (1000, 1075),
        (2360, 2359),
        (900, 99999),
    ] {
        assert!(
            MeetingSpec::for_course("M", start, end).is_err(),
            "{start}-{end} should be rejected for courses"
        );
        assert!(
            MeetingSpec::for_event("M", start, end).is_err(),
            "{start}-{end} should be rejected for events"
        );
    }
    assert!(MeetingSpec::for_course("M", 2300, 2359).is_ok());
}

#[test]
fn course_rejects_hour_zero_event_accepts_it() {
    assert!(MeetingSpec::for_course("M", 30, 200).is_err());
    assert!(MeetingSpec::for_course("M", 0, 200).is_err());
    let spec = MeetingSpec::for_event("U", 0, 45).unwrap();
    assert_eq!(spec.start_time(), 0);
    assert_eq!(spec.end_time(), 45);
}

#[test]
fn course_requires_end_strictly_after_start() {
    assert!(MeetingSpec::for_course("M", 1000, 1000).is_err());
    assert!(MeetingSpec::for_course("M", 1100, 1000).is_err());
    assert!(MeetingSpec::for_course("M", 959, 1030).is_ok());
}

#[test]
fn event_accepts_equal_times_but_not_earlier_end() {
    assert!(MeetingSpec::for_event("M", 1000, 1000).is_ok());
    assert!(MeetingSpec::for_event("M", 1100, 1000).is_err());
}

#[test]
fn meeting_string_uses_twelve_hour_clock() {
    let spec = MeetingSpec::for_course("MW", 1330, 1445).unwrap();
    assert_eq!(spec.meeting_string(), "MW 1:30PM-2:45PM");
    assert_eq!(spec.to_string(), "MW 1:30PM-2:45PM");

    let morning = MeetingSpec::for_course("TH", 800, 1205).unwrap();
    assert_eq!(morning.meeting_string(), "TH 8:00AM-12:05PM");

    assert_eq!(MeetingSpec::arranged().meeting_string(), "Arranged");
}

#[test]
fn time_string_edge_hours() {
    assert_eq!(time_string(0), "12:00AM");
    assert_eq!(time_string(5), "12:05AM");
    assert_eq!(time_string(1200), "12:00PM");
    assert_eq!(time_string(1330), "1:30PM");
    assert_eq!(time_string(2359), "11:59PM");
    assert_eq!(time_string(905), "9:05AM");
}

#[test]
fn meets_on_maps_codes_to_weekdays() {
    let spec = MeetingSpec::for_event("HSU", 1000, 1100).unwrap();
    assert!(spec.meets_on(Weekday::Thu));
    assert!(spec.meets_on(Weekday::Sat));
    assert!(spec.meets_on(Weekday::Sun));
    assert!(!spec.meets_on(Weekday::Tue));
    assert_eq!(
        spec.days(),
        &[MeetingDay::Thursday, MeetingDay::Saturday, MeetingDay::Sunday]
    );
    assert!(!MeetingSpec::arranged().meets_on(Weekday::Mon));
}

#[test]
fn day_codes_round_trip() {
    for day in MeetingDay::ALL {
        assert_eq!(MeetingDay::from_code(day.code()), Some(day));
    }
    assert_eq!(MeetingDay::from_code('A'), None);
}

#[test]
fn shared_day_and_identical_times_conflict() {
    let a = MeetingSpec::for_course("MW", 1330, 1445).unwrap();
    let b = MeetingSpec::for_course("M", 1330, 1445).unwrap();
    assert!(a.conflicts_with(&b));
    assert!(b.conflicts_with(&a));
}

#[test]
fn partial_overlap_on_shared_day_is_not_a_conflict() {
    let a = MeetingSpec::for_course("M", 900, 1100).unwrap();
    let b = MeetingSpec::for_course("M", 930, 1030).unwrap();
    assert!(!a.conflicts_with(&b));
    assert!(!b.conflicts_with(&a));
}

#[test]
fn same_times_on_disjoint_days_do_not_conflict() {
    let a = MeetingSpec::for_course("MW", 1330, 1445).unwrap();
    let b = MeetingSpec::for_course("TH", 1330, 1445).unwrap();
    assert!(!a.conflicts_with(&b));
    assert!(!b.conflicts_with(&a));
}

#[test]
fn touching_boundary_conflicts_even_on_disjoint_days() {
    let a = MeetingSpec::for_event("MWF", 900, 1000).unwrap();
    let b = MeetingSpec::for_event("TH", 1000, 1130).unwrap();
    assert!(a.conflicts_with(&b));
    assert!(b.conflicts_with(&a));
}

#[test]
fn arranged_meetings_conflict_through_zero_times() {
    let arranged = MeetingSpec::for_course("A", 0, 0).unwrap();
    let other_arranged = MeetingSpec::arranged();
    assert!(arranged.conflicts_with(&other_arranged));
    assert!(other_arranged.conflicts_with(&arranged));

    let midnight = MeetingSpec::for_event("M", 0, 100).unwrap();
    assert!(arranged.conflicts_with(&midnight));
    assert!(midnight.conflicts_with(&arranged));

    let timed = MeetingSpec::for_course("M", 1000, 1100).unwrap();
    assert!(!arranged.conflicts_with(&timed));
    assert!(!timed.conflicts_with(&arranged));
}

#[test]
fn conflict_predicate_is_symmetric() {
    let specs = [
        MeetingSpec::for_event("MW", 1330, 1445).unwrap(),
        MeetingSpec::for_event("M", 1330, 1445).unwrap(),
        MeetingSpec::for_event("TH", 1330, 1445).unwrap(),
        MeetingSpec::for_event("F", 1445, 1600).unwrap(),
        MeetingSpec::for_event("SU", 1200, 1330).unwrap(),
        MeetingSpec::for_event("W", 1000, 1000).unwrap(),
        MeetingSpec::for_event("W", 900, 1000).unwrap(),
        MeetingSpec::arranged(),
    ];
    for a in &specs {
        for b in &specs {
            assert_eq!(a.conflicts_with(b), b.conflicts_with(a), "{a} vs {b}");
        }
    }
}
