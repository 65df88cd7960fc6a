use backoffice_types::{WeekSchedule, Weekday};
use pretty_assertions::assert_eq;
use std::str::FromStr;

// ── Weekday ───────────────────────────────────────────────────────

#[test]
fn all_days_in_week_order() {
    let names: Vec<&str> = Weekday::ALL.iter().map(|d| d.name()).collect();
    assert_eq!(
        names,
        vec![
            "monday",
            "tuesday",
            "wednesday",
            "thursday",
            "friday",
            "saturday",
            "sunday"
        ]
    );
}

#[test]
fn from_str_roundtrip() {
    for day in Weekday::ALL {
        assert_eq!(Weekday::from_str(day.name()).unwrap(), day);
    }
}

#[test]
fn from_str_unknown() {
    assert!(Weekday::from_str("caturday").is_err());
}

#[test]
fn serde_lowercase() {
    assert_eq!(serde_json::to_string(&Weekday::Friday).unwrap(), "\"friday\"");
}

// ── WeekSchedule ──────────────────────────────────────────────────

#[test]
fn from_fn_covers_every_day() {
    let schedule = WeekSchedule::from_fn(|d| d.name().len());
    assert_eq!(*schedule.get(Weekday::Monday), 6);
    assert_eq!(*schedule.get(Weekday::Wednesday), 9);
}

#[test]
fn set_replaces_and_returns_old() {
    let mut schedule: WeekSchedule<bool> = WeekSchedule::default();
    let old = schedule.set(Weekday::Sunday, true);
    assert!(!old);
    assert!(*schedule.get(Weekday::Sunday));
}

#[test]
fn iter_in_week_order() {
    let schedule = WeekSchedule::from_fn(|d| d as u8);
    let days: Vec<Weekday> = schedule.iter().map(|(d, _)| d).collect();
    assert_eq!(days, Weekday::ALL.to_vec());
}

#[test]
fn serde_object_keyed_by_day_name() {
    let schedule = WeekSchedule::from_fn(|d| d as u8);
    let json = serde_json::to_value(&schedule).unwrap();
    assert_eq!(json["monday"], 0);
    assert_eq!(json["sunday"], 6);

    let back: WeekSchedule<u8> = serde_json::from_value(json).unwrap();
    assert_eq!(back, schedule);
}

#[test]
fn deserialize_missing_days_default() {
    let back: WeekSchedule<u8> = serde_json::from_str(r#"{"tuesday": 5}"#).unwrap();
    assert_eq!(*back.get(Weekday::Tuesday), 5);
    assert_eq!(*back.get(Weekday::Monday), 0);
}

#[test]
fn deserialize_unknown_day_fails() {
    let result: Result<WeekSchedule<u8>, _> = serde_json::from_str(r#"{"caturday": 1}"#);
    assert!(result.is_err());
}
