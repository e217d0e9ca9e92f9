//! Pentad scenario tests.

use chrono::{NaiveDate, TimeDelta};
use kalendar::{KalendarError, Pentad};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn base() -> Pentad {
    Pentad::new(2022, 1).unwrap()
}

#[test]
fn addition() {
    let p = base();
    assert_eq!(p + 1, Pentad::new(2022, 2).unwrap());
    assert_eq!(p + 72, Pentad::new(2022, 73).unwrap());
    assert_eq!(p + 75, Pentad::new(2023, 3).unwrap());
    assert_eq!(p + TimeDelta::days(1), ymd(2022, 1, 2));
    assert_eq!(Pentad::new(2021, 73).unwrap() + 1, p);
}

#[test]
fn subtraction() {
    let p = base();
    assert_eq!(p - 1, Pentad::new(2021, 73).unwrap());
    assert_eq!(p - 75, Pentad::new(2020, 72).unwrap());
    assert_eq!(p - Pentad::new(2021, 71).unwrap(), 3);
    assert_eq!(p - ymd(2021, 12, 20), TimeDelta::days(12));
}

#[test]
fn to_date() {
    assert_eq!(base().to_date(), ymd(2022, 1, 1));
    assert_eq!(Pentad::new(2008, 32).unwrap().to_date(), ymd(2008, 6, 5));
}

#[test]
fn constructors() {
    let p = base();
    assert_eq!(Pentad::from_iso_calendar(2022, 1, 3).unwrap(), p);
    assert_eq!(Pentad::from_iso_format("2022-01-03").unwrap(), p);
    assert_eq!(Pentad::from_ordinal(738_157).unwrap(), p);
    assert_eq!(Pentad::from_date(ymd(2022, 1, 5)), p);

    let dt = ymd(2022, 1, 1).and_hms_opt(0, 0, 0).unwrap();
    assert_eq!(Pentad::from_timestamp(dt.and_utc().timestamp()).unwrap(), p);
    assert_eq!(Pentad::from_datetime(dt), p);
}

#[test]
fn constructor_errors() {
    assert_eq!(
        Pentad::new(2022, 0).unwrap_err(),
        KalendarError::InvalidPentad { pentad: 0 }
    );
    assert_eq!(
        Pentad::new(2011, 75).unwrap_err(),
        KalendarError::InvalidPentad { pentad: 75 }
    );
    assert_eq!(
        Pentad::new(2011, 74).unwrap_err(),
        KalendarError::InvalidPentad { pentad: 74 }
    );
    assert!(matches!(
        Pentad::from_iso_format("2022/01/01"),
        Err(KalendarError::InvalidIsoDate(_))
    ));
}

#[test]
fn printing() {
    assert_eq!(format!("{}\n", base()), "2022 P1\n");
}

#[test]
fn debug_form_round_trip() {
    let p = Pentad::new(2012, 12).unwrap();
    assert_eq!(format!("{p:?}").parse::<Pentad>().unwrap(), p);
}

#[test]
fn leap_years() {
    let p = Pentad::new(2012, 12).unwrap();
    assert_eq!(p.to_date(), ymd(2012, 2, 25));
    assert_eq!((p + 1).to_date(), ymd(2012, 3, 2));
    assert_eq!(Pentad::from_iso_format("2012-02-29").unwrap(), p);
    assert_eq!(Pentad::from_iso_format("2012-12-27").unwrap().pentad(), 73);
}

#[test]
fn leap_day_does_not_shift_numbering() {
    for pentad in 13..=Pentad::PER_YEAR {
        let leap = Pentad::new(2012, pentad).unwrap();
        assert_eq!(Pentad::from_date(leap.to_date()), leap);
        assert_eq!(Pentad::from_date(leap.to_date() - TimeDelta::days(1)), leap - 1);
    }
}

#[test]
fn arithmetic_across_leap_february() {
    let p = Pentad::new(2012, 11).unwrap();
    assert_eq!((p + 2).to_date(), ymd(2012, 3, 2));
    assert_eq!(Pentad::new(2012, 13).unwrap() - p, 2);
    assert_eq!(Pentad::new(2013, 12).unwrap() - Pentad::new(2012, 12).unwrap(), 73);
}

#[test]
fn compares_like_its_first_day() {
    let p = Pentad::new(2012, 12).unwrap();
    assert_eq!(p, ymd(2012, 2, 25));
    assert!(p < ymd(2012, 2, 29));
    assert!(ymd(2012, 2, 24) < p);
}
