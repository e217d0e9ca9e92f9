//! Randomized and exhaustive checks of the period invariants.

use chrono::{Datelike, NaiveDate, TimeDelta};
use kalendar::{Dekad, Pentad};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const N_SAMPLES: usize = 2_000;

fn random_dekad(rng: &mut StdRng) -> Dekad {
    Dekad::new(rng.random_range(-3000..5000), rng.random_range(1..=36)).unwrap()
}

fn random_pentad(rng: &mut StdRng) -> Pentad {
    Pentad::new(rng.random_range(-3000..5000), rng.random_range(1..=73)).unwrap()
}

#[test]
fn dekad_date_round_trip() {
    let mut rng = StdRng::seed_from_u64(0);
    for _ in 0..N_SAMPLES {
        let d = random_dekad(&mut rng);
        assert_eq!(Dekad::from_date(d.to_date()), d, "round trip failed for {d:?}");
        assert_eq!(Dekad::from_parts(d.to_parts()).unwrap(), d);
        assert_eq!(format!("{d:?}").parse::<Dekad>().unwrap(), d);
        assert_eq!(d.to_string().parse::<Dekad>().unwrap(), d);
    }
}

#[test]
fn pentad_date_round_trip() {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..N_SAMPLES {
        let p = random_pentad(&mut rng);
        assert_eq!(Pentad::from_date(p.to_date()), p, "round trip failed for {p:?}");
        assert_eq!(Pentad::from_parts(p.to_parts()).unwrap(), p);
        assert_eq!(format!("{p:?}").parse::<Pentad>().unwrap(), p);
        assert_eq!(p.to_string().parse::<Pentad>().unwrap(), p);
    }
}

#[test]
fn dekad_additivity_and_inverse() {
    let mut rng = StdRng::seed_from_u64(2);
    for _ in 0..N_SAMPLES {
        let d = random_dekad(&mut rng);
        let a: i64 = rng.random_range(-5000..5000);
        let b: i64 = rng.random_range(-5000..5000);
        assert_eq!((d + a) + b, d + (a + b), "additivity failed for {d:?}, {a}, {b}");
        assert_eq!((d + a) - a, d, "inverse failed for {d:?}, {a}");
        assert_eq!((d + a) - d, a, "difference failed for {d:?}, {a}");
        assert_eq!(d - a, d + -a);
    }
}

#[test]
fn pentad_additivity_and_inverse() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..N_SAMPLES {
        let p = random_pentad(&mut rng);
        let a: i64 = rng.random_range(-10_000..10_000);
        let b: i64 = rng.random_range(-10_000..10_000);
        assert_eq!((p + a) + b, p + (a + b), "additivity failed for {p:?}, {a}, {b}");
        assert_eq!((p + a) - a, p, "inverse failed for {p:?}, {a}");
        assert_eq!((p + a) - p, a, "difference failed for {p:?}, {a}");
        assert_eq!(p - a, p + -a);
    }
}

#[test]
fn difference_is_unique_offset() {
    let mut rng = StdRng::seed_from_u64(4);
    for _ in 0..N_SAMPLES {
        let (x, y) = (random_dekad(&mut rng), random_dekad(&mut rng));
        assert_eq!(y + (x - y), x);
        let (x, y) = (random_pentad(&mut rng), random_pentad(&mut rng));
        assert_eq!(y + (x - y), x);
    }
}

#[test]
fn stepping_walks_every_index_in_order() {
    let mut d = Dekad::new(2011, 1).unwrap();
    let mut p = Pentad::new(2011, 1).unwrap();
    for year in 2011..=2013 {
        for index in 1..=Dekad::PER_YEAR {
            assert_eq!(d.to_parts(), (year, index));
            let next = d + 1;
            assert!(next > d);
            d = next;
        }
        for index in 1..=Pentad::PER_YEAR {
            assert_eq!(p.to_parts(), (year, index));
            let next = p + 1;
            assert!(next > p);
            p = next;
        }
    }
}

/// Every day of a leap and a common year lies inside the period it maps to.
#[test]
fn every_day_falls_in_its_period() {
    for year in [2011, 2012, 1900, 2000] {
        let mut day = NaiveDate::from_ymd_opt(year, 1, 1).unwrap();
        while day.year() == year {
            let d = Dekad::from_date(day);
            assert!(d.to_date() <= day && day < (d + 1).to_date(), "{day} outside {d:?}");
            let p = Pentad::from_date(day);
            assert!(p.to_date() <= day && day < (p + 1).to_date(), "{day} outside {p:?}");
            day += TimeDelta::days(1);
        }
    }
}

#[test]
fn pentad_widths() {
    for year in [2011, 2012] {
        let total: i64 = (1..=Pentad::PER_YEAR)
            .map(|i| {
                let p = Pentad::new(year, i).unwrap();
                ((p + 1) - p.to_date()).num_days()
            })
            .sum();
        let expected = if year == 2012 { 366 } else { 365 };
        assert_eq!(total, expected);
        for i in 1..=Pentad::PER_YEAR {
            let p = Pentad::new(year, i).unwrap();
            let width = ((p + 1) - p.to_date()).num_days();
            let expected = if year == 2012 && i == 12 { 6 } else { 5 };
            assert_eq!(width, expected, "pentad {i} of {year}");
        }
    }
}

#[test]
fn ordering_matches_dates() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..N_SAMPLES {
        let (x, y) = (random_pentad(&mut rng), random_pentad(&mut rng));
        assert_eq!(x.cmp(&y), x.to_date().cmp(&y.to_date()));
        assert_eq!(x == y, x.to_date() == y.to_date());
        let (x, y) = (random_dekad(&mut rng), random_dekad(&mut rng));
        assert_eq!(x.cmp(&y), x.to_date().cmp(&y.to_date()));
    }
}
