use chrono::NaiveDate;
use proptest::prelude::*;

use moon_luck::calendar::{build_month_grid, expand_range, GRID_CELLS};
use moon_luck::phase::*;
use moon_luck::types::{LunarConfig, PhaseKind};

fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (1900i32..2200, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

fn buckets_containing(phase: f64) -> Vec<PhaseKind> {
    let ranges: [(f64, f64, PhaseKind); 9] = [
        (0.0, 0.0625, PhaseKind::NewMoon),
        (0.9375, 1.0, PhaseKind::NewMoon),
        (0.0625, 0.1875, PhaseKind::WaxingCrescent),
        (0.1875, 0.3125, PhaseKind::FirstQuarter),
        (0.3125, 0.4375, PhaseKind::WaxingGibbous),
        (0.4375, 0.5625, PhaseKind::FullMoon),
        (0.5625, 0.6875, PhaseKind::WaningGibbous),
        (0.6875, 0.8125, PhaseKind::ThirdQuarter),
        (0.8125, 0.9375, PhaseKind::WaningCrescent),
    ];
    ranges
        .iter()
        .filter(|(lo, hi, _)| phase >= *lo && phase < *hi)
        .map(|&(_, _, kind)| kind)
        .collect()
}

proptest! {
    #[test]
    fn phase_repeats_every_synodic_month(days in -50_000.0f64..50_000.0) {
        let a = phase_fraction(days, SYNODIC_MONTH_DAYS);
        let b = phase_fraction(days + SYNODIC_MONTH_DAYS, SYNODIC_MONTH_DAYS);
        // 0 and just-under-1 are the same point on the cycle
        let diff = (a - b).abs();
        prop_assert!(diff.min(1.0 - diff) < 1e-9, "a={} b={}", a, b);
    }

    #[test]
    fn phase_stays_in_unit_interval(days in proptest::num::f64::NORMAL) {
        let p = phase_fraction(days, SYNODIC_MONTH_DAYS);
        prop_assert!((0.0..1.0).contains(&p), "days={} phase={}", days, p);
    }

    #[test]
    fn every_phase_hits_exactly_one_bucket(phase in 0.0f64..1.0) {
        let matches = buckets_containing(phase);
        prop_assert_eq!(matches.len(), 1, "phase={}", phase);
        prop_assert_eq!(classify(phase), matches[0], "phase={}", phase);
    }

    #[test]
    fn illumination_is_symmetric(phase in 0.0f64..1.0) {
        prop_assert_eq!(illumination(phase), illumination(1.0 - phase), "phase={}", phase);
    }

    #[test]
    fn equal_dates_give_equal_phases(date in date_strategy()) {
        let config = LunarConfig::default();
        prop_assert_eq!(moon_phase(&config, date), moon_phase(&config, date));
    }

    #[test]
    fn range_has_requested_length(date in date_strategy(), count in 0i64..120) {
        let entries = expand_range(&LunarConfig::default(), date, count).unwrap();
        prop_assert_eq!(entries.len() as i64, count);
        if let Some(first) = entries.first() {
            prop_assert_eq!(first.date, date);
        }
    }

    #[test]
    fn grid_is_always_rectangular(year in -5000i32..5000, month in 1u32..=12) {
        let grid = build_month_grid(&LunarConfig::default(), year, month).unwrap();
        prop_assert_eq!(grid.cells().len(), GRID_CELLS);
    }
}
