//! Laws of parallel and sequential active composition, checked by sampling

use kairos_core::{Active, Era, Fixed, Floating, Sum};
use kairos_test::{arb_finite_floating_era, arb_fixed_era, arb_time, LawConfig};
use proptest::prelude::*;

const RANGE: i32 = 50;

/// Linear function with a distinct slope per operand
fn ramp(era: Era<f64>, slope: f64) -> Active<f64, Sum<f64>, Fixed> {
    Active::new(era, move |t: f64| Sum(slope * t)).unwrap()
}

fn tagged(era: Era<f64>, tag: u8) -> Active<f64, (u8, f64), Floating> {
    Active::new(era, move |t: f64| (tag, t)).unwrap()
}

proptest! {
    #![proptest_config(LawConfig::default().proptest())]

    #[test]
    fn parallel_associates(
        a in arb_fixed_era(RANGE),
        b in arb_fixed_era(RANGE),
        c in arb_fixed_era(RANGE),
        t in arb_time(RANGE),
    ) {
        let (x, y, z) = (ramp(a, 1.0), ramp(b, 10.0), ramp(c, 100.0));
        let left = x.parallel(&y).parallel(&z);
        let right = x.parallel(&y.parallel(&z));
        prop_assert_eq!(left.era(), right.era());
        prop_assert_eq!(left.sample_at(t), right.sample_at(t));
    }

    #[test]
    fn parallel_identity_is_neutral(a in arb_fixed_era(RANGE), t in arb_time(RANGE)) {
        let x = ramp(a, 3.0);
        let unit = Active::parallel_identity();
        let with_unit = x.parallel(&unit);
        prop_assert_eq!(with_unit.era(), x.era());
        prop_assert_eq!(unit.parallel(&x).sample_at(t), x.sample_at(t));
    }

    #[test]
    fn apply_narrows_to_intersection(a in arb_fixed_era(RANGE), b in arb_fixed_era(RANGE)) {
        let f = Active::<f64, _, Fixed>::new(a, |t: f64| move |x: f64| x - t).unwrap();
        let v = Active::<f64, _, Fixed>::new(b, |t: f64| t).unwrap();
        let applied: Active<f64, f64> = f.apply(&v);
        prop_assert_eq!(*applied.era(), a.intersect(&b).unwrap());
    }

    #[test]
    fn shift_is_group_action(
        a in arb_fixed_era(RANGE),
        d1 in arb_time(RANGE),
        d2 in arb_time(RANGE),
        t in arb_time(3 * RANGE),
    ) {
        let x = ramp(a, 2.0);
        let still = x.shift(0.0);
        prop_assert_eq!(still.era(), x.era());
        prop_assert_eq!(still.sample_at(t), x.sample_at(t));

        let twice = x.shift(d2).shift(d1);
        let once = x.shift(d1 + d2);
        prop_assert_eq!(twice.era(), once.era());
        prop_assert_eq!(twice.sample_at(t), once.sample_at(t));
    }

    #[test]
    fn shift_moves_observations(a in arb_fixed_era(RANGE), d in arb_time(RANGE), t in arb_time(RANGE)) {
        let x = ramp(a, 5.0);
        let moved = x.shift(d);
        prop_assert_eq!(moved.sample_at(t + d), x.sample_at(t));
        prop_assert_eq!(moved.era().contains(t + d), x.era().contains(t));
    }

    #[test]
    fn sequential_join_picks_closed_side(
        a in arb_finite_floating_era(RANGE, false, false),
        b in arb_finite_floating_era(RANGE, true, false),
    ) {
        let joined = tagged(a, 1).sequential(&tagged(b, 2)).unwrap();
        let deadline = a.end().unwrap();

        // Closed upper bound on the first side keeps the deadline
        prop_assert_eq!(joined.sample_at(deadline).0, 1);
        if b.duration().unwrap() > 0.0 {
            let after = joined.sample_at(deadline + 0.5);
            prop_assert_eq!(after.0, 2);
            prop_assert_eq!(after.1, b.start().unwrap() + 0.5);
        }
    }

    #[test]
    fn sequential_join_hands_over_on_open(
        a in arb_finite_floating_era(RANGE, false, true),
        b in arb_finite_floating_era(RANGE, false, false),
    ) {
        let joined = tagged(a, 1).sequential(&tagged(b, 2)).unwrap();
        let deadline = a.end().unwrap();

        prop_assert_eq!(joined.sample_at(deadline), (2, b.start().unwrap()));
        if a.duration().unwrap() > 0.0 {
            prop_assert_eq!(joined.sample_at(deadline - 0.5).0, 1);
        }
    }

    #[test]
    fn sequential_associates(
        a in arb_finite_floating_era(RANGE, false, true),
        b in arb_finite_floating_era(RANGE, false, false),
        c in arb_finite_floating_era(RANGE, true, false),
        t in arb_time(4 * RANGE),
    ) {
        let (x, y, z) = (tagged(a, 1), tagged(b, 2), tagged(c, 3));
        let left = x.sequential(&y).unwrap().sequential(&z).unwrap();
        let right = x.sequential(&y.sequential(&z).unwrap()).unwrap();
        prop_assert_eq!(left.era(), right.era());
        if left.era().contains(t) {
            prop_assert_eq!(left.sample_at(t), right.sample_at(t));
        }
    }
}

#[test]
fn apply_example_narrows() {
    let f = Active::<f64, _, Fixed>::new(Era::closed(0.0, 10.0), |_: f64| |x: f64| x + 1.0).unwrap();
    let v = Active::<f64, _, Fixed>::new(Era::closed(5.0, 15.0), |t: f64| t).unwrap();
    let applied: Active<f64, f64> = f.apply(&v);
    assert_eq!(applied.era(), &Era::closed(5.0, 10.0));
    assert_eq!(applied.sample_at(7.0), 8.0);
}
