//! Integration-level smoke tests for the `qdim` facade crate.

use qdim::*;

use approx::{assert_abs_diff_eq, assert_relative_eq};

#[test]
fn smoke_test_length() {
    let km = Kilometres::new(1.0_f64);
    let m: Metres = km.to();
    assert_abs_diff_eq!(m.count(), 1000.0, epsilon = 1e-9);
}

#[test]
fn smoke_test_time() {
    let day = Days::<i64>::new(1);
    let sec: Seconds<i64> = day.to();
    assert_eq!(sec.count(), 86_400);
}

#[test]
fn smoke_test_mass() {
    let lb = Pounds::new(1.0_f64);
    assert_relative_eq!(lb.to::<Gram>().count(), 453.592_37, max_relative = 1e-12);
}

#[test]
fn smoke_test_volume() {
    let total = Litres::<i32>::new(2) + Millilitres::<i32>::new(2);
    assert!(total == CubicCentimetres::<i32>::new(2002));
}

#[test]
fn smoke_test_energy() {
    let e = KilowattHours::new(1.0_f64);
    assert_relative_eq!(e.to::<Joule>().count(), 3.6e6, max_relative = 1e-12);
}

#[test]
fn smoke_test_unitless() {
    let x = Unitless::new(0.25_f64);
    assert_eq!(x.to::<Percent>().count(), 25.0);
    assert!(x + 0.75 == 1.0);
}

// ─────────────────────────────────────────────────────────────────────────────
// Worked examples
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn metres_equal_kilometres() {
    assert!(Metres::<i32>::new(1000) == Kilometres::<i32>::new(1));
    assert!(Kilometres::<i32>::new(1) == Metres::<i32>::new(1000));
    assert!(Metres::<i32>::new(999) < Kilometres::<i32>::new(1));
}

#[test]
fn integer_remainder() {
    let r = Metres::<i32>::new(7) % Metres::<i32>::new(2);
    assert_eq!(r.count(), 1);
}

#[test]
fn speed_times_time() {
    let d = MetresPerSecond::<i32>::new(10) * Hours::<i32>::new(2);
    assert_eq!(d.count(), 20);
    assert_eq!(d.resolved_unit().ratio(), Ratio::with_exp(36, 1, 2));
    assert_eq!(d.resolved_unit().exponents(), <Length as Dimension>::EXPONENTS);
    assert_eq!(d.to::<Metre>().count(), 72_000);
    assert_eq!(d.to_string(), "20 [36×10^2] m");
}

#[test]
fn cast_kilometres_to_metres() {
    let m: Metres<i32> = quantity_cast(Kilometres::<i32>::new(2));
    assert_eq!(m.count(), 2000);
}

#[test]
fn dimensionless_ratio_as_percent() {
    let ratio = Unitless::new(50.0_f64) / Unitless::new(100.0_f64);
    assert_eq!(ratio.to::<Percent>().count(), 50.0);
    assert_eq!(ratio.to::<One>().count(), 0.5);
    assert_eq!(ratio.downcast::<One>().count(), 0.5);
}

// ─────────────────────────────────────────────────────────────────────────────
// Conversions
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn round_trip_through_a_third_unit() {
    let direct = Miles::new(3.0_f64).to::<Metre>();
    let via_feet = Miles::new(3.0_f64).to::<Foot>().to::<Metre>();
    assert_relative_eq!(direct.count(), via_feet.count(), max_relative = 1e-12);
}

#[test]
fn implicit_widening_is_lossless() {
    let m: Metres<i64> = Kilometres::<i32>::new(3).into();
    assert_eq!(m.count(), 3000);

    let x = Metres::<i32>::new(5).into_rep::<f64>();
    assert_eq!(x.count(), 5.0);
}

#[test]
fn casts_truncate_on_request() {
    assert_eq!(Metres::new(2.75_f64).cast_rep::<i32>().count(), 2);
    assert_eq!(Seconds::<i32>::new(59).cast::<Minute>().count(), 0);
    let h: Hours<i32> = Minutes::<f64>::new(150.0).cast_to();
    assert_eq!(h.count(), 2);
}

#[test]
fn structural_result_casts_into_named_dimension() {
    let a = Metres::new(3.0_f64) * Metres::new(4.0_f64);
    assert_eq!(a.to_string(), "12 m²");
    let named = a.cast_dimension::<Area>();
    assert_eq!(named.count(), 12.0);
    assert_relative_eq!(named.downcast::<SquareMetre>().to::<Hectare>().count(), 0.0012, max_relative = 1e-12);
}

// ─────────────────────────────────────────────────────────────────────────────
// Arithmetic
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn mixed_unit_sum_uses_the_finer_unit() {
    let d = Kilometres::<i32>::new(1) + Metres::<i32>::new(250);
    assert_eq!(d.count(), 1250);
    assert_eq!(d.to_string(), "1250 m");
}

#[test]
fn squared_metres_equal_square_metres() {
    let a = Metres::<f64>::new(2.0) * Metres::<f64>::new(3.0);
    assert!(a == SquareMetres::<f64>::new(6.0));
    assert!(a <= SquareMetres::<f64>::new(6.0));
    assert!(SquareMetres::<f64>::new(7.0) > a);
}

#[test]
fn speed_times_time_adds_to_a_length() {
    let d = MetresPerSecond::<i32>::new(10) * Hours::<i32>::new(2) + Metres::<i32>::new(5);
    assert_eq!(d.count(), 72_005);
    assert_eq!(d.to_string(), "72005 m");

    let mut total = Kilometres::<f64>::new(1.0);
    total += KilometresPerHour::<f64>::new(60.0) * Hours::<f64>::new(0.5);
    assert_eq!(total.count(), 31.0);
}

#[test]
fn length_ratio_equals_percent() {
    let ratio = Metres::<f64>::new(1.0) / Metres::<f64>::new(2.0);
    assert!(ratio == Percentages::<f64>::new(50.0));
    assert_eq!((ratio + Percentages::<f64>::new(10.0)).to_string(), "60 %");
}

#[test]
fn bare_numbers_add_to_unitless() {
    let x = Unitless::new(1.23) + 1.23;
    assert_relative_eq!(x.count(), 2.46);
    assert!(Unitless::<i32>::new(4) - 1 == 3);
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "attempt to rescale with overflow")]
fn implicit_rescale_overflow_panics() {
    let _ = Kilometres::<i16>::new(100) + Metres::<i16>::new(1);
}

#[test]
fn representations_promote() {
    let d = Metres::<i32>::new(1) + Metres::<f64>::new(0.5);
    assert_eq!(d.count(), 1.5);

    let w = Seconds::<i32>::new(2) + Seconds::<i64>::new(3);
    assert_eq!(w.count(), 5_i64);
}

#[test]
fn compound_assignment() {
    let mut t = Seconds::<i64>::new(10);
    t += Minutes::<i64>::new(1);
    t -= Seconds::<i32>::new(5);
    t *= 2_i64;
    t /= 5_i64;
    t %= 7_i64;
    assert_eq!(t.count(), 5);
}

#[test]
fn energy_is_force_times_length() {
    let w = (Newtons::new(10.0_f64) * Metres::new(3.0_f64)).downcast::<Joule>();
    assert_eq!(w.count(), 30.0);
    let p = (w / Seconds::new(2.0_f64)).downcast::<Watt>();
    assert_eq!(p.to_string(), "15 W");
}

#[test]
fn frequency_is_inverse_time() {
    let f = 1.0_f64 / Seconds::new(0.5_f64);
    assert_eq!(f.downcast::<Hertz>().count(), 2.0);
    assert_eq!(f.to_string(), "2 Hz");
}

#[test]
fn increments_and_extremes() {
    let mut n = Metres::<i32>::new(1);
    assert_eq!(n.post_increment().count(), 1);
    assert_eq!(n.pre_increment().count(), 3);
    assert_eq!(Metres::<u8>::max_value().count(), u8::MAX);
    assert_eq!(Metres::<i8>::min_value().count(), i8::MIN);
    assert_eq!(Metres::<i32>::zero().count(), 0);
}

// ─────────────────────────────────────────────────────────────────────────────
// Registry
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn registry_names_products() {
    let v = Decimetres::new(1.0_f64).pow::<3>();
    assert_eq!(v.resolved_unit().symbol(), Some("L"));
    assert!(registry::find_symbol("km/h").is_some_and(|e| e.is::<KilometrePerHour>()));
    assert!(registry::lookup_dimension(<Energy as Dimension>::EXPONENTS).is_some());
}

#[cfg(feature = "serde")]
mod serde_support {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Leg {
        #[serde(with = "qdim::serde_with_unit")]
        distance: Kilometres,
        duration: Minutes<i32>,
    }

    #[test]
    fn serde_round_trip() {
        let leg = Leg {
            distance: Kilometres::new(12.5_f64),
            duration: Minutes::<i32>::new(40),
        };
        let json = serde_json::to_string(&leg).unwrap();
        assert_eq!(json, r#"{"distance":{"value":12.5,"unit":"km"},"duration":40}"#);
        let back: Leg = serde_json::from_str(&json).unwrap();
        assert_eq!(back, leg);
    }

    #[test]
    fn serde_rejects_wrong_unit() {
        let json = r#"{"distance":{"value":1.0,"unit":"m"},"duration":1}"#;
        let err = serde_json::from_str::<Leg>(json).unwrap_err();
        assert!(err.to_string().contains("unit mismatch"));
    }
}
