// fraction.rs
// Exact rational rendering of force values via continued-fraction convergents

use num::rational::Ratio;
use num::Zero;

use crate::config;

/// Closest rational to `value` with denominator at most `max_denominator`.
///
/// Continued-fraction expansion, keeping the last convergent whose
/// denominator fits the cap and comparing it against its best
/// semiconvergent (the same candidate pair CPython's
/// `Fraction.limit_denominator` considers).
pub fn limit_denominator(value: f64, max_denominator: i64) -> Ratio<i64> {
    assert!(max_denominator >= 1);
    if !value.is_finite() {
        return Ratio::zero();
    }
    let negative = value < 0.0;
    let x = value.abs();

    let (mut p0, mut q0, mut p1, mut q1) = (0i64, 1i64, 1i64, 0i64);
    let mut frac = x;
    let mut exact = false;
    loop {
        let a = frac.floor() as i64;
        let p2 = match a.checked_mul(p1).and_then(|v| v.checked_add(p0)) {
            Some(v) => v,
            None => break,
        };
        let q2 = match a.checked_mul(q1).and_then(|v| v.checked_add(q0)) {
            Some(v) => v,
            None => break,
        };
        if q2 > max_denominator {
            break;
        }
        p0 = p1;
        q0 = q1;
        p1 = p2;
        q1 = q2;
        let rem = frac - a as f64;
        if rem < 1.0e-12 {
            exact = true;
            break;
        }
        frac = 1.0 / rem;
    }

    // The loop always accepts at least one convergent (the integer part),
    // so q1 >= 1 here.
    let result = if exact {
        Ratio::new(p1, q1)
    } else {
        let k = (max_denominator - q0) / q1;
        let semiconvergent = Ratio::new(k * p1 + p0, k * q1 + q0);
        let convergent = Ratio::new(p1, q1);
        let err = |r: &Ratio<i64>| ((*r.numer() as f64) / (*r.denom() as f64) - x).abs();
        if err(&convergent) <= err(&semiconvergent) {
            convergent
        } else {
            semiconvergent
        }
    };
    if negative {
        -result
    } else {
        result
    }
}

/// Label text for a net force value, e.g. "0.25F", "5/9F" or "-2F".
/// The minus sign is shown only when `show_negative` is set.
pub fn force_label(force: f32, show_fraction: bool, show_negative: bool) -> String {
    let sign = if force < 0.0 && show_negative { "-" } else { "" };
    if show_fraction {
        let ratio = limit_denominator(force as f64, config::FRACTION_MAX_DENOMINATOR);
        let numer = ratio.numer().abs();
        let denom = *ratio.denom();
        if denom == 1 {
            format!("{}{}F", sign, numer)
        } else {
            format!("{}{}/{}F", sign, numer, denom)
        }
    } else {
        format!("{}{:.2}F", sign, force.abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_fractions_come_out_exact() {
        assert_eq!(limit_denominator(0.5, 10_000), Ratio::new(1, 2));
        assert_eq!(limit_denominator(2.0, 10_000), Ratio::new(2, 1));
        assert_eq!(limit_denominator(-0.75, 10_000), Ratio::new(-3, 4));
    }

    #[test]
    fn repeating_decimal_recovers_the_rational() {
        assert_eq!(limit_denominator(1.0 / 3.0, 10), Ratio::new(1, 3));
        let noisy = (5.0f32 / 9.0) as f64;
        assert_eq!(limit_denominator(noisy, 10_000), Ratio::new(5, 9));
    }

    #[test]
    fn pi_under_a_small_cap_gives_the_classic_approximant() {
        assert_eq!(
            limit_denominator(std::f64::consts::PI, 1000),
            Ratio::new(355, 113)
        );
    }

    #[test]
    fn non_finite_input_collapses_to_zero() {
        assert_eq!(limit_denominator(f64::NAN, 100), Ratio::new(0, 1));
        assert_eq!(limit_denominator(f64::INFINITY, 100), Ratio::new(0, 1));
    }

    #[test]
    fn labels_follow_the_display_toggles() {
        assert_eq!(force_label(0.5, true, false), "1/2F");
        assert_eq!(force_label(-0.5, true, true), "-1/2F");
        assert_eq!(force_label(-0.5, true, false), "1/2F");
        assert_eq!(force_label(2.0, true, false), "2F");
        assert_eq!(force_label(2.0 / 3.0, false, false), "0.67F");
        assert_eq!(force_label(-1.0, false, true), "-1.00F");
    }

    #[test]
    fn typical_net_force_sum_stays_exact() {
        // Charges at -1 and 2 acting on a unit charge at 0: 1/1 + 1/4
        let value = 1.0 + 0.25;
        assert_eq!(limit_denominator(value, 10_000), Ratio::new(5, 4));
        assert_eq!(force_label(1.25, true, false), "5/4F");
    }
}
