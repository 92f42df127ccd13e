//! Assorted small helpers shared by the reporter and the renderer.

/// Format a weight or aggregate value for display.
///
/// Mathematically integral values collapse to their integer form (`4.0`
/// becomes `4`, `-0.0` becomes `0`); everything else uses the shortest
/// representation that round-trips, so `2.5` stays `2.5`. Infinities print
/// as `inf`/`-inf`.
pub fn fmt_number(value: f64) -> String {
    if value == 0.0 {
        "0".to_owned()
    } else if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::fmt_number;

    #[test]
    fn integral_values_collapse() {
        assert_eq!(fmt_number(4.0), "4");
        assert_eq!(fmt_number(-7.0), "-7");
        assert_eq!(fmt_number(0.0), "0");
        assert_eq!(fmt_number(-0.0), "0");
        assert_eq!(fmt_number(120.0), "120");
    }

    #[test]
    fn fractional_values_keep_shortest_form() {
        assert_eq!(fmt_number(2.5), "2.5");
        assert_eq!(fmt_number(0.1), "0.1");
        assert_eq!(fmt_number(-3.25), "-3.25");
    }

    #[test]
    fn non_finite_values_spelled_out() {
        assert_eq!(fmt_number(f64::INFINITY), "inf");
        assert_eq!(fmt_number(f64::NEG_INFINITY), "-inf");
        assert_eq!(fmt_number(f64::NAN), "NaN");
    }

    #[test]
    fn large_integral_values_print_all_digits() {
        assert_eq!(fmt_number(1.0e6), "1000000");
    }
}
