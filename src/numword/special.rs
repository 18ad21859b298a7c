//! Fixed phrases for the doubles that bypass canonical rendering.

/// The smallest positive `f64`, i.e. the least subnormal. Not to be confused with
/// [f64::EPSILON], the machine epsilon, which is an ordinary value here.
pub(crate) const SMALLEST_POSITIVE: f64 = 4.94065645841246544177e-324;

/// The fixed phrase for `num`, if it has one.
///
/// NaN fails `==` against every value including itself, so this is an ordered predicate
/// chain rather than a value-keyed lookup: the NaN test comes first, and the remaining
/// keys are matched by exact numeric equality. A value merely close to a key never
/// matches.
pub(crate) fn special_phrase(num: f64) -> Option<&'static str> {
    if num.is_nan() {
        Some("Not a Number")
    } else if num == f64::NEG_INFINITY {
        Some("Negative Infinity")
    } else if num == f64::INFINITY {
        Some("Positive Infinity")
    } else if num == SMALLEST_POSITIVE {
        Some("Double Epsilon")
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smallest_positive_is_the_least_subnormal() {
        assert_eq!(SMALLEST_POSITIVE, f64::from_bits(1));
    }

    #[test]
    fn nan() {
        assert_eq!(special_phrase(f64::NAN), Some("Not a Number"));
        assert_eq!(special_phrase(-f64::NAN), Some("Not a Number"));
    }

    #[test]
    fn infinities() {
        assert_eq!(special_phrase(f64::INFINITY), Some("Positive Infinity"));
        assert_eq!(special_phrase(f64::NEG_INFINITY), Some("Negative Infinity"));
        assert_eq!(special_phrase(f64::MAX), None);
        assert_eq!(special_phrase(f64::MIN), None);
    }

    #[test]
    fn smallest_positive_matches_exactly() {
        assert_eq!(special_phrase(SMALLEST_POSITIVE), Some("Double Epsilon"));
        assert_eq!(special_phrase(-SMALLEST_POSITIVE), None);
        assert_eq!(special_phrase(0.0), None);
        assert_eq!(special_phrase(-0.0), None);
        assert_eq!(special_phrase(0.0000001), None);
        assert_eq!(special_phrase(1e-323), None);
        assert_eq!(special_phrase(f64::MIN_POSITIVE), None);
        assert_eq!(special_phrase(f64::EPSILON), None);
    }
}
