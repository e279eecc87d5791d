//! Types that can be drawn uniformly from a half-open range.

/// A numeric type that can be mapped from a unit sample onto `[min, max)`.
pub trait Uniform: Copy + PartialOrd {
    /// Map `t` in `[0, 1)` onto `[min, max)`. Callers guarantee `min <= max`.
    fn from_unit(min: Self, max: Self, t: f64) -> Self;

    /// Whether this value may be used as a range bound.
    fn is_valid_bound(self) -> bool;

    /// Lossy conversion used for error reporting.
    fn as_f64(self) -> f64;
}

/// `min + t * (max - min)` without computing the span, which overflows for
/// bounds near `±f64::MAX`.
#[inline]
fn lerp(min: f64, max: f64, t: f64) -> f64 {
    min * (1.0 - t) + max * t
}

macro_rules! impl_uniform_float {
    ($($ty:ty),*) => {
        $(
            impl Uniform for $ty {
                #[inline]
                fn from_unit(min: Self, max: Self, t: f64) -> Self {
                    let value = lerp(min as f64, max as f64, t) as $ty;
                    // Spans narrower than the float spacing at `min` can round up onto `max`.
                    if value >= min && value < max { value } else { min }
                }

                #[inline]
                fn is_valid_bound(self) -> bool {
                    self.is_finite()
                }

                #[inline]
                fn as_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

macro_rules! impl_uniform_int {
    ($($ty:ty),*) => {
        $(
            impl Uniform for $ty {
                #[inline]
                fn from_unit(min: Self, max: Self, t: f64) -> Self {
                    let span = max as i128 - min as i128;
                    if span == 0 {
                        return min;
                    }
                    let offset = ((t * span as f64).floor() as i128).clamp(0, span - 1);
                    (min as i128 + offset) as $ty
                }

                #[inline]
                fn is_valid_bound(self) -> bool {
                    true
                }

                #[inline]
                fn as_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_uniform_float!(f32, f64);
impl_uniform_int!(i32, i64, u32, u64, usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_endpoints() {
        assert_eq!(f32::from_unit(2.0, 4.0, 0.0), 2.0);
        assert_eq!(f64::from_unit(-1.0, 1.0, 0.5), 0.0);
        assert!(f32::from_unit(0.0, 1.0, 0.999_4) < 1.0);
    }

    #[test]
    fn float_rounding_onto_max_falls_back_to_min() {
        // f32 spacing at 1e8 is 8.0
        assert_eq!(f32::from_unit(1.0e8, 1.0e8 + 8.0, 0.999), 1.0e8);
    }

    #[test]
    fn full_width_float_span_is_not_constant() {
        let ts = [0.0, 0.1, 0.25, 0.5, 0.75, 0.999];

        let wide32: Vec<f32> = ts.iter().map(|&t| f32::from_unit(-f32::MAX, f32::MAX, t)).collect();
        let wide64: Vec<f64> = ts.iter().map(|&t| f64::from_unit(-f64::MAX, f64::MAX, t)).collect();

        for pair in wide32.windows(2) {
            assert!(pair[0] < pair[1], "{wide32:?}");
        }
        for pair in wide64.windows(2) {
            assert!(pair[0] < pair[1], "{wide64:?}");
        }
        assert!(wide32.iter().all(|v| v.is_finite() && *v < f32::MAX));
        assert!(wide64.iter().all(|v| v.is_finite() && *v < f64::MAX));
        assert_eq!(f32::from_unit(-2.0e38, 2.0e38, 0.5), 0.0);
    }

    #[test]
    fn int_floors_and_stays_below_max() {
        assert_eq!(i32::from_unit(0, 5, 0.0), 0);
        assert_eq!(i32::from_unit(0, 5, 0.999_99), 4);
        assert_eq!(i32::from_unit(-3, 3, 0.5), 0);
        assert_eq!(usize::from_unit(0, 1, 0.7), 0);
    }

    #[test]
    fn int_full_width_span_does_not_overflow() {
        assert_eq!(i32::from_unit(i32::MIN, i32::MAX, 0.0), i32::MIN);
        assert!(i64::from_unit(i64::MIN, i64::MAX, 0.999) < i64::MAX);
        assert_eq!(u64::from_unit(7, 7, 0.3), 7);
    }

    #[test]
    fn only_finite_float_bounds_are_valid() {
        assert!(1.0f32.is_valid_bound());
        assert!(!f32::NAN.is_valid_bound());
        assert!(!f64::INFINITY.is_valid_bound());
        assert!(i32::MIN.is_valid_bound());
    }
}
