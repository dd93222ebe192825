/// Position estimation for [`interpolation_search`].
///
/// Given the values at the two ends of the current window and the target,
/// an implementation predicts how far into the window the target should sit
/// if values were spread linearly between the endpoints. The prediction is
/// a hint only; the search clamps it into the window and still converges
/// when it is wildly off.
///
/// Implementations must not panic and must return a value in `[0, span]`
/// whenever `low < high` and `low <= target <= high`. Outside that contract
/// (unsorted input reaching the estimator) any in-range value is acceptable.
pub trait InterpolationKey: PartialOrd + Copy {
    /// Estimated offset of `target` within `[low, high]`, scaled to `span` slots.
    fn estimate_offset(low: Self, high: Self, target: Self, span: usize) -> usize;
}

// i128 intermediates: the widest supported spread (u64/i64) times the widest
// possible span (isize::MAX, the slice length ceiling) stays below 2^127.
macro_rules! interpolation_key_for_int {
    ($($t:ty),*) => {
        $(
            impl InterpolationKey for $t {
                fn estimate_offset(low: Self, high: Self, target: Self, span: usize) -> usize {
                    let spread = high as i128 - low as i128;
                    if spread <= 0 {
                        return 0;
                    }
                    let offset = (target as i128 - low as i128) * span as i128 / spread;
                    offset.clamp(0, span as i128) as usize
                }
            }
        )*
    };
}

macro_rules! interpolation_key_for_float {
    ($($t:ty),*) => {
        $(
            impl InterpolationKey for $t {
                fn estimate_offset(low: Self, high: Self, target: Self, span: usize) -> usize {
                    let spread = f64::from(high) - f64::from(low);
                    let estimate = (f64::from(target) - f64::from(low)) * span as f64 / spread;
                    if estimate.is_finite() && estimate > 0.0 {
                        // float-to-int casts saturate, so an overshoot cannot wrap
                        estimate as usize
                    } else {
                        0
                    }
                }
            }
        )*
    };
}

interpolation_key_for_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
interpolation_key_for_float!(f32, f64);

/// Interpolation search over the whole of `haystack`.
///
/// Instead of probing the middle of the window, each step probes where the
/// target *should* be if values grew linearly between the window endpoints.
/// On roughly uniform numeric data this converges in `O(log log n)` expected
/// probes; on adversarial distributions it degrades gracefully because the
/// window still shrinks by at least one index per iteration.
///
/// # Semantics
/// `haystack` must be sorted in non-decreasing order; the result on unsorted
/// input is unspecified but the call terminates without panicking. A target
/// outside `[haystack[0], haystack[len - 1]]` is rejected after at most one
/// comparison pair. `NaN` endpoints or targets fail the window comparisons
/// and simply report `None`.
///
/// # Example
/// ```
/// use lodestone::search::interpolation_search;
///
/// let values = [1.0, 2.0, 3.0, 4.0, 5.0];
/// assert_eq!(interpolation_search(&values, &3.0), Some(2));
/// assert_eq!(interpolation_search(&values, &3.5), None);
/// ```
pub fn interpolation_search<T: InterpolationKey>(haystack: &[T], target: &T) -> Option<usize> {
    if haystack.is_empty() {
        return None;
    }

    let mut low = 0;
    let mut high = haystack.len() - 1;

    while low <= high && haystack[low] <= *target && *target <= haystack[high] {
        if haystack[low] == haystack[high] {
            // zero value spread; every element in the window is equal.
            return if haystack[low] == *target {
                Some(low)
            } else {
                None
            };
        }

        let span = high - low;
        let offset = T::estimate_offset(haystack[low], haystack[high], *target, span);
        let pos = low + offset.min(span);

        if haystack[pos] == *target {
            return Some(pos);
        }
        if haystack[pos] < *target {
            low = pos + 1;
        } else if pos == 0 {
            // everything at or below the probe is too large; `pos - 1` would wrap.
            return None;
        } else {
            high = pos - 1;
        }
    }

    None
}
