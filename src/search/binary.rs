use std::cmp::Ordering;

use crate::search::window::WindowError;

/// Midpoint of the inclusive index window `[left, right]`.
///
/// Written as `left + (right - left) / 2` rather than `(left + right) / 2` so
/// the sum cannot wrap when both indices sit near `usize::MAX`.
pub(crate) fn midpoint(left: usize, right: usize) -> usize {
    debug_assert!(left <= right);
    left + ((right - left) >> 1)
}

/// Shared narrowing loop behind every binary-search entry point.
///
/// Caller guarantees `right < haystack.len()`; an already-empty window is
/// expressed as `left > right` and yields `None` without probing.
pub(crate) fn search_window<T: Ord>(
    haystack: &[T],
    target: &T,
    mut left: usize,
    mut right: usize,
) -> Option<usize> {
    while left <= right {
        let mid = midpoint(left, right);

        match haystack[mid].cmp(target) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => left = mid + 1,
            Ordering::Greater => {
                if mid == 0 {
                    // window exhausted; `mid - 1` would wrap.
                    return None;
                }
                right = mid - 1;
            }
        }
    }

    None
}

/// Binary search over the whole of `haystack`.
///
/// Returns `Some(index)` such that `haystack[index] == target`, or `None` if
/// no element equals the target. When the target occurs more than once, which
/// of the matching indices is returned is unspecified.
///
/// # Semantics
/// `haystack` must be sorted in non-decreasing order. If it is not, the result
/// is unspecified but the call still terminates without panicking.
///
/// # Complexity
/// `O(log n)` comparisons, `O(1)` memory.
///
/// # Example
/// ```
/// use lodestone::search::binary_search;
///
/// let values = [1, 2, 3, 4, 5];
/// assert_eq!(binary_search(&values, &3), Some(2));
/// assert_eq!(binary_search(&values, &6), None);
/// ```
pub fn binary_search<T: Ord>(haystack: &[T], target: &T) -> Option<usize> {
    if haystack.is_empty() {
        return None;
    }
    search_window(haystack, target, 0, haystack.len() - 1)
}

/// Binary search restricted to the inclusive index window `[left, right]`.
///
/// # Semantics
/// - `left > right` denotes an explicitly empty window: the result is
///   `Ok(None)` and the slice is never probed.
/// - A non-empty window must satisfy `right < haystack.len()`; anything else
///   is a caller bug and is reported as [`WindowError::OutOfBounds`] rather
///   than silently clamped.
/// - Elements outside the window are never examined, so a target present only
///   outside `[left, right]` yields `Ok(None)`.
///
/// # Complexity
/// `O(log (right - left))` comparisons, `O(1)` memory.
///
/// # Example
/// ```
/// use lodestone::search::binary_search_between;
///
/// let values = [1, 2, 3, 4, 5];
/// assert_eq!(binary_search_between(&values, &3, 1, 3), Ok(Some(2)));
/// assert_eq!(binary_search_between(&values, &5, 1, 3), Ok(None));
/// assert_eq!(binary_search_between(&values, &3, 4, 2), Ok(None)); // empty window
/// assert!(binary_search_between(&values, &3, 0, 9).is_err());
/// ```
pub fn binary_search_between<T: Ord>(
    haystack: &[T],
    target: &T,
    left: usize,
    right: usize,
) -> Result<Option<usize>, WindowError> {
    if left > right {
        return Ok(None);
    }
    if right >= haystack.len() {
        return Err(WindowError::OutOfBounds {
            right,
            length: haystack.len(),
        });
    }
    Ok(search_window(haystack, target, left, right))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_first_middle_and_last() {
        let values = [1, 2, 3, 4, 5, 6];
        assert_eq!(binary_search(&values, &1), Some(0));
        assert_eq!(binary_search(&values, &3), Some(2));
        assert_eq!(binary_search(&values, &6), Some(5));
    }

    #[test]
    fn absent_targets_are_none() {
        let values = [1, 2, 3, 4, 5];
        assert_eq!(binary_search(&values, &0), None);
        assert_eq!(binary_search(&values, &6), None);
        // absent but inside the value range
        let gappy = [1, 3, 5, 7];
        assert_eq!(binary_search(&gappy, &4), None);
    }

    #[test]
    fn empty_and_single_element() {
        let empty: [i32; 0] = [];
        assert_eq!(binary_search(&empty, &1), None);
        assert_eq!(binary_search(&[1], &1), Some(0));
        assert_eq!(binary_search(&[1], &2), None);
    }

    #[test]
    fn duplicate_targets_return_a_matching_index() {
        let values = [1, 2, 2, 2, 3, 4, 5];
        let found = binary_search(&values, &2).expect("2 is present");
        assert_eq!(values[found], 2);
    }

    #[test]
    fn works_on_non_numeric_orderable_types() {
        let words = ["apple", "banana", "cherry", "date"];
        assert_eq!(binary_search(&words, &"apple"), Some(0));
        assert_eq!(binary_search(&words, &"date"), Some(3));
        assert_eq!(binary_search(&words, &"fig"), None);
    }

    #[test]
    fn bounded_window_hit_and_miss() {
        let values = [1, 2, 3, 4, 5];
        assert_eq!(binary_search_between(&values, &3, 1, 3), Ok(Some(2)));
        assert_eq!(binary_search_between(&values, &3, 0, 4), Ok(Some(2)));
        // target exists, but outside the window
        assert_eq!(binary_search_between(&values, &1, 2, 4), Ok(None));
        assert_eq!(binary_search_between(&values, &5, 0, 2), Ok(None));
    }

    #[test]
    fn inverted_window_is_empty_not_an_error() {
        let values = [1, 2, 3, 4, 5];
        assert_eq!(binary_search_between(&values, &3, 4, 2), Ok(None));
        // inverted windows skip validation entirely, even with wild bounds
        assert_eq!(binary_search_between(&values, &3, usize::MAX, 0), Ok(None));
    }

    #[test]
    fn out_of_bounds_window_is_rejected() {
        let values = [1, 2, 3, 4, 5];
        assert_eq!(
            binary_search_between(&values, &3, 0, 5),
            Err(WindowError::OutOfBounds {
                right: 5,
                length: 5
            })
        );
        let empty: [i32; 0] = [];
        assert!(binary_search_between(&empty, &3, 0, 0).is_err());
    }

    #[test]
    fn window_boundaries_are_reachable() {
        let values = [1, 2, 3, 4, 5];
        assert_eq!(binary_search_between(&values, &2, 1, 3), Ok(Some(1)));
        assert_eq!(binary_search_between(&values, &4, 1, 3), Ok(Some(3)));
        // degenerate one-element window
        assert_eq!(binary_search_between(&values, &3, 2, 2), Ok(Some(2)));
        assert_eq!(binary_search_between(&values, &4, 2, 2), Ok(None));
    }

    #[test]
    fn midpoint_does_not_overflow_near_usize_max() {
        assert_eq!(midpoint(usize::MAX - 1, usize::MAX), usize::MAX - 1);
        assert_eq!(midpoint(usize::MAX, usize::MAX), usize::MAX);
        assert_eq!(midpoint(0, usize::MAX), usize::MAX / 2);
        // the naive (left + right) / 2 would wrap for both of these
        assert_eq!(
            midpoint(usize::MAX / 2, usize::MAX),
            usize::MAX / 2 + usize::MAX / 4 + 1
        );
    }

    #[test]
    fn smallest_target_on_large_input() {
        let values: Vec<u64> = (0..10_000).collect();
        assert_eq!(binary_search(&values, &0), Some(0));
        assert_eq!(binary_search(&values, &9_999), Some(9999));
    }
}
