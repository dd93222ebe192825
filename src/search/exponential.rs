use crate::search::binary::search_window;

/// Exponential (doubling) search over the whole of `haystack`.
///
/// Probes indices `1, 2, 4, 8, ...` until one holds a value `>= target` or
/// runs off the end, then binary-searches the last doubling interval. Finds a
/// target sitting at index `i` in `O(log i)` comparisons, which beats plain
/// binary search when hits cluster near the front of a long sequence.
///
/// # Semantics
/// `haystack` must be sorted in non-decreasing order; see
/// [`binary_search`](crate::search::binary_search) for the contract on
/// unsorted input and on duplicate targets.
///
/// # Example
/// ```
/// use lodestone::search::exponential_search;
///
/// let values: Vec<u32> = (1..=1000).collect();
/// assert_eq!(exponential_search(&values, &999), Some(998));
/// assert_eq!(exponential_search(&values, &0), None);
/// ```
pub fn exponential_search<T: Ord>(haystack: &[T], target: &T) -> Option<usize> {
    if haystack.is_empty() {
        return None;
    }

    let length = haystack.len();
    let mut bound = 1;

    while bound < length && haystack[bound] < *target {
        match bound.checked_mul(2) {
            Some(doubled) => bound = doubled,
            None => {
                // doubling would wrap; the last index is as far as probing can go.
                bound = length - 1;
                break;
            }
        }
    }

    // The previous probe (if any) confirmed the target is not below
    // haystack[bound >> 1]; for the never-doubled case bound >> 1 is 0.
    let left = bound >> 1;
    let right = usize::min(bound, length - 1);

    search_window(haystack, target, left, right)
}
