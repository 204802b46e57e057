//! Order statistics over bid vectors.
//!
//! Both routines assume the values are comparable (no NaNs), which holds for
//! any bid vector that passed construction-time validation.

/// Returns the position of the largest value, preferring the earliest
/// position when several values tie for the maximum.
///
/// Returns `None` for an empty slice.
pub fn first_argmax(values: &[f64]) -> Option<usize> {
    values
        .iter()
        .copied()
        .enumerate()
        .fold(None, |best: Option<(usize, f64)>, (index, value)| match best {
            Some((_, top)) if value <= top => best,
            _ => Some((index, value)),
        })
        .map(|(index, _)| index)
}

/// Returns the `k`-th largest value (1-based), ranking by value alone.
///
/// Repeated values occupy consecutive ranks, so for `[5, 5, 3]` both the
/// first and second largest values are `5`. Returns `None` when `k` is zero
/// or exceeds the number of values. Runs in linear time on average.
pub fn kth_largest(values: &[f64], k: usize) -> Option<f64> {
    if k == 0 || k > values.len() {
        return None;
    }

    let mut scratch = values.to_vec();
    let (_, kth, _) = scratch.select_nth_unstable_by(k - 1, |a, b| b.total_cmp(a));
    Some(*kth)
}

/// Returns the second largest value in a single pass, without allocating.
///
/// Agrees with `kth_largest(values, 2)`: a repeated maximum is also the second
/// largest value. Returns `None` for fewer than two values.
pub fn second_largest(values: &[f64]) -> Option<f64> {
    let mut first: Option<f64> = None;
    let mut second: Option<f64> = None;

    for &value in values {
        match first {
            Some(top) if value <= top => {
                if second.is_none_or(|runner_up| value > runner_up) {
                    second = Some(value);
                }
            }
            _ => {
                second = first;
                first = Some(value);
            }
        }
    }

    second
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argmax_empty() {
        assert_eq!(first_argmax(&[]), None);
    }

    #[test]
    fn test_argmax_unique() {
        assert_eq!(first_argmax(&[1.0, 9.0, 4.0]), Some(1));
    }

    #[test]
    fn test_argmax_ties_take_first() {
        assert_eq!(first_argmax(&[5.0, 5.0, 3.0]), Some(0));
        assert_eq!(first_argmax(&[3.0, 7.0, 1.0, 7.0]), Some(1));
        assert_eq!(first_argmax(&[0.0, 0.0]), Some(0));
    }

    #[test]
    fn test_kth_out_of_range() {
        assert_eq!(kth_largest(&[1.0, 2.0], 0), None);
        assert_eq!(kth_largest(&[1.0, 2.0], 3), None);
        assert_eq!(kth_largest(&[], 1), None);
    }

    #[test]
    fn test_kth_ranks() {
        let values = [3.0, 10.0, 8.0, 1.0];
        assert_eq!(kth_largest(&values, 1), Some(10.0));
        assert_eq!(kth_largest(&values, 2), Some(8.0));
        assert_eq!(kth_largest(&values, 3), Some(3.0));
        assert_eq!(kth_largest(&values, 4), Some(1.0));
    }

    #[test]
    fn test_kth_repeated_values() {
        assert_eq!(kth_largest(&[5.0, 5.0, 3.0], 2), Some(5.0));
        assert_eq!(kth_largest(&[5.0, 5.0, 3.0], 3), Some(3.0));
    }

    #[test]
    fn test_second_largest() {
        assert_eq!(second_largest(&[]), None);
        assert_eq!(second_largest(&[7.0]), None);
        assert_eq!(second_largest(&[10.0, 8.0, 3.0]), Some(8.0));
        assert_eq!(second_largest(&[3.0, 10.0, 8.0]), Some(8.0));
        assert_eq!(second_largest(&[5.0, 5.0, 3.0]), Some(5.0));
        assert_eq!(second_largest(&[0.0, 0.0]), Some(0.0));
    }

    #[test]
    fn test_second_largest_agrees_with_kth() {
        for values in [
            vec![1.0, 2.0],
            vec![2.0, 9.5, 4.25, 9.0],
            vec![6.0, 1.0, 6.0, 6.0],
            vec![0.5, 0.25, 0.75, 0.0, 0.125],
        ] {
            assert_eq!(second_largest(&values), kth_largest(&values, 2));
        }
    }

    #[test]
    fn test_kth_leaves_input_untouched() {
        let values = [2.0, 9.0, 4.0];
        kth_largest(&values, 2);
        assert_eq!(values, [2.0, 9.0, 4.0]);
    }
}
