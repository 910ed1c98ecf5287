//! Fixed-size array iteration and max-finding

/// The array walked by `drills arrays`
pub const SAMPLE_VALUES: [i32; 5] = [0, 10, 20, 30, 40];

/// Largest value in `values`, or `None` when the slice is empty
pub fn running_max(values: &[i32]) -> Option<i32> {
    let (first, rest) = values.split_first()?;
    Some(max_from(*first, rest))
}

/// Maximum of a fixed-size, non-empty array
pub fn array_max<const N: usize>(values: &[i32; N]) -> i32 {
    const { assert!(N > 0, "array_max requires a non-empty array") };
    max_from(values[0], &values[1..])
}

/// Starts from `first` and replaces the running maximum only on a strictly
/// greater value, so ties keep the earlier element.
fn max_from(first: i32, rest: &[i32]) -> i32 {
    let mut max = first;
    for &value in rest {
        if value > max {
            max = value;
        }
    }
    max
}
