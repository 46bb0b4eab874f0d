use std::cmp::Ordering;

/// Reverse `seq` in place by swapping converging pairs. No allocation.
pub fn reverse_in_place<T>(seq: &mut [T]) {
    if seq.is_empty() {
        return;
    }

    let mut left = 0;
    let mut right = seq.len() - 1;

    while left < right {
        seq.swap(left, right);
        left += 1;
        right -= 1;
    }
}

/// True if `seq` reads the same forwards and backwards. Compares the two
/// halves against each other and never touches the middle element of an
/// odd-length slice.
pub fn is_palindrome<T: Eq>(seq: &[T]) -> bool {
    seq.iter()
        .zip(seq.iter().rev())
        .take(seq.len() / 2)
        .all(|(front, back)| front == back)
}

/// Indices `(i, j)`, `i < j`, of some pair of elements of `sorted` that sum
/// to `target`, or `None` if no pair does.
///
/// `sorted` must be in non-decreasing order; on unsorted input the scan
/// still terminates but the answer is unspecified. One pointer walks in from
/// each end: a sum falling short advances the left one, a sum overshooting
/// retreats the right one.
pub fn pair_with_sum(sorted: &[i64], target: i64) -> Option<(usize, usize)> {
    let mut left = 0;
    let mut right = sorted.len().checked_sub(1)?;

    while left < right {
        let sum = sorted[left] as i128 + sorted[right] as i128;

        match sum.cmp(&(target as i128)) {
            Ordering::Equal => return Some((left, right)),
            Ordering::Less => left += 1,
            Ordering::Greater => right -= 1,
        }
    }

    None
}
