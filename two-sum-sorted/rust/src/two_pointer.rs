use std::cmp::Ordering;

/// Returned by [`two_sum`] when no pair adds up to the target.
pub const SENTINEL: [i32; 2] = [-1, -1];

/// One-based positions of two entries, `0 < left < right`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pair {
    left: usize,
    right: usize,
}

impl Pair {
    pub fn new(left: usize, right: usize) -> Option<Pair> {
        (0 < left && left < right).then_some(Pair { left, right })
    }

    pub fn left(self) -> usize {
        self.left
    }

    pub fn right(self) -> usize {
        self.right
    }

    pub fn zero_based(self) -> (usize, usize) {
        (self.left - 1, self.right - 1)
    }

    /// `None` when a position doesn't fit in an `i32`.
    pub fn to_array(self) -> Option<[i32; 2]> {
        Some([i32::try_from(self.left).ok()?, i32::try_from(self.right).ok()?])
    }
}

/// Finds the pair of entries in `numbers` summing to `target` by converging
/// a low and a high pointer from both ends.
///
/// `numbers` must be sorted in non-decreasing order. This is not checked,
/// an unsorted slice gives an unspecified (but non-panicking) answer.
pub fn find(numbers: &[i32], target: i32) -> Option<Pair> {
    if numbers.len() < 2 {
        return None;
    }

    let target = i64::from(target);
    let mut low = 0;
    let mut high = numbers.len() - 1;

    while low < high {
        // i64 so that two i32 values can't overflow
        let sum = i64::from(numbers[low]) + i64::from(numbers[high]);
        match sum.cmp(&target) {
            Ordering::Less => low += 1,
            Ordering::Greater => high -= 1,
            Ordering::Equal => {
                return Some(Pair {
                    left: low + 1,
                    right: high + 1,
                })
            }
        };
    }

    None
}

/// Same as [`find`], but with the result as `[index1, index2]` and
/// [`SENTINEL`] for no match. Positions past `i32::MAX` also give [`SENTINEL`].
pub fn two_sum(numbers: &[i32], target: i32) -> [i32; 2] {
    find(numbers, target).and_then(Pair::to_array).unwrap_or(SENTINEL)
}
