//! Canonical slide, merge, and compaction toward row zero
//!
//! Every column is processed independently: occupied cells are extracted in
//! order, adjacent equal pairs merge exactly once in a single top-to-bottom
//! pass, and the survivors are written back compacted against row zero.
//!
//! The single-pass rule is deliberate and observable: a merged value is never
//! re-compared against its new neighbor. Three equal tiles leave the third
//! unmerged ([1,1,1] becomes [2,1]) and four equal tiles merge as two
//! independent pairs ([2,2,2,2] becomes [3,3]), never as one chain.

use ndarray::Array2;

use crate::board::grid::Exponent;

/// Slide and merge every column toward row zero
///
/// Pure function over an oriented cell matrix; the dispatcher points the
/// intended direction at row zero before calling this and undoes the
/// orientation afterwards. Columns never interact.
pub fn merge_toward_top(cells: &Array2<Exponent>) -> Array2<Exponent> {
    let (rows, cols) = cells.dim();
    let mut lanes: Vec<Vec<Exponent>> = Vec::with_capacity(cols);
    for column in cells.columns() {
        let occupied: Vec<Exponent> = column.iter().copied().filter(|&v| v != 0).collect();
        lanes.push(merge_lane(occupied));
    }
    Array2::from_shape_fn((rows, cols), |(i, j)| {
        lanes.get(j).and_then(|lane| lane.get(i)).copied().unwrap_or(0)
    })
}

/// Merge one compacted lane of occupied cells in a single pass
///
/// Input holds the column's non-zero exponents in top-to-bottom order. When
/// two adjacent entries are equal, the first is incremented (doubling its
/// displayed value), the second is consumed, and the scan jumps past both.
/// Consumed entries are dropped before returning, preserving relative order.
fn merge_lane(mut lane: Vec<Exponent>) -> Vec<Exponent> {
    let mut idx = 0;
    while idx < lane.len() {
        let current = lane.get(idx).copied();
        if current.is_some() && current == lane.get(idx + 1).copied() {
            if let Some(head) = lane.get_mut(idx) {
                *head += 1;
            }
            if let Some(consumed) = lane.get_mut(idx + 1) {
                *consumed = 0;
            }
            // Skip the consumed sibling so the merged value is not re-examined
            idx += 1;
        }
        idx += 1;
    }
    lane.retain(|&value| value != 0);
    lane
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::{merge_lane, merge_toward_top};

    #[test]
    fn lane_pairs_merge_once() {
        assert_eq!(merge_lane(vec![]), vec![]);
        assert_eq!(merge_lane(vec![3]), vec![3]);
        assert_eq!(merge_lane(vec![1, 1]), vec![2]);
        assert_eq!(merge_lane(vec![1, 2, 1]), vec![1, 2, 1]);
    }

    #[test]
    fn three_equal_leave_the_third_unmerged() {
        assert_eq!(merge_lane(vec![1, 1, 1]), vec![2, 1]);
    }

    #[test]
    fn four_equal_merge_as_two_pairs() {
        assert_eq!(merge_lane(vec![2, 2, 2, 2]), vec![3, 3]);
    }

    #[test]
    fn merged_value_is_not_remerged_with_its_neighbor() {
        // [1,1,2] merges the leading pair into 2 but must not chain into 3
        assert_eq!(merge_lane(vec![1, 1, 2]), vec![2, 2]);
    }

    #[test]
    fn columns_compact_against_row_zero() {
        let cells = array![
            [0, 1, 0, 2],
            [1, 0, 0, 2],
            [0, 1, 0, 0],
            [1, 0, 0, 3],
        ];
        let expected = array![
            [2, 2, 0, 3],
            [0, 0, 0, 3],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
        ];
        assert_eq!(merge_toward_top(&cells), expected);
    }

    #[test]
    fn compacted_column_without_equal_neighbors_is_unchanged() {
        let cells = array![[1, 0], [2, 0], [3, 0], [0, 0]];
        assert_eq!(merge_toward_top(&cells), cells);
    }

    #[test]
    fn all_zero_columns_stay_all_zero() {
        let cells = ndarray::Array2::zeros((4, 4));
        assert_eq!(merge_toward_top(&cells), cells);
    }
}
