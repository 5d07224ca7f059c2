/// Indices bracketing a target value in a non-decreasing slice.
///
/// `None` on either side means the target lies beyond that end of the slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeIndices {
    pub lower: Option<usize>,
    pub upper: Option<usize>,
}

impl RangeIndices {
    fn new(lower: Option<usize>, upper: Option<usize>) -> Self {
        Self { lower, upper }
    }
}

/// Finds the tightest pair of indices in `values` bracketing `target`.
///
/// - Below the first element: `lower = None`, `upper = Some(0)`.
/// - Above the last element: `lower = Some(last)`, `upper = None`.
/// - Equal to an element: both indices point at that element.
/// - Otherwise the binary-searched pair with `values[lower] < target < values[upper]`.
///
/// An empty slice yields `None` on both sides.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn find_range_indices(values: &[f64], target: f64) -> RangeIndices {
    let Some(last) = values.len().checked_sub(1) else {
        return RangeIndices::new(None, None);
    };

    if target < values[0] {
        return RangeIndices::new(None, Some(0));
    }
    if target > values[last] {
        return RangeIndices::new(Some(last), None);
    }

    // Invariant: values[lo - 1] < target < values[hi + 1] for the indices already discarded.
    let mut lo = 0;
    let mut hi = last;
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        let mid_val = values[mid];
        if mid_val == target {
            return RangeIndices::new(Some(mid), Some(mid));
        } else if mid_val < target {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }

    // `lo` is now the first element not below the target.
    if values[lo] == target {
        RangeIndices::new(Some(lo), Some(lo))
    } else {
        RangeIndices::new(lo.checked_sub(1), Some(lo))
    }
}
