//! Stride selection for chart rendering
//!
//! Tables always show every row; charts only need enough points to trace
//! the curve.

use super::results::SimulationResult;

/// Default cap on chart points
pub const DEFAULT_MAX_CHART_POINTS: usize = 40;

/// Stride needed to keep roughly `max_points` rows out of `len`
pub fn chart_stride(len: usize, max_points: usize) -> usize {
    let max_points = max_points.max(1);
    len.div_ceil(max_points).max(1)
}

/// Pick every `stride`-th row, always keeping the first and last.
///
/// Returns at most `max_points + 1` rows (the final row may fall off-stride).
pub fn downsample(rows: &[SimulationResult], max_points: usize) -> Vec<SimulationResult> {
    let Some(last) = rows.len().checked_sub(1) else {
        return Vec::new();
    };
    let stride = chart_stride(rows.len(), max_points);

    rows.iter()
        .enumerate()
        .filter(|(idx, _)| idx % stride == 0 || *idx == last)
        .map(|(_, row)| *row)
        .collect()
}
