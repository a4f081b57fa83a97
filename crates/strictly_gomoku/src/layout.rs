//! Screen geometry for boards drawn as grid lines with stones on intersections.
//!
//! Everything here is a pure function of the viewport, so input mapping and
//! drawing can be tested without a graphical context.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Stone radius as a fraction of the grid pitch.
const PIECE_RADIUS_RATIO: f64 = 0.4;

/// Distance of the corner star points from the board edge, in lines.
const STAR_POINT_INSET: usize = 3;

/// Maps between grid intersections and screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutMetrics {
    /// Offset of intersection `(0, 0)` from the viewport origin.
    pub padding: f64,
    /// Distance between adjacent grid lines.
    pub cell_size: f64,
}

impl LayoutMetrics {
    /// Creates metrics from explicit values.
    pub fn new(padding: f64, cell_size: f64) -> Self {
        Self { padding, cell_size }
    }

    /// Fits a `size`×`size` board into the viewport.
    ///
    /// Each line gets one pitch of the shorter viewport side, with half a
    /// pitch of margin around the outer lines.
    #[instrument]
    pub fn from_viewport(width: f64, height: f64, size: usize) -> Self {
        let cell_size = width.min(height).max(0.0) / size.max(1) as f64;
        Self {
            padding: cell_size / 2.0,
            cell_size,
        }
    }

    /// Nearest intersection to a screen point as `(row, col)`.
    ///
    /// The result is not clamped; points off the grid map to coordinates
    /// outside the board and are left for the engine to reject. Halves round up.
    /// Degenerate metrics (pitch zero, negative or not finite) have no grid and
    /// map every point to `(-1, -1)`.
    pub fn to_grid(&self, x: f64, y: f64) -> (isize, isize) {
        if !(self.cell_size.is_finite() && self.cell_size > 0.0) {
            return (-1, -1);
        }
        let nearest = |v: f64| ((v - self.padding) / self.cell_size + 0.5).floor() as isize;
        (nearest(y), nearest(x))
    }

    /// Screen position `(x, y)` of the intersection at `(row, col)`.
    pub fn to_screen(&self, row: usize, col: usize) -> (f64, f64) {
        (
            self.padding + col as f64 * self.cell_size,
            self.padding + row as f64 * self.cell_size,
        )
    }

    /// Radius to draw stones with.
    pub fn piece_radius(&self) -> f64 {
        self.cell_size * PIECE_RADIUS_RATIO
    }
}

/// Decorative marker intersections: the centre (odd sizes) and four corner
/// points three lines in (sizes of nine and up).
pub fn star_points(size: usize) -> Vec<(usize, usize)> {
    let mut points = Vec::with_capacity(5);
    if size % 2 == 1 {
        points.push((size / 2, size / 2));
    }
    if size >= 9 {
        let near = STAR_POINT_INSET;
        let far = size - 1 - STAR_POINT_INSET;
        points.extend([(near, near), (near, far), (far, near), (far, far)]);
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_viewport() {
        let metrics = LayoutMetrics::from_viewport(600.0, 800.0, 15);
        assert_eq!(metrics, LayoutMetrics::new(20.0, 40.0));
        assert_eq!(metrics.piece_radius(), 16.0);
    }

    #[test]
    fn test_to_grid_rounds_to_nearest() {
        let metrics = LayoutMetrics::new(20.0, 40.0);
        assert_eq!(metrics.to_grid(20.0, 20.0), (0, 0));
        assert_eq!(metrics.to_grid(39.0, 20.0), (0, 0));
        assert_eq!(metrics.to_grid(40.0, 20.0), (0, 1));
        assert_eq!(metrics.to_grid(580.0, 580.0), (14, 14));
    }

    #[test]
    fn test_to_grid_does_not_clamp() {
        let metrics = LayoutMetrics::new(20.0, 40.0);
        assert_eq!(metrics.to_grid(20.0, -30.0), (-1, 0));
        assert_eq!(metrics.to_grid(20.0, 620.0), (15, 0));
    }

    #[test]
    fn test_empty_viewport_maps_off_board() {
        let metrics = LayoutMetrics::from_viewport(0.0, 0.0, 15);
        assert_eq!(metrics.cell_size, 0.0);
        assert_eq!(metrics.to_grid(0.0, 0.0), (-1, -1));
        assert_eq!(LayoutMetrics::new(0.0, f64::NAN).to_grid(5.0, 5.0), (-1, -1));
        assert_eq!(LayoutMetrics::new(0.0, -1.0).to_grid(5.0, 5.0), (-1, -1));
    }

    #[test]
    fn test_round_trip_intersections() {
        let metrics = LayoutMetrics::from_viewport(450.0, 450.0, 15);
        for (row, col) in [(0, 0), (7, 7), (14, 3)] {
            let (x, y) = metrics.to_screen(row, col);
            assert_eq!(metrics.to_grid(x, y), (row as isize, col as isize));
        }
    }

    #[test]
    fn test_star_points_standard_board() {
        assert_eq!(
            star_points(15),
            vec![(7, 7), (3, 3), (3, 11), (11, 3), (11, 11)]
        );
    }

    #[test]
    fn test_star_points_small_boards() {
        assert_eq!(star_points(5), vec![(2, 2)]);
        assert!(star_points(6).is_empty());
    }
}
