//! Window and monitor geometry.

/// A rectangle in virtual-desktop coordinates, stored as native edges.
///
/// `right` and `bottom` are exclusive, matching how the windowing system
/// reports window bounds and monitor work areas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    /// X coordinate of the left edge.
    pub left: i32,
    /// Y coordinate of the top edge.
    pub top: i32,
    /// X coordinate of the right edge.
    pub right: i32,
    /// Y coordinate of the bottom edge.
    pub bottom: i32,
}

impl Rect {
    /// Create a rectangle from its edges.
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Create a rectangle from a top-left corner and a size.
    ///
    /// Edges saturate at the coordinate limits instead of overflowing.
    pub const fn from_origin_size(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self::new(x, y, x.saturating_add(width), y.saturating_add(height))
    }

    /// Width in pixels, saturating at the `i32` limits.
    pub const fn width(&self) -> i32 {
        self.right.saturating_sub(self.left)
    }

    /// Height in pixels, saturating at the `i32` limits.
    pub const fn height(&self) -> i32 {
        self.bottom.saturating_sub(self.top)
    }

    /// Center point, rounded toward the top-left.
    pub const fn center(&self) -> (i32, i32) {
        (midpoint(self.left, self.right), midpoint(self.top, self.bottom))
    }

    /// Top-left position that centers a `width` x `height` box inside this rectangle.
    ///
    /// Boxes larger than the rectangle overhang it equally on both sides.
    /// Results beyond the coordinate range are clamped to it.
    pub const fn centered_origin(&self, width: i32, height: i32) -> (i32, i32) {
        (
            centered_start(self.left, self.right, width),
            centered_start(self.top, self.bottom, height),
        )
    }
}

const fn midpoint(start: i32, end: i32) -> i32 {
    // Always between start and end, so it fits.
    (start as i64 + (end as i64 - start as i64) / 2) as i32
}

const fn centered_start(start: i32, end: i32, extent: i32) -> i32 {
    let span = end as i64 - start as i64;
    clamp_to_i32(start as i64 + (span - extent as i64) / 2)
}

const fn clamp_to_i32(value: i64) -> i32 {
    if value < i32::MIN as i64 {
        i32::MIN
    } else if value > i32::MAX as i64 {
        i32::MAX
    } else {
        value as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_dimensions() {
        let rect = Rect::new(100, 50, 900, 650);
        assert_eq!(rect.width(), 800);
        assert_eq!(rect.height(), 600);
        assert_eq!(rect.center(), (500, 350));
    }

    #[test]
    fn test_from_origin_size() {
        let rect = Rect::from_origin_size(-1920, 0, 1920, 1040);
        assert_eq!(rect, Rect::new(-1920, 0, 0, 1040));
    }

    #[test]
    fn test_centered_origin_primary() {
        // 40px taskbar at the bottom
        let work_area = Rect::new(0, 0, 1920, 1040);
        assert_eq!(work_area.centered_origin(400, 300), (760, 370));
    }

    #[test]
    fn test_centered_origin_secondary_monitor() {
        let work_area = Rect::new(1920, 0, 3840, 1080);
        assert_eq!(work_area.centered_origin(600, 400), (2580, 340));
    }

    #[test]
    fn test_from_origin_size_saturates() {
        let rect = Rect::from_origin_size(100, 200, i32::MAX, 480);
        assert_eq!(rect, Rect::new(100, 200, i32::MAX, 680));
        assert_eq!(rect.width(), i32::MAX - 100);

        let rect = Rect::from_origin_size(-100, 0, i32::MIN, 10);
        assert_eq!(rect.right, i32::MIN);
    }

    #[test]
    fn test_extreme_edges() {
        let rect = Rect::new(i32::MIN, i32::MIN, i32::MAX, i32::MAX);
        assert_eq!(rect.width(), i32::MAX);
        assert_eq!(rect.height(), i32::MAX);
        assert_eq!(rect.center(), (-1, -1));
    }

    #[test]
    fn test_centered_origin_extreme_extents() {
        let work_area = Rect::new(0, 0, 1920, 1040);
        assert_eq!(work_area.centered_origin(i32::MIN, 0), (1_073_742_784, 520));
        assert_eq!(work_area.centered_origin(i32::MAX, 0), (-1_073_740_863, 520));

        let far_right = Rect::new(i32::MAX - 10, 0, i32::MAX, 0);
        assert_eq!(far_right.centered_origin(i32::MIN, 0).0, i32::MAX);
    }

    #[test]
    fn test_centered_origin_oversized_window() {
        let work_area = Rect::new(0, 0, 800, 600);
        assert_eq!(work_area.centered_origin(1000, 700), (-100, -50));
    }
}
