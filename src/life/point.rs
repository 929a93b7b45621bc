//! Lattice coordinates for the sparse grid

use itertools::Itertools;

/// A cell coordinate on the infinite integer lattice.
///
/// `x` grows to the right and `y` grows downward; the renderer prints rows
/// in increasing `y`. Equality and hashing are component-wise, so a `Point`
/// can serve as a hash-set element directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    /// Create a point at the given coordinates.
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// The point displaced by `(dx, dy)`.
    pub const fn offset(self, dx: i64, dy: i64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// The 8 cells of the Moore neighborhood, excluding the point itself.
    pub fn neighbors(self) -> impl Iterator<Item = Point> {
        (-1..=1)
            .cartesian_product(-1..=1)
            .filter(|&offsets| offsets != (0, 0))
            .map(move |(dx, dy)| self.offset(dx, dy))
    }

    /// The full 3x3 block centered on the point, including the point itself.
    ///
    /// Every cell that can be alive next generation lies within the
    /// neighborhood of some currently live cell, so these blocks form the
    /// candidate set the generation step evaluates.
    pub fn neighborhood(self) -> impl Iterator<Item = Point> {
        (-1..=1)
            .cartesian_product(-1..=1)
            .map(move |(dx, dy)| self.offset(dx, dy))
    }

    /// Component-wise minimum, used when folding a bounding box.
    pub fn component_min(self, other: Self) -> Self {
        Self::new(self.x.min(other.x), self.y.min(other.y))
    }

    /// Component-wise maximum, used when folding a bounding box.
    pub fn component_max(self, other: Self) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbors_excludes_center() {
        let center = Point::new(3, -2);
        let neighbors: Vec<Point> = center.neighbors().collect();

        assert_eq!(neighbors.len(), 8);
        assert!(!neighbors.contains(&center));
        // Corners of the Moore neighborhood are included
        assert!(neighbors.contains(&Point::new(2, -3)));
        assert!(neighbors.contains(&Point::new(4, -1)));
    }

    #[test]
    fn test_neighborhood_includes_center() {
        let center = Point::new(0, 0);
        let block: Vec<Point> = center.neighborhood().collect();

        assert_eq!(block.len(), 9);
        assert!(block.contains(&center));
        assert!(block.contains(&Point::new(-1, -1)));
        assert!(block.contains(&Point::new(1, 1)));
    }

    #[test]
    fn test_component_extremes() {
        let a = Point::new(-2, 3);
        let b = Point::new(5, -1);

        assert_eq!(a.component_min(b), Point::new(-2, -1));
        assert_eq!(a.component_max(b), Point::new(5, 3));
    }

    #[test]
    fn test_offset() {
        assert_eq!(Point::new(1, 1).offset(-1, 2), Point::new(0, 3));
    }
}
