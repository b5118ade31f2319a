//! Ordered point sequences as exchanged on the wire.
//!
//! A [`PointSet`] is materialized fresh by every decode and is never mutated
//! afterwards. The position of a point in the set is its index in the
//! triangulation result format.

use serde::{Deserialize, Serialize};
use std::ops::Index;

use crate::geometry::point::Point;

/// An ordered, fixed-length sequence of [`Point`]s.
///
/// # Examples
///
/// ```rust
/// use pointset_triangulation::core::point_set::PointSet;
/// use pointset_triangulation::geometry::point::Point;
///
/// let set: PointSet = [[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]]
///     .into_iter()
///     .map(Point::new)
///     .collect();
/// assert_eq!(set.len(), 3);
/// assert_eq!(set[1], Point::new([1.0, 0.0]));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointSet {
    points: Vec<Point>,
}

impl PointSet {
    /// Wraps an ordered list of points.
    #[must_use]
    pub const fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Number of points.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the set holds no points.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The points in index order.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }

    /// The point at `index`, if any.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Point> {
        self.points.get(index)
    }

    /// Iterates over the points in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// Consumes the set and returns its points.
    #[must_use]
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }
}

impl From<Vec<Point>> for PointSet {
    fn from(points: Vec<Point>) -> Self {
        Self::new(points)
    }
}

impl FromIterator<Point> for PointSet {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl IntoIterator for PointSet {
    type Item = Point;
    type IntoIter = std::vec::IntoIter<Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

impl Index<usize> for PointSet {
    type Output = Point;

    fn index(&self, index: usize) -> &Self::Output {
        &self.points[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_set_preserves_order() {
        let points = vec![
            Point::new([3.0, 1.0]),
            Point::new([-1.0, 2.0]),
            Point::new([0.5, 0.5]),
        ];
        let set = PointSet::from(points.clone());

        assert_eq!(set.len(), 3);
        assert!(!set.is_empty());
        assert_eq!(set.as_slice(), points.as_slice());
        assert_eq!(set.get(2), Some(&points[2]));
        assert_eq!(set.get(3), None);
        assert_eq!(set.iter().copied().collect::<Vec<_>>(), points);
        assert_eq!((&set).into_iter().count(), 3);
        assert_eq!(set.into_points(), points);
    }

    #[test]
    fn test_empty_point_set() {
        let set = PointSet::default();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert_eq!(set.get(0), None);
    }

    #[test]
    fn test_point_set_serializes_as_sequence() {
        let set: PointSet = vec![Point::new([1.0, 2.0])].into();
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"[{"coords":[1.0,2.0]}]"#);
        let back: PointSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, set);
    }
}
