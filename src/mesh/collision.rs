use glam::Vec3;
use serde::{
  Deserialize, Serialize
};

/// A convex hull used for simple collision.
/// The point set is carried verbatim from the authoring side;
/// hull construction happens outside this crate.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HalaConvexHull {
  pub points: Vec<Vec3>,
}

/// The implementation of the convex hull.
impl HalaConvexHull {
  /// Create a new convex hull from a point set.
  /// param points: The points of the hull.
  /// return: The hull.
  pub fn new(points: Vec<Vec3>) -> Self {
    Self { points }
  }
}
