use glam::{
  Vec2,
  Vec3,
  Vec4,
};
use serde::{
  Deserialize, Serialize
};

/// The tangent of a procedural mesh vertex.
/// The flip flag carries the handedness of the source tangent basis;
/// it is copied from the source data, never derived geometrically.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HalaProcMeshTangent {
  pub tangent: Vec3,
  pub flip_binormal: bool,
}

/// The implementation of the procedural mesh tangent.
impl HalaProcMeshTangent {
  /// Create a new tangent.
  /// param tangent: The tangent direction.
  /// param flip_binormal: True if the binormal points opposite the cross of normal and tangent.
  /// return: The tangent.
  pub fn new(tangent: Vec3, flip_binormal: bool) -> Self {
    Self { tangent, flip_binormal }
  }

  /// Create a tangent from a 4 component source tangent.
  /// The w component holds the handedness sign.
  /// param tangent: The source tangent.
  /// return: The tangent.
  pub fn from_vec4(tangent: Vec4) -> Self {
    Self {
      tangent: tangent.truncate(),
      flip_binormal: tangent.w < 0.0,
    }
  }
}

impl Default for HalaProcMeshTangent {
  fn default() -> Self {
    Self {
      tangent: Vec3::X,
      flip_binormal: false,
    }
  }
}

/// The vertex of a procedural mesh.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HalaProcMeshVertex {
  pub position: Vec3,
  pub normal: Vec3,
  pub tangent: HalaProcMeshTangent,
  pub tex_coord: Vec2,
  pub color: Vec4,
}

impl Default for HalaProcMeshVertex {
  fn default() -> Self {
    Self {
      position: Vec3::ZERO,
      normal: Vec3::Z,
      tangent: HalaProcMeshTangent::default(),
      tex_coord: Vec2::ZERO,
      color: Vec4::ONE,
    }
  }
}
