use serde::{
  Deserialize, Serialize
};

use crate::mesh::HalaProcMeshVertex;

/// One section of a procedural mesh.
/// A section owns its vertex buffer and a section local index buffer,
/// and is rendered with exactly one material slot.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HalaProcMeshSection {
  pub vertices: Vec<HalaProcMeshVertex>,
  pub indices: Vec<u32>,
  pub enable_collision: bool,
}

/// The implementation of the procedural mesh section.
impl HalaProcMeshSection {
  /// Check if the section holds no geometry.
  /// return: True if the section is empty, false otherwise.
  pub fn is_empty(&self) -> bool {
    self.vertices.is_empty() && self.indices.is_empty()
  }
}
