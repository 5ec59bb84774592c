use glam::{
  Vec2,
  Vec3,
  Vec4,
};
use serde::{
  Deserialize, Serialize
};

use crate::error::HalaProcMeshError;
use crate::mesh::{
  HalaConvexHull,
  HalaMaterialHandle,
};

/// One section of an indexed static mesh LOD.
/// A section covers the index buffer sub range
/// [first_index, first_index + num_triangles * 3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HalaSectionInfo {
  pub first_index: u32,
  pub num_triangles: u32,
  pub material_index: u32,
}

/// The resolved render data of one LOD of an indexed static mesh.
/// All vertex attribute buffers are global and index aligned; triangles
/// of every section reference them through the shared index buffer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HalaLodResources {
  pub sections: Vec<HalaSectionInfo>,
  pub indices: Vec<u32>,
  pub positions: Vec<Vec3>,
  pub normals: Vec<Vec3>,
  pub tex_coords: Vec<Vec2>,
  pub tangents: Vec<Vec4>,
}

/// The implementation of the LOD resources.
impl HalaLodResources {
  /// Validate the LOD resources.
  /// Attribute buffers must be index aligned, every index must reference an
  /// existing vertex and every section sub range must stay inside the index buffer.
  /// return: The validation result.
  pub fn validate(&self) -> Result<(), HalaProcMeshError> {
    let num_vertices = self.positions.len();
    if self.normals.len() != num_vertices
      || self.tex_coords.len() != num_vertices
      || self.tangents.len() != num_vertices
    {
      return Err(HalaProcMeshError::new(
        &format!(
          "Misaligned vertex buffers: {} positions, {} normals, {} tex_coords, {} tangents.",
          num_vertices, self.normals.len(), self.tex_coords.len(), self.tangents.len()),
        None));
    }
    for &index in self.indices.iter() {
      if index as usize >= num_vertices {
        return Err(HalaProcMeshError::new(
          &format!("Vertex index {} is out of range ({} vertices).", index, num_vertices),
          None));
      }
    }
    for (section_index, section) in self.sections.iter().enumerate() {
      let one_past_last = section.first_index as usize + section.num_triangles as usize * 3;
      if one_past_last > self.indices.len() {
        return Err(HalaProcMeshError::new(
          &format!(
            "Section {} ends at index {} but the index buffer holds {} entries.",
            section_index, one_past_last, self.indices.len()),
          None));
      }
    }
    Ok(())
  }
}

/// Read access to an indexed static mesh.
pub trait HalaIndexedMeshSource {
  /// Check if the mesh geometry can be read back on the CPU.
  /// return: True if CPU access is enabled, false otherwise.
  fn has_cpu_access(&self) -> bool;

  /// Get the resolved render data of one LOD.
  /// param lod_index: The index of the LOD.
  /// return: The LOD resources, or None if the LOD does not exist.
  fn lod_resources(&self, lod_index: usize) -> Option<&HalaLodResources>;

  /// Get the simple collision hulls of the mesh.
  /// return: The convex hulls.
  fn simple_collision_hulls(&self) -> &[HalaConvexHull];

  /// Get the material slots of the mesh.
  /// return: The material slots.
  fn material_slots(&self) -> &[HalaMaterialHandle];
}

/// A CPU side indexed static mesh.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HalaStaticMeshData {
  pub cpu_access: bool,
  pub lods: Vec<HalaLodResources>,
  pub collision_hulls: Vec<HalaConvexHull>,
  pub materials: Vec<HalaMaterialHandle>,
}

/// The implementation of the static mesh data.
impl HalaStaticMeshData {
  /// Create new static mesh data, validating every LOD.
  /// param cpu_access: True if the geometry may be read back on the CPU.
  /// param lods: The resolved render data of all LODs.
  /// param collision_hulls: The simple collision hulls.
  /// param materials: The material slots.
  /// return: The static mesh data.
  pub fn new(
    cpu_access: bool,
    lods: Vec<HalaLodResources>,
    collision_hulls: Vec<HalaConvexHull>,
    materials: Vec<HalaMaterialHandle>,
  ) -> Result<Self, HalaProcMeshError> {
    for (lod_index, lod) in lods.iter().enumerate() {
      lod.validate().map_err(|err| HalaProcMeshError::new(
        &format!("Validate LOD {} failed.", lod_index),
        Some(Box::new(err))))?;
    }
    Ok(Self {
      cpu_access,
      lods,
      collision_hulls,
      materials,
    })
  }
}

/// The implementation of the indexed mesh source trait for the static mesh data.
impl HalaIndexedMeshSource for HalaStaticMeshData {
  fn has_cpu_access(&self) -> bool {
    self.cpu_access
  }

  fn lod_resources(&self, lod_index: usize) -> Option<&HalaLodResources> {
    self.lods.get(lod_index)
  }

  fn simple_collision_hulls(&self) -> &[HalaConvexHull] {
    &self.collision_hulls
  }

  fn material_slots(&self) -> &[HalaMaterialHandle] {
    &self.materials
  }
}
