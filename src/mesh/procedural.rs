use glam::{
  Vec2,
  Vec3,
  Vec4,
};
use serde::{
  Deserialize, Serialize
};

use crate::mesh::{
  HalaConvexHull,
  HalaMaterialHandle,
  HalaProcMeshSection,
  HalaProcMeshTangent,
  HalaProcMeshVertex,
};

/// Read access to a procedural mesh used as a copy source.
pub trait HalaProcMeshSource {
  /// Get the number of sections.
  /// return: The number of sections.
  fn num_sections(&self) -> usize;

  /// Get one section.
  /// param index: The index of the section.
  /// return: The section, or None if the index is out of range.
  fn section(&self, index: usize) -> Option<&HalaProcMeshSection>;

  /// Get the number of material slots.
  /// return: The number of material slots.
  fn num_materials(&self) -> usize;

  /// Get one material slot.
  /// param index: The index of the slot.
  /// return: The material handle, or None if the index is out of range.
  fn material_slot(&self, index: usize) -> Option<HalaMaterialHandle>;
}

/// A runtime editable mesh built from explicit per section geometry.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HalaProceduralMesh {
  sections: Vec<HalaProcMeshSection>,
  materials: Vec<HalaMaterialHandle>,
  collision_hulls: Vec<HalaConvexHull>,
}

/// The implementation of the procedural mesh.
impl HalaProceduralMesh {
  /// Create a new empty procedural mesh.
  /// return: The procedural mesh.
  pub fn new() -> Self {
    Self::default()
  }

  /// Write one section of the mesh at the given slot, replacing any section
  /// already stored there. The section list grows with empty sections up to
  /// the slot. All attribute slices must be index aligned; the color slice
  /// may be empty, in which case every vertex gets an opaque white color.
  /// param slot: The section slot to write.
  /// param positions: The vertex positions.
  /// param indices: The section local triangle indices.
  /// param normals: The vertex normals.
  /// param uvs: The vertex texture coordinates.
  /// param colors: The vertex colors, or an empty slice.
  /// param tangents: The vertex tangents.
  /// param generate_collision: True if collision should be generated for this section.
  pub fn commit_section(
    &mut self,
    slot: usize,
    positions: &[Vec3],
    indices: &[u32],
    normals: &[Vec3],
    uvs: &[Vec2],
    colors: &[Vec4],
    tangents: &[HalaProcMeshTangent],
    generate_collision: bool,
  ) {
    // A length mismatch here means the source buffers are corrupted.
    assert_eq!(normals.len(), positions.len(), "Corrupted section data: normal count differs from position count.");
    assert_eq!(uvs.len(), positions.len(), "Corrupted section data: tex coord count differs from position count.");
    assert_eq!(tangents.len(), positions.len(), "Corrupted section data: tangent count differs from position count.");
    assert!(colors.is_empty() || colors.len() == positions.len(), "Corrupted section data: color count differs from position count.");

    let mut vertices = Vec::with_capacity(positions.len());
    for i in 0..positions.len() {
      vertices.push(HalaProcMeshVertex {
        position: positions[i],
        normal: normals[i],
        tangent: tangents[i],
        tex_coord: uvs[i],
        color: if colors.is_empty() { Vec4::ONE } else { colors[i] },
      });
    }

    if slot >= self.sections.len() {
      self.sections.resize_with(slot + 1, HalaProcMeshSection::default);
    }
    self.sections[slot] = HalaProcMeshSection {
      vertices,
      indices: indices.to_vec(),
      enable_collision: generate_collision,
    };
    log::debug!("Committed section {} with {} vertices and {} indices.", slot, positions.len(), indices.len());
  }

  /// Remove all simple collision hulls.
  pub fn clear_collision_hulls(&mut self) {
    self.collision_hulls.clear();
  }

  /// Add one simple collision hull.
  /// param points: The points of the hull.
  pub fn add_collision_hull(&mut self, points: Vec<Vec3>) {
    self.collision_hulls.push(HalaConvexHull::new(points));
  }

  /// Get the simple collision hulls.
  /// return: The convex hulls.
  pub fn collision_hulls(&self) -> &[HalaConvexHull] {
    &self.collision_hulls
  }

  /// Assign a material slot, growing the slot list with unassigned slots
  /// when the index lies past the end.
  /// param index: The index of the slot.
  /// param material: The material handle.
  pub fn set_material_slot(&mut self, index: usize, material: HalaMaterialHandle) {
    if index >= self.materials.len() {
      self.materials.resize(index + 1, HalaMaterialHandle::INVALID);
    }
    self.materials[index] = material;
  }

  /// Pre-size the material slot list. Existing slot assignments below the
  /// new size are kept; new slots start unassigned.
  /// param num_slots: The number of material slots.
  pub fn set_num_material_slots(&mut self, num_slots: usize) {
    self.materials.resize(num_slots, HalaMaterialHandle::INVALID);
  }
}

/// The implementation of the procedural mesh source trait for the procedural
/// mesh, so a merged mesh can feed another copy or merge.
impl HalaProcMeshSource for HalaProceduralMesh {
  fn num_sections(&self) -> usize {
    self.sections.len()
  }

  fn section(&self, index: usize) -> Option<&HalaProcMeshSection> {
    self.sections.get(index)
  }

  fn num_materials(&self) -> usize {
    self.materials.len()
  }

  fn material_slot(&self, index: usize) -> Option<HalaMaterialHandle> {
    self.materials.get(index).copied()
  }
}
