use crate::mesh::{
  HalaProceduralMesh,
  HalaProcMeshSource,
};

/// The outcome of a mesh copy or merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HalaCopyResult {
  /// A required mesh reference was missing; nothing was written.
  InvalidArgument,
  /// The number of sections written to the destination.
  Copied(usize),
}

/// The implementation of the copy result.
impl HalaCopyResult {
  /// Get the copied section count as a signed integer, -1 when a required
  /// mesh reference was missing. Scripting bindings expect this encoding.
  /// return: The section count or -1.
  pub fn section_count(&self) -> i32 {
    match *self {
      Self::InvalidArgument => -1,
      Self::Copied(count) => count as i32,
    }
  }
}

/// The result of a material slot copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HalaMaterialCopyResult {
  /// The number of slots written to the destination.
  pub copied: usize,
  /// False if the destination ran out of slots before every source slot
  /// was copied.
  pub completed: bool,
}

/// Copy the material slots of a procedural mesh into another procedural
/// mesh, starting at the given destination slot. The copy stops as soon as
/// the destination slot list is exhausted; stopping early is a normal
/// outcome, not an error.
/// param source: The mesh whose material slots are copied.
/// param destination: The mesh receiving the material slots.
/// param start_position: The destination slot of the first copied material.
/// return: The number of slots copied and whether the copy completed.
pub fn copy_material_slots(
  source: &dyn HalaProcMeshSource,
  destination: &mut HalaProceduralMesh,
  start_position: usize,
) -> HalaMaterialCopyResult {
  let mut counter = 0;
  for i in 0..source.num_materials() {
    if start_position + counter >= destination.num_materials() {
      log::debug!("Destination material slots exhausted after {} of {} copies.", counter, source.num_materials());
      return HalaMaterialCopyResult { copied: counter, completed: false };
    }
    let Some(material) = source.material_slot(i) else {
      break;
    };
    destination.set_material_slot(start_position + counter, material);
    counter += 1;
  }
  HalaMaterialCopyResult { copied: counter, completed: true }
}

/// Copy every section of a procedural mesh into another procedural mesh.
/// Source sections are already deduplicated, so their vertex buffers are
/// walked in order with no remapping. Section i of the source lands at slot
/// start_section + i of the destination. When requested, the material slots
/// are copied afterwards, independently of the section transfer.
/// param source: The mesh to copy.
/// param destination: The mesh receiving the copy.
/// param generate_collision: True if collision should be generated for the copied sections.
/// param start_section: The destination slot of the first copied section.
/// param copy_materials: True if the material slots should be copied as well.
/// param material_start_position: The destination slot of the first copied material.
/// return: The number of sections copied, or InvalidArgument if a mesh reference was missing.
pub fn copy_procedural_mesh(
  source: Option<&dyn HalaProcMeshSource>,
  destination: Option<&mut HalaProceduralMesh>,
  generate_collision: bool,
  start_section: usize,
  copy_materials: bool,
  material_start_position: usize,
) -> HalaCopyResult {
  let (Some(source), Some(destination)) = (source, destination) else {
    return HalaCopyResult::InvalidArgument;
  };

  let mut counter = 0;
  for i in 0..source.num_sections() {
    let Some(section) = source.section(i) else {
      break;
    };

    let mut positions = Vec::with_capacity(section.vertices.len());
    let mut normals = Vec::with_capacity(section.vertices.len());
    let mut uvs = Vec::with_capacity(section.vertices.len());
    let mut colors = Vec::with_capacity(section.vertices.len());
    let mut tangents = Vec::with_capacity(section.vertices.len());
    for vertex in section.vertices.iter() {
      positions.push(vertex.position);
      normals.push(vertex.normal);
      uvs.push(vertex.tex_coord);
      colors.push(vertex.color);
      tangents.push(vertex.tangent);
    }

    destination.commit_section(
      start_section + counter,
      &positions,
      &section.indices,
      &normals,
      &uvs,
      &colors,
      &tangents,
      generate_collision,
    );
    counter += 1;
  }

  if copy_materials {
    copy_material_slots(source, destination, material_start_position);
  }

  HalaCopyResult::Copied(counter)
}

/// Merge an ordered list of procedural meshes into a single procedural mesh.
/// Each source's sections land right after the previous source's, starting
/// at start_section, so section slots never collide. When requested, a
/// second pass copies the material slots in the same source order with the
/// same offset accumulation; that pass halts permanently on the first source
/// whose materials do not fit, leaving later sources' materials uncopied.
/// param sources: The meshes to merge, in order.
/// param destination: The mesh receiving the merge.
/// param _generate_collision: Ignored; merged sections always request collision.
/// param start_section: The destination slot of the first merged section.
/// param copy_materials: True if the material slots should be copied as well.
/// param material_start_position: The destination slot of the first copied material.
/// return: The total number of sections merged, or InvalidArgument if the destination was missing.
pub fn merge_procedural_meshes(
  sources: &[&dyn HalaProcMeshSource],
  destination: Option<&mut HalaProceduralMesh>,
  _generate_collision: bool,
  start_section: usize,
  copy_materials: bool,
  material_start_position: usize,
) -> HalaCopyResult {
  let Some(destination) = destination else {
    return HalaCopyResult::InvalidArgument;
  };

  let mut mesh_counter = 0;
  for source in sources.iter() {
    match copy_procedural_mesh(Some(*source), Some(&mut *destination), true, start_section + mesh_counter, false, 0) {
      HalaCopyResult::Copied(count) => mesh_counter += count,
      HalaCopyResult::InvalidArgument => return HalaCopyResult::InvalidArgument,
    }
  }

  if copy_materials {
    let mut material_counter = 0;
    for source in sources.iter() {
      let result = copy_material_slots(*source, destination, material_start_position + material_counter);
      material_counter += result.copied;
      if !result.completed {
        log::warn!("Material merge halted: destination holds {} slots.", destination.num_materials());
        break;
      }
    }
  }

  log::debug!("Merged {} meshes into {} sections.", sources.len(), mesh_counter);
  HalaCopyResult::Copied(mesh_counter)
}
