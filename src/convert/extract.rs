use std::collections::HashMap;

use glam::{
  Vec2,
  Vec3,
};

use crate::mesh::{
  HalaIndexedMeshSource,
  HalaLodResources,
  HalaProceduralMesh,
  HalaProcMeshTangent,
};
use super::merge::HalaCopyResult;

/// The geometry of one extracted mesh section: a compacted vertex buffer as
/// parallel attribute arrays, plus section local triangle indices.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HalaSectionGeometry {
  pub positions: Vec<Vec3>,
  pub indices: Vec<u32>,
  pub normals: Vec<Vec3>,
  pub tex_coords: Vec<Vec2>,
  pub tangents: Vec<HalaProcMeshTangent>,
}

/// Resolve a global vertex index to a section local index, copying the
/// vertex attributes into the output buffers on first use. The remap table
/// is scoped to one section; two sections referencing the same global vertex
/// each get their own local copy.
/// param global_index: The index into the LOD's global vertex buffers.
/// param remap: The global to section local index map of the current section.
/// param lod: The LOD whose buffers are read.
/// param out: The section geometry being built.
/// return: The section local vertex index.
fn resolve_section_vertex(
  global_index: u32,
  remap: &mut HashMap<u32, u32>,
  lod: &HalaLodResources,
  out: &mut HalaSectionGeometry,
) -> u32 {
  if let Some(&local_index) = remap.get(&global_index) {
    return local_index;
  }

  out.positions.push(lod.positions[global_index as usize]);
  let local_index = (out.positions.len() - 1) as u32;
  out.normals.push(lod.normals[global_index as usize]);
  out.tex_coords.push(lod.tex_coords[global_index as usize]);
  out.tangents.push(HalaProcMeshTangent::from_vec4(lod.tangents[global_index as usize]));

  // A length mismatch here means the source buffers are corrupted.
  assert_eq!(out.normals.len(), out.positions.len(), "Corrupted section data: normal count differs from position count.");
  assert_eq!(out.tex_coords.len(), out.positions.len(), "Corrupted section data: tex coord count differs from position count.");
  assert_eq!(out.tangents.len(), out.positions.len(), "Corrupted section data: tangent count differs from position count.");

  remap.insert(global_index, local_index);
  local_index
}

/// Extract one section of an indexed static mesh LOD as a compacted,
/// section local vertex buffer with remapped triangle indices. The index
/// order of the source is preserved exactly, so the triangle winding of the
/// output matches the source. The output vertex count equals the number of
/// distinct global vertices the section references.
/// param source: The indexed mesh to read.
/// param lod_index: The index of the LOD.
/// param section_index: The index of the section inside the LOD.
/// return: The extracted geometry, or None if the mesh has no CPU access or
///         the LOD or section index is out of range.
pub fn extract_section(
  source: &dyn HalaIndexedMeshSource,
  lod_index: usize,
  section_index: usize,
) -> Option<HalaSectionGeometry> {
  if !source.has_cpu_access() {
    return None;
  }
  let lod = source.lod_resources(lod_index)?;
  let section = lod.sections.get(section_index)?;

  let mut out = HalaSectionGeometry::default();
  let mut remap = HashMap::new();

  let one_past_last = section.first_index as usize + section.num_triangles as usize * 3;
  for i in section.first_index as usize..one_past_last {
    let global_index = lod.indices[i];
    let local_index = resolve_section_vertex(global_index, &mut remap, lod, &mut out);
    out.indices.push(local_index);
  }

  log::debug!(
    "Extracted section {} of LOD {}: {} vertices from {} indices.",
    section_index, lod_index, out.positions.len(), out.indices.len());
  Some(out)
}

/// Copy a whole LOD of an indexed static mesh into a procedural mesh.
/// Every section is extracted and committed at the same numbered slot. The
/// destination's simple collision hulls are replaced with verbatim copies of
/// the source's, and every material slot is copied slot for slot. Collision
/// and material transfer do not depend on CPU geometry access.
/// param source: The indexed mesh to copy.
/// param destination: The procedural mesh receiving the copy.
/// param lod_index: The index of the LOD to copy.
/// param generate_collision: True if collision should be generated for the copied sections.
/// return: The number of sections copied, or InvalidArgument if a mesh reference was missing.
pub fn copy_from_static_mesh(
  source: Option<&dyn HalaIndexedMeshSource>,
  destination: Option<&mut HalaProceduralMesh>,
  lod_index: usize,
  generate_collision: bool,
) -> HalaCopyResult {
  let (Some(source), Some(destination)) = (source, destination) else {
    return HalaCopyResult::InvalidArgument;
  };

  let num_sections = source.lod_resources(lod_index).map_or(0, |lod| lod.sections.len());
  let mut counter = 0;
  for section_index in 0..num_sections {
    let Some(geometry) = extract_section(source, lod_index, section_index) else {
      continue;
    };
    destination.commit_section(
      section_index,
      &geometry.positions,
      &geometry.indices,
      &geometry.normals,
      &geometry.tex_coords,
      &[],
      &geometry.tangents,
      generate_collision,
    );
    counter += 1;
  }

  destination.clear_collision_hulls();
  for hull in source.simple_collision_hulls().iter() {
    destination.add_collision_hull(hull.points.clone());
  }

  for (slot_index, material) in source.material_slots().iter().enumerate() {
    destination.set_material_slot(slot_index, *material);
  }

  HalaCopyResult::Copied(counter)
}
