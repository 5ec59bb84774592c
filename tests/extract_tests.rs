use glam::{
  Vec2,
  Vec3,
  Vec4,
};

use hala_procmesh::prelude::*;

/// Build a two section, one LOD static mesh. The sections share global
/// vertex 2 and both reference some of their vertices more than once.
fn make_static_mesh() -> HalaStaticMeshData {
  let lod = HalaLodResources {
    sections: vec![
      HalaSectionInfo { first_index: 0, num_triangles: 2, material_index: 0 },
      HalaSectionInfo { first_index: 6, num_triangles: 2, material_index: 1 },
    ],
    // Section 0 references {0, 1, 2, 3}, section 1 references {2, 3, 4, 5}.
    indices: vec![0, 1, 2, 2, 1, 3, 2, 4, 5, 5, 4, 3],
    positions: vec![
      Vec3::new(0.0, 0.0, 0.0),
      Vec3::new(1.0, 0.0, 0.0),
      Vec3::new(0.0, 1.0, 0.0),
      Vec3::new(1.0, 1.0, 0.0),
      Vec3::new(2.0, 0.0, 0.0),
      Vec3::new(2.0, 1.0, 0.0),
    ],
    normals: vec![
      Vec3::new(1.0, 0.0, 0.0),
      Vec3::new(0.0, 1.0, 0.0),
      Vec3::new(0.0, 0.0, 1.0),
      Vec3::new(-1.0, 0.0, 0.0),
      Vec3::new(0.0, -1.0, 0.0),
      Vec3::new(0.0, 0.0, -1.0),
    ],
    tex_coords: vec![
      Vec2::new(0.0, 0.5),
      Vec2::new(0.1, 0.5),
      Vec2::new(0.2, 0.5),
      Vec2::new(0.3, 0.5),
      Vec2::new(0.4, 0.5),
      Vec2::new(0.5, 0.5),
    ],
    tangents: vec![
      Vec4::new(1.0, 0.0, 0.0, 1.0),
      Vec4::new(0.0, 1.0, 0.0, 1.0),
      Vec4::new(0.0, 0.0, 1.0, -1.0),
      Vec4::new(1.0, 0.0, 0.0, -1.0),
      Vec4::new(0.0, 1.0, 0.0, 1.0),
      Vec4::new(0.0, 0.0, 1.0, 1.0),
    ],
  };
  HalaStaticMeshData::new(
    true,
    vec![lod],
    vec![HalaConvexHull::new(vec![
      Vec3::new(0.0, 0.0, 0.0),
      Vec3::new(1.0, 0.0, 0.0),
      Vec3::new(0.0, 1.0, 0.0),
      Vec3::new(0.0, 0.0, 1.0),
    ])],
    vec![HalaMaterialHandle(7), HalaMaterialHandle(8)],
  ).unwrap()
}

/// Every triangle corner of the extracted section must resolve, through the
/// remapped indices, to exactly the attribute values of the global vertex it
/// came from.
fn assert_section_matches_source(mesh: &HalaStaticMeshData, section_index: usize, geometry: &HalaSectionGeometry) {
  let lod = &mesh.lods[0];
  let section = &lod.sections[section_index];
  let first = section.first_index as usize;
  let count = section.num_triangles as usize * 3;
  assert_eq!(geometry.indices.len(), count);
  for k in 0..count {
    let global = lod.indices[first + k] as usize;
    let local = geometry.indices[k] as usize;
    assert_eq!(geometry.positions[local], lod.positions[global]);
    assert_eq!(geometry.normals[local], lod.normals[global]);
    assert_eq!(geometry.tex_coords[local], lod.tex_coords[global]);
    assert_eq!(geometry.tangents[local].tangent, lod.tangents[global].truncate());
  }
}

#[test]
fn extraction_deduplicates_vertices() {
  let mesh = make_static_mesh();
  let geometry = extract_section(&mesh, 0, 0).unwrap();
  // Section 0 has 6 index entries but only 4 distinct vertices.
  assert_eq!(geometry.indices.len(), 6);
  assert_eq!(geometry.positions.len(), 4);
}

#[test]
fn extraction_preserves_triangle_order() {
  let mesh = make_static_mesh();
  let geometry = extract_section(&mesh, 0, 1).unwrap();
  // Section 1 walks globals [2, 4, 5, 5, 4, 3]; locals are assigned in
  // first use order, so the remapped sequence is fully determined.
  assert_eq!(geometry.indices, vec![0, 1, 2, 2, 1, 3]);
}

#[test]
fn extraction_matches_source_attributes() {
  let mesh = make_static_mesh();
  for section_index in 0..2 {
    let geometry = extract_section(&mesh, 0, section_index).unwrap();
    assert_section_matches_source(&mesh, section_index, &geometry);
  }
}

#[test]
fn extraction_keeps_attributes_aligned() {
  let mesh = make_static_mesh();
  let geometry = extract_section(&mesh, 0, 0).unwrap();
  assert_eq!(geometry.normals.len(), geometry.positions.len());
  assert_eq!(geometry.tex_coords.len(), geometry.positions.len());
  assert_eq!(geometry.tangents.len(), geometry.positions.len());
}

#[test]
fn extraction_copies_tangent_handedness() {
  let mesh = make_static_mesh();
  let geometry = extract_section(&mesh, 0, 0).unwrap();
  // Globals 0 and 1 have w = 1, globals 2 and 3 have w = -1; locals follow
  // first use order.
  assert!(!geometry.tangents[0].flip_binormal);
  assert!(!geometry.tangents[1].flip_binormal);
  assert!(geometry.tangents[2].flip_binormal);
  assert!(geometry.tangents[3].flip_binormal);
}

#[test]
fn extraction_does_not_share_vertices_between_sections() {
  let mesh = make_static_mesh();
  let first = extract_section(&mesh, 0, 0).unwrap();
  let second = extract_section(&mesh, 0, 1).unwrap();
  // Globals 2 and 3 are referenced by both sections; each section gets its
  // own local copies.
  assert_eq!(first.positions.len(), 4);
  assert_eq!(second.positions.len(), 4);
  let shared = mesh.lods[0].positions[2];
  assert!(first.positions.contains(&shared));
  assert!(second.positions.contains(&shared));
}

#[test]
fn extraction_is_idempotent() {
  let mesh = make_static_mesh();
  let first = extract_section(&mesh, 0, 1).unwrap();
  let second = extract_section(&mesh, 0, 1).unwrap();
  assert_eq!(first, second);
}

#[test]
fn extraction_requires_cpu_access() {
  let mut mesh = make_static_mesh();
  mesh.cpu_access = false;
  assert!(extract_section(&mesh, 0, 0).is_none());
}

#[test]
fn extraction_yields_nothing_out_of_range() {
  let mesh = make_static_mesh();
  assert!(extract_section(&mesh, 1, 0).is_none());
  assert!(extract_section(&mesh, 0, 2).is_none());
}

#[test]
#[should_panic(expected = "index out of bounds")]
fn extraction_of_oversized_section_fails_on_index_lookup() {
  let mut mesh = make_static_mesh();
  // A hand-built source can claim a section range whose end does not even
  // fit in u32 arithmetic; the walk must reach the index buffer bounds
  // check instead of wrapping.
  mesh.lods[0].sections[0].num_triangles = u32::MAX / 3 + 1;
  let _ = extract_section(&mesh, 0, 0);
}

#[test]
fn full_copy_transfers_sections_collision_and_materials() {
  let mesh = make_static_mesh();
  let mut destination = HalaProceduralMesh::new();
  // Pre-existing hulls must be replaced, not appended to.
  destination.add_collision_hull(vec![Vec3::ZERO]);

  let result = copy_from_static_mesh(Some(&mesh), Some(&mut destination), 0, true);
  assert_eq!(result, HalaCopyResult::Copied(2));

  assert_eq!(destination.num_sections(), 2);
  for section_index in 0..2 {
    let section = destination.section(section_index).unwrap();
    assert_eq!(section.vertices.len(), 4);
    assert_eq!(section.indices.len(), 6);
    assert!(section.enable_collision);
    // Colors are absent on the indexed path and default to opaque white.
    assert!(section.vertices.iter().all(|v| v.color == Vec4::ONE));
  }

  assert_eq!(destination.collision_hulls().len(), 1);
  assert_eq!(destination.collision_hulls()[0], mesh.collision_hulls[0]);

  assert_eq!(destination.num_materials(), 2);
  assert_eq!(destination.material_slot(0), Some(HalaMaterialHandle(7)));
  assert_eq!(destination.material_slot(1), Some(HalaMaterialHandle(8)));
}

#[test]
fn full_copy_without_cpu_access_still_transfers_collision_and_materials() {
  let mut mesh = make_static_mesh();
  mesh.cpu_access = false;
  let mut destination = HalaProceduralMesh::new();

  let result = copy_from_static_mesh(Some(&mesh), Some(&mut destination), 0, false);
  assert_eq!(result, HalaCopyResult::Copied(0));
  assert_eq!(destination.num_sections(), 0);
  assert_eq!(destination.collision_hulls().len(), 1);
  assert_eq!(destination.material_slot(0), Some(HalaMaterialHandle(7)));
}

#[test]
fn full_copy_rejects_missing_references() {
  let mesh = make_static_mesh();
  let mut destination = HalaProceduralMesh::new();
  assert_eq!(copy_from_static_mesh(None, Some(&mut destination), 0, true), HalaCopyResult::InvalidArgument);
  assert_eq!(copy_from_static_mesh(Some(&mesh), None, 0, true), HalaCopyResult::InvalidArgument);
  assert_eq!(destination.num_sections(), 0);
  assert_eq!(destination.num_materials(), 0);
}

#[test]
fn static_mesh_validation_rejects_misaligned_buffers() {
  let mut mesh = make_static_mesh();
  let mut lod = mesh.lods.remove(0);
  lod.normals.pop();
  assert!(HalaStaticMeshData::new(true, vec![lod], vec![], vec![]).is_err());
}

#[test]
fn static_mesh_validation_rejects_out_of_range_indices() {
  let mut mesh = make_static_mesh();
  let mut lod = mesh.lods.remove(0);
  lod.indices[3] = 99;
  assert!(HalaStaticMeshData::new(true, vec![lod], vec![], vec![]).is_err());
}

#[test]
fn static_mesh_validation_rejects_overflowing_sections() {
  let mut mesh = make_static_mesh();
  let mut lod = mesh.lods.remove(0);
  lod.sections[1].num_triangles = 3;
  assert!(HalaStaticMeshData::new(true, vec![lod], vec![], vec![]).is_err());
}
