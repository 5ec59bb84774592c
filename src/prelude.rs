pub use crate::error::HalaProcMeshError;
pub use crate::mesh::{
  HalaProcMeshVertex,
  HalaProcMeshTangent,
  HalaProcMeshSection,
  HalaMaterialHandle,
  HalaConvexHull,
  HalaSectionInfo,
  HalaLodResources,
  HalaStaticMeshData,
  HalaIndexedMeshSource,
  HalaProceduralMesh,
  HalaProcMeshSource,
};
pub use crate::convert::{
  HalaSectionGeometry,
  HalaCopyResult,
  HalaMaterialCopyResult,
  extract_section,
  copy_from_static_mesh,
  copy_procedural_mesh,
  merge_procedural_meshes,
  copy_material_slots,
};
