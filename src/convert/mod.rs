pub mod extract;
pub mod merge;

pub use extract::{
  HalaSectionGeometry,
  extract_section,
  copy_from_static_mesh,
};
pub use merge::{
  HalaCopyResult,
  HalaMaterialCopyResult,
  copy_procedural_mesh,
  merge_procedural_meshes,
  copy_material_slots,
};
