pub mod vertex;
pub mod material;
pub mod collision;
pub mod section;
pub mod indexed;
pub mod procedural;

pub use vertex::{HalaProcMeshVertex, HalaProcMeshTangent};
pub use material::HalaMaterialHandle;
pub use collision::HalaConvexHull;
pub use section::HalaProcMeshSection;
pub use indexed::{
  HalaSectionInfo,
  HalaLodResources,
  HalaStaticMeshData,
  HalaIndexedMeshSource,
};
pub use procedural::{HalaProceduralMesh, HalaProcMeshSource};
