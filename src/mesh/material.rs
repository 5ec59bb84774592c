use serde::{
  Deserialize, Serialize
};

/// A reference to a material in an external material library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HalaMaterialHandle(pub u32);

/// The implementation of the material handle.
impl HalaMaterialHandle {
  /// The handle of an unassigned material slot.
  pub const INVALID: Self = Self(u32::MAX);

  /// Check if the handle references a material.
  /// return: True if the handle is assigned, false otherwise.
  pub fn is_valid(&self) -> bool {
    self.0 != u32::MAX
  }
}

impl Default for HalaMaterialHandle {
  fn default() -> Self {
    Self::INVALID
  }
}
