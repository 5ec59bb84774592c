pub mod prelude;
pub mod error;
pub mod mesh;
pub mod convert;
