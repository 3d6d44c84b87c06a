pub mod assembly;

pub use assembly::{Material, Primitive, PrimitiveKind, SceneNode, Transform};
