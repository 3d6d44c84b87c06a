pub mod plant;

pub use plant::{Category, Plant, Preparation, PreparationKind};
