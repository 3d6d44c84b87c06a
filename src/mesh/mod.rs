pub mod surface;
pub mod primitives;
pub mod assembler;

pub use surface::{Mesh, Vertex};
pub use assembler::assemble;
