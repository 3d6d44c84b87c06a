//! Bakes a scene assembly into a single mesh for upload.

use crate::math::Mat4;
use crate::scene::SceneNode;
use super::primitives::tessellate;
use super::surface::Mesh;

/// Flatten a scene assembly into one mesh, applying composed transforms
pub fn assemble(root: &SceneNode) -> Mesh {
    let mut mesh = Mesh::new();
    walk(root, &Mat4::identity(), &mut mesh);
    mesh.calculate_bounds();
    mesh
}

fn walk(node: &SceneNode, parent: &Mat4, mesh: &mut Mesh) {
    let t = &node.transform;
    let world = parent.mul(&Mat4::trs(t.position, t.rotation, t.scale));

    if let Some((primitive, material)) = &node.shape {
        let mut part = tessellate(primitive, material);
        for vertex in &mut part.vertices {
            vertex.position = world.transform_point(vertex.position);
            // Good enough for the near-uniform scales the builders use
            vertex.normal = world.transform_direction(vertex.normal).normalize();
        }
        mesh.merge(&part);
    }

    for child in &node.children {
        walk(child, &world, mesh);
    }
}
