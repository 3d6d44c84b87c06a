use crate::math::{Color, Vec3};

/// Primitive shapes the plant builders compose
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    /// Tapered tube along the Y axis, centered on the origin
    Cylinder {
        radius_top: f32,
        radius_bottom: f32,
        height: f32,
        radial_segments: usize,
    },
    /// UV sphere centered on the origin
    Sphere {
        radius: f32,
        width_segments: usize,
        height_segments: usize,
    },
    /// Cone along the Y axis; open_ended skips the base cap
    Cone {
        radius: f32,
        height: f32,
        radial_segments: usize,
        open_ended: bool,
    },
    /// Axis-aligned box centered on the origin
    Cuboid {
        width: f32,
        height: f32,
        depth: f32,
    },
}

/// Shape kind tag, used to compare assemblies structurally
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Cylinder,
    Sphere,
    Cone,
    Cuboid,
}

impl Primitive {
    pub fn kind(&self) -> PrimitiveKind {
        match self {
            Primitive::Cylinder { .. } => PrimitiveKind::Cylinder,
            Primitive::Sphere { .. } => PrimitiveKind::Sphere,
            Primitive::Cone { .. } => PrimitiveKind::Cone,
            Primitive::Cuboid { .. } => PrimitiveKind::Cuboid,
        }
    }
}

/// Surface properties for one primitive
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub color: Color,
    pub roughness: f32,
    pub metalness: f32,
    pub opacity: f32,
}

impl Material {
    pub fn new(color: Color) -> Self {
        Self {
            color,
            roughness: 0.8,
            metalness: 0.1,
            opacity: 1.0,
        }
    }

    pub fn hex(hex: u32) -> Self {
        Self::new(Color::from_hex(hex))
    }

    pub fn with_roughness(mut self, roughness: f32) -> Self {
        self.roughness = roughness;
        self
    }

    pub fn with_metalness(mut self, metalness: f32) -> Self {
        self.metalness = metalness;
        self
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }
}

/// Local transform applied to a node and everything below it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    /// Euler rotation in radians
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

/// A tree of primitive shapes with per-node transform and material
#[derive(Debug, Clone)]
pub struct SceneNode {
    pub transform: Transform,
    pub shape: Option<(Primitive, Material)>,
    pub children: Vec<SceneNode>,
}

impl SceneNode {
    /// Empty group node
    pub fn group() -> Self {
        Self {
            transform: Transform::default(),
            shape: None,
            children: Vec::new(),
        }
    }

    /// Leaf node carrying one primitive
    pub fn shape(primitive: Primitive, material: Material) -> Self {
        Self {
            transform: Transform::default(),
            shape: Some((primitive, material)),
            children: Vec::new(),
        }
    }

    pub fn at(mut self, x: f32, y: f32, z: f32) -> Self {
        self.transform.position = Vec3::new(x, y, z);
        self
    }

    pub fn rotated(mut self, x: f32, y: f32, z: f32) -> Self {
        self.transform.rotation = Vec3::new(x, y, z);
        self
    }

    pub fn scaled(mut self, x: f32, y: f32, z: f32) -> Self {
        self.transform.scale = Vec3::new(x, y, z);
        self
    }

    pub fn with_child(mut self, child: SceneNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn add_child(&mut self, child: SceneNode) {
        self.children.push(child);
    }

    /// Total number of primitives in this subtree
    pub fn primitive_count(&self) -> usize {
        let own = usize::from(self.shape.is_some());
        own + self.children.iter().map(SceneNode::primitive_count).sum::<usize>()
    }

    /// Count primitives by kind, sorted for stable comparison
    pub fn count_kinds(&self) -> Vec<(PrimitiveKind, usize)> {
        use std::collections::HashMap;

        fn walk(node: &SceneNode, counts: &mut HashMap<PrimitiveKind, usize>) {
            if let Some((primitive, _)) = &node.shape {
                *counts.entry(primitive.kind()).or_insert(0) += 1;
            }
            for child in &node.children {
                walk(child, counts);
            }
        }

        let mut counts = HashMap::new();
        walk(self, &mut counts);

        let mut sorted: Vec<_> = counts.into_iter().collect();
        sorted.sort_by_key(|(kind, _)| format!("{:?}", kind));
        sorted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stem() -> SceneNode {
        SceneNode::shape(
            Primitive::Cylinder {
                radius_top: 0.1,
                radius_bottom: 0.15,
                height: 1.5,
                radial_segments: 16,
            },
            Material::hex(0x4A5D3A),
        )
    }

    #[test]
    fn test_group_is_empty() {
        let node = SceneNode::group();
        assert_eq!(node.primitive_count(), 0);
        assert!(node.shape.is_none());
    }

    #[test]
    fn test_primitive_count_nested() {
        let node = SceneNode::group()
            .with_child(stem())
            .with_child(SceneNode::group().with_child(stem()).with_child(stem()));
        assert_eq!(node.primitive_count(), 3);
    }

    #[test]
    fn test_count_kinds() {
        let node = SceneNode::group()
            .with_child(stem())
            .with_child(SceneNode::shape(
                Primitive::Sphere { radius: 0.8, width_segments: 16, height_segments: 12 },
                Material::hex(0x66BB6A),
            ));
        let kinds = node.count_kinds();
        assert_eq!(kinds.len(), 2);
        assert!(kinds.contains(&(PrimitiveKind::Cylinder, 1)));
        assert!(kinds.contains(&(PrimitiveKind::Sphere, 1)));
    }

    #[test]
    fn test_transform_builders() {
        let node = stem().at(1.0, 2.0, 3.0).rotated(0.0, 0.5, 0.0).scaled(1.0, 2.0, 1.0);
        assert_eq!(node.transform.position, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(node.transform.scale.y, 2.0);
    }

    #[test]
    fn test_material_builders() {
        let m = Material::hex(0x3E2723)
            .with_roughness(0.9)
            .with_metalness(0.05)
            .with_opacity(0.8);
        assert!((m.roughness - 0.9).abs() < f32::EPSILON);
        assert!((m.opacity - 0.8).abs() < f32::EPSILON);
    }
}
