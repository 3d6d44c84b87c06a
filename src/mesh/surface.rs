use crate::math::{Color, Vec3};

/// A vertex with position, normal, UV, and surface attributes
#[derive(Debug, Clone, Copy)]
pub struct Vertex {
    pub position: Vec3,
    pub normal: Vec3,
    pub uv: [f32; 2],
    /// Base color for this vertex (materials are baked per vertex)
    pub color: Color,
    /// Alpha for translucent foliage
    pub opacity: f32,
}

impl Vertex {
    pub fn new(position: Vec3, normal: Vec3) -> Self {
        Self {
            position,
            normal,
            uv: [0.0, 0.0],
            color: Color::WHITE,
            opacity: 1.0,
        }
    }

    pub fn with_uv(mut self, u: f32, v: f32) -> Self {
        self.uv = [u, v];
        self
    }

    pub fn with_surface(mut self, color: Color, opacity: f32) -> Self {
        self.color = color;
        self.opacity = opacity;
        self
    }

    /// Convert to flat array for WebGL buffer
    /// Layout: position(3) + normal(3) + uv(2) + color(3) + opacity(1) = 12 floats
    pub fn to_array(&self) -> [f32; 12] {
        [
            self.position.x, self.position.y, self.position.z,
            self.normal.x, self.normal.y, self.normal.z,
            self.uv[0], self.uv[1],
            self.color.r, self.color.g, self.color.b,
            self.opacity,
        ]
    }
}

/// A mesh composed of vertices and triangle indices
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
    pub bounds_center: Vec3,
    pub bounds_radius: f32,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add vertices and return the starting index
    pub fn add_vertices(&mut self, verts: impl IntoIterator<Item = Vertex>) -> u32 {
        let start = self.vertices.len() as u32;
        self.vertices.extend(verts);
        start
    }

    pub fn add_triangle(&mut self, a: u32, b: u32, c: u32) {
        self.indices.push(a);
        self.indices.push(b);
        self.indices.push(c);
    }

    /// Add a quad as two triangles (CCW winding)
    pub fn add_quad(&mut self, a: u32, b: u32, c: u32, d: u32) {
        self.add_triangle(a, b, c);
        self.add_triangle(a, c, d);
    }

    /// Merge another mesh into this one
    pub fn merge(&mut self, other: &Mesh) {
        let offset = self.vertices.len() as u32;
        self.vertices.extend(other.vertices.iter().cloned());
        for idx in &other.indices {
            self.indices.push(idx + offset);
        }
    }

    /// Calculate bounding sphere
    pub fn calculate_bounds(&mut self) {
        if self.vertices.is_empty() {
            self.bounds_center = Vec3::ZERO;
            self.bounds_radius = 0.0;
            return;
        }

        let mut center = Vec3::ZERO;
        for v in &self.vertices {
            center = center + v.position;
        }
        center = center.scale(1.0 / self.vertices.len() as f32);

        let mut max_dist = 0.0f32;
        for v in &self.vertices {
            max_dist = max_dist.max(v.position.distance(&center));
        }

        self.bounds_center = center;
        self.bounds_radius = max_dist;
    }

    /// Get vertex buffer data as flat f32 array
    pub fn vertex_data(&self) -> Vec<f32> {
        self.vertices.iter().flat_map(|v| v.to_array()).collect()
    }

    /// Get index data
    pub fn index_data(&self) -> &[u32] {
        &self.indices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

/// Create a horizontal ring of vertices around the Y axis
pub fn create_ring(
    y: f32,
    radius: f32,
    segments: usize,
    slope: f32,
    v_coord: f32,
    color: Color,
    opacity: f32,
) -> Vec<Vertex> {
    (0..=segments)
        .map(|i| {
            let u = i as f32 / segments as f32;
            let angle = u * std::f32::consts::TAU;
            let cos_a = angle.cos();
            let sin_a = angle.sin();

            let position = Vec3::new(cos_a * radius, y, sin_a * radius);
            let normal = Vec3::new(cos_a, slope, sin_a).normalize();

            Vertex::new(position, normal)
                .with_uv(u, v_coord)
                .with_surface(color, opacity)
        })
        .collect()
}

/// Connect two rings of segments+1 vertices (seam duplicated) with quads
pub fn connect_rings(mesh: &mut Mesh, ring1_start: u32, ring2_start: u32, segments: usize) {
    for i in 0..segments as u32 {
        let a = ring1_start + i;
        let b = ring1_start + i + 1;
        let c = ring2_start + i + 1;
        let d = ring2_start + i;

        mesh.add_quad(a, d, c, b);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_to_array() {
        let v = Vertex::new(Vec3::new(1.0, 2.0, 3.0), Vec3::UP)
            .with_uv(0.5, 0.25)
            .with_surface(Color::new(0.1, 0.2, 0.3), 0.9);

        let arr = v.to_array();
        assert_eq!(arr.len(), 12);
        assert_eq!(arr[0], 1.0); // position.x
        assert_eq!(arr[4], 1.0); // normal.y
        assert_eq!(arr[6], 0.5); // uv.u
        assert_eq!(arr[8], 0.1); // color.r
        assert_eq!(arr[11], 0.9); // opacity
    }

    #[test]
    fn test_mesh_add_triangle() {
        let mut mesh = Mesh::new();
        mesh.add_vertices(vec![
            Vertex::new(Vec3::ZERO, Vec3::UP),
            Vertex::new(Vec3::RIGHT, Vec3::UP),
            Vertex::new(Vec3::UP, Vec3::UP),
        ]);
        mesh.add_triangle(0, 1, 2);
        assert_eq!(mesh.triangle_count(), 1);
    }

    #[test]
    fn test_mesh_merge_offsets_indices() {
        let mut mesh1 = Mesh::new();
        mesh1.add_vertices(vec![Vertex::new(Vec3::ZERO, Vec3::UP)]);
        mesh1.add_triangle(0, 0, 0);

        let mut mesh2 = Mesh::new();
        mesh2.add_vertices(vec![Vertex::new(Vec3::UP, Vec3::UP)]);
        mesh2.add_triangle(0, 0, 0);

        mesh1.merge(&mesh2);
        assert_eq!(mesh1.vertex_count(), 2);
        assert_eq!(mesh1.indices[3], 1);
    }

    #[test]
    fn test_create_ring_radius() {
        let ring = create_ring(0.0, 1.0, 8, 0.0, 0.0, Color::WHITE, 1.0);
        assert_eq!(ring.len(), 9); // seam vertex duplicated

        for v in &ring {
            let dist = (v.position.x.powi(2) + v.position.z.powi(2)).sqrt();
            assert!((dist - 1.0).abs() < 0.001);
        }
    }

    #[test]
    fn test_connect_rings() {
        let mut mesh = Mesh::new();
        let r1 = create_ring(0.0, 1.0, 4, 0.0, 0.0, Color::WHITE, 1.0);
        let r2 = create_ring(1.0, 0.8, 4, 0.0, 1.0, Color::WHITE, 1.0);

        let start1 = mesh.add_vertices(r1);
        let start2 = mesh.add_vertices(r2);
        connect_rings(&mut mesh, start1, start2, 4);

        assert_eq!(mesh.vertex_count(), 10);
        assert_eq!(mesh.triangle_count(), 8); // 4 quads
    }

    #[test]
    fn test_calculate_bounds() {
        let mut mesh = Mesh::new();
        mesh.add_vertices(vec![
            Vertex::new(Vec3::new(-1.0, 0.0, 0.0), Vec3::UP),
            Vertex::new(Vec3::new(1.0, 0.0, 0.0), Vec3::UP),
            Vertex::new(Vec3::new(0.0, 2.0, 0.0), Vec3::UP),
        ]);
        mesh.calculate_bounds();
        assert!(mesh.bounds_radius > 0.0);
    }

    #[test]
    fn test_vertex_data_flat() {
        let mut mesh = Mesh::new();
        mesh.add_vertices(vec![
            Vertex::new(Vec3::ZERO, Vec3::UP),
            Vertex::new(Vec3::RIGHT, Vec3::UP),
        ]);

        let data = mesh.vertex_data();
        assert_eq!(data.len(), 24); // 2 vertices * 12 floats
    }
}
