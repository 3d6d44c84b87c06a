//! Tessellation of the primitive shapes into triangle meshes.
//!
//! All primitives are generated in local space, centered on the origin with
//! their long axis along Y; the assembler bakes world transforms afterward.

use std::f32::consts::TAU;

use crate::math::Vec3;
use crate::scene::{Material, Primitive};
use super::surface::{connect_rings, create_ring, Mesh, Vertex};

/// Tessellate a primitive with its material baked into the vertices
pub fn tessellate(primitive: &Primitive, material: &Material) -> Mesh {
    match *primitive {
        Primitive::Cylinder {
            radius_top,
            radius_bottom,
            height,
            radial_segments,
        } => tessellate_cylinder(radius_top, radius_bottom, height, radial_segments, material),
        Primitive::Sphere {
            radius,
            width_segments,
            height_segments,
        } => tessellate_sphere(radius, width_segments, height_segments, material),
        Primitive::Cone {
            radius,
            height,
            radial_segments,
            open_ended,
        } => tessellate_cone(radius, height, radial_segments, open_ended, material),
        Primitive::Cuboid {
            width,
            height,
            depth,
        } => tessellate_cuboid(width, height, depth, material),
    }
}

fn tessellate_cylinder(
    radius_top: f32,
    radius_bottom: f32,
    height: f32,
    radial_segments: usize,
    material: &Material,
) -> Mesh {
    let segments = radial_segments.max(3);
    let half = height / 2.0;
    let slope = (radius_bottom - radius_top) / height.max(1e-6);

    let mut mesh = Mesh::new();

    let bottom = create_ring(-half, radius_bottom, segments, slope, 0.0, material.color, material.opacity);
    let top = create_ring(half, radius_top, segments, slope, 1.0, material.color, material.opacity);

    let bottom_start = mesh.add_vertices(bottom);
    let top_start = mesh.add_vertices(top);
    connect_rings(&mut mesh, bottom_start, top_start, segments);

    if radius_top > 0.0 {
        add_cap(&mut mesh, half, radius_top, segments, true, material);
    }
    if radius_bottom > 0.0 {
        add_cap(&mut mesh, -half, radius_bottom, segments, false, material);
    }

    mesh
}

/// Flat disc cap with its own vertices so the rim normal stays hard
fn add_cap(mesh: &mut Mesh, y: f32, radius: f32, segments: usize, facing_up: bool, material: &Material) {
    let normal = if facing_up { Vec3::UP } else { -Vec3::UP };

    let center = Vertex::new(Vec3::new(0.0, y, 0.0), normal)
        .with_uv(0.5, 0.5)
        .with_surface(material.color, material.opacity);
    let center_idx = mesh.add_vertices(std::iter::once(center));

    let rim: Vec<Vertex> = (0..=segments)
        .map(|i| {
            let u = i as f32 / segments as f32;
            let angle = u * TAU;
            let position = Vec3::new(angle.cos() * radius, y, angle.sin() * radius);
            Vertex::new(position, normal)
                .with_uv(u, if facing_up { 1.0 } else { 0.0 })
                .with_surface(material.color, material.opacity)
        })
        .collect();
    let rim_start = mesh.add_vertices(rim);

    for i in 0..segments as u32 {
        if facing_up {
            mesh.add_triangle(center_idx, rim_start + i, rim_start + i + 1);
        } else {
            mesh.add_triangle(center_idx, rim_start + i + 1, rim_start + i);
        }
    }
}

fn tessellate_sphere(
    radius: f32,
    width_segments: usize,
    height_segments: usize,
    material: &Material,
) -> Mesh {
    let w = width_segments.max(3);
    let h = height_segments.max(2);

    let mut mesh = Mesh::new();

    for row in 0..=h {
        let v = row as f32 / h as f32;
        let theta = v * std::f32::consts::PI;
        let ring_radius = radius * theta.sin();
        let y = radius * theta.cos();

        let ring: Vec<Vertex> = (0..=w)
            .map(|col| {
                let u = col as f32 / w as f32;
                let phi = u * TAU;
                let position = Vec3::new(phi.cos() * ring_radius, y, phi.sin() * ring_radius);
                let normal = if radius > 0.0 { position.scale(1.0 / radius) } else { Vec3::UP };
                Vertex::new(position, normal)
                    .with_uv(u, 1.0 - v)
                    .with_surface(material.color, material.opacity)
            })
            .collect();
        mesh.add_vertices(ring);
    }

    let stride = (w + 1) as u32;
    for row in 0..h as u32 {
        for col in 0..w as u32 {
            let a = row * stride + col;
            let b = (row + 1) * stride + col;
            let c = (row + 1) * stride + col + 1;
            let d = row * stride + col + 1;

            // Pole rows collapse one edge of the quad
            if row != 0 {
                mesh.add_triangle(a, b, d);
            }
            if row != h as u32 - 1 {
                mesh.add_triangle(b, c, d);
            }
        }
    }

    mesh
}

fn tessellate_cone(
    radius: f32,
    height: f32,
    radial_segments: usize,
    open_ended: bool,
    material: &Material,
) -> Mesh {
    let segments = radial_segments.max(3);
    let half = height / 2.0;
    let slope = radius / height.max(1e-6);

    let mut mesh = Mesh::new();

    let base = create_ring(-half, radius, segments, slope, 0.0, material.color, material.opacity);
    let base_start = mesh.add_vertices(base);

    // One apex vertex per segment so each face keeps its own normal
    let apex: Vec<Vertex> = (0..segments)
        .map(|i| {
            let u = (i as f32 + 0.5) / segments as f32;
            let angle = u * TAU;
            let normal = Vec3::new(angle.cos(), slope, angle.sin()).normalize();
            Vertex::new(Vec3::new(0.0, half, 0.0), normal)
                .with_uv(u, 1.0)
                .with_surface(material.color, material.opacity)
        })
        .collect();
    let apex_start = mesh.add_vertices(apex);

    for i in 0..segments as u32 {
        mesh.add_triangle(base_start + i, apex_start + i, base_start + i + 1);
    }

    if !open_ended {
        add_cap(&mut mesh, -half, radius, segments, false, material);
    }

    mesh
}

fn tessellate_cuboid(width: f32, height: f32, depth: f32, material: &Material) -> Mesh {
    let hw = width / 2.0;
    let hh = height / 2.0;
    let hd = depth / 2.0;

    let mut mesh = Mesh::new();

    // (normal, four corners CCW seen from outside)
    let faces: [(Vec3, [Vec3; 4]); 6] = [
        (Vec3::RIGHT, [
            Vec3::new(hw, -hh, -hd), Vec3::new(hw, hh, -hd),
            Vec3::new(hw, hh, hd), Vec3::new(hw, -hh, hd),
        ]),
        (-Vec3::RIGHT, [
            Vec3::new(-hw, -hh, hd), Vec3::new(-hw, hh, hd),
            Vec3::new(-hw, hh, -hd), Vec3::new(-hw, -hh, -hd),
        ]),
        (Vec3::UP, [
            Vec3::new(-hw, hh, -hd), Vec3::new(-hw, hh, hd),
            Vec3::new(hw, hh, hd), Vec3::new(hw, hh, -hd),
        ]),
        (-Vec3::UP, [
            Vec3::new(-hw, -hh, hd), Vec3::new(-hw, -hh, -hd),
            Vec3::new(hw, -hh, -hd), Vec3::new(hw, -hh, hd),
        ]),
        (Vec3::FORWARD, [
            Vec3::new(-hw, -hh, hd), Vec3::new(hw, -hh, hd),
            Vec3::new(hw, hh, hd), Vec3::new(-hw, hh, hd),
        ]),
        (-Vec3::FORWARD, [
            Vec3::new(hw, -hh, -hd), Vec3::new(-hw, -hh, -hd),
            Vec3::new(-hw, hh, -hd), Vec3::new(hw, hh, -hd),
        ]),
    ];

    for (normal, corners) in faces {
        let uvs = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];
        let start = mesh.add_vertices(corners.iter().zip(uvs).map(|(corner, uv)| {
            Vertex::new(*corner, normal)
                .with_uv(uv[0], uv[1])
                .with_surface(material.color, material.opacity)
        }));
        mesh.add_quad(start, start + 1, start + 2, start + 3);
    }

    mesh
}
