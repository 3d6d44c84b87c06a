//! Fixed primitive layouts for each species.
//!
//! Dimensions, colors, and placement formulas follow the studio's reference
//! look: cylinders for stems and trunks, cones and boxes for foliage,
//! spheres for rhizomes and berries.

use std::f32::consts::{FRAC_PI_4, PI, TAU};

use crate::math::Jitter;
use crate::scene::{Material, Primitive, SceneNode};

fn cylinder(radius_top: f32, radius_bottom: f32, height: f32, radial_segments: usize) -> Primitive {
    Primitive::Cylinder { radius_top, radius_bottom, height, radial_segments }
}

fn sphere(radius: f32, width_segments: usize, height_segments: usize) -> Primitive {
    Primitive::Sphere { radius, width_segments, height_segments }
}

fn cone(radius: f32, height: f32, radial_segments: usize, open_ended: bool) -> Primitive {
    Primitive::Cone { radius, height, radial_segments, open_ended }
}

fn cuboid(width: f32, height: f32, depth: f32) -> Primitive {
    Primitive::Cuboid { width, height, depth }
}

/// Holy basil: central stem, 12 radial branches, 8 cone leaves per branch
pub fn tulsi() -> SceneNode {
    let mut root = SceneNode::group();

    root.add_child(SceneNode::shape(
        cylinder(0.12, 0.18, 2.0, 32),
        Material::hex(0x3E2723).with_roughness(0.9).with_metalness(0.05),
    ));

    for i in 0..12 {
        let mut branch_group = SceneNode::group()
            .at(0.0, -1.0, 0.0)
            .rotated(0.0, (i as f32 / 12.0) * TAU, 0.0);

        branch_group.add_child(
            SceneNode::shape(
                cylinder(0.04, 0.06, 1.2, 8),
                Material::hex(0x4A5D3A).with_roughness(0.7).with_metalness(0.1),
            )
            .at(0.4, 0.1, 0.0)
            .rotated(0.0, 0.0, 0.4),
        );

        for j in 0..8 {
            let j = j as f32;
            branch_group.add_child(
                SceneNode::group()
                    .at(0.4 + j * 0.08, 0.2 + j * 0.1, 0.0)
                    .rotated(0.0, 0.3, 0.1)
                    .with_child(SceneNode::shape(
                        cone(0.1, 0.25, 4, false),
                        Material::hex(0x7CB342)
                            .with_roughness(0.6)
                            .with_metalness(0.2)
                            .with_opacity(0.9),
                    )),
            );
        }

        root.add_child(branch_group);
    }

    root
}

/// Neem tree: thick trunk under a cloud canopy of 200 scattered leaf planes
pub fn neem(rng: &mut Jitter) -> SceneNode {
    let mut root = SceneNode::group();

    root.add_child(
        SceneNode::shape(
            cylinder(0.2, 0.3, 2.5, 16),
            Material::hex(0x3E2723).with_roughness(0.95).with_metalness(0.02),
        )
        .at(0.0, -1.25, 0.0),
    );

    let mut canopy = SceneNode::group().at(0.0, 0.5, 0.0);
    for _ in 0..200 {
        canopy.add_child(
            SceneNode::shape(
                cuboid(0.2, 0.3, 0.01),
                Material::hex(0x4CAF50).with_opacity(0.8),
            )
            .at(rng.centered(3.0), rng.centered(2.0), rng.centered(3.0))
            .rotated(rng.angle(PI), rng.angle(PI), rng.angle(PI)),
        );
    }
    root.add_child(canopy);

    root
}

/// Turmeric: lumpy orange rhizome with five drooping leaf cones
pub fn turmeric() -> SceneNode {
    let mut root = SceneNode::group();

    root.add_child(
        SceneNode::group().at(0.0, -1.2, 0.0).with_child(
            SceneNode::shape(sphere(0.3, 32, 16), Material::hex(0xFF8F00))
                .scaled(1.0, 0.6, 0.8)
                .rotated(0.0, FRAC_PI_4, 0.0),
        ),
    );

    for i in 0..5 {
        let i = i as f32;
        root.add_child(
            SceneNode::shape(cone(0.4, 0.8, 4, true), Material::hex(0x4CAF50))
                .at((i * 0.8).sin() * 0.3, 0.5 + i * 0.2, (i * 0.8).cos() * 0.2)
                .rotated(0.0, i * 0.3, 0.2),
        );
    }

    root
}

/// Ashwagandha shrub: six branch clusters with a leaf and a red berry each
pub fn ashwagandha() -> SceneNode {
    let mut root = SceneNode::group();

    root.add_child(
        SceneNode::shape(cylinder(0.08, 0.12, 1.2, 12), Material::hex(0x5D4037))
            .at(0.0, -0.6, 0.0),
    );

    for i in 0..6 {
        root.add_child(
            SceneNode::group()
                .rotated(0.0, (i as f32 / 6.0) * TAU, 0.0)
                .with_child(
                    SceneNode::shape(cylinder(0.03, 0.04, 0.8, 8), Material::hex(0x689F38))
                        .at(0.2, 0.2, 0.0)
                        .rotated(0.0, 0.0, 0.2),
                )
                .with_child(
                    SceneNode::shape(cuboid(0.15, 0.25, 0.02), Material::hex(0x7CB342))
                        .at(0.35, 0.4, 0.0)
                        .rotated(0.0, 0.3, 0.0),
                )
                .with_child(
                    SceneNode::shape(sphere(0.03, 8, 6), Material::hex(0xFF5722))
                        .at(0.25, 0.6, 0.0),
                ),
        );
    }

    root
}

/// Brahmi: eight creeping runners, each a chain of thin stems and a leaf
pub fn brahmi() -> SceneNode {
    let mut root = SceneNode::group();

    for i in 0..8 {
        let angle = i as f32 * 0.8;
        let mut runner = SceneNode::group().at(0.0, -1.0, 0.0);

        for j in 0..5 {
            let reach = 0.3 + j as f32 * 0.1;
            runner.add_child(
                SceneNode::shape(cylinder(0.015, 0.015, 0.2, 6), Material::hex(0x66BB6A))
                    .at(angle.cos() * reach, j as f32 * 0.05, angle.sin() * reach)
                    .rotated(FRAC_PI_4, angle, 0.0),
            );
        }

        runner.add_child(
            SceneNode::shape(sphere(0.06, 8, 6), Material::hex(0x81C784))
                .at(angle.cos() * 0.6, -0.8 + i as f32 * 0.15, angle.sin() * 0.6)
                .scaled(1.5, 0.5, 1.0),
        );

        root.add_child(runner);
    }

    root
}

/// Default plant shown for species without bespoke geometry
pub fn generic() -> SceneNode {
    SceneNode::group()
        .with_child(
            SceneNode::shape(cylinder(0.1, 0.15, 1.5, 16), Material::hex(0x4A5D3A))
                .at(0.0, -0.75, 0.0),
        )
        .with_child(
            SceneNode::shape(sphere(0.8, 32, 16), Material::hex(0x66BB6A))
                .at(0.0, 0.2, 0.0)
                .scaled(1.0, 0.6, 1.0),
        )
}
