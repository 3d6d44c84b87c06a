//! Stage dressing shared by every plant: a soil disc and scattered grass.

use std::f32::consts::PI;

use crate::math::Jitter;
use crate::scene::{Material, Primitive, SceneNode};

/// Soil disc plus 40 jittered grass tufts under the plant
pub fn garden_bed(rng: &mut Jitter) -> SceneNode {
    let mut root = SceneNode::group();

    root.add_child(
        SceneNode::shape(
            Primitive::Cylinder {
                radius_top: 4.0,
                radius_bottom: 4.0,
                height: 0.3,
                radial_segments: 64,
            },
            Material::hex(0x5D4037).with_roughness(0.95).with_metalness(0.05),
        )
        .at(0.0, -1.8, 0.0),
    );

    let mut grass = SceneNode::group().at(0.0, -1.6, 0.0);
    for _ in 0..40 {
        grass.add_child(
            SceneNode::shape(
                Primitive::Cylinder {
                    radius_top: 0.15,
                    radius_bottom: 0.1,
                    height: 0.1,
                    radial_segments: 6,
                },
                Material::hex(0x4CAF50).with_roughness(0.8).with_opacity(0.7),
            )
            .at(rng.centered(6.0), 0.0, rng.centered(6.0))
            .rotated(0.0, rng.angle(PI), 0.0)
            .scaled(1.0, rng.range(0.5, 2.5), 1.0),
        );
    }
    root.add_child(grass);

    root
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::PrimitiveKind;

    #[test]
    fn test_garden_bed_structure() {
        let mut rng = Jitter::new(3);
        let bed = garden_bed(&mut rng);
        // Soil disc plus 40 tufts, all cylinders
        assert_eq!(bed.primitive_count(), 41);
        assert_eq!(bed.count_kinds(), vec![(PrimitiveKind::Cylinder, 41)]);
    }

    #[test]
    fn test_grass_spread_and_height() {
        let mut rng = Jitter::new(8);
        let bed = garden_bed(&mut rng);
        let grass = &bed.children[1];
        for tuft in &grass.children {
            let p = tuft.transform.position;
            assert!(p.x.abs() <= 3.0 && p.z.abs() <= 3.0);
            let h = tuft.transform.scale.y;
            assert!((0.5..2.5).contains(&h));
        }
    }

    #[test]
    fn test_structure_stable_across_seeds() {
        let a = garden_bed(&mut Jitter::new(1));
        let b = garden_bed(&mut Jitter::new(2));
        assert_eq!(a.count_kinds(), b.count_kinds());
    }
}
