//! Per-species procedural geometry selection.
//!
//! Each known species maps to a fixed assembly of primitive shapes; unknown
//! identifiers fall through to a generic plant so the selector never fails.

mod builders;
pub mod garden;

pub use garden::garden_bed;

use crate::math::Jitter;
use crate::scene::SceneNode;

/// The closed set of species with bespoke geometry, plus the default
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Species {
    Tulsi,
    Neem,
    Turmeric,
    Ashwagandha,
    Brahmi,
    Generic,
}

impl Species {
    /// Map a plant identifier to its species; unknown ids are Generic
    pub fn from_id(id: &str) -> Self {
        match id.trim().to_ascii_lowercase().as_str() {
            "tulsi" => Species::Tulsi,
            "neem" => Species::Neem,
            "turmeric" => Species::Turmeric,
            "ashwagandha" => Species::Ashwagandha,
            "brahmi" => Species::Brahmi,
            _ => Species::Generic,
        }
    }

    /// All variants with bespoke geometry
    pub fn all() -> [Species; 6] {
        [
            Species::Tulsi,
            Species::Neem,
            Species::Turmeric,
            Species::Ashwagandha,
            Species::Brahmi,
            Species::Generic,
        ]
    }

    pub fn id(&self) -> &'static str {
        match self {
            Species::Tulsi => "tulsi",
            Species::Neem => "neem",
            Species::Turmeric => "turmeric",
            Species::Ashwagandha => "ashwagandha",
            Species::Brahmi => "brahmi",
            Species::Generic => "generic",
        }
    }

    /// Where a scanned model for this species would live.
    ///
    /// Extension point: loading real models by identifier is not implemented;
    /// the procedural assembly below stands in for it.
    pub fn model_path(&self) -> String {
        format!("/models/{}.glb", self.id())
    }

    /// Build the procedural assembly for this species.
    ///
    /// Shape kinds and counts are fixed per species; only the jittered
    /// sub-placements (foliage scatter) vary between invocations.
    pub fn build(&self, rng: &mut Jitter) -> SceneNode {
        match self {
            Species::Tulsi => builders::tulsi(),
            Species::Neem => builders::neem(rng),
            Species::Turmeric => builders::turmeric(),
            Species::Ashwagandha => builders::ashwagandha(),
            Species::Brahmi => builders::brahmi(),
            Species::Generic => builders::generic(),
        }
    }
}
