use serde::{Deserialize, Serialize};

use crate::species::Species;

/// Broad grouping used by the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Medicinal,
    Culinary,
    Ornamental,
    Other,
}

/// How a plant is prepared for use
impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Medicinal => "medicinal",
            Category::Culinary => "culinary",
            Category::Ornamental => "ornamental",
            Category::Other => "other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreparationKind {
    Tea,
    Tincture,
    Oil,
    Decoction,
    Poultice,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preparation {
    #[serde(rename = "type")]
    pub kind: PreparationKind,
    pub instructions: String,
}

/// A plant record supplied by the catalog backend.
///
/// Pure data: the engine never mutates it, and field validity beyond the
/// enumerated category/preparation kinds is the backend's concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plant {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub scientific_name: String,
    #[serde(default)]
    pub image: String,
    pub category: Category,
    #[serde(default)]
    pub health_benefits: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub preparations: Vec<Preparation>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

impl Plant {
    pub fn new(id: &str, name: &str, category: Category) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            scientific_name: String::new(),
            image: String::new(),
            category,
            health_benefits: Vec::new(),
            description: String::new(),
            preparations: Vec::new(),
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    pub fn with_scientific_name(mut self, name: &str) -> Self {
        self.scientific_name = name.to_string();
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    pub fn with_benefits(mut self, benefits: Vec<&str>) -> Self {
        self.health_benefits = benefits.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_preparation(mut self, kind: PreparationKind, instructions: &str) -> Self {
        self.preparations.push(Preparation {
            kind,
            instructions: instructions.to_string(),
        });
        self
    }

    /// Parse from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        let plant: Plant = serde_yaml::from_str(yaml)
            .map_err(|e| format!("Plant parse error: {}", e))?;

        if plant.id.is_empty() {
            return Err("Plant record is missing an id".to_string());
        }
        if plant.name.is_empty() {
            return Err("Plant record is missing a display name".to_string());
        }

        Ok(plant)
    }

    /// The species this record renders as
    pub fn species(&self) -> Species {
        Species::from_id(&self.id)
    }
}
