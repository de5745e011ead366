use super::Floor;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const DEFAULT_MAP_WIDTH: f64 = 500.0;
pub const DEFAULT_MAP_HEIGHT: f64 = 500.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateCategory {
    Station,
    Shopping,
    Office,
    Hospital,
    Airport,
    Education,
    Parking,
    #[default]
    Custom,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

/// Map-wide dimensions and tags. Absent dimensions are not checked.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_floors: Option<u32>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub average: f64,
    pub count: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    pub views: u64,
    pub uses: u64,
    pub shares: u64,
}

/// A map as handed in by an editor or file: any part may be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<TemplateCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<MapMetadata>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floors: Option<Vec<Floor>>,
}

/// A stored map owned by the user in `created_by`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapData {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub category: TemplateCategory,
    pub floors: Vec<Floor>,
    pub metadata: MapMetadata,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub version: u32,
    pub is_published: bool,
    pub is_template: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statistics: Option<Statistics>,
}

impl MapData {
    /// A fresh custom map with a single empty ground floor.
    #[must_use]
    pub fn empty(name: impl Into<String>, created_by: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: generate_id(),
            name: name.into(),
            description: None,
            category: TemplateCategory::Custom,
            floors: vec![Floor {
                id: generate_id(),
                ..Floor::new(0, "Ground Floor")
            }],
            metadata: MapMetadata {
                total_width: Some(DEFAULT_MAP_WIDTH),
                total_height: Some(DEFAULT_MAP_HEIGHT),
                total_floors: Some(1),
                tags: Vec::new(),
                location: None,
            },
            created_by: created_by.into(),
            created_at: now,
            updated_at: now,
            version: 1,
            is_published: false,
            is_template: false,
            rating: None,
            statistics: None,
        }
    }

    #[must_use]
    pub fn total_connections(&self) -> usize {
        self.floors.iter().map(|f| f.connections.len()).sum()
    }
}

#[must_use]
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}
