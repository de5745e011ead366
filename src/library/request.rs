use crate::model::{Floor, MapData, MapMetadata, Rating, Statistics, TemplateCategory};
use serde::{Deserialize, Serialize};

/// Everything needed to store a new map. Ownership comes from the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapSaveRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub category: TemplateCategory,
    pub floors: Vec<Floor>,
    #[serde(default)]
    pub metadata: MapMetadata,
    #[serde(default)]
    pub is_published: bool,
    #[serde(default)]
    pub is_template: bool,
}

/// Fields to overwrite on a stored map; `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MapUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<TemplateCategory>,
    pub floors: Option<Vec<Floor>>,
    pub metadata: Option<MapMetadata>,
    pub is_published: Option<bool>,
    pub is_template: Option<bool>,
    pub rating: Option<Rating>,
    pub statistics: Option<Statistics>,
}

impl MapUpdate {
    /// Copies every set field except `floors` onto `map`.
    pub(crate) fn apply_fields(&mut self, map: &mut MapData) {
        if let Some(name) = self.name.take() {
            map.name = name;
        }
        if let Some(description) = self.description.take() {
            map.description = Some(description);
        }
        if let Some(category) = self.category {
            map.category = category;
        }
        if let Some(metadata) = self.metadata.take() {
            map.metadata = metadata;
        }
        if let Some(is_published) = self.is_published {
            map.is_published = is_published;
        }
        if let Some(is_template) = self.is_template {
            map.is_template = is_template;
        }
        if let Some(rating) = self.rating {
            map.rating = Some(rating);
        }
        if let Some(statistics) = self.statistics {
            map.statistics = Some(statistics);
        }
    }
}
