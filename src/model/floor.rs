use super::{ElementConnection, MapElement};
use serde::{Deserialize, Serialize};

/// One story of a building. `level` and `name` are optional on the wire so
/// that incomplete floors can still be loaded and reported by the validator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Floor {
    #[serde(default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Story height in meters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default)]
    pub elements: Vec<MapElement>,
    #[serde(default)]
    pub connections: Vec<ElementConnection>,
}

impl Floor {
    #[must_use]
    pub fn new(level: i32, name: impl Into<String>) -> Self {
        Self {
            level: Some(level),
            name: Some(name.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_elements(mut self, elements: Vec<MapElement>) -> Self {
        self.elements = elements;
        self
    }

    /// An empty name counts as missing.
    #[must_use]
    pub fn has_name(&self) -> bool {
        self.name.as_deref().is_some_and(|n| !n.is_empty())
    }

    /// Label used in messages: the level, or `?` when it is missing.
    #[must_use]
    pub fn level_label(&self) -> String {
        self.level
            .map_or_else(|| "?".to_string(), |level| level.to_string())
    }
}
