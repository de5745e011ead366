use super::ElementType;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Accessibility {
    pub wheelchair: bool,
    pub visually_impaired: bool,
    pub hearing_impaired: bool,
}

impl Default for Accessibility {
    fn default() -> Self {
        Self {
            wheelchair: true,
            visually_impaired: true,
            hearing_impaired: true,
        }
    }
}

/// A rectangle placed on one floor. Coordinates are planar editor units
/// with `(x, y)` at the top-left corner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapElement {
    pub id: String,
    #[serde(rename = "type")]
    pub element_type: ElementType,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Degrees. Informational only; adjacency treats elements as axis-aligned.
    #[serde(default)]
    pub rotation: f64,
    pub floor: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accessibility: Option<Accessibility>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, serde_json::Value>,
}

impl MapElement {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        element_type: ElementType,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        floor: i32,
    ) -> Self {
        Self {
            id: id.into(),
            element_type,
            x,
            y,
            width,
            height,
            rotation: 0.0,
            floor,
            name: None,
            description: None,
            accessibility: None,
            metadata: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_accessibility(mut self, accessibility: Accessibility) -> Self {
        self.accessibility = Some(accessibility);
        self
    }

    /// Elements without accessibility data count as wheelchair accessible.
    #[must_use]
    pub fn is_wheelchair_accessible(&self) -> bool {
        self.accessibility.map_or(true, |a| a.wheelchair)
    }

    /// Structural well-formedness: non-empty id, finite position and a
    /// strictly positive size.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.id.is_empty()
            && self.x.is_finite()
            && self.y.is_finite()
            && self.width > 0.0
            && self.height > 0.0
    }
}
