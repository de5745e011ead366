use crate::model::ElementType;
use serde::{Deserialize, Serialize};

/// Structural bounds a map must satisfy. Every field falls back to its
/// default when omitted from a rules file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValidationRules {
    pub min_width: f64,
    pub max_width: f64,
    pub min_height: f64,
    pub max_height: f64,
    pub max_floors: u32,
    pub max_elements: usize,
    pub max_connections: usize,
    pub required_elements: Vec<ElementType>,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            min_width: 10.0,
            max_width: 1000.0,
            min_height: 10.0,
            max_height: 1000.0,
            max_floors: 20,
            max_elements: 1000,
            max_connections: 2000,
            required_elements: vec![ElementType::Entrance],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn partial_rules_keep_defaults() {
        let rules: ValidationRules =
            serde_json::from_str(r#"{"maxFloors": 3, "requiredElements": ["entrance", "exit"]}"#)
                .unwrap();
        assert_eq!(rules.max_floors, 3);
        assert_eq!(
            rules.required_elements,
            vec![ElementType::Entrance, ElementType::Exit]
        );
        assert_eq!(rules.max_elements, 1000);
        assert_eq!(rules.min_width, 10.0);
    }
}
