use crate::model::ElementType;
use serde::Serialize;
use thiserror::Error;

/// A single broken rule. The display text is the message shown to users.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Violation {
    #[error("Map width must be between {min} and {max}")]
    WidthOutOfBounds { min: f64, max: f64 },

    #[error("Map height must be between {min} and {max}")]
    HeightOutOfBounds { min: f64, max: f64 },

    #[error("Map cannot have more than {max} floors")]
    TooManyFloors { max: u32 },

    #[error("Floor at index {index} must have a level")]
    FloorMissingLevel { index: usize },

    #[error("Floor at index {index} must have a name")]
    FloorMissingName { index: usize },

    #[error("Invalid element {element_id} on floor {floor}")]
    InvalidElement { element_id: String, floor: String },

    #[error("Map cannot have more than {max} elements")]
    TooManyElements { max: usize },

    #[error("Map cannot have more than {max} connections")]
    TooManyConnections { max: usize },

    #[error("Map must have at least one {0} element")]
    MissingRequiredElement(ElementType),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    pub violations: Vec<Violation>,
}

impl ValidationReport {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// Messages for every violation, in the order they were found.
    #[must_use]
    pub fn errors(&self) -> Vec<String> {
        self.violations.iter().map(ToString::to_string).collect()
    }

    pub(crate) fn push(&mut self, violation: Violation) {
        self.violations.push(violation);
    }
}

/// Wire form of a report: `{ "isValid": bool, "errors": [..] }`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl From<&ValidationReport> for ReportSummary {
    fn from(report: &ValidationReport) -> Self {
        Self {
            is_valid: report.is_valid(),
            errors: report.errors(),
        }
    }
}
