//! Whole-map structural validation.
//!
//! Every rule is checked independently and every breach is reported, so a
//! caller gets the complete list in one pass. Violations are data, not errors.

pub mod report;
pub mod rules;

pub use report::{ReportSummary, ValidationReport, Violation};
pub use rules::ValidationRules;

use crate::model::{ElementType, Floor, MapData, MapDraft, MapMetadata};
use std::collections::HashSet;

/// Validates a possibly partial map against `rules`.
///
/// Missing metadata skips the dimension checks; missing floors skip the
/// floor, count and required-element checks.
///
/// # Example
///
/// ```
/// use indoor_map::model::{MapDraft, MapMetadata};
/// use indoor_map::validation::{validate, ValidationRules};
///
/// let draft = MapDraft {
///     metadata: Some(MapMetadata { total_width: Some(5.0), ..MapMetadata::default() }),
///     ..MapDraft::default()
/// };
/// let report = validate(&draft, &ValidationRules::default());
/// assert!(!report.is_valid());
/// assert_eq!(report.errors(), vec!["Map width must be between 10 and 1000"]);
/// ```
#[must_use]
pub fn validate(draft: &MapDraft, rules: &ValidationRules) -> ValidationReport {
    check(draft.metadata.as_ref(), draft.floors.as_deref(), rules)
}

/// Validates a stored map. Same rules as [`validate`].
#[must_use]
pub fn validate_map(map: &MapData, rules: &ValidationRules) -> ValidationReport {
    check(Some(&map.metadata), Some(&map.floors), rules)
}

fn check(
    metadata: Option<&MapMetadata>,
    floors: Option<&[Floor]>,
    rules: &ValidationRules,
) -> ValidationReport {
    let mut report = ValidationReport::default();

    if let Some(metadata) = metadata {
        check_metadata(metadata, rules, &mut report);
    }

    if let Some(floors) = floors {
        check_floors(floors, rules, &mut report);
    }

    report
}

fn check_metadata(metadata: &MapMetadata, rules: &ValidationRules, report: &mut ValidationReport) {
    if let Some(width) = declared(metadata.total_width) {
        if !(rules.min_width..=rules.max_width).contains(&width) {
            report.push(Violation::WidthOutOfBounds {
                min: rules.min_width,
                max: rules.max_width,
            });
        }
    }

    if let Some(height) = declared(metadata.total_height) {
        if !(rules.min_height..=rules.max_height).contains(&height) {
            report.push(Violation::HeightOutOfBounds {
                min: rules.min_height,
                max: rules.max_height,
            });
        }
    }

    if metadata.total_floors.is_some_and(|n| n > rules.max_floors) {
        report.push(Violation::TooManyFloors {
            max: rules.max_floors,
        });
    }
}

// A zero or NaN dimension is treated as not set.
fn declared(dimension: Option<f64>) -> Option<f64> {
    dimension.filter(|d| *d != 0.0 && !d.is_nan())
}

fn check_floors(floors: &[Floor], rules: &ValidationRules, report: &mut ValidationReport) {
    let mut total_elements = 0;
    let mut total_connections = 0;
    let mut found_types: HashSet<ElementType> = HashSet::new();

    for (index, floor) in floors.iter().enumerate() {
        if floor.level.is_none() {
            report.push(Violation::FloorMissingLevel { index });
        }
        if !floor.has_name() {
            report.push(Violation::FloorMissingName { index });
        }

        total_elements += floor.elements.len();
        for element in &floor.elements {
            found_types.insert(element.element_type);
            if !element.is_valid() {
                report.push(Violation::InvalidElement {
                    element_id: element.id.clone(),
                    floor: floor.level_label(),
                });
            }
        }

        total_connections += floor.connections.len();
    }

    if total_elements > rules.max_elements {
        report.push(Violation::TooManyElements {
            max: rules.max_elements,
        });
    }
    if total_connections > rules.max_connections {
        report.push(Violation::TooManyConnections {
            max: rules.max_connections,
        });
    }

    for required in &rules.required_elements {
        if !found_types.contains(required) {
            report.push(Violation::MissingRequiredElement(*required));
        }
    }
}
