//! # Indoor Map
//!
//! Topology inference and structural validation for indoor floor plans.
//!
//! ## Features
//!
//! - Infer connections between adjacent elements of a floor
//!   (walkable paths, shop doors, stairs, elevators, escalators)
//! - Estimate walking distance and time for every connection
//! - Validate whole maps against configurable structural rules
//! - In-memory map library with ownership checks and filtered queries
//! - Export connections to CSV and maps to JSON
//!
//! ## Example
//!
//! ```
//! use indoor_map::model::{ElementType, Floor, MapDraft, MapElement};
//! use indoor_map::topology::backfill_connections;
//! use indoor_map::validation::{validate, ValidationRules};
//!
//! let floor = Floor::new(0, "Ground").with_elements(vec![
//!     MapElement::new("in", ElementType::Entrance, 0.0, 0.0, 40.0, 40.0, 0),
//!     MapElement::new("hall", ElementType::Corridor, 40.0, 0.0, 200.0, 40.0, 0),
//! ]);
//! let draft = MapDraft { floors: Some(vec![floor]), ..MapDraft::default() };
//!
//! let report = validate(&draft, &ValidationRules::default());
//! assert!(report.is_valid());
//!
//! let floors = backfill_connections(draft.floors.unwrap_or_default());
//! assert_eq!(floors[0].connections.len(), 1);
//! ```

pub mod error;
pub mod export;
pub mod geometry;
pub mod library;
pub mod loader;
pub mod model;
pub mod topology;
pub mod validation;
