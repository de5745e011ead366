//! In-memory map library.
//!
//! Holds the business rules that sit in front of storage: new and updated
//! maps are validated, floors without authored connections get inferred ones,
//! and only the owner may change or remove a map.

pub mod query;
pub mod request;

pub use query::{LocationFilter, MapQueryFilters, SortField, SortOrder};
pub use request::{MapSaveRequest, MapUpdate};

use crate::error::LibraryError;
use crate::model::map::{DEFAULT_MAP_HEIGHT, DEFAULT_MAP_WIDTH};
use crate::model::{generate_id, MapData, MapMetadata};
use crate::topology::backfill_connections;
use crate::validation::{validate_map, ValidationRules};
use chrono::Utc;
use std::collections::BTreeMap;
use tracing::{info, warn};

#[derive(Debug, Default)]
pub struct MapLibrary {
    maps: BTreeMap<String, MapData>,
    rules: ValidationRules,
}

impl MapLibrary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_rules(rules: ValidationRules) -> Self {
        Self {
            maps: BTreeMap::new(),
            rules,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.maps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.maps.is_empty()
    }

    /// Stores a map exactly as given, replacing any map with the same id.
    /// Used to hydrate the library from existing storage; nothing is checked.
    pub fn insert(&mut self, map: MapData) {
        self.maps.insert(map.id.clone(), map);
    }

    /// Creates a new map owned by `user_id`.
    ///
    /// Width and height default to 500 when absent or zero, and the floor
    /// count is taken from the request. The map is validated before any
    /// connection inference runs.
    pub fn save(&mut self, request: MapSaveRequest, user_id: &str) -> Result<MapData, LibraryError> {
        let now = Utc::now();
        let MapSaveRequest {
            name,
            description,
            category,
            floors,
            metadata,
            is_published,
            is_template,
        } = request;

        let total_floors = u32::try_from(floors.len()).unwrap_or(u32::MAX);
        let metadata = MapMetadata {
            total_width: Some(non_zero_or(metadata.total_width, DEFAULT_MAP_WIDTH)),
            total_height: Some(non_zero_or(metadata.total_height, DEFAULT_MAP_HEIGHT)),
            total_floors: Some(total_floors),
            tags: metadata.tags,
            location: metadata.location,
        };

        let mut map = MapData {
            id: generate_id(),
            name,
            description,
            category,
            floors,
            metadata,
            created_by: user_id.to_string(),
            created_at: now,
            updated_at: now,
            version: 1,
            is_published,
            is_template,
            rating: None,
            statistics: None,
        };

        self.check(&map)?;
        map.floors = backfill_connections(map.floors);

        info!(
            map_id = %map.id,
            floors = map.floors.len(),
            connections = map.total_connections(),
            "saved map"
        );
        self.maps.insert(map.id.clone(), map.clone());
        Ok(map)
    }

    /// Applies `updates` to a map owned by `user_id` and bumps its version.
    ///
    /// Replacement floors are validated together with the rest of the map
    /// and get their missing connections inferred.
    pub fn update(
        &mut self,
        map_id: &str,
        mut updates: MapUpdate,
        user_id: &str,
    ) -> Result<MapData, LibraryError> {
        let existing = self.owned(map_id, user_id, "update")?;

        let mut map = existing.clone();
        updates.apply_fields(&mut map);
        map.version = existing.version + 1;
        map.updated_at = Utc::now();

        if let Some(floors) = updates.floors.take() {
            map.floors = floors;
            self.check(&map)?;
            map.floors = backfill_connections(map.floors);
        }

        info!(map_id = %map.id, version = map.version, "updated map");
        self.maps.insert(map.id.clone(), map.clone());
        Ok(map)
    }

    #[must_use]
    pub fn get(&self, map_id: &str) -> Option<&MapData> {
        self.maps.get(map_id)
    }

    pub fn delete(&mut self, map_id: &str, user_id: &str) -> Result<MapData, LibraryError> {
        self.owned(map_id, user_id, "delete")?;
        let removed = self
            .maps
            .remove(map_id)
            .ok_or_else(|| not_found(map_id))?;
        info!(map_id, "deleted map");
        Ok(removed)
    }

    #[must_use]
    pub fn query(&self, filters: &MapQueryFilters) -> Vec<&MapData> {
        query::run(self.maps.values(), filters)
    }

    /// Maps created by `user_id`, most recently updated first.
    #[must_use]
    pub fn user_maps(&self, user_id: &str) -> Vec<&MapData> {
        self.query(&MapQueryFilters {
            created_by: Some(user_id.to_string()),
            sort_by: SortField::UpdatedAt,
            sort_order: SortOrder::Desc,
            ..MapQueryFilters::default()
        })
    }

    pub fn toggle_publish(&mut self, map_id: &str, user_id: &str) -> Result<MapData, LibraryError> {
        let is_published = self
            .maps
            .get(map_id)
            .ok_or_else(|| not_found(map_id))?
            .is_published;

        self.update(
            map_id,
            MapUpdate {
                is_published: Some(!is_published),
                ..MapUpdate::default()
            },
            user_id,
        )
    }

    fn owned(&self, map_id: &str, user_id: &str, action: &'static str) -> Result<&MapData, LibraryError> {
        let map = self.maps.get(map_id).ok_or_else(|| not_found(map_id))?;
        if map.created_by != user_id {
            warn!(map_id, user_id, action, "rejected change by non-owner");
            return Err(LibraryError::Unauthorized { action });
        }
        Ok(map)
    }

    fn check(&self, map: &MapData) -> Result<(), LibraryError> {
        let report = validate_map(map, &self.rules);
        if report.is_valid() {
            return Ok(());
        }
        warn!(
            map_id = %map.id,
            violations = report.violations.len(),
            "rejected invalid map"
        );
        Err(LibraryError::Validation {
            errors: report.errors(),
        })
    }
}

fn not_found(map_id: &str) -> LibraryError {
    LibraryError::NotFound {
        map_id: map_id.to_string(),
    }
}

fn non_zero_or(value: Option<f64>, default: f64) -> f64 {
    value.filter(|v| *v != 0.0).unwrap_or(default)
}
