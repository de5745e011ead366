use crate::geometry::haversine_km;
use crate::model::{MapData, TemplateCategory};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    #[default]
    CreatedAt,
    UpdatedAt,
    Rating,
    Views,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationFilter {
    pub latitude: f64,
    pub longitude: f64,
    /// Kilometers.
    pub radius: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MapQueryFilters {
    pub category: Option<TemplateCategory>,
    /// A map matches when it carries every listed tag.
    pub tags: Vec<String>,
    pub created_by: Option<String>,
    pub is_published: Option<bool>,
    pub is_template: Option<bool>,
    pub location: Option<LocationFilter>,
    pub sort_by: SortField,
    pub sort_order: SortOrder,
    pub limit: Option<usize>,
    pub offset: usize,
}

impl MapQueryFilters {
    #[must_use]
    pub fn matches(&self, map: &MapData) -> bool {
        self.category.map_or(true, |c| map.category == c)
            && self.created_by.as_deref().map_or(true, |u| map.created_by == u)
            && self.is_published.map_or(true, |p| map.is_published == p)
            && self.is_template.map_or(true, |t| map.is_template == t)
            && self.tags.iter().all(|tag| map.metadata.tags.contains(tag))
    }

    fn within_radius(&self, map: &MapData) -> bool {
        let Some(filter) = &self.location else {
            return true;
        };
        map.metadata.location.as_ref().is_some_and(|loc| {
            haversine_km(
                (filter.latitude, filter.longitude),
                (loc.latitude, loc.longitude),
            ) <= filter.radius
        })
    }

    fn compare(&self, a: &MapData, b: &MapData) -> Ordering {
        let ordering = match self.sort_by {
            SortField::CreatedAt => a.created_at.cmp(&b.created_at),
            SortField::UpdatedAt => a.updated_at.cmp(&b.updated_at),
            SortField::Rating => rating_of(a).total_cmp(&rating_of(b)),
            SortField::Views => views_of(a).cmp(&views_of(b)),
        };
        match self.sort_order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    }
}

fn rating_of(map: &MapData) -> f64 {
    map.rating.map_or(0.0, |r| r.average)
}

fn views_of(map: &MapData) -> u64 {
    map.statistics.map_or(0, |s| s.views)
}

/// Filters, sorts and pages `maps`. The location radius is applied to the
/// page, after `offset` and `limit`.
pub(crate) fn run<'a>(
    maps: impl Iterator<Item = &'a MapData>,
    filters: &MapQueryFilters,
) -> Vec<&'a MapData> {
    let mut hits: Vec<&MapData> = maps.filter(|m| filters.matches(m)).collect();
    hits.sort_by(|a, b| filters.compare(a, b));

    hits.into_iter()
        .skip(filters.offset)
        .take(filters.limit.unwrap_or(usize::MAX))
        .filter(|m| filters.within_radius(m))
        .collect()
}
