use crate::error::LoadError;
use crate::model::MapDraft;
use crate::validation::ValidationRules;
use serde::de::DeserializeOwned;
use std::path::Path;

/// Reads a map JSON file. Both drafts and fully stored maps are accepted;
/// fields the draft does not model are ignored.
///
/// # Example
///
/// ```no_run
/// use indoor_map::loader::load_map_draft;
///
/// let draft = load_map_draft("station.json")?;
/// println!("floors: {}", draft.floors.map_or(0, |f| f.len()));
/// # Ok::<(), indoor_map::error::LoadError>(())
/// ```
pub fn load_map_draft<P: AsRef<Path>>(path: P) -> Result<MapDraft, LoadError> {
    read_json(path.as_ref())
}

/// Reads a rules override file; omitted rules keep their defaults.
pub fn load_rules<P: AsRef<Path>>(path: P) -> Result<ValidationRules, LoadError> {
    read_json(path.as_ref())
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| LoadError::InvalidJson {
        path: path.to_path_buf(),
        source,
    })
}
