use crate::error::ExportError;
use crate::model::MapDraft;
use std::fs;
use std::path::Path;

/// Writes `draft` as pretty-printed JSON in the same camelCase shape the
/// loader reads.
///
/// Callers normally pass a draft that already went through
/// [`crate::topology::backfill_draft`], so every floor carries either its
/// authored connections or the inferred ones.
pub fn export_json<P: AsRef<Path>>(draft: &MapDraft, path: P) -> Result<(), ExportError> {
    let path_ref = path.as_ref();
    let json = serde_json::to_string_pretty(draft)?;

    fs::write(path_ref, json).map_err(|source| ExportError::FileCreate {
        path: path_ref.to_path_buf(),
        source,
    })
}
