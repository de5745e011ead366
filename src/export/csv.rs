use crate::error::ExportError;
use crate::model::Floor;
use std::fs::File;
use std::path::Path;

/// Writes one CSV row per connection across all `floors`.
pub fn export_connections_csv<P: AsRef<Path>>(floors: &[Floor], path: P) -> Result<(), ExportError> {
    let path_ref = path.as_ref();
    let file = File::create(path_ref).map_err(|source| ExportError::FileCreate {
        path: path_ref.to_path_buf(),
        source,
    })?;

    let mut writer = csv::Writer::from_writer(file);

    writer.write_record([
        "Floor",
        "Connection ID",
        "From",
        "To",
        "Type",
        "Distance (m)",
        "Time (s)",
        "Accessible",
        "Bidirectional",
    ])?;

    for floor in floors {
        let level = floor.level_label();
        for connection in &floor.connections {
            let distance = connection
                .distance
                .map(|d| format!("{d:.2}"))
                .unwrap_or_default();
            let time = connection.time.map(|t| t.to_string()).unwrap_or_default();

            writer.write_record([
                level.as_str(),
                connection.id.as_str(),
                connection.from_element_id.as_str(),
                connection.to_element_id.as_str(),
                connection.connection_type.as_str(),
                distance.as_str(),
                time.as_str(),
                if connection.accessible { "yes" } else { "no" },
                if connection.bidirectional { "yes" } else { "no" },
            ])?;
        }
    }

    writer.flush().map_err(|e| ExportError::WriteError {
        message: e.to_string(),
    })?;

    Ok(())
}
