pub mod csv;
pub mod json;

pub use crate::error::ExportError;
pub use csv::export_connections_csv;
pub use json::export_json;
