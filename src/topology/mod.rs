//! Connection inference for a floor's placed elements.

pub mod backfill;
pub mod connections;

pub use backfill::{backfill_connections, backfill_draft, resolve_connections};
pub use connections::{classify, connect, detect_connections};
