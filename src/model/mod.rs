pub mod connection;
pub mod element;
pub mod element_type;
pub mod floor;
pub mod map;

pub use connection::{ConnectionType, ElementConnection};
pub use element::{Accessibility, MapElement};
pub use element_type::ElementType;
pub use floor::Floor;
pub use map::{
    generate_id, Location, MapData, MapDraft, MapMetadata, Rating, Statistics, TemplateCategory,
};
