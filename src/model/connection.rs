use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionType {
    Walkable,
    Door,
    StairsUp,
    StairsDown,
    ElevatorUp,
    ElevatorDown,
    EscalatorUp,
    EscalatorDown,
}

impl ConnectionType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ConnectionType::Walkable => "walkable",
            ConnectionType::Door => "door",
            ConnectionType::StairsUp => "stairs_up",
            ConnectionType::StairsDown => "stairs_down",
            ConnectionType::ElevatorUp => "elevator_up",
            ConnectionType::ElevatorDown => "elevator_down",
            ConnectionType::EscalatorUp => "escalator_up",
            ConnectionType::EscalatorDown => "escalator_down",
        }
    }
}

impl fmt::Display for ConnectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An edge between two elements of the same floor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementConnection {
    pub id: String,
    pub from_element_id: String,
    pub to_element_id: String,
    #[serde(rename = "type")]
    pub connection_type: ConnectionType,
    /// Meters between element centers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    /// Seconds at walking pace.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<u64>,
    pub accessible: bool,
    pub bidirectional: bool,
}
