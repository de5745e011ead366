use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of a placed element on a floor plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementType {
    Corridor,
    Shop,
    Stairs,
    Elevator,
    Escalator,
    Entrance,
    Exit,
    Restroom,
    Information,
    WaitingArea,
    Platform,
    TicketGate,
    Wall,
    Pillar,
}

impl ElementType {
    pub const ALL: [ElementType; 14] = [
        ElementType::Corridor,
        ElementType::Shop,
        ElementType::Stairs,
        ElementType::Elevator,
        ElementType::Escalator,
        ElementType::Entrance,
        ElementType::Exit,
        ElementType::Restroom,
        ElementType::Information,
        ElementType::WaitingArea,
        ElementType::Platform,
        ElementType::TicketGate,
        ElementType::Wall,
        ElementType::Pillar,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ElementType::Corridor => "corridor",
            ElementType::Shop => "shop",
            ElementType::Stairs => "stairs",
            ElementType::Elevator => "elevator",
            ElementType::Escalator => "escalator",
            ElementType::Entrance => "entrance",
            ElementType::Exit => "exit",
            ElementType::Restroom => "restroom",
            ElementType::Information => "information",
            ElementType::WaitingArea => "waiting_area",
            ElementType::Platform => "platform",
            ElementType::TicketGate => "ticket_gate",
            ElementType::Wall => "wall",
            ElementType::Pillar => "pillar",
        }
    }

    /// Walls and pillars block movement and never take part in a connection.
    #[must_use]
    pub fn is_obstacle(self) -> bool {
        matches!(self, ElementType::Wall | ElementType::Pillar)
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
