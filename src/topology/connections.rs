use crate::geometry::{center_distance_meters, walking_time_seconds, Rect};
use crate::model::{ConnectionType, ElementConnection, ElementType, Floor, MapElement};
use tracing::debug;

/// Infers the connections between every adjacent pair of elements on a floor.
///
/// Pairs are visited in `i < j` order over `floor.elements`, and each
/// connection runs from the earlier element to the later one. Elements on a
/// different floor index, obstacles, and pairs whose rectangles do not touch
/// produce nothing. The floor's own `connections` are ignored here.
///
/// # Example
///
/// ```
/// use indoor_map::model::{ConnectionType, ElementType, Floor, MapElement};
/// use indoor_map::topology::detect_connections;
///
/// let floor = Floor::new(0, "Ground").with_elements(vec![
///     MapElement::new("a", ElementType::Corridor, 0.0, 0.0, 100.0, 40.0, 0),
///     MapElement::new("b", ElementType::Shop, 100.0, 0.0, 100.0, 40.0, 0),
/// ]);
/// let connections = detect_connections(&floor);
/// assert_eq!(connections.len(), 1);
/// assert_eq!(connections[0].connection_type, ConnectionType::Door);
/// ```
#[must_use]
pub fn detect_connections(floor: &Floor) -> Vec<ElementConnection> {
    let elements = &floor.elements;
    let mut connections = Vec::new();

    for (i, first) in elements.iter().enumerate() {
        for second in &elements[i + 1..] {
            if let Some(connection) = connect(first, second) {
                connections.push(connection);
            }
        }
    }

    debug!(
        floor = %floor.level_label(),
        elements = elements.len(),
        connections = connections.len(),
        "inferred floor connections"
    );

    connections
}

/// Builds the connection from `from` to `to`, if the pair is connected at all.
#[must_use]
pub fn connect(from: &MapElement, to: &MapElement) -> Option<ElementConnection> {
    if from.floor != to.floor {
        return None;
    }

    let connection_type = classify(from.element_type, to.element_type)?;

    let from_rect = Rect::from(from);
    let to_rect = Rect::from(to);
    if !from_rect.is_adjacent_to(&to_rect) {
        return None;
    }

    let distance = center_distance_meters(&from_rect, &to_rect);

    Some(ElementConnection {
        id: format!("{}-{}", from.id, to.id),
        from_element_id: from.id.clone(),
        to_element_id: to.id.clone(),
        connection_type,
        distance: Some(distance),
        time: Some(walking_time_seconds(distance)),
        accessible: from.is_wheelchair_accessible() && to.is_wheelchair_accessible(),
        bidirectional: true,
    })
}

/// Connection kind for a pair of element types, first match wins:
/// stairs, elevator, escalator, shop door, then plain walkable.
///
/// Vertical transport is always classified as going up; the floor delta is
/// not consulted. Returns `None` when either side is an obstacle.
#[must_use]
pub fn classify(a: ElementType, b: ElementType) -> Option<ConnectionType> {
    if a.is_obstacle() || b.is_obstacle() {
        return None;
    }

    let either = |t: ElementType| a == t || b == t;

    let connection_type = if either(ElementType::Stairs) {
        ConnectionType::StairsUp
    } else if either(ElementType::Elevator) {
        ConnectionType::ElevatorUp
    } else if either(ElementType::Escalator) {
        ConnectionType::EscalatorUp
    } else if either(ElementType::Shop) {
        ConnectionType::Door
    } else {
        ConnectionType::Walkable
    };

    Some(connection_type)
}
