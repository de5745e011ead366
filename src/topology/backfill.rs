use super::detect_connections;
use crate::model::{Floor, MapDraft};
use rayon::prelude::*;

/// Returns the floor with its connections resolved: an explicit, non-empty
/// connection list is kept as-is, otherwise connections are inferred.
#[must_use]
pub fn resolve_connections(mut floor: Floor) -> Floor {
    if floor.connections.is_empty() {
        floor.connections = detect_connections(&floor);
    }
    floor
}

/// Resolves connections on every floor. Floors never share connections, so
/// they are processed in parallel; the output keeps the input order.
#[must_use]
pub fn backfill_connections(floors: Vec<Floor>) -> Vec<Floor> {
    floors.into_par_iter().map(resolve_connections).collect()
}

/// Resolves connections on every floor of a draft, leaving a draft without
/// floors untouched. Run this before validating so that inferred connections
/// count toward the connection ceiling.
#[must_use]
pub fn backfill_draft(mut draft: MapDraft) -> MapDraft {
    draft.floors = draft.floors.map(backfill_connections);
    draft
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ConnectionType, ElementConnection, ElementType, MapElement};
    use pretty_assertions::assert_eq;

    fn corridor_pair(level: i32) -> Floor {
        Floor::new(level, format!("Level {level}")).with_elements(vec![
            MapElement::new("a", ElementType::Corridor, 0.0, 0.0, 100.0, 40.0, level),
            MapElement::new("b", ElementType::Corridor, 100.0, 0.0, 100.0, 40.0, level),
        ])
    }

    #[test]
    fn explicit_connections_win() {
        let explicit = ElementConnection {
            id: "manual".to_string(),
            from_element_id: "a".to_string(),
            to_element_id: "missing".to_string(),
            connection_type: ConnectionType::ElevatorDown,
            distance: None,
            time: None,
            accessible: false,
            bidirectional: false,
        };
        let mut floor = corridor_pair(0);
        floor.connections = vec![explicit.clone()];

        let resolved = resolve_connections(floor);
        assert_eq!(resolved.connections, vec![explicit]);
    }

    #[test]
    fn empty_connections_are_inferred() {
        let resolved = resolve_connections(corridor_pair(0));
        assert_eq!(resolved.connections.len(), 1);
        assert_eq!(resolved.connections[0].id, "a-b");
    }

    #[test]
    fn backfill_keeps_floor_order() {
        let floors: Vec<Floor> = (-2..6).map(corridor_pair).collect();
        let resolved = backfill_connections(floors);

        let levels: Vec<_> = resolved.iter().map(|f| f.level).collect();
        assert_eq!(levels, (-2..6).map(Some).collect::<Vec<_>>());
        assert!(resolved.iter().all(|f| f.connections.len() == 1));
    }
}
