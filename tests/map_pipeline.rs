use indoor_map::export::{export_connections_csv, export_json};
use indoor_map::loader::{load_map_draft, load_rules};
use indoor_map::model::{ConnectionType, ElementType, Floor, MapDraft, MapElement};
use indoor_map::topology::{backfill_connections, backfill_draft};
use indoor_map::validation::{validate, ValidationRules};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::tempdir;

const STATION: &str = r#"{
    "name": "Central Station",
    "category": "station",
    "metadata": {"totalWidth": 400, "totalHeight": 200, "totalFloors": 2, "tags": ["rail"]},
    "floors": [
        {
            "id": "f0",
            "level": 0,
            "name": "Concourse",
            "elements": [
                {"id": "entry", "type": "entrance", "x": 0, "y": 0, "width": 40, "height": 40, "rotation": 0, "floor": 0},
                {"id": "hall", "type": "corridor", "x": 40, "y": 0, "width": 200, "height": 40, "rotation": 0, "floor": 0},
                {"id": "kiosk", "type": "shop", "x": 100, "y": 40, "width": 60, "height": 40, "rotation": 0, "floor": 0},
                {"id": "lift", "type": "elevator", "x": 240, "y": 0, "width": 20, "height": 20, "rotation": 0, "floor": 0,
                 "accessibility": {"wheelchair": true, "visuallyImpaired": true, "hearingImpaired": true}},
                {"id": "wall", "type": "wall", "x": 0, "y": 40, "width": 100, "height": 5, "rotation": 0, "floor": 0}
            ],
            "connections": []
        },
        {
            "id": "f1",
            "level": 1,
            "name": "Platforms",
            "elements": [
                {"id": "p1", "type": "platform", "x": 0, "y": 0, "width": 300, "height": 30, "rotation": 0, "floor": 1},
                {"id": "p2", "type": "platform", "x": 0, "y": 30, "width": 300, "height": 30, "rotation": 0, "floor": 1}
            ],
            "connections": [
                {"id": "manual", "fromElementId": "p1", "toElementId": "p9", "type": "stairs_down",
                 "accessible": false, "bidirectional": false}
            ]
        }
    ]
}"#;

#[test]
fn station_pipeline_end_to_end() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("station.json");
    fs::write(&input, STATION).unwrap();

    let mut draft = load_map_draft(&input).unwrap();
    let report = validate(&draft, &ValidationRules::default());
    assert!(report.is_valid(), "{:?}", report.errors());

    let floors = backfill_connections(draft.floors.take().unwrap());

    let concourse: Vec<_> = floors[0]
        .connections
        .iter()
        .map(|c| (c.id.as_str(), c.connection_type))
        .collect();
    assert_eq!(
        concourse,
        vec![
            ("entry-hall", ConnectionType::Walkable),
            ("hall-kiosk", ConnectionType::Door),
            ("hall-lift", ConnectionType::ElevatorUp),
        ]
    );

    // Authored connections are kept untouched, even with dangling ids.
    assert_eq!(floors[1].connections.len(), 1);
    assert_eq!(floors[1].connections[0].to_element_id, "p9");

    draft.floors = Some(floors);

    let csv_path = dir.path().join("connections.csv");
    export_connections_csv(draft.floors.as_deref().unwrap(), &csv_path).unwrap();
    let csv = fs::read_to_string(&csv_path).unwrap();
    let lines: Vec<_> = csv.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(
        lines[0],
        "Floor,Connection ID,From,To,Type,Distance (m),Time (s),Accessible,Bidirectional"
    );
    assert_eq!(lines[1], "0,entry-hall,entry,hall,walkable,12.00,9,yes,yes");
    assert_eq!(lines[4], "1,manual,p1,p9,stairs_down,,,no,no");

    let json_path = dir.path().join("out.json");
    export_json(&draft, &json_path).unwrap();
    let reloaded = load_map_draft(&json_path).unwrap();
    assert_eq!(reloaded, draft);
}

#[test]
fn corridor_only_map_needs_an_entrance() {
    let json = r#"{"floors": [{"level": 0, "name": "G", "elements": [
        {"id": "c", "type": "corridor", "x": 0, "y": 0, "width": 10, "height": 10, "floor": 0}
    ]}]}"#;
    let draft: MapDraft = serde_json::from_str(json).unwrap();
    let report = validate(&draft, &ValidationRules::default());
    assert_eq!(
        report.errors(),
        vec!["Map must have at least one entrance element"]
    );

    let relaxed = ValidationRules {
        required_elements: vec![ElementType::Corridor],
        ..ValidationRules::default()
    };
    assert!(validate(&draft, &relaxed).is_valid());
}

#[test]
fn rules_file_overrides_selected_limits() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("rules.json");
    fs::write(&path, r#"{"maxWidth": 50, "requiredElements": []}"#).unwrap();

    let rules = load_rules(&path).unwrap();
    assert_eq!(rules.max_width, 50.0);
    assert_eq!(rules.max_height, 1000.0);

    let draft: MapDraft =
        serde_json::from_str(r#"{"metadata": {"totalWidth": 80}, "floors": []}"#).unwrap();
    assert_eq!(
        validate(&draft, &rules).errors(),
        vec!["Map width must be between 10 and 50"]
    );
}

#[test]
fn unreadable_and_malformed_files_are_errors() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing.json");
    let err = load_map_draft(&missing).unwrap_err();
    assert!(err.to_string().starts_with("failed to read file"));

    let broken = dir.path().join("broken.json");
    fs::write(&broken, "{ not json").unwrap();
    let err = load_map_draft(&broken).unwrap_err();
    assert!(err.to_string().starts_with("invalid JSON in"));
}

#[test]
fn inferred_connections_count_toward_the_ceiling() {
    let chain = Floor::new(0, "Ground").with_elements(vec![
        MapElement::new("in", ElementType::Entrance, 0.0, 0.0, 40.0, 40.0, 0),
        MapElement::new("c1", ElementType::Corridor, 40.0, 0.0, 40.0, 40.0, 0),
        MapElement::new("c2", ElementType::Corridor, 80.0, 0.0, 40.0, 40.0, 0),
        MapElement::new("c3", ElementType::Corridor, 120.0, 0.0, 40.0, 40.0, 0),
    ]);
    let draft = MapDraft {
        floors: Some(vec![chain]),
        ..MapDraft::default()
    };
    let rules = ValidationRules {
        max_connections: 2,
        ..ValidationRules::default()
    };

    let assembled = backfill_draft(draft);
    let floors = assembled.floors.as_deref().unwrap();
    assert_eq!(floors[0].connections.len(), 3);
    assert_eq!(
        validate(&assembled, &rules).errors(),
        vec!["Map cannot have more than 2 connections"]
    );
}

#[test]
fn draft_without_floors_is_left_alone() {
    let draft = MapDraft {
        name: Some("Empty".to_string()),
        ..MapDraft::default()
    };
    assert_eq!(backfill_draft(draft.clone()), draft);
}
