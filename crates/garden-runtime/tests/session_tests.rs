//! Session tests on the shipped board (companion catalog, reference layout).

use garden_runtime::prelude::*;

fn session() -> GardenSession {
    SessionBuilder::new().build().unwrap()
}

#[test]
fn default_session_is_the_reference_board() {
    let session = session();
    assert_eq!(session.grid().rows(), 6);
    assert_eq!(session.grid().cols(), 6);
    assert_eq!(session.mode(), GameMode::Environment);
    assert_eq!(session.mode_label(), "Environment");
    assert_eq!(session.catalog().len(), 7);
    assert_eq!(session.tags().len(), 4);
    assert_eq!(
        session.describe_cell(0, 3).as_deref(),
        Some("Partially Shaded, Wet")
    );
    assert_eq!(session.describe_cell(0, 1).as_deref(), Some("Unknown, Unknown"));
    assert!(session.describe_cell(6, 0).is_none());
}

#[test]
fn place_and_evaluate_by_key() {
    let mut session = session();
    session.place_plant("tomato", 0, 3).unwrap();

    let evaluation = session.evaluate("tomato");
    assert_eq!(evaluation.status, Status::Happy);
    assert_eq!(evaluation.reason, "Tomato thrives in this environment!");
    assert_eq!(session.plant_at(0, 3).map(|p| p.key.as_str()), Some("tomato"));
    assert!(session.cell(0, 3).unwrap().occupant.is_some());
}

#[test]
fn unknown_keys_are_handled_without_panics() {
    let mut session = session();
    let err = session.place_plant("basil", 0, 0).unwrap_err();
    assert_eq!(err, GardenError::UnknownPlant("basil".into()));
    assert_eq!(session.evaluate("basil").status, Status::Error);
    assert!(!session.remove_plant("basil"));
    assert!(session.drain_events().is_empty());
}

#[test]
fn off_board_placement_is_rejected() {
    let mut session = session();
    let err = session.place_plant("pea", 9, 0).unwrap_err();
    assert!(matches!(err, GardenError::InvalidPosition { row: 9, .. }));
    assert_eq!(session.evaluate("pea").status, Status::Error);
}

#[test]
fn eviction_is_recorded_before_the_new_placement() {
    let mut session = session();
    session.place_plant("tomato", 0, 3).unwrap();
    session.place_plant("carrot", 0, 3).unwrap();

    let pos = Position::new(0, 3);
    assert_eq!(
        session.drain_events(),
        vec![
            SessionEvent::Placed {
                plant: "tomato".into(),
                position: pos
            },
            SessionEvent::Evicted {
                plant: "tomato".into(),
                position: pos,
                by: "carrot".into()
            },
            SessionEvent::Placed {
                plant: "carrot".into(),
                position: pos
            },
        ]
    );
    assert_eq!(session.evaluate("tomato").status, Status::Error);
    assert!(session.drain_events().is_empty());
}

#[test]
fn moves_and_no_op_placements() {
    let mut session = session();
    session.place_plant("pea", 1, 1).unwrap();
    session.place_plant("pea", 1, 1).unwrap();
    session.place_plant("pea", 3, 4).unwrap();
    assert!(session.remove_plant("pea"));
    assert!(!session.remove_plant("pea"));

    assert_eq!(
        session.drain_events(),
        vec![
            SessionEvent::Placed {
                plant: "pea".into(),
                position: Position::new(1, 1)
            },
            SessionEvent::Moved {
                plant: "pea".into(),
                from: Position::new(1, 1),
                to: Position::new(3, 4)
            },
            SessionEvent::Removed {
                plant: "pea".into(),
                position: Position::new(3, 4)
            },
        ]
    );
}

#[test]
fn cycling_modes_changes_the_verdict() {
    let mut session = session();
    session.place_plant("tomato", 0, 3).unwrap();
    session.place_plant("carrot", 1, 2).unwrap();

    assert_eq!(session.evaluate("tomato").status, Status::Happy);

    assert_eq!(session.cycle_mode(), GameMode::Neighbors);
    let evaluation = session.evaluate("tomato");
    assert_eq!(evaluation.status, Status::Unhappy);
    assert_eq!(evaluation.neighbors.hated, vec!["Carrot".to_string()]);

    assert_eq!(session.cycle_mode(), GameMode::Combined);
    assert_eq!(session.mode_label(), "Combined (Environment & Neighbors)");
    assert_eq!(session.evaluate("tomato").status, Status::Unhappy);

    assert_eq!(session.cycle_mode(), GameMode::Environment);
    assert_eq!(session.evaluate("tomato").status, Status::Happy);
}

#[test]
fn layout_mismatch_leaves_session_untouched() {
    let mut session = session();
    session.place_plant("onion", 0, 0).unwrap();
    session.drain_events();

    let err = session.load_layout(&seed::sunny_layout(6, 5)).unwrap_err();
    assert!(matches!(err, GardenError::LayoutMismatch { .. }));
    assert_eq!(session.plant_at(0, 0).map(|p| p.key.as_str()), Some("onion"));
    assert!(session.drain_events().is_empty());

    session.load_layout(&seed::sunny_layout(6, 6)).unwrap();
    assert!(session.plant_at(0, 0).is_none());
    assert_eq!(
        session.drain_events(),
        vec![SessionEvent::LayoutLoaded {
            rows: 6,
            cols: 6,
            cleared: 1
        }]
    );
    assert_eq!(session.describe_cell(0, 1).as_deref(), Some("Sunny, Moist"));
}

#[test]
fn tags_place_their_plants() {
    let mut session = session();
    let tomato_tag: TagUid = "04:53:45:3B".parse().unwrap();
    session.place_tag(tomato_tag, 0, 3).unwrap();
    assert_eq!(session.plant_at(0, 3).map(|p| p.key.as_str()), Some("tomato"));

    let blank = TagUid([0xDE, 0xAD, 0xBE, 0xEF]);
    assert!(matches!(
        session.place_tag(blank, 1, 1),
        Err(GardenError::UnknownTag(_))
    ));

    session.register_tag(blank, "pea").unwrap();
    session.place_tag(blank, 1, 1).unwrap();
    assert_eq!(session.identify_tag(blank).map(|p| p.key.as_str()), Some("pea"));
    assert_eq!(session.evaluate("pea").status, Status::Happy);

    assert!(matches!(
        session.register_tag(blank, "basil"),
        Err(GardenError::UnknownPlant(_))
    ));
}

#[test]
fn status_frame_lists_placed_plants() {
    let mut session = session();
    session.place_plant("tomato", 0, 3).unwrap();
    session.place_plant("potato", 0, 1).unwrap();

    assert_eq!(
        session.status_frame(),
        vec![
            (Position::new(0, 3), Status::Happy),
            (Position::new(0, 1), Status::Unhappy),
        ]
    );
}

#[test]
fn snapshot_serializes_board_state() {
    let mut session = session();
    session.place_plant("tomato", 0, 3).unwrap();
    let snapshot = session.snapshot();

    assert_eq!(snapshot.cells.len(), 36);
    assert_eq!(snapshot.plants.len(), 1);
    let cell = &snapshot.cells[3];
    assert_eq!(cell.plant.as_deref(), Some("tomato"));
    assert_eq!(cell.status, Some(Status::Happy));
    assert_eq!(cell.mask, 2 | 32);

    assert_eq!(session.cell_view(0, 3).as_ref(), Some(cell));
    assert!(session.cell_view(0, 1).unwrap().plant.is_none());
    assert!(session.cell_view(6, 6).is_none());

    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(json["mode"], "environment");
    assert_eq!(json["cells"][3]["environment"], "Partially Shaded, Wet");
    assert!(json["cells"][0].get("plant").is_none());
    assert_eq!(json["plants"][0]["evaluation"]["status"], "happy");
}

#[test]
fn events_serialize_with_a_type_tag() {
    let event = SessionEvent::ModeChanged {
        mode: GameMode::Neighbors,
        label: "Neighbors".into(),
    };
    let json = serde_json::to_value(&event).unwrap();
    assert_eq!(json["type"], "mode_changed");
    assert_eq!(json["mode"], "neighbors");
}
