//! Grid placement and layout tests.

use garden_core::prelude::*;

fn board() -> (PlantCatalog, Grid) {
    let catalog = seed::companion_catalog();
    let grid = Grid::from_layout(&seed::reference_layout()).unwrap();
    (catalog, grid)
}

#[test]
fn placing_onto_occupied_cell_evicts_previous_occupant() {
    let (catalog, mut grid) = board();
    let tomato = catalog.lookup("tomato").unwrap();
    let carrot = catalog.lookup("carrot").unwrap();

    grid.place_plant(tomato, Position::new(2, 2)).unwrap();
    let outcome = grid.place_plant(carrot, Position::new(2, 2)).unwrap();

    assert_eq!(outcome.evicted, Some(tomato));
    assert_eq!(grid.plant_at(2, 2), Some(carrot));
    assert!(!grid.has_plant(tomato), "evicted plant must be off the board");
    assert!(grid.position_of(tomato).is_none());
    assert_eq!(grid.placed_count(), 1);
}

#[test]
fn moving_a_plant_leaves_one_occupied_cell() {
    let (catalog, mut grid) = board();
    let pea = catalog.lookup("pea").unwrap();

    grid.place_plant(pea, Position::new(0, 0)).unwrap();
    let outcome = grid.place_plant(pea, Position::new(5, 5)).unwrap();

    assert_eq!(outcome.moved_from, Some(Position::new(0, 0)));
    let occupied: Vec<_> = grid.cells().filter(|c| c.occupant == Some(pea)).collect();
    assert_eq!(occupied.len(), 1);
    assert_eq!(occupied[0].position, Position::new(5, 5));
    assert!(grid.plant_at(0, 0).is_none());
}

#[test]
fn moving_onto_an_occupied_cell_moves_and_evicts() {
    let (catalog, mut grid) = board();
    let pea = catalog.lookup("pea").unwrap();
    let onion = catalog.lookup("onion").unwrap();

    grid.place_plant(pea, Position::new(0, 0)).unwrap();
    grid.place_plant(onion, Position::new(1, 1)).unwrap();
    let outcome = grid.place_plant(pea, Position::new(1, 1)).unwrap();

    assert_eq!(outcome.moved_from, Some(Position::new(0, 0)));
    assert_eq!(outcome.evicted, Some(onion));
    assert_eq!(grid.placed(), vec![(pea, Position::new(1, 1))]);
}

#[test]
fn removing_unplaced_plant_changes_nothing() {
    let (catalog, mut grid) = board();
    let tomato = catalog.lookup("tomato").unwrap();
    let lettuce = catalog.lookup("lettuce").unwrap();
    grid.place_plant(tomato, Position::new(3, 3)).unwrap();

    assert!(!grid.remove_plant(lettuce));
    assert_eq!(grid.placed(), vec![(tomato, Position::new(3, 3))]);

    assert!(grid.remove_plant(tomato));
    assert!(!grid.remove_plant(tomato));
    assert!(grid.plant_at(3, 3).is_none());
}

#[test]
fn invalid_position_is_rejected() {
    let (catalog, mut grid) = board();
    let tomato = catalog.lookup("tomato").unwrap();

    let err = grid.place_plant(tomato, Position::new(0, 6)).unwrap_err();
    assert_eq!(
        err,
        GardenError::InvalidPosition {
            row: 0,
            col: 6,
            rows: 6,
            cols: 6
        }
    );
    assert_eq!(grid.placed_count(), 0);
}

#[test]
fn corner_has_three_neighbors() {
    let (_, grid) = board();
    assert_eq!(
        grid.neighbors(Position::new(0, 0)),
        vec![
            Position::new(0, 1),
            Position::new(1, 0),
            Position::new(1, 1)
        ]
    );
    assert_eq!(grid.neighbors(Position::new(0, 3)).len(), 5);
    assert_eq!(grid.neighbors(Position::new(3, 3)).len(), 8);
}

#[test]
fn mismatched_layout_leaves_grid_intact() {
    let (catalog, mut grid) = board();
    let tomato = catalog.lookup("tomato").unwrap();
    grid.place_plant(tomato, Position::new(0, 3)).unwrap();
    let before = grid.to_layout();

    let too_few_rows = seed::sunny_layout(5, 6);
    assert!(matches!(
        grid.load_layout(&too_few_rows),
        Err(GardenError::LayoutMismatch { found_rows: 5, .. })
    ));

    let mut one_short_row = seed::sunny_layout(6, 6);
    one_short_row.rows[4].pop();
    assert!(grid.load_layout(&one_short_row).is_err());

    assert_eq!(grid.to_layout(), before);
    assert_eq!(grid.plant_at(0, 3), Some(tomato));
}

#[test]
fn load_layout_clears_placements_and_reassigns_environments() {
    let (catalog, mut grid) = board();
    let tomato = catalog.lookup("tomato").unwrap();
    grid.place_plant(tomato, Position::new(0, 3)).unwrap();

    grid.load_layout(&seed::sunny_layout(6, 6)).unwrap();

    assert_eq!(grid.placed_count(), 0);
    assert_eq!(
        grid.cell(0, 1).unwrap().environment,
        EnvironmentMask::SUNNY | EnvironmentMask::MOIST
    );
}

#[test]
fn layout_parses_from_toml() {
    let text = r#"
        rows = [
            [{ light = "sunny", moisture = "moist" }, {}],
            [{ light = "partial_shade" }, { moisture = "wet" }],
        ]
    "#;
    let layout: Layout = toml::from_str(text).unwrap();
    let grid = Grid::from_layout(&layout).unwrap();

    assert_eq!(grid.cell(0, 0).unwrap().environment.describe(), "Sunny, Moist");
    assert_eq!(grid.cell(0, 1).unwrap().environment, EnvironmentMask::empty());
    assert_eq!(
        grid.cell(1, 0).unwrap().environment.describe(),
        "Partially Shaded, Unknown"
    );
    assert_eq!(grid.cell(1, 1).unwrap().environment, EnvironmentMask::WET);
}
