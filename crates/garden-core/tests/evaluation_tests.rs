//! Evaluation engine tests against the seed catalogs.

use garden_core::prelude::*;

fn place(grid: &mut Grid, catalog: &PlantCatalog, key: &str, row: usize, col: usize) -> PlantId {
    let id = catalog.lookup(key).unwrap();
    grid.place_plant(id, Position::new(row, col)).unwrap();
    id
}

#[test]
fn thriving_plant_is_happy_in_environment_mode() {
    let catalog = seed::starter_catalog();
    let cell = EnvironmentMask::SUNNY | EnvironmentMask::PARTIAL_SHADE | EnvironmentMask::MOIST;
    assert_eq!(cell.bits(), 19);

    let mut grid = Grid::from_layout(&seed::sunny_layout(1, 1)).unwrap();
    let tomato = place(&mut grid, &catalog, "tomato", 0, 0);

    let def = catalog.get(tomato).unwrap();
    assert_eq!(def.preferred.bits(), 17);
    assert!(def.thrives_in(cell));

    let engine = EvaluationEngine::new(&catalog, &grid);
    let verdict = engine.evaluate_environment(tomato).unwrap();
    assert_eq!(verdict.status, Status::Happy);
    assert_eq!(verdict.reason, "Tomato thrives in this environment!");
}

#[test]
fn thrives_implies_happy_for_every_seed_plant_and_cell() {
    let catalog = seed::companion_catalog();
    for light in Light::ALL {
        for moisture in Moisture::ALL {
            let env = CellEnvironment::new(light, moisture);
            let mut grid = Grid::from_layout(&Layout::uniform(1, 1, env)).unwrap();
            for def in catalog.plants() {
                grid.place_plant(def.id, Position::new(0, 0)).unwrap();
                let verdict = EvaluationEngine::new(&catalog, &grid)
                    .evaluate_environment(def.id)
                    .unwrap();
                if def.thrives_in(env.mask()) {
                    assert_eq!(verdict.status, Status::Happy, "{} in {:?}", def.key, env);
                }
            }
        }
    }
}

#[test]
fn tolerated_and_disliked_environments() {
    let catalog = seed::companion_catalog();
    let grid_for = |light, moisture| {
        Grid::from_layout(&Layout::uniform(1, 1, CellEnvironment::new(light, moisture))).unwrap()
    };

    let mut grid = grid_for(Light::PartialShade, Moisture::Moist);
    let tomato = place(&mut grid, &catalog, "tomato", 0, 0);
    let verdict = EvaluationEngine::new(&catalog, &grid)
        .evaluate_environment(tomato)
        .unwrap();
    assert_eq!(verdict.status, Status::Neutral);
    assert_eq!(verdict.reason, "Tomato tolerates this environment.");

    // The reference layout's empty cells match no flags at all.
    let mut grid = Grid::from_layout(&seed::reference_layout()).unwrap();
    let tomato = place(&mut grid, &catalog, "tomato", 0, 1);
    let verdict = EvaluationEngine::new(&catalog, &grid)
        .evaluate_environment(tomato)
        .unwrap();
    assert_eq!(verdict.status, Status::Unhappy);
    assert_eq!(verdict.reason, "Tomato doesn't like this environment.");
}

#[test]
fn one_liked_and_one_hated_neighbor_is_unhappy() {
    let catalog = seed::companion_catalog();
    let mut grid = Grid::from_layout(&seed::reference_layout()).unwrap();
    let tomato = place(&mut grid, &catalog, "tomato", 2, 2);
    place(&mut grid, &catalog, "onion", 1, 1);
    place(&mut grid, &catalog, "carrot", 3, 3);

    let verdict = EvaluationEngine::new(&catalog, &grid)
        .evaluate_neighbors(tomato)
        .unwrap();
    assert_eq!(verdict.status, Status::Unhappy);
    assert_eq!(verdict.liked, vec!["Onion".to_string()]);
    assert_eq!(verdict.hated, vec!["Carrot".to_string()]);
    assert_eq!(verdict.reason, "Tomato doesn't like being next to Carrot.");
}

#[test]
fn neighbor_names_follow_row_major_order() {
    let catalog = seed::companion_catalog();
    let mut grid = Grid::new(3, 3);
    let lettuce = place(&mut grid, &catalog, "lettuce", 1, 1);
    place(&mut grid, &catalog, "pea", 2, 0);
    place(&mut grid, &catalog, "onion", 0, 2);
    place(&mut grid, &catalog, "carrot", 1, 0);

    let verdict = EvaluationEngine::new(&catalog, &grid)
        .evaluate_neighbors(lettuce)
        .unwrap();
    assert_eq!(verdict.status, Status::Happy);
    assert_eq!(
        verdict.reason,
        "Lettuce likes being next to Onion, Carrot, Pea."
    );
}

#[test]
fn lone_plant_has_no_strong_feelings() {
    let catalog = seed::companion_catalog();
    let mut grid = Grid::new(3, 3);
    let pea = place(&mut grid, &catalog, "pea", 0, 0);
    place(&mut grid, &catalog, "tomato", 2, 2);

    let verdict = EvaluationEngine::new(&catalog, &grid)
        .evaluate_neighbors(pea)
        .unwrap();
    assert_eq!(verdict.status, Status::Neutral);
    assert_eq!(verdict.reason, "Pea has no strong feelings about its neighbors.");
}

#[test]
fn combined_happy_environment_with_neutral_neighbors_is_neutral() {
    let catalog = seed::starter_catalog();
    let mut grid = Grid::from_layout(&seed::sunny_layout(3, 3)).unwrap();
    let tomato = place(&mut grid, &catalog, "tomato", 0, 0);

    let evaluation = EvaluationEngine::new(&catalog, &grid).evaluate(tomato, GameMode::Combined);
    assert_eq!(evaluation.environment.status, Status::Happy);
    assert_eq!(evaluation.neighbors.status, Status::Neutral);
    assert_eq!(evaluation.status, Status::Neutral);
    assert_eq!(evaluation.reason, "Plant is content but not thriving.");
}

#[test]
fn combined_unhappy_environment_with_happy_neighbors_is_unhappy() {
    let catalog = seed::starter_catalog();
    let mut grid = Grid::new(3, 3);
    let tomato = place(&mut grid, &catalog, "tomato", 1, 1);
    place(&mut grid, &catalog, "basil", 0, 0);

    let evaluation = EvaluationEngine::new(&catalog, &grid).evaluate(tomato, GameMode::Combined);
    assert_eq!(evaluation.environment.status, Status::Unhappy);
    assert_eq!(evaluation.neighbors.status, Status::Happy);
    assert_eq!(evaluation.status, Status::Unhappy);
    assert_eq!(
        evaluation.reason,
        "Plant is unhappy with either environment or neighbors."
    );
}

#[test]
fn combined_thriving_on_both_counts() {
    let catalog = seed::starter_catalog();
    let mut grid = Grid::from_layout(&seed::sunny_layout(3, 3)).unwrap();
    let tomato = place(&mut grid, &catalog, "tomato", 1, 1);
    place(&mut grid, &catalog, "carrot", 1, 2);

    let evaluation = EvaluationEngine::new(&catalog, &grid).evaluate(tomato, GameMode::Combined);
    assert_eq!(evaluation.status, Status::Happy);
    assert_eq!(
        evaluation.reason,
        "Plant is thriving with both environment and neighbors!"
    );
}

#[test]
fn skipped_sub_check_is_a_neutral_placeholder() {
    let catalog = seed::starter_catalog();
    let mut grid = Grid::new(2, 2);
    let tomato = place(&mut grid, &catalog, "tomato", 0, 0);
    place(&mut grid, &catalog, "corn", 0, 1);
    let engine = EvaluationEngine::new(&catalog, &grid);

    let env_only = engine.evaluate(tomato, GameMode::Environment);
    assert_eq!(env_only.neighbors, NeighborVerdict::placeholder());
    assert_eq!(env_only.status, Status::Unhappy);

    let neighbors_only = engine.evaluate(tomato, GameMode::Neighbors);
    assert_eq!(neighbors_only.environment, Verdict::placeholder());
    assert_eq!(neighbors_only.status, Status::Unhappy);
    assert_eq!(neighbors_only.reason, "Tomato doesn't like being next to Corn.");
    assert_eq!(neighbors_only.position, Some(Position::new(0, 0)));
}

#[test]
fn unplaced_plant_evaluates_to_error() {
    let catalog = seed::companion_catalog();
    let grid = Grid::new(6, 6);
    let tomato = catalog.lookup("tomato").unwrap();
    let engine = EvaluationEngine::new(&catalog, &grid);

    for mode in [GameMode::Environment, GameMode::Neighbors, GameMode::Combined] {
        let evaluation = engine.evaluate(tomato, mode);
        assert_eq!(evaluation.status, Status::Error);
        assert_eq!(evaluation.reason, "Plant not found on grid");
    }
    assert!(engine.evaluate_environment(tomato).is_none());
}

#[test]
fn evaluate_all_follows_placement_order() {
    let catalog = seed::companion_catalog();
    let mut grid = Grid::from_layout(&seed::reference_layout()).unwrap();
    let pea = place(&mut grid, &catalog, "pea", 1, 1);
    let potato = place(&mut grid, &catalog, "potato", 0, 0);
    let onion = place(&mut grid, &catalog, "onion", 5, 4);

    let results = EvaluationEngine::new(&catalog, &grid).evaluate_all(GameMode::Combined);
    let order: Vec<_> = results.iter().map(|(id, _)| *id).collect();
    assert_eq!(order, vec![pea, potato, onion]);
    assert!(results.iter().all(|(_, e)| e.status != Status::Error));
}

#[test]
fn asymmetric_relationships_are_read_directionally() {
    let catalog = PlantCatalog::builder()
        .add_plant("a", "A", EnvironmentMask::empty(), EnvironmentMask::empty(), Rgb::WHITE)
        .unwrap()
        .add_plant("b", "B", EnvironmentMask::empty(), EnvironmentMask::empty(), Rgb::WHITE)
        .unwrap()
        .relate("a", "b", Relationship::Likes)
        .unwrap()
        .relate("b", "a", Relationship::Hates)
        .unwrap()
        .build();
    let mut grid = Grid::new(1, 2);
    let a = place(&mut grid, &catalog, "a", 0, 0);
    let b = place(&mut grid, &catalog, "b", 0, 1);
    let engine = EvaluationEngine::new(&catalog, &grid);

    assert_eq!(engine.evaluate(a, GameMode::Neighbors).status, Status::Happy);
    assert_eq!(engine.evaluate(b, GameMode::Neighbors).status, Status::Unhappy);
    assert_eq!(catalog.asymmetric_pairs(), vec![(a, b)]);
}

#[test]
fn catalog_loads_from_toml() {
    let text = r##"
        [[plants]]
        id = "mint"
        name = "Mint"
        preferred = "SHADE | WET"
        tolerated = "SHADE | PARTIAL_SHADE | WET | MOIST"
        color = "#00aa88"

        [[plants]]
        id = "sage"
        name = "Sage"
        preferred = "SUNNY | DRY"
        tolerated = "SUNNY | DRY"

        [[relationships]]
        from = "mint"
        to = "sage"
        relationship = "hates"
        mutual = true
    "##;
    let spec: CatalogSpec = toml::from_str(text).unwrap();
    let catalog = PlantCatalog::from_spec(&spec).unwrap();

    let mint = catalog.get_by_key("mint").unwrap();
    assert_eq!(mint.preferred, EnvironmentMask::SHADE | EnvironmentMask::WET);
    assert_eq!(mint.color, Rgb::new(0x00, 0xaa, 0x88));
    assert_eq!(catalog.get_by_key("sage").unwrap().color, Rgb::PURPLE);

    let (m, s) = (catalog.lookup("mint").unwrap(), catalog.lookup("sage").unwrap());
    assert_eq!(catalog.relationship(m, s), Relationship::Hates);
    assert_eq!(catalog.relationship(s, m), Relationship::Hates);
}
