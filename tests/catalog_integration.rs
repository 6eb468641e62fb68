//! Builtin catalog and loader integration tests

use std::fs;

use door_fitter::catalog::Catalog;
use door_fitter::core::ValueType;

#[test]
fn test_builtin_catalog_loads() {
    let catalog = Catalog::builtin().unwrap();
    assert_eq!(catalog.len(), 21);

    let mut ids: Vec<u32> = catalog.rounds().iter().map(|r| r.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 21, "round ids must be unique");
}

#[test]
fn test_builtin_catalog_mixes_safe_and_risky_rounds() {
    let catalog = Catalog::builtin().unwrap();

    let safe = catalog.rounds().iter().filter(|r| r.is_safe_hammer()).count();
    let risky = catalog.len() - safe;

    // The game only works if both kinds exist in the pool
    assert!(safe >= 5, "expected several safe casts, got {}", safe);
    assert!(risky >= 5, "expected several risky casts, got {}", risky);
}

#[test]
fn test_builtin_rounds_have_sensible_scores() {
    let catalog = Catalog::builtin().unwrap();

    for round in catalog.rounds() {
        assert!(
            round.measure_score > 0,
            "round {} has no measure payoff",
            round.id
        );
        assert!(
            round.hammer_debt <= 100,
            "round {} cannot overshoot the default ceiling in one hit",
            round.id
        );
        if round.is_safe_hammer() {
            assert!(
                round.hammer_score > 0,
                "safe cast {} should reward the hammer",
                round.id
            );
        }
    }
}

#[test]
fn test_builtin_well_known_rounds() {
    let catalog = Catalog::builtin().unwrap();

    let null_int = catalog.get(1).unwrap();
    assert_eq!(null_int.title, "The Null Integer");
    assert_eq!(null_int.incoming_type, ValueType::Mixed);
    assert_eq!(null_int.target_type, ValueType::Int);
    assert_eq!(null_int.hammer_debt, 20);

    let env_port = catalog.get(12).unwrap();
    assert!(env_port.is_safe_hammer());
    assert_eq!(env_port.hammer_score, 200);

    let insecure = catalog.get(21).unwrap();
    assert_eq!(insecure.target_type, ValueType::Object);
    assert_eq!(insecure.hammer_debt, 90);
}

#[test]
fn test_load_from_path() {
    let catalog = Catalog::builtin().unwrap();

    let path = std::env::temp_dir().join("door_fitter_rounds_test.toml");
    fs::write(&path, include_str!("../data/rounds.toml")).unwrap();

    let loaded = Catalog::load_from_path(&path).unwrap();
    assert_eq!(loaded, catalog);

    fs::remove_file(&path).ok();
}

#[test]
fn test_missing_file_is_an_io_error() {
    let path = std::env::temp_dir().join("door_fitter_no_such_catalog.toml");
    assert!(Catalog::load_from_path(&path).is_err());
}
