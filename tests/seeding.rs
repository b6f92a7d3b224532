use teamlife_core::seeding::{
    BoardInitializer, CustomPerTeam, Region, RowBand, SeedingMode, SplitHalf, UniformRandom,
};
use teamlife_core::{Cell, SeedingError, SimulationEngine, Team};

#[test]
fn test_uniform_teams_uses_all_three_states() {
    let seeded = UniformRandom::new(SeedingMode::Teams, Some(42))
        .produce(30, 30)
        .unwrap();
    let total = 30 * 30;
    let dead = total - seeded.counts.total();
    // Roughly a third each; generous bounds keep this seed-independent.
    for count in [dead, seeded.counts.team_a, seeded.counts.team_b] {
        assert!(count > total / 5 && count < total / 2, "count {count}");
    }
}

#[test]
fn test_classic_engine_never_produces_team_b() {
    let mut seeding = UniformRandom::new(SeedingMode::Classic, Some(8));
    let mut engine = SimulationEngine::new(&mut seeding, 25, 25).unwrap();
    for _ in 0..30 {
        assert_eq!(engine.step().census().team_b, 0);
    }
}

#[test]
fn test_split_half_neutral_strip_is_dead() {
    let seeded = SplitHalf::new(Some(5))
        .with_density(1.0)
        .produce(60, 80)
        .unwrap();
    for row in 29..=31 {
        for col in 0..80 {
            assert_eq!(seeded.grid.get(row, col), Ok(Cell::Dead), "({row}, {col})");
        }
    }
    assert_eq!(seeded.grid.get(28, 0), Ok(Cell::TeamA));
    assert_eq!(seeded.grid.get(32, 0), Ok(Cell::TeamB));
    assert_eq!(seeded.counts.team_a, 29 * 80);
    assert_eq!(seeded.counts.team_b, 28 * 80);
}

#[test]
fn test_split_half_summary_counts_seeded_cells() {
    let seeded = SplitHalf::new(Some(31)).produce(40, 40).unwrap();
    assert_eq!(seeded.counts, seeded.grid.census());
    assert!(seeded.counts.team_a > 0);
    assert!(seeded.counts.team_b > 0);
}

#[test]
fn test_custom_regions_with_explicit_bands() {
    let seeded = CustomPerTeam::new()
        .region(Team::A, Region::Rows(RowBand::new(0, 3)), |row, _| {
            if row == 2 {
                Cell::TeamA
            } else {
                Cell::Dead
            }
        })
        .region(Team::B, Region::Rows(RowBand::new(7, 10)), |row, col| {
            if row == 7 && col < 5 {
                Cell::TeamB
            } else {
                Cell::Dead
            }
        })
        .produce(10, 10)
        .unwrap();
    assert_eq!(seeded.counts.team_a, 10);
    assert_eq!(seeded.counts.team_b, 5);
}

#[test]
fn test_custom_overlapping_regions_rejected() {
    let result = CustomPerTeam::new()
        .region(Team::A, Region::Rows(RowBand::new(0, 6)), |_, _| Cell::TeamA)
        .region(Team::B, Region::Rows(RowBand::new(5, 10)), |_, _| Cell::TeamB)
        .produce(10, 10);
    assert!(matches!(result, Err(SeedingError::OverlappingRegions { .. })));
}

#[test]
fn test_region_past_last_row_rejected() {
    let result = CustomPerTeam::new()
        .region(Team::B, Region::Rows(RowBand::new(8, 12)), |_, _| Cell::TeamB)
        .produce(10, 10);
    assert!(matches!(result, Err(SeedingError::RegionOutOfBounds { rows: 10, .. })));
}

#[test]
fn test_engine_construction_rejects_invalid_dimensions() {
    let mut seeding = SplitHalf::new(Some(1));
    let err = SimulationEngine::new(&mut seeding, 10, 0).unwrap_err();
    assert!(matches!(err, SeedingError::Grid(_)));
}

#[test]
fn test_initializer_as_trait_object() {
    let mut strategies: Vec<Box<dyn BoardInitializer>> = vec![
        Box::new(UniformRandom::new(SeedingMode::Teams, Some(1))),
        Box::new(SplitHalf::new(Some(1))),
        Box::new(CustomPerTeam::formation(&[0, 1], &[18, 19])),
    ];
    for strategy in &mut strategies {
        let engine = SimulationEngine::new(strategy.as_mut(), 20, 20).unwrap();
        assert_eq!(engine.grid().dimensions(), (20, 20));
        assert_eq!(engine.generation(), 0);
    }
}
