//! Тесты детерминизма
//!
//! Одинаковый seed → одинаковое поле облаков → одинаковое состояние клеток

use std::sync::Arc;
use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use microbe_simulation::*;

fn run_simulation(seed: u64, microbe_count: usize, tick_count: usize) -> Vec<u8> {
    let mut app = create_headless_app(seed);
    app.add_plugins(SimulationPlugin)
        .insert_resource(DeterministicRng::new(seed))
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_micros(16_667)));

    let mut grid = CompoundCloudGrid::new(48, 48, 1.0);
    {
        let mut rng = app.world_mut().resource_mut::<DeterministicRng>();
        grid.scatter(&mut rng.rng, &Compound::GLUCOSE, 300, 1.0..5.0);
        grid.scatter(&mut rng.rng, &Compound::AMMONIA, 100, 0.5..2.0);
    }
    let clouds = CompoundClouds::new(grid);
    app.insert_resource(clouds.clone());

    let config = MicrobeConfig::default();
    let species = Arc::new(MicrobeSpecies::new("Primum thrivium").with_compound(Compound::ATP, 5.0));

    {
        let mut commands = app.world_mut().commands();
        for i in 0..microbe_count {
            let position = Vec3::new(i as f32 * 3.0 - 15.0, 0.0, (i % 3) as f32 * 4.0);
            spawn_microbe(&mut commands, position, Arc::clone(&species), &clouds, &config)
                .expect("clouds attached");
        }
    }
    app.world_mut().flush();

    let mut query = app.world_mut().query::<(&mut Microbe, &Transform)>();
    for (mut microbe, transform) in query.iter_mut(app.world_mut()) {
        let x = transform.translation.x;
        microbe.movement_direction = Vec3::new(x.signum(), 0.0, -1.0);
        microbe.look_at_point = Vec3::new(-x, 0.0, 10.0);
    }

    for _ in 0..tick_count {
        app.update();
    }

    let mut snapshot = world_snapshot::<Microbe>(app.world_mut());
    snapshot.extend(world_snapshot::<Transform>(app.world_mut()));
    snapshot
}

#[test]
fn test_determinism_same_seed() {
    const SEED: u64 = 12345;

    let snapshot1 = run_simulation(SEED, 10, 300);
    let snapshot2 = run_simulation(SEED, 10, 300);

    assert_eq!(
        snapshot1, snapshot2,
        "Симуляция с одинаковым seed ({}) дала разные результаты!",
        SEED
    );
}

#[test]
fn test_different_seed_changes_field() {
    let snapshot1 = run_simulation(1, 10, 60);
    let snapshot2 = run_simulation(2, 10, 60);

    assert_ne!(snapshot1, snapshot2);
}
