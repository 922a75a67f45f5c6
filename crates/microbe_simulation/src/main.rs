//! Headless симуляция клеток
//!
//! Поле glucose + несколько клеток с постоянным намерением движения,
//! без рендера и без Rapier step (импульсы копятся в ExternalImpulse).

use std::sync::Arc;

use bevy::prelude::*;
use microbe_simulation::{
    create_headless_app, log_error, log_info, set_log_level, spawn_microbe, Compound, CompoundCloudGrid, CompoundClouds,
    DeterministicRng, LogLevel, Microbe, MicrobeConfig, MicrobeSpecies, SimulationPlugin,
};

fn main() {
    let seed = 42;
    let mut app = create_headless_app(seed);
    // debug-логи клеток (species, переходы ATP) на 1000 тиков не нужны
    set_log_level(LogLevel::Info);
    log_info(&format!("Starting headless microbe simulation (seed: {})", seed));

    app.add_plugins(SimulationPlugin);
    app.insert_resource(DeterministicRng::new(seed));

    // Поле 64x64 с разбросанной glucose
    let mut grid = CompoundCloudGrid::new(64, 64, 1.0);
    {
        let mut rng = app.world_mut().resource_mut::<DeterministicRng>();
        grid.scatter(&mut rng.rng, &Compound::GLUCOSE, 400, 1.0..6.0);
    }
    log_info(&format!(
        "Compound field {}x{} (cell {}), glucose total {:.1}",
        grid.width(),
        grid.height(),
        grid.cell_size(),
        grid.total(&Compound::GLUCOSE)
    ));
    let clouds = CompoundClouds::new(grid);
    app.insert_resource(clouds.clone());

    let config = app.world().resource::<MicrobeConfig>().clone();
    let cell = Arc::new(MicrobeSpecies::new("Primum thrivium").with_compound(Compound::ATP, 30.0));
    let bacterium = Arc::new(MicrobeSpecies::new("Coccus").bacteria().with_compound(Compound::ATP, 10.0));

    {
        let mut commands = app.world_mut().commands();
        for i in 0..4 {
            let species = if i % 2 == 0 { &cell } else { &bacterium };
            let position = Vec3::new(i as f32 * 6.0 - 9.0, 0.0, 0.0);

            match spawn_microbe(&mut commands, position, Arc::clone(species), &clouds, &config) {
                Ok(entity) => log_info(&format!("{} #{} → {:?}", species.name, i, entity)),
                Err(error) => log_error(&format!("Failed to spawn microbe: {}", error)),
            }
        }
    }
    app.world_mut().flush();

    // Все плывут "вперёд" и смотрят в сторону +X
    let mut query = app.world_mut().query::<&mut Microbe>();
    for mut microbe in query.iter_mut(app.world_mut()) {
        microbe.movement_direction = Vec3::NEG_Z;
        microbe.look_at_point = Vec3::new(100.0, 0.0, 0.0);
    }

    // Запускаем 1000 тиков симуляции
    for tick in 0..1000 {
        app.update();

        if tick % 100 == 0 {
            let mut query = app.world_mut().query::<&Microbe>();
            for microbe in query.iter(app.world()) {
                log_info(&format!(
                    "Tick {}: atp {:.2}, glucose {:.2} (absorbed total {:.2})",
                    tick,
                    microbe.compounds.get_compound_amount(&Compound::ATP),
                    microbe.compounds.get_compound_amount(&Compound::GLUCOSE),
                    microbe.total_absorbed().get(&Compound::GLUCOSE),
                ));
            }
        }
    }

    log_info("Simulation complete!");
}
