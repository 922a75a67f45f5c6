//! Microbe Simulation Core
//!
//! ECS-симуляция клетки на Bevy 0.16 (strategic layer)
//!
//! HYBRID ARCHITECTURE:
//! - ECS = клетка: compounds, ATP cost движения, поглощение, поворот
//! - Rapier = интеграция импульсов и коллизии
//! - Хост = membrane/рендер, species editor, spawn registry, AI

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// Публичные модули
pub mod cloud;
pub mod compounds;
pub mod config;
pub mod constants;
pub mod logger;
pub mod microbe;
pub mod physics;

// Re-export базовых типов для удобства
pub use cloud::{absorb_nearby, CloudHandle, CompoundCloud, CompoundCloudGrid, CompoundClouds};
pub use compounds::{AbsorbedTally, Compound, CompoundBag};
pub use config::{ConfigError, MicrobeConfig};
pub use logger::{init_logger, log, log_error, log_info, log_warning, set_log_level, LogLevel};
pub use microbe::{
    spawn_microbe, AiControllable, AtpStarved, Deactivated, FrameReport, Microbe, MicrobeError, MicrobeFailed,
    MicrobePlugin, MicrobeSpecies, ProcessParticipant, SpawnedEntity, VentingOutcome,
};
pub use physics::{compute_movement_force, smoothed_rotation, HeadlessBody, MicrobeBody, MovementForce};

use constants::PHYSICS_HZ;

/// Главный plugin симуляции (объединяет все подсистемы)
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app
            // Fixed timestep 60Hz для physics step
            .insert_resource(Time::<Fixed>::from_hz(PHYSICS_HZ))
            // Детерминистичный RNG (seed по умолчанию)
            .insert_resource(DeterministicRng::new(42))
            .add_plugins(MicrobePlugin);
    }
}

/// Детерминистичный RNG resource (seeded)
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Создаёт minimal Bevy App для headless симуляции
///
/// MicrobePlugin подключается отдельно (или через SimulationPlugin).
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(DeterministicRng::new(seed))
        .insert_resource(Time::<Fixed>::from_hz(PHYSICS_HZ));

    app
}

/// Snapshot мира для сравнения детерминизма
pub fn world_snapshot<T: Component>(world: &mut World) -> Vec<u8>
where
    T: std::fmt::Debug,
{
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &T)>();
    let mut entities: Vec<_> = query.iter(world).collect();

    // Сортируем по Entity ID для детерминизма
    entities.sort_by_key(|(entity, _)| entity.index());

    // Сериализуем в байты через Debug (простейший способ)
    for (entity, component) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}
